//! Tool message content: free text or structured JSON.

use std::borrow::Cow;

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Content attached to one side of a tool invocation.
///
/// Tool payloads arrive either as plain text or as structured JSON;
/// `Option<ToolContent>` models absent content. The untagged representation
/// lets callers feed raw JSON payloads directly.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ToolContent {
    Text(String),
    Structured(Value),
}

impl ToolContent {
    /// Flatten the content to a single text blob.
    ///
    /// Structured JSON strings unwrap to their inner text; any other JSON
    /// value renders in its compact serialized form.
    #[must_use]
    pub fn to_text(&self) -> Cow<'_, str> {
        match self {
            Self::Text(text) | Self::Structured(Value::String(text)) => Cow::Borrowed(text),
            Self::Structured(value) => Cow::Owned(value.to_string()),
        }
    }
}

impl From<&str> for ToolContent {
    fn from(text: &str) -> Self {
        Self::Text(text.to_string())
    }
}

impl From<String> for ToolContent {
    fn from(text: String) -> Self {
        Self::Text(text)
    }
}

impl From<Value> for ToolContent {
    fn from(value: Value) -> Self {
        Self::Structured(value)
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn text_flattens_verbatim() {
        let content = ToolContent::from("plain text");
        assert_eq!(content.to_text(), "plain text");
    }

    #[test]
    fn structured_string_unwraps() {
        let content = ToolContent::from(json!("inner text"));
        assert_eq!(content.to_text(), "inner text");
    }

    #[test]
    fn structured_object_renders_compact() {
        let content = ToolContent::from(json!({"service": "zillow"}));
        assert_eq!(content.to_text(), r#"{"service":"zillow"}"#);
    }

    #[test]
    fn deserializes_untagged() {
        let text: ToolContent = serde_json::from_str(r#""hello""#).unwrap();
        assert_eq!(text, ToolContent::Text("hello".to_string()));

        let structured: ToolContent = serde_json::from_str(r#"{"a": 1}"#).unwrap();
        assert_eq!(structured, ToolContent::Structured(json!({"a": 1})));
    }
}
