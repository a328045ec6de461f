//! The transient input tuple for one render of a tool-invocation card.

use chrono::{DateTime, Utc};

use crate::content::ToolContent;
use crate::provider::{DetectedProvider, classify};

/// Inputs for one render pass of a tool-invocation card.
///
/// Created fresh per render; carries no identity beyond the pass. The shape
/// (two optional content blobs, two status flags, two timestamps) follows
/// the generic tool-view convention shared with other card components.
#[derive(Debug, Clone, PartialEq)]
pub struct ToolInvocationView {
    pub assistant_content: Option<ToolContent>,
    pub tool_content: Option<ToolContent>,
    pub is_success: bool,
    pub is_streaming: bool,
    pub assistant_timestamp: Option<DateTime<Utc>>,
    pub tool_timestamp: Option<DateTime<Utc>>,
}

impl Default for ToolInvocationView {
    fn default() -> Self {
        Self {
            assistant_content: None,
            tool_content: None,
            // Callers that omit the flag historically meant "succeeded".
            is_success: true,
            is_streaming: false,
            assistant_timestamp: None,
            tool_timestamp: None,
        }
    }
}

impl ToolInvocationView {
    /// Classify this invocation's provider.
    ///
    /// Assistant content takes precedence over tool content when both are
    /// present.
    #[must_use]
    pub fn detect(&self) -> DetectedProvider {
        classify(self.assistant_content.as_ref().or(self.tool_content.as_ref()))
    }

    /// Timestamp shown in the card footer: the tool-side timestamp once the
    /// invocation has finished, otherwise the assistant-side one.
    #[must_use]
    pub fn footer_timestamp(&self) -> Option<DateTime<Utc>> {
        if !self.is_streaming && self.tool_timestamp.is_some() {
            self.tool_timestamp
        } else {
            self.assistant_timestamp
        }
    }
}
