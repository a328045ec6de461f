//! Provider classification.
//!
//! Maps raw tool-invocation content to one of the supported data-provider
//! categories. An explicit marker tag wins over keyword scanning; keyword
//! scanning is first-match-wins in a fixed priority order, and anything
//! unmatched falls back to the default provider.

use std::fmt;
use std::str::FromStr;
use std::sync::LazyLock;

use regex::Regex;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::content::ToolContent;

/// Closed enumeration of supported data-provider categories.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ProviderKey {
    /// Default fallback for unclassifiable content.
    #[default]
    ProfessionalNetwork,
    SocialNetwork,
    RealEstate,
    Retail,
    Finance,
    Jobs,
    Weather,
}

impl ProviderKey {
    pub const ALL: [Self; 7] = [
        Self::ProfessionalNetwork,
        Self::SocialNetwork,
        Self::RealEstate,
        Self::Retail,
        Self::Finance,
        Self::Jobs,
        Self::Weather,
    ];

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::ProfessionalNetwork => "professional_network",
            Self::SocialNetwork => "social_network",
            Self::RealEstate => "real_estate",
            Self::Retail => "retail",
            Self::Finance => "finance",
            Self::Jobs => "jobs",
            Self::Weather => "weather",
        }
    }
}

impl fmt::Display for ProviderKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Error)]
#[error("unknown provider key: {0}")]
pub struct UnknownProviderError(pub String);

impl FromStr for ProviderKey {
    type Err = UnknownProviderError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "professional_network" => Ok(Self::ProfessionalNetwork),
            "social_network" => Ok(Self::SocialNetwork),
            "real_estate" => Ok(Self::RealEstate),
            "retail" => Ok(Self::Retail),
            "finance" => Ok(Self::Finance),
            "jobs" => Ok(Self::Jobs),
            "weather" => Ok(Self::Weather),
            other => Err(UnknownProviderError(other.to_string())),
        }
    }
}

/// Classification outcome.
///
/// Marker tags are trusted without validation, so the detected value can
/// fall outside the closed enumeration. `Unlisted` keeps that raw value
/// observable; display lookups go through [`DetectedProvider::key`], which
/// falls back to the default entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DetectedProvider {
    Known(ProviderKey),
    Unlisted(String),
}

impl Default for DetectedProvider {
    fn default() -> Self {
        Self::Known(ProviderKey::default())
    }
}

impl DetectedProvider {
    /// Provider key for display lookups.
    ///
    /// Unlisted values resolve to the default key so rendering always has a
    /// valid display entry.
    #[must_use]
    pub fn key(&self) -> ProviderKey {
        match self {
            Self::Known(key) => *key,
            Self::Unlisted(_) => ProviderKey::default(),
        }
    }

    /// The detected identifier, verbatim (already lower-cased).
    #[must_use]
    pub fn as_str(&self) -> &str {
        match self {
            Self::Known(key) => key.as_str(),
            Self::Unlisted(raw) => raw,
        }
    }

    /// Whether the detected identifier is a member of the enumeration.
    #[must_use]
    pub fn is_listed(&self) -> bool {
        matches!(self, Self::Known(_))
    }
}

impl fmt::Display for DetectedProvider {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Inline marker tag naming the intended provider, e.g.
/// `<get-data-provider-endpoints service_name="zillow">`.
static MARKER: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"<get-data-provider-endpoints\s+service_name="([^"]+)"\s*>"#)
        .expect("valid provider marker regex")
});

/// Keyword fallbacks, scanned in priority order; first match wins.
///
/// `weather` has a display entry but no keyword branch, so plain weather
/// requests fall through to the default provider.
const KEYWORDS: [(&str, ProviderKey); 8] = [
    ("linkedin", ProviderKey::ProfessionalNetwork),
    ("twitter", ProviderKey::SocialNetwork),
    ("zillow", ProviderKey::RealEstate),
    ("amazon", ProviderKey::Retail),
    ("yahoo", ProviderKey::Finance),
    ("finance", ProviderKey::Finance),
    ("jobs", ProviderKey::Jobs),
    ("active", ProviderKey::Jobs),
];

/// Classify tool content into a provider.
///
/// Total over all inputs: absent or unmatched content yields the default
/// fallback. A marker tag takes priority over keyword scanning and its
/// value is returned lower-cased without validation.
#[must_use]
pub fn classify(content: Option<&ToolContent>) -> DetectedProvider {
    let text = match content {
        Some(content) => content.to_text(),
        None => std::borrow::Cow::Borrowed(""),
    };

    if let Some(caps) = MARKER.captures(&text) {
        let value = caps[1].to_lowercase();
        return match ProviderKey::from_str(&value) {
            Ok(key) => DetectedProvider::Known(key),
            Err(UnknownProviderError(raw)) => DetectedProvider::Unlisted(raw),
        };
    }

    if text.is_empty() {
        return DetectedProvider::default();
    }

    let lowered = text.to_lowercase();
    for (needle, key) in KEYWORDS {
        if lowered.contains(needle) {
            return DetectedProvider::Known(key);
        }
    }

    DetectedProvider::default()
}
