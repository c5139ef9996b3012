//! Scan result data model

use crate::error::ScanError;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Semantic category of a scanned payload
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ContentType {
    Url,
    Email,
    Phone,
    Wifi,
    Sms,
    Location,
    Json,
    Text,
}

impl ContentType {
    /// Whether a platform follow-up action exists for this type
    pub fn is_actionable(&self) -> bool {
        matches!(
            self,
            Self::Url | Self::Email | Self::Phone | Self::Sms | Self::Location
        )
    }

    /// Label describing the bound action, `None` for non-actionable types
    pub fn action_label(&self) -> Option<&'static str> {
        match self {
            Self::Url => Some("Open in Browser"),
            Self::Email => Some("Send Email"),
            Self::Phone => Some("Call"),
            Self::Sms => Some("Send SMS"),
            Self::Location => Some("Open in Maps"),
            Self::Wifi | Self::Json | Self::Text => None,
        }
    }
}

impl fmt::Display for ContentType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Url => "url",
            Self::Email => "email",
            Self::Phone => "phone",
            Self::Wifi => "wifi",
            Self::Sms => "sms",
            Self::Location => "location",
            Self::Json => "json",
            Self::Text => "text",
        };
        f.write_str(name)
    }
}

/// Classification of one accepted scan
///
/// Constructed fresh per scan and never mutated afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScanResult {
    /// Trimmed original input, never empty
    pub raw_data: String,
    /// Classification outcome
    pub content_type: ContentType,
    /// Human-readable rendering with a type-specific prefix
    pub display_text: String,
    /// Whether an action exists for this type
    pub actionable: bool,
    /// Label describing the bound action, `None` if not actionable
    pub action_label: Option<String>,
}

impl ScanResult {
    /// Build a result for `content_type`, deriving the actionable flag and
    /// label from the type so the two can never disagree
    pub(crate) fn new(
        raw_data: impl Into<String>,
        content_type: ContentType,
        display_text: impl Into<String>,
    ) -> Self {
        Self {
            raw_data: raw_data.into(),
            content_type,
            display_text: display_text.into(),
            actionable: content_type.is_actionable(),
            action_label: content_type.action_label().map(str::to_string),
        }
    }
}

/// Outcome of one call to `QrScanner::process`
///
/// Exactly one variant is produced per call. `Throttled` corresponds to a
/// scan suppressed by the cooldown gate: no feedback cue, no state change.
#[derive(Debug)]
pub enum ScanOutcome {
    /// Payload accepted and classified
    Accepted(ScanResult),
    /// Payload rejected before classification
    Rejected(ScanError),
    /// Scan arrived inside the cooldown window and was dropped
    Throttled,
}

impl ScanOutcome {
    /// The classification, if the scan was accepted
    pub fn result(&self) -> Option<&ScanResult> {
        match self {
            Self::Accepted(result) => Some(result),
            _ => None,
        }
    }

    pub fn is_throttled(&self) -> bool {
        matches!(self, Self::Throttled)
    }
}
