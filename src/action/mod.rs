//! Action execution for classified scans
//!
//! Each actionable content type binds to one platform follow-up: open the
//! browser, compose an email or SMS, place a call, open a map search. The
//! dispatcher normalizes the raw payload into a scheme-prefixed URI, asks
//! the platform whether it can handle it, and opens it. The platform
//! surface itself (deep links, intents) lives behind [`UriOpener`].

use crate::error::{Result, ScanError};
use crate::scanner::{ContentType, ScanResult};
use async_trait::async_trait;
use std::sync::Arc;

/// Web endpoint used for map searches; both `geo:` payloads and bare
/// coordinate pairs funnel through it
const MAP_SEARCH_URL: &str = "https://www.google.com/maps/search/?api=1&query=";

/// Platform capability-check and open surface
#[async_trait]
pub trait UriOpener: Send + Sync {
    /// Whether the platform has a handler for `uri`
    async fn can_open(&self, uri: &str) -> anyhow::Result<bool>;

    /// Open `uri` with the platform handler
    async fn open(&self, uri: &str) -> anyhow::Result<()>;
}

/// Dispatches the follow-up action bound to a scan result
///
/// Stateless apart from the shared opener; concurrent `execute` calls are
/// independent and are neither coordinated nor deduplicated here. The scan
/// cooldown only governs `QrScanner::process`.
pub struct ActionDispatcher {
    opener: Arc<dyn UriOpener>,
}

impl ActionDispatcher {
    pub fn new(opener: Arc<dyn UriOpener>) -> Self {
        Self { opener }
    }

    /// Execute the action bound to `result`
    ///
    /// Fails with [`ScanError::NoActionAvailable`] for non-actionable types,
    /// [`ScanError::ActionUnsupported`] when the platform reports no handler
    /// for the normalized URI, and [`ScanError::ActionExecution`] for any
    /// platform-level failure. No retries; a failed open stays failed.
    pub async fn execute(&self, result: &ScanResult) -> Result<()> {
        let uri = match normalize_uri(result) {
            Some(uri) => uri,
            None => {
                tracing::debug!(
                    content_type = %result.content_type,
                    "No action bound to content type"
                );
                return Err(ScanError::NoActionAvailable {
                    content_type: result.content_type,
                });
            }
        };

        let capable = self
            .opener
            .can_open(&uri)
            .await
            .map_err(ScanError::ActionExecution)?;
        if !capable {
            tracing::warn!(%uri, "Platform has no handler for URI");
            return Err(ScanError::ActionUnsupported { uri });
        }

        tracing::info!(%uri, "Opening URI");
        self.opener
            .open(&uri)
            .await
            .map_err(ScanError::ActionExecution)
    }
}

/// Normalize a scan payload into the scheme-prefixed URI its action opens,
/// or `None` when the type has no action
fn normalize_uri(result: &ScanResult) -> Option<String> {
    let raw = result.raw_data.as_str();
    match result.content_type {
        ContentType::Url => {
            if raw.starts_with("http://") || raw.starts_with("https://") {
                Some(raw.to_string())
            } else {
                Some(format!("https://{raw}"))
            }
        }
        ContentType::Email => Some(with_prefix(raw, "mailto:")),
        ContentType::Phone => Some(with_prefix(raw, "tel:")),
        // Classification accepts the uppercase `SMS:` prefix too, so the
        // already-prefixed check must be case-insensitive
        ContentType::Sms => {
            if raw.get(..4).is_some_and(|p| p.eq_ignore_ascii_case("sms:")) {
                Some(raw.to_string())
            } else {
                Some(format!("sms:{raw}"))
            }
        }
        ContentType::Location => {
            let coords = raw.strip_prefix("geo:").unwrap_or(raw);
            Some(format!("{MAP_SEARCH_URL}{coords}"))
        }
        ContentType::Wifi | ContentType::Json | ContentType::Text => None,
    }
}

fn with_prefix(raw: &str, prefix: &str) -> String {
    if raw.starts_with(prefix) {
        raw.to_string()
    } else {
        format!("{prefix}{raw}")
    }
}
