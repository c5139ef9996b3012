//! Ordered classification rules
//!
//! Rules are evaluated in a fixed priority sequence and the first match
//! wins. Categories overlap (a bare digit string satisfies both the phone
//! shape and valid JSON), so the order is part of the contract: generic
//! url/email shapes first, then the unambiguous scheme prefixes, then the
//! structured fallbacks, then plain text.

use crate::error::{Result, ScanError};
use crate::scanner::types::{ContentType, ScanResult};
use crate::scanner::wifi::WifiNetwork;
use regex::Regex;

/// Payload prefix marking WiFi credential codes
const WIFI_PREFIX: &str = "WIFI:";

/// One classification rule: returns a result if the payload matches
type Matcher = fn(&RuleSet, &str) -> Option<ScanResult>;

/// Priority-ordered rule table; adding a type is an insertion at the
/// correct position, never a reorder
const RULES: &[Matcher] = &[
    RuleSet::match_url,
    RuleSet::match_email,
    RuleSet::match_phone,
    RuleSet::match_wifi,
    RuleSet::match_sms,
    RuleSet::match_location,
    RuleSet::match_json,
];

/// Pre-compiled classification patterns
///
/// Compiled once at construction and reused for every scan, mirroring the
/// lifetime of the scanner instance that owns it.
pub struct RuleSet {
    /// Host-like shape: optional scheme, dotted labels, optional path.
    /// Deliberately broad; see `classify` for the over-match caveat.
    url: Regex,
    /// local@domain.tld shape
    email: Regex,
    /// Digits with optional leading `+`, after formatting is stripped
    phone: Regex,
    /// Bare `<lat>,<lon>` decimal pair
    location: Regex,
}

impl RuleSet {
    /// Compile the rule patterns
    pub fn new() -> Result<Self> {
        Ok(Self {
            url: compile("url", r"^(https?://)?([A-Za-z0-9-]+\.)+[A-Za-z0-9-]{2,}(/\S*)?$")?,
            email: compile("email", r"^[^\s@]+@[^\s@]+\.[^\s@]+$")?,
            phone: compile("phone", r"^\+?[1-9][0-9]{0,15}$")?,
            location: compile("location", r"^-?[0-9]+(\.[0-9]+)?\s*,\s*-?[0-9]+(\.[0-9]+)?$")?,
        })
    }

    /// Classify a trimmed, non-empty payload
    ///
    /// Pure function of the input: the same payload always yields the same
    /// result. Anything no rule claims falls through to `text` with the
    /// payload rendered verbatim.
    ///
    /// The url shape knowingly over-matches dotted tokens with no scheme
    /// (`report.final` classifies as url). The behavior is kept as-is;
    /// narrowing it would reclassify payloads mid-release.
    pub fn classify(&self, data: &str) -> ScanResult {
        for rule in RULES {
            if let Some(result) = rule(self, data) {
                return result;
            }
        }
        ScanResult::new(data, ContentType::Text, data)
    }

    fn match_url(&self, data: &str) -> Option<ScanResult> {
        if data.starts_with("http://") || data.starts_with("https://") || self.url.is_match(data) {
            let display = format!("Website: {data}");
            return Some(ScanResult::new(data, ContentType::Url, display));
        }
        None
    }

    fn match_email(&self, data: &str) -> Option<ScanResult> {
        if data.starts_with("mailto:") || self.email.is_match(data) {
            let display = format!("Email: {data}");
            return Some(ScanResult::new(data, ContentType::Email, display));
        }
        None
    }

    fn match_phone(&self, data: &str) -> Option<ScanResult> {
        let stripped: String = data
            .chars()
            .filter(|c| !matches!(c, ' ' | '-' | '(' | ')'))
            .collect();
        if data.starts_with("tel:") || self.phone.is_match(&stripped) {
            let display = format!("Phone: {data}");
            return Some(ScanResult::new(data, ContentType::Phone, display));
        }
        None
    }

    fn match_wifi(&self, data: &str) -> Option<ScanResult> {
        let body = data.strip_prefix(WIFI_PREFIX)?;
        let network = WifiNetwork::parse(body);
        let display = format!("WiFi Network: {}", network.ssid);
        Some(ScanResult::new(data, ContentType::Wifi, display))
    }

    fn match_sms(&self, data: &str) -> Option<ScanResult> {
        if data.starts_with("sms:") || data.starts_with("SMS:") {
            let display = format!("SMS: {data}");
            return Some(ScanResult::new(data, ContentType::Sms, display));
        }
        None
    }

    fn match_location(&self, data: &str) -> Option<ScanResult> {
        if data.starts_with("geo:") || self.location.is_match(data) {
            let display = format!("Location: {data}");
            return Some(ScanResult::new(data, ContentType::Location, display));
        }
        None
    }

    fn match_json(&self, data: &str) -> Option<ScanResult> {
        if serde_json::from_str::<serde_json::Value>(data).is_ok() {
            return Some(ScanResult::new(data, ContentType::Json, "JSON Data"));
        }
        None
    }
}

fn compile(name: &str, pattern: &str) -> Result<Regex> {
    Regex::new(pattern).map_err(|e| ScanError::Pattern {
        name: name.to_string(),
        message: e.to_string(),
    })
}
