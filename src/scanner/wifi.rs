//! WiFi QR payload parsing
//!
//! Payloads follow the de-facto `WIFI:S:<ssid>;T:<security>;P:<password>;`
//! format: semicolon-delimited segments, each tagged by a one-letter key.

use serde::{Deserialize, Serialize};

/// Credentials parsed from a `WIFI:` payload
///
/// Missing keys default to the empty string.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct WifiNetwork {
    pub ssid: String,
    pub password: String,
    pub security: String,
}

impl WifiNetwork {
    /// Parse the body of a `WIFI:` payload (prefix already stripped)
    pub fn parse(body: &str) -> Self {
        let mut network = Self::default();
        for segment in body.split(';') {
            if let Some(value) = segment.strip_prefix("S:") {
                network.ssid = value.to_string();
            } else if let Some(value) = segment.strip_prefix("P:") {
                network.password = value.to_string();
            } else if let Some(value) = segment.strip_prefix("T:") {
                network.security = value.to_string();
            }
        }
        network
    }
}
