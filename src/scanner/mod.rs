//! QR payload scanner
//!
//! `QrScanner` owns one scanning session: the cooldown gate that drops
//! camera-feed re-triggers, the validity check, and the ordered
//! classification rules. Construct one per scanning screen and call
//! [`QrScanner::process`] for every decoded frame; the instance stays
//! usable after any outcome.

mod rules;
mod types;
mod wifi;

pub use rules::RuleSet;
pub use types::{ContentType, ScanOutcome, ScanResult};
pub use wifi::WifiNetwork;

use crate::config::ScannerConfig;
use crate::error::{Result, ScanError};
use crate::feedback::FeedbackEmitter;
use std::sync::Arc;
use std::time::Instant;

/// Stateful scan processor for a single scanning session
///
/// The only mutable state is the timestamp of the last accepted scan,
/// read and written by `process`. The intended caller is one serial scan
/// stream; concurrent streams would need their own instances.
pub struct QrScanner {
    rules: RuleSet,
    feedback: Arc<dyn FeedbackEmitter>,
    config: ScannerConfig,
    /// When the cooldown gate last opened; `None` until the first scan
    last_scan: Option<Instant>,
}

impl QrScanner {
    /// Create a scanner with the given configuration and feedback surface
    ///
    /// Fails if the configuration is invalid or a classification pattern
    /// does not compile.
    pub fn new(config: ScannerConfig, feedback: Arc<dyn FeedbackEmitter>) -> Result<Self> {
        config.validate()?;
        Ok(Self {
            rules: RuleSet::new()?,
            feedback,
            config,
            last_scan: None,
        })
    }

    /// Process one decoded QR payload
    ///
    /// Scans arriving inside the cooldown window return
    /// [`ScanOutcome::Throttled`] with no feedback cue and no state change.
    /// Otherwise the gate re-arms, the success cue fires, and the payload
    /// is validated and classified.
    pub fn process(&mut self, data: Option<&str>) -> ScanOutcome {
        if let Some(last) = self.last_scan {
            if last.elapsed() < self.config.cooldown() {
                tracing::trace!("Scan dropped by cooldown gate");
                return ScanOutcome::Throttled;
            }
        }
        self.last_scan = Some(Instant::now());

        // The cue fires for every gate-passing frame, before validation;
        // invalid payloads then get the error cue on top.
        self.feedback.notify_success();

        let trimmed = match data.map(str::trim) {
            Some(t) if !t.is_empty() => t,
            _ => {
                self.feedback.notify_error();
                tracing::debug!("Rejected empty scan payload");
                return ScanOutcome::Rejected(ScanError::InvalidInput(
                    "Invalid QR code data".to_string(),
                ));
            }
        };

        let result = self.rules.classify(trimmed);
        tracing::debug!(
            content_type = %result.content_type,
            actionable = result.actionable,
            "Classified scan payload"
        );
        ScanOutcome::Accepted(result)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::feedback::NullFeedback;
    use std::sync::atomic::{AtomicUsize, Ordering};

    /// Feedback emitter that counts cues for assertions
    #[derive(Default)]
    struct CountingFeedback {
        success: AtomicUsize,
        error: AtomicUsize,
    }

    impl FeedbackEmitter for CountingFeedback {
        fn notify_success(&self) {
            self.success.fetch_add(1, Ordering::SeqCst);
        }

        fn notify_error(&self) {
            self.error.fetch_add(1, Ordering::SeqCst);
        }
    }

    fn scanner() -> QrScanner {
        QrScanner::new(ScannerConfig::default(), Arc::new(NullFeedback)).unwrap()
    }

    #[test]
    fn test_accepts_and_classifies() {
        let mut scanner = scanner();
        let outcome = scanner.process(Some("https://example.com"));
        let result = outcome.result().expect("scan should be accepted");
        assert_eq!(result.content_type, ContentType::Url);
        assert_eq!(result.raw_data, "https://example.com");
    }

    #[test]
    fn test_trims_raw_data() {
        let mut scanner = scanner();
        let outcome = scanner.process(Some("  alice@example.com  "));
        let result = outcome.result().unwrap();
        assert_eq!(result.raw_data, "alice@example.com");
        assert_eq!(result.display_text, "Email: alice@example.com");
    }

    #[test]
    fn test_second_scan_inside_cooldown_throttled() {
        let mut scanner = scanner();
        assert!(scanner.process(Some("first.example.com")).result().is_some());
        // Distinct payload; still dropped because the gate is closed
        assert!(scanner.process(Some("second.example.com")).is_throttled());
    }

    #[test]
    fn test_gate_reopens_after_cooldown() {
        let config = ScannerConfig { cooldown_ms: 20 };
        let mut scanner = QrScanner::new(config, Arc::new(NullFeedback)).unwrap();
        assert!(scanner.process(Some("example.com")).result().is_some());
        std::thread::sleep(std::time::Duration::from_millis(30));
        assert!(scanner.process(Some("example.com")).result().is_some());
    }

    #[test]
    fn test_none_input_rejected() {
        let mut scanner = scanner();
        match scanner.process(None) {
            ScanOutcome::Rejected(ScanError::InvalidInput(msg)) => {
                assert!(msg.contains("Invalid"));
            }
            other => panic!("expected rejection, got {other:?}"),
        }
    }

    #[test]
    fn test_whitespace_input_rejected() {
        let mut scanner = scanner();
        match scanner.process(Some("   ")) {
            ScanOutcome::Rejected(ScanError::InvalidInput(_)) => {}
            other => panic!("expected rejection, got {other:?}"),
        }
    }

    #[test]
    fn test_scanner_usable_after_rejection() {
        let config = ScannerConfig { cooldown_ms: 10 };
        let mut scanner = QrScanner::new(config, Arc::new(NullFeedback)).unwrap();
        assert!(matches!(scanner.process(None), ScanOutcome::Rejected(_)));
        std::thread::sleep(std::time::Duration::from_millis(20));
        assert!(scanner.process(Some("tel:5551234")).result().is_some());
    }

    #[test]
    fn test_feedback_cues() {
        let feedback = Arc::new(CountingFeedback::default());
        let mut scanner =
            QrScanner::new(ScannerConfig::default(), feedback.clone()).unwrap();

        scanner.process(Some("example.com"));
        assert_eq!(feedback.success.load(Ordering::SeqCst), 1);
        assert_eq!(feedback.error.load(Ordering::SeqCst), 0);

        // Throttled scans emit no cue at all
        scanner.process(Some("example.org"));
        assert_eq!(feedback.success.load(Ordering::SeqCst), 1);
        assert_eq!(feedback.error.load(Ordering::SeqCst), 0);
    }

    #[test]
    fn test_invalid_input_emits_both_cues() {
        let feedback = Arc::new(CountingFeedback::default());
        let mut scanner =
            QrScanner::new(ScannerConfig::default(), feedback.clone()).unwrap();

        scanner.process(Some("  "));
        // Success cue fires when the gate opens, error cue on rejection
        assert_eq!(feedback.success.load(Ordering::SeqCst), 1);
        assert_eq!(feedback.error.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn test_invalid_config_rejected_at_construction() {
        let config = ScannerConfig { cooldown_ms: 0 };
        assert!(QrScanner::new(config, Arc::new(NullFeedback)).is_err());
    }
}
