//! Qrscan - QR content classification and action dispatch
//!
//! Takes an already-decoded QR payload, determines its semantic type (url,
//! email, phone, wifi, sms, location, json, or plain text), formats it for
//! display, and binds the platform follow-up action for actionable types.
//! Camera integration, QR image decoding, UI, and persistence all live with
//! the caller; this crate only classifies strings and dispatches actions
//! through the platform seams it is handed.

pub mod action;
pub mod config;
pub mod error;
pub mod feedback;
pub mod scanner;

pub use action::{ActionDispatcher, UriOpener};
pub use config::ScannerConfig;
pub use error::{Result, ScanError};
pub use feedback::{FeedbackEmitter, NullFeedback};
pub use scanner::{ContentType, QrScanner, ScanOutcome, ScanResult};
