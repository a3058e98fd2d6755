//! Intake of barcode text decoded by the browser.
//!
//! Symbol decoding happens client-side; this module only describes what the
//! decoder hands over and filters out strings that cannot be tracking
//! numbers before they reach validation.

mod barcode;
mod intake;

pub use barcode::{BarcodeFormat, BarcodeResult, ScanSource};
pub use intake::{DecodedText, ScanOutcome, not_a_tracking_number_message, prefilter};
