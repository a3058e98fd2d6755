//! Data transfer objects for web requests and responses.

use serde::{Deserialize, Serialize};

use crate::config::{AppLimits, ScannerConfig};
use crate::domain::ValidationResult;
use crate::scan::{BarcodeFormat, BarcodeResult, DecodedText, ScanSource};

/// Query for validating a number.
#[derive(Debug, Default, Deserialize)]
pub struct ValidateRequest {
    /// Raw number as scanned or typed; missing is treated as empty
    pub number: Option<String>,
}

/// Decoded barcode text submitted by the browser.
#[derive(Debug, Deserialize)]
pub struct ScanRequest {
    /// Decoded text, unmodified
    pub text: String,

    /// Symbology reported by the decoder
    #[serde(default)]
    pub format: BarcodeFormat,

    /// Camera or uploaded file
    #[serde(default)]
    pub source: ScanSource,

    /// Decoder confidence, if reported
    pub confidence: Option<f32>,
}

impl From<ScanRequest> for DecodedText {
    fn from(req: ScanRequest) -> Self {
        DecodedText {
            text: req.text,
            format: req.format,
            source: req.source,
            confidence: req.confidence,
        }
    }
}

/// Response to a scan submission.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ScanResponse {
    /// Whether the decoded text looked like a tracking number
    pub accepted: bool,

    /// Notice to show when not accepted
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,

    /// The accepted scan
    #[serde(skip_serializing_if = "Option::is_none")]
    pub barcode: Option<BarcodeResult>,

    /// Full validation of the accepted scan
    #[serde(skip_serializing_if = "Option::is_none")]
    pub validation: Option<ValidationResult>,
}

/// Configuration the page needs to start the decoder.
#[derive(Debug, Serialize)]
pub struct ConfigResponse {
    pub scanner: ScannerConfig,
    pub limits: AppLimits,
}

/// Error response.
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    /// Error message
    pub error: String,
}
