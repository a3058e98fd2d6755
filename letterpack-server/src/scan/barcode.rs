//! Decoded barcode types.

use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Barcode symbologies the browser decoder reports.
///
/// Unrecognised names deserialize as `Unknown` rather than failing, since
/// the decoder library may report formats we never asked for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum BarcodeFormat {
    #[serde(rename = "CODE_128")]
    Code128,
    #[serde(rename = "EAN_13")]
    Ean13,
    #[serde(rename = "EAN_8")]
    Ean8,
    #[serde(rename = "ITF")]
    Itf,
    #[serde(rename = "CODE_39")]
    Code39,
    #[serde(rename = "CODABAR")]
    Codabar,
    #[serde(rename = "QR_CODE")]
    QrCode,
    #[default]
    #[serde(rename = "UNKNOWN", other)]
    Unknown,
}

impl BarcodeFormat {
    /// Linear formats the scanner is configured to look for.
    pub const SUPPORTED: [BarcodeFormat; 6] = [
        BarcodeFormat::Code128,
        BarcodeFormat::Ean13,
        BarcodeFormat::Ean8,
        BarcodeFormat::Itf,
        BarcodeFormat::Code39,
        BarcodeFormat::Codabar,
    ];

    /// Name as reported by the decoder.
    pub fn as_str(&self) -> &'static str {
        match self {
            BarcodeFormat::Code128 => "CODE_128",
            BarcodeFormat::Ean13 => "EAN_13",
            BarcodeFormat::Ean8 => "EAN_8",
            BarcodeFormat::Itf => "ITF",
            BarcodeFormat::Code39 => "CODE_39",
            BarcodeFormat::Codabar => "CODABAR",
            BarcodeFormat::QrCode => "QR_CODE",
            BarcodeFormat::Unknown => "UNKNOWN",
        }
    }

    /// Whether the scanner is configured to decode this format.
    pub fn is_supported(&self) -> bool {
        Self::SUPPORTED.contains(self)
    }
}

impl fmt::Display for BarcodeFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Where a decoded string came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ScanSource {
    #[default]
    Camera,
    File,
}

/// A decoded barcode that looked like a tracking number.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BarcodeResult {
    /// Millisecond timestamp of the scan, as a string
    pub id: String,

    /// Decoded text exactly as the decoder produced it
    pub text: String,

    /// Reported symbology
    pub format: BarcodeFormat,

    /// When the scan was accepted
    pub timestamp: DateTime<Utc>,

    /// Decoder confidence, if reported
    #[serde(skip_serializing_if = "Option::is_none")]
    pub confidence: Option<f32>,

    /// Camera or uploaded image
    pub source: ScanSource,
}
