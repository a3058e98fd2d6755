//! Pre-filtering of decoded barcode text.
//!
//! A camera pointed at a parcel decodes every symbol it sees: postcodes,
//! product EANs, QR codes. Only strings carrying exactly 12 digits are
//! worth validating; the rest are reported back so the user can re-aim.

use chrono::{DateTime, Utc};
use tracing::debug;

use crate::domain::is_valid_tracking_number_format;

use super::barcode::{BarcodeFormat, BarcodeResult, ScanSource};

/// A string as handed over by the decoder.
#[derive(Debug, Clone, PartialEq)]
pub struct DecodedText {
    pub text: String,
    pub format: BarcodeFormat,
    pub source: ScanSource,
    pub confidence: Option<f32>,
}

impl DecodedText {
    /// Camera scan of unknown format.
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            format: BarcodeFormat::Unknown,
            source: ScanSource::Camera,
            confidence: None,
        }
    }

    /// Set the reported format.
    pub fn with_format(mut self, format: BarcodeFormat) -> Self {
        self.format = format;
        self
    }

    /// Set the source.
    pub fn with_source(mut self, source: ScanSource) -> Self {
        self.source = source;
        self
    }

    /// Set the decoder confidence.
    pub fn with_confidence(mut self, confidence: f32) -> Self {
        self.confidence = Some(confidence);
        self
    }
}

/// Result of pre-filtering one decoded string.
#[derive(Debug, Clone, PartialEq)]
pub enum ScanOutcome {
    /// Twelve digits found; ready for full validation.
    Accepted(BarcodeResult),

    /// Something was decoded but it is not a tracking number.
    Rejected { message: String },
}

/// Message shown when a decoded symbol is not a tracking number.
pub fn not_a_tracking_number_message(text: &str) -> String {
    format!("検出: {text} - 12桁の追跡番号ではありません")
}

/// Decide whether decoded text is a candidate tracking number.
///
/// Accepted scans are stamped with `now`; the id is its millisecond
/// timestamp.
pub fn prefilter(decoded: DecodedText, now: DateTime<Utc>) -> ScanOutcome {
    if !is_valid_tracking_number_format(&decoded.text) {
        debug!(text = %decoded.text, format = %decoded.format, "rejected decoded text");
        return ScanOutcome::Rejected {
            message: not_a_tracking_number_message(&decoded.text),
        };
    }

    ScanOutcome::Accepted(BarcodeResult {
        id: now.timestamp_millis().to_string(),
        text: decoded.text,
        format: decoded.format,
        timestamp: now,
        confidence: decoded.confidence,
        source: decoded.source,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2026, 1, 3, 10, 23, 0).unwrap()
    }

    #[test]
    fn accepts_twelve_digits() {
        let decoded = DecodedText::new("2301-2345-6786").with_format(BarcodeFormat::Codabar);

        let ScanOutcome::Accepted(result) = prefilter(decoded, now()) else {
            panic!("expected accepted scan");
        };
        assert_eq!(result.text, "2301-2345-6786");
        assert_eq!(result.format, BarcodeFormat::Codabar);
        assert_eq!(result.source, ScanSource::Camera);
        assert_eq!(result.timestamp, now());
        assert_eq!(result.id, now().timestamp_millis().to_string());
    }

    #[test]
    fn accepts_regardless_of_checksum() {
        let decoded = DecodedText::new("230123456780");
        assert!(matches!(
            prefilter(decoded, now()),
            ScanOutcome::Accepted(_)
        ));
    }

    #[test]
    fn rejects_other_symbols() {
        let decoded = DecodedText::new("4901234567894").with_format(BarcodeFormat::Ean13);
        assert_eq!(
            prefilter(decoded, now()),
            ScanOutcome::Rejected {
                message: "検出: 4901234567894 - 12桁の追跡番号ではありません".to_string()
            }
        );
    }

    #[test]
    fn rejects_empty() {
        assert!(matches!(
            prefilter(DecodedText::new(""), now()),
            ScanOutcome::Rejected { .. }
        ));
    }

    #[test]
    fn keeps_source_and_confidence() {
        let decoded = DecodedText::new("000000000000")
            .with_source(ScanSource::File)
            .with_confidence(0.75);

        let ScanOutcome::Accepted(result) = prefilter(decoded, now()) else {
            panic!("expected accepted scan");
        };
        assert_eq!(result.source, ScanSource::File);
        assert_eq!(result.confidence, Some(0.75));
    }
}
