//! Tracking number validation.
//!
//! Validation never fails: wrong digit counts and checksum mismatches are
//! reported as data in [`ValidationResult`], so any string a barcode
//! decoder or a user produces can be passed straight through.

use serde::{Deserialize, Serialize};

use super::letterpack_type::LetterpackType;
use super::tracking_number::{TRACKING_NUMBER_LEN, TrackingNumber, normalize};
use super::tracking_url::generate_tracking_url;

/// Message for input that does not contain exactly 12 digits.
pub const WRONG_LENGTH_MESSAGE: &str = "12桁の数字である必要があります";

/// Message for a number whose check digit matches.
pub const VALID_MESSAGE: &str = "有効なレターパック追跡番号です";

/// Message for a checksum mismatch, naming both digits.
pub fn check_digit_mismatch_message(expected: u8, actual: u8) -> String {
    format!("チェックデジットが不正です（期待値: {expected}, 実際: {actual}）")
}

/// Expected versus embedded check digit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CheckDigit {
    /// Digit sum of the body modulo 7 (0-6)
    pub expected: u8,

    /// The 12th digit as scanned (0-9)
    pub actual: u8,

    /// Whether the two agree
    pub is_valid: bool,
}

impl CheckDigit {
    /// Placeholder used when the input never reached checksum computation.
    const NOT_COMPUTED: CheckDigit = CheckDigit {
        expected: 0,
        actual: 0,
        is_valid: false,
    };

    /// Compute the check digit detail for a tracking number.
    pub fn of(number: &TrackingNumber) -> Self {
        let expected = number.expected_check_digit();
        let actual = number.check_digit();
        Self {
            expected,
            actual,
            is_valid: expected == actual,
        }
    }
}

/// Outcome of validating one scanned or typed string.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ValidationResult {
    /// 12 digits and a matching check digit
    pub is_valid: bool,

    /// `NNNN-NNNN-NNNN` for 12 digits, otherwise the input as given
    pub formatted_number: String,

    /// Check digit detail
    pub check_digit: CheckDigit,

    /// Japan Post tracking link, empty unless valid
    pub tracking_url: String,

    /// Human-readable status
    pub message: String,

    /// Service subtype from the prefix, regardless of validity
    #[serde(rename = "type")]
    pub kind: LetterpackType,
}

impl ValidationResult {
    fn wrong_length(input: &str) -> Self {
        Self {
            is_valid: false,
            formatted_number: input.to_string(),
            check_digit: CheckDigit::NOT_COMPUTED,
            tracking_url: String::new(),
            message: WRONG_LENGTH_MESSAGE.to_string(),
            kind: LetterpackType::Unknown,
        }
    }

    fn for_number(number: &TrackingNumber) -> Self {
        let check_digit = CheckDigit::of(number);

        let (tracking_url, message) = if check_digit.is_valid {
            (
                generate_tracking_url(number.as_str()),
                VALID_MESSAGE.to_string(),
            )
        } else {
            (
                String::new(),
                check_digit_mismatch_message(check_digit.expected, check_digit.actual),
            )
        };

        Self {
            is_valid: check_digit.is_valid,
            formatted_number: number.formatted(),
            check_digit,
            tracking_url,
            message,
            kind: LetterpackType::from_prefix(number.prefix()),
        }
    }
}

/// Validate a raw tracking number string.
///
/// # Examples
///
/// ```
/// use letterpack_server::domain::{LetterpackType, validate};
///
/// let result = validate("2301-2345-6786");
/// assert!(result.is_valid);
/// assert_eq!(result.kind, LetterpackType::Light);
///
/// // Checksum mismatch: still formatted and classified, but no link
/// let result = validate("230123456780");
/// assert!(!result.is_valid);
/// assert_eq!(result.formatted_number, "2301-2345-6780");
/// assert!(result.tracking_url.is_empty());
/// ```
pub fn validate(input: &str) -> ValidationResult {
    match TrackingNumber::parse(input) {
        Ok(number) => ValidationResult::for_number(&number),
        Err(_) => ValidationResult::wrong_length(input),
    }
}

/// Group a number as `NNNN-NNNN-NNNN`.
///
/// If the input does not contain exactly 12 digits it is returned unchanged.
pub fn format_tracking_number(input: &str) -> String {
    match TrackingNumber::parse(input) {
        Ok(number) => number.formatted(),
        Err(_) => input.to_string(),
    }
}

/// Whether the input contains exactly 12 digits once punctuation is removed.
///
/// A cheap pre-filter for freshly decoded barcodes; says nothing about the
/// check digit.
pub fn is_valid_tracking_number_format(input: &str) -> bool {
    normalize(input).len() == TRACKING_NUMBER_LEN
}
