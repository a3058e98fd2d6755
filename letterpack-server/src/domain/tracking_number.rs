//! Letterpack tracking number type.

use std::fmt;

/// Number of digits in a Letterpack tracking number.
pub const TRACKING_NUMBER_LEN: usize = 12;

/// Error returned when a string does not normalize to a tracking number.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid tracking number: expected 12 digits, found {digits}")]
pub struct InvalidTrackingNumber {
    /// Digits remaining after normalization.
    pub digits: usize,
}

/// Strip every character that is not an ASCII digit.
///
/// Scanned barcodes and typed input may carry hyphens, spaces or stray
/// symbols; only the digits are significant.
///
/// ```
/// use letterpack_server::domain::normalize;
///
/// assert_eq!(normalize("2301-2345 6780"), "230123456780");
/// assert_eq!(normalize("abc"), "");
/// ```
pub fn normalize(input: &str) -> String {
    input.chars().filter(char::is_ascii_digit).collect()
}

/// A 12-digit Letterpack tracking number.
///
/// The first 11 digits are the body and the last digit is the check digit.
/// Holding a `TrackingNumber` only guarantees the shape; whether the check
/// digit matches is a separate question answered by
/// [`TrackingNumber::has_valid_check_digit`].
///
/// # Examples
///
/// ```
/// use letterpack_server::domain::TrackingNumber;
///
/// let n = TrackingNumber::parse("2301-2345-6780").unwrap();
/// assert_eq!(n.as_str(), "230123456780");
/// assert_eq!(n.formatted(), "2301-2345-6780");
///
/// // Too few digits once punctuation is removed
/// assert!(TrackingNumber::parse("230-1234-567X6").is_err());
/// ```
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct TrackingNumber([u8; TRACKING_NUMBER_LEN]);

impl TrackingNumber {
    /// Parse a tracking number from raw scanned or typed text.
    ///
    /// Non-digit characters are discarded first; the remaining digits must
    /// number exactly 12.
    pub fn parse(input: &str) -> Result<Self, InvalidTrackingNumber> {
        let digits = normalize(input);
        let bytes: [u8; TRACKING_NUMBER_LEN] =
            digits
                .as_bytes()
                .try_into()
                .map_err(|_| InvalidTrackingNumber {
                    digits: digits.len(),
                })?;
        Ok(TrackingNumber(bytes))
    }

    /// Returns the 12 digits as a string slice.
    pub fn as_str(&self) -> &str {
        // Only ASCII digits are ever stored
        std::str::from_utf8(&self.0).unwrap_or_default()
    }

    /// The first 11 digits, over which the checksum is computed.
    pub fn body(&self) -> &str {
        &self.as_str()[..TRACKING_NUMBER_LEN - 1]
    }

    /// The four-digit prefix that identifies the service subtype.
    pub fn prefix(&self) -> &str {
        &self.as_str()[..4]
    }

    /// The check digit embedded as the 12th digit.
    pub fn check_digit(&self) -> u8 {
        self.0[TRACKING_NUMBER_LEN - 1] - b'0'
    }

    /// The check digit the body calls for: digit sum modulo 7.
    pub fn expected_check_digit(&self) -> u8 {
        let sum: u32 = self.0[..TRACKING_NUMBER_LEN - 1]
            .iter()
            .map(|b| u32::from(b - b'0'))
            .sum();
        (sum % 7) as u8
    }

    /// Whether the embedded check digit matches the computed one.
    pub fn has_valid_check_digit(&self) -> bool {
        self.check_digit() == self.expected_check_digit()
    }

    /// Display form grouped in fours: `NNNN-NNNN-NNNN`.
    pub fn formatted(&self) -> String {
        let s = self.as_str();
        format!("{}-{}-{}", &s[0..4], &s[4..8], &s[8..12])
    }
}

impl fmt::Debug for TrackingNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "TrackingNumber({})", self.as_str())
    }
}

impl fmt::Display for TrackingNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn normalize_strips_non_digits() {
        assert_eq!(normalize("2301-2345-6780"), "230123456780");
        assert_eq!(normalize(" 2301 2345 6780\n"), "230123456780");
        assert_eq!(normalize("abc-240123456781"), "240123456781");
        assert_eq!(normalize(""), "");
    }

    #[test]
    fn normalize_ignores_non_ascii_digits() {
        // Full-width digits are not ASCII digits
        assert_eq!(normalize("２３０１"), "");
        assert_eq!(normalize("٣4"), "4");
    }

    #[test]
    fn parse_twelve_digits() {
        assert!(TrackingNumber::parse("230123456780").is_ok());
        assert!(TrackingNumber::parse("000000000000").is_ok());
        assert!(TrackingNumber::parse("2301-2345-6780").is_ok());
    }

    #[test]
    fn reject_wrong_digit_count() {
        assert_eq!(
            TrackingNumber::parse(""),
            Err(InvalidTrackingNumber { digits: 0 })
        );
        assert_eq!(
            TrackingNumber::parse("230-1234-567X6"),
            Err(InvalidTrackingNumber { digits: 11 })
        );
        assert_eq!(
            TrackingNumber::parse("2301234567801"),
            Err(InvalidTrackingNumber { digits: 13 })
        );
    }

    #[test]
    fn error_display() {
        let err = TrackingNumber::parse("123").unwrap_err();
        assert_eq!(
            err.to_string(),
            "invalid tracking number: expected 12 digits, found 3"
        );
    }

    #[test]
    fn parts() {
        let n = TrackingNumber::parse("230123456780").unwrap();
        assert_eq!(n.body(), "23012345678");
        assert_eq!(n.prefix(), "2301");
        assert_eq!(n.check_digit(), 0);
    }

    #[test]
    fn expected_check_digit_is_sum_mod_7() {
        // 2+3+0+1+2+3+4+5+6+7+8 = 41, 41 % 7 = 6
        let n = TrackingNumber::parse("230123456780").unwrap();
        assert_eq!(n.expected_check_digit(), 6);
        assert!(!n.has_valid_check_digit());

        let n = TrackingNumber::parse("230123456786").unwrap();
        assert!(n.has_valid_check_digit());
    }

    #[test]
    fn all_zeros_is_valid() {
        let n = TrackingNumber::parse("000000000000").unwrap();
        assert_eq!(n.expected_check_digit(), 0);
        assert!(n.has_valid_check_digit());
    }

    #[test]
    fn formatted() {
        let n = TrackingNumber::parse("230123456780").unwrap();
        assert_eq!(n.formatted(), "2301-2345-6780");
    }

    #[test]
    fn display_and_debug() {
        let n = TrackingNumber::parse("2401-2345-6781").unwrap();
        assert_eq!(format!("{}", n), "240123456781");
        assert_eq!(format!("{:?}", n), "TrackingNumber(240123456781)");
    }
}
