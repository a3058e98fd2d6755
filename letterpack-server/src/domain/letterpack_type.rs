//! Letterpack service subtype.

use std::fmt;

use serde::{Deserialize, Serialize};

/// The Letterpack service a tracking number belongs to.
///
/// Japan Post issues Letterpack Light and Letterpack Plus from distinct
/// number ranges. Anything outside those ranges (including strings that
/// are not 12 digits) is `Unknown`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum LetterpackType {
    #[serde(rename = "letterpack_light")]
    Light,
    #[serde(rename = "letterpack_plus")]
    Plus,
    #[serde(rename = "unknown")]
    Unknown,
}

impl LetterpackType {
    /// Classify a number by its four-digit prefix.
    ///
    /// The ranges are compared as fixed-width strings, so `"2300"` through
    /// `"2399"` is Light and `"2400"` through `"2499"` is Plus. Prefixes of
    /// any other width are `Unknown`.
    ///
    /// ```
    /// use letterpack_server::domain::LetterpackType;
    ///
    /// assert_eq!(LetterpackType::from_prefix("2301"), LetterpackType::Light);
    /// assert_eq!(LetterpackType::from_prefix("2499"), LetterpackType::Plus);
    /// assert_eq!(LetterpackType::from_prefix("2500"), LetterpackType::Unknown);
    /// ```
    pub fn from_prefix(prefix: &str) -> Self {
        if prefix.len() != 4 {
            return LetterpackType::Unknown;
        }
        if ("2300"..="2399").contains(&prefix) {
            LetterpackType::Light
        } else if ("2400"..="2499").contains(&prefix) {
            LetterpackType::Plus
        } else {
            LetterpackType::Unknown
        }
    }

    /// Wire name, as used in JSON.
    pub fn as_str(&self) -> &'static str {
        match self {
            LetterpackType::Light => "letterpack_light",
            LetterpackType::Plus => "letterpack_plus",
            LetterpackType::Unknown => "unknown",
        }
    }

    /// Label shown on the result card.
    pub fn label(&self) -> &'static str {
        match self {
            LetterpackType::Light => "レターパックライト",
            LetterpackType::Plus => "レターパックプラス",
            LetterpackType::Unknown => "追跡番号",
        }
    }
}

impl fmt::Display for LetterpackType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}


#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        /// String range test agrees with numeric range test on 4-digit prefixes
        #[test]
        fn agrees_with_numeric_ranges(n in 0u32..10000) {
            let prefix = format!("{:04}", n);
            let expected = match n {
                2300..=2399 => LetterpackType::Light,
                2400..=2499 => LetterpackType::Plus,
                _ => LetterpackType::Unknown,
            };
            prop_assert_eq!(LetterpackType::from_prefix(&prefix), expected);
        }
    }
}
