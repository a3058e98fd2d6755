//! Domain types for Letterpack tracking numbers.
//!
//! Everything here is pure: parsing, checksum, classification and link
//! generation take strings in and hand owned values back, with no I/O or
//! shared state.

mod letterpack_type;
mod tracking_number;
mod tracking_url;
mod validation;

pub use letterpack_type::LetterpackType;
pub use tracking_number::{InvalidTrackingNumber, TRACKING_NUMBER_LEN, TrackingNumber, normalize};
pub use tracking_url::{
    JAPAN_POST_LETTERPACK_INFO_URL, JAPAN_POST_TRACKING_URL, generate_tracking_url,
};
pub use validation::{
    CheckDigit, VALID_MESSAGE, ValidationResult, WRONG_LENGTH_MESSAGE,
    check_digit_mismatch_message, format_tracking_number, is_valid_tracking_number_format,
    validate,
};
