//! Japan Post tracking URL generation.
//!
//! Links straight to the carrier's "direct search" results page for a
//! single tracking number.

use super::tracking_number::normalize;

/// Japan Post direct-search endpoint.
pub const JAPAN_POST_TRACKING_URL: &str =
    "https://trackings.post.japanpost.jp/services/srv/search/direct";

/// General Letterpack service information page.
pub const JAPAN_POST_LETTERPACK_INFO_URL: &str = "https://www.post.japanpost.jp/service/letterpack/";

/// Locale passed to the tracking page.
const TRACKING_LOCALE: &str = "ja";

/// Generate a Japan Post tracking URL for a number.
///
/// Non-digit characters are stripped first. No checksum or length check is
/// performed; callers that want a meaningful link should validate first.
///
/// # Example
///
/// ```
/// use letterpack_server::domain::generate_tracking_url;
///
/// let url = generate_tracking_url("2301-2345-6786");
/// assert_eq!(
///     url,
///     "https://trackings.post.japanpost.jp/services/srv/search/direct?reqCodeNo1=230123456786&locale=ja"
/// );
/// ```
pub fn generate_tracking_url(number: &str) -> String {
    format!(
        "{}?reqCodeNo1={}&locale={}",
        JAPAN_POST_TRACKING_URL,
        normalize(number),
        TRACKING_LOCALE,
    )
}
