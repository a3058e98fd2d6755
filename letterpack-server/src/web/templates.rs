//! Askama templates for the web frontend.

use askama::Template;

use crate::domain::{
    JAPAN_POST_LETTERPACK_INFO_URL, LetterpackType, ValidationResult, WRONG_LENGTH_MESSAGE,
};

// ============================================================================
// Page Templates (extend base.html)
// ============================================================================

/// Scanner page.
#[derive(Template)]
#[template(path = "index.html")]
pub struct IndexTemplate;

/// About page.
#[derive(Template)]
#[template(path = "about.html")]
pub struct AboutTemplate {
    pub letterpack_info_url: &'static str,
}

impl Default for AboutTemplate {
    fn default() -> Self {
        Self {
            letterpack_info_url: JAPAN_POST_LETTERPACK_INFO_URL,
        }
    }
}

// ============================================================================
// Fragment Templates (AJAX responses, no base.html)
// ============================================================================

/// Validation result card.
#[derive(Template)]
#[template(path = "result_card.html")]
pub struct ResultCardTemplate {
    pub result: ResultView,
}

// ============================================================================
// View Models (for templates)
// ============================================================================

/// Validation result view model.
#[derive(Debug, Clone)]
pub struct ResultView {
    pub is_valid: bool,
    pub formatted_number: String,
    pub type_label: &'static str,
    pub type_class: &'static str,
    pub message: String,
    pub tracking_url: Option<String>,
    pub expected_check_digit: u8,
    pub actual_check_digit: u8,
    /// Check digit detail is only meaningful once the length gate passed
    pub show_check_digit: bool,
}

impl ResultView {
    /// Create from a validation result.
    pub fn from_result(result: &ValidationResult) -> Self {
        let type_class = match result.kind {
            LetterpackType::Light => "light",
            LetterpackType::Plus => "plus",
            LetterpackType::Unknown => "unknown",
        };

        Self {
            is_valid: result.is_valid,
            formatted_number: result.formatted_number.clone(),
            type_label: result.kind.label(),
            type_class,
            message: result.message.clone(),
            tracking_url: (!result.tracking_url.is_empty()).then(|| result.tracking_url.clone()),
            expected_check_digit: result.check_digit.expected,
            actual_check_digit: result.check_digit.actual,
            show_check_digit: result.message != WRONG_LENGTH_MESSAGE,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::validate;

    #[test]
    fn valid_result_view() {
        let view = ResultView::from_result(&validate("230123456786"));

        assert!(view.is_valid);
        assert_eq!(view.formatted_number, "2301-2345-6786");
        assert_eq!(view.type_label, "レターパックライト");
        assert_eq!(view.type_class, "light");
        assert!(view.tracking_url.is_some());
        assert!(view.show_check_digit);
    }

    #[test]
    fn checksum_failure_view() {
        let view = ResultView::from_result(&validate("240123456781"));

        assert!(!view.is_valid);
        assert_eq!(view.type_class, "plus");
        assert_eq!(view.tracking_url, None);
        assert_eq!(view.expected_check_digit, 0);
        assert_eq!(view.actual_check_digit, 1);
        assert!(view.show_check_digit);
    }

    #[test]
    fn wrong_length_view() {
        let view = ResultView::from_result(&validate("12345"));

        assert!(!view.is_valid);
        assert_eq!(view.type_label, "追跡番号");
        assert!(!view.show_check_digit);
    }

    #[test]
    fn wrong_length_hides_check_digit_even_when_grouped() {
        // Thirteen digits typed in groups of four
        let view = ResultView::from_result(&validate("2301-2345-6786-0"));

        assert_eq!(view.formatted_number, "2301-2345-6786-0");
        assert!(!view.show_check_digit);
    }

    #[test]
    fn result_card_hides_check_digit_on_wrong_length() {
        let html = ResultCardTemplate {
            result: ResultView::from_result(&validate("12345")),
        }
        .render()
        .unwrap();

        assert!(!html.contains("check-digit"));
        assert!(html.contains("12桁の数字である必要があります"));
    }

    #[test]
    fn result_card_renders_link_when_valid() {
        let html = ResultCardTemplate {
            result: ResultView::from_result(&validate("000000000000")),
        }
        .render()
        .unwrap();

        assert!(html.contains("0000-0000-0000"));
        assert!(html.contains("reqCodeNo1=000000000000"));
    }

    #[test]
    fn result_card_omits_link_when_invalid() {
        let html = ResultCardTemplate {
            result: ResultView::from_result(&validate("230123456780")),
        }
        .render()
        .unwrap();

        assert!(html.contains("2301-2345-6780"));
        assert!(!html.contains("reqCodeNo1"));
    }
}
