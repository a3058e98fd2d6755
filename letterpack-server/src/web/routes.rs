//! HTTP route handlers.

use std::path::Path;

use askama::Template;
use axum::body::Bytes;
use axum::{
    Json, Router,
    extract::{Query, State},
    http::{HeaderMap, StatusCode, header},
    response::{Html, IntoResponse, Response},
    routing::{get, post},
};
use chrono::Utc;
use tower_http::services::ServeDir;
use tracing::{debug, info, warn};

use crate::domain::validate;
use crate::scan::{DecodedText, ScanOutcome, prefilter};

use super::dto::*;
use super::state::AppState;
use super::templates::*;

/// Create the application router.
///
/// `static_dir` is the path to the static assets directory.
pub fn create_router(state: AppState, static_dir: impl AsRef<Path>) -> Router {
    Router::new()
        .route("/", get(index_page))
        .route("/health", get(health))
        .route("/about", get(about_page))
        .route("/api/config", get(scanner_config))
        .route("/api/validate", get(validate_number))
        .route("/api/scan", post(submit_scan))
        .nest_service("/static", ServeDir::new(static_dir))
        .with_state(state)
}

/// Health check endpoint.
async fn health() -> &'static str {
    "ok"
}

/// Scanner page.
async fn index_page() -> impl IntoResponse {
    Html(
        IndexTemplate
            .render()
            .unwrap_or_else(|e| format!("Template error: {}", e)),
    )
}

/// About page.
async fn about_page() -> impl IntoResponse {
    Html(
        AboutTemplate::default()
            .render()
            .unwrap_or_else(|e| format!("Template error: {}", e)),
    )
}

/// Decoder settings for the page.
async fn scanner_config(State(state): State<AppState>) -> Json<ConfigResponse> {
    Json(ConfigResponse {
        scanner: (*state.scanner).clone(),
        limits: (*state.limits).clone(),
    })
}

/// Check if request accepts HTML.
fn accepts_html(headers: &HeaderMap) -> bool {
    headers
        .get(header::ACCEPT)
        .and_then(|v| v.to_str().ok())
        .is_some_and(|accept| accept.contains("text/html"))
}

/// Validate a scanned or typed number.
///
/// Always succeeds for any input; failures are reported in the result.
async fn validate_number(
    headers: HeaderMap,
    Query(req): Query<ValidateRequest>,
) -> Result<Response, AppError> {
    let input = req.number.unwrap_or_default();
    let result = validate(&input);
    debug!(
        input = %input,
        valid = result.is_valid,
        kind = %result.kind,
        "validated tracking number"
    );

    // Return HTML or JSON based on Accept header
    if accepts_html(&headers) {
        let template = ResultCardTemplate {
            result: ResultView::from_result(&result),
        };
        let html = template.render().map_err(|e| AppError::Internal {
            message: format!("Template error: {}", e),
        })?;

        Ok(Html(html).into_response())
    } else {
        Ok(Json(result).into_response())
    }
}

/// Accept decoded barcode text from the browser.
///
/// Text that is not a 12-digit number is rejected with a notice rather than
/// an error status, since decoding the wrong symbol is routine.
async fn submit_scan(body: Bytes) -> Result<Json<ScanResponse>, AppError> {
    // Parse JSON manually so we can log the body on failure
    let req: ScanRequest = serde_json::from_slice(&body).map_err(|e| {
        warn!(error = %e, body = %String::from_utf8_lossy(&body), "invalid scan JSON");
        AppError::BadRequest {
            message: format!("Invalid JSON: {e}"),
        }
    })?;

    let response = match prefilter(DecodedText::from(req), Utc::now()) {
        ScanOutcome::Accepted(barcode) => {
            let validation = validate(&barcode.text);
            info!(
                id = %barcode.id,
                format = %barcode.format,
                valid = validation.is_valid,
                "accepted scan"
            );
            ScanResponse {
                accepted: true,
                message: None,
                barcode: Some(barcode),
                validation: Some(validation),
            }
        }
        ScanOutcome::Rejected { message } => ScanResponse {
            accepted: false,
            message: Some(message),
            barcode: None,
            validation: None,
        },
    };

    Ok(Json(response))
}

/// Application error type.
#[derive(Debug)]
pub enum AppError {
    BadRequest { message: String },
    Internal { message: String },
}

impl IntoResponse for AppError {
    fn into_response(self) -> axum::response::Response {
        let (status, message) = match self {
            AppError::BadRequest { message } => (StatusCode::BAD_REQUEST, message),
            AppError::Internal { message } => (StatusCode::INTERNAL_SERVER_ERROR, message),
        };

        warn!(%status, %message, "request failed");

        let body = Json(ErrorResponse { error: message });
        (status, body).into_response()
    }
}
