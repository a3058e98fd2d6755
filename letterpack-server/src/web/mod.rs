//! Web layer for the Letterpack scanner.
//!
//! Serves the scanning page and exposes validation to the browser-side
//! barcode decoder.

mod dto;
mod routes;
mod state;
pub mod templates;

pub use dto::*;
pub use routes::{AppError, create_router};
pub use state::AppState;
pub use templates::*;
