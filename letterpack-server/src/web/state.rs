//! Application state for the web layer.

use std::sync::Arc;

use crate::config::{AppLimits, ScannerConfig, ServerConfig};

/// Shared application state.
///
/// Validation is stateless, so the only shared data is read-only
/// configuration handed to the page.
#[derive(Clone)]
pub struct AppState {
    /// Browser decoder settings
    pub scanner: Arc<ScannerConfig>,

    /// Client-side limits
    pub limits: Arc<AppLimits>,
}

impl AppState {
    /// Create a new app state.
    pub fn new(scanner: ScannerConfig, limits: AppLimits) -> Self {
        Self {
            scanner: Arc::new(scanner),
            limits: Arc::new(limits),
        }
    }

    /// Build state from the server configuration.
    pub fn from_config(config: &ServerConfig) -> Self {
        Self::new(config.scanner.clone(), config.limits.clone())
    }
}
