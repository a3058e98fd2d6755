//! Server and scanner configuration.
//!
//! Defaults are compiled in. A JSON file named by `LETTERPACK_CONFIG` may
//! override any of them, and `LETTERPACK_ADDR` / `LETTERPACK_STATIC_DIR`
//! override the file.

use std::net::SocketAddr;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::scan::BarcodeFormat;

/// Environment variable naming an optional JSON config file.
pub const CONFIG_PATH_VAR: &str = "LETTERPACK_CONFIG";

/// Environment variable overriding the bind address.
pub const ADDR_VAR: &str = "LETTERPACK_ADDR";

/// Environment variable overriding the static asset directory.
pub const STATIC_DIR_VAR: &str = "LETTERPACK_STATIC_DIR";

/// Errors loading configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// Config file could not be read
    #[error("failed to read config file {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Config file is not valid JSON for this schema
    #[error("failed to parse config file {path}: {source}")]
    Json {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    /// Bind address override could not be parsed
    #[error("invalid bind address {value:?}: {source}")]
    InvalidAddr {
        value: String,
        #[source]
        source: std::net::AddrParseError,
    },
}

/// Top-level server configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    /// Address to listen on.
    pub bind_addr: SocketAddr,

    /// Directory served under `/static`.
    pub static_dir: PathBuf,

    /// Settings handed to the browser-side decoder.
    pub scanner: ScannerConfig,

    /// Client-side limits and timings.
    pub limits: AppLimits,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind_addr: SocketAddr::from(([127, 0, 0, 1], 3000)),
            static_dir: PathBuf::from("static"),
            scanner: ScannerConfig::default(),
            limits: AppLimits::default(),
        }
    }
}

impl ServerConfig {
    /// Load configuration from the process environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Load configuration using `lookup` in place of the environment.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let mut config = match lookup(CONFIG_PATH_VAR) {
            Some(path) => Self::from_file(&path)?,
            None => Self::default(),
        };

        if let Some(addr) = lookup(ADDR_VAR) {
            config.bind_addr = addr
                .parse()
                .map_err(|source| ConfigError::InvalidAddr { value: addr, source })?;
        }

        if let Some(dir) = lookup(STATIC_DIR_VAR) {
            config.static_dir = PathBuf::from(dir);
        }

        Ok(config)
    }

    /// Read a JSON config file. Missing fields take their defaults.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let contents = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        serde_json::from_str(&contents).map_err(|source| ConfigError::Json {
            path: path.to_path_buf(),
            source,
        })
    }
}

/// Scan region in pixels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct QrBox {
    pub width: u32,
    pub height: u32,
}

/// Browser decoder settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ScannerConfig {
    /// Frames per second to decode.
    pub fps: u32,

    /// Scan region.
    pub qrbox: QrBox,

    /// Viewfinder aspect ratio.
    pub aspect_ratio: f32,

    /// Skip mirrored decoding attempts.
    pub disable_flip: bool,

    /// Camera to request (`environment` is the rear camera).
    pub facing_mode: String,

    /// Symbologies to decode.
    pub formats: Vec<BarcodeFormat>,
}

impl Default for ScannerConfig {
    fn default() -> Self {
        Self {
            fps: 10,
            qrbox: QrBox {
                width: 300,
                height: 200,
            },
            aspect_ratio: 1.5,
            disable_flip: false,
            facing_mode: "environment".to_string(),
            formats: BarcodeFormat::SUPPORTED.to_vec(),
        }
    }
}

/// Limits and timings used by the page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct AppLimits {
    /// Attempts to start the camera before giving up.
    pub camera_retry_attempts: u32,

    /// Stop the camera if nothing is accepted within this time.
    pub scan_timeout_ms: u64,

    /// How long a "not a tracking number" notice stays visible.
    pub rejection_notice_ms: u64,
}

impl Default for AppLimits {
    fn default() -> Self {
        Self {
            camera_retry_attempts: 3,
            scan_timeout_ms: 30_000,
            rejection_notice_ms: 3_000,
        }
    }
}
