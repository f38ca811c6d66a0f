//! Configuration for the Smart Irrigation server.
//!
//! All settings come from environment variables with code defaults, so a
//! bare `irrigation-server` starts a working development instance. A missing
//! or unloadable model artifact is NOT a configuration error: the server
//! degrades to health-check-only rather than refusing to start.
//!
//! Environment variables:
//! - `IRRIGATION_PORT`: HTTP port (default 5000)
//! - `IRRIGATION_MODEL_PATH`: predictor artifact (default models/irrigation_model.json)
//! - `IRRIGATION_INDEX_PATH`: browser page served at `/` (default static/index.html)
//! - `IRRIGATION_LOG_LEVEL`: default tracing directive when RUST_LOG is unset

use std::env;
use std::path::PathBuf;

/// Server configuration.
#[derive(Debug, Clone)]
pub struct Config {
    /// HTTP server port.
    pub port: u16,

    /// Path to the predictor artifact, loaded once at startup.
    pub model_path: PathBuf,

    /// Path to the static page served at `/`.
    pub index_path: PathBuf,

    /// Log level used when no environment filter is present.
    pub log_level: String,
}

fn default_port() -> u16 {
    5000
}

fn default_model_path() -> PathBuf {
    PathBuf::from("models/irrigation_model.json")
}

fn default_index_path() -> PathBuf {
    PathBuf::from("static/index.html")
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// Unparseable values fall back to their defaults; nothing here aborts
    /// startup.
    pub fn load() -> Self {
        Self {
            port: env::var("IRRIGATION_PORT")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or_else(default_port),
            model_path: env::var("IRRIGATION_MODEL_PATH")
                .map(PathBuf::from)
                .unwrap_or_else(|_| default_model_path()),
            index_path: env::var("IRRIGATION_INDEX_PATH")
                .map(PathBuf::from)
                .unwrap_or_else(|_| default_index_path()),
            log_level: env::var("IRRIGATION_LOG_LEVEL").unwrap_or_else(|_| default_log_level()),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            port: default_port(),
            model_path: default_model_path(),
            index_path: default_index_path(),
            log_level: default_log_level(),
        }
    }
}
