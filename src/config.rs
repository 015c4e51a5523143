//! Application configuration loaded from environment variables.
//!
//! Configuration is loaded once at startup, optionally overridden by command
//! line flags, and validated before the server starts.
//!
//! ## Variables
//!
//! - `LISTEN` - Bind address (default: `0.0.0.0:8080`)
//! - `CONTEXT_PATH` - Prefix of every route (default: `/camel`)
//! - `BINDING_MODE` - `off`, `auto`, `json` or `xml` (default: `json`)
//! - `RUST_LOG` - Log level (default: `info`)
//! - `LOG_FORMAT` - Log format: `text` or `json` (default: `text`)
//!
//! ```bash
//! export LISTEN="127.0.0.1:9000"
//! export BINDING_MODE="auto"
//! ```

use anyhow::{Context, Result};
use std::env;

use crate::api::binding::BindingMode;

pub const DEFAULT_LISTEN: &str = "0.0.0.0:8080";
pub const DEFAULT_CONTEXT_PATH: &str = "/camel";

/// Service configuration.
#[derive(Debug, Clone)]
pub struct Config {
    pub listen_addr: String,
    /// Route prefix. Empty mounts routes at the root; never ends with `/`.
    pub context_path: String,
    pub binding_mode: BindingMode,
    pub log_level: String,
    pub log_format: String,
}

impl Config {
    /// Loads configuration from environment variables.
    ///
    /// # Errors
    ///
    /// Returns an error if `BINDING_MODE` is not a known mode.
    pub fn from_env() -> Result<Self> {
        let listen_addr = env::var("LISTEN").unwrap_or_else(|_| DEFAULT_LISTEN.to_string());
        let context_path = normalize_context_path(
            &env::var("CONTEXT_PATH").unwrap_or_else(|_| DEFAULT_CONTEXT_PATH.to_string()),
        );
        let log_level = env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string());
        let log_format = env::var("LOG_FORMAT").unwrap_or_else(|_| "text".to_string());

        let binding_mode = match env::var("BINDING_MODE") {
            Ok(v) => v
                .parse()
                .map_err(anyhow::Error::msg)
                .context("Invalid BINDING_MODE")?,
            Err(_) => BindingMode::default(),
        };

        Ok(Self {
            listen_addr,
            context_path,
            binding_mode,
            log_level,
            log_format,
        })
    }

    /// Sets the context path, normalizing a trailing `/`.
    pub fn set_context_path(&mut self, context_path: &str) {
        self.context_path = normalize_context_path(context_path);
    }

    /// Validates the configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - `log_format` is not `text` or `json`
    /// - `listen_addr` is not `host:port`
    /// - `context_path` is neither empty nor starts with `/`
    /// - `context_path` contains a `{..}` placeholder or a `:`/`*` segment
    pub fn validate(&self) -> Result<()> {
        if self.log_format != "text" && self.log_format != "json" {
            anyhow::bail!(
                "LOG_FORMAT must be 'text' or 'json', got '{}'",
                self.log_format
            );
        }

        if !self.listen_addr.contains(':') {
            anyhow::bail!(
                "LISTEN must be in format 'host:port', got '{}'",
                self.listen_addr
            );
        }

        if !self.context_path.is_empty() && !self.context_path.starts_with('/') {
            anyhow::bail!(
                "CONTEXT_PATH must start with '/', got '{}'",
                self.context_path
            );
        }

        if self.context_path.contains(['{', '}'])
            || self
                .context_path
                .split('/')
                .any(|segment| segment.starts_with([':', '*']))
        {
            anyhow::bail!(
                "CONTEXT_PATH must not contain placeholders or wildcards, got '{}'",
                self.context_path
            );
        }

        Ok(())
    }

    /// Prints configuration summary.
    pub fn print_summary(&self) {
        tracing::info!("Configuration loaded:");
        tracing::info!("  Listen address: {}", self.listen_addr);
        tracing::info!(
            "  Context path: {}",
            if self.context_path.is_empty() {
                "/"
            } else {
                self.context_path.as_str()
            }
        );
        tracing::info!("  Binding mode: {}", self.binding_mode);
        tracing::info!("  Log level: {}", self.log_level);
        tracing::info!("  Log format: {}", self.log_format);
    }
}

/// Trims surrounding whitespace and trailing slashes, so `/` becomes empty.
fn normalize_context_path(path: &str) -> String {
    path.trim().trim_end_matches('/').to_string()
}
