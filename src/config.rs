//! Application configuration loaded from environment variables.
//!
//! Configuration is loaded once at startup, validated before the server
//! starts, and injected into handlers via
//! [`crate::state::AppState`]. Nothing re-reads the environment at request
//! time.
//!
//! ## Variables
//!
//! - `BIND_ADDR` - Listen address (default: `0.0.0.0:25200`)
//! - `API_ROUTER_URL` - Base URL of the feedback API behind the API router
//!   (default: `http://localhost:23200/v1`)
//! - `SITE_DOMAIN` - Root domain treated as "this site" for URL validation
//!   and redirect sanitisation (default: `localhost`)
//! - `SERVICE_AUTH_TOKEN` - Bearer token sent with feedback submissions
//!   (default: empty; never logged)
//! - `ENABLE_NEW_NAVBAR` - Consult the navigation cache when rendering
//!   (default: `false`)
//! - `GRACEFUL_SHUTDOWN_TIMEOUT` - Shutdown drain timeout in seconds
//!   (default: `5`)
//! - `SUPPORTED_LANGUAGES` - Comma-separated language codes (default: `en,cy`)
//! - `RUST_LOG` - Log level (default: `info`)
//! - `LOG_FORMAT` - Log format: `text` or `json` (default: `text`)

use anyhow::Result;
use std::env;

/// Service configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct Config {
    pub bind_addr: String,
    pub api_router_url: String,
    pub site_domain: String,
    /// Auth token for the feedback API. Masked in the startup summary.
    pub service_auth_token: String,
    pub enable_new_nav_bar: bool,
    pub graceful_shutdown_timeout_secs: u64,
    pub supported_languages: Vec<String>,
    pub log_level: String,
    pub log_format: String,
}

impl Config {
    /// Loads configuration from environment variables.
    pub fn from_env() -> Self {
        let bind_addr = env::var("BIND_ADDR").unwrap_or_else(|_| "0.0.0.0:25200".to_string());
        let api_router_url =
            env::var("API_ROUTER_URL").unwrap_or_else(|_| "http://localhost:23200/v1".to_string());
        let site_domain = env::var("SITE_DOMAIN").unwrap_or_else(|_| "localhost".to_string());
        let service_auth_token = env::var("SERVICE_AUTH_TOKEN").unwrap_or_default();

        let enable_new_nav_bar = env::var("ENABLE_NEW_NAVBAR")
            .map(|v| v.eq_ignore_ascii_case("true") || v == "1")
            .unwrap_or(false);

        let graceful_shutdown_timeout_secs = env::var("GRACEFUL_SHUTDOWN_TIMEOUT")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(5);

        let supported_languages = env::var("SUPPORTED_LANGUAGES")
            .unwrap_or_else(|_| "en,cy".to_string())
            .split(',')
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .collect();

        let log_level = env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string());
        let log_format = env::var("LOG_FORMAT").unwrap_or_else(|_| "text".to_string());

        Self {
            bind_addr,
            api_router_url,
            site_domain,
            service_auth_token,
            enable_new_nav_bar,
            graceful_shutdown_timeout_secs,
            supported_languages,
            log_level,
            log_format,
        }
    }

    /// Validates the configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - `bind_addr` is not in `host:port` form
    /// - `api_router_url` is not an HTTP(S) URL
    /// - `log_format` is not `text` or `json`
    /// - `graceful_shutdown_timeout_secs` is zero
    /// - no supported language is configured
    pub fn validate(&self) -> Result<()> {
        if !self.bind_addr.contains(':') {
            anyhow::bail!(
                "BIND_ADDR must be in format 'host:port', got '{}'",
                self.bind_addr
            );
        }

        if !self.api_router_url.starts_with("http://")
            && !self.api_router_url.starts_with("https://")
        {
            anyhow::bail!(
                "API_ROUTER_URL must start with 'http://' or 'https://', got '{}'",
                self.api_router_url
            );
        }

        if self.log_format != "text" && self.log_format != "json" {
            anyhow::bail!(
                "LOG_FORMAT must be 'text' or 'json', got '{}'",
                self.log_format
            );
        }

        if self.graceful_shutdown_timeout_secs == 0 {
            anyhow::bail!("GRACEFUL_SHUTDOWN_TIMEOUT must be greater than 0");
        }

        if self.supported_languages.is_empty() {
            anyhow::bail!("SUPPORTED_LANGUAGES must name at least one language");
        }

        Ok(())
    }

    /// Prints a configuration summary (without sensitive data).
    pub fn print_summary(&self) {
        tracing::info!("Configuration loaded:");
        tracing::info!("  Bind address: {}", self.bind_addr);
        tracing::info!("  API router: {}", self.api_router_url);
        tracing::info!("  Site domain: {}", self.site_domain);
        tracing::info!("  Service auth token: {}", mask_token(&self.service_auth_token));
        tracing::info!("  New nav bar: {}", self.enable_new_nav_bar);
        tracing::info!("  Supported languages: {}", self.supported_languages.join(","));
        tracing::info!("  Log level: {}", self.log_level);
        tracing::info!("  Log format: {}", self.log_format);
    }
}

/// Masks a secret for logging, keeping only whether it is set.
fn mask_token(token: &str) -> &'static str {
    if token.is_empty() { "<not set>" } else { "***" }
}

/// Loads and validates configuration from environment variables.
///
/// # Errors
///
/// Returns an error if validation fails.
///
/// # Note
///
/// Expects environment variables to be already loaded (e.g. via
/// `dotenvy::dotenv()` in `main.rs`).
pub fn load_from_env() -> Result<Config> {
    let config = Config::from_env();
    config.validate()?;
    Ok(config)
}
