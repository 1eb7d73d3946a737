//! Builder configuration.
//!
//! # Environment Variables
//!
//! | Variable | Default | Description |
//! |----------|---------|-------------|
//! | `SELECT_HANDLER` | select | Handler path the query string is appended to |
//! | `SELECT_BASE_URL` | http://localhost:8983/solr/ | Base URL for absolute request URLs |
//!
//! # Example
//!
//! ```rust
//! use sieve_select::SelectConfig;
//!
//! // Create from environment
//! let config = SelectConfig::from_env();
//!
//! // Or create programmatically
//! let config = SelectConfig {
//!     base_url: "http://search.internal:8983/solr/products/".to_string(),
//!     ..Default::default()
//! };
//! assert!(config.validate().is_ok());
//! ```

use clap::Parser;
use url::Url;

use crate::builder::DEFAULT_HANDLER;
use crate::error::{SelectError, SelectResult};

/// Default base URL.
pub const DEFAULT_BASE_URL: &str = "http://localhost:8983/solr/";

/// Configuration for building select requests.
#[derive(Debug, Clone, Parser)]
#[command(name = "sieve-select")]
#[command(about = "Select request builder settings")]
pub struct SelectConfig {
    /// Handler path the query string is appended to.
    #[arg(long, env = "SELECT_HANDLER", default_value = DEFAULT_HANDLER)]
    pub handler: String,

    /// Base URL that relative request URIs are resolved against.
    #[arg(long, env = "SELECT_BASE_URL", default_value = DEFAULT_BASE_URL)]
    pub base_url: String,
}

impl Default for SelectConfig {
    fn default() -> Self {
        Self {
            handler: DEFAULT_HANDLER.to_string(),
            base_url: DEFAULT_BASE_URL.to_string(),
        }
    }
}

impl SelectConfig {
    /// Creates a config from environment variables, falling back to defaults.
    pub fn from_env() -> Self {
        Self::try_parse_from(["sieve-select"]).unwrap_or_default()
    }

    /// Parses the base URL.
    pub fn base_url(&self) -> SelectResult<Url> {
        Ok(Url::parse(&self.base_url)?)
    }

    /// Validates the configuration and returns errors if any.
    pub fn validate(&self) -> Result<(), Vec<String>> {
        let mut errors = Vec::new();

        if self.handler.trim().is_empty() {
            errors.push("Handler cannot be empty".to_string());
        }

        if self.handler.contains('?') {
            errors.push("Handler cannot contain a query string".to_string());
        }

        match Url::parse(&self.base_url) {
            Ok(url) if url.cannot_be_a_base() => {
                errors.push(format!("Base URL cannot be a base: {}", self.base_url));
            }
            Ok(url) if !url.path().ends_with('/') => {
                errors.push("Base URL must end with '/'".to_string());
            }
            Ok(_) => {}
            Err(e) => errors.push(format!("Invalid base URL '{}': {}", self.base_url, e)),
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(errors)
        }
    }

    /// Validates, folding all problems into one error.
    pub fn ensure_valid(&self) -> SelectResult<()> {
        self.validate().map_err(|errors| SelectError::InvalidConfig {
            message: errors.join("; "),
        })
    }
}
