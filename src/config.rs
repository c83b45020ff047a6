//! Configuration management for VibeCheck.
//!
//! This module handles loading and validating environment variables and application settings.

use crate::error::{Result, VibeCheckError};
use std::env;

/// URL checked when a user runs the check command without an argument.
const FALLBACK_CHECK_URL: &str = "https://www.logged.tg/auth/unknowngu";

/// Prefix used for text-based commands when COMMAND_PREFIX is not set.
const FALLBACK_COMMAND_PREFIX: &str = "!";

/// Configuration for the application, loaded from environment variables.
#[derive(Debug, Clone)]
pub struct Config {
    /// Discord bot token
    pub discord_token: String,
    /// Demonstration URL probed when the check command gets no argument
    pub default_check_url: String,
    /// Prefix for text-based commands (slash commands are unaffected)
    pub command_prefix: String,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// This will attempt to load a .env file if present using dotenv,
    /// then read required environment variables.
    ///
    /// # Errors
    ///
    /// Returns an error if DISCORD_TOKEN is missing or if DEFAULT_CHECK_URL
    /// is set to something that is not an http(s) URL.
    ///
    /// # Examples
    ///
    /// ```no_run
    /// use vibecheck::config::Config;
    ///
    /// let config = Config::from_env().expect("Failed to load configuration");
    /// println!("Default URL: {}", config.default_check_url);
    /// ```
    pub fn from_env() -> Result<Self> {
        // Load .env file if present (ignore errors - it's optional)
        dotenv::dotenv().ok();

        let discord_token = env::var("DISCORD_TOKEN")
            .map_err(|_| VibeCheckError::Config(
                "Missing DISCORD_TOKEN environment variable. Set it in your environment or create a .env file (never commit this file).".to_string()
            ))?;

        let default_check_url = env::var("DEFAULT_CHECK_URL")
            .unwrap_or_else(|_| FALLBACK_CHECK_URL.to_string());

        // The probe itself accepts anything, but a broken default would make
        // every bare `/check` fail, so the default gets validated up front.
        Self::validate_check_url(&default_check_url)?;

        let command_prefix = env::var("COMMAND_PREFIX")
            .unwrap_or_else(|_| FALLBACK_COMMAND_PREFIX.to_string());

        if command_prefix.is_empty() {
            return Err(VibeCheckError::Config(
                "COMMAND_PREFIX must not be empty. Unset it to use the default prefix.".to_string()
            ));
        }

        Ok(Self {
            discord_token,
            default_check_url,
            command_prefix,
        })
    }

    /// Validate the default check URL format using proper URL parsing.
    fn validate_check_url(url_str: &str) -> Result<()> {
        use url::Url;

        // Parse the URL to validate its structure
        let parsed_url = Url::parse(url_str)
            .map_err(|e| VibeCheckError::Config(
                format!("Invalid DEFAULT_CHECK_URL '{}': {}", url_str, e)
            ))?;

        // Ensure it's HTTP or HTTPS
        let scheme = parsed_url.scheme();
        if scheme != "http" && scheme != "https" {
            return Err(VibeCheckError::Config(
                format!("DEFAULT_CHECK_URL must use http:// or https:// scheme, got: '{}'", scheme)
            ));
        }

        // Ensure it has a host
        if parsed_url.host_str().is_none() {
            return Err(VibeCheckError::Config(
                format!("DEFAULT_CHECK_URL must contain a valid host: '{}'", url_str)
            ));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_check_url() {
        assert!(Config::validate_check_url("https://example.com").is_ok());
        assert!(Config::validate_check_url("http://example.com/path?q=1").is_ok());
        assert!(Config::validate_check_url(FALLBACK_CHECK_URL).is_ok());

        assert!(Config::validate_check_url("example.com").is_err());
        assert!(Config::validate_check_url("ftp://example.com").is_err());
        assert!(Config::validate_check_url("https://").is_err());
        assert!(Config::validate_check_url("").is_err());
    }
}
