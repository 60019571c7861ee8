//! Configuration management for the Sponsoration notifier

use anyhow::{Context, Result};
use std::env;
use std::fmt;
use std::time::Duration;

pub const DEFAULT_FROM_EMAIL: &str = "noreply@yourdomain.com";
pub const DEFAULT_FROM_NAME: &str = "Sponsoration";
pub const DEFAULT_APP_URL: &str = "http://localhost:8082";
pub const DEFAULT_SENDGRID_API_URL: &str = "https://api.sendgrid.com";

/// Where envelopes go once they are built
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeliveryMode {
    /// Envelopes are written to the log, nothing leaves the process
    Development,
    /// Envelopes are submitted to SendGrid
    Production,
}

impl DeliveryMode {
    /// Resolve the mode from the `ENV` indicator.
    ///
    /// Empty or `development` means development, anything else is production.
    pub fn from_env_indicator(indicator: &str) -> Self {
        if indicator.is_empty() || indicator == "development" {
            Self::Development
        } else {
            Self::Production
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Development => "development",
            Self::Production => "production",
        }
    }
}

/// Application configuration
#[derive(Debug, Clone)]
pub struct Config {
    /// Raw value of the `ENV` indicator
    pub environment: String,
    /// Notifier configuration
    pub notifier: NotifierConfig,
    /// Logging configuration
    pub telemetry: TelemetryConfig,
}

/// Immutable settings for a [`crate::Notifier`]
#[derive(Clone)]
pub struct NotifierConfig {
    /// SendGrid API key (may be empty in development)
    pub api_key: String,
    pub from_email: String,
    pub from_name: String,
    pub mode: DeliveryMode,
    /// Application base URL used by the welcome email
    pub app_url: String,
    /// SendGrid API base URL (overridden in tests)
    pub api_base_url: String,
    /// Request timeout for the provider call; `None` keeps the client default
    pub request_timeout: Option<Duration>,
}

impl NotifierConfig {
    /// Development configuration with all defaults applied
    pub fn development() -> Self {
        Self {
            api_key: String::new(),
            from_email: DEFAULT_FROM_EMAIL.to_string(),
            from_name: DEFAULT_FROM_NAME.to_string(),
            mode: DeliveryMode::Development,
            app_url: DEFAULT_APP_URL.to_string(),
            api_base_url: DEFAULT_SENDGRID_API_URL.to_string(),
            request_timeout: None,
        }
    }

    /// Production configuration with all defaults applied
    pub fn production(api_key: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            mode: DeliveryMode::Production,
            ..Self::development()
        }
    }

    pub fn is_development(&self) -> bool {
        self.mode == DeliveryMode::Development
    }
}

impl Default for NotifierConfig {
    fn default() -> Self {
        Self::development()
    }
}

// The API key never ends up in logs.
impl fmt::Debug for NotifierConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("NotifierConfig")
            .field("api_key", &if self.api_key.is_empty() { "" } else { "***" })
            .field("from_email", &self.from_email)
            .field("from_name", &self.from_name)
            .field("mode", &self.mode)
            .field("app_url", &self.app_url)
            .field("api_base_url", &self.api_base_url)
            .field("request_timeout", &self.request_timeout)
            .finish()
    }
}

/// Logging configuration
#[derive(Debug, Clone)]
pub struct TelemetryConfig {
    /// `json` for structured output, anything else for human-readable
    pub log_format: String,
}

impl Default for TelemetryConfig {
    fn default() -> Self {
        Self {
            log_format: "pretty".to_string(),
        }
    }
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Load configuration from an arbitrary variable source
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        // Empty values count as unset for everything that has a default
        let var = |key: &str| lookup(key).filter(|value| !value.is_empty());

        let environment = lookup("ENV").unwrap_or_default();
        let mode = DeliveryMode::from_env_indicator(&environment);

        let request_timeout = match var("SENDGRID_TIMEOUT_SECS") {
            Some(secs) => Some(Duration::from_secs(
                secs.parse().context("Invalid SENDGRID_TIMEOUT_SECS")?,
            )),
            None => None,
        };

        Ok(Self {
            environment,
            notifier: NotifierConfig {
                api_key: lookup("SENDGRID_API_KEY").unwrap_or_default(),
                from_email: var("SENDGRID_FROM_EMAIL")
                    .unwrap_or_else(|| DEFAULT_FROM_EMAIL.to_string()),
                from_name: var("SENDGRID_FROM_NAME")
                    .unwrap_or_else(|| DEFAULT_FROM_NAME.to_string()),
                mode,
                app_url: var("APP_URL").unwrap_or_else(|| DEFAULT_APP_URL.to_string()),
                api_base_url: var("SENDGRID_API_URL")
                    .unwrap_or_else(|| DEFAULT_SENDGRID_API_URL.to_string()),
                request_timeout,
            },
            telemetry: TelemetryConfig {
                log_format: var("LOG_FORMAT").unwrap_or_else(|| "pretty".to_string()),
            },
        })
    }

    /// Environment name for display, `development` when `ENV` is unset
    pub fn environment_name(&self) -> &str {
        if self.environment.is_empty() {
            "development"
        } else {
            &self.environment
        }
    }
}
