//! Centralized configuration management for actor-showcase

use std::path::PathBuf;
use std::time::Duration;
use anyhow::{Result, Context};
use reqwest::Url;

use crate::showcase_tui::theme::Theme;

pub const DEFAULT_API_URL: &str = "http://localhost:8000";
pub const DEFAULT_LOG_FILE: &str = "actor_showcase.log";

/// Application configuration
#[derive(Debug, Clone)]
pub struct Config {
    /// Base URL of the Actor Showcase API
    pub api_base_url: String,
    /// HTTP client configuration
    pub http: HttpConfig,
    /// Theme used when the UI starts
    pub theme: Theme,
    /// Log file path
    pub log_file: PathBuf,
}

/// HTTP client configuration
#[derive(Debug, Clone)]
pub struct HttpConfig {
    /// Request timeout in seconds
    pub timeout_seconds: u64,
    /// User agent string
    pub user_agent: String,
}

impl Default for HttpConfig {
    fn default() -> Self {
        Self {
            timeout_seconds: 30,
            user_agent: default_user_agent(),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api_base_url: DEFAULT_API_URL.to_string(),
            http: HttpConfig::default(),
            theme: Theme::Dark,
            log_file: PathBuf::from(DEFAULT_LOG_FILE),
        }
    }
}

fn default_user_agent() -> String {
    format!("actor-showcase/{}", env!("CARGO_PKG_VERSION"))
}

impl Config {
    /// Load configuration from environment variables and defaults
    pub fn from_env() -> Result<Self> {
        let api_base_url = std::env::var("ACTOR_SHOWCASE_API_URL")
            .unwrap_or_else(|_| DEFAULT_API_URL.to_string());

        let http = HttpConfig {
            timeout_seconds: parse_env_var("ACTOR_SHOWCASE_HTTP_TIMEOUT_SECONDS")?.unwrap_or(30),
            user_agent: std::env::var("ACTOR_SHOWCASE_USER_AGENT")
                .unwrap_or_else(|_| default_user_agent()),
        };

        let theme = parse_env_var("ACTOR_SHOWCASE_THEME")?.unwrap_or(Theme::Dark);

        let log_file = std::env::var("ACTOR_SHOWCASE_LOG_FILE")
            .unwrap_or_else(|_| DEFAULT_LOG_FILE.to_string())
            .into();

        Ok(Config {
            api_base_url,
            http,
            theme,
            log_file,
        })
    }

    /// Apply command line overrides on top of the environment
    pub fn with_overrides(mut self, api_url: Option<&str>, theme: Option<Theme>) -> Self {
        if let Some(url) = api_url {
            self.api_base_url = url.to_string();
        }
        if let Some(theme) = theme {
            self.theme = theme;
        }
        self
    }

    /// Get HTTP timeout as Duration
    pub fn http_timeout(&self) -> Duration {
        Duration::from_secs(self.http.timeout_seconds)
    }

    /// Parsed base URL
    pub fn base_url(&self) -> Result<Url> {
        Url::parse(&self.api_base_url)
            .with_context(|| format!("Invalid API base URL: {}", self.api_base_url))
    }

    /// Validate configuration
    pub fn validate(&self) -> Result<()> {
        let url = self.base_url()?;
        if !matches!(url.scheme(), "http" | "https") {
            return Err(anyhow::anyhow!(
                "API base URL must use http or https, got '{}'",
                url.scheme()
            ));
        }

        if self.http.timeout_seconds == 0 {
            return Err(anyhow::anyhow!("HTTP timeout must be at least one second"));
        }

        // Log file directory must exist, the file itself is created on demand
        if let Some(parent) = self.log_file.parent() {
            if !parent.as_os_str().is_empty() && !parent.exists() {
                return Err(anyhow::anyhow!(
                    "Log file directory does not exist: {}",
                    parent.display()
                ));
            }
        }

        Ok(())
    }
}

/// Helper function to parse environment variable as a specific type
fn parse_env_var<T>(var_name: &str) -> Result<Option<T>>
where
    T: std::str::FromStr,
    T::Err: std::fmt::Display + Send + Sync + std::error::Error + 'static,
{
    match std::env::var(var_name) {
        Ok(val) => val.parse().map(Some).with_context(|| {
            format!("Failed to parse environment variable {} = '{}'", var_name, val)
        }),
        Err(_) => Ok(None),
    }
}
