use std::env;
use std::time::Duration;
use anyhow::{Context, Result};

pub const DEFAULT_API_BASE: &str = "https://api.linkedin.com";
const DEFAULT_PORT: u16 = 8080;
const DEFAULT_ORIGINS: &str = "http://localhost:3000,http://127.0.0.1:3000";
const DEFAULT_TIMEOUT_SECS: u64 = 30;

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub port: u16,
    pub linkedin_api_base: String,
    pub allowed_origins: Vec<String>,
    pub request_timeout: Duration,
}

impl AppConfig {
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Builds the config from any key lookup, so tests don't have to touch the process env.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let port = match lookup("PORT") {
            Some(raw) => raw
                .trim()
                .parse::<u16>()
                .with_context(|| format!("PORT is not a valid port: {raw:?}"))?,
            None => DEFAULT_PORT,
        };

        let linkedin_api_base = lookup("LINKEDIN_API_BASE")
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .unwrap_or_else(|| DEFAULT_API_BASE.to_string())
            .trim_end_matches('/')
            .to_string();

        let allowed_origins = lookup("ALLOWED_ORIGINS")
            .unwrap_or_else(|| DEFAULT_ORIGINS.to_string())
            .split(',')
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .collect();

        let timeout_secs = match lookup("LINKEDIN_TIMEOUT_SECS") {
            Some(raw) => raw
                .trim()
                .parse::<u64>()
                .with_context(|| format!("LINKEDIN_TIMEOUT_SECS is not a number: {raw:?}"))?,
            None => DEFAULT_TIMEOUT_SECS,
        };

        Ok(Self {
            port,
            linkedin_api_base,
            allowed_origins,
            request_timeout: Duration::from_secs(timeout_secs),
        })
    }

    pub fn bind_address(&self) -> String {
        format!("0.0.0.0:{}", self.port)
    }
}
