use std::str::FromStr;
use std::time::Duration;

use anyhow::{Context, Result};

use crate::llm_client::{LlmConfig, DEFAULT_API_URL, DEFAULT_MODEL};
use crate::refinement::client::{
    RefinementConfig, DEFAULT_ATTEMPT_TIMEOUT, DEFAULT_BACKOFF_UNIT, DEFAULT_MAX_ATTEMPTS,
};
use crate::refinement::cover_letter::DEFAULT_COVER_LETTER_TIMEOUT;

/// Application configuration loaded from environment variables.
/// Startup fails if required variables are missing.
#[derive(Debug, Clone)]
pub struct Config {
    pub database_url: String,
    pub redis_url: String,
    pub anthropic_api_key: String,
    pub llm_api_url: String,
    pub llm_model: String,
    pub port: u16,
    pub rust_log: String,
    pub refine_timeout_secs: u64,
    pub refine_max_attempts: u32,
    pub refine_backoff_ms: u64,
    pub cover_letter_timeout_secs: u64,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        Ok(Config {
            database_url: require_env("DATABASE_URL")?,
            redis_url: require_env("REDIS_URL")?,
            anthropic_api_key: require_env("ANTHROPIC_API_KEY")?,
            llm_api_url: std::env::var("LLM_API_URL")
                .unwrap_or_else(|_| DEFAULT_API_URL.to_string()),
            llm_model: std::env::var("LLM_MODEL").unwrap_or_else(|_| DEFAULT_MODEL.to_string()),
            port: parse_or("PORT", std::env::var("PORT").ok(), 8080)?,
            rust_log: std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string()),
            refine_timeout_secs: parse_or(
                "REFINE_TIMEOUT_SECS",
                std::env::var("REFINE_TIMEOUT_SECS").ok(),
                DEFAULT_ATTEMPT_TIMEOUT.as_secs(),
            )?,
            refine_max_attempts: parse_or(
                "REFINE_MAX_ATTEMPTS",
                std::env::var("REFINE_MAX_ATTEMPTS").ok(),
                DEFAULT_MAX_ATTEMPTS,
            )?,
            refine_backoff_ms: parse_or(
                "REFINE_BACKOFF_MS",
                std::env::var("REFINE_BACKOFF_MS").ok(),
                DEFAULT_BACKOFF_UNIT.as_millis() as u64,
            )?,
            cover_letter_timeout_secs: parse_or(
                "COVER_LETTER_TIMEOUT_SECS",
                std::env::var("COVER_LETTER_TIMEOUT_SECS").ok(),
                DEFAULT_COVER_LETTER_TIMEOUT.as_secs(),
            )?,
        })
    }

    pub fn llm_config(&self) -> LlmConfig {
        LlmConfig {
            api_key: self.anthropic_api_key.clone(),
            api_url: self.llm_api_url.clone(),
            model: self.llm_model.clone(),
        }
    }

    pub fn refinement_config(&self) -> RefinementConfig {
        RefinementConfig {
            attempt_timeout: Duration::from_secs(self.refine_timeout_secs),
            max_attempts: self.refine_max_attempts.max(1),
            backoff_unit: Duration::from_millis(self.refine_backoff_ms),
        }
    }

    pub fn cover_letter_timeout(&self) -> Duration {
        Duration::from_secs(self.cover_letter_timeout_secs)
    }
}

fn require_env(key: &str) -> Result<String> {
    std::env::var(key).with_context(|| format!("Required environment variable '{key}' is not set"))
}

/// Parses an optional variable, falling back to `default` when unset or blank.
fn parse_or<T>(key: &str, raw: Option<String>, default: T) -> Result<T>
where
    T: FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    match raw.as_deref().map(str::trim) {
        None | Some("") => Ok(default),
        Some(value) => value
            .parse::<T>()
            .with_context(|| format!("{key} has an invalid value: '{value}'")),
    }
}
