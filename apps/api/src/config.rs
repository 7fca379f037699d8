use std::path::PathBuf;
use std::str::FromStr;
use std::time::Duration;

use anyhow::{bail, Context, Result};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AiMode {
    Live,
    Deterministic,
}

impl FromStr for AiMode {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "live" => Ok(AiMode::Live),
            "deterministic" => Ok(AiMode::Deterministic),
            other => bail!("AI_MODE must be 'live' or 'deterministic', got '{other}'"),
        }
    }
}

/// Application configuration loaded from environment variables.
/// Fails at startup on malformed values or `AI_MODE=live` without a key.
#[derive(Debug, Clone)]
pub struct Config {
    pub port: u16,
    pub rust_log: String,
    pub openai_api_key: Option<String>,
    pub ai_mode: AiMode,
    pub ai_timeout: Duration,
    pub catalog_path: Option<PathBuf>,
    pub state_path: Option<PathBuf>,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds the config from any key lookup. Blank values count as unset.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        let openai_api_key = get("OPENAI_API_KEY");
        let ai_mode = match get("AI_MODE") {
            Some(raw) => raw.parse::<AiMode>()?,
            None if openai_api_key.is_some() => AiMode::Live,
            None => AiMode::Deterministic,
        };
        if ai_mode == AiMode::Live && openai_api_key.is_none() {
            bail!("AI_MODE=live requires OPENAI_API_KEY to be set");
        }

        let ai_timeout_secs = match get("AI_TIMEOUT_SECS") {
            Some(raw) => raw
                .trim()
                .parse::<u64>()
                .context("AI_TIMEOUT_SECS must be a whole number of seconds")?,
            None => 30,
        };

        Ok(Config {
            port: get("PORT")
                .unwrap_or_else(|| "8080".to_string())
                .trim()
                .parse::<u16>()
                .context("PORT must be a valid port number")?,
            rust_log: get("RUST_LOG").unwrap_or_else(|| "info".to_string()),
            openai_api_key,
            ai_mode,
            ai_timeout: Duration::from_secs(ai_timeout_secs),
            catalog_path: get("CATALOG_PATH").map(PathBuf::from),
            state_path: get("STATE_PATH").map(PathBuf::from),
        })
    }
}
