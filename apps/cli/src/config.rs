use std::str::FromStr;
use std::time::Duration;

use anyhow::{bail, Context};
use stockfolio_market_data::provider::quote_api::{DEFAULT_QUOTE_API_URL, DEFAULT_SYMBOL_SUFFIX};

/// Where latest prices come from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QuoteProviderKind {
    QuoteApi,
    Yahoo,
}

impl FromStr for QuoteProviderKind {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "quote_api" => Ok(QuoteProviderKind::QuoteApi),
            "yahoo" => Ok(QuoteProviderKind::Yahoo),
            other => bail!("unknown quote provider '{}' (expected quote_api or yahoo)", other),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogFormat {
    Text,
    Json,
}

pub struct Config {
    pub db_path: String,
    pub quote_provider: QuoteProviderKind,
    pub quotes_url: String,
    pub quote_suffix: String,
    /// Overrides the provider's own pacing when set.
    pub quote_delay: Option<Duration>,
    pub log_format: LogFormat,
}

impl Config {
    pub fn from_env() -> anyhow::Result<Self> {
        dotenvy::dotenv().ok();
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> anyhow::Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let db_path =
            lookup("STOCKFOLIO_DB_PATH").unwrap_or_else(|| "./db/stockfolio.db".to_string());
        let quote_provider = lookup("STOCKFOLIO_QUOTE_PROVIDER")
            .map(|v| v.parse::<QuoteProviderKind>())
            .transpose()
            .context("Invalid STOCKFOLIO_QUOTE_PROVIDER")?
            .unwrap_or(QuoteProviderKind::QuoteApi);
        let quotes_url =
            lookup("STOCKFOLIO_QUOTES_URL").unwrap_or_else(|| DEFAULT_QUOTE_API_URL.to_string());
        let quote_suffix =
            lookup("STOCKFOLIO_QUOTE_SUFFIX").unwrap_or_else(|| DEFAULT_SYMBOL_SUFFIX.to_string());
        let quote_delay = lookup("STOCKFOLIO_QUOTE_DELAY_MS")
            .map(|v| v.trim().parse::<u64>())
            .transpose()
            .context("Invalid STOCKFOLIO_QUOTE_DELAY_MS")?
            .map(Duration::from_millis);
        let log_format = match lookup("STOCKFOLIO_LOG_FORMAT") {
            Some(v) if v.eq_ignore_ascii_case("json") => LogFormat::Json,
            _ => LogFormat::Text,
        };

        Ok(Self {
            db_path,
            quote_provider,
            quotes_url,
            quote_suffix,
            quote_delay,
            log_format,
        })
    }
}
