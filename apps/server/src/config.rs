use std::{net::SocketAddr, time::Duration};

use anyhow::Context;

/// Where search candidates come from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DirectoryKind {
    /// Built-in alias table.
    Static,
    /// Alpha Vantage `SYMBOL_SEARCH`; needs an API key.
    AlphaVantage,
}

pub struct Config {
    pub listen_addr: SocketAddr,
    pub cors_allow: Vec<String>,
    pub request_timeout: Duration,
    pub search_debounce: Duration,
    pub directory: DirectoryKind,
    pub alpha_vantage_api_key: Option<String>,
}

const DEFAULT_TIMEOUT_MS: u64 = 30_000;
const DEFAULT_DEBOUNCE_MS: u64 = 500;

fn parse_millis(var: &str, default: u64) -> u64 {
    match std::env::var(var) {
        Ok(raw) => raw.trim().parse().unwrap_or_else(|_| {
            tracing::warn!("Invalid {}={:?}, using {}", var, raw, default);
            default
        }),
        Err(_) => default,
    }
}

impl Config {
    pub fn from_env() -> anyhow::Result<Self> {
        dotenvy::dotenv().ok();
        let listen_addr: SocketAddr = std::env::var("MD_LISTEN_ADDR")
            .unwrap_or_else(|_| "0.0.0.0:8080".to_string())
            .parse()
            .context("Invalid MD_LISTEN_ADDR")?;
        let cors_allow = std::env::var("MD_CORS_ALLOW_ORIGINS")
            .unwrap_or_else(|_| "*".into())
            .split(',')
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .collect();
        let timeout_ms = parse_millis("MD_REQUEST_TIMEOUT_MS", DEFAULT_TIMEOUT_MS);
        let debounce_ms = parse_millis("MD_SEARCH_DEBOUNCE_MS", DEFAULT_DEBOUNCE_MS);
        let alpha_vantage_api_key = std::env::var("MD_ALPHA_VANTAGE_API_KEY")
            .ok()
            .map(|k| k.trim().to_string())
            .filter(|k| !k.is_empty());

        let directory = match std::env::var("MD_DIRECTORY")
            .unwrap_or_else(|_| "static".into())
            .trim()
            .to_ascii_lowercase()
            .as_str()
        {
            "static" => DirectoryKind::Static,
            "alpha_vantage" if alpha_vantage_api_key.is_some() => DirectoryKind::AlphaVantage,
            "alpha_vantage" => {
                tracing::warn!("MD_DIRECTORY=alpha_vantage needs MD_ALPHA_VANTAGE_API_KEY, using static");
                DirectoryKind::Static
            }
            other => {
                tracing::warn!("Unknown MD_DIRECTORY={:?}, using static", other);
                DirectoryKind::Static
            }
        };

        Ok(Self {
            listen_addr,
            cors_allow,
            request_timeout: Duration::from_millis(timeout_ms),
            search_debounce: Duration::from_millis(debounce_ms),
            directory,
            alpha_vantage_api_key,
        })
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            listen_addr: SocketAddr::from(([0, 0, 0, 0], 8080)),
            cors_allow: vec!["*".to_string()],
            request_timeout: Duration::from_millis(DEFAULT_TIMEOUT_MS),
            search_debounce: Duration::from_millis(DEFAULT_DEBOUNCE_MS),
            directory: DirectoryKind::Static,
            alpha_vantage_api_key: None,
        }
    }
}
