use serde::Deserialize;
use std::env;

/// Default Gemini model when `GEMINI_MODEL` is not set.
pub const DEFAULT_GEMINI_MODEL: &str = "gemini-2.5-flash";

/// Default Groq model when `GROQ_MODEL` is not set.
pub const DEFAULT_GROQ_MODEL: &str = "llama-3.3-70b-versatile";

fn parse_env_or<T: std::str::FromStr>(var: &str, default: T) -> T
where
    T::Err: std::fmt::Display,
{
    match env::var(var) {
        Ok(val) => match val.parse() {
            Ok(parsed) => parsed,
            Err(e) => {
                tracing::warn!("Invalid value '{}' for {}: {}. Using default.", val, var, e);
                default
            }
        },
        Err(_) => default,
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    pub server: ServerConfig,
    /// Present only when `GEMINI_API_KEY` is set.
    pub gemini: Option<ProviderConfig>,
    /// Present only when `GROQ_API_KEY` is set.
    pub groq: Option<ProviderConfig>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

/// Connection settings for one upstream AI provider.
#[derive(Debug, Clone, Deserialize)]
pub struct ProviderConfig {
    pub api_key: String,
    pub model: String,
    /// Override for tests and self-hosted gateways; each client falls back
    /// to the provider's public endpoint.
    pub base_url: Option<String>,
    pub timeout_secs: u64,
}

impl Default for Config {
    fn default() -> Self {
        let timeout_secs = parse_env_or("AI_REQUEST_TIMEOUT", 30);

        Self {
            server: ServerConfig {
                host: env::var("CODEPIX_HOST").unwrap_or_else(|_| "0.0.0.0".to_string()),
                port: parse_env_or("CODEPIX_PORT", 3000),
            },
            gemini: env::var("GEMINI_API_KEY").ok().map(|api_key| ProviderConfig {
                api_key,
                model: env::var("GEMINI_MODEL")
                    .unwrap_or_else(|_| DEFAULT_GEMINI_MODEL.to_string()),
                base_url: env::var("GEMINI_BASE_URL").ok(),
                timeout_secs,
            }),
            groq: env::var("GROQ_API_KEY").ok().map(|api_key| ProviderConfig {
                api_key,
                model: env::var("GROQ_MODEL").unwrap_or_else(|_| DEFAULT_GROQ_MODEL.to_string()),
                base_url: env::var("GROQ_BASE_URL").ok(),
                timeout_secs,
            }),
        }
    }
}

impl Config {
    pub fn from_env() -> Self {
        Self::default()
    }
}
