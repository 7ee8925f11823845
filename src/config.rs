use serde::Deserialize;
use std::env;
use std::sync::OnceLock;
use thiserror::Error;

const DEFAULT_GEMINI_MODEL: &str = "gemini-1.5-pro";
const DEFAULT_GEMINI_BASE_URL: &str = "https://generativelanguage.googleapis.com";
const DEFAULT_YOUTUBE_BASE_URL: &str = "https://www.youtube.com";
const DEFAULT_TRANSCRIPT_LANGUAGE: &str = "en";
const DEFAULT_HTTP_TIMEOUT_SECS: u64 = 30;

/// Errors encountered while loading configuration from environment variables.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Environment variable contained a value that could not be parsed.
    #[error("Invalid value for environment variable: {0}")]
    InvalidValue(String),
}

/// Runtime configuration for the summarization server.
#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    /// Optional override for the HTTP server port.
    pub server_port: Option<u16>,
    /// Gemini API key; the chat surface is disabled when absent.
    pub gemini_api_key: Option<String>,
    /// Gemini model identifier used for function routing.
    pub gemini_model: String,
    /// Base URL of the Gemini REST API.
    pub gemini_base_url: String,
    /// Base URL used to load video watch pages.
    pub youtube_base_url: String,
    /// Preferred caption language code.
    pub transcript_language: String,
    /// Timeout applied to outbound HTTP requests, in seconds.
    pub http_timeout_secs: u64,
}

impl Config {
    /// Load configuration from environment variables, performing validation along the way.
    pub fn from_env() -> Result<Self, ConfigError> {
        Ok(Self {
            server_port: load_env_optional("SERVER_PORT")
                .map(|value| {
                    value
                        .parse()
                        .map_err(|_| ConfigError::InvalidValue("SERVER_PORT".into()))
                })
                .transpose()?,
            gemini_api_key: load_env_optional("GOOGLE_GEMINI_KEY"),
            gemini_model: load_env_or("GEMINI_MODEL", DEFAULT_GEMINI_MODEL),
            gemini_base_url: load_env_or("GEMINI_BASE_URL", DEFAULT_GEMINI_BASE_URL),
            youtube_base_url: load_env_or("YOUTUBE_BASE_URL", DEFAULT_YOUTUBE_BASE_URL),
            transcript_language: load_env_or("TRANSCRIPT_LANGUAGE", DEFAULT_TRANSCRIPT_LANGUAGE),
            http_timeout_secs: load_env_optional("HTTP_TIMEOUT_SECS")
                .map(|value| match value.parse::<u64>() {
                    Ok(secs) if secs > 0 => Ok(secs),
                    _ => Err(ConfigError::InvalidValue("HTTP_TIMEOUT_SECS".into())),
                })
                .transpose()?
                .unwrap_or(DEFAULT_HTTP_TIMEOUT_SECS),
        })
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            server_port: None,
            gemini_api_key: None,
            gemini_model: DEFAULT_GEMINI_MODEL.into(),
            gemini_base_url: DEFAULT_GEMINI_BASE_URL.into(),
            youtube_base_url: DEFAULT_YOUTUBE_BASE_URL.into(),
            transcript_language: DEFAULT_TRANSCRIPT_LANGUAGE.into(),
            http_timeout_secs: DEFAULT_HTTP_TIMEOUT_SECS,
        }
    }
}

fn load_env_optional(key: &str) -> Option<String> {
    env::var(key).ok().filter(|value| !value.trim().is_empty())
}

fn load_env_or(key: &str, default: &str) -> String {
    load_env_optional(key).unwrap_or_else(|| default.to_string())
}

/// Global configuration cache populated during process start.
pub static CONFIG: OnceLock<Config> = OnceLock::new();

/// Retrieve the loaded configuration, panicking if initialization has not occurred.
pub fn get_config() -> &'static Config {
    CONFIG.get().expect("Config not initialized")
}

/// Load configuration from the environment and install it in the global cache.
pub fn init_config() {
    dotenvy::dotenv().ok();
    let config = Config::from_env().expect("Failed to load config from environment");
    tracing::debug!(
        server_port = ?config.server_port,
        gemini_enabled = config.gemini_api_key.is_some(),
        gemini_model = %config.gemini_model,
        youtube_base_url = %config.youtube_base_url,
        transcript_language = %config.transcript_language,
        "Loaded configuration"
    );
    CONFIG.set(config).expect("Failed to set config");
}
