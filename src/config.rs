//! Application configuration loaded from environment variables.
//!
//! Every setting has a default so the server starts with no environment at
//! all, listening on `0.0.0.0:5000`.

use std::env;
use std::str::FromStr;

/// Application configuration, loaded once at startup.
#[derive(Debug, Clone)]
pub struct Config {
    /// Interface to bind
    pub host: String,
    /// Server port
    pub port: u16,
    /// Directory where fetched transcripts are written
    pub save_dir: String,
    /// Base URL for YouTube watch pages (overridable for tests)
    pub youtube_base_url: String,
    /// Transcript language codes, in order of preference
    pub preferred_languages: Vec<String>,
    /// Timeout for each outbound HTTP request
    pub http_timeout_secs: u64,
    /// How long a fetched transcript stays cached. Zero disables the cache.
    pub cache_ttl_secs: u64,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 5000,
            save_dir: "saved_transcripts".to_string(),
            youtube_base_url: "https://www.youtube.com".to_string(),
            preferred_languages: vec!["en".to_string()],
            http_timeout_secs: 15,
            cache_ttl_secs: 600,
        }
    }
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// A `.env` file in the working directory is read first if present.
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();
        Self::from_lookup(|name| env::var(name).ok())
    }

    /// Build configuration from any variable source, falling back to
    /// defaults for variables that are absent.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();

        let preferred_languages = match lookup("TRANSCRIPT_LANGUAGES") {
            Some(raw) => parse_languages(&raw)?,
            None => defaults.preferred_languages,
        };

        Ok(Self {
            host: lookup("HOST").unwrap_or(defaults.host),
            port: parse_var(&lookup, "PORT", defaults.port)?,
            save_dir: lookup("TRANSCRIPT_DIR").unwrap_or(defaults.save_dir),
            youtube_base_url: lookup("YOUTUBE_BASE_URL")
                .map(|v| v.trim_end_matches('/').to_string())
                .unwrap_or(defaults.youtube_base_url),
            preferred_languages,
            http_timeout_secs: parse_var(&lookup, "HTTP_TIMEOUT_SECS", defaults.http_timeout_secs)?,
            cache_ttl_secs: parse_var(
                &lookup,
                "TRANSCRIPT_CACHE_TTL_SECS",
                defaults.cache_ttl_secs,
            )?,
        })
    }

    /// Config for tests: caching off, nothing read from the environment.
    pub fn test_default() -> Self {
        Self {
            host: "127.0.0.1".to_string(),
            youtube_base_url: "http://127.0.0.1:9".to_string(),
            save_dir: std::env::temp_dir()
                .join("transcript-server-test")
                .to_string_lossy()
                .into_owned(),
            cache_ttl_secs: 0,
            ..Self::default()
        }
    }

    /// Socket address string the server binds to.
    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

fn parse_var<F, T>(lookup: &F, name: &'static str, default: T) -> Result<T, ConfigError>
where
    F: Fn(&str) -> Option<String>,
    T: FromStr,
{
    match lookup(name) {
        Some(raw) => raw.trim().parse().map_err(|_| ConfigError::Invalid(name)),
        None => Ok(default),
    }
}

fn parse_languages(raw: &str) -> Result<Vec<String>, ConfigError> {
    let langs: Vec<String> = raw
        .split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .collect();

    if langs.is_empty() {
        return Err(ConfigError::Invalid("TRANSCRIPT_LANGUAGES"));
    }
    Ok(langs)
}

/// Configuration errors
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Invalid value for environment variable: {0}")]
    Invalid(&'static str),
}
