//! Server configuration parsed from environment variables.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

pub const DEFAULT_RECOGNITION_API_URL: &str = "http://localhost:8900";
pub const DEFAULT_PORT: u16 = 3000;

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("invalid PORT value: {value}")]
    InvalidPort { value: String },
    #[error("RECOGNITION_API_URL must be an http(s) URL, got: {value}")]
    InvalidApiUrl { value: String },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Base URL of the recognition service, without a trailing slash.
    pub recognition_api_url: String,
    pub port: u16,
}

impl Config {
    /// Build typed config from environment variables.
    ///
    /// Optional:
    /// - `RECOGNITION_API_URL`: default `http://localhost:8900`
    /// - `PORT`: default 3000
    ///
    /// # Errors
    ///
    /// Returns a [`ConfigError`] when a value is present but invalid.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build config from an arbitrary key lookup.
    ///
    /// # Errors
    ///
    /// Returns a [`ConfigError`] when a value is present but invalid.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let recognition_api_url = parse_api_url(lookup("RECOGNITION_API_URL").as_deref())?;
        let port = parse_port(lookup("PORT").as_deref())?;
        Ok(Self { recognition_api_url, port })
    }
}

fn parse_api_url(raw: Option<&str>) -> Result<String, ConfigError> {
    let value = match raw.map(str::trim) {
        None | Some("") => return Ok(DEFAULT_RECOGNITION_API_URL.to_owned()),
        Some(value) => value,
    };
    if !(value.starts_with("http://") || value.starts_with("https://")) {
        return Err(ConfigError::InvalidApiUrl { value: value.to_owned() });
    }
    Ok(value.trim_end_matches('/').to_owned())
}

fn parse_port(raw: Option<&str>) -> Result<u16, ConfigError> {
    match raw.map(str::trim) {
        None | Some("") => Ok(DEFAULT_PORT),
        Some(value) => value
            .parse::<u16>()
            .map_err(|_| ConfigError::InvalidPort { value: value.to_owned() }),
    }
}
