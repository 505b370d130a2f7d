//! All error types for the langattr crate.
//!
//! The tag functions themselves never fail. These errors come from the
//! edges: locale parser hosts, configuration files and registry building.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("invalid language tag `{0}`")]
    InvalidLanguage(String),

    #[error("unsupported format: {0}")]
    UnsupportedFormat(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON parse error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("YAML parse error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("configuration error: {0}")]
    Config(String),
}

impl Error {
    /// Creates a new invalid-language error for the given raw tag.
    pub fn invalid_language(tag: impl Into<String>) -> Self {
        Error::InvalidLanguage(tag.into())
    }

    /// Creates a new configuration error
    pub fn config_error(message: impl Into<String>) -> Self {
        Error::Config(message.into())
    }
}
