//! Loading registry additions and the default language from a config file.
//!
//! ```toml
//! default_language = "en-GB"
//! rtl_scripts = ["Mero"]
//!
//! [[languages]]
//! code = "tlh"
//! name = "Klingon"
//!
//! [[languages]]
//! code = "ks"
//! name = "Kashmiri"
//! direction = "rtl"
//! ```

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::{
    error::Error,
    registry::{LanguageRegistry, RegistryBuilder},
    tag::{clean_lang_attr, is_valid_lang},
    types::Direction,
};

/// One configured language.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct LanguageEntry {
    /// Language tag, normalized when the registry is built.
    pub code: String,

    /// Display name shown to authors.
    pub name: String,

    /// Optional direction override used when the tag carries no script.
    #[serde(skip_serializing_if = "Option::is_none")]
    #[serde(default)]
    pub direction: Option<Direction>,
}

/// Top-level configuration.
#[derive(Debug, Clone, PartialEq, Eq, Default, Deserialize, Serialize)]
#[serde(default)]
pub struct LanguageConfig {
    /// Editor-level default language for new documents.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub default_language: Option<String>,

    /// Additional right-to-left script codes.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub rtl_scripts: Vec<String>,

    /// Languages added to (or renamed in) the builtin table.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub languages: Vec<LanguageEntry>,
}

/// Config file formats, chosen by file extension.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigFormat {
    Toml,
    Json,
    Yaml,
}

impl ConfigFormat {
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self, Error> {
        let ext = path
            .as_ref()
            .extension()
            .and_then(|ext| ext.to_str())
            .unwrap_or("")
            .to_lowercase();
        match ext.as_str() {
            "toml" => Ok(ConfigFormat::Toml),
            "json" => Ok(ConfigFormat::Json),
            "yaml" | "yml" => Ok(ConfigFormat::Yaml),
            _ => Err(Error::UnsupportedFormat(format!(
                "config extension `{}` (expected toml, json, yaml or yml)",
                ext
            ))),
        }
    }
}

impl LanguageConfig {
    /// Reads a config file, picking the format from its extension.
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self, Error> {
        let path = path.as_ref();
        let format = ConfigFormat::from_path(path)?;
        let content = std::fs::read_to_string(path)?;
        tracing::debug!(path = %path.display(), ?format, "loading language config");
        Self::from_str_with_format(&content, format)
    }

    pub fn from_str_with_format(content: &str, format: ConfigFormat) -> Result<Self, Error> {
        match format {
            ConfigFormat::Toml => Self::from_toml_str(content),
            ConfigFormat::Json => Self::from_json_str(content),
            ConfigFormat::Yaml => Self::from_yaml_str(content),
        }
    }

    pub fn from_toml_str(content: &str) -> Result<Self, Error> {
        Ok(toml::from_str(content)?)
    }

    pub fn from_json_str(content: &str) -> Result<Self, Error> {
        Ok(serde_json::from_str(content)?)
    }

    pub fn from_yaml_str(content: &str) -> Result<Self, Error> {
        Ok(serde_yaml::from_str(content)?)
    }

    /// The configured default language, normalized. Invalid values are errors.
    pub fn default_language(&self) -> Result<Option<String>, Error> {
        match self.default_language.as_deref() {
            None => Ok(None),
            Some(raw) => {
                let normalized = clean_lang_attr(Some(raw));
                if is_valid_lang(Some(&normalized)) {
                    Ok(Some(normalized))
                } else {
                    Err(Error::invalid_language(raw))
                }
            }
        }
    }

    /// Builds a registry: builtin tables plus everything configured here.
    pub fn build_registry(&self) -> Result<LanguageRegistry, Error> {
        self.default_language()?;

        let mut builder = RegistryBuilder::new();
        for script in &self.rtl_scripts {
            builder = builder.with_rtl_script(script.as_str());
        }
        for entry in &self.languages {
            builder = builder.with_language(entry.code.as_str(), entry.name.as_str());
            if let Some(direction) = entry.direction {
                builder = builder.with_direction_override(entry.code.as_str(), direction);
            }
        }
        builder.build()
    }
}
