use langattr::{LanguageConfig, LanguageRegistry};

use crate::validation::{ValidationContext, validate_context};

/// Registry and defaults resolved from the optional `--config` file.
#[derive(Debug, Clone)]
pub struct Settings {
    pub registry: LanguageRegistry,
    pub default_language: Option<String>,
}

impl Settings {
    /// Builtin tables when no config file is given.
    pub fn load(config: Option<&str>) -> Result<Self, String> {
        let Some(path) = config else {
            return Ok(Self {
                registry: LanguageRegistry::builtin(),
                default_language: None,
            });
        };

        validate_context(&ValidationContext::new().with_config_file(path.to_string()))?;
        let config = LanguageConfig::from_path(path)
            .map_err(|e| format!("Cannot load config {}: {}", path, e))?;
        let default_language = config
            .default_language()
            .map_err(|e| format!("Invalid config {}: {}", path, e))?;
        let registry = config
            .build_registry()
            .map_err(|e| format!("Invalid config {}: {}", path, e))?;

        Ok(Self {
            registry,
            default_language,
        })
    }
}
