use langattr::ConfigFormat;
use std::path::Path;

/// Validation context for the inputs of one command invocation
pub struct ValidationContext {
    pub input_files: Vec<String>,
    pub config_file: Option<String>,
}

impl Default for ValidationContext {
    fn default() -> Self {
        Self::new()
    }
}

impl ValidationContext {
    pub fn new() -> Self {
        Self {
            input_files: Vec::new(),
            config_file: None,
        }
    }

    pub fn with_input_file(mut self, file: String) -> Self {
        self.input_files.push(file);
        self
    }

    pub fn with_config_file(mut self, file: String) -> Self {
        self.config_file = Some(file);
        self
    }
}

/// Validate file path exists and is readable
pub fn validate_file_path(path: &str) -> Result<(), String> {
    let path_obj = Path::new(path);

    if !path_obj.exists() {
        return Err(format!("File does not exist: {}", path));
    }

    if !path_obj.is_file() {
        return Err(format!("Path is not a file: {}", path));
    }

    Ok(())
}

/// Validate a config file: it must exist and use a supported extension
pub fn validate_config_path(path: &str) -> Result<(), String> {
    validate_file_path(path)?;
    ConfigFormat::from_path(path)
        .map(|_| ())
        .map_err(|e| e.to_string())
}

/// Validate a complete validation context
pub fn validate_context(context: &ValidationContext) -> Result<(), String> {
    for (i, input) in context.input_files.iter().enumerate() {
        validate_file_path(input)
            .map_err(|e| format!("Input file {} validation failed: {}", i + 1, e))?;
    }

    if let Some(ref config) = context.config_file {
        validate_config_path(config).map_err(|e| format!("Config validation failed: {}", e))?;
    }

    Ok(())
}
