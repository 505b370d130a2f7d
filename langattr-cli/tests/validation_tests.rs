use langattr_cli::{
    Settings,
    validation::{ValidationContext, validate_config_path, validate_context, validate_file_path},
};
use std::fs;
use tempfile::TempDir;

#[test]
fn test_validate_file_path_exists() {
    let temp_dir = TempDir::new().unwrap();
    let test_file = temp_dir.path().join("page.html");
    fs::write(&test_file, "<p lang=\"en\">hi</p>").unwrap();

    assert!(validate_file_path(test_file.to_str().unwrap()).is_ok());
}

#[test]
fn test_validate_file_path_not_exists() {
    let error = validate_file_path("nonexistent_file.html").unwrap_err();
    assert!(error.contains("File does not exist"));
}

#[test]
fn test_validate_file_path_directory() {
    let temp_dir = TempDir::new().unwrap();
    let error = validate_file_path(temp_dir.path().to_str().unwrap()).unwrap_err();
    assert!(error.contains("Path is not a file"));
}

#[test]
fn test_validate_config_path() {
    let temp_dir = TempDir::new().unwrap();
    let good = temp_dir.path().join("languages.yaml");
    let bad = temp_dir.path().join("languages.cfg");
    fs::write(&good, "languages: []\n").unwrap();
    fs::write(&bad, "").unwrap();

    assert!(validate_config_path(good.to_str().unwrap()).is_ok());
    assert!(
        validate_config_path(bad.to_str().unwrap())
            .unwrap_err()
            .contains("unsupported format")
    );
}

#[test]
fn test_validate_context() {
    let temp_dir = TempDir::new().unwrap();
    let page = temp_dir.path().join("page.html");
    let config = temp_dir.path().join("languages.toml");
    fs::write(&page, "").unwrap();
    fs::write(&config, "").unwrap();

    let context = ValidationContext::new()
        .with_input_file(page.to_str().unwrap().to_string())
        .with_config_file(config.to_str().unwrap().to_string());
    assert!(validate_context(&context).is_ok());

    let context = ValidationContext::new().with_input_file("missing.html".to_string());
    let error = validate_context(&context).unwrap_err();
    assert!(error.contains("Input file 1 validation failed"));

    let context = ValidationContext::new().with_config_file("languages.ini".to_string());
    let error = validate_context(&context).unwrap_err();
    assert!(error.contains("Config validation failed"));
}

#[test]
fn test_settings_load_validates_config_path() {
    let temp_dir = TempDir::new().unwrap();
    let bad = temp_dir.path().join("languages.cfg");
    fs::write(&bad, "").unwrap();

    let error = Settings::load(Some(bad.to_str().unwrap())).unwrap_err();
    assert!(error.contains("Config validation failed"));
    assert!(error.contains("unsupported format"));

    let error = Settings::load(Some("missing.toml")).unwrap_err();
    assert!(error.contains("File does not exist"));

    let settings = Settings::load(None).unwrap();
    assert!(settings.default_language.is_none());
    assert!(!settings.registry.is_empty());
}
