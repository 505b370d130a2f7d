use langattr::{LanguageRegistry, registry};
use langattr_cli::{
    FileAudit, audit_file,
    view::{render_audit, render_languages, render_parts},
};
use std::fs;
use tempfile::TempDir;

#[test]
fn test_render_parts_text() {
    assert_eq!(
        render_parts("zh-Hans-CN", false),
        "language: zh\nscript: hans\nregion: CN"
    );
    assert_eq!(render_parts("", false), "language: ");
}

#[test]
fn test_render_parts_json_skips_missing_fields() {
    let json = render_parts("fr-CA", true);
    let value: serde_json::Value = serde_json::from_str(&json).unwrap();
    assert_eq!(value["language"], "fr");
    assert_eq!(value["region"], "CA");
    assert!(value.get("script").is_none());
}

#[test]
fn test_render_languages_text() {
    let registry = LanguageRegistry::builder()
        .with_language("tlh", "Klingon")
        .build()
        .unwrap();
    let text = render_languages(&registry, false);
    assert!(text.lines().any(|l| l == "tlh\tKlingon"));
    assert!(text.lines().any(|l| l == "ar\tArabic"));
}

#[test]
fn test_render_audit_text() {
    let temp_dir = TempDir::new().unwrap();
    let file = temp_dir.path().join("page.html");
    fs::write(&file, "<p lang=\"ar\" dir=\"ltr\">x</p>\n<p lang=\"EN_gb\">y</p>").unwrap();

    let audit = audit_file(&file, registry());
    let text = render_audit(&[audit], false);

    assert!(text.contains("line 1: <p lang=\"ar\"> Arabic (ar) rtl  [dir=\"ltr\" but language is rtl]"));
    assert!(text.contains("line 2: <p lang=\"EN_gb\"> English (United Kingdom) (en-GB) ltr  [invalid; normalize to en-GB]"));
    assert!(text.contains("Dir mismatches: 1"));
    assert!(text.contains("  en-GB: 1"));
}

#[test]
fn test_render_audit_read_error() {
    let audit: FileAudit = audit_file(std::path::Path::new("missing/page.html"), registry());
    assert!(!audit.is_clean());
    let text = render_audit(&[audit], false);
    assert!(text.contains("=== missing/page.html ==="));
    assert!(text.contains("error:"));
}
