use langattr::{LanguageRegistry, get_locale_parts};
use serde_json::json;

use crate::audit::{FileAudit, combined_summary};

/// Render the parts of a tag, as JSON or as `key: value` lines.
pub fn render_parts(tag: &str, json_output: bool) -> String {
    let parts = get_locale_parts(tag);
    if json_output {
        return serde_json::to_string_pretty(&parts).unwrap_or_else(|_| "{}".to_string());
    }

    let mut lines = vec![format!("language: {}", parts.language)];
    if let Some(script) = &parts.script {
        lines.push(format!("script: {}", script));
    }
    if let Some(region) = &parts.region {
        lines.push(format!("region: {}", region));
    }
    lines.join("\n")
}

/// Render the registry's languages, one `code<TAB>name` per line or as JSON.
pub fn render_languages(registry: &LanguageRegistry, json_output: bool) -> String {
    if json_output {
        let list: Vec<_> = registry
            .languages()
            .map(|(code, name)| {
                json!({
                    "code": code,
                    "name": name,
                    "direction": registry.text_direction(code),
                })
            })
            .collect();
        return serde_json::to_string_pretty(&list).unwrap_or_else(|_| "[]".to_string());
    }

    registry
        .languages()
        .map(|(code, name)| format!("{}\t{}", code, name))
        .collect::<Vec<_>>()
        .join("\n")
}

/// Render audit results for humans or as a JSON document.
pub fn render_audit(audits: &[FileAudit], json_output: bool) -> String {
    let summary = combined_summary(audits);

    if json_output {
        let body = json!({
            "summary": summary,
            "files": audits,
        });
        return serde_json::to_string_pretty(&body).unwrap_or_else(|_| "{}".to_string());
    }

    let mut out = Vec::new();
    for audit in audits {
        out.push(format!("=== {} ===", audit.path));
        if let Some(error) = &audit.error {
            out.push(format!("  error: {}", error));
            continue;
        }
        if audit.findings.is_empty() {
            out.push("  no lang attributes".to_string());
        }
        for finding in &audit.findings {
            let mut notes = Vec::new();
            if !finding.valid {
                notes.push("invalid".to_string());
            }
            if finding.needs_normalization && !finding.normalized.is_empty() {
                notes.push(format!("normalize to {}", finding.normalized));
            }
            if finding.dir_mismatch {
                notes.push(format!(
                    "dir=\"{}\" but language is {}",
                    finding.declared_dir.as_deref().unwrap_or_default(),
                    finding.direction
                ));
            }
            let notes = if notes.is_empty() {
                String::new()
            } else {
                format!("  [{}]", notes.join("; "))
            };
            out.push(format!(
                "  line {}: <{} lang=\"{}\"> {} {}{}",
                finding.line, finding.element, finding.lang, finding.label, finding.direction, notes
            ));
        }
    }

    out.push(String::new());
    out.push("=== Summary ===".to_string());
    out.push(format!("Files: {}", audits.len()));
    out.push(format!("Lang attributes: {}", summary.total));
    out.push(format!("Invalid: {}", summary.invalid));
    out.push(format!("Needs normalization: {}", summary.needs_normalization));
    out.push(format!("Dir mismatches: {}", summary.dir_mismatches));
    for (lang, count) in &summary.languages {
        let lang = if lang.is_empty() { "<empty>" } else { lang.as_str() };
        out.push(format!("  {}: {}", lang, count));
    }
    out.join("\n")
}
