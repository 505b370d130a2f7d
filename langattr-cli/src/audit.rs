use std::path::{Path, PathBuf};

use langattr::{AuditSummary, LangFinding, LanguageRegistry, audit_html};
use rayon::prelude::*;
use serde::Serialize;

/// Audit result for a single markup file.
#[derive(Debug, Clone, Serialize)]
pub struct FileAudit {
    pub path: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    pub summary: AuditSummary,
    pub findings: Vec<LangFinding>,
}

impl FileAudit {
    pub fn is_clean(&self) -> bool {
        self.error.is_none() && self.summary.is_clean()
    }
}

/// Audit a single file. Read failures are recorded, not propagated.
pub fn audit_file(path: &Path, registry: &LanguageRegistry) -> FileAudit {
    let path_str = path.display().to_string();
    match std::fs::read_to_string(path) {
        Ok(html) => {
            let findings = audit_html(&html, registry);
            tracing::debug!(path = %path_str, findings = findings.len(), "audited file");
            FileAudit {
                path: path_str,
                error: None,
                summary: AuditSummary::from_findings(&findings),
                findings,
            }
        }
        Err(e) => {
            tracing::warn!(path = %path_str, error = %e, "cannot read file");
            FileAudit {
                path: path_str,
                error: Some(e.to_string()),
                summary: AuditSummary::default(),
                findings: Vec::new(),
            }
        }
    }
}

/// Audit many files in parallel, keeping input order in the result.
pub fn audit_files(paths: &[PathBuf], registry: &LanguageRegistry) -> Vec<FileAudit> {
    paths
        .par_iter()
        .map(|path| audit_file(path, registry))
        .collect()
}

/// Combined summary over several file audits.
pub fn combined_summary(audits: &[FileAudit]) -> AuditSummary {
    let mut total = AuditSummary::default();
    for audit in audits {
        total.total += audit.summary.total;
        total.invalid += audit.summary.invalid;
        total.needs_normalization += audit.summary.needs_normalization;
        total.dir_mismatches += audit.summary.dir_mismatches;
        for (lang, count) in &audit.summary.languages {
            *total.languages.entry(lang.clone()).or_insert(0) += count;
        }
    }
    total
}
