use std::collections::HashSet;
use std::path::{Path, PathBuf};

use globset::{Glob, GlobBuilder, GlobSet, GlobSetBuilder};
use ignore::WalkBuilder;
use rayon::prelude::*;

/// File extensions audited when a directory is given as input.
pub const MARKUP_EXTENSIONS: [&str; 4] = ["html", "htm", "xhtml", "xht"];

/// Expand audit inputs into concrete markup files.
///
/// Each input may be a file, a directory (searched for markup files) or a glob
/// pattern. Walks are .gitignore-aware and run in parallel. Inputs that match
/// nothing are kept as-is so the caller can report them as missing.
pub fn expand_audit_inputs(inputs: &[String]) -> Result<Vec<PathBuf>, String> {
    fn has_glob_meta(s: &str) -> bool {
        s.bytes().any(|b| matches!(b, b'*' | b'?' | b'[' | b'{'))
    }

    // Directory part of a pattern, up to the first glob meta-character
    fn static_prefix_dir(pattern: &str) -> PathBuf {
        let idx = pattern
            .find(['*', '?', '[', '{'])
            .unwrap_or(pattern.len());
        let p = Path::new(&pattern[..idx]);
        if p.is_dir() {
            p.to_path_buf()
        } else {
            p.parent()
                .filter(|pp| !pp.as_os_str().is_empty())
                .map(|pp| pp.to_path_buf())
                .unwrap_or_else(|| PathBuf::from("."))
        }
    }

    let mut literal: Vec<PathBuf> = Vec::new();
    let mut dirs: Vec<PathBuf> = Vec::new();
    let mut patterns: Vec<&String> = Vec::new();
    for input in inputs {
        if has_glob_meta(input) {
            patterns.push(input);
        } else if Path::new(input).is_dir() {
            dirs.push(PathBuf::from(input));
        } else {
            literal.push(PathBuf::from(input));
        }
    }

    let pattern_set = build_glob_set(patterns.iter().map(|p| p.as_str()), true)?;
    let markup_set = build_glob_set(MARKUP_EXTENSIONS.iter().map(|e| format!("*.{}", e)), false)?;

    // (root, matcher) pairs: pattern roots match against the user's globs,
    // plain directories against the markup extensions
    let mut roots: Vec<(PathBuf, &GlobSet)> = Vec::new();
    for pat in &patterns {
        let root = static_prefix_dir(pat);
        if !roots.iter().any(|(r, _)| r == &root) {
            roots.push((root, &pattern_set));
        }
    }
    for dir in dirs {
        roots.push((dir, &markup_set));
    }

    let walked: Vec<PathBuf> = roots
        .par_iter()
        .map(|(root, set)| {
            let mut out = Vec::new();
            let walker = WalkBuilder::new(root)
                .git_ignore(true)
                .git_global(true)
                .git_exclude(true)
                .hidden(false)
                .ignore(true)
                .parents(true)
                .build();

            for dent in walker.flatten() {
                if !dent.file_type().is_some_and(|t| t.is_file()) {
                    continue;
                }
                let path = dent.path();
                let candidate = path.strip_prefix("./").unwrap_or(path);
                if set.is_match(candidate) || set.is_match(path) {
                    out.push(candidate.to_path_buf());
                }
            }
            out
        })
        .flatten()
        .collect();

    if walked.is_empty() && literal.is_empty() {
        return Ok(inputs.iter().map(PathBuf::from).collect());
    }

    // Deduplicate; parallel walks finish in any order, so sort for stable output
    let mut seen: HashSet<PathBuf> = HashSet::new();
    let mut results: Vec<PathBuf> = Vec::with_capacity(literal.len() + walked.len());
    for path in literal.into_iter().chain(walked) {
        if seen.insert(path.clone()) {
            results.push(path);
        }
    }
    results.sort();
    Ok(results)
}

fn build_glob_set<I, S>(patterns: I, literal_separator: bool) -> Result<GlobSet, String>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut builder = GlobSetBuilder::new();
    for pat in patterns {
        let pat = pat.as_ref();
        let glob: Glob = GlobBuilder::new(pat)
            .literal_separator(literal_separator)
            .build()
            .map_err(|e| format!("Invalid glob pattern '{}': {}", pat, e))?;
        builder.add(glob);
    }
    builder
        .build()
        .map_err(|e| format!("Failed to build glob set: {}", e))
}
