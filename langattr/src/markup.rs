//! Auditing existing language markup in HTML content.
//!
//! Start tags come from the `html5ever` tokenizer, so quoting, comments,
//! CDATA and raw-text elements (`<script>`, `<style>`, ...) are handled the
//! way a browser handles them. Only `lang` and `dir` are read; there is no
//! tree construction.

use std::collections::BTreeMap;

use html5ever::{
    tendril::StrTendril,
    tokenizer::{
        BufferQueue, Tag, TagKind, Token, TokenSink, TokenSinkResult, Tokenizer, TokenizerOpts,
        states::RawKind,
    },
};
use serde::Serialize;

use crate::{
    registry::LanguageRegistry,
    tag::{clean_lang_attr, is_valid_lang},
    types::Direction,
};

/// A start tag carrying a `lang` attribute.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LangAttribute {
    /// Lowercased element name.
    pub element: String,
    /// 1-based line on which the start tag ends.
    pub line: usize,
    /// Raw `lang` value (empty when the attribute has no value).
    pub lang: String,
    /// Raw `dir` value, if present.
    pub dir: Option<String>,
}

/// Analysis of one [`LangAttribute`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LangFinding {
    pub element: String,
    pub line: usize,
    pub lang: String,
    pub normalized: String,
    pub valid: bool,
    /// Raw value differs from its normalized form.
    pub needs_normalization: bool,
    pub label: String,
    pub direction: Direction,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub declared_dir: Option<String>,
    /// Declared `dir` contradicts a definite inferred direction.
    pub dir_mismatch: bool,
}

impl LangAttribute {
    pub fn finding(&self, registry: &LanguageRegistry) -> LangFinding {
        let normalized = clean_lang_attr(Some(&self.lang));
        let direction = registry.text_direction(&normalized);
        let declared = self.dir.as_deref().and_then(|d| d.parse::<Direction>().ok());
        let dir_mismatch = match declared {
            Some(declared) => {
                direction.is_definite() && declared.is_definite() && declared != direction
            }
            None => false,
        };

        LangFinding {
            element: self.element.clone(),
            line: self.line,
            lang: self.lang.clone(),
            valid: is_valid_lang(Some(&self.lang)),
            needs_normalization: self.lang.trim() != normalized,
            label: registry.display_label(&normalized),
            normalized,
            direction,
            declared_dir: self.dir.clone(),
            dir_mismatch,
        }
    }
}

/// Token sink that records `lang` start tags.
///
/// It also switches the tokenizer into the raw-text states a tree builder
/// would, so markup-looking text inside `<script>` or `<textarea>` is left
/// alone.
#[derive(Debug, Default)]
struct LangCollector {
    found: Vec<LangAttribute>,
}

impl LangCollector {
    fn record(&mut self, tag: &Tag, line: u64) {
        let mut lang = None;
        let mut dir = None;
        for attr in &tag.attrs {
            match &*attr.name.local {
                "lang" if lang.is_none() => lang = Some(attr.value.to_string()),
                "dir" if dir.is_none() => dir = Some(attr.value.to_string()),
                _ => {}
            }
        }

        if let Some(lang) = lang {
            self.found.push(LangAttribute {
                element: tag.name.to_string(),
                line: line as usize,
                lang,
                dir,
            });
        }
    }
}

impl TokenSink for LangCollector {
    type Handle = ();

    fn process_token(&mut self, token: Token, line_number: u64) -> TokenSinkResult<()> {
        let Token::TagToken(tag) = token else {
            return TokenSinkResult::Continue;
        };
        if !matches!(tag.kind, TagKind::StartTag) {
            return TokenSinkResult::Continue;
        }

        self.record(&tag, line_number);
        match &*tag.name {
            "script" => TokenSinkResult::RawData(RawKind::ScriptData),
            "style" | "xmp" | "iframe" | "noembed" | "noframes" | "noscript" => {
                TokenSinkResult::RawData(RawKind::Rawtext)
            }
            "textarea" | "title" => TokenSinkResult::RawData(RawKind::Rcdata),
            "plaintext" => TokenSinkResult::Plaintext,
            _ => TokenSinkResult::Continue,
        }
    }
}

/// Finds every start tag with a `lang` attribute, in document order.
pub fn scan_lang_attributes(html: &str) -> Vec<LangAttribute> {
    let mut input = BufferQueue::default();
    input.push_back(StrTendril::from_slice(html));

    let mut tokenizer = Tokenizer::new(LangCollector::default(), TokenizerOpts::default());
    let _ = tokenizer.feed(&mut input);
    tokenizer.end();
    tokenizer.sink.found
}

/// Scans and analyses all language markup in `html`.
pub fn audit_html(html: &str, registry: &LanguageRegistry) -> Vec<LangFinding> {
    scan_lang_attributes(html)
        .iter()
        .map(|attr| attr.finding(registry))
        .collect()
}

/// Totals over a set of findings.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
pub struct AuditSummary {
    pub total: usize,
    pub invalid: usize,
    pub needs_normalization: usize,
    pub dir_mismatches: usize,
    /// Occurrences per normalized tag.
    pub languages: BTreeMap<String, usize>,
}

impl AuditSummary {
    pub fn from_findings(findings: &[LangFinding]) -> Self {
        let mut summary = AuditSummary::default();
        for finding in findings {
            summary.total += 1;
            if !finding.valid {
                summary.invalid += 1;
            }
            if finding.needs_normalization {
                summary.needs_normalization += 1;
            }
            if finding.dir_mismatch {
                summary.dir_mismatches += 1;
            }
            *summary
                .languages
                .entry(finding.normalized.clone())
                .or_insert(0) += 1;
        }
        summary
    }

    /// No invalid tags and no direction contradictions.
    pub fn is_clean(&self) -> bool {
        self.invalid == 0 && self.dir_mismatches == 0
    }
}
