//! Picking a document's default language from the places it may be declared.

use crate::tag::{clean_lang_attr, is_valid_lang};

/// Language used when no candidate source yields a valid tag.
pub const FALLBACK_LANGUAGE: &str = "en";

/// Environment variables consulted by [`DefaultLanguageSources::with_environment`],
/// in priority order.
pub const LOCALE_ENV_VARS: [&str; 3] = ["LC_ALL", "LC_MESSAGES", "LANG"];

/// Candidate sources for the default language, highest priority first:
/// the document's own `lang` attribute, the editor's configured default,
/// then the user agent / OS locales.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct DefaultLanguageSources {
    pub document: Option<String>,
    pub configured: Option<String>,
    pub user_agent: Vec<String>,
}

impl DefaultLanguageSources {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_document(mut self, lang: Option<String>) -> Self {
        self.document = lang;
        self
    }

    pub fn with_configured(mut self, lang: Option<String>) -> Self {
        self.configured = lang;
        self
    }

    pub fn with_user_agent(mut self, lang: impl Into<String>) -> Self {
        self.user_agent.push(lang.into());
        self
    }

    /// Appends the first set locale environment variable as a user agent
    /// candidate, converted from POSIX form.
    pub fn with_environment(self) -> Self {
        let found = LOCALE_ENV_VARS
            .iter()
            .filter_map(|var| std::env::var(var).ok())
            .find(|value| !value.trim().is_empty());
        match found.as_deref().and_then(posix_locale_to_tag) {
            Some(tag) => self.with_user_agent(tag),
            None => self,
        }
    }

    /// All candidates in priority order.
    pub fn candidates(&self) -> impl Iterator<Item = &str> {
        self.document
            .iter()
            .chain(self.configured.iter())
            .chain(self.user_agent.iter())
            .map(String::as_str)
    }
}

/// Returns the first candidate that normalizes to a valid tag, or
/// [`FALLBACK_LANGUAGE`].
pub fn detect_default_language(sources: &DefaultLanguageSources) -> String {
    for candidate in sources.candidates() {
        let normalized = clean_lang_attr(Some(candidate));
        if is_valid_lang(Some(&normalized)) {
            tracing::debug!(candidate, language = %normalized, "default language detected");
            return normalized;
        }
        tracing::trace!(candidate, "skipping invalid default language candidate");
    }
    FALLBACK_LANGUAGE.to_string()
}

/// Converts a POSIX locale name (`en_US.UTF-8@euro`) into a normalized tag.
///
/// The codeset and modifier are dropped. `C` and `POSIX` carry no language
/// and yield `None`, as does anything that does not normalize to a valid tag.
pub fn posix_locale_to_tag(locale: &str) -> Option<String> {
    let name = locale
        .trim()
        .split(['.', '@'])
        .next()
        .unwrap_or_default();
    if name.is_empty() || name.eq_ignore_ascii_case("c") || name.eq_ignore_ascii_case("posix") {
        return None;
    }
    let tag = clean_lang_attr(Some(name));
    is_valid_lang(Some(&tag)).then_some(tag)
}
