//! Decomposition of language tags into [`LocaleParts`].
//!
//! Parsing goes through a host [`LocaleParser`] first (by default
//! [`UnicLocaleParser`], backed by `unic-locale`). Whatever the host rejects is
//! handed to [`FallbackParser`], which accepts any string.

use std::collections::HashMap;

use lazy_static::lazy_static;
use unic_locale::Locale;

use crate::{
    error::Error,
    tag::{is_alpha_of_len, is_numeric_region},
    traits::LocaleParser,
    types::LocaleParts,
};

lazy_static! {
    /// Deprecated and overlong language subtags, mapped to their preferred
    /// form (CLDR `languageAlias`, language-only entries).
    static ref LANGUAGE_ALIASES: HashMap<&'static str, &'static str> = [
        ("iw", "he"),
        ("in", "id"),
        ("ji", "yi"),
        ("jw", "jv"),
        ("mo", "ro"),
        ("tw", "ak"),
        ("ara", "ar"),
        ("arb", "ar"),
        ("heb", "he"),
        ("fas", "fa"),
        ("per", "fa"),
        ("pes", "fa"),
        ("urd", "ur"),
        ("yid", "yi"),
        ("pus", "ps"),
        ("div", "dv"),
        ("eng", "en"),
        ("fra", "fr"),
        ("fre", "fr"),
        ("deu", "de"),
        ("ger", "de"),
        ("spa", "es"),
        ("cmn", "zh"),
        ("zho", "zh"),
        ("chi", "zh"),
        ("zsm", "ms"),
    ]
    .into_iter()
    .collect();
}

/// Replaces a deprecated language subtag with its preferred form.
pub fn canonical_language(language: &str) -> &str {
    LANGUAGE_ALIASES.get(language).copied().unwrap_or(language)
}

/// Host parser backed by `unic-locale`.
///
/// Accepts `-` and `_` separators and full locales with `-u-`, `-t-` and
/// `-x-` extensions; only language, script and region are kept. Deprecated
/// language subtags are canonicalized (`iw` becomes `he`). Rejects tags that
/// are not well-formed locales, including bare private-use tags.
#[derive(Debug, Clone, Copy, Default)]
pub struct UnicLocaleParser;

impl LocaleParser for UnicLocaleParser {
    fn parse(&self, tag: &str) -> Result<LocaleParts, Error> {
        let locale: Locale = tag
            .parse()
            .map_err(|_| Error::invalid_language(tag))?;
        let id = &locale.id;

        let language = id.language.as_str().to_lowercase();
        Ok(LocaleParts {
            language: canonical_language(&language).to_string(),
            script: id.script.map(|s| s.as_str().to_lowercase()),
            region: id.region.map(|r| r.as_str().to_uppercase()),
        })
    }

    fn name(&self) -> &'static str {
        "unic-locale"
    }
}

/// Manual parser used when the host facility is missing or fails.
///
/// Splits on `-` only. The first part is the language, taken as-is apart from
/// lowercasing. Among the remaining parts, the first 4-letter alphabetic one
/// is the script and the first 2-letter alphabetic or 3-digit one is the
/// region; variants are ignored. Scanning stops at the first singleton
/// subtag, since everything after it belongs to an extension.
#[derive(Debug, Clone, Copy, Default)]
pub struct FallbackParser;

impl FallbackParser {
    pub fn parse_parts(&self, tag: &str) -> LocaleParts {
        let mut subtags = tag.split('-');
        let mut parts = LocaleParts::new(subtags.next().unwrap_or_default().to_lowercase());

        for subtag in subtags {
            if subtag.len() == 1 {
                break;
            }
            if parts.script.is_none() && is_alpha_of_len(subtag, 4) {
                parts.script = Some(subtag.to_lowercase());
            } else if parts.region.is_none()
                && (is_alpha_of_len(subtag, 2) || is_numeric_region(subtag))
            {
                parts.region = Some(subtag.to_uppercase());
            }
        }
        parts
    }
}

impl LocaleParser for FallbackParser {
    fn parse(&self, tag: &str) -> Result<LocaleParts, Error> {
        Ok(self.parse_parts(tag))
    }

    fn name(&self) -> &'static str {
        "fallback"
    }
}

/// Decomposes a tag into language, script and region using the default
/// `unic-locale` host with the manual fallback.
///
/// Never fails: empty input yields `LocaleParts { language: "" }`.
///
/// ```
/// use langattr::{get_locale_parts, LocaleParts};
///
/// assert_eq!(get_locale_parts("fr-CA"), LocaleParts::new("fr").with_region("CA"));
/// assert_eq!(get_locale_parts("en-GB-oed"), LocaleParts::new("en").with_region("GB"));
/// ```
pub fn get_locale_parts(lang: &str) -> LocaleParts {
    get_locale_parts_with(Some(&UnicLocaleParser), lang)
}

/// Like [`get_locale_parts`], with an explicit host parser (or none).
pub fn get_locale_parts_with(host: Option<&dyn LocaleParser>, lang: &str) -> LocaleParts {
    let tag = lang.trim();
    if tag.is_empty() {
        return LocaleParts::default();
    }

    if let Some(host) = host {
        match host.parse(tag) {
            Ok(parts) => return parts,
            Err(e) => {
                tracing::debug!(
                    parser = host.name(),
                    tag,
                    error = %e,
                    "host locale parser failed, using fallback"
                );
            }
        }
    }

    FallbackParser.parse_parts(tag)
}
