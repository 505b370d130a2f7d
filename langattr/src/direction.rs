//! Writing direction inference for language tags.

use std::collections::HashSet;

use lazy_static::lazy_static;

use crate::{parser::get_locale_parts, types::Direction, types::LocaleParts};

lazy_static! {
    /// ISO 15924 scripts written right-to-left (lowercased).
    pub(crate) static ref RTL_SCRIPTS: HashSet<&'static str> = [
        "arab", "hebr", "syrc", "thaa", "nkoo", "samr", "phnx", "mand", "adlm", "rohg", "yezi",
        "elym", "palm", "nbat", "armi",
    ]
    .into_iter()
    .collect();

    /// Languages whose default script is right-to-left.
    pub(crate) static ref RTL_LANGUAGES: HashSet<&'static str> = [
        "ar", "fa", "he", "ur", "ps", "dv", "ckb", "yi", "arc", "azb", "bqi", "glk", "lrc", "mzn",
        "pnb", "bal", "syr", "sam", "nqo", "phn", "rhg", "skr", "bgn",
    ]
    .into_iter()
    .collect();

    /// Languages commonly written in both an RTL and an LTR script, depending
    /// on region or community.
    pub(crate) static ref AMBIGUOUS_LANGUAGES: HashSet<&'static str> = [
        "ku", "pa", "ha", "az", "ms", "tg", "ug", "sd", "ks", "rhg", "bft",
    ]
    .into_iter()
    .collect();
}

/// Infers the writing direction of a tag.
///
/// An explicit script always decides. Without one, the language decides:
/// RTL languages give [`Direction::Rtl`], languages with no single default
/// script give [`Direction::Auto`], and everything else (including empty or
/// unknown input) gives [`Direction::Ltr`].
///
/// ```
/// use langattr::{get_text_direction, Direction};
///
/// assert_eq!(get_text_direction("ku"), Direction::Auto);
/// assert_eq!(get_text_direction("ku-Arab"), Direction::Rtl);
/// assert_eq!(get_text_direction("ku-Latn"), Direction::Ltr);
/// ```
pub fn get_text_direction(lang: &str) -> Direction {
    direction_for_parts(&get_locale_parts(lang))
}

/// Direction inference over already-parsed parts, using the builtin tables.
pub fn direction_for_parts(parts: &LocaleParts) -> Direction {
    if let Some(script) = parts.script.as_deref() {
        return script_direction(script);
    }
    language_direction(&parts.language)
}

/// Direction of a script subtag: RTL if listed, LTR otherwise.
pub fn script_direction(script: &str) -> Direction {
    if RTL_SCRIPTS.contains(script.to_lowercase().as_str()) {
        Direction::Rtl
    } else {
        Direction::Ltr
    }
}

/// Direction of a bare language subtag when no script is known.
pub fn language_direction(language: &str) -> Direction {
    let language = language.to_lowercase();
    let direction = if RTL_LANGUAGES.contains(language.as_str()) {
        Direction::Rtl
    } else if AMBIGUOUS_LANGUAGES.contains(language.as_str()) {
        Direction::Auto
    } else {
        Direction::Ltr
    };
    tracing::trace!(language = %language, %direction, "language direction");
    direction
}
