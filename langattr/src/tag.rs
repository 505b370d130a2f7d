//! Normalization, validation and base-language extraction for raw `lang`
//! attribute values.
//!
//! Every function here is total: garbage in yields an empty string or
//! `false`, never a panic or an error.

use lazy_static::lazy_static;
use regex::Regex;

/// Shortest tag accepted by [`is_valid_lang`].
pub const MIN_TAG_LEN: usize = 2;
/// Longest tag accepted by [`is_valid_lang`].
pub const MAX_TAG_LEN: usize = 35;

lazy_static! {
    /// Permissive BCP-47 shape: a 2-3 letter language with optional script and
    /// region, a bare 4 or 5-8 letter language, or a private-use `x-` tag,
    /// followed by any number of 1-8 character alphanumeric subtags.
    static ref LANG_TAG_RE: Regex = Regex::new(
        r"(?i)^(?:[a-z]{2,3}(?:-[a-z]{4})?(?:-(?:[a-z]{2}|[0-9]{3}))?|[a-z]{4}|[a-z]{5,8}|x(?:-[a-z0-9]{1,8})+)(?:-[a-z0-9]{1,8})*$"
    )
    .expect("language tag pattern is valid");
}

/// Normalizes a raw `lang` attribute into canonical BCP-47 casing.
///
/// Only the first whitespace-separated token survives: `"en fr"` becomes
/// `"en"`, since a `lang` attribute carries exactly one tag. Private-use tags
/// (`x-...`) are lowercased and otherwise left alone. Underscores are accepted
/// as separators and rewritten to hyphens.
///
/// ```
/// use langattr::clean_lang_attr;
///
/// assert_eq!(clean_lang_attr(Some("zh_hans_sg")), "zh-Hans-SG");
/// assert_eq!(clean_lang_attr(Some(" es-mx ")), "es-MX");
/// assert_eq!(clean_lang_attr(None), "");
/// ```
pub fn clean_lang_attr(raw: Option<&str>) -> String {
    let Some(raw) = raw.filter(|r| !r.is_empty()) else {
        return String::new();
    };

    let Some(token) = raw.split_whitespace().next() else {
        return String::new();
    };

    let lowered = token.to_lowercase();
    if lowered.starts_with("x-") {
        return lowered;
    }

    let parts: Vec<&str> = token.split(['-', '_']).collect();
    if parts.len() == 1 {
        return lowered;
    }

    // Script and region positions only exist before the first singleton;
    // extension and private-use subtags are lowercase.
    let extension_start = parts
        .iter()
        .skip(1)
        .position(|part| part.len() == 1)
        .map_or(parts.len(), |i| i + 1);

    parts
        .iter()
        .enumerate()
        .map(|(i, part)| match i {
            0 => part.to_lowercase(),
            _ if i >= extension_start => part.to_lowercase(),
            1 if is_alpha_of_len(part, 4) => title_case(part),
            1 | 2 if is_alpha_of_len(part, 2) => part.to_uppercase(),
            1 | 2 if is_numeric_region(part) => part.to_string(),
            _ => part.to_lowercase(),
        })
        .collect::<Vec<_>>()
        .join("-")
}

/// Returns the primary language subtag: everything before the first `-`,
/// `_` or whitespace of the trimmed input.
///
/// ```
/// use langattr::base_language;
///
/// assert_eq!(base_language("zh-hans-sg"), "zh");
/// assert_eq!(base_language("x-pig-latin"), "x");
/// assert_eq!(base_language(""), "");
/// ```
pub fn base_language(raw: &str) -> String {
    let trimmed = raw.trim();
    trimmed
        .split(|c: char| c == '-' || c == '_' || c.is_whitespace())
        .next()
        .unwrap_or_default()
        .to_string()
}

/// Checks a tag against a permissive BCP-47 grammar.
///
/// Matching is case-insensitive and ignores surrounding whitespace. Unlike
/// [`clean_lang_attr`], underscores are rejected.
pub fn is_valid_lang(raw: Option<&str>) -> bool {
    let Some(raw) = raw else {
        return false;
    };
    let trimmed = raw.trim();
    if !(MIN_TAG_LEN..=MAX_TAG_LEN).contains(&trimmed.len()) {
        return false;
    }
    LANG_TAG_RE.is_match(trimmed)
}

pub(crate) fn is_alpha_of_len(part: &str, len: usize) -> bool {
    part.len() == len && part.bytes().all(|b| b.is_ascii_alphabetic())
}

pub(crate) fn is_numeric_region(part: &str) -> bool {
    part.len() == 3 && part.bytes().all(|b| b.is_ascii_digit())
}

fn title_case(part: &str) -> String {
    let mut chars = part.chars();
    match chars.next() {
        Some(first) => {
            let mut out: String = first.to_uppercase().collect();
            out.push_str(&chars.as_str().to_lowercase());
            out
        }
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clean_lang_attr_table() {
        let cases = [
            ("en_us", "en-US"),
            ("zh-hans-sg", "zh-Hans-SG"),
            ("x-klingon", "x-klingon"),
            (" es-mx ", "es-MX"),
            ("en fr", "en"),
            ("EN", "en"),
            ("X-Pig-Latin", "x-pig-latin"),
            ("es-419", "es-419"),
            ("sr-latn-rs", "sr-Latn-RS"),
            ("zh-yue-hk", "zh-yue-HK"),
            ("de-CH-1901", "de-CH-1901"),
            ("en-GB-OED-Extra", "en-GB-oed-extra"),
        ];

        for (input, expected) in cases {
            assert_eq!(clean_lang_attr(Some(input)), expected, "input: {:?}", input);
        }
    }

    #[test]
    fn test_clean_lang_attr_empty_inputs() {
        assert_eq!(clean_lang_attr(None), "");
        assert_eq!(clean_lang_attr(Some("")), "");
        assert_eq!(clean_lang_attr(Some("   ")), "");
    }

    #[test]
    fn test_clean_lang_attr_third_part_script_is_lowercased() {
        // Only the second position may hold a script.
        assert_eq!(clean_lang_attr(Some("zh-TW-HANT")), "zh-TW-hant");
    }

    #[test]
    fn test_clean_lang_attr_lowercases_extensions() {
        assert_eq!(clean_lang_attr(Some("AR-U-NU-LATN")), "ar-u-nu-latn");
        assert_eq!(clean_lang_attr(Some("he-il-u-ca-hebrew")), "he-IL-u-ca-hebrew");
        assert_eq!(clean_lang_attr(Some("ar-X-Latn")), "ar-x-latn");
        assert_eq!(clean_lang_attr(Some("zh-hant-tw-x-HK")), "zh-Hant-TW-x-hk");
    }

    #[test]
    fn test_clean_lang_attr_is_idempotent_on_table() {
        for input in ["en_us", "zh-hans-sg", "x-klingon", "sr-latn-rs", "en-GB-OED"] {
            let once = clean_lang_attr(Some(input));
            assert_eq!(clean_lang_attr(Some(&once)), once);
        }
    }

    #[test]
    fn test_base_language() {
        assert_eq!(base_language("zh-hans-sg"), "zh");
        assert_eq!(base_language("x-pig-latin"), "x");
        assert_eq!(base_language(""), "");
        assert_eq!(base_language("   "), "");
        assert_eq!(base_language(" pt_BR "), "pt");
        assert_eq!(base_language("en fr"), "en");
    }

    #[test]
    fn test_is_valid_lang_boundaries() {
        assert!(is_valid_lang(Some("en")));
        assert!(!is_valid_lang(Some("en-")));
        assert!(!is_valid_lang(Some("en_US")));
        assert!(!is_valid_lang(None));
        assert!(!is_valid_lang(Some("123")));
        assert!(!is_valid_lang(Some("")));
        assert!(!is_valid_lang(Some("e")));
    }

    #[test]
    fn test_is_valid_lang_accepts_common_shapes() {
        for tag in [
            "fr-CA",
            "zh-Hans-CN",
            "ZH-HANS-CN",
            "es-419",
            "en-GB-oed",
            "x-klingon",
            "x-pig-latin",
            "tlh",
            "yue",
            "latn",
            "klingon",
            " ar ",
            "de-CH-1901",
        ] {
            assert!(is_valid_lang(Some(tag)), "{} should be valid", tag);
        }
    }

    #[test]
    fn test_is_valid_lang_rejects_malformed() {
        for tag in [
            "-US",
            "en--US",
            "english language",
            "toolonglanguage",
            "en-toolongsubtag",
            "x-",
            "e1",
            "en-US-",
        ] {
            assert!(!is_valid_lang(Some(tag)), "{} should be invalid", tag);
        }
    }

    #[test]
    fn test_is_valid_lang_length_limit() {
        let long = format!("en{}", "-abcdefgh".repeat(4)); // 38 chars
        assert!(long.len() > MAX_TAG_LEN);
        assert!(!is_valid_lang(Some(&long)));

        let fits = format!("en{}", "-abcdefgh".repeat(3)); // 29 chars
        assert!(is_valid_lang(Some(&fits)));
    }
}
