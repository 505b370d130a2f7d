//! Language display names and configurable direction tables.
//!
//! A [`LanguageRegistry`] is assembled once, through [`RegistryBuilder`], and
//! is read-only afterwards. The process-wide builtin instance is available
//! through [`registry`].

use std::collections::{BTreeMap, BTreeSet};

use lazy_static::lazy_static;

use crate::{
    direction::{RTL_SCRIPTS, language_direction, script_direction},
    error::Error,
    parser::get_locale_parts,
    tag::{base_language, clean_lang_attr, is_alpha_of_len, is_valid_lang},
    types::{Direction, LocaleParts},
};

/// Curated code -> English display name table.
const BUILTIN_NAMES: &[(&str, &str)] = &[
    ("af", "Afrikaans"),
    ("am", "Amharic"),
    ("ar", "Arabic"),
    ("az", "Azerbaijani"),
    ("be", "Belarusian"),
    ("bg", "Bulgarian"),
    ("bn", "Bengali"),
    ("bs", "Bosnian"),
    ("ca", "Catalan"),
    ("ckb", "Central Kurdish"),
    ("cs", "Czech"),
    ("cy", "Welsh"),
    ("da", "Danish"),
    ("de", "German"),
    ("dv", "Dhivehi"),
    ("el", "Greek"),
    ("en", "English"),
    ("en-GB", "English (United Kingdom)"),
    ("en-US", "English (United States)"),
    ("eo", "Esperanto"),
    ("es", "Spanish"),
    ("es-419", "Spanish (Latin America)"),
    ("et", "Estonian"),
    ("eu", "Basque"),
    ("fa", "Persian"),
    ("fi", "Finnish"),
    ("fil", "Filipino"),
    ("fr", "French"),
    ("fr-CA", "French (Canada)"),
    ("ga", "Irish"),
    ("gd", "Scottish Gaelic"),
    ("gl", "Galician"),
    ("gu", "Gujarati"),
    ("ha", "Hausa"),
    ("he", "Hebrew"),
    ("hi", "Hindi"),
    ("hr", "Croatian"),
    ("hu", "Hungarian"),
    ("hy", "Armenian"),
    ("id", "Indonesian"),
    ("is", "Icelandic"),
    ("it", "Italian"),
    ("ja", "Japanese"),
    ("ka", "Georgian"),
    ("kk", "Kazakh"),
    ("km", "Khmer"),
    ("kn", "Kannada"),
    ("ko", "Korean"),
    ("ks", "Kashmiri"),
    ("ku", "Kurdish"),
    ("ky", "Kyrgyz"),
    ("la", "Latin"),
    ("lo", "Lao"),
    ("lt", "Lithuanian"),
    ("lv", "Latvian"),
    ("mi", "Maori"),
    ("mk", "Macedonian"),
    ("ml", "Malayalam"),
    ("mn", "Mongolian"),
    ("mr", "Marathi"),
    ("ms", "Malay"),
    ("mt", "Maltese"),
    ("my", "Burmese"),
    ("nb", "Norwegian Bokmål"),
    ("ne", "Nepali"),
    ("nl", "Dutch"),
    ("nn", "Norwegian Nynorsk"),
    ("pa", "Punjabi"),
    ("pl", "Polish"),
    ("ps", "Pashto"),
    ("pt", "Portuguese"),
    ("pt-BR", "Portuguese (Brazil)"),
    ("pt-PT", "Portuguese (Portugal)"),
    ("ro", "Romanian"),
    ("ru", "Russian"),
    ("sd", "Sindhi"),
    ("si", "Sinhala"),
    ("sk", "Slovak"),
    ("sl", "Slovenian"),
    ("so", "Somali"),
    ("sq", "Albanian"),
    ("sr", "Serbian"),
    ("sv", "Swedish"),
    ("sw", "Swahili"),
    ("syr", "Syriac"),
    ("ta", "Tamil"),
    ("te", "Telugu"),
    ("tg", "Tajik"),
    ("th", "Thai"),
    ("tr", "Turkish"),
    ("ug", "Uyghur"),
    ("uk", "Ukrainian"),
    ("ur", "Urdu"),
    ("uz", "Uzbek"),
    ("vi", "Vietnamese"),
    ("yi", "Yiddish"),
    ("yo", "Yoruba"),
    ("zh", "Chinese"),
    ("zh-Hans", "Chinese (Simplified)"),
    ("zh-Hant", "Chinese (Traditional)"),
    ("zu", "Zulu"),
];

lazy_static! {
    static ref GLOBAL_REGISTRY: LanguageRegistry = LanguageRegistry::builtin();
}

/// Returns the process-wide registry holding the builtin tables.
pub fn registry() -> &'static LanguageRegistry {
    &GLOBAL_REGISTRY
}

/// Display name of a tag according to the builtin registry.
pub fn language_name(tag: &str) -> Option<&'static str> {
    registry().display_name(tag)
}

/// `"Name (tag)"` label according to the builtin registry.
pub fn language_label(tag: &str) -> String {
    registry().display_label(tag)
}

/// Display names plus configurable direction tables.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct LanguageRegistry {
    names: BTreeMap<String, String>,
    extra_rtl_scripts: BTreeSet<String>,
    direction_overrides: BTreeMap<String, Direction>,
}

impl LanguageRegistry {
    /// A registry with the builtin display names and no additions.
    pub fn builtin() -> Self {
        Self {
            names: BUILTIN_NAMES
                .iter()
                .map(|(code, name)| (code.to_string(), name.to_string()))
                .collect(),
            ..Self::default()
        }
    }

    /// Starts a builder on top of the builtin tables.
    pub fn builder() -> RegistryBuilder {
        RegistryBuilder::new()
    }

    /// Looks up a display name by the normalized tag, then by its base language.
    pub fn display_name(&self, tag: &str) -> Option<&str> {
        let normalized = clean_lang_attr(Some(tag));
        if normalized.is_empty() {
            return None;
        }
        self.names
            .get(&normalized)
            .or_else(|| self.names.get(&base_language(&normalized)))
            .map(String::as_str)
    }

    /// Renders `"Name (tag)"`, or just the normalized tag when no name is known.
    pub fn display_label(&self, tag: &str) -> String {
        let normalized = clean_lang_attr(Some(tag));
        match self.display_name(&normalized) {
            Some(name) => format!("{} ({})", name, normalized),
            None => normalized,
        }
    }

    /// All known `(code, name)` pairs in code order.
    pub fn languages(&self) -> impl Iterator<Item = (&str, &str)> {
        self.names.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    /// Whether a script subtag is written right-to-left, including configured
    /// additions.
    pub fn is_rtl_script(&self, script: &str) -> bool {
        let script = script.to_lowercase();
        RTL_SCRIPTS.contains(script.as_str()) || self.extra_rtl_scripts.contains(&script)
    }

    /// Direction inference with this registry's additions.
    ///
    /// An explicit script still wins. Otherwise a `language-REGION` override,
    /// then a bare `language` override, is consulted before the builtin
    /// language tables.
    pub fn text_direction(&self, lang: &str) -> Direction {
        let parts = get_locale_parts(lang);
        if let Some(script) = parts.script.as_deref() {
            if self.extra_rtl_scripts.contains(script) {
                return Direction::Rtl;
            }
            return script_direction(script);
        }
        let regional = parts
            .region
            .as_ref()
            .and_then(|_| self.direction_overrides.get(&override_key(&parts)));
        if let Some(direction) = regional.or_else(|| self.direction_overrides.get(&parts.language))
        {
            return *direction;
        }
        language_direction(&parts.language)
    }
}

/// Builder for [`LanguageRegistry`]. Validation happens in [`RegistryBuilder::build`].
#[derive(Debug, Clone, Default)]
pub struct RegistryBuilder {
    include_builtin: bool,
    languages: Vec<(String, String)>,
    rtl_scripts: Vec<String>,
    overrides: Vec<(String, Direction)>,
}

impl RegistryBuilder {
    /// Creates a builder seeded with the builtin names.
    pub fn new() -> Self {
        Self {
            include_builtin: true,
            ..Self::default()
        }
    }

    /// Creates a builder with no names at all.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Adds (or renames) a language.
    pub fn with_language(mut self, code: impl Into<String>, name: impl Into<String>) -> Self {
        self.languages.push((code.into(), name.into()));
        self
    }

    /// Marks an extra script as right-to-left.
    pub fn with_rtl_script(mut self, script: impl Into<String>) -> Self {
        self.rtl_scripts.push(script.into());
        self
    }

    /// Forces the direction of a language when no script subtag is present.
    ///
    /// `code` is a language (`"ks"`) or a language and region (`"pa-PK"`);
    /// a regional override only affects tags with that region. Codes with a
    /// script subtag are rejected by [`RegistryBuilder::build`].
    pub fn with_direction_override(mut self, code: impl Into<String>, direction: Direction) -> Self {
        self.overrides.push((code.into(), direction));
        self
    }

    pub fn build(self) -> Result<LanguageRegistry, Error> {
        let mut registry = if self.include_builtin {
            LanguageRegistry::builtin()
        } else {
            LanguageRegistry::default()
        };

        for (code, name) in self.languages {
            let normalized = validated(&code)?;
            if name.trim().is_empty() {
                return Err(Error::config_error(format!(
                    "language `{}` has an empty name",
                    normalized
                )));
            }
            registry.names.insert(normalized, name.trim().to_string());
        }

        for script in self.rtl_scripts {
            let script = script.trim();
            if !is_alpha_of_len(script, 4) {
                return Err(Error::config_error(format!(
                    "`{}` is not a four-letter script code",
                    script
                )));
            }
            registry.extra_rtl_scripts.insert(script.to_lowercase());
        }

        for (code, direction) in self.overrides {
            let normalized = validated(&code)?;
            let parts = get_locale_parts(&normalized);
            if parts.script.is_some() {
                return Err(Error::config_error(format!(
                    "direction override `{}` names a script, which already decides direction",
                    normalized
                )));
            }
            registry
                .direction_overrides
                .insert(override_key(&parts), direction);
        }

        tracing::debug!(
            languages = registry.names.len(),
            rtl_scripts = registry.extra_rtl_scripts.len(),
            overrides = registry.direction_overrides.len(),
            "language registry built"
        );
        Ok(registry)
    }
}

/// `language` or `language-REGION`, ignoring any script.
fn override_key(parts: &LocaleParts) -> String {
    match &parts.region {
        Some(region) => format!("{}-{}", parts.language, region),
        None => parts.language.clone(),
    }
}

fn validated(code: &str) -> Result<String, Error> {
    let normalized = clean_lang_attr(Some(code));
    if is_valid_lang(Some(&normalized)) {
        Ok(normalized)
    } else {
        Err(Error::invalid_language(code))
    }
}
