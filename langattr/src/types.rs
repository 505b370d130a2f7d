//! Core value types produced by tag parsing and direction inference.

use std::{fmt::Display, str::FromStr};

use serde::{Deserialize, Serialize};

/// The components of a language tag.
///
/// `language` is always lowercase, `script` (when present) is a lowercase
/// four-letter code and `region` is an uppercase two-letter code or a
/// three-digit UN M.49 area code.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, Deserialize, Serialize)]
pub struct LocaleParts {
    /// Primary language subtag (e.g. "en", "zh", "x").
    pub language: String,

    /// Script subtag, lowercased (e.g. "hans", "arab").
    #[serde(skip_serializing_if = "Option::is_none")]
    #[serde(default)]
    pub script: Option<String>,

    /// Region subtag, uppercased (e.g. "CA", "419").
    #[serde(skip_serializing_if = "Option::is_none")]
    #[serde(default)]
    pub region: Option<String>,
}

impl LocaleParts {
    pub fn new(language: impl Into<String>) -> Self {
        Self {
            language: language.into(),
            script: None,
            region: None,
        }
    }

    pub fn with_script(mut self, script: impl Into<String>) -> Self {
        self.script = Some(script.into());
        self
    }

    pub fn with_region(mut self, region: impl Into<String>) -> Self {
        self.region = Some(region.into());
        self
    }

    /// Renders the parts back into a tag with canonical casing,
    /// e.g. `zh-Hans-CN`.
    pub fn to_tag(&self) -> String {
        let mut tag = self.language.clone();
        if let Some(script) = &self.script {
            tag.push('-');
            let mut chars = script.chars();
            if let Some(first) = chars.next() {
                tag.extend(first.to_uppercase());
                tag.push_str(&chars.as_str().to_lowercase());
            }
        }
        if let Some(region) = &self.region {
            tag.push('-');
            tag.push_str(&region.to_uppercase());
        }
        tag
    }
}

impl Display for LocaleParts {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "LocaleParts {{ language: {}, script: {}, region: {} }}",
            self.language,
            self.script.as_deref().unwrap_or("-"),
            self.region.as_deref().unwrap_or("-")
        )
    }
}

/// Writing direction of a language tag, as used by the HTML `dir` attribute.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    /// Left-to-right. The web platform default.
    #[default]
    Ltr,

    /// Right-to-left (e.g. Arabic, Hebrew).
    Rtl,

    /// The language is written in both RTL and LTR scripts and no script
    /// subtag says which one is in use.
    Auto,
}

impl Direction {
    /// Returns the HTML `dir` attribute value.
    pub fn as_html_dir(&self) -> &'static str {
        match self {
            Direction::Ltr => "ltr",
            Direction::Rtl => "rtl",
            Direction::Auto => "auto",
        }
    }

    /// Whether the direction is fully determined (not `auto`).
    pub fn is_definite(&self) -> bool {
        !matches!(self, Direction::Auto)
    }
}

impl Display for Direction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_html_dir())
    }
}

impl FromStr for Direction {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "ltr" => Ok(Direction::Ltr),
            "rtl" => Ok(Direction::Rtl),
            "auto" => Ok(Direction::Auto),
            _ => Err(format!("Unknown text direction: {}", s)),
        }
    }
}
