#![forbid(unsafe_code)]
//! BCP-47 language tag utilities for rich-text `lang` attributes.
//!
//! Normalizes, validates and decomposes the language tags authors attach to
//! spans of content, and infers the writing direction (`dir`) those spans
//! should carry. All tag functions are total: malformed input degrades to an
//! empty string, `false` or [`Direction::Ltr`], never to a panic or an error.
//!
//! # Quick Start
//!
//! ```rust
//! use langattr::{Direction, LocaleParts, clean_lang_attr, get_locale_parts, get_text_direction, is_valid_lang};
//!
//! assert_eq!(clean_lang_attr(Some("zh_hans_sg")), "zh-Hans-SG");
//! assert!(is_valid_lang(Some("zh-Hans-SG")));
//! assert_eq!(
//!     get_locale_parts("zh-Hans-SG"),
//!     LocaleParts::new("zh").with_script("hans").with_region("SG")
//! );
//! assert_eq!(get_text_direction("ku-Arab"), Direction::Rtl);
//! ```
//!
//! # Modules
//!
//! - [`tag`]: normalization, validation and base-language extraction
//! - [`parser`]: host and fallback locale parsing
//! - [`direction`]: script and language direction tables
//! - [`registry`]: display names and configurable direction overrides
//! - [`config`]: TOML / JSON / YAML configuration
//! - [`detect`]: default document language detection
//! - [`markup`]: auditing `lang`/`dir` attributes in HTML

pub mod config;
pub mod detect;
pub mod direction;
pub mod error;
pub mod markup;
pub mod parser;
pub mod registry;
pub mod tag;
pub mod traits;
pub mod types;

// Re-export most used types for easy consumption
pub use crate::{
    config::{ConfigFormat, LanguageConfig, LanguageEntry},
    detect::{DefaultLanguageSources, FALLBACK_LANGUAGE, detect_default_language, posix_locale_to_tag},
    direction::get_text_direction,
    error::Error,
    markup::{AuditSummary, LangAttribute, LangFinding, audit_html, scan_lang_attributes},
    parser::{FallbackParser, UnicLocaleParser, get_locale_parts, get_locale_parts_with},
    registry::{LanguageRegistry, RegistryBuilder, language_label, language_name, registry},
    tag::{base_language, clean_lang_attr, is_valid_lang},
    traits::LocaleParser,
    types::{Direction, LocaleParts},
};
