//! Traits for pluggable locale parsing in langattr.

use crate::{error::Error, types::LocaleParts};

/// A locale-parsing facility that decomposes a tag into [`LocaleParts`].
///
/// Implementations may reject tags they consider malformed; callers going
/// through [`crate::get_locale_parts_with`] never see that failure, because
/// the manual fallback parser takes over.
///
/// # Example
///
/// ```rust
/// use langattr::{LocaleParts, traits::LocaleParser, parser::UnicLocaleParser};
///
/// let parts = UnicLocaleParser.parse("zh-Hans-CN")?;
/// assert_eq!(parts, LocaleParts::new("zh").with_script("hans").with_region("CN"));
/// # Ok::<(), langattr::Error>(())
/// ```
pub trait LocaleParser {
    /// Parse a (trimmed, non-empty) tag into its components.
    ///
    /// Returned parts must follow the `LocaleParts` casing rules: lowercase
    /// language and script, uppercase region.
    fn parse(&self, tag: &str) -> Result<LocaleParts, Error>;

    /// Short name used in log output.
    fn name(&self) -> &'static str {
        "custom"
    }
}

impl<F> LocaleParser for F
where
    F: Fn(&str) -> Result<LocaleParts, Error>,
{
    fn parse(&self, tag: &str) -> Result<LocaleParts, Error> {
        self(tag)
    }
}
