//! Supported Locales
//!
//! Provides the locale identifier and parsing of BCP 47 style tags.

use crate::{I18nError, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// A supported locale.
///
/// The set is closed: English is the primary locale, Russian the secondary.
///
/// # Examples
///
/// ```
/// use locsize_i18n::Locale;
///
/// let en = Locale::parse("en-US").unwrap();
/// let ru: Locale = "ru".parse().unwrap();
///
/// assert_eq!(en, Locale::English);
/// assert_eq!(ru.tag(), "ru");
/// assert!(Locale::parse("fr").is_err());
/// ```
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize,
)]
#[serde(try_from = "String", into = "String")]
pub enum Locale {
    /// English (primary)
    #[default]
    English,
    /// Russian (secondary)
    Russian,
}

impl Locale {
    /// All supported locales, primary first.
    pub const ALL: [Locale; 2] = [Locale::English, Locale::Russian];

    /// The primary locale, used whenever a locale cannot be resolved.
    pub const PRIMARY: Locale = Locale::English;

    /// Parse from a BCP 47 tag (e.g., "en", "en-US", "ru_RU").
    ///
    /// Only the language subtag selects the locale; region and script
    /// subtags are accepted and ignored.
    pub fn parse(tag: &str) -> Result<Self> {
        let language = tag
            .trim()
            .split(['-', '_'])
            .next()
            .unwrap_or_default()
            .to_ascii_lowercase();

        if language.len() < 2
            || language.len() > 3
            || !language.chars().all(|c| c.is_ascii_alphabetic())
        {
            return Err(I18nError::UnsupportedLocale(tag.to_string()));
        }

        match language.as_str() {
            "en" | "eng" => Ok(Locale::English),
            "ru" | "rus" => Ok(Locale::Russian),
            _ => Err(I18nError::UnsupportedLocale(tag.to_string())),
        }
    }

    /// Get the language tag (e.g., "en").
    pub fn tag(&self) -> &'static str {
        match self {
            Locale::English => "en",
            Locale::Russian => "ru",
        }
    }

    /// Whether numbers in this locale are written with a decimal comma.
    pub fn decimal_comma(&self) -> bool {
        matches!(self, Locale::Russian)
    }
}

/// Get the supported locales, primary first.
pub fn supported_locales() -> &'static [Locale] {
    &Locale::ALL
}

impl fmt::Display for Locale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}

impl FromStr for Locale {
    type Err = I18nError;

    fn from_str(s: &str) -> Result<Self> {
        Locale::parse(s)
    }
}

impl TryFrom<String> for Locale {
    type Error = I18nError;

    fn try_from(tag: String) -> Result<Self> {
        Locale::parse(&tag)
    }
}

impl From<Locale> for String {
    fn from(locale: Locale) -> Self {
        locale.tag().to_string()
    }
}
