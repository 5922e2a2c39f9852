//! Pluralization Rules
//!
//! Grammatical number rules for the supported locales. English has two forms
//! (one, other) while Russian picks among three (one, few, many).

use crate::{I18nError, Locale, Result};
use std::str::FromStr;

/// CLDR-style plural categories.
///
/// Not every locale uses every category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PluralCategory {
    /// Singular (1, and 21, 31, ... in Russian)
    One,
    /// Few items (2-4, 22-24, ... in Russian)
    Few,
    /// Many items (0, 5-20, 25-30, ... in Russian)
    Many,
    /// Everything else (English plural)
    Other,
}

impl PluralCategory {
    /// Convert to string.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::One => "one",
            Self::Few => "few",
            Self::Many => "many",
            Self::Other => "other",
        }
    }
}

impl FromStr for PluralCategory {
    type Err = I18nError;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "one" => Ok(Self::One),
            "few" => Ok(Self::Few),
            "many" => Ok(Self::Many),
            "other" => Ok(Self::Other),
            _ => Err(I18nError::InvalidPluralCategory(s.to_string())),
        }
    }
}

impl std::fmt::Display for PluralCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Plural rules for a specific language.
pub trait PluralRules: Send + Sync {
    /// Get the plural category for a number.
    fn category(&self, n: f64) -> PluralCategory;

    /// Get all categories used by this language.
    fn categories(&self) -> &'static [PluralCategory];
}

/// Get the plural category for a number in a locale.
///
/// # Example
///
/// ```
/// use locsize_i18n::{plural_category, Locale, PluralCategory};
///
/// assert_eq!(plural_category(1, Locale::English), PluralCategory::One);
/// assert_eq!(plural_category(2, Locale::English), PluralCategory::Other);
/// assert_eq!(plural_category(22, Locale::Russian), PluralCategory::Few);
/// ```
pub fn plural_category(n: impl Into<f64>, locale: Locale) -> PluralCategory {
    locale.plural_rules().category(n.into())
}

impl Locale {
    /// Get the plural rules for this locale.
    pub fn plural_rules(&self) -> &'static dyn PluralRules {
        match self {
            Locale::English => &EnglishPlurals,
            Locale::Russian => &RussianPlurals,
        }
    }
}

// ============================================================================
// Plural Rule Implementations
// ============================================================================

/// English pluralization: positive values other than exactly 1 are plural.
///
/// Zero and negative values keep the singular form.
struct EnglishPlurals;

impl PluralRules for EnglishPlurals {
    fn category(&self, n: f64) -> PluralCategory {
        if n > 0.0 && n != 1.0 {
            PluralCategory::Other
        } else {
            PluralCategory::One
        }
    }

    fn categories(&self) -> &'static [PluralCategory] {
        &[PluralCategory::One, PluralCategory::Other]
    }
}

/// Russian pluralization.
///
/// The value is truncated to an integer first, so 1.5 is "one".
///
/// - one: 1, 21, 31, 41, 51, 61, 71, 81, 101, 1001, ...
/// - few: 2-4, 22-24, 32-34, ...
/// - many: 0, 5-20, 25-30, 35-40, ...
struct RussianPlurals;

impl PluralRules for RussianPlurals {
    fn category(&self, n: f64) -> PluralCategory {
        let i = (n as i64).unsigned_abs();
        let mod100 = i % 100;

        if (11..=19).contains(&mod100) {
            return PluralCategory::Many;
        }

        match i % 10 {
            1 => PluralCategory::One,
            2..=4 => PluralCategory::Few,
            _ => PluralCategory::Many,
        }
    }

    fn categories(&self) -> &'static [PluralCategory] {
        &[PluralCategory::One, PluralCategory::Few, PluralCategory::Many]
    }
}
