//! Error types for i18n operations

use thiserror::Error;

/// Errors that can occur during i18n operations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum I18nError {
    /// Locale tag does not name a supported locale
    #[error("unsupported locale: {0}")]
    UnsupportedLocale(String),

    /// Invalid plural category
    #[error("invalid plural category: {0}")]
    InvalidPluralCategory(String),
}
