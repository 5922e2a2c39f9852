//! Error types for parsing byte sizes

use locsize_i18n::I18nError;
use std::num::ParseFloatError;
use thiserror::Error;

/// Errors that can occur while parsing byte sizes or format specifiers.
///
/// Formatting never produces an error.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SizeError {
    /// Requested locale is not in the registry
    #[error("unsupported locale: {0}")]
    UnsupportedLocale(String),

    /// No number/unit boundary, or one side of it was empty
    #[error("malformed byte size: {0:?}")]
    MalformedInput(String),

    /// Unit suffix is not known to the locale
    #[error("unrecognized size suffix: {0}")]
    UnknownUnit(String),

    /// Numeric part is not a decimal number
    #[error("invalid number {input:?}: {source}")]
    InvalidNumber {
        /// The numeric part of the input
        input: String,
        /// Underlying float parse failure
        #[source]
        source: ParseFloatError,
    },

    /// Number format specifier could not be parsed
    #[error("invalid number format: {0}")]
    InvalidFormat(String),

    /// Other locale error
    #[error(transparent)]
    I18n(I18nError),
}

impl From<I18nError> for SizeError {
    fn from(err: I18nError) -> Self {
        match err {
            I18nError::UnsupportedLocale(tag) => SizeError::UnsupportedLocale(tag),
            other => SizeError::I18n(other),
        }
    }
}
