//! Locale Support for locsize
//!
//! Provides the pieces of internationalization the byte-size library needs:
//!
//! - **Locales**: the closed set of supported locales and BCP 47 tag parsing
//! - **Pluralization**: grammatical number rules per locale
//!
//! # Quick Start
//!
//! ```rust
//! use locsize_i18n::{Locale, PluralCategory, plural_category};
//!
//! let ru: Locale = "ru-RU".parse().unwrap();
//! assert_eq!(ru, Locale::Russian);
//!
//! assert_eq!(plural_category(1, ru), PluralCategory::One);
//! assert_eq!(plural_category(3, ru), PluralCategory::Few);
//! assert_eq!(plural_category(11, ru), PluralCategory::Many);
//! ```

mod error;
mod locale;
mod plural;

pub use error::I18nError;
pub use locale::{Locale, supported_locales};
pub use plural::{PluralCategory, PluralRules, plural_category};

/// Result type for i18n operations
pub type Result<T> = std::result::Result<T, I18nError>;

/// Prelude for common imports
pub mod prelude {
    pub use crate::{
        I18nError, Locale, PluralCategory, PluralRules, Result, plural_category,
        supported_locales,
    };
}
