// locsize - Localized byte sizes for Rust
//
// Parses human-readable byte sizes such as "1.5 GB" or "2 КБ" into byte
// counts and formats byte counts back with locale-correct unit names.

//! # Quick Start
//!
//! ```rust
//! use locsize::{ByteCount, Locale, SizeConfig};
//!
//! let size = locsize::parse_with_locale("1.5 MB", Locale::English).unwrap();
//! assert_eq!(size, ByteCount::new(1.5 * 1024.0 * 1024.0));
//!
//! let ru = SizeConfig::new()
//!     .with_locale(Locale::Russian)
//!     .with_long_units(true)
//!     .with_number_format("%.0f");
//! assert_eq!(ru.format(ByteCount::GB * 22), "22 гигабайта");
//! ```

mod config;
mod error;
mod format;
mod number_format;
mod parse;
pub mod registry;
mod size;
mod unit;

pub use config::{
    SizeConfig, config, current_locale, set_config, set_locale, set_locale_tag, set_long_units,
    set_number_format, supported_locales,
};
pub use error::SizeError;
pub use format::UNRECOGNIZED_UNIT;
pub use number_format::{DEFAULT_NUMBER_FORMAT, NumberFormat};
pub use parse::{parse, parse_with_locale, parse_with_locale_tag};
pub use size::ByteCount;
pub use unit::Unit;

// Re-export locale types
pub use locsize_i18n::{Locale, PluralCategory, PluralRules, plural_category};

/// Result type for byte size operations
pub type Result<T> = std::result::Result<T, SizeError>;

// Prelude for common imports
pub mod prelude {
    pub use crate::{
        ByteCount, Locale, NumberFormat, Result, SizeConfig, SizeError, Unit, parse,
        parse_with_locale,
    };
}
