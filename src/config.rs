//! Formatting and parsing configuration
//!
//! [`SizeConfig`] bundles the locale, the unit style and the number format.
//! It can be built and passed around explicitly, deserialized from a config
//! file, or installed as the process-wide default that [`parse`](crate::parse)
//! and `ByteCount`'s `Display` read.
//!
//! The process-wide default sits behind a read-write lock, so concurrent
//! readers and writers are safe.

use crate::format::render;
use crate::registry;
use crate::{ByteCount, NumberFormat, Result};
use locsize_i18n::Locale;
use once_cell::sync::Lazy;
use parking_lot::RwLock;
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Locale, unit style and number format for byte sizes.
///
/// # Example
///
/// ```
/// use locsize::{ByteCount, Locale, SizeConfig};
///
/// let config = SizeConfig::new()
///     .with_locale(Locale::Russian)
///     .with_long_units(true)
///     .with_number_format("%.0f");
///
/// assert_eq!(config.format(ByteCount::KB * 2), "2 килобайта");
/// assert_eq!(config.parse("2 КБ").unwrap(), ByteCount::KB * 2);
/// ```
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct SizeConfig {
    /// Locale for unit names and plural grammar
    pub locale: Locale,
    /// Use long unit names ("megabytes") instead of symbols ("MB")
    pub long_units: bool,
    /// Number format applied to the scaled value
    pub number_format: NumberFormat,
}

impl SizeConfig {
    /// Create the default configuration: English, short units, `%.2f`.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the locale.
    pub fn with_locale(mut self, locale: Locale) -> Self {
        self.locale = locale;
        self
    }

    /// Set whether long unit names are used.
    pub fn with_long_units(mut self, long_units: bool) -> Self {
        self.long_units = long_units;
        self
    }

    /// Set the number format. The specifier is not validated.
    pub fn with_number_format(mut self, number_format: &str) -> Self {
        self.number_format = NumberFormat::lenient(number_format);
        self
    }

    /// Parse a byte size in this configuration's locale.
    pub fn parse(&self, input: &str) -> Result<ByteCount> {
        crate::parse_with_locale(input, self.locale)
    }

    /// Format a byte size in the largest unit that fits.
    pub fn format(&self, size: ByteCount) -> String {
        self.format_in(size, "")
    }

    /// Format a byte size in the given unit; empty picks the best fit.
    pub fn format_in(&self, size: ByteCount, unit: &str) -> String {
        render(
            size,
            &self.number_format,
            unit,
            self.long_units,
            registry::units(self.locale),
        )
    }
}

// ============================================================================
// Process-wide Configuration
// ============================================================================

static CONFIG: Lazy<RwLock<SizeConfig>> = Lazy::new(|| RwLock::new(SizeConfig::default()));

/// Get a copy of the process-wide configuration.
pub fn config() -> SizeConfig {
    CONFIG.read().clone()
}

/// Replace the process-wide configuration, returning the previous one.
pub fn set_config(config: SizeConfig) -> SizeConfig {
    std::mem::replace(&mut *CONFIG.write(), config)
}

/// Get the process-wide locale.
pub fn current_locale() -> Locale {
    CONFIG.read().locale
}

/// Set the process-wide locale.
pub fn set_locale(locale: Locale) {
    CONFIG.write().locale = locale;
}

/// Set the process-wide locale from a tag.
///
/// Unknown tags leave the current locale unchanged. Returns whether the
/// locale was applied.
pub fn set_locale_tag(tag: &str) -> bool {
    match Locale::parse(tag) {
        Ok(locale) => {
            set_locale(locale);
            true
        }
        Err(err) => {
            debug!(tag, error = %err, "ignoring locale change");
            false
        }
    }
}

/// Set whether `Display` uses long unit names.
pub fn set_long_units(long_units: bool) {
    CONFIG.write().long_units = long_units;
}

/// Set the process-wide number format. The specifier is not validated.
pub fn set_number_format(number_format: &str) {
    CONFIG.write().number_format = NumberFormat::lenient(number_format);
}

/// Get the supported locales, primary first.
pub fn supported_locales() -> &'static [Locale] {
    locsize_i18n::supported_locales()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = SizeConfig::new();
        assert_eq!(config.locale, Locale::English);
        assert!(!config.long_units);
        assert_eq!(config.number_format.as_str(), "%.2f");
        assert_eq!(config.format(ByteCount::MB), "1.00MB");
    }

    #[test]
    fn test_builder() {
        let config = SizeConfig::new()
            .with_locale(Locale::Russian)
            .with_number_format("%.0f");
        assert_eq!(config.format(ByteCount::GB * 3), "3ГБ");
        assert_eq!(config.format_in(ByteCount::GB, "MB"), "1024МБ");
        assert_eq!(config.format_in(ByteCount::GB, "XB"), "Unrecognized unit: XB");
    }

    #[test]
    fn test_config_parse_uses_locale() {
        let ru = SizeConfig::new().with_locale(Locale::Russian);
        assert_eq!(ru.parse("1,5 КБ").unwrap(), ByteCount::from_bytes(1536));

        let en = SizeConfig::new();
        assert!(en.parse("1 КБ").is_err());
    }

    #[test]
    fn test_config_deserialize_partial() {
        let config: SizeConfig =
            serde_json::from_str(r#"{"locale": "ru", "long_units": true}"#).unwrap();
        assert_eq!(config.locale, Locale::Russian);
        assert!(config.long_units);
        assert_eq!(config.number_format, NumberFormat::default());
    }

    #[test]
    fn test_config_serialize() {
        let json = serde_json::to_value(SizeConfig::new()).unwrap();
        assert_eq!(
            json,
            serde_json::json!({"locale": "en", "long_units": false, "number_format": "%.2f"})
        );
    }

    #[test]
    fn test_supported_locales() {
        assert_eq!(supported_locales(), &[Locale::English, Locale::Russian]);
    }
}
