//! Byte size formatting
//!
//! Formatting never fails. An unsupported locale tag falls back to English,
//! and a unit override that cannot be resolved produces the text
//! `"Unrecognized unit: <unit>"` in place of the formatted size.

use crate::registry::{self, LocaleUnits};
use crate::{ByteCount, NumberFormat, Unit};
use locsize_i18n::Locale;
use tracing::debug;

/// Prefix of the result returned for an unresolvable unit override.
pub const UNRECOGNIZED_UNIT: &str = "Unrecognized unit: ";

impl ByteCount {
    /// Format with an explicit number format, unit override and unit style,
    /// using the process-wide locale.
    ///
    /// An empty `unit` picks the largest unit that fits.
    ///
    /// # Example
    ///
    /// ```
    /// use locsize::{ByteCount, Locale};
    ///
    /// let size = ByteCount::MB * 3 / 2;
    /// assert_eq!(
    ///     size.format_with_locale("%.1f", "", false, Locale::English),
    ///     "1.5MB"
    /// );
    /// assert_eq!(
    ///     size.format_with_locale("%.0f", "KB", true, Locale::English),
    ///     "1536 kilobytes"
    /// );
    /// ```
    pub fn format(&self, number_format: &str, unit: &str, long_units: bool) -> String {
        self.format_with_locale(number_format, unit, long_units, crate::current_locale())
    }

    /// Format with an explicit locale.
    ///
    /// The unit names and the plural grammar both come from `locale`.
    pub fn format_with_locale(
        &self,
        number_format: &str,
        unit: &str,
        long_units: bool,
        locale: Locale,
    ) -> String {
        render(
            *self,
            &NumberFormat::lenient(number_format),
            unit,
            long_units,
            registry::units(locale),
        )
    }

    /// Format for a locale given by tag, falling back to English when the tag
    /// names no supported locale.
    pub fn format_with_locale_tag(
        &self,
        number_format: &str,
        unit: &str,
        long_units: bool,
        tag: &str,
    ) -> String {
        let units = registry::lookup(tag).unwrap_or_else(|err| {
            debug!(tag, error = %err, "falling back to primary locale");
            registry::units(Locale::PRIMARY)
        });
        render(
            *self,
            &NumberFormat::lenient(number_format),
            unit,
            long_units,
            units,
        )
    }

    /// Format with the process-wide number format and unit style in `locale`.
    pub fn to_string_with_locale(&self, locale: Locale) -> String {
        crate::config().with_locale(locale).format(*self)
    }
}

/// Render `size` against a locale's unit table.
pub(crate) fn render(
    size: ByteCount,
    number_format: &NumberFormat,
    unit: &str,
    long_units: bool,
    units: &LocaleUnits,
) -> String {
    let unit = if unit.is_empty() {
        Unit::best_fit(size)
    } else {
        match units.resolve(unit) {
            Some(unit) => unit,
            None => return format!("{}{}", UNRECOGNIZED_UNIT, unit),
        }
    };

    let value = size.as_u64() as f64 / unit.size().as_u64() as f64;
    let number = number_format.render(value);

    if long_units {
        format!("{} {}", number, units.long_for(unit, value))
    } else {
        format!("{}{}", number, units.short(unit))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn short(size: ByteCount, locale: Locale) -> String {
        size.format_with_locale("%.2f", "", false, locale)
    }

    fn long(size: ByteCount, locale: Locale) -> String {
        size.format_with_locale("%.0f", "", true, locale)
    }

    #[test]
    fn test_short_english() {
        let en = Locale::English;
        assert_eq!(short(ByteCount::from_bytes(512), en), "512.00B");
        assert_eq!(short(ByteCount::KB, en), "1.00KB");
        assert_eq!(short(ByteCount::MB, en), "1.00MB");
        assert_eq!(short(ByteCount::new(1.5 * 1048576.0), en), "1.50MB");
        assert_eq!(short(ByteCount::EB, en), "1.00EB");
        assert_eq!(short(ByteCount::from_bytes(0), en), "0.00B");
    }

    #[test]
    fn test_short_russian() {
        let ru = Locale::Russian;
        assert_eq!(short(ByteCount::from_bytes(512), ru), "512.00Б");
        assert_eq!(short(ByteCount::KB, ru), "1.00КБ");
        assert_eq!(short(ByteCount::MB, ru), "1.00МБ");
        assert_eq!(short(ByteCount::GB, ru), "1.00ГБ");
        assert_eq!(short(ByteCount::TB, ru), "1.00ТБ");
        assert_eq!(short(ByteCount::PB, ru), "1.00ПБ");
        assert_eq!(short(ByteCount::EB, ru), "1.00ЭБ");
    }

    #[test]
    fn test_long_english() {
        let en = Locale::English;
        assert_eq!(
            ByteCount::B.format_with_locale("%.2f", "", true, en),
            "1.00 byte"
        );
        assert_eq!(
            ByteCount::from_bytes(2).format_with_locale("%.2f", "", true, en),
            "2.00 bytes"
        );
        assert_eq!(long(ByteCount::KB, en), "1 kilobyte");
        assert_eq!(long(ByteCount::GB * 5, en), "5 gigabytes");
        assert_eq!(long(ByteCount::from_bytes(0), en), "0 byte");
    }

    #[test]
    fn test_long_russian_bytes() {
        let ru = Locale::Russian;
        let cases = [
            (1, "1 байт"),
            (2, "2 байта"),
            (5, "5 байтов"),
            (11, "11 байтов"),
            (21, "21 байт"),
            (22, "22 байта"),
            (25, "25 байтов"),
            (0, "0 байтов"),
        ];
        for (bytes, expected) in cases {
            assert_eq!(long(ByteCount::from_bytes(bytes), ru), expected);
        }
    }

    #[test]
    fn test_long_russian_kilobytes() {
        let ru = Locale::Russian;
        let kb = |n: u64| long(ByteCount::KB * n, ru);

        assert_eq!(kb(1), "1 килобайт");
        assert_eq!(kb(2), "2 килобайта");
        assert_eq!(kb(3), "3 килобайта");
        assert_eq!(kb(4), "4 килобайта");
        for n in 5..=19 {
            assert_eq!(kb(n), format!("{} килобайтов", n));
        }
        assert_eq!(kb(21), "21 килобайт");
        assert_eq!(kb(22), "22 килобайта");
        assert_eq!(kb(25), "25 килобайтов");
    }

    #[test]
    fn test_long_russian_larger_units() {
        let ru = Locale::Russian;
        assert_eq!(long(ByteCount::MB, ru), "1 мегабайт");
        assert_eq!(long(ByteCount::MB * 3, ru), "3 мегабайта");
        assert_eq!(long(ByteCount::MB * 7, ru), "7 мегабайтов");
        assert_eq!(long(ByteCount::GB * 4, ru), "4 гигабайта");
        assert_eq!(long(ByteCount::GB * 10, ru), "10 гигабайтов");
    }

    #[test]
    fn test_unit_override() {
        let en = Locale::English;
        assert_eq!(
            ByteCount::MB.format_with_locale("%.0f", "KB", false, en),
            "1024KB"
        );
        assert_eq!(
            ByteCount::KB.format_with_locale("%.4f", "mb", false, en),
            "0.0010MB"
        );
        assert_eq!(
            ByteCount::MB.format_with_locale("%.0f", "kilobytes", true, en),
            "1024 kilobytes"
        );
    }

    #[test]
    fn test_unit_override_russian_accepts_english_spelling() {
        assert_eq!(
            ByteCount::MB.format_with_locale("%.0f", "KB", false, Locale::Russian),
            "1024КБ"
        );
    }

    #[test]
    fn test_unrecognized_unit_override() {
        let result = ByteCount::MB.format_with_locale("%.2f", "XB", false, Locale::English);
        assert_eq!(result, "Unrecognized unit: XB");
        assert!(result.starts_with(UNRECOGNIZED_UNIT));

        let result = ByteCount::MB.format_with_locale("%.2f", "КБ", false, Locale::English);
        assert_eq!(result, "Unrecognized unit: КБ");
    }

    #[test]
    fn test_locale_tag_fallback() {
        assert_eq!(
            ByteCount::KB.format_with_locale_tag("%.2f", "", false, "ru-RU"),
            "1.00КБ"
        );
        assert_eq!(
            ByteCount::KB.format_with_locale_tag("%.2f", "", false, "klingon"),
            "1.00KB"
        );
    }

    #[test]
    fn test_number_format_variants() {
        let en = Locale::English;
        assert_eq!(ByteCount::MB.format_with_locale("%g", "", false, en), "1MB");
        assert_eq!(
            ByteCount::MB.format_with_locale("%6.1f", "", false, en),
            "   1.0MB"
        );
        assert_eq!(ByteCount::MB.format_with_locale("~%.0f ", "", false, en), "~1 MB");
    }

    #[test]
    fn test_oversized_number_format_kept_as_text() {
        let en = Locale::English;
        assert_eq!(
            ByteCount::MB.format_with_locale("%.70000f", "", false, en),
            "%.70000fMB"
        );
        assert_eq!(
            ByteCount::MB.format_with_locale("%99999999999999999999f", "", true, en),
            "%99999999999999999999f megabyte"
        );
    }
}
