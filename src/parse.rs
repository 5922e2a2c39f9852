//! Byte size parsing
//!
//! Input is a number followed by a unit, optionally separated by whitespace:
//! `"1024B"`, `"1.5 MB"`, `"2 килобайта"`. The number ends at the first
//! character that is neither an ASCII digit nor a decimal separator.

use crate::registry;
use crate::{ByteCount, Result, SizeError};
use locsize_i18n::Locale;
use std::borrow::Cow;
use tracing::trace;

/// Parse a byte size using the process-wide locale.
///
/// # Example
///
/// ```
/// use locsize::{parse, ByteCount};
///
/// assert_eq!(parse("1024B").unwrap(), ByteCount::KB);
/// assert_eq!(parse("1 MB").unwrap(), ByteCount::MB);
/// assert!(parse("1024").is_err());
/// ```
pub fn parse(input: &str) -> Result<ByteCount> {
    parse_with_locale(input, crate::current_locale())
}

/// Parse a byte size with the unit spellings of `locale`.
///
/// Russian accepts a decimal comma as well as a decimal point, and also
/// accepts every English unit spelling.
pub fn parse_with_locale(input: &str, locale: Locale) -> Result<ByteCount> {
    let units = registry::units(locale);
    let decimal_comma = locale.decimal_comma();

    let (number, suffix) = split(input, decimal_comma)
        .ok_or_else(|| SizeError::MalformedInput(input.to_string()))?;

    let unit = units
        .resolve(suffix)
        .ok_or_else(|| SizeError::UnknownUnit(suffix.to_string()))?;

    let normalized = if decimal_comma {
        Cow::Owned(number.replace(',', "."))
    } else {
        Cow::Borrowed(number)
    };
    let value: f64 = normalized
        .parse()
        .map_err(|source| SizeError::InvalidNumber {
            input: number.to_string(),
            source,
        })?;

    let size = ByteCount::new(value * unit.size().as_u64() as f64);
    trace!(input, %locale, ?unit, bytes = size.as_u64(), "parsed byte size");
    Ok(size)
}

/// Parse a byte size for a locale given by tag (e.g. "ru-RU").
pub fn parse_with_locale_tag(input: &str, tag: &str) -> Result<ByteCount> {
    let units = registry::lookup(tag)?;
    parse_with_locale(input, units.locale())
}

/// Split trimmed input into its number and unit halves, both non-empty.
fn split(input: &str, decimal_comma: bool) -> Option<(&str, &str)> {
    let input = input.trim();
    let (boundary, _) = input
        .char_indices()
        .find(|&(_, c)| !(c.is_ascii_digit() || c == '.' || (decimal_comma && c == ',')))?;

    let number = input[..boundary].trim();
    let suffix = input[boundary..].trim();

    if number.is_empty() || suffix.is_empty() {
        return None;
    }
    Some((number, suffix))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_split() {
        assert_eq!(split("1024B", false), Some(("1024", "B")));
        assert_eq!(split("  1.5   MB  ", false), Some(("1.5", "MB")));
        assert_eq!(split("2 КБ", false), Some(("2", "КБ")));
        assert_eq!(split("1,5 МБ", true), Some(("1,5", "МБ")));
        assert_eq!(split("1,5 MB", false), Some(("1", ",5 MB")));
    }

    #[test]
    fn test_split_rejects_missing_halves() {
        assert_eq!(split("", false), None);
        assert_eq!(split("   ", false), None);
        assert_eq!(split("1024", false), None);
        assert_eq!(split("MB", false), None);
        assert_eq!(split("abc MB", false), None);
    }

    #[test]
    fn test_parse_english() {
        let en = Locale::English;
        assert_eq!(parse_with_locale("1024B", en).unwrap(), ByteCount::KB);
        assert_eq!(parse_with_locale("1 MB", en).unwrap(), ByteCount::MB);
        assert_eq!(
            parse_with_locale("1.5 MB", en).unwrap(),
            ByteCount::new(1.5 * 1048576.0)
        );
        assert_eq!(parse_with_locale("2 megabytes", en).unwrap(), ByteCount::MB * 2);
        assert_eq!(parse_with_locale("1 kilobyte", en).unwrap(), ByteCount::KB);
        assert_eq!(parse_with_locale("3 gb", en).unwrap(), ByteCount::GB * 3);
        assert_eq!(parse_with_locale("1 EB", en).unwrap(), ByteCount::EB);
        assert_eq!(parse_with_locale(".5 KB", en).unwrap(), ByteCount::from_bytes(512));
    }

    #[test]
    fn test_parse_truncates() {
        assert_eq!(
            parse_with_locale("1.0001 KB", Locale::English).unwrap().as_u64(),
            1024
        );
        assert_eq!(parse_with_locale("0.5 B", Locale::English).unwrap().as_u64(), 0);
    }

    #[test]
    fn test_parse_russian() {
        let ru = Locale::Russian;
        assert_eq!(parse_with_locale("1024 Б", ru).unwrap(), ByteCount::KB);
        assert_eq!(parse_with_locale("2 КБ", ru).unwrap(), ByteCount::KB * 2);
        assert_eq!(parse_with_locale("512 байт", ru).unwrap().as_u64(), 512);
        assert_eq!(parse_with_locale("15 байтов", ru).unwrap().as_u64(), 15);
        assert_eq!(parse_with_locale("5 килобайты", ru).unwrap(), ByteCount::KB * 5);
        assert_eq!(parse_with_locale("7 килобайтов", ru).unwrap(), ByteCount::KB * 7);
        assert_eq!(parse_with_locale("1 эксабайт", ru).unwrap(), ByteCount::EB);
    }

    #[test]
    fn test_parse_russian_decimal_comma() {
        let ru = Locale::Russian;
        assert_eq!(
            parse_with_locale("1,5 МБ", ru).unwrap(),
            ByteCount::new(1.5 * 1048576.0)
        );
        assert_eq!(
            parse_with_locale("2.5 мегабайт", ru).unwrap(),
            ByteCount::new(2.5 * 1048576.0)
        );
    }

    #[test]
    fn test_decimal_comma_is_not_english() {
        assert_eq!(
            parse_with_locale("1,5 MB", Locale::English),
            Err(SizeError::UnknownUnit(",5 MB".to_string()))
        );
    }

    #[test]
    fn test_cross_locale_fallback() {
        assert_eq!(
            parse_with_locale("1 MB", Locale::Russian).unwrap(),
            ByteCount::MB
        );
        assert_eq!(
            parse_with_locale("2 megabytes", Locale::Russian).unwrap(),
            ByteCount::MB * 2
        );
        assert_eq!(
            parse_with_locale("2 КБ", Locale::English),
            Err(SizeError::UnknownUnit("КБ".to_string()))
        );
    }

    #[test]
    fn test_parse_errors() {
        let en = Locale::English;
        for input in ["", "1024", "MB", "abc MB", "   "] {
            assert_eq!(
                parse_with_locale(input, en),
                Err(SizeError::MalformedInput(input.to_string())),
                "{:?}",
                input
            );
        }

        assert_eq!(
            parse_with_locale("1024 XB", en),
            Err(SizeError::UnknownUnit("XB".to_string()))
        );
        assert!(matches!(
            parse_with_locale("1.2.3 MB", en),
            Err(SizeError::InvalidNumber { ref input, .. }) if input == "1.2.3"
        ));
        assert!(matches!(
            parse_with_locale(". MB", en),
            Err(SizeError::InvalidNumber { .. })
        ));
    }

    #[test]
    fn test_parse_with_locale_tag() {
        assert_eq!(parse_with_locale_tag("2 КБ", "ru-RU").unwrap(), ByteCount::KB * 2);
        assert_eq!(
            parse_with_locale_tag("2 KB", "de"),
            Err(SizeError::UnsupportedLocale("de".to_string()))
        );
    }
}
