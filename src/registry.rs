//! Locale Unit Registry
//!
//! Static unit tables for every supported locale: long names, short symbols,
//! the plural word forms used for long output, and a case-insensitive map of
//! every accepted spelling back to its unit.
//!
//! The tables are built once on first use and never mutated afterwards.
//! During construction every English spelling missing from the Russian map is
//! copied into it, so English units parse under the Russian locale. The copy
//! is one-directional: Russian spellings stay unknown to English.

use crate::{Result, Unit};
use locsize_i18n::{Locale, PluralCategory};
use once_cell::sync::Lazy;
use std::collections::HashMap;

/// Display names of one unit in one locale.
#[derive(Debug, Clone, Copy)]
pub struct UnitNames {
    /// Short symbol (e.g. "MB", "МБ")
    pub short: &'static str,
    /// Long dictionary name (e.g. "megabyte", "мегабайт")
    pub long: &'static str,
    one: &'static str,
    few: &'static str,
    many: &'static str,
    other: &'static str,
}

impl UnitNames {
    /// Get the long name in the given grammatical number.
    pub fn long_form(&self, category: PluralCategory) -> &'static str {
        match category {
            PluralCategory::One => self.one,
            PluralCategory::Few => self.few,
            PluralCategory::Many => self.many,
            PluralCategory::Other => self.other,
        }
    }
}

/// Unit table for a single locale.
#[derive(Debug)]
pub struct LocaleUnits {
    locale: Locale,
    names: [UnitNames; 7],
    parse_map: HashMap<String, Unit>,
}

impl LocaleUnits {
    fn new(locale: Locale, names: [UnitNames; 7], spellings: &[(&str, Unit)]) -> Self {
        let parse_map = spellings
            .iter()
            .map(|(spelling, unit)| (spelling.to_uppercase(), *unit))
            .collect();

        Self {
            locale,
            names,
            parse_map,
        }
    }

    /// The locale this table belongs to.
    pub fn locale(&self) -> Locale {
        self.locale
    }

    /// Names of a unit.
    pub fn names(&self, unit: Unit) -> &UnitNames {
        &self.names[unit.index()]
    }

    /// Short symbol of a unit.
    pub fn short(&self, unit: Unit) -> &'static str {
        self.names(unit).short
    }

    /// Long name of a unit, in dictionary form.
    pub fn long(&self, unit: Unit) -> &'static str {
        self.names(unit).long
    }

    /// Long name of a unit, declined for `value` by the locale's plural rules.
    pub fn long_for(&self, unit: Unit, value: f64) -> &'static str {
        let category = self.locale.plural_rules().category(value);
        self.names(unit).long_form(category)
    }

    /// Resolve a unit spelling, ignoring case.
    pub fn resolve(&self, spelling: &str) -> Option<Unit> {
        self.parse_map.get(&spelling.to_uppercase()).copied()
    }

    /// Every accepted spelling, uppercased.
    pub fn spellings(&self) -> impl Iterator<Item = (&str, Unit)> {
        self.parse_map.iter().map(|(s, u)| (s.as_str(), *u))
    }
}

struct Registry {
    english: LocaleUnits,
    russian: LocaleUnits,
}

static REGISTRY: Lazy<Registry> = Lazy::new(Registry::build);

impl Registry {
    fn build() -> Self {
        let english = english_units();
        let mut russian = russian_units();

        for (spelling, unit) in &english.parse_map {
            russian
                .parse_map
                .entry(spelling.clone())
                .or_insert(*unit);
        }

        Self { english, russian }
    }
}

/// Get the unit table of a locale.
pub fn units(locale: Locale) -> &'static LocaleUnits {
    match locale {
        Locale::English => &REGISTRY.english,
        Locale::Russian => &REGISTRY.russian,
    }
}

/// Get the unit table for a locale tag.
///
/// Fails with [`SizeError::UnsupportedLocale`](crate::SizeError::UnsupportedLocale)
/// when the tag names no supported locale.
pub fn lookup(tag: &str) -> Result<&'static LocaleUnits> {
    Ok(units(Locale::parse(tag)?))
}

// ============================================================================
// Locale Tables
// ============================================================================

const fn names(
    short: &'static str,
    one: &'static str,
    few: &'static str,
    many: &'static str,
    other: &'static str,
) -> UnitNames {
    UnitNames {
        short,
        long: one,
        one,
        few,
        many,
        other,
    }
}

fn english_units() -> LocaleUnits {
    let en = |short, one, other| names(short, one, other, other, other);

    LocaleUnits::new(
        Locale::English,
        [
            en("B", "byte", "bytes"),
            en("KB", "kilobyte", "kilobytes"),
            en("MB", "megabyte", "megabytes"),
            en("GB", "gigabyte", "gigabytes"),
            en("TB", "terabyte", "terabytes"),
            en("PB", "petabyte", "petabytes"),
            en("EB", "exabyte", "exabytes"),
        ],
        &[
            ("B", Unit::Byte),
            ("BYTE", Unit::Byte),
            ("BYTES", Unit::Byte),
            ("KB", Unit::Kilobyte),
            ("KILOBYTE", Unit::Kilobyte),
            ("KILOBYTES", Unit::Kilobyte),
            ("MB", Unit::Megabyte),
            ("MEGABYTE", Unit::Megabyte),
            ("MEGABYTES", Unit::Megabyte),
            ("GB", Unit::Gigabyte),
            ("GIGABYTE", Unit::Gigabyte),
            ("GIGABYTES", Unit::Gigabyte),
            ("TB", Unit::Terabyte),
            ("TERABYTE", Unit::Terabyte),
            ("TERABYTES", Unit::Terabyte),
            ("PB", Unit::Petabyte),
            ("PETABYTE", Unit::Petabyte),
            ("PETABYTES", Unit::Petabyte),
            ("EB", Unit::Exabyte),
            ("EXABYTE", Unit::Exabyte),
            ("EXABYTES", Unit::Exabyte),
        ],
    )
}

fn russian_units() -> LocaleUnits {
    // "other" only shows up for fractional values in CLDR; the truncating
    // Russian rule never yields it, so it takes the genitive plural.
    let ru = |short, one, few, many| names(short, one, few, many, many);

    LocaleUnits::new(
        Locale::Russian,
        [
            ru("Б", "байт", "байта", "байтов"),
            ru("КБ", "килобайт", "килобайта", "килобайтов"),
            ru("МБ", "мегабайт", "мегабайта", "мегабайтов"),
            ru("ГБ", "гигабайт", "гигабайта", "гигабайтов"),
            ru("ТБ", "терабайт", "терабайта", "терабайтов"),
            ru("ПБ", "петабайт", "петабайта", "петабайтов"),
            ru("ЭБ", "эксабайт", "эксабайта", "эксабайтов"),
        ],
        &[
            ("Б", Unit::Byte),
            ("БАЙТ", Unit::Byte),
            ("БАЙТЫ", Unit::Byte),
            ("БАЙТА", Unit::Byte),
            ("БАЙТОВ", Unit::Byte),
            ("КБ", Unit::Kilobyte),
            ("КИЛОБАЙТ", Unit::Kilobyte),
            ("КИЛОБАЙТЫ", Unit::Kilobyte),
            ("КИЛОБАЙТА", Unit::Kilobyte),
            ("КИЛОБАЙТОВ", Unit::Kilobyte),
            ("МБ", Unit::Megabyte),
            ("МЕГАБАЙТ", Unit::Megabyte),
            ("МЕГАБАЙТЫ", Unit::Megabyte),
            ("МЕГАБАЙТА", Unit::Megabyte),
            ("МЕГАБАЙТОВ", Unit::Megabyte),
            ("ГБ", Unit::Gigabyte),
            ("ГИГАБАЙТ", Unit::Gigabyte),
            ("ГИГАБАЙТЫ", Unit::Gigabyte),
            ("ГИГАБАЙТА", Unit::Gigabyte),
            ("ГИГАБАЙТОВ", Unit::Gigabyte),
            ("ТБ", Unit::Terabyte),
            ("ТЕРАБАЙТ", Unit::Terabyte),
            ("ТЕРАБАЙТЫ", Unit::Terabyte),
            ("ТЕРАБАЙТА", Unit::Terabyte),
            ("ТЕРАБАЙТОВ", Unit::Terabyte),
            ("ПБ", Unit::Petabyte),
            ("ПЕТАБАЙТ", Unit::Petabyte),
            ("ПЕТАБАЙТЫ", Unit::Petabyte),
            ("ПЕТАБАЙТА", Unit::Petabyte),
            ("ПЕТАБАЙТОВ", Unit::Petabyte),
            ("ЭБ", Unit::Exabyte),
            ("ЭКСАБАЙТ", Unit::Exabyte),
            ("ЭКСАБАЙТЫ", Unit::Exabyte),
            ("ЭКСАБАЙТА", Unit::Exabyte),
            ("ЭКСАБАЙТОВ", Unit::Exabyte),
        ],
    )
}
