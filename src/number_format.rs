//! Number Format Specifiers
//!
//! printf-style float specifiers such as `%.2f`, parsed once and applied to
//! the scaled value when formatting.
//!
//! A specifier holds literal text around a single directive
//! `%[flags][width][.precision]verb`:
//!
//! - flags: `-` left-align, `+` always print a sign, ` ` pad positive values
//!   with a space, `0` zero-pad, `#` accepted and ignored
//! - verbs: `f`/`F` fixed point (precision 6 by default), `e`/`E`
//!   scientific with a signed two-digit exponent, `g`/`G`/`v` shortest
//!   representation, switching to scientific when the exponent is below -4
//!   or reaches the precision
//!
//! `%%` is a literal percent sign. Width and precision are limited to 1000;
//! a directive with a larger field is rejected by strict parsing and kept as
//! literal text by lenient parsing.

use crate::{Result, SizeError};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Default specifier: two decimal places.
pub const DEFAULT_NUMBER_FORMAT: &str = "%.2f";

/// Largest width or precision a directive may carry.
const MAX_FIELD: usize = 1000;

/// A parsed float format specifier.
///
/// # Examples
///
/// ```
/// use locsize::NumberFormat;
///
/// let fmt: NumberFormat = "%.1f".parse().unwrap();
/// assert_eq!(fmt.render(1.26), "1.3");
///
/// let fmt: NumberFormat = "[%6.2f]".parse().unwrap();
/// assert_eq!(fmt.render(3.14159), "[  3.14]");
///
/// assert_eq!(NumberFormat::default().render(512.0), "512.00");
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct NumberFormat {
    spec: String,
    prefix: String,
    directive: Option<Directive>,
    suffix: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Default)]
struct Directive {
    left: bool,
    plus: bool,
    space: bool,
    zero: bool,
    width: Option<usize>,
    precision: Option<usize>,
    verb: Verb,
}

#[derive(Debug, Clone, Copy, PartialEq, Default)]
enum Verb {
    #[default]
    Fixed,
    Exponent {
        upper: bool,
    },
    General {
        upper: bool,
    },
}

impl Verb {
    fn from_char(c: char) -> Option<Self> {
        match c {
            'f' | 'F' => Some(Verb::Fixed),
            'e' => Some(Verb::Exponent { upper: false }),
            'E' => Some(Verb::Exponent { upper: true }),
            'g' | 'v' => Some(Verb::General { upper: false }),
            'G' => Some(Verb::General { upper: true }),
            _ => None,
        }
    }
}

impl NumberFormat {
    /// Parse a specifier without validation.
    ///
    /// Anything that is not a recognized directive is kept as literal text, so
    /// this never fails.
    pub fn lenient(spec: &str) -> Self {
        Self::scan(spec).0
    }

    /// The specifier text this format was parsed from.
    pub fn as_str(&self) -> &str {
        &self.spec
    }

    /// Render a value.
    pub fn render(&self, value: f64) -> String {
        let mut out = self.prefix.clone();
        if let Some(directive) = &self.directive {
            out.push_str(&directive.render(value));
        }
        out.push_str(&self.suffix);
        out
    }

    /// Split a specifier into literal text and at most one directive,
    /// collecting anything a strict parse would reject.
    fn scan(spec: &str) -> (Self, Option<String>) {
        let mut parsed = NumberFormat {
            spec: spec.to_string(),
            prefix: String::new(),
            directive: None,
            suffix: String::new(),
        };
        let mut problem = None;
        let mut chars = spec.char_indices().peekable();

        while let Some((start, c)) = chars.next() {
            if c != '%' {
                parsed.literal().push(c);
                continue;
            }

            if let Some((_, '%')) = chars.peek() {
                chars.next();
                parsed.literal().push('%');
                continue;
            }

            let mut directive = Directive::default();
            while let Some(&(_, flag)) = chars.peek() {
                match flag {
                    '-' => directive.left = true,
                    '+' => directive.plus = true,
                    ' ' => directive.space = true,
                    '0' => directive.zero = true,
                    '#' => {}
                    _ => break,
                }
                chars.next();
            }
            directive.width = take_number(&mut chars);
            if let Some((_, '.')) = chars.peek() {
                chars.next();
                directive.precision = Some(take_number(&mut chars).unwrap_or(0));
            }

            let verb = chars.next();
            let end = verb.map_or(spec.len(), |(i, c)| i + c.len_utf8());
            let in_range = directive
                .width
                .max(directive.precision)
                .is_none_or(|n| n <= MAX_FIELD);
            match verb.and_then(|(_, c)| Verb::from_char(c)) {
                Some(_) if !in_range => {
                    problem.get_or_insert_with(|| {
                        format!(
                            "width or precision above {} in {:?}",
                            MAX_FIELD, &spec[start..end]
                        )
                    });
                    parsed.literal().push_str(&spec[start..end]);
                }
                Some(verb) if parsed.directive.is_none() => {
                    directive.verb = verb;
                    parsed.directive = Some(directive);
                }
                Some(_) => {
                    problem.get_or_insert_with(|| {
                        format!("more than one directive in {:?}", spec)
                    });
                    parsed.literal().push_str(&spec[start..end]);
                }
                None => {
                    problem.get_or_insert_with(|| {
                        format!("unsupported directive {:?} in {:?}", &spec[start..end], spec)
                    });
                    parsed.literal().push_str(&spec[start..end]);
                }
            }
        }

        if parsed.directive.is_none() {
            problem.get_or_insert_with(|| format!("no float directive in {:?}", spec));
        }

        (parsed, problem)
    }

    fn literal(&mut self) -> &mut String {
        if self.directive.is_some() {
            &mut self.suffix
        } else {
            &mut self.prefix
        }
    }
}

fn take_number(chars: &mut std::iter::Peekable<std::str::CharIndices<'_>>) -> Option<usize> {
    let mut number: Option<usize> = None;
    while let Some(&(_, c)) = chars.peek() {
        let Some(digit) = c.to_digit(10) else { break };
        number = Some(
            number
                .unwrap_or(0)
                .saturating_mul(10)
                .saturating_add(digit as usize),
        );
        chars.next();
    }
    number
}

impl Directive {
    fn render(&self, value: f64) -> String {
        let sign = if value.is_sign_negative() && value != 0.0 {
            "-"
        } else if self.plus {
            "+"
        } else if self.space {
            " "
        } else {
            ""
        };

        let magnitude = value.abs();
        let digits = if !magnitude.is_finite() {
            magnitude.to_string()
        } else {
            match self.verb {
                Verb::Fixed => format!("{:.*}", self.precision.unwrap_or(6), magnitude),
                Verb::Exponent { upper } => {
                    scientific(magnitude, self.precision.unwrap_or(6), upper)
                }
                Verb::General { upper } => general(magnitude, self.precision, upper),
            }
        };

        let len = sign.chars().count() + digits.chars().count();
        let pad = self.width.unwrap_or(0).saturating_sub(len);

        if pad == 0 {
            format!("{}{}", sign, digits)
        } else if self.left {
            format!("{}{}{}", sign, digits, " ".repeat(pad))
        } else if self.zero && magnitude.is_finite() {
            format!("{}{}{}", sign, "0".repeat(pad), digits)
        } else {
            format!("{}{}{}", " ".repeat(pad), sign, digits)
        }
    }
}

/// Split Rust's `{:e}` output into mantissa and exponent.
fn split_exponent(formatted: &str) -> (&str, i32) {
    match formatted.split_once('e') {
        Some((mantissa, exp)) => (mantissa, exp.parse().unwrap_or(0)),
        None => (formatted, 0),
    }
}

fn with_exponent(mantissa: &str, exp: i32, upper: bool) -> String {
    let e = if upper { 'E' } else { 'e' };
    let sign = if exp < 0 { '-' } else { '+' };
    format!("{}{}{}{:02}", mantissa, e, sign, exp.unsigned_abs())
}

fn scientific(value: f64, precision: usize, upper: bool) -> String {
    let formatted = format!("{:.*e}", precision, value);
    let (mantissa, exp) = split_exponent(&formatted);
    with_exponent(mantissa, exp, upper)
}

fn general(value: f64, precision: Option<usize>, upper: bool) -> String {
    let (formatted, eprec) = match precision {
        None => (format!("{:e}", value), None),
        Some(p) => (format!("{:.*e}", p.max(1) - 1, value), Some(p.max(1))),
    };
    let (mantissa, exp) = split_exponent(&formatted);

    let mantissa = if mantissa.contains('.') {
        mantissa.trim_end_matches('0').trim_end_matches('.')
    } else {
        mantissa
    };
    let significant = mantissa.chars().filter(char::is_ascii_digit).count() as i32;
    let point = exp + 1;

    let eprec = match eprec {
        None => 6,
        Some(p) if p as i32 > significant && significant >= point => significant,
        Some(p) => p as i32,
    };

    if exp < -4 || exp >= eprec {
        with_exponent(mantissa, exp, upper)
    } else if precision.is_none() {
        value.to_string()
    } else {
        format!("{:.*}", (significant - point).max(0) as usize, value)
    }
}

impl Default for NumberFormat {
    fn default() -> Self {
        Self::lenient(DEFAULT_NUMBER_FORMAT)
    }
}

impl FromStr for NumberFormat {
    type Err = SizeError;

    fn from_str(spec: &str) -> Result<Self> {
        match Self::scan(spec) {
            (format, None) => Ok(format),
            (_, Some(problem)) => Err(SizeError::InvalidFormat(problem)),
        }
    }
}

impl TryFrom<String> for NumberFormat {
    type Error = SizeError;

    fn try_from(spec: String) -> Result<Self> {
        spec.parse()
    }
}

impl From<NumberFormat> for String {
    fn from(format: NumberFormat) -> Self {
        format.spec
    }
}

impl fmt::Display for NumberFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.spec)
    }
}
