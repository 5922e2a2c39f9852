//! The byte count value type

use crate::{Result, SizeError, Unit};
use serde::de::{self, Visitor};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::iter::Sum;
use std::ops::{Add, AddAssign, Div, Mul, Sub, SubAssign};
use std::str::FromStr;

/// A number of bytes.
///
/// Sizes can be combined and scaled and still format with the right suffix.
/// Addition, subtraction and multiplication wrap around on overflow in every
/// build profile; division by zero panics like integer division.
///
/// # Examples
///
/// ```
/// use locsize::ByteCount;
///
/// let size = ByteCount::MB * 3 + ByteCount::KB;
/// assert_eq!(size.as_u64(), 3 * 1024 * 1024 + 1024);
///
/// let parsed: ByteCount = "1.5 MB".parse().unwrap();
/// assert_eq!(parsed, ByteCount::new(1.5 * 1024.0 * 1024.0));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct ByteCount(u64);

impl ByteCount {
    /// One byte
    pub const B: ByteCount = Unit::Byte.size();
    /// One kilobyte (1024 bytes)
    pub const KB: ByteCount = Unit::Kilobyte.size();
    /// One megabyte
    pub const MB: ByteCount = Unit::Megabyte.size();
    /// One gigabyte
    pub const GB: ByteCount = Unit::Gigabyte.size();
    /// One terabyte
    pub const TB: ByteCount = Unit::Terabyte.size();
    /// One petabyte
    pub const PB: ByteCount = Unit::Petabyte.size();
    /// One exabyte
    pub const EB: ByteCount = Unit::Exabyte.size();

    /// Type name reported to command-line flag frameworks.
    pub const TYPE_NAME: &'static str = "byte_size";

    /// Create a byte count from a numeric value, truncating any fraction.
    ///
    /// Negative values wrap around as two's-complement integers and values
    /// beyond `u64::MAX` saturate. Callers that care should check the sign
    /// first.
    pub fn new(value: f64) -> Self {
        if value < 0.0 {
            Self(value as i64 as u64)
        } else {
            Self(value as u64)
        }
    }

    /// Create a byte count from an exact number of bytes.
    pub const fn from_bytes(bytes: u64) -> Self {
        Self(bytes)
    }

    /// Get the number of bytes.
    pub const fn as_u64(self) -> u64 {
        self.0
    }

    /// Get the value, for frameworks that read flags back generically.
    pub fn get(&self) -> ByteCount {
        *self
    }

    /// Replace the value by parsing `s` with the active locale.
    ///
    /// On error the current value is left untouched.
    pub fn set(&mut self, s: &str) -> Result<()> {
        *self = crate::parse(s)?;
        Ok(())
    }

    /// Parse from raw text bytes, as handed over by text-based config decoders.
    pub fn from_text(text: &[u8]) -> Result<Self> {
        let s = std::str::from_utf8(text)
            .map_err(|_| SizeError::MalformedInput(String::from_utf8_lossy(text).into_owned()))?;
        crate::parse(s)
    }

    /// Replace the value by parsing raw text bytes.
    pub fn unmarshal_text(&mut self, text: &[u8]) -> Result<()> {
        *self = Self::from_text(text)?;
        Ok(())
    }
}

impl FromStr for ByteCount {
    type Err = SizeError;

    fn from_str(s: &str) -> Result<Self> {
        crate::parse(s)
    }
}

impl fmt::Display for ByteCount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(&crate::config().format(*self))
    }
}

impl From<u64> for ByteCount {
    fn from(bytes: u64) -> Self {
        Self(bytes)
    }
}

impl From<ByteCount> for u64 {
    fn from(size: ByteCount) -> Self {
        size.0
    }
}

// ============================================================================
// Arithmetic
// ============================================================================

impl Add for ByteCount {
    type Output = ByteCount;

    fn add(self, rhs: ByteCount) -> ByteCount {
        ByteCount(self.0.wrapping_add(rhs.0))
    }
}

impl AddAssign for ByteCount {
    fn add_assign(&mut self, rhs: ByteCount) {
        self.0 = self.0.wrapping_add(rhs.0);
    }
}

impl Sub for ByteCount {
    type Output = ByteCount;

    fn sub(self, rhs: ByteCount) -> ByteCount {
        ByteCount(self.0.wrapping_sub(rhs.0))
    }
}

impl SubAssign for ByteCount {
    fn sub_assign(&mut self, rhs: ByteCount) {
        self.0 = self.0.wrapping_sub(rhs.0);
    }
}

impl Mul<u64> for ByteCount {
    type Output = ByteCount;

    fn mul(self, rhs: u64) -> ByteCount {
        ByteCount(self.0.wrapping_mul(rhs))
    }
}

impl Mul<ByteCount> for u64 {
    type Output = ByteCount;

    fn mul(self, rhs: ByteCount) -> ByteCount {
        ByteCount(self.wrapping_mul(rhs.0))
    }
}

impl Div<u64> for ByteCount {
    type Output = ByteCount;

    fn div(self, rhs: u64) -> ByteCount {
        ByteCount(self.0 / rhs)
    }
}

impl Sum for ByteCount {
    fn sum<I: Iterator<Item = ByteCount>>(iter: I) -> ByteCount {
        iter.fold(ByteCount(0), Add::add)
    }
}

// ============================================================================
// Serde
// ============================================================================

impl Serialize for ByteCount {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.serialize_u64(self.0)
    }
}

impl<'de> Deserialize<'de> for ByteCount {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        deserializer.deserialize_any(ByteCountVisitor)
    }
}

struct ByteCountVisitor;

impl Visitor<'_> for ByteCountVisitor {
    type Value = ByteCount;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("a byte size such as \"1.5 MB\" or a number of bytes")
    }

    fn visit_u64<E: de::Error>(self, v: u64) -> std::result::Result<ByteCount, E> {
        Ok(ByteCount(v))
    }

    fn visit_i64<E: de::Error>(self, v: i64) -> std::result::Result<ByteCount, E> {
        u64::try_from(v)
            .map(ByteCount)
            .map_err(|_| E::invalid_value(de::Unexpected::Signed(v), &self))
    }

    fn visit_f64<E: de::Error>(self, v: f64) -> std::result::Result<ByteCount, E> {
        if v.is_finite() && v >= 0.0 {
            Ok(ByteCount::new(v))
        } else {
            Err(E::invalid_value(de::Unexpected::Float(v), &self))
        }
    }

    fn visit_str<E: de::Error>(self, v: &str) -> std::result::Result<ByteCount, E> {
        crate::parse(v).map_err(E::custom)
    }

    fn visit_bytes<E: de::Error>(self, v: &[u8]) -> std::result::Result<ByteCount, E> {
        ByteCount::from_text(v).map_err(E::custom)
    }
}
