//! Unit magnitudes

use crate::ByteCount;

/// One of the seven power-of-1024 magnitudes.
///
/// Units are ordered by size, so `Unit::Byte < Unit::Exabyte`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Unit {
    /// 1 byte
    Byte,
    /// 1024 bytes
    Kilobyte,
    /// 1024² bytes
    Megabyte,
    /// 1024³ bytes
    Gigabyte,
    /// 1024⁴ bytes
    Terabyte,
    /// 1024⁵ bytes
    Petabyte,
    /// 1024⁶ bytes
    Exabyte,
}

impl Unit {
    /// All units, smallest first.
    pub const ALL: [Unit; 7] = [
        Unit::Byte,
        Unit::Kilobyte,
        Unit::Megabyte,
        Unit::Gigabyte,
        Unit::Terabyte,
        Unit::Petabyte,
        Unit::Exabyte,
    ];

    /// Number of bytes in one of this unit.
    pub const fn size(self) -> ByteCount {
        ByteCount::from_bytes(1u64 << (10 * self.index()))
    }

    /// Position in [`Unit::ALL`].
    pub const fn index(self) -> usize {
        self as usize
    }

    /// Largest unit that does not exceed `count`; `Byte` below one kilobyte.
    pub fn best_fit(count: ByteCount) -> Unit {
        Unit::ALL
            .into_iter()
            .rev()
            .find(|unit| count >= unit.size())
            .unwrap_or(Unit::Byte)
    }
}
