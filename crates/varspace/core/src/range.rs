//! Closed integer intervals owned by address kinds.

use core::fmt;

/// Closed, inclusive interval `[min, max]` of the `i32` domain.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct AddressRange {
    min: i32,
    max: i32,
}

impl AddressRange {
    /// Creates a new range.
    ///
    /// # Panics
    ///
    /// Panics if `min > max`. Ranges are only ever built as constants, so this fires
    /// at compile time.
    pub const fn new(min: i32, max: i32) -> Self {
        assert!(min <= max);
        Self { min, max }
    }

    /// Inclusive lower bound.
    #[inline]
    pub const fn min(self) -> i32 {
        self.min
    }

    /// Inclusive upper bound.
    #[inline]
    pub const fn max(self) -> i32 {
        self.max
    }

    /// Number of integers in the range.
    ///
    /// Widened to `u64` because `[i32::MIN, i32::MAX]` holds `2^32` integers.
    #[inline]
    pub const fn size(self) -> u64 {
        self.max.abs_diff(self.min) as u64 + 1
    }

    /// Returns `true` if `value` lies in `[min, max]`.
    #[inline]
    pub const fn contains(self, value: i64) -> bool {
        self.min as i64 <= value && value <= self.max as i64
    }

    /// Position of `value` within the range.
    ///
    /// Returns `None` if `value` is outside the range.
    pub const fn offset_of(self, value: i32) -> Option<u32> {
        if self.contains(value as i64) {
            Some(value.abs_diff(self.min))
        } else {
            None
        }
    }

    /// Returns `true` if the two ranges share at least one integer.
    pub const fn overlaps(self, other: Self) -> bool {
        self.min <= other.max && other.min <= self.max
    }
}

impl fmt::Display for AddressRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}, {}]", self.min, self.max)
    }
}
