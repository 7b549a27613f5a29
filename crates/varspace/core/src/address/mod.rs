//! Range-validated address values, one type per [`AddressKind`].
//!
//! Every address type wraps a single `i32` that is checked against the kind's range
//! once, at construction. Values are immutable: arithmetic returns a new address (or
//! a [`RangeError`]) and never touches the receiver.
//!
//! The types are grouped by the region of the script namespace they cover:
//! - [`database`]: database cells and their plain-variable views
//! - [`event`]: map event and common event self-variables
//! - [`variable`]: number, string, random and system variables
//! - [`info`]: character and event info fields

use crate::error::RangeError;
use crate::kind::AddressKind;

/// Capabilities shared by every address value and by [`crate::AddressHandle`].
pub trait Address {
    /// Kind that owns this address.
    fn kind(&self) -> AddressKind;

    /// Raw script integer.
    fn to_int(&self) -> i32;

    /// Position of the address within its kind's range.
    fn offset(&self) -> i32 {
        self.to_int() - self.kind().range().min()
    }

    /// Address `delta` slots above this one, in the same kind.
    fn add(&self, delta: i32) -> Result<Self, RangeError>
    where
        Self: Sized;

    /// Address `delta` slots below this one, in the same kind.
    fn sub_int(&self, delta: i32) -> Result<Self, RangeError>
    where
        Self: Sized;

    /// Raw distance to any other address, regardless of kind.
    ///
    /// Every range lies in `[1_000_000, 1_399_999_999]`, so the difference always fits
    /// in an `i32`.
    fn sub_addr(&self, other: &dyn Address) -> i32 {
        self.to_int() - other.to_int()
    }
}

/// Checks `value` against the range of `kind`.
pub(crate) fn validate(kind: AddressKind, value: i32) -> Result<i32, RangeError> {
    if kind.range().contains(i64::from(value)) {
        Ok(value)
    } else {
        Err(RangeError::new(kind, i64::from(value)))
    }
}

/// Moves `value` by `delta` and checks the result against the range of `kind`.
///
/// The sum is taken in `i64`; the valid window for `delta` is
/// `[min - value, max - value]`, never the whole `i32` domain.
pub(crate) fn shift(kind: AddressKind, value: i32, delta: i64) -> Result<i32, RangeError> {
    let target = i64::from(value) + delta;
    if kind.range().contains(target) {
        // contained in an i32 range
        Ok(target as i32)
    } else {
        tracing::debug!(%kind, value, delta, target, "address arithmetic left range");
        Err(RangeError::new(kind, target))
    }
}

/// Defines an address value type for one kind.
macro_rules! define_address {
    ($(#[$meta:meta])* $name:ident => $kind:ident) => {
        $(#[$meta])*
        #[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
        #[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
        #[cfg_attr(feature = "serde", serde(try_from = "i32", into = "i32"))]
        pub struct $name(i32);

        impl $name {
            /// Kind that owns this address type.
            pub const KIND: $crate::kind::AddressKind = $crate::kind::AddressKind::$kind;

            /// Range owned by this address type.
            pub const RANGE: $crate::range::AddressRange = Self::KIND.range();

            /// Lowest address of the range.
            pub const FIRST: Self = Self(Self::RANGE.min());

            /// Highest address of the range.
            pub const LAST: Self = Self(Self::RANGE.max());

            /// Validates `value` against the range of this kind.
            pub fn new(value: i32) -> Result<Self, $crate::error::RangeError> {
                $crate::address::validate(Self::KIND, value).map(Self)
            }

            /// Alias of [`Self::new`] for call sites converting raw integers.
            pub fn try_from_int(value: i32) -> Result<Self, $crate::error::RangeError> {
                Self::new(value)
            }

            /// Raw script integer.
            #[inline]
            pub const fn to_int(self) -> i32 {
                self.0
            }

            /// Position within the range, always in `[0, RANGE.size())`.
            #[inline]
            pub const fn offset(self) -> i32 {
                self.0 - Self::RANGE.min()
            }

            /// Address `delta` slots higher, if it stays in range.
            pub fn add(self, delta: i32) -> Result<Self, $crate::error::RangeError> {
                $crate::address::shift(Self::KIND, self.0, i64::from(delta)).map(Self)
            }

            /// Address `delta` slots lower, if it stays in range.
            pub fn sub_int(self, delta: i32) -> Result<Self, $crate::error::RangeError> {
                $crate::address::shift(Self::KIND, self.0, -i64::from(delta)).map(Self)
            }

            /// Raw distance to `other`, which may be of any kind.
            pub fn sub_addr(self, other: &dyn $crate::address::Address) -> i32 {
                self.0 - other.to_int()
            }
        }

        impl $crate::address::Address for $name {
            fn kind(&self) -> $crate::kind::AddressKind {
                Self::KIND
            }

            fn to_int(&self) -> i32 {
                self.0
            }

            fn add(&self, delta: i32) -> Result<Self, $crate::error::RangeError> {
                $name::add(*self, delta)
            }

            fn sub_int(&self, delta: i32) -> Result<Self, $crate::error::RangeError> {
                $name::sub_int(*self, delta)
            }
        }

        impl TryFrom<i32> for $name {
            type Error = $crate::error::RangeError;

            fn try_from(value: i32) -> Result<Self, Self::Error> {
                Self::new(value)
            }
        }

        impl From<$name> for i32 {
            fn from(address: $name) -> i32 {
                address.0
            }
        }

        impl core::fmt::Display for $name {
            fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
                write!(f, "{}({})", stringify!($name), self.0)
            }
        }
    };
}

pub mod database;
pub mod event;
pub mod info;
pub mod variable;

pub use database::{
    ChangeableDatabaseAddress, SystemDatabaseAddress, SystemDatabaseVariableAddress,
    UserDatabaseAddress, UserDatabaseVariableAddress,
};
pub use event::{
    CommonEventVariableAddress, MapEventVariableAddress, ThisCommonEventVariableAddress,
    ThisMapEventVariableAddress,
};
pub use info::{
    EventInfoAddress, HeroInfoAddress, InfoType, MemberInfoAddress, ThisMapEventInfoAddress,
};
pub use variable::{
    NormalNumberVariableAddress, RandomVariableAddress, SpareNumberVariableAddress,
    StringVariableAddress, SystemStringVariableAddress, SystemVariableAddress,
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn shift_window_is_bounded_by_kind_range() {
        let kind = AddressKind::ChangeableDatabase;
        assert_eq!(shift(kind, 1_100_000_000, 99_999_999), Ok(1_199_999_999));
        assert!(shift(kind, 1_100_000_000, 100_000_000).is_err());
        assert!(shift(kind, 1_100_000_000, -1).is_err());
    }

    #[test]
    fn shift_reports_sum_beyond_i32() {
        let kind = AddressKind::SystemDatabase;
        let error = shift(kind, 1_399_999_999, i64::from(i32::MAX)).unwrap_err();
        assert_eq!(error.attempted, 1_399_999_999 + i64::from(i32::MAX));
        assert_eq!(error.kind, kind);
    }

    #[test]
    fn validate_accepts_only_range_members() {
        let kind = AddressKind::HeroInfo;
        assert_eq!(validate(kind, 9_180_000), Ok(9_180_000));
        assert_eq!(validate(kind, 9_180_009), Ok(9_180_009));
        assert!(validate(kind, 9_179_999).is_err());
        assert!(validate(kind, 9_180_010).is_err());
    }

    #[test]
    fn sub_addr_crosses_kinds() {
        let changeable = ChangeableDatabaseAddress::new(1_125_000_050).unwrap();
        let this_event = ThisMapEventVariableAddress::new(1_100_000).unwrap();
        assert_eq!(changeable.sub_addr(&this_event), 1_125_000_050 - 1_100_000);
        assert_eq!(this_event.sub_addr(&changeable), 1_100_000 - 1_125_000_050);

        let map_event = MapEventVariableAddress::LAST;
        assert_eq!(changeable.sub_addr(&map_event), 1_125_000_050 - 1_099_999);
        assert!(MapEventVariableAddress::new(1_100_000).is_err());
    }

    #[test]
    fn trait_methods_match_inherent_ones() {
        let address = NormalNumberVariableAddress::new(2_000_010).unwrap();
        let dynamic: &dyn Address = &address;
        assert_eq!(dynamic.to_int(), 2_000_010);
        assert_eq!(dynamic.offset(), 10);
        assert_eq!(dynamic.kind(), AddressKind::NormalNumberVariable);
        assert_eq!(Address::add(&address, 5), address.add(5));
        assert_eq!(Address::sub_int(&address, 11), address.sub_int(11));
    }

    #[test]
    fn display_names_the_kind() {
        let address = StringVariableAddress::new(3_000_001).unwrap();
        assert_eq!(address.to_string(), "StringVariableAddress(3000001)");
    }
}
