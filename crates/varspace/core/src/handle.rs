//! Closed union over every address kind.

use core::fmt;

use crate::address::{
    Address, ChangeableDatabaseAddress, CommonEventVariableAddress, EventInfoAddress,
    HeroInfoAddress, MapEventVariableAddress, MemberInfoAddress, NormalNumberVariableAddress,
    RandomVariableAddress, SpareNumberVariableAddress, StringVariableAddress,
    SystemDatabaseAddress, SystemDatabaseVariableAddress, SystemStringVariableAddress,
    SystemVariableAddress, ThisCommonEventVariableAddress, ThisMapEventInfoAddress,
    ThisMapEventVariableAddress, UserDatabaseAddress, UserDatabaseVariableAddress,
};
use crate::error::{ClassifyError, RangeError};
use crate::kind::AddressKind;

/// Defines [`AddressHandle`] with one variant per kind, plus the plumbing that routes
/// every capability to the wrapped value.
macro_rules! define_handle {
    ($($variant:ident($address:ident)),+ $(,)?) => {
        /// An address of any kind, as produced by the classifier.
        #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
        pub enum AddressHandle {
            $(
                #[doc = concat!("A [`", stringify!($address), "`].")]
                $variant($address),
            )+
        }

        impl AddressHandle {
            /// Constructs `raw` as the given kind.
            pub fn with_kind(kind: AddressKind, raw: i32) -> Result<Self, RangeError> {
                match kind {
                    $(AddressKind::$variant => $address::new(raw).map(Self::$variant),)+
                }
            }

            /// Kind of the wrapped address.
            pub const fn kind(&self) -> AddressKind {
                match self {
                    $(Self::$variant(_) => AddressKind::$variant,)+
                }
            }

            /// Raw script integer.
            pub const fn to_int(&self) -> i32 {
                match self {
                    $(Self::$variant(address) => $address::to_int(*address),)+
                }
            }

            /// Address `delta` slots higher, in the same kind.
            pub fn add(&self, delta: i32) -> Result<Self, RangeError> {
                match self {
                    $(Self::$variant(address) => {
                        $address::add(*address, delta).map(Self::$variant)
                    })+
                }
            }

            /// Address `delta` slots lower, in the same kind.
            pub fn sub_int(&self, delta: i32) -> Result<Self, RangeError> {
                match self {
                    $(Self::$variant(address) => {
                        $address::sub_int(*address, delta).map(Self::$variant)
                    })+
                }
            }

            /// Raw distance to any other address.
            pub fn sub_addr(&self, other: &dyn Address) -> i32 {
                self.to_int() - other.to_int()
            }
        }

        $(
            impl From<$address> for AddressHandle {
                fn from(address: $address) -> Self {
                    Self::$variant(address)
                }
            }
        )+

        impl fmt::Display for AddressHandle {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                match self {
                    $(Self::$variant(address) => fmt::Display::fmt(address, f),)+
                }
            }
        }
    };
}

define_handle! {
    UserDatabase(UserDatabaseAddress),
    UserDatabaseVariable(UserDatabaseVariableAddress),
    ChangeableDatabase(ChangeableDatabaseAddress),
    SystemDatabase(SystemDatabaseAddress),
    SystemDatabaseVariable(SystemDatabaseVariableAddress),
    MapEventVariable(MapEventVariableAddress),
    ThisMapEventVariable(ThisMapEventVariableAddress),
    ThisCommonEventVariable(ThisCommonEventVariableAddress),
    CommonEventVariable(CommonEventVariableAddress),
    NormalNumberVariable(NormalNumberVariableAddress),
    SpareNumberVariable(SpareNumberVariableAddress),
    StringVariable(StringVariableAddress),
    RandomVariable(RandomVariableAddress),
    SystemVariable(SystemVariableAddress),
    EventInfo(EventInfoAddress),
    HeroInfo(HeroInfoAddress),
    MemberInfo(MemberInfoAddress),
    ThisMapEventInfo(ThisMapEventInfoAddress),
    SystemStringVariable(SystemStringVariableAddress),
}

impl Address for AddressHandle {
    fn kind(&self) -> AddressKind {
        AddressHandle::kind(self)
    }

    fn to_int(&self) -> i32 {
        AddressHandle::to_int(self)
    }

    fn add(&self, delta: i32) -> Result<Self, RangeError> {
        AddressHandle::add(self, delta)
    }

    fn sub_int(&self, delta: i32) -> Result<Self, RangeError> {
        AddressHandle::sub_int(self, delta)
    }
}

impl TryFrom<i32> for AddressHandle {
    type Error = ClassifyError;

    /// Classifies `raw` with the default priority.
    fn try_from(raw: i32) -> Result<Self, Self::Error> {
        crate::classify::classify(raw)
    }
}

impl From<AddressHandle> for i32 {
    fn from(handle: AddressHandle) -> i32 {
        handle.to_int()
    }
}
