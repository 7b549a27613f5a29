//! Kinds of variable address and the fixed range each one owns.

use core::fmt;

use crate::range::AddressRange;

/// Every semantic kind a script integer can designate.
///
/// Each kind owns exactly one [`AddressRange`]. Ranges are pairwise disjoint except
/// for the plain-view kinds, which share bounds with their decomposed counterpart.
#[derive(
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    Hash,
    PartialOrd,
    Ord,
    strum::EnumString,
    strum::AsRefStr,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum AddressKind {
    /// User database cell (type/data/item).
    UserDatabase,
    /// User database region read as a flat variable.
    UserDatabaseVariable,
    /// Changeable database cell (type/data/item).
    ChangeableDatabase,
    /// System database cell (type/data/item).
    SystemDatabase,
    /// System database region read as a flat variable.
    SystemDatabaseVariable,
    /// Self-variable of a specific map event.
    MapEventVariable,
    /// Self-variable of the running map event.
    ThisMapEventVariable,
    /// Self-variable of the running common event.
    ThisCommonEventVariable,
    /// Self-variable of a specific common event.
    CommonEventVariable,
    /// Normal number variable.
    NormalNumberVariable,
    /// Spare number variable (sets 1 through 9).
    SpareNumberVariable,
    /// String variable.
    StringVariable,
    /// Random number in `[0, off]`.
    RandomVariable,
    /// System number variable.
    SystemVariable,
    /// Info field of a map event.
    EventInfo,
    /// Info field of the hero.
    HeroInfo,
    /// Info field of a party member.
    MemberInfo,
    /// Info field of the running map event.
    ThisMapEventInfo,
    /// System string variable.
    SystemStringVariable,
}

impl AddressKind {
    /// Number of kinds.
    pub const COUNT: usize = 19;

    /// All kinds in ascending range order.
    ///
    /// Where two kinds share a range the decomposed kind comes first.
    pub const ALL: [Self; Self::COUNT] = [
        Self::MapEventVariable,
        Self::ThisMapEventVariable,
        Self::ThisCommonEventVariable,
        Self::NormalNumberVariable,
        Self::SpareNumberVariable,
        Self::StringVariable,
        Self::RandomVariable,
        Self::SystemVariable,
        Self::EventInfo,
        Self::HeroInfo,
        Self::MemberInfo,
        Self::ThisMapEventInfo,
        Self::SystemStringVariable,
        Self::CommonEventVariable,
        Self::UserDatabase,
        Self::UserDatabaseVariable,
        Self::ChangeableDatabase,
        Self::SystemDatabase,
        Self::SystemDatabaseVariable,
    ];

    /// Range owned by this kind.
    pub const fn range(self) -> AddressRange {
        match self {
            Self::UserDatabase | Self::UserDatabaseVariable => {
                AddressRange::new(1_000_000_000, 1_099_999_999)
            }
            Self::ChangeableDatabase => AddressRange::new(1_100_000_000, 1_199_999_999),
            Self::SystemDatabase | Self::SystemDatabaseVariable => {
                AddressRange::new(1_300_000_000, 1_399_999_999)
            }
            Self::MapEventVariable => AddressRange::new(1_000_000, 1_099_999),
            Self::ThisMapEventVariable => AddressRange::new(1_100_000, 1_100_009),
            Self::ThisCommonEventVariable => AddressRange::new(1_600_000, 1_600_099),
            Self::CommonEventVariable => AddressRange::new(15_000_000, 15_999_999),
            Self::NormalNumberVariable => AddressRange::new(2_000_000, 2_099_999),
            Self::SpareNumberVariable => AddressRange::new(2_100_000, 2_999_999),
            Self::StringVariable => AddressRange::new(3_000_000, 3_999_999),
            Self::RandomVariable => AddressRange::new(8_000_000, 8_999_999),
            Self::SystemVariable => AddressRange::new(9_000_000, 9_099_999),
            Self::EventInfo => AddressRange::new(9_100_000, 9_179_999),
            Self::HeroInfo => AddressRange::new(9_180_000, 9_180_009),
            Self::MemberInfo => AddressRange::new(9_180_010, 9_180_059),
            Self::ThisMapEventInfo => AddressRange::new(9_190_000, 9_199_999),
            Self::SystemStringVariable => AddressRange::new(9_900_000, 9_999_999),
        }
    }

    /// Returns `true` for kinds that view a database region without decomposing it.
    pub const fn is_plain_view(self) -> bool {
        matches!(
            self,
            Self::UserDatabaseVariable | Self::SystemDatabaseVariable
        )
    }

    /// The decomposed kind sharing this kind's range, if this is a plain view.
    pub const fn decomposed_view(self) -> Option<Self> {
        match self {
            Self::UserDatabaseVariable => Some(Self::UserDatabase),
            Self::SystemDatabaseVariable => Some(Self::SystemDatabase),
            _ => None,
        }
    }

    /// Type name of the address value for this kind.
    pub const fn type_name(self) -> &'static str {
        match self {
            Self::UserDatabase => "UserDatabaseAddress",
            Self::UserDatabaseVariable => "UserDatabaseVariableAddress",
            Self::ChangeableDatabase => "ChangeableDatabaseAddress",
            Self::SystemDatabase => "SystemDatabaseAddress",
            Self::SystemDatabaseVariable => "SystemDatabaseVariableAddress",
            Self::MapEventVariable => "MapEventVariableAddress",
            Self::ThisMapEventVariable => "ThisMapEventVariableAddress",
            Self::ThisCommonEventVariable => "ThisCommonEventVariableAddress",
            Self::CommonEventVariable => "CommonEventVariableAddress",
            Self::NormalNumberVariable => "NormalNumberVariableAddress",
            Self::SpareNumberVariable => "SpareNumberVariableAddress",
            Self::StringVariable => "StringVariableAddress",
            Self::RandomVariable => "RandomVariableAddress",
            Self::SystemVariable => "SystemVariableAddress",
            Self::EventInfo => "EventInfoAddress",
            Self::HeroInfo => "HeroInfoAddress",
            Self::MemberInfo => "MemberInfoAddress",
            Self::ThisMapEventInfo => "ThisMapEventInfoAddress",
            Self::SystemStringVariable => "SystemStringVariableAddress",
        }
    }
}

impl fmt::Display for AddressKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.type_name())
    }
}
