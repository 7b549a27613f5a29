//! Character and event info field addresses.
//!
//! The last decimal digit of the offset selects the info field through [`InfoType`];
//! the remaining digits select the character (event id or party slot) where the kind
//! has more than one.

use crate::error::{InfoTypeError, PartsError};

/// Info field selected by the last digit of an info address.
#[derive(
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    Hash,
    strum::Display,
    strum::EnumString,
    strum::AsRefStr,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum InfoType {
    /// Tile X coordinate.
    PositionX,
    /// Tile Y coordinate.
    PositionY,
    /// X coordinate at sub-tile precision.
    PositionXPrecise,
    /// Y coordinate at sub-tile precision.
    PositionYPrecise,
    /// Height above ground.
    Height,
    /// Shadow graphic number.
    ShadowGraphicId,
    /// Facing direction.
    Direction,
    /// File name of the character graphic.
    CharacterGraphicName,
}

impl InfoType {
    /// Every assigned info field in digit order.
    pub const ALL: [Self; 8] = [
        Self::PositionX,
        Self::PositionY,
        Self::PositionXPrecise,
        Self::PositionYPrecise,
        Self::Height,
        Self::ShadowGraphicId,
        Self::Direction,
        Self::CharacterGraphicName,
    ];

    /// Digit this field occupies in an info address.
    pub const fn digit(self) -> u8 {
        match self {
            Self::PositionX => 0,
            Self::PositionY => 1,
            Self::PositionXPrecise => 2,
            Self::PositionYPrecise => 3,
            Self::Height => 4,
            Self::ShadowGraphicId => 5,
            Self::Direction => 6,
            Self::CharacterGraphicName => 9,
        }
    }

    /// Field for a digit. Digits 7 and 8 (and anything above 9) are unassigned.
    pub const fn from_digit(digit: u8) -> Result<Self, InfoTypeError> {
        match digit {
            0 => Ok(Self::PositionX),
            1 => Ok(Self::PositionY),
            2 => Ok(Self::PositionXPrecise),
            3 => Ok(Self::PositionYPrecise),
            4 => Ok(Self::Height),
            5 => Ok(Self::ShadowGraphicId),
            6 => Ok(Self::Direction),
            9 => Ok(Self::CharacterGraphicName),
            _ => Err(InfoTypeError::UnassignedDigit { digit }),
        }
    }
}

/// Slots per character: one per decimal digit.
const FIELDS_PER_CHARACTER: i32 = 10;

/// Adds the last-digit info field lookup.
macro_rules! impl_info_field {
    ($name:ident) => {
        impl $name {
            /// Info field selected by `off mod 10`.
            pub const fn info_type(self) -> Result<InfoType, InfoTypeError> {
                // in 0..=9
                InfoType::from_digit((self.offset() % FIELDS_PER_CHARACTER) as u8)
            }
        }
    };
}

define_address! {
    /// Info field of a map event on the current map.
    EventInfoAddress => EventInfo
}
impl_info_field!(EventInfoAddress);

impl EventInfoAddress {
    /// Largest map event id.
    pub const MAX_MAP_EVENT_ID: i32 = Self::RANGE.size() as i32 / FIELDS_PER_CHARACTER - 1;

    /// Map event whose field is addressed.
    pub const fn map_event_id(self) -> i32 {
        self.offset() / FIELDS_PER_CHARACTER
    }

    /// Composes the address of `info_type` on `map_event_id`.
    pub fn from_parts(map_event_id: i32, info_type: InfoType) -> Result<Self, PartsError> {
        let map_event_id =
            PartsError::check("map_event_id", map_event_id, 0, Self::MAX_MAP_EVENT_ID)?;
        Ok(Self::new(
            Self::RANGE.min() + map_event_id * FIELDS_PER_CHARACTER + i32::from(info_type.digit()),
        )?)
    }
}

define_address! {
    /// Info field of the hero.
    HeroInfoAddress => HeroInfo
}
impl_info_field!(HeroInfoAddress);

impl HeroInfoAddress {
    /// Address of `info_type` on the hero.
    pub const fn from_info_type(info_type: InfoType) -> Self {
        Self(Self::RANGE.min() + info_type.digit() as i32)
    }
}

define_address! {
    /// Info field of a party member other than the hero.
    MemberInfoAddress => MemberInfo
}
impl_info_field!(MemberInfoAddress);

impl MemberInfoAddress {
    /// Largest member index.
    pub const MAX_MEMBER_INDEX: i32 = Self::RANGE.size() as i32 / FIELDS_PER_CHARACTER - 1;

    /// Party slot of the member (0-based, the hero excluded).
    pub const fn member_index(self) -> i32 {
        self.offset() / FIELDS_PER_CHARACTER
    }

    /// Composes the address of `info_type` on party slot `member_index`.
    pub fn from_parts(member_index: i32, info_type: InfoType) -> Result<Self, PartsError> {
        let member_index =
            PartsError::check("member_index", member_index, 0, Self::MAX_MEMBER_INDEX)?;
        Ok(Self::new(
            Self::RANGE.min() + member_index * FIELDS_PER_CHARACTER + i32::from(info_type.digit()),
        )?)
    }
}

define_address! {
    /// Info field of the map event currently running.
    ThisMapEventInfoAddress => ThisMapEventInfo
}
impl_info_field!(ThisMapEventInfoAddress);

impl ThisMapEventInfoAddress {
    /// Address of `info_type` on the running event.
    pub const fn from_info_type(info_type: InfoType) -> Self {
        Self(Self::RANGE.min() + info_type.digit() as i32)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use core::str::FromStr;

    #[test]
    fn event_info_lookup() {
        let info = |value| EventInfoAddress::new(value).unwrap().info_type();
        assert_eq!(info(9_100_000), Ok(InfoType::PositionX));
        assert_eq!(info(9_103_006), Ok(InfoType::Direction));
        assert_eq!(info(9_100_019), Ok(InfoType::CharacterGraphicName));
    }

    #[test]
    fn unassigned_digits_are_errors() {
        let address = EventInfoAddress::new(9_100_007).unwrap();
        assert_eq!(
            address.info_type(),
            Err(InfoTypeError::UnassignedDigit { digit: 7 })
        );
        let address = HeroInfoAddress::new(9_180_008).unwrap();
        assert_eq!(
            address.info_type(),
            Err(InfoTypeError::UnassignedDigit { digit: 8 })
        );
    }

    #[test]
    fn digit_round_trip() {
        for info_type in InfoType::ALL {
            assert_eq!(InfoType::from_digit(info_type.digit()), Ok(info_type));
        }
        assert!(InfoType::from_digit(10).is_err());
    }

    #[test]
    fn event_info_parts() {
        let address = EventInfoAddress::new(9_103_006).unwrap();
        assert_eq!(address.map_event_id(), 300);
        assert_eq!(EventInfoAddress::MAX_MAP_EVENT_ID, 7_999);
        assert_eq!(
            EventInfoAddress::from_parts(300, InfoType::Direction),
            Ok(address)
        );
        assert!(EventInfoAddress::from_parts(8_000, InfoType::PositionX).is_err());
    }

    #[test]
    fn hero_info_covers_single_character() {
        let address = HeroInfoAddress::from_info_type(InfoType::CharacterGraphicName);
        assert_eq!(address.to_int(), 9_180_009);
        assert_eq!(address, HeroInfoAddress::LAST);
        assert_eq!(
            HeroInfoAddress::new(9_180_003).unwrap().info_type(),
            Ok(InfoType::PositionYPrecise)
        );
    }

    #[test]
    fn member_info_parts() {
        let address = MemberInfoAddress::new(9_180_024).unwrap();
        assert_eq!(address.member_index(), 1);
        assert_eq!(address.info_type(), Ok(InfoType::Height));
        assert_eq!(MemberInfoAddress::MAX_MEMBER_INDEX, 4);
        assert_eq!(MemberInfoAddress::from_parts(1, InfoType::Height), Ok(address));
        assert!(MemberInfoAddress::from_parts(5, InfoType::Height).is_err());
    }

    #[test]
    fn this_map_event_info() {
        let address = ThisMapEventInfoAddress::from_info_type(InfoType::ShadowGraphicId);
        assert_eq!(address.to_int(), 9_190_005);
        assert_eq!(address.info_type(), Ok(InfoType::ShadowGraphicId));
        assert_eq!(
            ThisMapEventInfoAddress::new(9_199_991).unwrap().info_type(),
            Ok(InfoType::PositionY)
        );
    }

    #[test]
    fn info_type_names() {
        assert_eq!(InfoType::PositionXPrecise.to_string(), "position_x_precise");
        assert_eq!(InfoType::from_str("direction"), Ok(InfoType::Direction));
    }
}
