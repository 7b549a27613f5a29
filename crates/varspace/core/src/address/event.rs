//! Self-variable addresses of map events and common events.

use crate::error::PartsError;

/// Self-variables per map event.
pub const MAP_EVENT_SELF_VARIABLES: i32 = 10;
/// Self-variables per common event.
pub const COMMON_EVENT_SELF_VARIABLES: i32 = 100;

define_address! {
    /// Self-variable of a specific map event on the current map.
    MapEventVariableAddress => MapEventVariable
}

impl MapEventVariableAddress {
    /// Largest map event id.
    pub const MAX_MAP_EVENT_ID: i32 = Self::RANGE.size() as i32 / MAP_EVENT_SELF_VARIABLES - 1;

    /// Map event owning the self-variable.
    pub const fn map_event_id(self) -> i32 {
        self.offset() / MAP_EVENT_SELF_VARIABLES
    }

    /// Self-variable slot within the event (0..=9).
    pub const fn self_index(self) -> i32 {
        self.offset() % MAP_EVENT_SELF_VARIABLES
    }

    /// Composes the address of `self_index` on `map_event_id`.
    pub fn from_parts(map_event_id: i32, self_index: i32) -> Result<Self, PartsError> {
        let map_event_id =
            PartsError::check("map_event_id", map_event_id, 0, Self::MAX_MAP_EVENT_ID)?;
        let self_index =
            PartsError::check("self_index", self_index, 0, MAP_EVENT_SELF_VARIABLES - 1)?;
        Ok(Self::new(
            Self::RANGE.min() + map_event_id * MAP_EVENT_SELF_VARIABLES + self_index,
        )?)
    }
}

define_address! {
    /// Self-variable of the map event currently running.
    ThisMapEventVariableAddress => ThisMapEventVariable
}

impl ThisMapEventVariableAddress {
    /// Self-variable slot (0..=9).
    pub const fn slot(self) -> i32 {
        self.offset()
    }
}

define_address! {
    /// Self-variable of the common event currently running.
    ThisCommonEventVariableAddress => ThisCommonEventVariable
}

impl ThisCommonEventVariableAddress {
    /// Self-variable slot (0..=99).
    pub const fn slot(self) -> i32 {
        self.offset()
    }
}

define_address! {
    /// Self-variable of a specific common event.
    CommonEventVariableAddress => CommonEventVariable
}

impl CommonEventVariableAddress {
    /// Largest common event id.
    pub const MAX_COMMON_EVENT_ID: i32 =
        Self::RANGE.size() as i32 / COMMON_EVENT_SELF_VARIABLES - 1;

    /// Common event owning the self-variable.
    pub const fn common_event_id(self) -> i32 {
        self.offset() / COMMON_EVENT_SELF_VARIABLES
    }

    /// Self-variable slot within the event (0..=99).
    pub const fn self_index(self) -> i32 {
        self.offset() % COMMON_EVENT_SELF_VARIABLES
    }

    /// Composes the address of `self_index` on `common_event_id`.
    pub fn from_parts(common_event_id: i32, self_index: i32) -> Result<Self, PartsError> {
        let common_event_id = PartsError::check(
            "common_event_id",
            common_event_id,
            0,
            Self::MAX_COMMON_EVENT_ID,
        )?;
        let self_index =
            PartsError::check("self_index", self_index, 0, COMMON_EVENT_SELF_VARIABLES - 1)?;
        Ok(Self::new(
            Self::RANGE.min() + common_event_id * COMMON_EVENT_SELF_VARIABLES + self_index,
        )?)
    }
}
