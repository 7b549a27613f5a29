//! Number, string, random and system variable addresses.

use crate::error::PartsError;

/// Adds a pass-through `variable_index` accessor and its inverse.
macro_rules! impl_variable_index {
    ($name:ident) => {
        impl $name {
            /// Variable index, equal to the offset.
            pub const fn variable_index(self) -> i32 {
                self.offset()
            }

            /// Address of the variable at `index`.
            pub fn from_index(index: i32) -> Result<Self, PartsError> {
                let index =
                    PartsError::check("variable_index", index, 0, Self::RANGE.size() as i32 - 1)?;
                Ok(Self::new(Self::RANGE.min() + index)?)
            }
        }
    };
}

define_address! {
    /// Normal number variable.
    NormalNumberVariableAddress => NormalNumberVariable
}
impl_variable_index!(NormalNumberVariableAddress);

define_address! {
    /// Spare number variable. Nine sets of 100,000 variables each.
    SpareNumberVariableAddress => SpareNumberVariable
}

/// Variables per spare set.
pub const SPARE_SET_SIZE: i32 = 100_000;

impl SpareNumberVariableAddress {
    /// Number of spare sets.
    pub const SET_COUNT: i32 = Self::RANGE.size() as i32 / SPARE_SET_SIZE;

    /// Spare set number (1..=9).
    pub const fn variable_number(self) -> i32 {
        self.offset() / SPARE_SET_SIZE + 1
    }

    /// Variable index within the set.
    pub const fn variable_index(self) -> i32 {
        self.offset() % SPARE_SET_SIZE
    }

    /// Composes the address of `variable_index` in spare set `variable_number`.
    pub fn from_parts(variable_number: i32, variable_index: i32) -> Result<Self, PartsError> {
        let variable_number =
            PartsError::check("variable_number", variable_number, 1, Self::SET_COUNT)?;
        let variable_index =
            PartsError::check("variable_index", variable_index, 0, SPARE_SET_SIZE - 1)?;
        Ok(Self::new(
            Self::RANGE.min() + (variable_number - 1) * SPARE_SET_SIZE + variable_index,
        )?)
    }
}

define_address! {
    /// String variable.
    StringVariableAddress => StringVariable
}
impl_variable_index!(StringVariableAddress);

define_address! {
    /// Random number source; reading it yields a value in `[0, random_value]`.
    RandomVariableAddress => RandomVariable
}

impl RandomVariableAddress {
    /// Inclusive upper bound of the random draw.
    pub const fn random_value(self) -> i32 {
        self.offset()
    }
}

define_address! {
    /// System number variable.
    SystemVariableAddress => SystemVariable
}
impl_variable_index!(SystemVariableAddress);

define_address! {
    /// System string variable.
    SystemStringVariableAddress => SystemStringVariable
}
impl_variable_index!(SystemStringVariableAddress);
