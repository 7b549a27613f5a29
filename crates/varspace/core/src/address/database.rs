//! Database cell addresses.
//!
//! A database cell address packs three fields into fixed-width decimal digits of its
//! offset: `TT DDDD II`, i.e. type id (2 digits), data id (4 digits) and item id
//! (2 digits). The user and system databases are also reachable through a plain
//! "variable" view with identical bounds and no decomposition.

use crate::error::PartsError;

/// Offset multiplier of the type id.
const TYPE_STRIDE: i32 = 1_000_000;
/// Offset multiplier of the data id.
const DATA_STRIDE: i32 = 100;

/// Largest type id.
pub const MAX_TYPE_ID: i32 = 99;
/// Largest data id.
pub const MAX_DATA_ID: i32 = 9_999;
/// Largest item id.
pub const MAX_ITEM_ID: i32 = 99;

/// Adds the type/data/item decomposition to a database cell address.
macro_rules! impl_database_cell {
    ($name:ident) => {
        impl $name {
            /// Database type id, `⌊off / 1_000_000⌋ mod 100`.
            pub const fn type_id(self) -> i32 {
                (self.offset() / TYPE_STRIDE) % 100
            }

            /// Data id within the type, `⌊off / 100⌋ mod 10_000`.
            pub const fn data_id(self) -> i32 {
                (self.offset() / DATA_STRIDE) % 10_000
            }

            /// Item id within the data, `off mod 100`.
            pub const fn item_id(self) -> i32 {
                self.offset() % 100
            }

            /// Composes a cell address from its type, data and item ids.
            pub fn from_parts(type_id: i32, data_id: i32, item_id: i32) -> Result<Self, PartsError> {
                let type_id = PartsError::check("type_id", type_id, 0, MAX_TYPE_ID)?;
                let data_id = PartsError::check("data_id", data_id, 0, MAX_DATA_ID)?;
                let item_id = PartsError::check("item_id", item_id, 0, MAX_ITEM_ID)?;
                let offset = type_id * TYPE_STRIDE + data_id * DATA_STRIDE + item_id;
                Ok(Self::new(Self::RANGE.min() + offset)?)
            }
        }
    };
}

define_address! {
    /// Cell of the user database.
    UserDatabaseAddress => UserDatabase
}
impl_database_cell!(UserDatabaseAddress);

define_address! {
    /// User database region read as a flat variable.
    UserDatabaseVariableAddress => UserDatabaseVariable
}

define_address! {
    /// Cell of the changeable database.
    ChangeableDatabaseAddress => ChangeableDatabase
}
impl_database_cell!(ChangeableDatabaseAddress);

define_address! {
    /// Cell of the system database.
    SystemDatabaseAddress => SystemDatabase
}
impl_database_cell!(SystemDatabaseAddress);

define_address! {
    /// System database region read as a flat variable.
    SystemDatabaseVariableAddress => SystemDatabaseVariable
}

impl UserDatabaseVariableAddress {
    /// The same integer read as a decomposed cell.
    pub const fn cell(self) -> UserDatabaseAddress {
        UserDatabaseAddress(self.0)
    }
}

impl From<UserDatabaseAddress> for UserDatabaseVariableAddress {
    fn from(address: UserDatabaseAddress) -> Self {
        Self(address.0)
    }
}

impl SystemDatabaseVariableAddress {
    /// The same integer read as a decomposed cell.
    pub const fn cell(self) -> SystemDatabaseAddress {
        SystemDatabaseAddress(self.0)
    }
}

impl From<SystemDatabaseAddress> for SystemDatabaseVariableAddress {
    fn from(address: SystemDatabaseAddress) -> Self {
        Self(address.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decomposes_user_database_cell() {
        let address = UserDatabaseAddress::new(1_035_002_410).unwrap();
        assert_eq!(address.offset(), 35_002_410);
        assert_eq!(address.type_id(), 35);
        assert_eq!(address.data_id(), 24);
        assert_eq!(address.item_id(), 10);
    }

    #[test]
    fn decomposes_last_cell() {
        let address = UserDatabaseAddress::new(1_099_999_999).unwrap();
        assert_eq!(address.type_id(), 99);
        assert_eq!(address.data_id(), 9_999);
        assert_eq!(address.item_id(), 99);
    }

    #[test]
    fn changeable_and_system_use_same_layout() {
        let changeable = ChangeableDatabaseAddress::new(1_107_000_305).unwrap();
        assert_eq!(
            (changeable.type_id(), changeable.data_id(), changeable.item_id()),
            (7, 3, 5)
        );

        let system = SystemDatabaseAddress::new(1_312_345_678).unwrap();
        assert_eq!((system.type_id(), system.data_id(), system.item_id()), (12, 3_456, 78));
    }

    #[test]
    fn changeable_bounds() {
        assert!(ChangeableDatabaseAddress::new(1_100_000_000).is_ok());
        assert!(ChangeableDatabaseAddress::new(1_199_999_999).is_ok());
        assert!(ChangeableDatabaseAddress::new(1_099_999_999).is_err());
        assert!(ChangeableDatabaseAddress::new(1_200_000_000).is_err());
    }

    #[test]
    fn bounded_addition() {
        let first = ChangeableDatabaseAddress::new(1_100_000_000).unwrap();
        assert_eq!(first.add(99_999_999).unwrap().to_int(), 1_199_999_999);
        assert!(first.add(100_000_000).is_err());
        assert!(first.add(-1).is_err());
        assert_eq!(first.to_int(), 1_100_000_000);
    }

    #[test]
    fn from_parts_inverts_decomposition() {
        let address = SystemDatabaseAddress::from_parts(12, 3_456, 78).unwrap();
        assert_eq!(address.to_int(), 1_312_345_678);

        let address = UserDatabaseAddress::from_parts(0, 0, 0).unwrap();
        assert_eq!(address, UserDatabaseAddress::FIRST);

        let address = ChangeableDatabaseAddress::from_parts(99, 9_999, 99).unwrap();
        assert_eq!(address, ChangeableDatabaseAddress::LAST);
    }

    #[test]
    fn from_parts_rejects_wide_fields() {
        assert!(matches!(
            UserDatabaseAddress::from_parts(100, 0, 0),
            Err(PartsError::FieldOutOfRange { field: "type_id", .. })
        ));
        assert!(matches!(
            UserDatabaseAddress::from_parts(0, 10_000, 0),
            Err(PartsError::FieldOutOfRange { field: "data_id", .. })
        ));
        assert!(matches!(
            UserDatabaseAddress::from_parts(0, 0, -1),
            Err(PartsError::FieldOutOfRange { field: "item_id", .. })
        ));
    }

    #[test]
    fn plain_view_shares_integer_with_cell() {
        let plain = UserDatabaseVariableAddress::new(1_035_002_410).unwrap();
        assert_eq!(plain.cell().data_id(), 24);
        assert_eq!(UserDatabaseVariableAddress::from(plain.cell()), plain);

        let plain = SystemDatabaseVariableAddress::LAST;
        assert_eq!(plain.cell(), SystemDatabaseAddress::LAST);
        assert!(SystemDatabaseVariableAddress::new(1_299_999_999).is_err());
    }
}
