#![cfg(feature = "serde")]

use varspace_core::{AddressKind, ClassifierConfig, CoincidentView, InfoType, UserDatabaseAddress};

#[test]
fn address_serializes_as_raw_integer() {
    let address = UserDatabaseAddress::from_parts(35, 24, 10).unwrap();
    assert_eq!(serde_json::to_string(&address).unwrap(), "1035002410");
}

#[test]
fn deserialization_validates_range() {
    let address: UserDatabaseAddress = serde_json::from_str("1035002410").unwrap();
    assert_eq!(address.type_id(), 35);

    let error = serde_json::from_str::<UserDatabaseAddress>("999").unwrap_err();
    assert!(error.to_string().contains("out of range"));
}

#[test]
fn enums_use_snake_case() {
    assert_eq!(
        serde_json::to_string(&AddressKind::SpareNumberVariable).unwrap(),
        "\"spare_number_variable\""
    );
    assert_eq!(
        serde_json::from_str::<InfoType>("\"character_graphic_name\"").unwrap(),
        InfoType::CharacterGraphicName
    );
}

#[test]
fn config_fills_missing_fields() {
    let config: ClassifierConfig = serde_json::from_str("{}").unwrap();
    assert_eq!(config, ClassifierConfig::new());

    let config: ClassifierConfig = serde_json::from_str(r#"{"coincident":"plain"}"#).unwrap();
    assert_eq!(config.coincident, CoincidentView::Plain);
}
