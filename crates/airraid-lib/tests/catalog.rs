mod common;

use airraid_lib::catalog::ShipData;
use airraid_lib::{Catalog, Error, ShipClass, SpecialShipRule};

use common::fixture_catalog;

#[test]
fn loads_fixture_catalog_and_lists_ships() {
    let catalog = fixture_catalog();

    assert_eq!(
        catalog.ship_names(),
        vec![
            "Admiral Nakhimov",
            "August von Parseval",
            "Implacable",
            "Shouhou",
            "Taihou"
        ]
    );
    assert_eq!(catalog.equipment_count(), 8);
    assert!(catalog.source_paths().is_some());
}

#[test]
fn derives_ship_attributes_at_load() {
    let catalog = fixture_catalog();

    let implacable = catalog.ship("implacable").expect("present");
    assert_eq!(implacable.ship_class, ShipClass::HeavyCarrier);
    assert_eq!(implacable.special_rule, SpecialShipRule::Implacable);
    assert!(implacable.is_support_ship);

    let shouhou = catalog.ship("Shouhou").expect("present");
    assert_eq!(shouhou.ship_class, ShipClass::LightCarrier);
    assert!(!shouhou.is_support_ship);
    assert_eq!(shouhou.special_weapon_reload, Some(5.0));
    assert_eq!(shouhou.refit_reload_bonus(), 10.0);
    assert_eq!(shouhou.display_rarity(), 3);
}

#[test]
fn slot_summaries_fold_in_refit_proficiency() {
    let catalog = fixture_catalog();
    let shouhou = catalog.ship("Shouhou").expect("present");
    assert_eq!(shouhou.slot_summary(1).as_deref(), Some("Fighter 120% x 2"));
    assert_eq!(shouhou.slot_summary(4).as_deref(), Some("Auxiliary"));

    let nakhimov = catalog.ship("Admiral Nakhimov").expect("present");
    assert_eq!(nakhimov.slot_summary(3).as_deref(), Some("Special"));

    let implacable = catalog.ship("Implacable").expect("present");
    assert_eq!(implacable.slot_summary(3).as_deref(), Some("T D 110% x 2"));
}

#[test]
fn unknown_names_include_suggestions() {
    let catalog = fixture_catalog();

    let err = catalog.ship("Taiho").expect_err("typo");
    let message = err.to_string();
    assert!(message.contains("unknown ship name"));
    assert!(message.contains("Did you mean 'Taihou'?"));

    let err = catalog
        .resolve_equipment("TBM Avengr")
        .expect_err("typo");
    assert!(err.to_string().contains("TBM Avenger"));
}

#[test]
fn lists_equipment_accepted_by_a_slot() {
    let catalog = fixture_catalog();
    let implacable = catalog.ship("Implacable").expect("present");

    let ids: Vec<u32> = catalog
        .equipment_for_slot(implacable, 3)
        .iter()
        .map(|e| e.id)
        .collect();
    assert_eq!(ids, vec![20, 30, 48040]);
}

#[test]
fn rejects_duplicate_names_case_insensitive() {
    let ship = |name: &str| -> ShipData {
        serde_json::from_value(serde_json::json!({
            "name": name,
            "type": 7,
            "equipment": {
                "1": {"type": [7], "mount": 1},
                "2": {"type": [8], "mount": 1},
                "3": {"type": [9], "mount": 1}
            }
        }))
        .expect("valid row")
    };

    let err = Catalog::from_records(vec![ship("Taihou"), ship("taihou")], Vec::new())
        .expect_err("should reject duplicates");
    match err {
        Error::DuplicateShipName { name } => assert_eq!(name, "taihou"),
        other => panic!("unexpected error: {:?}", other),
    }
}

#[test]
fn rejects_ships_without_launch_aircraft() {
    let ships = r#"[{"name": "Empty", "type": 7, "equipment": {
        "1": {"type": [7], "mount": 0},
        "2": {"type": [8], "mount": 0},
        "3": {"type": [9], "mount": 2}
    }}]"#;

    let err = Catalog::from_readers(ships.as_bytes(), "[]".as_bytes())
        .expect_err("should reject");
    match err {
        Error::CatalogValidation { message } => assert!(message.contains("Empty")),
        other => panic!("unexpected error: {:?}", other),
    }
}

#[test]
fn rejects_negative_equipment_reload() {
    let equipment = r#"[{"id": 1, "name": "Broken", "type": 7, "reload": -3}]"#;
    let err = Catalog::from_readers("[]".as_bytes(), equipment.as_bytes())
        .expect_err("should reject");
    assert!(matches!(err, Error::CatalogValidation { .. }));
}
