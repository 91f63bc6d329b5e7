mod common;

use airraid_lib::{Error, FleetFile, Verdict};

use common::{fixture_catalog, fixtures_dir};

#[test]
fn fixture_fleet_chains_its_air_raids() {
    let catalog = fixture_catalog();
    let fleet = FleetFile::from_path(&fixtures_dir().join("fleet.json"))
        .expect("fixture parses")
        .resolve(&catalog)
        .expect("fixture resolves");

    let report = fleet.evaluate();
    let cooldowns: Vec<Option<f64>> = report
        .positions
        .iter()
        .map(|p| p.outcome.cooldown)
        .collect();
    assert_eq!(cooldowns, vec![Some(9.15), Some(8.98), Some(8.81)]);
    assert_eq!(report.verdict, Verdict::Satisfied);
    assert_eq!(report.symbol, "O");
    assert_eq!(report.positions[1].ship.as_deref(), Some("Implacable"));
    assert_eq!(
        report.positions[0].equipment[3].as_deref(),
        Some("Steam Catapult")
    );
}

#[test]
fn support_ship_outside_the_middle_fails() {
    let doc = r#"{"ships": [
        {"ship": "Taihou", "equipment": [10, 30, 20], "affinity": 150},
        {"ship": "Taihou", "equipment": [10, 30, 20], "affinity": 200},
        {"ship": "Implacable", "equipment": [10, 20, 30]}
    ]}"#;
    let catalog = fixture_catalog();
    let fleet = FleetFile::from_reader(doc.as_bytes())
        .expect("parses")
        .resolve(&catalog)
        .expect("resolves");

    // 8.98 (support), 9.06, 9.15: both gaps fit but the support ship is fastest.
    assert_eq!(fleet.verdict(), Verdict::Violated);
}

#[test]
fn crowded_cooldowns_fail() {
    let doc = r#"{"ships": [
        {"ship": "Taihou", "equipment": [10, 30, 20]},
        {"ship": "Taihou", "equipment": [10, 30, 20], "level": 120, "affinity": 150},
        {"ship": "Shouhou", "equipment": [10, 20, 30], "affinity": 200}
    ]}"#;
    let catalog = fixture_catalog();
    let fleet = FleetFile::from_reader(doc.as_bytes())
        .expect("parses")
        .resolve(&catalog)
        .expect("resolves");

    // 9.26, 9.26, 9.57
    assert_eq!(fleet.verdict(), Verdict::Violated);
}

#[test]
fn too_wide_spacing_fails() {
    let doc = r#"{"ships": [
        {"ship": "Taihou", "equipment": [10, 30, 20]},
        {"ship": "Admiral Nakhimov", "equipment": [10, 20, 40]},
        {"ship": "Shouhou", "equipment": [10, 20, 30]}
    ]}"#;
    let catalog = fixture_catalog();
    let fleet = FleetFile::from_reader(doc.as_bytes())
        .expect("parses")
        .resolve(&catalog)
        .expect("resolves");

    // 9.26, 9.34 (support), 9.76
    assert_eq!(fleet.verdict(), Verdict::Violated);
}

#[test]
fn incomplete_fleet_is_indeterminate() {
    let doc = r#"{"ships": [
        {"ship": "Taihou", "equipment": [10, 30, 20]},
        {"ship": "Implacable", "equipment": [10, 20]},
        null
    ]}"#;
    let catalog = fixture_catalog();
    let report = FleetFile::from_reader(doc.as_bytes())
        .expect("parses")
        .resolve(&catalog)
        .expect("resolves")
        .evaluate();

    assert_eq!(report.verdict, Verdict::Indeterminate);
    assert_eq!(report.symbol, "-");
    assert_eq!(report.positions[1].outcome.cooldown, None);
    assert!(report.positions[2].ship.is_none());
}

#[test]
fn globals_apply_to_every_position() {
    let doc = r#"{
        "globals": {"support_buff": true, "commander_active": true, "commander_reload": 20},
        "ships": [{"ship": "Taihou", "equipment": [10, 30, 20]}, null, null]
    }"#;
    let catalog = fixture_catalog();
    let report = FleetFile::from_reader(doc.as_bytes())
        .expect("parses")
        .resolve(&catalog)
        .expect("resolves")
        .evaluate();

    assert_eq!(report.positions[0].outcome.effective_reload, Some(560));
    assert_eq!(report.positions[0].outcome.cooldown, Some(8.97));
}

#[test]
fn slot_type_mismatch_is_rejected() {
    let doc = r#"{"ships": [{"ship": "Taihou", "equipment": [30]}, null, null]}"#;
    let err = FleetFile::from_reader(doc.as_bytes())
        .expect("parses")
        .resolve(&fixture_catalog())
        .expect_err("dive bomber in fighter slot");
    assert!(matches!(err, Error::SlotTypeMismatch { slot: 1, .. }));
}

#[test]
fn missing_fleet_file_is_reported() {
    let err = FleetFile::from_path(&fixtures_dir().join("missing.json")).expect_err("absent");
    assert!(matches!(err, Error::FleetNotFound { .. }));
}
