//! Shared fixture helpers for the integration tests.

use std::path::PathBuf;

use airraid_lib::{Catalog, CatalogPaths, ShipLoadout};

/// Fixture directory holding `ships.json`, `equipment.json` and `fleet.json`.
pub fn fixtures_dir() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("../../docs/fixtures")
}

/// Load the fixture catalog.
#[allow(dead_code)]
pub fn fixture_catalog() -> Catalog {
    CatalogPaths::in_dir(&fixtures_dir())
        .load()
        .expect("fixture catalog loads")
}

/// Build a loadout for `ship` with the given items in slots 1 to 3; slot 4
/// keeps the default item.
#[allow(dead_code)]
pub fn loadout<'a>(catalog: &'a Catalog, ship: &str, items: [u32; 3]) -> ShipLoadout<'a> {
    let mut loadout = ShipLoadout::new();
    loadout.select_ship(catalog.ship(ship).expect("fixture ship"), catalog);
    for (index, id) in items.into_iter().enumerate() {
        let item = catalog.equipment_by_id(id).expect("fixture equipment");
        loadout.equip(index + 1, item).expect("item fits slot");
    }
    loadout
}
