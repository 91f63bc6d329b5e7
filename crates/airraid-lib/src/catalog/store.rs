//! Catalog loading and lookup.
//!
//! The catalog is read once from `ships.json` and `equipment.json`, validated,
//! and then only ever borrowed.

use std::collections::HashMap;
use std::fs;
use std::io::Read;
use std::path::{Path, PathBuf};

use tracing::{debug, info};

use crate::error::{Error, Result};

use super::records::{EquipmentRecord, ShipData, ShipRecord};

/// Minimum similarity for a catalog name to be offered as a suggestion.
const SUGGESTION_THRESHOLD: f64 = 0.75;

/// Maximum number of suggestions attached to a lookup error.
const MAX_SUGGESTIONS: usize = 3;

/// Ship and equipment reference tables.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    ships: HashMap<String, ShipRecord>,
    equipment: HashMap<u32, EquipmentRecord>,
    equipment_names: HashMap<String, u32>,
    sources: Option<(PathBuf, PathBuf)>,
}

impl Catalog {
    /// Load the catalog from a ships file and an equipment file.
    pub fn from_paths(ships: &Path, equipment: &Path) -> Result<Self> {
        for path in [ships, equipment] {
            if !path.exists() {
                return Err(Error::CatalogNotFound {
                    path: path.to_path_buf(),
                });
            }
        }
        debug!(ships = %ships.display(), equipment = %equipment.display(), "loading catalog");

        let mut catalog = Self::from_readers(fs::File::open(ships)?, fs::File::open(equipment)?)?;
        catalog.sources = Some((ships.to_path_buf(), equipment.to_path_buf()));
        Ok(catalog)
    }

    /// Load the catalog from readers yielding the two JSON documents.
    pub fn from_readers<S: Read, E: Read>(ships: S, equipment: E) -> Result<Self> {
        let ships: Vec<ShipData> = serde_json::from_reader(ships)?;
        let equipment: Vec<EquipmentRecord> = serde_json::from_reader(equipment)?;
        Self::from_records(ships, equipment)
    }

    /// Build the catalog from already-parsed rows.
    pub fn from_records(ships: Vec<ShipData>, equipment: Vec<EquipmentRecord>) -> Result<Self> {
        let mut catalog = Self::default();

        for data in ships {
            let ship = ShipRecord::try_from(data)?;
            let key = normalize_name(&ship.name);
            if catalog.ships.contains_key(&key) {
                return Err(Error::DuplicateShipName { name: key });
            }
            catalog.ships.insert(key, ship);
        }

        for item in equipment {
            item.validate()?;
            if catalog.equipment.contains_key(&item.id) {
                return Err(Error::DuplicateEquipmentId { id: item.id });
            }
            // The catalog reuses names across upgrade variants; the first id wins.
            catalog
                .equipment_names
                .entry(normalize_name(&item.name))
                .or_insert(item.id);
            catalog.equipment.insert(item.id, item);
        }

        info!(
            ships = catalog.ships.len(),
            equipment = catalog.equipment.len(),
            "catalog loaded"
        );
        Ok(catalog)
    }

    /// Get a ship by name (case-insensitive).
    pub fn get(&self, name: &str) -> Option<&ShipRecord> {
        self.ships.get(&normalize_name(name))
    }

    /// Get a ship by name, failing with suggestions when it is unknown.
    pub fn ship(&self, name: &str) -> Result<&ShipRecord> {
        self.get(name).ok_or_else(|| Error::UnknownShip {
            name: name.to_string(),
            suggestions: self.fuzzy_ship_matches(name, MAX_SUGGESTIONS),
        })
    }

    pub fn equipment_by_id(&self, id: u32) -> Option<&EquipmentRecord> {
        self.equipment.get(&id)
    }

    pub fn equipment_by_name(&self, name: &str) -> Option<&EquipmentRecord> {
        self.equipment_names
            .get(&normalize_name(name))
            .and_then(|id| self.equipment.get(id))
    }

    /// Resolve an equipment key: numeric keys are ids, anything else a name.
    pub fn resolve_equipment(&self, key: &str) -> Result<&EquipmentRecord> {
        let key = key.trim();
        let found = match key.parse::<u32>() {
            Ok(id) => self.equipment_by_id(id),
            Err(_) => self.equipment_by_name(key),
        };
        found.ok_or_else(|| Error::UnknownEquipment {
            key: key.to_string(),
            suggestions: self.fuzzy_equipment_matches(key, MAX_SUGGESTIONS),
        })
    }

    /// Get a sorted list of all ship names.
    pub fn ship_names(&self) -> Vec<String> {
        let mut names: Vec<String> = self.ships.values().map(|s| s.name.clone()).collect();
        names.sort();
        names
    }

    /// Get all ships sorted by name.
    pub fn ships_sorted(&self) -> Vec<&ShipRecord> {
        let mut ships: Vec<&ShipRecord> = self.ships.values().collect();
        ships.sort_by(|a, b| a.name.cmp(&b.name));
        ships
    }

    /// Get all equipment sorted by id.
    pub fn equipment_sorted(&self) -> Vec<&EquipmentRecord> {
        let mut items: Vec<&EquipmentRecord> = self.equipment.values().collect();
        items.sort_by_key(|e| e.id);
        items
    }

    /// Equipment that a ship's slot accepts, sorted by id.
    pub fn equipment_for_slot(&self, ship: &ShipRecord, slot: usize) -> Vec<&EquipmentRecord> {
        let Some(descriptor) = ship.slot(slot) else {
            return Vec::new();
        };
        self.equipment_sorted()
            .into_iter()
            .filter(|e| descriptor.accepts(e.equipment_type))
            .collect()
    }

    /// Ship names similar to `query`, best match first.
    pub fn fuzzy_ship_matches(&self, query: &str, limit: usize) -> Vec<String> {
        fuzzy_matches(query, self.ships.values().map(|s| s.name.as_str()), limit)
    }

    /// Equipment names similar to `query`, best match first.
    pub fn fuzzy_equipment_matches(&self, query: &str, limit: usize) -> Vec<String> {
        fuzzy_matches(query, self.equipment.values().map(|e| e.name.as_str()), limit)
    }

    pub fn ship_count(&self) -> usize {
        self.ships.len()
    }

    pub fn equipment_count(&self) -> usize {
        self.equipment.len()
    }

    /// Source files, if the catalog was loaded from disk.
    pub fn source_paths(&self) -> Option<(&Path, &Path)> {
        self.sources
            .as_ref()
            .map(|(ships, equipment)| (ships.as_path(), equipment.as_path()))
    }
}

fn fuzzy_matches<'a>(
    query: &str,
    candidates: impl Iterator<Item = &'a str>,
    limit: usize,
) -> Vec<String> {
    let query = normalize_name(query);
    let mut scored: Vec<(f64, &str)> = candidates
        .map(|name| (strsim::jaro_winkler(&query, &normalize_name(name)), name))
        .filter(|(score, _)| *score >= SUGGESTION_THRESHOLD)
        .collect();
    scored.sort_by(|a, b| b.0.total_cmp(&a.0).then_with(|| a.1.cmp(b.1)));
    scored.dedup_by(|a, b| a.1 == b.1);
    scored
        .into_iter()
        .take(limit)
        .map(|(_, name)| name.to_string())
        .collect()
}

/// Normalize a name for case-insensitive lookup.
fn normalize_name(name: &str) -> String {
    name.trim().to_lowercase()
}

#[cfg(test)]
mod tests {
    use super::*;

    const SHIPS: &str = r#"[
        {"name": "Implacable", "name_kr": "Implacable", "rarity": 4, "type": 7,
         "base_reload": 65, "growth_reload": 3200, "enhance_reload": 40,
         "equipment": {
            "1": {"type": [7], "mount": 2, "efficiency": 1.2},
            "2": {"type": [8], "mount": 2, "efficiency": 1.2},
            "3": {"type": [9], "mount": 2, "efficiency": 1.2},
            "4": {"type": [10], "mount": 1, "efficiency": 1.0}
         }}
    ]"#;

    const EQUIPMENT: &str = r#"[
        {"id": 1440, "name": "None", "rarity": 1, "type": 10},
        {"id": 100, "name": "Hellcat", "rarity": 5, "type": 7, "reload": 10.6},
        {"id": 101, "name": "Hellcat", "rarity": 5, "type": 7, "reload": 10.5}
    ]"#;

    #[test]
    fn resolves_equipment_by_id_or_name() {
        let catalog =
            Catalog::from_readers(SHIPS.as_bytes(), EQUIPMENT.as_bytes()).expect("loads");
        assert_eq!(catalog.resolve_equipment("101").expect("id").id, 101);
        assert_eq!(catalog.resolve_equipment("hellcat").expect("name").id, 100);
        assert!(catalog.resolve_equipment("9999").is_err());
    }

    #[test]
    fn unknown_ship_carries_suggestions() {
        let catalog =
            Catalog::from_readers(SHIPS.as_bytes(), EQUIPMENT.as_bytes()).expect("loads");
        let err = catalog.ship("Implacble").expect_err("typo");
        match err {
            Error::UnknownShip { suggestions, .. } => {
                assert_eq!(suggestions, vec!["Implacable".to_string()])
            }
            other => panic!("unexpected error: {:?}", other),
        }
    }

    #[test]
    fn filters_equipment_by_slot_types() {
        let catalog =
            Catalog::from_readers(SHIPS.as_bytes(), EQUIPMENT.as_bytes()).expect("loads");
        let ship = catalog.ship("implacable").expect("present");
        let fighters: Vec<u32> = catalog
            .equipment_for_slot(ship, 1)
            .iter()
            .map(|e| e.id)
            .collect();
        assert_eq!(fighters, vec![100, 101]);
        assert!(catalog.equipment_for_slot(ship, 7).is_empty());
    }
}
