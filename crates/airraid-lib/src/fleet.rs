//! Three-ship fleets: fleet documents, catalog binding and evaluation.

use std::fmt;
use std::fs;
use std::io::Read;
use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::catalog::{Catalog, EquipmentRecord};
use crate::error::{Error, Result};
use crate::loadout::{LoadoutOutcome, ShipLoadout, SLOT_COUNT};
use crate::modifiers::{Affinity, GlobalModifiers, Level};
use crate::spacing::{classify, Verdict};

/// Number of carriers that take part in a triple air raid.
pub const FLEET_SIZE: usize = 3;

/// Equipment reference in a fleet document: a catalog id or a name.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum EquipmentKey {
    Id(u32),
    Name(String),
}

impl EquipmentKey {
    /// Look the key up in the catalog: ids directly, names case-insensitively.
    pub fn resolve<'a>(&self, catalog: &'a Catalog) -> Result<&'a EquipmentRecord> {
        match self {
            EquipmentKey::Id(id) => {
                catalog
                    .equipment_by_id(*id)
                    .ok_or_else(|| Error::UnknownEquipment {
                        key: id.to_string(),
                        suggestions: Vec::new(),
                    })
            }
            EquipmentKey::Name(name) => catalog.resolve_equipment(name),
        }
    }
}

impl fmt::Display for EquipmentKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EquipmentKey::Id(id) => write!(f, "{id}"),
            EquipmentKey::Name(name) => f.write_str(name),
        }
    }
}

/// One position of a fleet document.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PositionSpec {
    pub ship: String,
    /// Items for slots 1 to 4; `null` leaves a slot empty. Slots past the end
    /// of the list keep the defaults applied when the ship is selected.
    #[serde(default)]
    pub equipment: Vec<Option<EquipmentKey>>,
    #[serde(default)]
    pub level: Level,
    #[serde(default)]
    pub affinity: Affinity,
}

/// Serialized description of a fleet and its global modifiers.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct FleetFile {
    #[serde(default)]
    pub globals: GlobalModifiers,
    /// Exactly three positions; `null` marks an empty one.
    pub ships: Vec<Option<PositionSpec>>,
}

impl FleetFile {
    pub fn from_path(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Err(Error::FleetNotFound {
                path: path.to_path_buf(),
            });
        }
        Self::from_reader(fs::File::open(path)?)
    }

    pub fn from_reader<R: Read>(reader: R) -> Result<Self> {
        Ok(serde_json::from_reader(reader)?)
    }

    /// Bind the document to catalog records.
    pub fn resolve<'a>(&self, catalog: &'a Catalog) -> Result<Fleet<'a>> {
        if self.ships.len() != FLEET_SIZE {
            return Err(Error::FleetSize {
                count: self.ships.len(),
            });
        }

        self.globals.validate()?;

        let mut fleet = Fleet::new(self.globals);
        for (loadout, spec) in fleet.positions.iter_mut().zip(&self.ships) {
            let Some(spec) = spec else {
                continue;
            };
            if spec.equipment.len() > SLOT_COUNT {
                // The first entry past slot 4 is the offending one.
                return Err(Error::InvalidSlot {
                    slot: SLOT_COUNT + 1,
                });
            }

            loadout.select_ship(catalog.ship(&spec.ship)?, catalog);
            loadout.level = spec.level;
            loadout.affinity = spec.affinity;
            for (index, key) in spec.equipment.iter().enumerate() {
                let slot = index + 1;
                match key {
                    Some(key) => loadout.equip(slot, key.resolve(catalog)?)?,
                    None => loadout.unequip(slot)?,
                }
            }
        }
        Ok(fleet)
    }
}

/// Evaluation of one fleet position.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PositionReport {
    /// Position number, 1 to 3.
    pub position: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ship: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub display_name: Option<String>,
    /// Equipment names for slots 1 to 4.
    pub equipment: Vec<Option<String>>,
    pub level: u32,
    pub affinity: u32,
    #[serde(flatten)]
    pub outcome: LoadoutOutcome,
}

/// Evaluation of a whole fleet.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FleetReport {
    pub positions: Vec<PositionReport>,
    pub verdict: Verdict,
    pub symbol: &'static str,
}

/// Three loadouts sharing one set of global modifiers.
#[derive(Debug, Clone, Default)]
pub struct Fleet<'a> {
    pub positions: [ShipLoadout<'a>; FLEET_SIZE],
    pub globals: GlobalModifiers,
}

impl<'a> Fleet<'a> {
    pub fn new(globals: GlobalModifiers) -> Self {
        Self {
            positions: Default::default(),
            globals,
        }
    }

    pub fn outcomes(&self) -> [LoadoutOutcome; FLEET_SIZE] {
        let [a, b, c] = &self.positions;
        [
            a.evaluate(&self.globals),
            b.evaluate(&self.globals),
            c.evaluate(&self.globals),
        ]
    }

    pub fn verdict(&self) -> Verdict {
        classify(&self.outcomes())
    }

    /// Evaluate every position and classify the triple.
    pub fn evaluate(&self) -> FleetReport {
        let outcomes = self.outcomes();
        let verdict = classify(&outcomes);
        debug!(verdict = %verdict, "evaluated fleet");

        let positions = self
            .positions
            .iter()
            .zip(outcomes)
            .enumerate()
            .map(|(index, (loadout, outcome))| PositionReport {
                position: index + 1,
                ship: loadout.ship().map(|s| s.name.clone()),
                display_name: loadout.ship().map(|s| s.display_name.clone()),
                equipment: (1..=SLOT_COUNT)
                    .map(|slot| loadout.equipment(slot).map(|e| e.name.clone()))
                    .collect(),
                level: loadout.level.value(),
                affinity: loadout.affinity.points(),
                outcome,
            })
            .collect();

        FleetReport {
            positions,
            verdict,
            symbol: verdict.symbol(),
        }
    }
}
