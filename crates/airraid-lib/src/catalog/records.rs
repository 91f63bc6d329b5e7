//! Ship and equipment records as they appear in the reference catalog.
//!
//! Raw catalog rows ([`ShipData`]) are converted into [`ShipRecord`]s once at
//! load time. The conversion validates the numeric stats and derives the
//! attributes the calculators dispatch on (ship class, special reload rule,
//! support-ship status), so no calculation ever compares ship names.

use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

use super::constants::{
    HEAVY_CARRIER_HULL_TYPE, IMPLACABLE, IMPLACABLE_MULTIPLIER, PARSEVAL, PARSEVAL_MULTIPLIER,
    SUPPORT_SHIP_NAMES,
};

/// Equipment type-tag as used by the catalog.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EquipmentType(pub u32);

impl EquipmentType {
    /// Anti-air gun. On a ship's third slot this tag marks a slot that never
    /// launches aircraft.
    pub const AA_GUN: Self = Self(2);
    pub const LIGHT_CRUISER_GUN: Self = Self(6);
    pub const FIGHTER: Self = Self(7);
    pub const TORPEDO_BOMBER: Self = Self(8);
    pub const DIVE_BOMBER: Self = Self(9);
    pub const AUXILIARY: Self = Self(10);

    /// Human-readable label for listings.
    pub fn label(self) -> &'static str {
        match self {
            Self::AA_GUN => "AA Gun",
            Self::LIGHT_CRUISER_GUN => "CL Gun",
            Self::FIGHTER => "Fighter",
            Self::TORPEDO_BOMBER => "Torpedo Bomber",
            Self::DIVE_BOMBER => "Dive Bomber",
            Self::AUXILIARY => "Auxiliary",
            _ => "Other",
        }
    }

    /// Whether this tag is one of the selectable carrier slot types
    /// (aircraft or auxiliary).
    pub fn is_carrier_selectable(self) -> bool {
        matches!(
            self,
            Self::FIGHTER | Self::TORPEDO_BOMBER | Self::DIVE_BOMBER | Self::AUXILIARY
        )
    }
}

impl fmt::Display for EquipmentType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Hull category that selects which global tech reload bonus applies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ShipClass {
    HeavyCarrier,
    LightCarrier,
}

impl ShipClass {
    pub fn from_hull_type(hull_type: u32) -> Self {
        if hull_type == HEAVY_CARRIER_HULL_TYPE {
            ShipClass::HeavyCarrier
        } else {
            ShipClass::LightCarrier
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            ShipClass::HeavyCarrier => "CV",
            ShipClass::LightCarrier => "CVL",
        }
    }
}

/// Ship-specific reload multiplier rule, resolved from the ship's identity at
/// catalog load.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SpecialShipRule {
    /// Generic ships: the support buff multiplier always applies.
    #[default]
    None,
    /// Implacable: boosted reload while a dive bomber sits in slot 3.
    Implacable,
    /// August von Parseval: boosted reload with her dedicated aircraft.
    Parseval,
}

impl SpecialShipRule {
    pub fn for_ship(name: &str) -> Self {
        match name {
            IMPLACABLE => SpecialShipRule::Implacable,
            PARSEVAL => SpecialShipRule::Parseval,
            _ => SpecialShipRule::None,
        }
    }

    /// Multiplier applied when the rule's equipment condition holds, before the
    /// support buff is added.
    pub fn base_multiplier(self) -> f64 {
        match self {
            SpecialShipRule::None => 1.0,
            SpecialShipRule::Implacable => IMPLACABLE_MULTIPLIER,
            SpecialShipRule::Parseval => PARSEVAL_MULTIPLIER,
        }
    }

    /// Short column label; `-` for generic ships.
    pub fn label(self) -> &'static str {
        match self {
            SpecialShipRule::None => "-",
            SpecialShipRule::Implacable => "Implacable",
            SpecialShipRule::Parseval => "Parseval",
        }
    }

    pub fn description(self) -> Option<&'static str> {
        match self {
            SpecialShipRule::None => None,
            SpecialShipRule::Implacable => Some("+10% reload with a dive bomber in slot 3"),
            SpecialShipRule::Parseval => Some("+12% reload with her carrier aircraft equipped"),
        }
    }
}

/// Describes one equipment slot of a ship.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SlotDescriptor {
    /// Equipment type-tags this slot accepts.
    #[serde(rename = "type", default)]
    pub types: Vec<EquipmentType>,
    /// Number of aircraft (or mounts) the slot carries.
    #[serde(default)]
    pub mount: u32,
    /// Base slot efficiency as a fraction (1.35 = 135%).
    #[serde(default)]
    pub efficiency: f64,
    /// Equipment id the game puts in this slot by default.
    #[serde(rename = "default", default)]
    pub default_equipment: Option<u32>,
    #[serde(default)]
    pub preload: u32,
}

impl SlotDescriptor {
    pub fn accepts(&self, equipment_type: EquipmentType) -> bool {
        self.types.contains(&equipment_type)
    }

    /// Whether the slot accepts the AA-gun tag, which excludes it from the
    /// cooldown average.
    pub fn is_non_aircraft(&self) -> bool {
        self.accepts(EquipmentType::AA_GUN)
    }

    /// Short description such as `Fighter 135% x 3`, `F T 120% x 2`,
    /// `Auxiliary` or `Special`.
    pub fn summary(&self, proficiency_bonus: f64) -> String {
        if self.accepts(EquipmentType::AUXILIARY) {
            return EquipmentType::AUXILIARY.label().to_string();
        }
        if !self.types.iter().any(|t| t.is_carrier_selectable()) {
            return "Special".to_string();
        }

        let name = if self.types.len() > 1 {
            self.types
                .iter()
                .filter_map(|t| t.label().chars().next())
                .map(String::from)
                .collect::<Vec<_>>()
                .join(" ")
        } else {
            self.types[0].label().to_string()
        };
        let efficiency = ((self.efficiency + proficiency_bonus) * 100.0).round();
        format!("{name} {efficiency}% x {}", self.mount)
    }
}

/// Refit (retrofit) descriptor.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Refit {
    #[serde(default)]
    pub id: u32,
    #[serde(default)]
    pub level: u32,
    /// Stat bonuses keyed by stat name (`reload`, `equipment_proficiency_1`, ...).
    #[serde(default)]
    pub bonus: BTreeMap<String, f64>,
}

impl Refit {
    pub fn reload_bonus(&self) -> f64 {
        self.bonus.get("reload").copied().unwrap_or(0.0)
    }

    pub fn proficiency_bonus(&self, slot: usize) -> f64 {
        self.bonus
            .get(&format!("equipment_proficiency_{slot}"))
            .copied()
            .unwrap_or(0.0)
    }
}

/// Ship row exactly as it appears in `ships.json`.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct ShipData {
    pub name: String,
    #[serde(rename = "name_kr", default)]
    pub display_name: String,
    #[serde(default)]
    pub rarity: u8,
    #[serde(rename = "type", default)]
    pub hull_type: u32,
    #[serde(default)]
    pub base_reload: Option<f64>,
    #[serde(default)]
    pub growth_reload: Option<f64>,
    #[serde(default)]
    pub enhance_reload: Option<f64>,
    /// Flat reload granted by the ship's unique gear.
    #[serde(rename = "hasSpecialWeapon", default)]
    pub special_weapon_reload: Option<f64>,
    #[serde(rename = "retrofit", default)]
    pub refit: Option<Refit>,
    /// Slot descriptors keyed by slot number ("1".."4").
    #[serde(rename = "equipment", default)]
    pub slots: BTreeMap<String, SlotDescriptor>,
}

/// Validated ship reference data with load-time derived attributes.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ShipRecord {
    pub name: String,
    pub display_name: String,
    pub rarity: u8,
    pub hull_type: u32,
    pub ship_class: ShipClass,
    pub base_reload: f64,
    pub growth_reload: f64,
    pub enhance_reload: f64,
    pub special_weapon_reload: Option<f64>,
    pub refit: Option<Refit>,
    pub slots: BTreeMap<usize, SlotDescriptor>,
    pub special_rule: SpecialShipRule,
    pub is_support_ship: bool,
}

impl TryFrom<ShipData> for ShipRecord {
    type Error = Error;

    fn try_from(data: ShipData) -> Result<Self> {
        let name = data.name.trim().to_string();
        if name.is_empty() {
            return Err(Error::CatalogValidation {
                message: "ship name must not be empty".to_string(),
            });
        }

        let stats = [
            (data.base_reload, "base_reload"),
            (data.growth_reload, "growth_reload"),
            (data.enhance_reload, "enhance_reload"),
            (data.special_weapon_reload, "hasSpecialWeapon"),
        ];
        for (value, field) in stats {
            if let Some(v) = value {
                if !v.is_finite() || v < 0.0 {
                    return Err(Error::CatalogValidation {
                        message: format!("{field} of {name} must be a finite non-negative number"),
                    });
                }
            }
        }

        let mut slots = BTreeMap::new();
        for (key, slot) in data.slots {
            let index: usize = key.trim().parse().map_err(|_| Error::CatalogValidation {
                message: format!("{name} has a non-numeric slot key '{key}'"),
            })?;
            if !(1..=4).contains(&index) {
                return Err(Error::CatalogValidation {
                    message: format!("{name} has slot {index}; slots are numbered 1 to 4"),
                });
            }
            slots.insert(index, slot);
        }

        let missing: Vec<String> = (1..=3)
            .filter(|i| !slots.contains_key(i))
            .map(|i| i.to_string())
            .collect();
        if !missing.is_empty() {
            return Err(Error::CatalogValidation {
                message: format!("{name} is missing slot(s) {}", missing.join(", ")),
            });
        }

        // Slots 1 and 2 always launch aircraft, so they must carry some.
        let launch_mounts = slots[&1].mount + slots[&2].mount;
        if launch_mounts == 0 {
            return Err(Error::CatalogValidation {
                message: format!("{name} has no aircraft mounted in slots 1 and 2"),
            });
        }

        Ok(Self {
            special_rule: SpecialShipRule::for_ship(&name),
            is_support_ship: SUPPORT_SHIP_NAMES.contains(&name.as_str()),
            ship_class: ShipClass::from_hull_type(data.hull_type),
            display_name: if data.display_name.trim().is_empty() {
                name.clone()
            } else {
                data.display_name
            },
            name,
            rarity: data.rarity,
            hull_type: data.hull_type,
            base_reload: data.base_reload.unwrap_or(0.0),
            growth_reload: data.growth_reload.unwrap_or(0.0),
            enhance_reload: data.enhance_reload.unwrap_or(0.0),
            special_weapon_reload: data.special_weapon_reload.filter(|v| *v > 0.0),
            refit: data.refit,
            slots,
        })
    }
}

impl ShipRecord {
    pub fn slot(&self, index: usize) -> Option<&SlotDescriptor> {
        self.slots.get(&index)
    }

    /// Flat reload bonus from the refit, zero for ships without one.
    pub fn refit_reload_bonus(&self) -> f64 {
        self.refit.as_ref().map(Refit::reload_bonus).unwrap_or(0.0)
    }

    pub fn proficiency_bonus(&self, slot: usize) -> f64 {
        self.refit
            .as_ref()
            .map(|r| r.proficiency_bonus(slot))
            .unwrap_or(0.0)
    }

    /// Rarity shown for the ship; refits display one tier higher.
    pub fn display_rarity(&self) -> u8 {
        if self.refit.is_some() {
            self.rarity + 1
        } else {
            self.rarity
        }
    }

    /// Summary of a slot with the refit proficiency bonus folded in.
    pub fn slot_summary(&self, index: usize) -> Option<String> {
        self.slot(index)
            .map(|slot| slot.summary(self.proficiency_bonus(index)))
    }

    /// Notes about reload bonuses that are specific to this ship.
    pub fn reload_notes(&self) -> Vec<String> {
        let mut notes = Vec::new();
        if let Some(description) = self.special_rule.description() {
            notes.push(description.to_string());
        }
        if let Some(bonus) = self.special_weapon_reload {
            notes.push(format!("+{bonus} reload from unique gear"));
        }
        notes
    }
}

/// Equipment reference data.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EquipmentRecord {
    pub id: u32,
    pub name: String,
    #[serde(rename = "name_kr", default)]
    pub display_name: String,
    #[serde(default)]
    pub rarity: u8,
    #[serde(rename = "type")]
    pub equipment_type: EquipmentType,
    /// Aircraft reload time in seconds.
    #[serde(default)]
    pub reload: Option<f64>,
}

impl EquipmentRecord {
    pub(crate) fn validate(&self) -> Result<()> {
        if self.name.trim().is_empty() {
            return Err(Error::CatalogValidation {
                message: format!("equipment {} must have a name", self.id),
            });
        }
        if let Some(reload) = self.reload {
            if !reload.is_finite() || reload < 0.0 {
                return Err(Error::CatalogValidation {
                    message: format!("reload of {} must be a finite non-negative number", self.name),
                });
            }
        }
        Ok(())
    }

    /// Reload time used by the cooldown formula; missing or zero counts as one.
    pub fn reload_time(&self) -> f64 {
        match self.reload {
            Some(r) if r != 0.0 => r,
            _ => 1.0,
        }
    }

    pub fn label(&self) -> &str {
        if self.display_name.is_empty() {
            &self.name
        } else {
            &self.display_name
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn slot(types: &[u32], mount: u32, efficiency: f64) -> SlotDescriptor {
        SlotDescriptor {
            types: types.iter().copied().map(EquipmentType).collect(),
            mount,
            efficiency,
            default_equipment: None,
            preload: 0,
        }
    }

    fn carrier(name: &str) -> ShipData {
        let mut slots = BTreeMap::new();
        slots.insert("1".to_string(), slot(&[7], 3, 1.25));
        slots.insert("2".to_string(), slot(&[8], 2, 1.25));
        slots.insert("3".to_string(), slot(&[9], 2, 1.1));
        slots.insert("4".to_string(), slot(&[10], 1, 1.0));
        ShipData {
            name: name.to_string(),
            display_name: String::new(),
            rarity: 4,
            hull_type: 7,
            base_reload: Some(60.0),
            growth_reload: Some(3000.0),
            enhance_reload: Some(30.0),
            slots,
            ..ShipData::default()
        }
    }

    #[test]
    fn derives_rule_and_support_status_from_identity() {
        let implacable = ShipRecord::try_from(carrier("Implacable")).expect("valid");
        assert_eq!(implacable.special_rule, SpecialShipRule::Implacable);
        assert!(implacable.is_support_ship);

        let nakhimov = ShipRecord::try_from(carrier("Admiral Nakhimov")).expect("valid");
        assert_eq!(nakhimov.special_rule, SpecialShipRule::None);
        assert_eq!(nakhimov.special_rule.label(), "-");
        assert_eq!(implacable.special_rule.label(), "Implacable");
        assert!(nakhimov.is_support_ship);

        let plain = ShipRecord::try_from(carrier("Taihou")).expect("valid");
        assert_eq!(plain.special_rule, SpecialShipRule::None);
        assert!(!plain.is_support_ship);
        assert_eq!(plain.display_name, "Taihou");
    }

    #[test]
    fn hull_type_selects_carrier_class() {
        let mut data = carrier("Hermes");
        data.hull_type = 6;
        let record = ShipRecord::try_from(data).expect("valid");
        assert_eq!(record.ship_class, ShipClass::LightCarrier);
    }

    #[test]
    fn rejects_ship_without_launch_mounts() {
        let mut data = carrier("Empty");
        data.slots.insert("1".to_string(), slot(&[7], 0, 1.0));
        data.slots.insert("2".to_string(), slot(&[8], 0, 1.0));
        let err = ShipRecord::try_from(data).expect_err("no mounts");
        assert!(matches!(err, Error::CatalogValidation { .. }));
    }

    #[test]
    fn rejects_missing_and_out_of_range_slots() {
        let mut data = carrier("Gapped");
        data.slots.remove("3");
        let err = ShipRecord::try_from(data).expect_err("missing slot");
        assert!(err.to_string().contains("missing slot(s) 3"));

        let mut data = carrier("Extra");
        data.slots.insert("5".to_string(), slot(&[7], 1, 1.0));
        assert!(ShipRecord::try_from(data).is_err());
    }

    #[test]
    fn slot_summary_matches_slot_kind() {
        assert_eq!(slot(&[7], 3, 1.25).summary(0.05), "Fighter 130% x 3");
        assert_eq!(slot(&[7, 8], 2, 1.2).summary(0.0), "F T 120% x 2");
        assert_eq!(slot(&[10], 1, 1.0).summary(0.0), "Auxiliary");
        assert_eq!(slot(&[2, 6], 1, 1.0).summary(0.0), "Special");
    }

    #[test]
    fn refit_contributes_reload_and_proficiency() {
        let mut data = carrier("Refitted");
        let mut bonus = BTreeMap::new();
        bonus.insert("reload".to_string(), 15.0);
        bonus.insert("equipment_proficiency_2".to_string(), 0.1);
        data.refit = Some(Refit {
            id: 1,
            level: 1,
            bonus,
        });
        let record = ShipRecord::try_from(data).expect("valid");
        assert_eq!(record.refit_reload_bonus(), 15.0);
        assert_eq!(record.proficiency_bonus(2), 0.1);
        assert_eq!(record.proficiency_bonus(1), 0.0);
        assert_eq!(record.display_rarity(), 5);
    }

    #[test]
    fn missing_reload_time_counts_as_one() {
        let equipment = EquipmentRecord {
            id: 1440,
            name: "None".to_string(),
            display_name: String::new(),
            rarity: 1,
            equipment_type: EquipmentType::AUXILIARY,
            reload: None,
        };
        assert_eq!(equipment.reload_time(), 1.0);
        assert_eq!(equipment.label(), "None");
    }
}
