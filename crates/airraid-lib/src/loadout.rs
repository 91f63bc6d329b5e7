//! Mutable per-ship selection state and its evaluation.

use serde::Serialize;
use tracing::debug;

use crate::catalog::{Catalog, EquipmentRecord, ShipRecord, DEFAULT_SLOT4_EQUIPMENT_ID};
use crate::cooldown::compute_cooldown;
use crate::error::{Error, Result};
use crate::modifiers::{Affinity, GlobalModifiers, Level};
use crate::reload::{compute_effective_reload, Equipped};

/// Number of equipment slots on every ship.
pub const SLOT_COUNT: usize = 4;

/// Result of evaluating one loadout.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize)]
pub struct LoadoutOutcome {
    /// Effective reload stat, when the loadout is complete.
    pub effective_reload: Option<i64>,
    /// Air-raid cooldown in seconds, when the loadout is complete.
    pub cooldown: Option<f64>,
    pub is_support_ship: bool,
}

impl LoadoutOutcome {
    /// Outcome of an incomplete loadout.
    pub const NOT_COMPUTED: Self = Self {
        effective_reload: None,
        cooldown: None,
        is_support_ship: false,
    };

    /// Cooldown as displayed, with `0` standing in for "not computed".
    pub fn cooldown_value(&self) -> f64 {
        self.cooldown.unwrap_or(0.0)
    }

    pub fn is_computed(&self) -> bool {
        self.cooldown_value() > 0.0
    }
}

/// One fleet position: a ship, its four equipment slots, level and affinity.
///
/// Slots are numbered 1 to 4; slot 3 is the special-weapon slot.
#[derive(Debug, Clone, Default)]
pub struct ShipLoadout<'a> {
    ship: Option<&'a ShipRecord>,
    equipment: [Option<&'a EquipmentRecord>; SLOT_COUNT],
    pub affinity: Affinity,
    pub level: Level,
}

impl<'a> ShipLoadout<'a> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn ship(&self) -> Option<&'a ShipRecord> {
        self.ship
    }

    pub fn equipment(&self, slot: usize) -> Option<&'a EquipmentRecord> {
        slot.checked_sub(1)
            .and_then(|index| self.equipment.get(index).copied().flatten())
    }

    /// Select a ship. Slots 1 to 3 are cleared and slot 4 receives the
    /// catalog's default slot-4 item when the catalog has one.
    pub fn select_ship(&mut self, ship: &'a ShipRecord, catalog: &'a Catalog) {
        self.ship = Some(ship);
        self.equipment = [
            None,
            None,
            None,
            catalog.equipment_by_id(DEFAULT_SLOT4_EQUIPMENT_ID),
        ];
    }

    /// Put an item into a slot, checking the slot accepts its type.
    pub fn equip(&mut self, slot: usize, item: &'a EquipmentRecord) -> Result<()> {
        let ship = self.ship.ok_or(Error::NoShipSelected)?;
        let index = slot_index(slot)?;

        let accepted = ship
            .slot(slot)
            .is_some_and(|descriptor| descriptor.accepts(item.equipment_type));
        if !accepted {
            return Err(Error::SlotTypeMismatch {
                ship: ship.name.clone(),
                slot,
                equipment: item.name.clone(),
                equipment_type: item.equipment_type.0,
            });
        }

        self.equipment[index] = Some(item);
        Ok(())
    }

    pub fn unequip(&mut self, slot: usize) -> Result<()> {
        let index = slot_index(slot)?;
        self.equipment[index] = None;
        Ok(())
    }

    /// Return to the empty state with default level and affinity.
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    /// The ship and all four items, if every one of them is assigned.
    pub fn equipped(&self) -> Option<(&'a ShipRecord, Equipped<'a>)> {
        let ship = self.ship?;
        let [a, b, c, d] = self.equipment;
        Some((ship, [a?, b?, c?, d?]))
    }

    /// Evaluate the loadout against the fleet-wide modifiers.
    pub fn evaluate(&self, globals: &GlobalModifiers) -> LoadoutOutcome {
        let Some((ship, equipped)) = self.equipped() else {
            return LoadoutOutcome::NOT_COMPUTED;
        };

        let reload = compute_effective_reload(ship, self.level, self.affinity, globals, &equipped);
        let cooldown = compute_cooldown(reload.value, &equipped, ship);
        debug!(
            ship = %ship.name,
            effective_reload = reload.value,
            cooldown,
            support = reload.is_support_ship,
            "evaluated loadout"
        );

        LoadoutOutcome {
            effective_reload: Some(reload.value),
            cooldown: Some(cooldown),
            is_support_ship: reload.is_support_ship,
        }
    }
}

fn slot_index(slot: usize) -> Result<usize> {
    if (1..=SLOT_COUNT).contains(&slot) {
        Ok(slot - 1)
    } else {
        Err(Error::InvalidSlot { slot })
    }
}
