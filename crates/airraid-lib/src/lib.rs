//! Air-raid cooldown calculator library.
//!
//! This crate loads the carrier and aircraft reference catalog, computes each
//! ship's effective reload and air-raid cooldown from its loadout, and checks
//! whether three carriers are spaced so their air raids chain. Higher-level
//! consumers (the CLI) should only depend on the items exported here instead
//! of reimplementing the formulas.

#![deny(warnings)]

pub mod catalog;
pub mod cooldown;
pub mod data;
pub mod error;
pub mod fleet;
pub mod loadout;
pub mod modifiers;
pub mod reload;
pub mod spacing;

pub use catalog::{
    Catalog, EquipmentRecord, EquipmentType, ShipClass, ShipRecord, SlotDescriptor,
    SpecialShipRule,
};
pub use cooldown::{compute_cooldown, round_to_hundredths};
pub use data::{default_data_dir, CatalogPaths, CatalogSources};
pub use error::{Error, Result};
pub use fleet::{EquipmentKey, Fleet, FleetFile, FleetReport, PositionReport, PositionSpec};
pub use loadout::{LoadoutOutcome, ShipLoadout, SLOT_COUNT};
pub use modifiers::{Affinity, GlobalModifiers, Level};
pub use reload::{compute_effective_reload, EffectiveReload, Equipped};
pub use spacing::{classify, Verdict};
