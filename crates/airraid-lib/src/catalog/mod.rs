//! Ship and equipment reference data.
//!
//! This module is organized into focused submodules:
//!
//! - [`records`] - Ship, slot, refit and equipment records
//! - [`store`] - Catalog loading, validation and lookup
//! - [`constants`] - Ship identities and reload tuning constants
//!
//! # Example
//!
//! ```no_run
//! use airraid_lib::catalog::Catalog;
//!
//! let catalog = Catalog::from_paths(
//!     std::path::Path::new("ships.json"),
//!     std::path::Path::new("equipment.json"),
//! )
//! .unwrap();
//! let ship = catalog.ship("Implacable").unwrap();
//! println!("{} ({})", ship.display_name, ship.ship_class.label());
//! ```

pub mod constants;
pub mod records;
pub mod store;

pub use constants::{
    DEFAULT_SLOT4_EQUIPMENT_ID, HEAVY_CARRIER_HULL_TYPE, IMPLACABLE_MULTIPLIER,
    MAX_COMMANDER_RELOAD, MAX_HEAVY_CARRIER_TECH, MAX_LIGHT_CARRIER_TECH, PARSEVAL_MULTIPLIER,
    PARSEVAL_SLOT1_IDS, PARSEVAL_SLOT3_ID, SUPPORT_BUFF_BONUS, SUPPORT_SHIP_NAMES,
};
pub use records::{
    EquipmentRecord, EquipmentType, Refit, ShipClass, ShipData, ShipRecord, SlotDescriptor,
    SpecialShipRule,
};
pub use store::Catalog;
