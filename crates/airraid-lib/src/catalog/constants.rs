//! Catalog identities and tuning constants shared by the calculators.

/// Hull type the catalog uses for heavy (fleet) carriers.
pub const HEAVY_CARRIER_HULL_TYPE: u32 = 7;

pub const IMPLACABLE: &str = "Implacable";
pub const PARSEVAL: &str = "August von Parseval";
pub const NAKHIMOV: &str = "Admiral Nakhimov";

/// Ships the air-raid scheduler treats as supports; they must hold the middle
/// cooldown of a triple.
pub const SUPPORT_SHIP_NAMES: [&str; 3] = [IMPLACABLE, PARSEVAL, NAKHIMOV];

/// Reload multiplier for Implacable with a dive bomber in slot 3.
pub const IMPLACABLE_MULTIPLIER: f64 = 1.1;

/// Reload multiplier for August von Parseval with her dedicated aircraft.
pub const PARSEVAL_MULTIPLIER: f64 = 1.12;

/// Slot-1 equipment ids that trigger Parseval's reload bonus.
pub const PARSEVAL_SLOT1_IDS: [u32; 4] = [47140, 47160, 47180, 47200];

/// Slot-3 equipment id that triggers Parseval's reload bonus.
pub const PARSEVAL_SLOT3_ID: u32 = 48040;

/// Additional multiplier granted by the fleet-wide support buff.
pub const SUPPORT_BUFF_BONUS: f64 = 0.04;

/// Largest fleet technology reload bonus for heavy carriers.
pub const MAX_HEAVY_CARRIER_TECH: u32 = 42;

/// Largest fleet technology reload bonus for light carriers.
pub const MAX_LIGHT_CARRIER_TECH: u32 = 45;

/// Largest reload the commander skill grants.
pub const MAX_COMMANDER_RELOAD: u32 = 40;

/// Equipment the game seeds into slot 4 when a ship is selected.
pub const DEFAULT_SLOT4_EQUIPMENT_ID: u32 = 1440;
