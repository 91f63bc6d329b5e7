use std::path::PathBuf;

use thiserror::Error;

/// Convenient result alias for the air-raid library.
pub type Result<T> = std::result::Result<T, Error>;

/// Top-level library error type.
#[derive(Debug, Error)]
pub enum Error {
    /// A catalog file could not be located at the resolved path.
    #[error("catalog file not found at {path}")]
    CatalogNotFound { path: PathBuf },

    /// A fleet document could not be located at the given path.
    #[error("fleet file not found at {path}")]
    FleetNotFound { path: PathBuf },

    /// No suitable project directories could be resolved for this platform.
    #[error("failed to resolve project directories for the catalog data")]
    ProjectDirsUnavailable,

    /// Raised when a ship name could not be found in the catalog.
    #[error("unknown ship name: {name}{}", format_suggestions(.suggestions))]
    UnknownShip {
        name: String,
        suggestions: Vec<String>,
    },

    /// Raised when an equipment name or id could not be found in the catalog.
    #[error("unknown equipment: {key}{}", format_suggestions(.suggestions))]
    UnknownEquipment {
        key: String,
        suggestions: Vec<String>,
    },

    /// Raised when catalog data fails validation.
    #[error("invalid catalog data: {message}")]
    CatalogValidation { message: String },

    /// Raised when duplicate ship names are encountered during catalog load.
    #[error("duplicate ship name encountered: {name}")]
    DuplicateShipName { name: String },

    /// Raised when duplicate equipment ids are encountered during catalog load.
    #[error("duplicate equipment id encountered: {id}")]
    DuplicateEquipmentId { id: u32 },

    /// Raised when a level outside the supported tiers is requested.
    #[error("unsupported level {level}; expected one of 100, 120, 125")]
    InvalidLevel { level: u32 },

    /// Raised when an affinity value outside the supported tiers is requested.
    #[error("unsupported affinity {affinity}; expected one of 50, 90, 100, 150, 200")]
    InvalidAffinity { affinity: u32 },

    /// Raised when a fleet-wide reload modifier exceeds its in-game cap.
    #[error("{modifier} must be between 0 and {max}, got {value}")]
    ModifierOutOfRange {
        modifier: &'static str,
        value: u32,
        max: u32,
    },

    /// Raised when an equipment slot index is outside 1..=4.
    #[error("equipment slot {slot} does not exist; slots are numbered 1 to 4")]
    InvalidSlot { slot: usize },

    /// Raised when equipping an item before a ship has been chosen.
    #[error("no ship selected for this loadout")]
    NoShipSelected,

    /// Raised when an item's type is not accepted by the ship's slot.
    #[error("{equipment} (type {equipment_type}) cannot be equipped in slot {slot} of {ship}")]
    SlotTypeMismatch {
        ship: String,
        slot: usize,
        equipment: String,
        equipment_type: u32,
    },

    /// Raised when a fleet document does not describe exactly three positions.
    #[error("fleet must describe exactly 3 positions, found {count}")]
    FleetSize { count: usize },

    /// Wrapper for IO errors.
    #[error(transparent)]
    Io(#[from] std::io::Error),

    /// Wrapper for JSON decoding errors.
    #[error(transparent)]
    Json(#[from] serde_json::Error),
}

fn format_suggestions(suggestions: &[String]) -> String {
    if suggestions.is_empty() {
        String::new()
    } else if suggestions.len() == 1 {
        format!(". Did you mean '{}'?", suggestions[0])
    } else {
        format!(
            ". Did you mean one of: {}?",
            suggestions
                .iter()
                .map(|s| format!("'{}'", s))
                .collect::<Vec<_>>()
                .join(", ")
        )
    }
}
