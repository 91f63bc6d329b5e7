//! Per-ship tiers (level, affinity) and the fleet-wide reload modifiers.

use serde::{Deserialize, Serialize};

use crate::catalog::{
    ShipClass, MAX_COMMANDER_RELOAD, MAX_HEAVY_CARRIER_TECH, MAX_LIGHT_CARRIER_TECH,
};
use crate::error::{Error, Result};

/// Character level tiers offered by the calculator.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize,
)]
#[serde(try_from = "u32", into = "u32")]
pub enum Level {
    Lv100,
    Lv120,
    #[default]
    Lv125,
}

impl Level {
    pub const ALL: [Level; 3] = [Level::Lv100, Level::Lv120, Level::Lv125];

    pub fn value(self) -> u32 {
        match self {
            Level::Lv100 => 100,
            Level::Lv120 => 120,
            Level::Lv125 => 125,
        }
    }
}

impl TryFrom<u32> for Level {
    type Error = Error;

    fn try_from(level: u32) -> Result<Self> {
        Level::ALL
            .into_iter()
            .find(|l| l.value() == level)
            .ok_or(Error::InvalidLevel { level })
    }
}

impl From<Level> for u32 {
    fn from(level: Level) -> u32 {
        level.value()
    }
}

/// Affinity tiers, identified by their in-game affinity value.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize,
)]
#[serde(try_from = "u32", into = "u32")]
pub enum Affinity {
    Points50,
    Points90,
    #[default]
    Points100,
    Points150,
    Points200,
}

impl Affinity {
    pub const ALL: [Affinity; 5] = [
        Affinity::Points50,
        Affinity::Points90,
        Affinity::Points100,
        Affinity::Points150,
        Affinity::Points200,
    ];

    /// In-game affinity value.
    pub fn points(self) -> u32 {
        match self {
            Affinity::Points50 => 50,
            Affinity::Points90 => 90,
            Affinity::Points100 => 100,
            Affinity::Points150 => 150,
            Affinity::Points200 => 200,
        }
    }

    /// Stat bonus in percentage points.
    pub fn bonus_percent(self) -> u32 {
        match self {
            Affinity::Points50 => 1,
            Affinity::Points90 => 3,
            Affinity::Points100 => 6,
            Affinity::Points150 => 9,
            Affinity::Points200 => 12,
        }
    }
}

impl TryFrom<u32> for Affinity {
    type Error = Error;

    fn try_from(affinity: u32) -> Result<Self> {
        Affinity::ALL
            .into_iter()
            .find(|a| a.points() == affinity)
            .ok_or(Error::InvalidAffinity { affinity })
    }
}

impl From<Affinity> for u32 {
    fn from(affinity: Affinity) -> u32 {
        affinity.points()
    }
}

/// Reload modifiers shared by every ship in the fleet.
///
/// Deserialization accepts any value; call [`GlobalModifiers::validate`]
/// before evaluating.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GlobalModifiers {
    /// Fleet technology reload bonus for heavy carriers.
    pub heavy_carrier_tech: u32,
    /// Fleet technology reload bonus for light carriers.
    pub light_carrier_tech: u32,
    pub commander_active: bool,
    /// Reload granted by the commander skill while it is active.
    pub commander_reload: u32,
    /// Fleet-wide "support" buff adding 4% to the reload multiplier.
    pub support_buff: bool,
}

impl Default for GlobalModifiers {
    fn default() -> Self {
        Self {
            heavy_carrier_tech: 42,
            light_carrier_tech: 45,
            commander_active: false,
            commander_reload: 0,
            support_buff: false,
        }
    }
}

impl GlobalModifiers {
    pub fn tech_for(&self, class: ShipClass) -> u32 {
        match class {
            ShipClass::HeavyCarrier => self.heavy_carrier_tech,
            ShipClass::LightCarrier => self.light_carrier_tech,
        }
    }

    /// Commander reload that currently applies.
    pub fn commander_bonus(&self) -> u32 {
        if self.commander_active {
            self.commander_reload
        } else {
            0
        }
    }

    /// Check every modifier against its in-game cap. The commander reload is
    /// checked even while the commander is inactive.
    pub fn validate(&self) -> Result<()> {
        let limits = [
            ("heavy carrier tech", self.heavy_carrier_tech, MAX_HEAVY_CARRIER_TECH),
            ("light carrier tech", self.light_carrier_tech, MAX_LIGHT_CARRIER_TECH),
            ("commander reload", self.commander_reload, MAX_COMMANDER_RELOAD),
        ];
        for (modifier, value, max) in limits {
            if value > max {
                return Err(Error::ModifierOutOfRange {
                    modifier,
                    value,
                    max,
                });
            }
        }
        Ok(())
    }

    /// Enable the commander with the given reload, or disable it (which also
    /// clears the stored reload).
    pub fn set_commander(&mut self, reload: Option<u32>) {
        match reload {
            Some(reload) => {
                self.commander_active = true;
                self.commander_reload = reload;
            }
            None => {
                self.commander_active = false;
                self.commander_reload = 0;
            }
        }
    }
}
