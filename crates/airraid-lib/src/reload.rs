//! Effective reload aggregation.
//!
//! Folds a ship's reload stat growth, affinity, refit, fleet technology,
//! commander skill and ship-specific multipliers into the single integer
//! reload stat the cooldown formula consumes.

use serde::Serialize;

use crate::catalog::{
    EquipmentRecord, EquipmentType, ShipRecord, SpecialShipRule, PARSEVAL_SLOT1_IDS,
    PARSEVAL_SLOT3_ID, SUPPORT_BUFF_BONUS,
};
use crate::modifiers::{Affinity, GlobalModifiers, Level};

/// Equipment assigned to slots 1 through 4, in order.
pub type Equipped<'a> = [&'a EquipmentRecord; 4];

/// Integer reload stat of a ship together with its support-ship flag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct EffectiveReload {
    pub value: i64,
    pub is_support_ship: bool,
}

/// Reload stat from level growth, affinity and refit, before any fleet-wide
/// or ship-specific bonus.
///
/// `floor((base + growth * (level - 1) / 1000 + enhance) * (1 + affinity / 100) + refit)`
pub fn stat_reload(ship: &ShipRecord, level: Level, affinity: Affinity) -> f64 {
    let level = f64::from(level.value());
    let grown =
        ship.base_reload + (ship.growth_reload * (level - 1.0)) / 1000.0 + ship.enhance_reload;
    let affinity_factor = 1.0 + f64::from(affinity.bonus_percent()) / 100.0;
    (grown * affinity_factor + ship.refit_reload_bonus()).floor()
}

/// Multiplier applied to the summed reload, chosen by the ship's special rule.
///
/// Generic ships always take `1 + buff`. Special-rule ships take their own
/// boosted multiplier (with the buff folded in) only while their equipment
/// condition holds; otherwise the reload is left unscaled.
pub fn reload_multiplier(
    rule: SpecialShipRule,
    equipped: &Equipped<'_>,
    support_buff: bool,
) -> f64 {
    let buff = if support_buff { SUPPORT_BUFF_BONUS } else { 0.0 };
    let condition_met = match rule {
        SpecialShipRule::None => true,
        SpecialShipRule::Implacable => equipped[2].equipment_type == EquipmentType::DIVE_BOMBER,
        SpecialShipRule::Parseval => {
            PARSEVAL_SLOT1_IDS.contains(&equipped[0].id) || equipped[2].id == PARSEVAL_SLOT3_ID
        }
    };

    if condition_met {
        rule.base_multiplier() + buff
    } else {
        1.0
    }
}

/// Compute the effective reload stat of a fully equipped ship.
pub fn compute_effective_reload(
    ship: &ShipRecord,
    level: Level,
    affinity: Affinity,
    globals: &GlobalModifiers,
    equipped: &Equipped<'_>,
) -> EffectiveReload {
    let mut reload = stat_reload(ship, level, affinity)
        + f64::from(globals.commander_bonus())
        + f64::from(globals.tech_for(ship.ship_class));

    reload *= reload_multiplier(ship.special_rule, equipped, globals.support_buff);

    if let Some(bonus) = ship.special_weapon_reload {
        reload += bonus;
    }

    EffectiveReload {
        value: reload.floor() as i64,
        is_support_ship: ship.is_support_ship,
    }
}
