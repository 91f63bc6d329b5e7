//! Air-raid cooldown evaluation.
//!
//! The cooldown of a carrier is the mount-weighted average launch time of the
//! aircraft in its first three slots, scaled by the game's air-raid constants:
//!
//! ```text
//! contribution(e) = reload_time(e) / 6 / sqrt((effective_reload + 100) * PI)
//! cooldown        = (sum(contribution * mount) / sum(mount)) * 2.2 + 0.033
//! ```
//!
//! Slot 3 takes part only when the ship's third slot is an aircraft slot.

use std::f64::consts::PI;

use crate::catalog::{EquipmentRecord, ShipRecord};
use crate::reload::Equipped;

/// Multiplier applied to the averaged per-aircraft launch time.
pub const COOLDOWN_SCALE: f64 = 2.2;

/// Fixed delay added to every air raid.
pub const COOLDOWN_OFFSET: f64 = 0.033;

/// Launch time contribution of a single aircraft of the given type.
pub fn aircraft_contribution(effective_reload: i64, equipment: &EquipmentRecord) -> f64 {
    equipment.reload_time() / 6.0 / ((effective_reload as f64 + 100.0) * PI).sqrt()
}

/// Whether the ship's third slot counts towards the cooldown average.
pub fn third_slot_contributes(ship: &ShipRecord) -> bool {
    ship.slot(3).is_some_and(|slot| !slot.is_non_aircraft())
}

/// Number of aircraft that take part in the cooldown average.
pub fn counted_mounts(ship: &ShipRecord) -> u32 {
    let mount = |index: usize| ship.slot(index).map(|s| s.mount).unwrap_or(0);
    let third = if third_slot_contributes(ship) { mount(3) } else { 0 };
    mount(1) + mount(2) + third
}

/// Compute the air-raid cooldown (seconds, two decimals) of a fully equipped
/// ship with the given effective reload.
pub fn compute_cooldown(effective_reload: i64, equipped: &Equipped<'_>, ship: &ShipRecord) -> f64 {
    let total_mount = counted_mounts(ship);
    debug_assert!(
        total_mount > 0,
        "{} carries no aircraft in its launch slots",
        ship.name
    );

    let slots = if third_slot_contributes(ship) { 3 } else { 2 };
    let weighted: f64 = (1..=slots)
        .map(|index| {
            let mount = ship.slot(index).map(|s| s.mount).unwrap_or(0);
            aircraft_contribution(effective_reload, equipped[index - 1]) * f64::from(mount)
        })
        .sum();

    let cooldown = (weighted / f64::from(total_mount)) * COOLDOWN_SCALE + COOLDOWN_OFFSET;
    round_to_hundredths(cooldown)
}

/// Round to two decimals the way fixed-point display rounding does: the exact
/// binary value is rounded to the nearest hundredth, and exact ties round away
/// from zero.
pub fn round_to_hundredths(value: f64) -> f64 {
    let eighths = value * 8.0;
    if eighths.fract() == 0.0 && (eighths as i64) % 2 != 0 {
        // Odd multiples of 1/8 are the only values exactly halfway between
        // two hundredths.
        return (value * 100.0).round() / 100.0;
    }
    format!("{value:.2}").parse().unwrap_or(value)
}
