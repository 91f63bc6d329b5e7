//! Triple air-raid spacing classification.
//!
//! The fleet AI only chains three air raids when the sorted cooldowns are
//! spaced at least 0.033s and at most 0.28s apart. Support ships must hold
//! the middle cooldown.

use std::fmt;

use serde::Serialize;

use crate::loadout::LoadoutOutcome;

/// Smallest accepted gap between neighbouring cooldowns, in seconds.
pub const MIN_SPACING: f64 = 0.033;

/// Largest accepted gap between neighbouring cooldowns, in seconds.
pub const MAX_SPACING: f64 = 0.28;

/// Verdict for a three-ship fleet.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Verdict {
    /// At least one ship has no computed cooldown.
    Indeterminate,
    Satisfied,
    Violated,
}

impl Verdict {
    /// Compact symbol shown in fleet summaries.
    pub fn symbol(self) -> &'static str {
        match self {
            Verdict::Indeterminate => "-",
            Verdict::Satisfied => "O",
            Verdict::Violated => "X",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Verdict::Indeterminate => "indeterminate",
            Verdict::Satisfied => "pass",
            Verdict::Violated => "fail",
        }
    }
}

impl fmt::Display for Verdict {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Whether a gap between two neighbouring cooldowns is acceptable.
pub fn in_window(gap: f64) -> bool {
    (MIN_SPACING..=MAX_SPACING).contains(&gap)
}

/// Classify the spacing of three evaluated loadouts.
pub fn classify(outcomes: &[LoadoutOutcome; 3]) -> Verdict {
    if !outcomes.iter().all(LoadoutOutcome::is_computed) {
        return Verdict::Indeterminate;
    }

    let mut sorted: Vec<f64> = outcomes.iter().map(LoadoutOutcome::cooldown_value).collect();
    sorted.sort_by(f64::total_cmp);
    let (low, mid, high) = (sorted[0], sorted[1], sorted[2]);

    let mut supports = outcomes.iter().filter(|o| o.is_support_ship).peekable();
    if supports.peek().is_some() && !supports.any(|o| o.cooldown_value() == mid) {
        return Verdict::Violated;
    }

    if in_window(high - mid) && in_window(mid - low) {
        Verdict::Satisfied
    } else {
        Verdict::Violated
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn outcome(cooldown: f64, is_support_ship: bool) -> LoadoutOutcome {
        LoadoutOutcome {
            effective_reload: Some(400),
            cooldown: Some(cooldown),
            is_support_ship,
        }
    }

    #[test]
    fn window_bounds_are_inclusive() {
        assert!(in_window(0.033));
        assert!(in_window(0.28));
        assert!(!in_window(0.032999));
        assert!(!in_window(0.280001));
    }

    #[test]
    fn evenly_spaced_fleet_is_satisfied() {
        let fleet = [outcome(1.33, false), outcome(1.0, false), outcome(1.1, false)];
        assert_eq!(classify(&fleet), Verdict::Satisfied);
    }

    #[test]
    fn crowded_fleet_is_violated() {
        let fleet = [outcome(1.0, false), outcome(1.05, false), outcome(1.06, false)];
        assert_eq!(classify(&fleet), Verdict::Violated);
    }

    #[test]
    fn too_wide_gap_is_violated() {
        let fleet = [outcome(1.0, false), outcome(1.2, false), outcome(1.5, false)];
        assert_eq!(classify(&fleet), Verdict::Violated);
    }

    #[test]
    fn missing_cooldown_is_indeterminate() {
        let fleet = [
            outcome(1.0, false),
            LoadoutOutcome::NOT_COMPUTED,
            outcome(1.1, false),
        ];
        assert_eq!(classify(&fleet), Verdict::Indeterminate);
    }

    #[test]
    fn support_ship_must_hold_middle_cooldown() {
        let smallest = [outcome(1.0, true), outcome(1.1, false), outcome(1.33, false)];
        assert_eq!(classify(&smallest), Verdict::Violated);

        let middle = [outcome(1.0, false), outcome(1.1, true), outcome(1.33, false)];
        assert_eq!(classify(&middle), Verdict::Satisfied);
    }

    #[test]
    fn any_support_ship_in_middle_is_enough() {
        let fleet = [outcome(1.0, true), outcome(1.1, true), outcome(1.33, false)];
        assert_eq!(classify(&fleet), Verdict::Satisfied);
    }

    #[test]
    fn support_ship_tied_with_middle_value_counts() {
        // Equal cooldowns satisfy the support position but not the gap.
        let fleet = [outcome(1.0, false), outcome(1.1, false), outcome(1.1, true)];
        assert_eq!(classify(&fleet), Verdict::Violated);
    }

    #[test]
    fn classification_is_repeatable() {
        let fleet = [outcome(1.0, false), outcome(1.1, true), outcome(1.33, false)];
        assert_eq!(classify(&fleet), classify(&fleet));
    }

    #[test]
    fn verdict_symbols() {
        assert_eq!(Verdict::Indeterminate.symbol(), "-");
        assert_eq!(Verdict::Satisfied.symbol(), "O");
        assert_eq!(Verdict::Violated.symbol(), "X");
        assert_eq!(Verdict::Satisfied.to_string(), "pass");
    }
}
