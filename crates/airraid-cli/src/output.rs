//! Output formatting for catalog listings, loadouts and fleet reports.
//!
//! Every renderer writes to an `io::Write` so commands print to stdout while
//! tests capture into a buffer.

use std::collections::BTreeMap;
use std::io::{self, Write};

use clap::ValueEnum;
use serde::Serialize;

use airraid_lib::{
    EquipmentRecord, FleetReport, LoadoutOutcome, ShipLoadout, ShipRecord, Verdict, SLOT_COUNT,
};

use crate::terminal::ColorPalette;

/// Output format for command results.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable tables.
    #[default]
    Text,
    /// Pretty-printed JSON on stdout.
    Json,
}

/// Write `value` as pretty JSON followed by a newline.
pub fn write_json<W: Write, T: Serialize + ?Sized>(out: &mut W, value: &T) -> io::Result<()> {
    serde_json::to_writer_pretty(&mut *out, value)?;
    writeln!(out)
}

/// A ship together with the derived values shown by `ship <NAME>`.
#[derive(Debug, Serialize)]
pub struct ShipDetail<'a> {
    #[serde(flatten)]
    pub ship: &'a ShipRecord,
    pub display_rarity: u8,
    pub slot_summaries: BTreeMap<usize, String>,
    pub notes: Vec<String>,
}

impl<'a> ShipDetail<'a> {
    pub fn new(ship: &'a ShipRecord) -> Self {
        let slot_summaries = ship
            .slots
            .keys()
            .filter_map(|&index| ship.slot_summary(index).map(|s| (index, s)))
            .collect();
        Self {
            ship,
            display_rarity: ship.display_rarity(),
            slot_summaries,
            notes: ship.reload_notes(),
        }
    }
}

/// Evaluation of a single loadout as printed by `cooldown`.
#[derive(Debug, Serialize)]
pub struct LoadoutReport {
    pub ship: String,
    pub display_name: String,
    pub level: u32,
    pub affinity: u32,
    /// Equipment names for slots 1 to 4.
    pub equipment: Vec<Option<String>>,
    pub slot_summaries: Vec<Option<String>>,
    #[serde(flatten)]
    pub outcome: LoadoutOutcome,
}

impl LoadoutReport {
    pub fn new(ship: &ShipRecord, loadout: &ShipLoadout<'_>, outcome: LoadoutOutcome) -> Self {
        Self {
            ship: ship.name.clone(),
            display_name: ship.display_name.clone(),
            level: loadout.level.value(),
            affinity: loadout.affinity.points(),
            equipment: (1..=SLOT_COUNT)
                .map(|slot| loadout.equipment(slot).map(|e| e.name.clone()))
                .collect(),
            slot_summaries: (1..=SLOT_COUNT)
                .map(|slot| ship.slot_summary(slot))
                .collect(),
            outcome,
        }
    }
}

/// Render the ship catalog as a table.
pub fn write_ship_table<W: Write>(
    out: &mut W,
    ships: &[&ShipRecord],
    palette: &ColorPalette,
) -> io::Result<()> {
    if ships.is_empty() {
        return writeln!(out, "No ships available in catalog.");
    }

    writeln!(out, "Available ships ({}):", ships.len())?;
    writeln!(
        out,
        "{:<22} {:<5} {:>6} {:>7} {:<10}  {}",
        "Name", "Class", "Rarity", "Support", "Rule", "Display name"
    )?;
    for ship in ships {
        writeln!(
            out,
            "{:<22} {:<5} {:>6} {:>7} {:<10}  {}{}{}",
            ship.name,
            ship.ship_class.label(),
            ship.display_rarity(),
            if ship.is_support_ship { "yes" } else { "no" },
            ship.special_rule.label(),
            palette.gray,
            ship.display_name,
            palette.reset
        )?;
    }
    Ok(())
}

/// Render one ship with its stats, slots and reload notes.
pub fn write_ship_detail<W: Write>(
    out: &mut W,
    detail: &ShipDetail<'_>,
    palette: &ColorPalette,
) -> io::Result<()> {
    let ship = detail.ship;
    writeln!(
        out,
        "{}{}{} {}({}){} {} rarity {}",
        palette.white_bold,
        ship.name,
        palette.reset,
        palette.gray,
        ship.display_name,
        palette.reset,
        ship.ship_class.label(),
        detail.display_rarity
    )?;
    writeln!(
        out,
        "Reload: base {} growth {} enhance {}",
        ship.base_reload, ship.growth_reload, ship.enhance_reload
    )?;
    if let Some(refit) = &ship.refit {
        writeln!(out, "Refit: +{} reload", refit.reload_bonus())?;
    }
    if ship.is_support_ship {
        writeln!(out, "{}Support ship{}", palette.yellow, palette.reset)?;
    }
    for (index, summary) in &detail.slot_summaries {
        writeln!(out, "  Slot {index}: {summary}")?;
    }
    for note in &detail.notes {
        writeln!(out, "  * {note}")?;
    }
    Ok(())
}

/// Render equipment as a table.
pub fn write_equipment_table<W: Write>(out: &mut W, items: &[&EquipmentRecord]) -> io::Result<()> {
    if items.is_empty() {
        return writeln!(out, "No matching equipment.");
    }

    writeln!(out, "Equipment ({}):", items.len())?;
    writeln!(out, "{:>6}  {:<28} {:<15} {:>8}", "ID", "Name", "Type", "Reload")?;
    for item in items {
        let reload = item
            .reload
            .filter(|r| *r != 0.0)
            .map(|r| r.to_string())
            .unwrap_or_else(|| "-".to_string());
        writeln!(
            out,
            "{:>6}  {:<28} {:<15} {:>8}",
            item.id,
            item.name,
            item.equipment_type.label(),
            reload
        )?;
    }
    Ok(())
}

/// Render a single loadout evaluation.
pub fn write_loadout<W: Write>(
    out: &mut W,
    report: &LoadoutReport,
    palette: &ColorPalette,
) -> io::Result<()> {
    writeln!(
        out,
        "{}{}{} {}({}){} Lv.{} affinity {}",
        palette.white_bold,
        report.ship,
        palette.reset,
        palette.gray,
        report.display_name,
        palette.reset,
        report.level,
        report.affinity
    )?;
    for (index, (item, summary)) in report
        .equipment
        .iter()
        .zip(&report.slot_summaries)
        .enumerate()
    {
        let item = match item {
            Some(name) => name.clone(),
            None => format!("{}(empty){}", palette.gray, palette.reset),
        };
        match summary {
            Some(summary) => writeln!(out, "  Slot {}: {item} [{summary}]", index + 1)?,
            None => writeln!(out, "  Slot {}: {item}", index + 1)?,
        }
    }

    match (report.outcome.effective_reload, report.outcome.cooldown) {
        (Some(reload), Some(cooldown)) => {
            writeln!(out, "Effective reload: {reload}")?;
            writeln!(
                out,
                "Air-raid cooldown: {}{:.2}s{}",
                palette.cyan, cooldown, palette.reset
            )?;
            if report.outcome.is_support_ship {
                writeln!(out, "{}Support ship{}", palette.yellow, palette.reset)?;
            }
        }
        _ => writeln!(out, "Air-raid cooldown: not computed (empty slot)")?,
    }
    Ok(())
}

/// Render a fleet evaluation: one line per position and the verdict.
pub fn write_fleet<W: Write>(
    out: &mut W,
    report: &FleetReport,
    palette: &ColorPalette,
) -> io::Result<()> {
    for position in &report.positions {
        let Some(ship) = &position.ship else {
            writeln!(
                out,
                "#{} {}(empty){}",
                position.position, palette.gray, palette.reset
            )?;
            continue;
        };

        let cooldown = match position.outcome.cooldown {
            Some(cooldown) => format!("{}{:.2}s{}", palette.cyan, cooldown, palette.reset),
            None => "not computed".to_string(),
        };
        let reload = position
            .outcome
            .effective_reload
            .map(|r| r.to_string())
            .unwrap_or_else(|| "-".to_string());
        let badge = if position.outcome.is_support_ship {
            format!("  {}[support]{}", palette.yellow, palette.reset)
        } else {
            String::new()
        };
        writeln!(
            out,
            "#{} {}{:<22}{} reload {:>4}  cooldown {}{}",
            position.position, palette.white_bold, ship, palette.reset, reload, cooldown, badge
        )?;
    }

    let color = match report.verdict {
        Verdict::Satisfied => palette.green,
        Verdict::Violated => palette.red,
        Verdict::Indeterminate => palette.gray,
    };
    writeln!(
        out,
        "Triple air raid: {}{} ({}){}",
        color, report.verdict, report.symbol, palette.reset
    )
}
