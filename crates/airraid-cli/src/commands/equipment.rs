//! Equipment command handler.

use anyhow::Result;

use airraid_cli::output::write_equipment_table;

use super::CommandContext;

/// Handle the `equipment` subcommand, optionally restricted to the items a
/// ship slot accepts.
pub fn handle_list_equipment(
    ctx: &CommandContext,
    ship: Option<&str>,
    slot: Option<usize>,
) -> Result<()> {
    let catalog = ctx.load_catalog()?;
    let items = match (ship, slot) {
        (Some(ship), Some(slot)) => {
            let ship = catalog.ship(ship)?;
            if ship.slot(slot).is_none() {
                anyhow::bail!("{} has no equipment slot {}", ship.name, slot);
            }
            catalog.equipment_for_slot(ship, slot)
        }
        _ => catalog.equipment_sorted(),
    };
    ctx.emit(&items, |out, _| write_equipment_table(out, &items))
}
