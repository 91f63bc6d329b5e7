//! Ships command handlers for listing and inspecting carriers.

use anyhow::Result;

use airraid_cli::output::{write_ship_detail, write_ship_table, ShipDetail};

use super::CommandContext;

/// Handle the `ships` subcommand.
pub fn handle_list_ships(ctx: &CommandContext) -> Result<()> {
    let catalog = ctx.load_catalog()?;
    let ships = catalog.ships_sorted();
    ctx.emit(&ships, |out, palette| write_ship_table(out, &ships, palette))
}

/// Handle the `ship <NAME>` subcommand.
pub fn handle_show_ship(ctx: &CommandContext, name: &str) -> Result<()> {
    let catalog = ctx.load_catalog()?;
    let detail = ShipDetail::new(catalog.ship(name)?);
    ctx.emit(&detail, |out, palette| write_ship_detail(out, &detail, palette))
}
