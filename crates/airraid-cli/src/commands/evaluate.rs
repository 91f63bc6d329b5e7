//! Fleet evaluation command.

use std::path::Path;

use anyhow::{Context, Result};
use tracing::info;

use airraid_cli::output::write_fleet;
use airraid_lib::FleetFile;

use super::CommandContext;

/// Handle the `evaluate <FLEET>` subcommand.
///
/// A failing verdict is a result, not an error: the command still exits 0.
pub fn handle_evaluate(ctx: &CommandContext, fleet_path: &Path) -> Result<()> {
    let catalog = ctx.load_catalog()?;
    let document = FleetFile::from_path(fleet_path)
        .with_context(|| format!("failed to read fleet from {}", fleet_path.display()))?;
    let fleet = document
        .resolve(&catalog)
        .with_context(|| format!("invalid fleet in {}", fleet_path.display()))?;

    let report = fleet.evaluate();
    info!(verdict = %report.verdict, "fleet evaluated");
    ctx.emit(&report, |out, palette| write_fleet(out, &report, palette))
}
