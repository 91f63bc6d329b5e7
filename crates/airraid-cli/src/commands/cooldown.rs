//! Single-loadout cooldown command.

use anyhow::{Context, Result};
use clap::Args;

use airraid_cli::output::{write_loadout, LoadoutReport};
use airraid_lib::{Affinity, GlobalModifiers, Level, ShipLoadout};

use super::CommandContext;

/// Fleet-wide reload modifiers given on the command line.
#[derive(Args, Debug, Clone)]
pub struct ModifierArgs {
    /// Fleet technology reload bonus for heavy carriers.
    #[arg(long, default_value_t = 42)]
    pub heavy_tech: u32,
    /// Fleet technology reload bonus for light carriers.
    #[arg(long, default_value_t = 45)]
    pub light_tech: u32,
    /// Enable the commander skill with the given reload bonus.
    #[arg(long, value_name = "RELOAD")]
    pub commander: Option<u32>,
    /// Apply the fleet-wide +4% support buff.
    #[arg(long)]
    pub support_buff: bool,
}

impl ModifierArgs {
    /// Build the modifiers, rejecting values above their in-game caps.
    pub fn globals(&self) -> airraid_lib::Result<GlobalModifiers> {
        let mut globals = GlobalModifiers {
            heavy_carrier_tech: self.heavy_tech,
            light_carrier_tech: self.light_tech,
            support_buff: self.support_buff,
            ..GlobalModifiers::default()
        };
        globals.set_commander(self.commander);
        globals.validate()?;
        Ok(globals)
    }
}

#[derive(Args, Debug, Clone)]
pub struct CooldownArgs {
    /// Ship name (case-insensitive).
    #[arg(long)]
    pub ship: String,
    /// Slot 1 equipment, by id or name.
    #[arg(long)]
    pub slot1: Option<String>,
    /// Slot 2 equipment, by id or name.
    #[arg(long)]
    pub slot2: Option<String>,
    /// Slot 3 equipment, by id or name.
    #[arg(long)]
    pub slot3: Option<String>,
    /// Slot 4 equipment, by id or name. Defaults to the standard auxiliary.
    #[arg(long)]
    pub slot4: Option<String>,
    /// Character level: 100, 120 or 125.
    #[arg(long, default_value_t = 125)]
    pub level: u32,
    /// Affinity value: 50, 90, 100, 150 or 200.
    #[arg(long, default_value_t = 100)]
    pub affinity: u32,
    #[command(flatten)]
    pub modifiers: ModifierArgs,
}

/// Handle the `cooldown` subcommand.
pub fn handle_cooldown(ctx: &CommandContext, args: &CooldownArgs) -> Result<()> {
    let catalog = ctx.load_catalog()?;
    let ship = catalog.ship(&args.ship)?;

    let mut loadout = ShipLoadout::new();
    loadout.select_ship(ship, &catalog);
    loadout.level = Level::try_from(args.level)?;
    loadout.affinity = Affinity::try_from(args.affinity)?;

    let slots = [&args.slot1, &args.slot2, &args.slot3, &args.slot4];
    for (index, key) in slots.into_iter().enumerate() {
        let Some(key) = key else {
            continue;
        };
        let slot = index + 1;
        let item = catalog.resolve_equipment(key)?;
        loadout
            .equip(slot, item)
            .with_context(|| format!("failed to equip slot {slot}"))?;
    }

    let globals = args.modifiers.globals()?;
    let outcome = loadout.evaluate(&globals);
    let report = LoadoutReport::new(ship, &loadout, outcome);
    ctx.emit(&report, |out, palette| write_loadout(out, &report, palette))
}
