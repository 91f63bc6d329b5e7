mod commands;

use std::path::PathBuf;

use anyhow::Result;
use clap::{Args, Parser, Subcommand};
use tracing_subscriber::{EnvFilter, FmtSubscriber};

use airraid_cli::output::OutputFormat;
use airraid_cli::terminal::ColorPalette;
use airraid_lib::CatalogSources;

use commands::cooldown::CooldownArgs;
use commands::CommandContext;

#[derive(Parser, Debug)]
#[command(author, version, about = "Carrier air-raid cooldown calculator")]
struct Cli {
    #[command(flatten)]
    global: GlobalOptions,

    #[command(subcommand)]
    command: Command,
}

#[derive(Args, Debug)]
struct GlobalOptions {
    /// Directory containing ships.json and equipment.json.
    #[arg(long, global = true)]
    data_dir: Option<PathBuf>,

    /// Override the ship table path.
    #[arg(long, global = true, value_name = "PATH")]
    ships: Option<PathBuf>,

    /// Override the equipment table path.
    #[arg(long, global = true, value_name = "PATH")]
    equipment: Option<PathBuf>,

    /// Output format.
    #[arg(long, global = true, value_enum, default_value_t = OutputFormat::Text)]
    format: OutputFormat,

    /// Disable colored output.
    #[arg(long, global = true)]
    no_color: bool,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// List the carriers in the catalog.
    Ships,
    /// Show one carrier's stats and slots.
    Ship {
        /// Ship name (case-insensitive).
        name: String,
    },
    /// List equipment, optionally only the items a ship slot accepts.
    Equipment {
        /// Ship whose slot restricts the listing.
        #[arg(long, requires = "slot")]
        ship: Option<String>,
        /// Slot number, 1 to 4.
        #[arg(long, requires = "ship")]
        slot: Option<usize>,
    },
    /// Compute the effective reload and air-raid cooldown of one loadout.
    Cooldown(CooldownArgs),
    /// Evaluate a three-carrier fleet file and classify its air-raid spacing.
    Evaluate {
        /// Path to the fleet JSON document.
        fleet: PathBuf,
    },
}

fn main() -> Result<()> {
    init_tracing();
    let cli = Cli::parse();

    let ctx = CommandContext {
        sources: CatalogSources {
            ships: cli.global.ships,
            equipment: cli.global.equipment,
            data_dir: cli.global.data_dir,
        },
        format: cli.global.format,
        palette: ColorPalette::detect(cli.global.no_color),
    };

    match cli.command {
        Command::Ships => commands::ships::handle_list_ships(&ctx),
        Command::Ship { name } => commands::ships::handle_show_ship(&ctx, &name),
        Command::Equipment { ship, slot } => {
            commands::equipment::handle_list_equipment(&ctx, ship.as_deref(), slot)
        }
        Command::Cooldown(args) => commands::cooldown::handle_cooldown(&ctx, &args),
        Command::Evaluate { fleet } => commands::evaluate::handle_evaluate(&ctx, &fleet),
    }
}

fn init_tracing() {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let subscriber = FmtSubscriber::builder()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .finish();

    let _ = tracing::subscriber::set_global_default(subscriber);
}
