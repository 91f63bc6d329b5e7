// Module exports for CLI subcommands.
//
// Each module handles one subcommand; main.rs parses arguments and dispatches
// to these handlers with a shared `CommandContext`.

pub mod cooldown;
pub mod equipment;
pub mod evaluate;
pub mod ships;

use std::io::{self, Write};

use anyhow::{Context, Result};
use serde::Serialize;

use airraid_cli::output::{write_json, OutputFormat};
use airraid_cli::terminal::ColorPalette;
use airraid_lib::{Catalog, CatalogPaths, CatalogSources};

/// Settings shared by every subcommand.
#[derive(Debug, Clone)]
pub struct CommandContext {
    pub sources: CatalogSources,
    pub format: OutputFormat,
    pub palette: ColorPalette,
}

impl CommandContext {
    /// Resolve the catalog files and load them.
    pub fn load_catalog(&self) -> Result<Catalog> {
        let paths = CatalogPaths::resolve(&self.sources)
            .context("failed to resolve the catalog location")?;
        paths.load().with_context(|| {
            format!(
                "failed to load catalog from {} and {}",
                paths.ships.display(),
                paths.equipment.display()
            )
        })
    }

    /// Print `value` as JSON, or with `text` when the text format is selected.
    pub fn emit<T, F>(&self, value: &T, text: F) -> Result<()>
    where
        T: Serialize + ?Sized,
        F: FnOnce(&mut io::StdoutLock<'static>, &ColorPalette) -> io::Result<()>,
    {
        let mut out = io::stdout().lock();
        match self.format {
            OutputFormat::Json => write_json(&mut out, value),
            OutputFormat::Text => text(&mut out, &self.palette),
        }
        .context("failed to write output")?;
        out.flush().context("failed to flush output")
    }
}
