//! Command-line flags.

use std::path::PathBuf;

use clap::Parser;
use coinshell_types::config::ShellConfig;

/// Interactive wallet shell.
#[derive(Debug, Parser)]
#[command(name = "coinshell", version, about)]
pub struct Args {
    /// Configuration file (missing file means defaults).
    #[arg(long, default_value = "coinshell.toml")]
    pub config: PathBuf,

    /// Open the wallet with view keys only.
    #[arg(long)]
    pub view_only: bool,

    /// Disable ANSI colours.
    #[arg(long)]
    pub no_color: bool,

    /// Currency ticker, overriding the config file.
    #[arg(long)]
    pub ticker: Option<String>,

    /// Where `save_csv` writes the transaction export.
    #[arg(long, default_value = "transactions.csv")]
    pub csv: PathBuf,
}

impl Args {
    /// Apply flag overrides on top of the loaded config.
    pub fn apply(&self, config: &mut ShellConfig) {
        if self.no_color {
            config.color = false;
        }
        if let Some(ticker) = &self.ticker {
            config.ticker = ticker.clone();
        }
    }
}
