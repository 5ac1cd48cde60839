//! coinshell entry point.
//!
//! Loads `coinshell.toml`, checks that every command is wired to a
//! handler, then reads one command per line from stdin until `exit` or end
//! of input. The wallet is saved on the way out.

mod cli;
mod demo_wallet;

use std::borrow::Cow;
use std::io::{self, BufRead};

use anyhow::Result;
use clap::Parser;

use coinshell_terminal::{
    Console, Dispatcher, Shell, ShellState, Tier, WalletSession, available_commands,
    list_commands,
};
use coinshell_types::config::ShellConfig;
use coinshell_types::style::{Style, painter_for};

use cli::Args;
use demo_wallet::DemoWallet;

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let args = Args::parse();
    let mut config = ShellConfig::load(&args.config)?;
    args.apply(&mut config);
    log::info!(
        "Starting coinshell (ticker {}, view only: {})",
        config.ticker,
        args.view_only
    );

    let dispatcher = Dispatcher::standard(config.ticker.clone());
    dispatcher.check_wiring()?;

    let wallet = DemoWallet::new(&config.ticker, args.view_only).with_csv_path(&args.csv);
    let mut shell = Shell::new(dispatcher, wallet);

    let painter = painter_for(config.color);
    let stdout = io::stdout();
    let mut out = stdout.lock();
    let mut console =
        Console::new(&mut out, &*painter).with_name_padding(config.name_padding);

    run(&mut shell, io::stdin().lock(), &mut console, &config.prompt)?;
    log::info!("Saved {} time(s), bye", shell.session().saves());
    Ok(())
}

/// Print the banner and the basic command menu.
fn welcome<S: WalletSession>(shell: &Shell<S>, console: &mut Console<'_>) -> Result<()> {
    let view_only = shell.session().is_view_only();
    console.styled_line(Style::Success, "Welcome to coinshell!")?;
    if view_only {
        console.styled_line(
            Style::Warning,
            "This is a view only wallet: spending commands are unavailable.",
        )?;
    }
    let registry = shell.dispatcher().registry();
    let available = available_commands(registry.commands(), view_only);
    list_commands(&available, Tier::Basic, console)?;
    console.line(&format!(
        "Use {} to list advanced commands.",
        console.paint(Style::Suggestion, "advanced")
    ))?;
    Ok(())
}

/// Read-dispatch loop. End of input is treated like `exit`.
///
/// Lines are read as raw bytes. Invalid UTF-8 is replaced rather than
/// rejected, so a garbled line is reported as an unknown command and the
/// session carries on.
fn run<S: WalletSession>(
    shell: &mut Shell<S>,
    mut input: impl BufRead,
    console: &mut Console<'_>,
    prompt: &str,
) -> Result<()> {
    welcome(shell, console)?;

    let mut buf = Vec::new();
    loop {
        console.prompt(prompt)?;
        buf.clear();
        if input.read_until(b'\n', &mut buf)? == 0 {
            console.line("")?;
            log::debug!("end of input");
            break;
        }
        let line = String::from_utf8_lossy(&buf);
        if let Cow::Owned(_) = line {
            log::debug!("input line was not valid UTF-8");
        }
        if shell.handle_line(&line, console)? == ShellState::Exited {
            break;
        }
    }

    console.styled_line(Style::Information, "Saving wallet...")?;
    shell.session_mut().save(console)?;
    Ok(())
}
