//! ATM CLI - an automated teller simulator in your terminal

use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::Result;
use clap::Parser;

mod commands;
mod output;
mod terminal;

use commands::{logs, session};

/// ATM - create accounts, sign in with a PIN, deposit and withdraw
#[derive(Parser)]
#[command(name = "atm", version, about, long_about = None)]
struct Cli {
    /// Settings file (defaults to <config dir>/atm/settings.json)
    #[arg(long, env = "ATM_CONFIG")]
    config: Option<PathBuf>,

    /// Store PINs as salted Argon2id hashes instead of the reversible shift
    #[arg(long, env = "ATM_HARDENED")]
    hardened: bool,

    /// Read plain lines from stdin even when attached to a terminal
    #[arg(long)]
    plain: bool,

    /// Print this run's event log on exit
    #[arg(long)]
    show_log: bool,

    /// Maximum number of log entries to print
    #[arg(long, default_value = "50")]
    log_limit: usize,

    /// Print the event log as JSON (with --show-log)
    #[arg(long)]
    json: bool,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let result = run(cli);

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            output::error(&format!("{:#}", e));
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> Result<()> {
    let settings_path = cli.config.unwrap_or_else(commands::default_settings_path);
    let mut ctx = commands::get_context(&settings_path, cli.hardened)?;

    session::run(&mut ctx, cli.plain)?;

    if cli.show_log {
        logs::run(&ctx.logger, cli.log_limit, cli.json)?;
    }

    Ok(())
}
