//! EvenSplit CLI - who owes whom, in your terminal

use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::Result;
use clap::{Parser, Subcommand};

mod commands;
mod logging;
mod output;

use commands::{balances, check, config, debts, settle, summary};

/// EvenSplit - split shared expenses and settle up with fewer payments
#[derive(Parser)]
#[command(name = "es", version, about, long_about = None)]
struct Cli {
    /// Show debug logging
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Show total spending, balances and suggested settlements
    Summary {
        /// Group document (reads stdin when omitted)
        file: Option<PathBuf>,
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Show each person's net balance
    Balances {
        /// Group document (reads stdin when omitted)
        file: Option<PathBuf>,
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Show the simplified list of payments
    Settle {
        /// Group document (reads stdin when omitted)
        file: Option<PathBuf>,
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Show who owes whom per expense, before simplification
    Debts {
        /// Group document (reads stdin when omitted)
        file: Option<PathBuf>,
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Validate a group document and list every problem
    Check {
        /// Group document (reads stdin when omitted)
        file: Option<PathBuf>,
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Show or change settings
    Config {
        #[command(subcommand)]
        command: Option<config::ConfigCommands>,
    },
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    logging::init(cli.verbose);

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
    match cli.command {
        Commands::Summary { file, json } => summary::run(file.as_deref(), json),
        Commands::Balances { file, json } => balances::run(file.as_deref(), json),
        Commands::Settle { file, json } => settle::run(file.as_deref(), json),
        Commands::Debts { file, json } => debts::run(file.as_deref(), json),
        Commands::Check { file, json } => check::run(file.as_deref(), json),
        Commands::Config { command } => config::run(command),
    }
}
