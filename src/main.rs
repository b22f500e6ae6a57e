use std::fs::OpenOptions;
use std::sync::Mutex;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use tracing::info;
use tracing_subscriber::EnvFilter;

use debt_machine::cli::{handle_audit_command, handle_config_command, handle_init_command, run_demo};
use debt_machine::config::{DebtPaths, Settings};
use debt_machine::session::Session;

#[derive(Parser)]
#[command(
    name = "debtm",
    version,
    about = "Track money owed between you and the people you know",
    long_about = "Debt Machine keeps a running ledger per person: credits are \
                  money they owe you, debits are money you owe them. Run without \
                  a subcommand to open the interactive TUI."
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Launch the interactive TUI
    #[command(alias = "ui")]
    Tui,

    /// Write default settings to the data directory
    Init,

    /// Show current configuration and paths
    Config,

    /// Show recent audit log entries
    Audit {
        /// Number of entries to show
        #[arg(short, long, default_value = "20")]
        limit: usize,
    },

    /// Run a scripted walkthrough of the ledger and print the balances
    Demo,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let paths = DebtPaths::new()?;
    let settings = Settings::load_or_create(&paths)?;
    init_logging(&paths, &settings)?;

    match cli.command {
        None | Some(Commands::Tui) => {
            let session = Session::new(paths, &settings)?;
            debt_machine::tui::run_tui(session, settings)?;
        }
        Some(Commands::Init) => handle_init_command(&paths, &settings)?,
        Some(Commands::Config) => handle_config_command(&paths, &settings)?,
        Some(Commands::Audit { limit }) => handle_audit_command(&paths, limit)?,
        Some(Commands::Demo) => {
            let report = run_demo(&settings)?;
            print!("{}", report);
        }
    }

    Ok(())
}

/// Send tracing output to the log file so it never draws over the TUI
fn init_logging(paths: &DebtPaths, settings: &Settings) -> Result<()> {
    paths.ensure_directories()?;
    let log_file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(paths.log_file())
        .with_context(|| format!("Failed to open log file {}", paths.log_file().display()))?;

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(&settings.log_level)),
        )
        .with_writer(Mutex::new(log_file))
        .with_ansi(false)
        .try_init()
        .map_err(|e| anyhow::anyhow!("Failed to initialize logging: {}", e))?;

    info!(data_dir = %paths.base_dir().display(), "debtm starting");
    Ok(())
}
