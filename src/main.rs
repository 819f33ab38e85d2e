use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing::{debug, error};
use tracing_subscriber::filter::LevelFilter;
use tracing_subscriber::EnvFilter;

use sales_report::cli::{handle_config_command, handle_init_command, handle_run_command, RunArgs};
use sales_report::config::SettingsSource;

#[derive(Parser)]
#[command(
    name = "sales-report",
    author = "Kaylee Beyene",
    version,
    about = "Per-category sales summaries from order spreadsheets",
    long_about = "sales-report reads a delimiter-separated order spreadsheet, sums every \
                  order into its category and a grand total using exact integer cents, \
                  takes a proportional deduction off each sum and writes a small CSV report."
)]
struct Cli {
    /// Settings file (JSON or YAML)
    #[arg(long, global = true, env = "SALES_REPORT_CONFIG")]
    config: Option<PathBuf>,

    /// Logging verbosity: off, error, warn, info, debug, trace.
    /// RUST_LOG takes precedence when set.
    #[arg(long, global = true, default_value_t = LevelFilter::WARN)]
    log_level: LevelFilter,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Build the sales report
    Run(RunArgs),

    /// Show the effective settings and where they come from
    Config,

    /// Write a settings file with the default values
    Init {
        /// Destination (defaults to the per-user settings file)
        #[arg(long)]
        path: Option<PathBuf>,

        /// Overwrite an existing file
        #[arg(long)]
        force: bool,
    },
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_logger(cli.log_level);

    match main_inner(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("Exiting with error: {e:#}");
            eprintln!("Error: {e:#}");
            ExitCode::FAILURE
        }
    }
}

fn main_inner(cli: Cli) -> Result<()> {
    let source = SettingsSource::resolve(cli.config.as_deref());

    match cli.command {
        Some(Commands::Run(args)) => {
            let settings = source.load()?;
            debug!(source = %source, "settings loaded");
            handle_run_command(settings, args)?;
        }
        Some(Commands::Config) => {
            let settings = source.load()?;
            handle_config_command(&source, &settings)?;
        }
        Some(Commands::Init { path, force }) => {
            handle_init_command(path.or(cli.config), force)?;
        }
        None => {
            println!("sales-report - per-category sales summaries");
            println!();
            println!("Run 'sales-report --help' for usage information.");
            println!("Run 'sales-report run' to build ordersReport.csv from orders.csv.");
        }
    }

    Ok(())
}

/// Initializes the tracing subscriber on stderr.
fn init_logger(level: LevelFilter) {
    let filter = match std::env::var("RUST_LOG").ok() {
        Some(_) => EnvFilter::from_default_env(),
        None => EnvFilter::new(format!("{}={}", env!("CARGO_CRATE_NAME"), level)),
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}
