//! Run CLI command
//!
//! Applies command-line overrides on top of the loaded settings and runs the
//! report pipeline.

use std::path::PathBuf;

use clap::Args;

use crate::config::{AggregationMode, Settings};
use crate::error::ReportResult;
use crate::services::{prepare_report, run_report};

/// Arguments of the `run` command; each one overrides the settings file
#[derive(Args, Debug, Default, Clone)]
pub struct RunArgs {
    /// Order spreadsheet
    #[arg(long)]
    pub orders: Option<PathBuf>,

    /// Client spreadsheet
    #[arg(long, conflicts_with = "no_clients")]
    pub clients: Option<PathBuf>,

    /// Do not read a client spreadsheet
    #[arg(long)]
    pub no_clients: bool,

    /// Report destination
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Field delimiter of the input spreadsheets
    #[arg(long)]
    pub input_delimiter: Option<char>,

    /// Field delimiter of the report
    #[arg(long)]
    pub output_delimiter: Option<char>,

    /// Report every aggregate as `raw - raw / DENOMINATOR`
    #[arg(long)]
    pub denominator: Option<i64>,

    /// Aggregation mode
    #[arg(long, value_enum)]
    pub mode: Option<AggregationMode>,

    /// Print the report as a table on stdout
    #[arg(long)]
    pub preview: bool,

    /// Compute the report without writing the output file
    #[arg(long)]
    pub dry_run: bool,
}

impl RunArgs {
    /// Overlay the command-line values on `settings`
    pub fn apply(&self, settings: &mut Settings) {
        if let Some(orders) = &self.orders {
            settings.orders_file = orders.clone();
        }
        if self.no_clients {
            settings.clients_file = None;
        } else if let Some(clients) = &self.clients {
            settings.clients_file = Some(clients.clone());
        }
        if let Some(output) = &self.output {
            settings.output_file = output.clone();
        }
        if let Some(delimiter) = self.input_delimiter {
            settings.input_delimiter = delimiter;
        }
        if let Some(delimiter) = self.output_delimiter {
            settings.output_delimiter = delimiter;
        }
        if let Some(denominator) = self.denominator {
            settings.denominator = denominator;
        }
        if let Some(mode) = self.mode {
            settings.mode = mode;
        }
    }
}

/// Handle the run command
pub fn handle_run_command(mut settings: Settings, args: RunArgs) -> ReportResult<()> {
    args.apply(&mut settings);

    if args.dry_run {
        let prepared = prepare_report(&settings)?;
        println!("{}", prepared.report.format_terminal());
        println!("Dry run: {} not written.", settings.output_file.display());
        return Ok(());
    }

    let summary = run_report(&settings)?;
    if args.preview {
        println!("{}", summary.prepared.report.format_terminal());
    }
    println!(
        "Sales report ({} order rows) written to: {}",
        summary.prepared.order_rows,
        summary.output_file.display()
    );

    Ok(())
}
