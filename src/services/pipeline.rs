//! End-to-end report run
//!
//! Reads the input spreadsheets, aggregates, deducts and writes the report.
//! Any error aborts the run before the report file is touched.

use std::path::PathBuf;

use tracing::{info, warn};

use crate::config::Settings;
use crate::error::ReportResult;
use crate::reports::SalesSummaryReport;
use crate::services::{Aggregator, Deduction, FractionStyle};
use crate::storage::{read_table, split_header, write_table_atomic};

/// A report computed but not yet written
#[derive(Debug, Clone)]
pub struct PreparedReport {
    pub report: SalesSummaryReport,
    /// Data rows in the order spreadsheet
    pub order_rows: usize,
    /// Data rows in the client spreadsheet, when one was read
    pub client_rows: Option<usize>,
}

/// Outcome of a completed run
#[derive(Debug, Clone)]
pub struct RunSummary {
    pub prepared: PreparedReport,
    pub output_file: PathBuf,
}

/// Read inputs and compute the report without writing anything
pub fn prepare_report(settings: &Settings) -> ReportResult<PreparedReport> {
    settings.validate()?;

    for overlap in settings.categories.overlaps() {
        warn!(
            identifier = %overlap.identifier,
            winner = %overlap.winner,
            shadowed = %overlap.shadowed,
            "identifier listed in more than one category; the first one wins"
        );
    }

    let orders = read_table(&settings.orders_file, settings.input_delimiter)?;

    // The client spreadsheet only has to be readable; nothing is taken from it.
    let client_rows = match &settings.clients_file {
        Some(path) => {
            let clients = read_table(path, settings.input_delimiter)?;
            Some(split_header(&clients).1.len())
        }
        None => None,
    };

    let (_, data) = split_header(&orders);
    let aggregates = Aggregator::from_settings(settings).aggregate(data)?;

    let deduction = Deduction::new(settings.denominator, FractionStyle::from(settings.mode))?;
    let report = SalesSummaryReport::generate(&aggregates, &deduction, settings.sum_label.clone());

    Ok(PreparedReport {
        report,
        order_rows: data.len(),
        client_rows,
    })
}

/// Compute the report and write it to the configured output file
pub fn run_report(settings: &Settings) -> ReportResult<RunSummary> {
    let prepared = prepare_report(settings)?;

    write_table_atomic(
        &settings.output_file,
        &prepared.report.to_rows(),
        settings.output_delimiter,
    )?;
    info!(
        path = %settings.output_file.display(),
        mode = settings.mode.as_str(),
        "report written"
    );

    Ok(RunSummary {
        prepared,
        output_file: settings.output_file.clone(),
    })
}
