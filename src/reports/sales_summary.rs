//! Sales Summary Report
//!
//! Turns aggregation results into the output table: one row per category in
//! table order, then the grand-total row. No header row is emitted.

use tabled::builder::Builder;
use tabled::settings::Style;

use crate::services::{Aggregates, Deduction};
use crate::storage::Row;

/// One category line of the report
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CategoryReportRow {
    pub label: String,
    /// Deducted amount, already rendered
    pub amount: String,
    /// Number of order rows behind the amount
    pub rows: usize,
}

/// The assembled report
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SalesSummaryReport {
    pub categories: Vec<CategoryReportRow>,
    pub sum_label: String,
    /// Deducted grand total, already rendered
    pub grand_total: String,
    /// Number of order rows aggregated
    pub total_rows: usize,
}

impl SalesSummaryReport {
    /// Deduct and render every aggregate
    pub fn generate(
        aggregates: &Aggregates,
        deduction: &Deduction,
        sum_label: impl Into<String>,
    ) -> Self {
        let categories = aggregates
            .categories
            .iter()
            .map(|totals| CategoryReportRow {
                label: totals.label.clone(),
                amount: deduction.render(totals.reported(aggregates.mode)),
                rows: totals.rows,
            })
            .collect();

        Self {
            categories,
            sum_label: sum_label.into(),
            grand_total: deduction.render(aggregates.grand_total),
            total_rows: aggregates.rows,
        }
    }

    /// Output table rows: `[label, ":", amount]` per category, then
    /// `["", "", "", <sum label>, "", amount]`
    pub fn to_rows(&self) -> Vec<Row> {
        let mut rows: Vec<Row> = self
            .categories
            .iter()
            .map(|c| vec![c.label.clone(), ":".to_string(), c.amount.clone()])
            .collect();

        rows.push(vec![
            String::new(),
            String::new(),
            String::new(),
            self.sum_label.clone(),
            String::new(),
            self.grand_total.clone(),
        ]);
        rows
    }

    /// Format the report for terminal display
    pub fn format_terminal(&self) -> String {
        let mut builder = Builder::default();
        builder.push_record(["Category", "Rows", "Amount"]);
        for category in &self.categories {
            builder.push_record([
                category.label.clone(),
                category.rows.to_string(),
                category.amount.clone(),
            ]);
        }
        builder.push_record([
            self.sum_label.clone(),
            self.total_rows.to_string(),
            self.grand_total.clone(),
        ]);

        let mut table = builder.build();
        table.with(Style::psql());
        table.to_string()
    }
}
