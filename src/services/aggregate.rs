//! Aggregation of order rows into per-category and grand totals
//!
//! One pass over the data rows (header excluded). Each row is parsed,
//! classified and added to the running totals; the first unparseable row
//! aborts the whole pass.

use tracing::{debug, info};

use crate::config::{AggregationMode, Settings};
use crate::error::{ReportError, ReportResult};
use crate::models::{CategoryTable, ColumnMapping, Money};
use crate::storage::Row;

/// Running totals for one category
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CategoryTotals {
    /// Category label
    pub label: String,
    /// Sum of parsed quantity fields, in the parser's minor units
    pub quantity: i64,
    /// Sum of row totals
    pub amount: Money,
    /// Number of rows classified into this category
    pub rows: usize,
}

impl CategoryTotals {
    fn new(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            quantity: 0,
            amount: Money::zero(),
            rows: 0,
        }
    }

    /// The value that goes into the report before deduction
    ///
    /// Literal mode reports the quantity sum, read as cents. Standard mode
    /// reports the sales amount.
    pub fn reported(&self, mode: AggregationMode) -> Money {
        match mode {
            AggregationMode::Literal => Money::from_cents(self.quantity),
            AggregationMode::Standard => self.amount,
        }
    }
}

/// Result of one aggregation pass
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Aggregates {
    /// Totals per category, in table order
    pub categories: Vec<CategoryTotals>,
    /// Sum of every row total, classified or not
    pub grand_total: Money,
    /// Number of data rows processed
    pub rows: usize,
    /// Number of rows that matched no category
    pub unclassified_rows: usize,
    /// Mode the totals were computed in
    pub mode: AggregationMode,
}

impl Aggregates {
    fn empty(table: &CategoryTable, mode: AggregationMode) -> Self {
        Self {
            categories: table
                .categories()
                .iter()
                .map(|c| CategoryTotals::new(c.label.clone()))
                .collect(),
            grand_total: Money::zero(),
            rows: 0,
            unclassified_rows: 0,
            mode,
        }
    }

    /// Look up a category's totals by label
    pub fn category(&self, label: &str) -> Option<&CategoryTotals> {
        self.categories.iter().find(|c| c.label == label)
    }
}

/// A parsed data row
#[derive(Debug, Clone, PartialEq, Eq)]
struct OrderLine<'r> {
    item: &'r str,
    quantity: i64,
    total: Money,
}

/// Walks data rows and accumulates totals
pub struct Aggregator<'a> {
    table: &'a CategoryTable,
    columns: ColumnMapping,
    mode: AggregationMode,
}

impl<'a> Aggregator<'a> {
    /// Create an aggregator
    ///
    /// In literal mode the quantity is always read from the price column.
    pub fn new(table: &'a CategoryTable, columns: ColumnMapping, mode: AggregationMode) -> Self {
        let columns = match mode {
            AggregationMode::Standard => columns,
            AggregationMode::Literal => columns.collapsed(),
        };
        Self {
            table,
            columns,
            mode,
        }
    }

    pub fn from_settings(settings: &'a Settings) -> Self {
        Self::new(&settings.categories, settings.columns, settings.mode)
    }

    /// Aggregate data rows (header excluded)
    pub fn aggregate(&self, rows: &[Row]) -> ReportResult<Aggregates> {
        let mut totals = Aggregates::empty(self.table, self.mode);

        for (idx, row) in rows.iter().enumerate() {
            // 1-based line in the file, counting the header
            let row_number = idx + 2;
            let line = self.parse_row(row, row_number)?;
            let overflow = || ReportError::Overflow {
                row: row_number,
                item: line.item.to_string(),
            };

            match self.table.classify_index(line.item) {
                Some(cat_idx) => {
                    let category = &mut totals.categories[cat_idx];
                    category.quantity = category
                        .quantity
                        .checked_add(line.quantity)
                        .ok_or_else(overflow)?;
                    category.amount = category
                        .amount
                        .checked_add(line.total)
                        .ok_or_else(overflow)?;
                    category.rows += 1;
                }
                None => {
                    debug!(row = row_number, item = line.item, "no category");
                    totals.unclassified_rows += 1;
                }
            }

            totals.grand_total = totals
                .grand_total
                .checked_add(line.total)
                .ok_or_else(overflow)?;
            totals.rows += 1;
        }

        info!(
            rows = totals.rows,
            unclassified = totals.unclassified_rows,
            grand_total = %totals.grand_total,
            "aggregated order rows"
        );
        Ok(totals)
    }

    fn parse_row<'r>(&self, row: &'r Row, row_number: usize) -> ReportResult<OrderLine<'r>> {
        let expected = self.columns.required_width();
        if row.len() < expected {
            return Err(ReportError::ShortRow {
                row: row_number,
                expected,
                found: row.len(),
            });
        }

        let item = row[self.columns.identifier].as_str();
        let field = |column: usize, name: &'static str| {
            let value = &row[column];
            Money::parse_minor_units(value).map_err(|_| ReportError::Parse {
                row: row_number,
                column: name,
                item: item.to_string(),
                value: value.clone(),
            })
        };

        let price = field(self.columns.price, "price")?;
        let quantity = field(self.columns.quantity, "quantity")?.cents();

        let total = match self.mode {
            AggregationMode::Literal => price,
            AggregationMode::Standard => {
                price
                    .checked_mul(quantity)
                    .ok_or_else(|| ReportError::Overflow {
                        row: row_number,
                        item: item.to_string(),
                    })?
            }
        };

        Ok(OrderLine {
            item,
            quantity,
            total,
        })
    }
}
