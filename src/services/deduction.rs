//! Proportional deduction and decimal rendering of aggregates
//!
//! A reported value is `raw - raw / denominator` with truncating integer
//! division, split into whole units and cents with truncating division again.

use crate::config::AggregationMode;
use crate::error::{ReportError, ReportResult};
use crate::models::Money;

/// How the cents part of a rendered amount is written
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FractionStyle {
    /// Always two digits: `0.09`, `-1.50`
    Padded,
    /// Plain integer formatting of both parts: `0.9` for nine cents,
    /// `0.-5` for minus five cents. Output parity with the original tool.
    Unpadded,
}

impl From<AggregationMode> for FractionStyle {
    fn from(mode: AggregationMode) -> Self {
        match mode {
            AggregationMode::Standard => Self::Padded,
            AggregationMode::Literal => Self::Unpadded,
        }
    }
}

/// Applies `raw - raw / denominator` and renders the result
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Deduction {
    denominator: i64,
    style: FractionStyle,
}

impl Deduction {
    pub fn new(denominator: i64, style: FractionStyle) -> ReportResult<Self> {
        if denominator <= 0 {
            return Err(ReportError::Validation(format!(
                "denominator must be positive, got {}",
                denominator
            )));
        }
        Ok(Self { denominator, style })
    }

    /// Subtract the proportional share from an aggregate
    pub fn apply(&self, raw: Money) -> Money {
        Money::from_cents(raw.cents() - raw.cents() / self.denominator)
    }

    /// Deduct and render in one step
    pub fn render(&self, raw: Money) -> String {
        format_amount(self.apply(raw), self.style)
    }
}

/// Render an amount as `<whole>.<cents>`
pub fn format_amount(amount: Money, style: FractionStyle) -> String {
    match style {
        FractionStyle::Padded => amount.to_string(),
        FractionStyle::Unpadded => format!("{}.{}", amount.whole_part(), amount.fraction_part()),
    }
}
