//! Category model and the ordered classification table
//!
//! A category is a labelled set of item identifiers. The table is consulted
//! in order and the first category containing an identifier wins, so the
//! order entries are listed in is part of the configuration.

use serde::{Deserialize, Serialize};
use std::collections::{BTreeSet, HashSet};
use std::fmt;

/// A named bucket of item identifiers
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Category {
    /// Label written into the report
    pub label: String,

    /// Item identifiers belonging to this category
    pub identifiers: BTreeSet<String>,
}

impl Category {
    /// Create a new category from a label and its identifiers
    pub fn new<I, S>(label: impl Into<String>, identifiers: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            label: label.into(),
            identifiers: identifiers.into_iter().map(Into::into).collect(),
        }
    }

    /// Check whether an item identifier belongs to this category
    pub fn contains(&self, identifier: &str) -> bool {
        self.identifiers.contains(identifier)
    }

    /// Validate the category
    pub fn validate(&self) -> Result<(), CategoryValidationError> {
        if self.label.trim().is_empty() {
            return Err(CategoryValidationError::EmptyLabel);
        }
        Ok(())
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label)
    }
}

/// An identifier listed under more than one category
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CategoryOverlap {
    pub identifier: String,
    /// Category that wins classification
    pub winner: String,
    /// Later category that never sees this identifier
    pub shadowed: String,
}

/// Ordered classification table
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CategoryTable {
    categories: Vec<Category>,
}

impl CategoryTable {
    pub fn new(categories: Vec<Category>) -> Self {
        Self { categories }
    }

    /// The category table the order spreadsheet was originally summarised with
    pub fn reference() -> Self {
        Self::new(vec![
            Category::new(
                "TSM",
                [
                    "022207210",
                    "022207216",
                    "022207217",
                    "022207240",
                    "022207250",
                    "022207283",
                    "022207284",
                    "022207289",
                ],
            ),
            Category::new("GEE", ["022207201", "022207207"]),
            Category::new("LESTRIS", ["022207204"]),
            Category::new("LEGAL TEHNOLOGIES", ["022207224", "022207226"]),
            Category::new("TEHNOGRANT", ["022207244", "022207247"]),
            Category::new("SACRAMENTO", ["022207249"]),
            Category::new("DIVAT", ["022207266"]),
            Category::new("MDTRANS", ["022207277", "022207279"]),
        ])
    }

    pub fn categories(&self) -> &[Category] {
        &self.categories
    }

    pub fn len(&self) -> usize {
        self.categories.len()
    }

    pub fn is_empty(&self) -> bool {
        self.categories.is_empty()
    }

    /// Position of the first category containing `identifier`
    pub fn classify_index(&self, identifier: &str) -> Option<usize> {
        self.categories.iter().position(|c| c.contains(identifier))
    }

    /// Label of the first category containing `identifier`
    pub fn classify(&self, identifier: &str) -> Option<&str> {
        self.classify_index(identifier)
            .map(|idx| self.categories[idx].label.as_str())
    }

    /// Identifiers claimed by more than one category, in table order
    pub fn overlaps(&self) -> Vec<CategoryOverlap> {
        let mut overlaps = Vec::new();
        for (i, later) in self.categories.iter().enumerate() {
            for identifier in &later.identifiers {
                if let Some(winner) = self.categories[..i].iter().find(|c| c.contains(identifier))
                {
                    overlaps.push(CategoryOverlap {
                        identifier: identifier.clone(),
                        winner: winner.label.clone(),
                        shadowed: later.label.clone(),
                    });
                }
            }
        }
        overlaps
    }

    /// Validate labels: each must be non-empty and unique
    pub fn validate(&self) -> Result<(), CategoryValidationError> {
        let mut seen = HashSet::new();
        for category in &self.categories {
            category.validate()?;
            if !seen.insert(category.label.as_str()) {
                return Err(CategoryValidationError::DuplicateLabel(
                    category.label.clone(),
                ));
            }
        }
        Ok(())
    }
}

/// Validation errors for categories
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CategoryValidationError {
    EmptyLabel,
    DuplicateLabel(String),
}

impl fmt::Display for CategoryValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyLabel => write!(f, "Category label cannot be empty"),
            Self::DuplicateLabel(label) => write!(f, "Duplicate category label: {}", label),
        }
    }
}

impl std::error::Error for CategoryValidationError {}
