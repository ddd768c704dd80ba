use std::fmt;

use thiserror::Error;

// ---------------------------------------------------------------------------
// Load-boundary errors
// ---------------------------------------------------------------------------

/// Failures that can occur while building a [`LaunchTable`].
///
/// The chart selectors are total functions and never fail; everything that
/// can go wrong happens here, before the UI ever sees a table.
#[derive(Debug, Error)]
pub enum DataError {
    #[error("dataset contains no launch records")]
    EmptyDataset,

    #[error("row {row}: launch outcome must be 0 or 1, got {value}")]
    InvalidOutcome { row: usize, value: i64 },

    #[error("unsupported file extension: .{0}")]
    UnsupportedExtension(String),
}

// ---------------------------------------------------------------------------
// Outcome – the `class` column
// ---------------------------------------------------------------------------

/// Launch outcome, stored in the source data as the `class` column (0/1).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Failure,
    Success,
}

impl Outcome {
    /// Decode the 0/1 `class` value; anything else is a load error.
    pub fn from_class(value: i64, row: usize) -> Result<Self, DataError> {
        match value {
            0 => Ok(Outcome::Failure),
            1 => Ok(Outcome::Success),
            other => Err(DataError::InvalidOutcome { row, value: other }),
        }
    }

    /// Numeric encoding used as the scatter chart's y value.
    pub fn as_f64(self) -> f64 {
        match self {
            Outcome::Failure => 0.0,
            Outcome::Success => 1.0,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Outcome::Failure => "Failure",
            Outcome::Success => "Success",
        }
    }
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

// ---------------------------------------------------------------------------
// LaunchRecord – one row of the dataset
// ---------------------------------------------------------------------------

/// A single launch (one row of the source table).
#[derive(Debug, Clone, PartialEq)]
pub struct LaunchRecord {
    pub site: String,
    pub payload_mass_kg: f64,
    pub outcome: Outcome,
    pub booster_category: String,
}

// ---------------------------------------------------------------------------
// LaunchTable – the complete loaded dataset
// ---------------------------------------------------------------------------

/// The full parsed dataset with constants derived once at load time.
///
/// Loaded once, never mutated; both chart selectors share it read-only.
#[derive(Debug, Clone)]
pub struct LaunchTable {
    /// All launches (rows), in file order.
    pub records: Vec<LaunchRecord>,
    /// Distinct launch sites, first-seen order (dropdown options).
    pub sites: Vec<String>,
    /// Distinct booster version categories, first-seen order.
    pub booster_categories: Vec<String>,
    /// `(min, max)` payload mass over all rows (slider bounds).
    pub payload_bounds: (f64, f64),
}

impl LaunchTable {
    /// Build the table and its derived constants from loaded rows.
    ///
    /// An empty row set is rejected here so `payload_bounds` is always
    /// well-defined for a live table.
    pub fn from_records(records: Vec<LaunchRecord>) -> Result<Self, DataError> {
        if records.is_empty() {
            return Err(DataError::EmptyDataset);
        }

        let mut sites: Vec<String> = Vec::new();
        let mut booster_categories: Vec<String> = Vec::new();
        let mut min_payload = f64::INFINITY;
        let mut max_payload = f64::NEG_INFINITY;

        for rec in &records {
            if !sites.contains(&rec.site) {
                sites.push(rec.site.clone());
            }
            if !booster_categories.contains(&rec.booster_category) {
                booster_categories.push(rec.booster_category.clone());
            }
            min_payload = min_payload.min(rec.payload_mass_kg);
            max_payload = max_payload.max(rec.payload_mass_kg);
        }

        Ok(LaunchTable {
            records,
            sites,
            booster_categories,
            payload_bounds: (min_payload, max_payload),
        })
    }

    /// Number of launches.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Whether the dataset is empty (never true for a constructed table).
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}
