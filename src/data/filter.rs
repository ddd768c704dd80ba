use super::model::{LaunchRecord, LaunchTable};

// ---------------------------------------------------------------------------
// Site selection: the dropdown's value
// ---------------------------------------------------------------------------

/// Current value of the launch-site dropdown: either the "All Sites"
/// sentinel or one concrete site name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SiteSelection {
    All,
    Site(String),
}

impl SiteSelection {
    /// Human-readable label shown in the dropdown.
    pub fn label(&self) -> &str {
        match self {
            SiteSelection::All => "All Sites",
            SiteSelection::Site(name) => name,
        }
    }
}

// ---------------------------------------------------------------------------
// Row predicates
// ---------------------------------------------------------------------------

/// Whether a record matches the site selection (exact string match).
///
/// A site string that never occurs in the dataset matches zero rows; that
/// degenerates to an empty chart rather than an error.
pub fn matches_site(record: &LaunchRecord, selection: &SiteSelection) -> bool {
    match selection {
        SiteSelection::All => true,
        SiteSelection::Site(name) => record.site == *name,
    }
}

/// Whether a record's payload mass lies within `[low, high]`, inclusive on
/// both ends. An inverted range (`low > high`) matches nothing; no swap is
/// performed.
pub fn in_payload_range(record: &LaunchRecord, (low, high): (f64, f64)) -> bool {
    record.payload_mass_kg >= low && record.payload_mass_kg <= high
}

/// Return indices of records that pass the site selection and, when given,
/// the payload range. Indices come back in table order.
pub fn filtered_indices(
    table: &LaunchTable,
    selection: &SiteSelection,
    range: Option<(f64, f64)>,
) -> Vec<usize> {
    table
        .records
        .iter()
        .enumerate()
        .filter(|(_, rec)| {
            if let Some(range) = range {
                if !in_payload_range(rec, range) {
                    return false;
                }
            }
            matches_site(rec, selection)
        })
        .map(|(i, _)| i)
        .collect()
}
