use std::fs::File;
use std::io::Read;
use std::path::Path;

use anyhow::{Context, Result};
use serde::Deserialize;

use super::model::{DataError, LaunchRecord, LaunchTable, Outcome};

// ---------------------------------------------------------------------------
// Public entry-point
// ---------------------------------------------------------------------------

/// Load a launch-record dataset from a file.  Dispatch by extension.
///
/// Supported formats:
/// * `.csv`  – header row with the column names below
/// * `.json` – records-oriented array, as written by
///   `df.to_json(orient='records')`
///
/// Required columns/keys: `Launch Site`, `Payload Mass (kg)`, `class`
/// (0 = failure, 1 = success), `Booster Version Category`.  Any other
/// columns are ignored.
pub fn load_file(path: &Path) -> Result<LaunchTable> {
    let ext = path
        .extension()
        .and_then(|e| e.to_str())
        .unwrap_or("")
        .to_ascii_lowercase();

    match ext.as_str() {
        "csv" => load_csv(path),
        "json" => load_json(path),
        other => Err(DataError::UnsupportedExtension(other.to_string()).into()),
    }
}

// ---------------------------------------------------------------------------
// Row schema
// ---------------------------------------------------------------------------

/// One raw row as it appears in the source file, before outcome decoding.
#[derive(Debug, Deserialize)]
struct RawRecord {
    #[serde(rename = "Launch Site")]
    launch_site: String,
    #[serde(rename = "Payload Mass (kg)")]
    payload_mass_kg: f64,
    #[serde(rename = "class")]
    class: i64,
    #[serde(rename = "Booster Version Category")]
    booster_category: String,
}

impl RawRecord {
    fn into_record(self, row: usize) -> Result<LaunchRecord, DataError> {
        Ok(LaunchRecord {
            site: self.launch_site,
            payload_mass_kg: self.payload_mass_kg,
            outcome: Outcome::from_class(self.class, row)?,
            booster_category: self.booster_category,
        })
    }
}

// ---------------------------------------------------------------------------
// CSV loader
// ---------------------------------------------------------------------------

fn load_csv(path: &Path) -> Result<LaunchTable> {
    let file = File::open(path).context("opening CSV file")?;
    read_csv(file)
}

fn read_csv<R: Read>(reader: R) -> Result<LaunchTable> {
    let mut rdr = csv::Reader::from_reader(reader);

    let mut records = Vec::new();
    for (row, result) in rdr.deserialize::<RawRecord>().enumerate() {
        let raw = result.with_context(|| format!("CSV row {row}"))?;
        records.push(raw.into_record(row)?);
    }

    Ok(LaunchTable::from_records(records)?)
}

// ---------------------------------------------------------------------------
// JSON loader
// ---------------------------------------------------------------------------

/// Expected JSON schema (records-oriented):
///
/// ```json
/// [
///   {
///     "Launch Site": "CCAFS LC-40",
///     "Payload Mass (kg)": 2500.0,
///     "class": 1,
///     "Booster Version Category": "FT"
///   },
///   ...
/// ]
/// ```
fn load_json(path: &Path) -> Result<LaunchTable> {
    let text = std::fs::read_to_string(path).context("reading JSON file")?;
    read_json(&text)
}

fn read_json(text: &str) -> Result<LaunchTable> {
    let raw: Vec<RawRecord> = serde_json::from_str(text).context("parsing JSON records")?;

    let mut records = Vec::with_capacity(raw.len());
    for (row, rec) in raw.into_iter().enumerate() {
        records.push(rec.into_record(row)?);
    }

    Ok(LaunchTable::from_records(records)?)
}

#[cfg(test)]
mod tests {
    use super::*;

    const CSV: &str = "\
Flight Number,Launch Site,Payload Mass (kg),class,Booster Version Category
1,CCAFS LC-40,500.0,1,v1.0
2,CCAFS LC-40,6000.0,0,FT
3,VAFB SLC-4E,12000.0,1,FT
";

    #[test]
    fn csv_happy_path_ignores_extra_columns() {
        let table = read_csv(CSV.as_bytes()).unwrap();
        assert_eq!(table.len(), 3);
        assert_eq!(table.sites, vec!["CCAFS LC-40", "VAFB SLC-4E"]);
        assert_eq!(table.payload_bounds, (500.0, 12000.0));
        assert_eq!(table.records[1].outcome, Outcome::Failure);
        assert_eq!(table.records[2].booster_category, "FT");
    }

    #[test]
    fn csv_missing_column_fails() {
        let csv = "Launch Site,class\nCCAFS,1\n";
        assert!(read_csv(csv.as_bytes()).is_err());
    }

    #[test]
    fn csv_bad_class_value_fails() {
        let csv = "\
Launch Site,Payload Mass (kg),class,Booster Version Category
CCAFS,500.0,3,v1.0
";
        let err = read_csv(csv.as_bytes()).unwrap_err();
        assert!(err.to_string().contains("must be 0 or 1"));
    }

    #[test]
    fn csv_no_rows_fails() {
        let csv = "Launch Site,Payload Mass (kg),class,Booster Version Category\n";
        let err = read_csv(csv.as_bytes()).unwrap_err();
        assert!(err.to_string().contains("no launch records"));
    }

    #[test]
    fn json_records_orient() {
        let json = r#"[
            {"Launch Site": "KSC LC-39A", "Payload Mass (kg)": 3000.0,
             "class": 1, "Booster Version Category": "B5"},
            {"Launch Site": "KSC LC-39A", "Payload Mass (kg)": 9000.0,
             "class": 0, "Booster Version Category": "B4"}
        ]"#;
        let table = read_json(json).unwrap();
        assert_eq!(table.len(), 2);
        assert_eq!(table.booster_categories, vec!["B5", "B4"]);
    }

    #[test]
    fn unsupported_extension_fails() {
        let err = load_file(Path::new("launches.parquet")).unwrap_err();
        assert!(err.to_string().contains("unsupported file extension"));
    }
}
