// src/io/json.rs

use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use crate::error::DatasetError;
use crate::model::ElementRecord;

/// Decodes a JSON array of element objects and checks per-record sanity.
pub fn parse_str(text: &str) -> Result<Vec<ElementRecord>, DatasetError> {
    let records: Vec<ElementRecord> = serde_json::from_str(text)?;
    validate(&records)?;
    Ok(records)
}

pub fn parse_file(path: &Path) -> Result<Vec<ElementRecord>, DatasetError> {
    let file = File::open(path).map_err(|e| DatasetError::Io {
        path: path.to_path_buf(),
        source: e,
    })?;
    let reader = BufReader::new(file);
    let records: Vec<ElementRecord> = serde_json::from_reader(reader)?;
    validate(&records)?;
    Ok(records)
}

fn validate(records: &[ElementRecord]) -> Result<(), DatasetError> {
    for r in records {
        let invalid = |reason: &str| DatasetError::Invalid {
            atomic_number: r.atomic_number,
            reason: reason.to_string(),
        };

        if r.atomic_number == 0 {
            return Err(invalid("atomic number must be positive"));
        }
        if r.symbol.trim().is_empty() {
            return Err(invalid("symbol is empty"));
        }
        if r.name.trim().is_empty() {
            return Err(invalid("name is empty"));
        }
        if !(r.atomic_weight.is_finite() && r.atomic_weight > 0.0) {
            return Err(invalid("atomic weight must be a positive number"));
        }
    }
    Ok(())
}
