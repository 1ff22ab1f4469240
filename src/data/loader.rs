use std::fs::File;
use std::path::{Path, PathBuf};

use super::model::{Dataset, Record};

// ---------------------------------------------------------------------------
// Errors
// ---------------------------------------------------------------------------

/// Failures while reading the index CSV. All of them are fatal at startup.
#[derive(Debug, thiserror::Error)]
pub enum LoadError {
    #[error("cannot open {path}")]
    Open {
        path: PathBuf,
        source: std::io::Error,
    },

    /// A header is missing or a cell does not parse.
    #[error("malformed CSV in {path} at line {line}")]
    Csv {
        path: PathBuf,
        line: u64,
        source: csv::Error,
    },
}

// ---------------------------------------------------------------------------
// Public entry-point
// ---------------------------------------------------------------------------

/// Read the whole index file into memory.
///
/// Expected header (any order, extra columns ignored):
///
/// ```text
/// Year,Week,area,SMN,SMT,VCI,TCI,VHI
/// ```
pub fn load_csv(path: &Path) -> Result<Dataset, LoadError> {
    let file = File::open(path).map_err(|source| LoadError::Open {
        path: path.to_path_buf(),
        source,
    })?;

    let mut reader = csv::ReaderBuilder::new().trim(csv::Trim::All).from_reader(file);

    let mut records = Vec::new();
    for result in reader.deserialize::<Record>() {
        let record = result.map_err(|source| LoadError::Csv {
            path: path.to_path_buf(),
            line: source.position().map(|p| p.line()).unwrap_or(0),
            source,
        })?;
        records.push(record);
    }

    if records.is_empty() {
        log::warn!("{} has a header but no data rows", path.display());
    }

    log::debug!("parsed {} records from {}", records.len(), path.display());
    Ok(Dataset::new(records))
}
