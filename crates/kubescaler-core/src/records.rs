//! Scale-target record loading.
//!
//! A listing is a headerless CSV file (the Lens "workload deployments"
//! export) with six positional columns:
//!
//! ```text
//! name,namespace,pods,replicas,age,condition
//! web,default,3/3,3,10,Ready
//! ```
//!
//! Rows come back in file order. Lines that are empty or hold only
//! whitespace and delimiters are skipped. Any malformed row fails the
//! whole load; numeric columns are never coerced.

use std::fs::File;
use std::io::{self, Read};
use std::path::{Path, PathBuf};

use thiserror::Error;
use tracing::debug;

use crate::types::ScaleTarget;

/// Number of positional columns in a listing row.
pub const FIELD_COUNT: usize = 6;

/// Errors produced while loading a workload listing.
#[derive(Debug, Error)]
pub enum RecordError {
    #[error("failed to open record file {}: {source}", path.display())]
    Load {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("failed to read records: {0}")]
    Read(#[source] io::Error),

    /// `row` is the 1-based line in the file where the record starts,
    /// so skipped blank lines still count.
    #[error("malformed record at row {row}: {reason}")]
    Format { row: usize, reason: String },
}

/// Load every scale target from the listing at `path`.
pub fn load_targets(path: &Path) -> Result<Vec<ScaleTarget>, RecordError> {
    let file = File::open(path).map_err(|source| RecordError::Load {
        path: path.to_path_buf(),
        source,
    })?;
    let targets = read_targets(file)?;
    debug!(path = %path.display(), count = targets.len(), "loaded scale targets");
    Ok(targets)
}

/// Parse scale targets from any CSV source.
pub fn read_targets<R: Read>(reader: R) -> Result<Vec<ScaleTarget>, RecordError> {
    let mut csv = csv::ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .trim(csv::Trim::All)
        .from_reader(reader);

    let mut targets = Vec::new();
    for record in csv.records() {
        let record = record.map_err(|e| {
            let row = e.position().map_or(0, |pos| pos.line() as usize);
            decode_error(row, e)
        })?;
        let row = record.position().map_or(0, |pos| pos.line() as usize);

        if record.iter().all(str::is_empty) {
            continue;
        }

        if record.len() != FIELD_COUNT {
            return Err(RecordError::Format {
                row,
                reason: format!("expected {FIELD_COUNT} fields, found {}", record.len()),
            });
        }

        let target: ScaleTarget = record
            .deserialize(None)
            .map_err(|e| decode_error(row, e))?;

        if target.name.is_empty() {
            return Err(RecordError::Format {
                row,
                reason: "name is empty".to_string(),
            });
        }
        if target.namespace.is_empty() {
            return Err(RecordError::Format {
                row,
                reason: "namespace is empty".to_string(),
            });
        }

        targets.push(target);
    }

    Ok(targets)
}

fn decode_error(row: usize, err: csv::Error) -> RecordError {
    let reason = err.to_string();
    match err.into_kind() {
        csv::ErrorKind::Io(source) => RecordError::Read(source),
        _ => RecordError::Format { row, reason },
    }
}
