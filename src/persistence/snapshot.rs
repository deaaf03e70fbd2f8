//! Binary whole-inventory snapshot, the primary persistence format.
//!
//! The ordered record sequence is serialized with bincode in a single
//! blob. Saving writes a sibling temp file first and renames it over the
//! target, so an interrupted write never leaves a half-written snapshot
//! behind.

use std::fs;
use std::path::Path;

use tracing::debug;

use crate::inventory::Record;

use super::error::{LoadError, SaveError};

pub fn load_snapshot(path: &Path) -> Result<Vec<Record>, LoadError> {
    if !path.exists() {
        return Err(LoadError::FileNotFound {
            path: path.to_path_buf(),
        });
    }

    let bytes = fs::read(path).map_err(|source| LoadError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    let records: Vec<Record> =
        bincode::deserialize(&bytes).map_err(|e| LoadError::CorruptSnapshot {
            path: path.to_path_buf(),
            detail: e.to_string(),
        })?;

    debug!("Loaded {} records from snapshot {:?}", records.len(), path);

    Ok(records)
}

pub fn save_snapshot(path: &Path, records: &[Record]) -> Result<(), SaveError> {
    let bytes = bincode::serialize(records).map_err(|e| SaveError::Encode(e.to_string()))?;

    let temp_path = path.with_extension("dat.tmp");
    fs::write(&temp_path, bytes).map_err(|source| SaveError::Io {
        path: temp_path.clone(),
        source,
    })?;
    fs::rename(&temp_path, path).map_err(|source| SaveError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    debug!("Saved {} records to snapshot {:?}", records.len(), path);

    Ok(())
}
