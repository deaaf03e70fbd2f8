//! Startup loading policy: binary snapshot first, text fallback second.

use std::fmt;
use std::path::Path;

use tracing::info;

use crate::inventory::Inventory;

use super::error::LoadError;
use super::{snapshot, text};

/// Which on-disk format an inventory came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadSource {
    Snapshot,
    TextFallback,
}

impl fmt::Display for LoadSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LoadSource::Snapshot => write!(f, "binary snapshot"),
            LoadSource::TextFallback => write!(f, "text fallback"),
        }
    }
}

/// An inventory fresh from disk, together with the format it came from.
#[derive(Debug)]
pub struct LoadedInventory {
    pub inventory: Inventory,
    pub source: LoadSource,
}

/// Loads the inventory with the startup preference order: the snapshot if
/// it exists, the text fallback otherwise. The text file is not consulted
/// at all when a snapshot is present, even a corrupt snapshot wins over a
/// readable fallback.
pub fn load_inventory(snapshot_path: &Path, text_path: &Path) -> Result<LoadedInventory, LoadError> {
    if snapshot_path.exists() {
        let records = snapshot::load_snapshot(snapshot_path)?;
        info!("Loaded {} records from snapshot {:?}", records.len(), snapshot_path);
        return Ok(LoadedInventory {
            inventory: Inventory::from_records(records),
            source: LoadSource::Snapshot,
        });
    }

    if text_path.exists() {
        let records = text::load_text(text_path)?;
        info!("Loaded {} records from text fallback {:?}", records.len(), text_path);
        return Ok(LoadedInventory {
            inventory: Inventory::from_records(records),
            source: LoadSource::TextFallback,
        });
    }

    Err(LoadError::NotFound {
        snapshot: snapshot_path.to_path_buf(),
        fallback: text_path.to_path_buf(),
    })
}
