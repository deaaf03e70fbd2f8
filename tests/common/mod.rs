//! Shared fixtures for the integration tests.

use std::fs;
use std::path::{Path, PathBuf};

use tempfile::TempDir;

use cd_inventory::inventory::Record;

pub const SNAPSHOT_FILE: &str = "CDInventory.dat";
pub const TEXT_FILE: &str = "CDInventory.txt";

pub fn sample_records() -> Vec<Record> {
    vec![
        Record::new(1, "Abbey Road", "The Beatles"),
        Record::new(2, "Kind of Blue", "Miles Davis"),
        Record::new(3, "Rumours", "Fleetwood Mac"),
    ]
}

pub fn data_dir() -> TempDir {
    TempDir::new().unwrap()
}

pub fn snapshot_path(dir: &TempDir) -> PathBuf {
    dir.path().join(SNAPSHOT_FILE)
}

pub fn text_path(dir: &TempDir) -> PathBuf {
    dir.path().join(TEXT_FILE)
}

pub fn write_text_file(path: &Path, lines: &[&str]) {
    let mut content = lines.join("\n");
    content.push('\n');
    fs::write(path, content).unwrap();
}
