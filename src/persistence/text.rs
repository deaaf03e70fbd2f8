//! Plain text fallback format, read-only.
//!
//! One record per line, three comma separated fields: id, title, artist.
//! There is no escaping, a comma inside a title or artist changes the
//! field count and the line no longer parses. Saves always go to the
//! binary snapshot, this format only survives for data written by older
//! versions of the tool.

use std::fs;
use std::path::Path;

use tracing::debug;

use crate::inventory::{parse_record_id, Record};

use super::error::{LineProblem, LoadError};

const FIELDS_PER_LINE: usize = 3;

pub fn load_text(path: &Path) -> Result<Vec<Record>, LoadError> {
    if !path.exists() {
        return Err(LoadError::FileNotFound {
            path: path.to_path_buf(),
        });
    }

    let content = fs::read_to_string(path).map_err(|source| LoadError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    let mut records = Vec::new();
    for (index, line) in content.lines().enumerate() {
        let record = parse_line(line).map_err(|problem| LoadError::MalformedLine {
            path: path.to_path_buf(),
            line: index + 1,
            problem,
        })?;
        records.push(record);
    }

    debug!("Loaded {} records from text file {:?}", records.len(), path);

    Ok(records)
}

/// Splits one line into the three record fields. The line as a whole is
/// trimmed, title and artist keep their interior whitespace as written.
fn parse_line(line: &str) -> Result<Record, LineProblem> {
    let fields: Vec<&str> = line.trim().split(',').collect();
    if fields.len() != FIELDS_PER_LINE {
        return Err(LineProblem::FieldCount(fields.len()));
    }
    let id = parse_record_id(fields[0])
        .map_err(|err| LineProblem::InvalidId(err.given().to_string()))?;
    Ok(Record::new(id, fields[1], fields[2]))
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn parses_the_three_fields() {
        let record = parse_line("7,Abbey Road,The Beatles").unwrap();
        assert_eq!(record, Record::new(7, "Abbey Road", "The Beatles"));
    }

    #[test]
    fn keeps_interior_whitespace_in_fields() {
        let record = parse_line("7, Abbey Road ,The Beatles").unwrap();
        assert_eq!(record.title, " Abbey Road ");
    }

    #[test]
    fn rejects_extra_fields() {
        let err = parse_line("7,Abbey Road, The Beatles, 1969").unwrap_err();
        assert_eq!(err, LineProblem::FieldCount(4));
    }

    #[test]
    fn rejects_missing_fields() {
        let err = parse_line("7,Abbey Road").unwrap_err();
        assert_eq!(err, LineProblem::FieldCount(2));
    }

    #[test]
    fn rejects_blank_line() {
        let err = parse_line("   ").unwrap_err();
        assert_eq!(err, LineProblem::FieldCount(1));
    }

    #[test]
    fn rejects_non_integer_id() {
        let err = parse_line("seven,Abbey Road,The Beatles").unwrap_err();
        assert_eq!(err, LineProblem::InvalidId("seven".to_string()));
    }

    #[test]
    fn loads_a_well_formed_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("CDInventory.txt");
        fs::write(&path, "1,Abbey Road,The Beatles\n2,Kind of Blue,Miles Davis\n").unwrap();

        let records = load_text(&path).unwrap();

        assert_eq!(records.len(), 2);
        assert_eq!(records[1], Record::new(2, "Kind of Blue", "Miles Davis"));
    }

    #[test]
    fn loads_a_crlf_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("CDInventory.txt");
        fs::write(&path, "1,Abbey Road,The Beatles\r\n2,Kind of Blue,Miles Davis\r\n").unwrap();

        let records = load_text(&path).unwrap();

        assert_eq!(records[0], Record::new(1, "Abbey Road", "The Beatles"));
        assert_eq!(records[1].artist, "Miles Davis");
    }

    #[test]
    fn empty_file_is_an_empty_collection() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("CDInventory.txt");
        fs::write(&path, "").unwrap();

        assert_eq!(load_text(&path).unwrap(), Vec::<Record>::new());
    }

    #[test]
    fn malformed_line_fails_the_whole_load() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("CDInventory.txt");
        fs::write(&path, "1,OK Computer,Radiohead\ntwo,Blue,Joni Mitchell\n").unwrap();

        let err = load_text(&path).unwrap_err();

        match err {
            LoadError::MalformedLine { line, problem, .. } => {
                assert_eq!(line, 2);
                assert_eq!(problem, LineProblem::InvalidId("two".to_string()));
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn missing_file_is_file_not_found() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("CDInventory.txt");

        let result = load_text(&path);

        assert!(matches!(result, Err(LoadError::FileNotFound { .. })));
    }
}
