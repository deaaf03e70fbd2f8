use serde::{Deserialize, Serialize};
use std::num::ParseIntError;
use thiserror::Error;

/// Raised when the raw id text typed at a prompt, or read from the text
/// fallback file, is not an integer.
#[derive(Debug, Error, PartialEq, Eq)]
#[error("{given:?} is not a valid record id, expected an integer")]
pub struct InvalidIdError {
    given: String,
    source: ParseIntError,
}

impl InvalidIdError {
    pub fn given(&self) -> &str {
        &self.given
    }
}

/// One CD in the collection. Ids carry no meaning beyond lookup and are
/// not required to be unique.
#[derive(Clone, Serialize, Deserialize, Debug, PartialEq, Eq)]
pub struct Record {
    pub id: i64,
    pub title: String,
    pub artist: String,
}

impl Record {
    pub fn new(id: i64, title: impl Into<String>, artist: impl Into<String>) -> Self {
        Record {
            id,
            title: title.into(),
            artist: artist.into(),
        }
    }

    /// Builds a record from the three raw text fields of the add prompt.
    /// Only the id has structure to validate, title and artist are taken
    /// verbatim.
    pub fn parse(raw_id: &str, title: &str, artist: &str) -> Result<Self, InvalidIdError> {
        let id = parse_record_id(raw_id)?;
        Ok(Record::new(id, title, artist))
    }
}

/// Parses a record id, tolerating surrounding whitespace the way the
/// interactive prompts hand it over.
pub fn parse_record_id(raw: &str) -> Result<i64, InvalidIdError> {
    raw.trim().parse::<i64>().map_err(|source| InvalidIdError {
        given: raw.trim().to_string(),
        source,
    })
}
