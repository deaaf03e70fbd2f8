use super::Record;

/// The in-memory record collection for one session. Ordered, grown by
/// appending, persisted only through the `persistence` module.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Inventory {
    records: Vec<Record>,
}

impl Inventory {
    pub fn new() -> Self {
        Inventory {
            records: Vec::new(),
        }
    }

    pub fn from_records(records: Vec<Record>) -> Self {
        Inventory { records }
    }

    pub fn into_records(self) -> Vec<Record> {
        self.records
    }

    pub fn records(&self) -> &[Record] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Appends a record at the end. Duplicate ids are allowed and kept in
    /// insertion order.
    pub fn add(&mut self, record: Record) {
        self.records.push(record);
    }

    /// Removes the first record whose id matches and returns it. `None`
    /// means no record matched, which is a normal outcome rather than an
    /// error. Later records with the same id stay untouched.
    pub fn remove_first(&mut self, id: i64) -> Option<Record> {
        let position = self.records.iter().position(|record| record.id == id)?;
        Some(self.records.remove(position))
    }
}
