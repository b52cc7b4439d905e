//! Record store abstraction for kdroster
//!
//! The store holds the canonical, insertion-ordered sequence of live
//! records. The spatial index is derived from it and is rebuilt from it
//! after every removal.

use kdroster_types::record::Record;

/// Trait for record store implementations
///
/// Implementations must preserve insertion order across removals of other
/// records: rebuilding the index replays `iter()` in that order, and tree
/// shape (and therefore tie-breaking) depends on it.
pub trait RecordStore {
    /// Append a record at the end of the sequence. No uniqueness check.
    fn append(&mut self, record: Record);

    /// Remove every record with `id`; returns whether anything was removed.
    fn remove_by_id(&mut self, id: u64) -> bool;

    /// Copy of all records in insertion order
    fn all(&self) -> Vec<Record>;

    /// Records for which `predicate` holds, in store order
    fn find_by_predicate(&self, predicate: &dyn Fn(&Record) -> bool) -> Vec<Record>;

    /// Iterator over all records in insertion order
    fn iter(&self) -> Box<dyn Iterator<Item = &Record> + '_>;

    /// Number of live records
    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// In-memory record store backed by a `Vec`
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    records: Vec<Record>,
}

impl MemoryStore {
    /// Create a new empty store
    pub fn new() -> Self {
        Self::default()
    }

    /// Create with an initial capacity
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            records: Vec::with_capacity(capacity),
        }
    }
}

impl RecordStore for MemoryStore {
    fn append(&mut self, record: Record) {
        self.records.push(record);
    }

    fn remove_by_id(&mut self, id: u64) -> bool {
        let before = self.records.len();
        self.records.retain(|record| record.id != id);
        self.records.len() != before
    }

    fn all(&self) -> Vec<Record> {
        self.records.clone()
    }

    fn find_by_predicate(&self, predicate: &dyn Fn(&Record) -> bool) -> Vec<Record> {
        self.records
            .iter()
            .filter(|record| predicate(*record))
            .cloned()
            .collect()
    }

    fn iter(&self) -> Box<dyn Iterator<Item = &Record> + '_> {
        Box::new(self.records.iter())
    }

    fn len(&self) -> usize {
        self.records.len()
    }
}
