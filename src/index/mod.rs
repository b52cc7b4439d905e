//! Spatial index over the record store.
//!
//! `SpatialIndex` keeps a [`KdTree`] and a [`RecordStore`] consistent:
//! every insert goes to both, and every successful removal deletes from the
//! store and then rebuilds the tree from the store's current sequence.
//! There is no incremental deletion; rebuilding in store order keeps tree
//! shape, and therefore tie-breaking, a function of that order alone.

mod kdtree;

pub use kdtree::KdTree;

use crate::config::Config;
use crate::store::{MemoryStore, RecordStore};
use geo::Point;
use kdroster_types::record::Record;
use kdroster_types::stats::IndexStats;

/// 2D nearest-neighbor index backed by a record store.
///
/// # Examples
///
/// ```
/// use kdroster::index::SpatialIndex;
/// use kdroster_types::record::Record;
/// use geo::Point;
///
/// let mut index = SpatialIndex::new();
/// index.insert(Record::new(1, "A", "1", "x", Point::new(0.0, 0.0)));
/// index.insert(Record::new(2, "B", "2", "x", Point::new(10.0, 10.0)));
///
/// assert_eq!(index.nearest(&Point::new(1.0, 2.0)).unwrap().id, 1);
/// assert!(index.remove(1));
/// assert_eq!(index.nearest(&Point::new(1.0, 2.0)).unwrap().id, 2);
/// ```
#[derive(Debug)]
pub struct SpatialIndex<S: RecordStore = MemoryStore> {
    tree: KdTree,
    store: S,
    stats: IndexStats,
    rebuild_warn_threshold: usize,
}

impl SpatialIndex<MemoryStore> {
    /// Create an empty index with default configuration.
    pub fn new() -> Self {
        Self::with_config(&Config::default())
    }

    pub fn with_config(config: &Config) -> Self {
        let mut index = Self::with_store(MemoryStore::with_capacity(config.capacity_hint));
        index.rebuild_warn_threshold = config.rebuild_warn_threshold;
        index
    }
}

impl Default for SpatialIndex<MemoryStore> {
    fn default() -> Self {
        Self::new()
    }
}

impl<S: RecordStore> SpatialIndex<S> {
    /// Wrap an existing store, building the tree from its current contents.
    pub fn with_store(store: S) -> Self {
        let tree = KdTree::from_records(store.iter().cloned());
        Self {
            tree,
            store,
            stats: IndexStats::new(),
            rebuild_warn_threshold: Config::default().rebuild_warn_threshold,
        }
    }

    /// Insert a record into the tree and append it to the store.
    ///
    /// Never rejects: duplicate ids, names and coordinates are all accepted.
    pub fn insert(&mut self, record: Record) {
        log::trace!(
            "Inserting record {} at ({}, {})",
            record.id,
            record.x(),
            record.y()
        );
        self.tree.insert(record.clone());
        self.store.append(record);
        self.stats.record_operation();
    }

    /// Closest record to `target`, or `None` when the index is empty.
    pub fn nearest(&self, target: &Point<f64>) -> Option<Record> {
        let (best, visited) = self.tree.nearest_with_visits(target);
        log::trace!(
            "Nearest query at ({}, {}) visited {} of {} nodes",
            target.x(),
            target.y(),
            visited,
            self.tree.len()
        );
        best.cloned()
    }

    /// Remove every record with `id` and rebuild the tree.
    ///
    /// Returns `false`, leaving the index untouched, when no record matches.
    pub fn remove(&mut self, id: u64) -> bool {
        if !self.store.remove_by_id(id) {
            log::debug!("Remove of unknown id {} ignored", id);
            return false;
        }
        self.stats.record_operation();
        self.rebuild();
        true
    }

    /// Discard the tree and re-insert every stored record in store order.
    pub fn rebuild(&mut self) {
        let count = self.store.len();
        if count > self.rebuild_warn_threshold {
            log::warn!(
                "Rebuilding spatial index over {} records (threshold {}). \
                 Every removal pays a full rebuild.",
                count,
                self.rebuild_warn_threshold
            );
        } else {
            log::debug!("Rebuilding spatial index over {} records", count);
        }

        self.tree.clear();
        for record in self.store.iter() {
            self.tree.insert(record.clone());
        }
        self.stats.record_rebuild();
    }

    /// All records in insertion order (the store's sequence, not a tree walk).
    pub fn list_all(&self) -> Vec<Record> {
        self.store.all()
    }

    /// Records matching `predicate`, in store order.
    pub fn find(&self, predicate: &dyn Fn(&Record) -> bool) -> Vec<Record> {
        self.store.find_by_predicate(predicate)
    }

    pub fn len(&self) -> usize {
        self.store.len()
    }

    pub fn is_empty(&self) -> bool {
        self.store.is_empty()
    }

    pub fn stats(&self) -> IndexStats {
        IndexStats {
            records: self.store.len(),
            depth: self.tree.depth(),
            ..self.stats.clone()
        }
    }

    pub fn store(&self) -> &S {
        &self.store
    }
}
