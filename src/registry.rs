//! Registration front end over the spatial index.
//!
//! `Registry` is what callers (the shell, tests, embedding code) talk to. It
//! owns the monotonic id counter and the [`SpatialIndex`], and exposes
//! register / search / nearest / remove / list.

use crate::builder::RegistryBuilder;
use crate::compute::text::contains_ignore_case;
use crate::config::Config;
use crate::error::Result;
use crate::index::SpatialIndex;
use geo::Point;
use kdroster_types::record::Record;
use kdroster_types::stats::IndexStats;

/// Roster of located records (single-threaded).
///
/// Ids start at `Config::first_id` (1 by default), increase by one per
/// registration and are never handed out twice, even after removal.
///
/// # Examples
///
/// ```rust
/// use kdroster::Registry;
///
/// let mut roster = Registry::new();
/// let ana = roster.register("Ana Torres", "45678912", "Sales", 0.0, 0.0);
/// roster.register("Bruno Diaz", "12345678", "Support", 10.0, 10.0);
///
/// assert_eq!(ana.id, 1);
/// assert_eq!(roster.nearest(1.0, 1.0).unwrap().name, "Ana Torres");
/// assert_eq!(roster.search_by_name("bruno").len(), 1);
///
/// assert!(roster.remove(ana.id));
/// assert_eq!(roster.list().len(), 1);
/// ```
#[derive(Debug)]
pub struct Registry {
    index: SpatialIndex,
    next_id: u64,
    config: Config,
}

impl Registry {
    /// Create an empty registry with default configuration.
    pub fn new() -> Self {
        Self::with_config(Config::default())
    }

    /// Builder for custom configuration.
    pub fn builder() -> RegistryBuilder {
        RegistryBuilder::new()
    }

    /// Create an empty registry from a configuration file (JSON or TOML).
    pub fn from_config_path(path: impl AsRef<std::path::Path>) -> Result<Self> {
        RegistryBuilder::new()
            .config(Config::from_path(path)?)
            .build()
    }

    pub(crate) fn with_config(config: Config) -> Self {
        log::info!("Creating registry (first id {})", config.first_id);
        Self {
            index: SpatialIndex::with_config(&config),
            next_id: config.first_id,
            config,
        }
    }

    /// Allocate the next id, build the record and insert it.
    pub fn register(
        &mut self,
        name: impl Into<String>,
        external_id: impl Into<String>,
        category: impl Into<String>,
        x: f64,
        y: f64,
    ) -> Record {
        let id = self.next_id;
        // first_id <= Config::MAX_FIRST_ID, so this cannot overflow
        self.next_id += 1;

        let record = Record::new(id, name, external_id, category, Point::new(x, y));
        self.index.insert(record.clone());
        record
    }

    /// Records whose name contains `query`, ignoring case, in insertion order.
    pub fn search_by_name(&self, query: &str) -> Vec<Record> {
        self.index
            .find(&|record: &Record| contains_ignore_case(&record.name, query))
    }

    /// Records whose external id contains `query`, ignoring case.
    pub fn search_by_external_id(&self, query: &str) -> Vec<Record> {
        self.index
            .find(&|record: &Record| contains_ignore_case(&record.external_id, query))
    }

    /// Closest record to `(x, y)`, or `None` when nothing is registered.
    pub fn nearest(&self, x: f64, y: f64) -> Option<Record> {
        self.index.nearest(&Point::new(x, y))
    }

    /// Remove the record with `id`. Returns `false` if no such record exists.
    pub fn remove(&mut self, id: u64) -> bool {
        self.index.remove(id)
    }

    /// All live records in registration order.
    pub fn list(&self) -> Vec<Record> {
        self.index.list_all()
    }

    pub fn len(&self) -> usize {
        self.index.len()
    }

    pub fn is_empty(&self) -> bool {
        self.index.is_empty()
    }

    pub fn stats(&self) -> IndexStats {
        self.index.stats()
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Id the next registration will receive.
    pub fn next_id(&self) -> u64 {
        self.next_id
    }
}

impl Default for Registry {
    fn default() -> Self {
        Self::new()
    }
}
