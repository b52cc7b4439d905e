//! In-memory roster of located records with a 2D k-d tree for nearest-neighbor lookup.
//!
//! ## Features
//! - **Spatial index**: unbalanced 2D k-d tree with branch-and-bound nearest-neighbor search
//! - **Rebuild on delete**: removals rebuild the tree from the record store, in store order
//! - **Attribute search**: case-insensitive substring match on name or external id
//! - **Interactive shell**: text menu over any `BufRead`/`Write` pair (the `kdroster` binary)
//!
//! ```rust
//! use kdroster::Registry;
//!
//! let mut roster = Registry::new();
//! roster.register("A", "0001", "Ops", 0.0, 0.0);
//! roster.register("B", "0002", "Ops", 10.0, 10.0);
//! let c = roster.register("C", "0003", "Ops", 1.0, 1.0);
//!
//! assert_eq!(roster.nearest(0.5, 0.5).unwrap().name, "A");
//! roster.remove(1);
//! assert_eq!(roster.nearest(0.5, 0.5).unwrap().id, c.id);
//! ```

pub mod builder;
pub mod compute;
pub mod config;
pub mod error;
pub mod index;
pub mod registry;
pub mod shell;
pub mod store;

pub use builder::RegistryBuilder;
pub use config::Config;
pub use error::{Result, RosterError};
pub use index::{KdTree, SpatialIndex};
pub use registry::Registry;
pub use shell::{OutputFormat, Shell};
pub use store::{MemoryStore, RecordStore};

pub use geo::Point;
pub use kdroster_types::axis::Axis;
pub use kdroster_types::record::Record;
pub use kdroster_types::stats::IndexStats;

pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Common imports
pub mod prelude {

    pub use crate::{Config, RegistryBuilder, Result, RosterError};

    pub use crate::{IndexStats, Point, Record, Registry};

    pub use crate::{KdTree, MemoryStore, RecordStore, SpatialIndex};

    pub use crate::compute::distance::euclidean;
}
