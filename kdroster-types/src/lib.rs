//! # kdroster-types
//!
//! Value types shared by the `kdroster` spatial index:
//!
//! - **Records**: `Record`, a located entry with identity fields and a 2D point
//! - **Axes**: `Axis`, the splitting axis chosen by tree depth
//! - **Statistics**: `IndexStats`, a snapshot of index size and shape
//!
//! All types are serializable with Serde and built on top of the `geo` crate's
//! `Point`.
//!
//! ## Examples
//!
//! ```rust
//! use kdroster_types::record::Record;
//! use geo::Point;
//!
//! let record = Record::new(1, "Ana", "48151623", "Sales", Point::new(0.0, 0.0));
//! assert_eq!(record.x(), 0.0);
//! ```

pub mod axis;
pub mod record;
pub mod stats;
