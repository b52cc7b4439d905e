//! Compute layer: distance metrics, text matching and input validation.
//!
//! These helpers are independent of the tree and the store. The index uses
//! `distance` for search and pruning; `text` backs attribute search; and
//! `validation` is for input layers that turn user text into coordinates.

pub mod distance;
pub mod text;
pub mod validation;
