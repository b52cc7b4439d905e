use geo::Point;
use serde::{Deserialize, Serialize};
use std::fmt;

/// A located record: immutable identity fields plus a 2D coordinate.
///
/// Records are plain values. Indexes store them by value and hand out
/// clones, never references into their internal nodes.
///
/// # Examples
///
/// ```
/// use kdroster_types::record::Record;
/// use geo::Point;
///
/// let record = Record::new(7, "Luis Ramos", "70112233", "Logistics", Point::new(-12.04, -77.03));
/// assert_eq!(record.id, 7);
/// assert_eq!(record.y(), -77.03);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Record {
    /// Identity, unique among live records of one registry
    pub id: u64,
    pub name: String,
    /// Identifier issued outside this system (e.g. a national id number)
    pub external_id: String,
    pub category: String,
    /// Coordinate as (x, y)
    pub location: Point<f64>,
}

impl Record {
    pub fn new(
        id: u64,
        name: impl Into<String>,
        external_id: impl Into<String>,
        category: impl Into<String>,
        location: Point<f64>,
    ) -> Self {
        Self {
            id,
            name: name.into(),
            external_id: external_id.into(),
            category: category.into(),
            location,
        }
    }

    /// Get the x coordinate.
    pub fn x(&self) -> f64 {
        self.location.x()
    }

    /// Get the y coordinate.
    pub fn y(&self) -> f64 {
        self.location.y()
    }

    pub fn location(&self) -> &Point<f64> {
        &self.location
    }
}

impl fmt::Display for Record {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "ID: {}, Name: {}, External ID: {}, Category: {}, Location: ({}, {})",
            self.id,
            self.name,
            self.external_id,
            self.category,
            self.x(),
            self.y()
        )
    }
}
