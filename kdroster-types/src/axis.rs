use geo::Point;
use serde::{Deserialize, Serialize};

/// Splitting axis of a 2D partition tree.
///
/// Even depths split on `X`, odd depths on `Y`.
///
/// ```
/// use kdroster_types::axis::Axis;
/// use geo::Point;
///
/// assert_eq!(Axis::for_depth(0), Axis::X);
/// assert_eq!(Axis::for_depth(3), Axis::Y);
/// assert_eq!(Axis::Y.coord(&Point::new(1.0, 2.0)), 2.0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Axis {
    X,
    Y,
}

impl Axis {
    /// Axis used by nodes at `depth` (root depth is 0).
    #[inline]
    pub fn for_depth(depth: usize) -> Self {
        if depth % 2 == 0 { Axis::X } else { Axis::Y }
    }

    /// Coordinate of `point` along this axis.
    #[inline]
    pub fn coord(self, point: &Point<f64>) -> f64 {
        match self {
            Axis::X => point.x(),
            Axis::Y => point.y(),
        }
    }

    pub fn next(self) -> Self {
        match self {
            Axis::X => Axis::Y,
            Axis::Y => Axis::X,
        }
    }
}
