//! Planar distances used by nearest-neighbor search.

use geo::{Distance, Euclidean, Point};
use kdroster_types::axis::Axis;

/// Straight-line distance between two points in the plane.
///
/// ```
/// use kdroster::compute::distance::euclidean;
/// use geo::Point;
///
/// let d = euclidean(&Point::new(0.0, 0.0), &Point::new(3.0, 4.0));
/// assert!((d - 5.0).abs() < 1e-12);
/// ```
#[inline]
pub fn euclidean(a: &Point<f64>, b: &Point<f64>) -> f64 {
    Euclidean.distance(*a, *b)
}

/// Distance from `target` to the splitting plane through `node` along `axis`.
///
/// Only the active axis contributes. This is a lower bound on the distance
/// from `target` to any point on the far side of the plane.
#[inline]
pub fn plane_distance(axis: Axis, target: &Point<f64>, node: &Point<f64>) -> f64 {
    (axis.coord(target) - axis.coord(node)).abs()
}
