use crate::draw::Point;
use crate::util;

use super::LineTool;

/// A query closer than this to a stored line counts as touching the shape.
pub const CONTAINS_DISTANCE: f64 = 10.0;

impl LineTool {
    /// Checks whether `query` touches the line.
    ///
    /// Each consecutive pair of stored points (vertices and midpoints alike)
    /// defines an infinite line; the shape is hit when `query` is within
    /// [`CONTAINS_DISTANCE`] of any of them. Because the lines are unbounded, a
    /// point collinear with a segment but far past its ends still counts.
    pub fn contains(&self, query: Point) -> bool {
        self.points
            .as_slice()
            .windows(2)
            .any(|pair| util::distance_to_line(query, pair[0], pair[1]) < CONTAINS_DISTANCE)
    }

    /// Index of the first stored point whose hit circle contains `pointer`.
    pub fn hit_test(&self, pointer: Point) -> Option<usize> {
        let radius = self.style.hit_radius();
        self.points
            .iter()
            .position(|point| util::within_radius(pointer, *point, radius))
    }
}
