//! Ordered point storage for polylines.
//!
//! Entries alternate roles: even indices hold user-placed vertices and odd
//! indices hold the midpoints between them, e.g. `[P0, M0, P1, M1, P2]`.
//! The container itself does not enforce the alternation; the line tool
//! maintains it through the index-addressed insert and remove operations
//! offered here.

use super::point::Point;
use thiserror::Error;

/// Errors raised by [`PointSequence`] mutations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum SequenceError {
    #[error("cannot remove from an empty point sequence")]
    Empty,
}

/// Array-backed, index-addressable sequence of points.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PointSequence {
    points: Vec<Point>,
}

impl PointSequence {
    /// Creates an empty sequence.
    pub fn new() -> Self {
        Self { points: Vec::new() }
    }

    /// Number of stored points.
    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Returns the point at `index`, or `None` when the index is past the end.
    pub fn get(&self, index: usize) -> Option<Point> {
        self.points.get(index).copied()
    }

    /// Mutable access for in-place edits (dragging, midpoint recompute).
    pub fn get_mut(&mut self, index: usize) -> Option<&mut Point> {
        self.points.get_mut(index)
    }

    /// Most recently stored point.
    pub fn last(&self) -> Option<Point> {
        self.points.last().copied()
    }

    /// Appends a point at the tail.
    pub fn push(&mut self, point: Point) {
        self.points.push(point);
    }

    /// Inserts `point` directly after position `index`.
    ///
    /// `None` inserts a new head. An index at or beyond the last position
    /// appends, so callers never have to special-case the tail.
    pub fn insert_after(&mut self, index: Option<usize>, point: Point) {
        match index {
            None => self.points.insert(0, point),
            Some(i) if i + 1 >= self.points.len() => self.points.push(point),
            Some(i) => self.points.insert(i + 1, point),
        }
    }

    /// Removes and returns the point at `index`.
    ///
    /// Index `0` removes the head and any index at or past the last position
    /// removes the tail.
    ///
    /// # Errors
    /// Returns [`SequenceError::Empty`] when there is nothing to remove.
    pub fn remove_at(&mut self, index: usize) -> Result<Point, SequenceError> {
        if self.points.is_empty() {
            return Err(SequenceError::Empty);
        }
        let index = index.min(self.points.len() - 1);
        Ok(self.points.remove(index))
    }

    /// Forward iterator over every stored point.
    pub fn iter(&self) -> std::slice::Iter<'_, Point> {
        self.points.iter()
    }

    /// Iterator over the vertices (even indices).
    pub fn vertices(&self) -> impl Iterator<Item = Point> + '_ {
        self.points.iter().step_by(2).copied()
    }

    /// Iterator over the midpoints (odd indices).
    pub fn midpoints(&self) -> impl Iterator<Item = Point> + '_ {
        self.points.iter().skip(1).step_by(2).copied()
    }

    pub fn as_slice(&self) -> &[Point] {
        &self.points
    }
}

impl<'a> IntoIterator for &'a PointSequence {
    type Item = &'a Point;
    type IntoIter = std::slice::Iter<'a, Point>;

    fn into_iter(self) -> Self::IntoIter {
        self.points.iter()
    }
}

impl FromIterator<Point> for PointSequence {
    fn from_iter<I: IntoIterator<Item = Point>>(iter: I) -> Self {
        Self {
            points: iter.into_iter().collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn seq(xs: &[f64]) -> PointSequence {
        xs.iter().map(|&x| Point::new(x, 0.0)).collect()
    }

    fn xs(seq: &PointSequence) -> Vec<f64> {
        seq.iter().map(|p| p.x).collect()
    }

    #[test]
    fn get_out_of_bounds_is_none() {
        let empty = PointSequence::new();
        assert_eq!(empty.get(0), None);

        let s = seq(&[1.0, 2.0]);
        assert_eq!(s.get(1), Some(Point::new(2.0, 0.0)));
        assert_eq!(s.get(2), None);
    }

    #[test]
    fn insert_after_none_becomes_head() {
        let mut s = seq(&[1.0, 2.0]);
        s.insert_after(None, Point::new(0.0, 0.0));
        assert_eq!(xs(&s), vec![0.0, 1.0, 2.0]);
    }

    #[test]
    fn insert_after_interior_keeps_following_order() {
        let mut s = seq(&[0.0, 1.0, 3.0, 4.0]);
        s.insert_after(Some(1), Point::new(2.0, 0.0));
        assert_eq!(xs(&s), vec![0.0, 1.0, 2.0, 3.0, 4.0]);
    }

    #[test]
    fn insert_after_past_end_appends() {
        let mut s = seq(&[0.0, 1.0]);
        s.insert_after(Some(1), Point::new(2.0, 0.0));
        s.insert_after(Some(10), Point::new(3.0, 0.0));
        assert_eq!(xs(&s), vec![0.0, 1.0, 2.0, 3.0]);

        let mut empty = PointSequence::new();
        empty.insert_after(Some(0), Point::new(7.0, 0.0));
        assert_eq!(xs(&empty), vec![7.0]);
    }

    #[test]
    fn remove_at_clamps_to_tail_and_head() {
        let mut s = seq(&[0.0, 1.0, 2.0, 3.0]);
        assert_eq!(s.remove_at(99), Ok(Point::new(3.0, 0.0)));
        assert_eq!(s.remove_at(0), Ok(Point::new(0.0, 0.0)));
        assert_eq!(s.remove_at(1), Ok(Point::new(2.0, 0.0)));
        assert_eq!(xs(&s), vec![1.0]);
    }

    #[test]
    fn remove_from_empty_is_an_error() {
        let mut s = seq(&[5.0]);
        assert!(s.remove_at(0).is_ok());
        assert_eq!(s.remove_at(0), Err(SequenceError::Empty));
        assert!(s.is_empty());
    }

    #[test]
    fn vertex_and_midpoint_views_split_by_parity() {
        let s = seq(&[0.0, 1.0, 2.0, 3.0, 4.0]);
        let v: Vec<f64> = s.vertices().map(|p| p.x).collect();
        let m: Vec<f64> = s.midpoints().map(|p| p.x).collect();
        assert_eq!(v, vec![0.0, 2.0, 4.0]);
        assert_eq!(m, vec![1.0, 3.0]);
    }

    #[test]
    fn iteration_is_restartable() {
        let s = seq(&[1.0, 2.0, 3.0]);
        let first: Vec<_> = (&s).into_iter().collect();
        let second: Vec<_> = s.iter().collect();
        assert_eq!(first, second);
    }
}
