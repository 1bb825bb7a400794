//! Utility functions for color names and line geometry.
//!
//! This module provides:
//! - Name-to-color mapping for the configuration file
//! - Point-to-line distance used by shape hit-testing

use crate::draw::{Color, Point, color::*};

// ============================================================================
// Color Mapping
// ============================================================================

/// Maps color name strings to Color values.
///
/// Used by the configuration system to parse color names from the config file.
///
/// # Supported Names (case-insensitive)
/// - "red", "green", "blue", "yellow", "white", "black"
pub fn name_to_color(name: &str) -> Option<Color> {
    match name.to_lowercase().as_str() {
        "red" => Some(RED),
        "green" => Some(GREEN),
        "blue" => Some(BLUE),
        "yellow" => Some(YELLOW),
        "white" => Some(WHITE),
        "black" => Some(BLACK),
        _ => None,
    }
}

// ============================================================================
// Geometry Utilities
// ============================================================================

/// Perpendicular distance from `query` to the infinite line through `a` and `b`.
///
/// The line is unbounded: a point collinear with `a`-`b` but far beyond either
/// end is at distance zero. When `a == b` the line is undefined and the result
/// is NaN, which compares false against any threshold.
pub fn distance_to_line(query: Point, a: Point, b: Point) -> f64 {
    let dy = b.y - a.y;
    let dx = b.x - a.x;
    let numerator = (dy * query.x - dx * query.y + b.x * a.y - b.y * a.x).abs();
    let denominator = (dy * dy + dx * dx).sqrt();
    numerator / denominator
}

/// Returns true when `query` lies strictly inside the circle of `radius` around `center`.
pub fn within_radius(query: Point, center: Point, radius: f64) -> bool {
    query.distance_squared(center) < radius * radius
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn name_to_color_is_case_insensitive() {
        assert_eq!(name_to_color("Yellow"), Some(YELLOW));
        assert_eq!(name_to_color("BLACK"), Some(BLACK));
        assert!(name_to_color("chartreuse").is_none());
    }

    #[test]
    fn distance_to_horizontal_line() {
        let d = distance_to_line(
            Point::new(5.0, 7.0),
            Point::new(0.0, 0.0),
            Point::new(10.0, 0.0),
        );
        assert!((d - 7.0).abs() < 1e-9);
    }

    #[test]
    fn distance_ignores_segment_extent() {
        let d = distance_to_line(
            Point::new(500.0, 0.0),
            Point::new(0.0, 0.0),
            Point::new(10.0, 0.0),
        );
        assert_eq!(d, 0.0);
    }

    #[test]
    fn distance_to_degenerate_line_is_nan() {
        let p = Point::new(3.0, 3.0);
        let d = distance_to_line(Point::new(3.0, 3.0), p, p);
        assert!(d.is_nan());
        assert!(!(d < 10.0));
    }

    #[test]
    fn within_radius_is_strict() {
        let center = Point::new(0.0, 0.0);
        assert!(within_radius(Point::new(9.9, 0.0), center, 10.0));
        assert!(!within_radius(Point::new(10.0, 0.0), center, 10.0));
    }
}
