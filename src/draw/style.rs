//! Style records consumed by tools when they render.

use super::color::{BLACK, Color, RED, YELLOW};

/// Geometric style of a polyline.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LineStyle {
    /// Stroke width in pixels
    pub line_width: f64,
    /// Visual radius of the interaction circles
    pub point_radius: f64,
}

impl LineStyle {
    /// Radius used for pointer hit-testing, double the visual radius.
    pub fn hit_radius(&self) -> f64 {
        self.point_radius * 2.0
    }
}

impl Default for LineStyle {
    fn default() -> Self {
        Self {
            line_width: 2.0,
            point_radius: 5.0,
        }
    }
}

/// Colors for the line and its editing widgets.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Palette {
    pub line: Color,
    pub vertex: Color,
    pub midpoint: Color,
    pub selected: Color,
    pub preview: Color,
}

impl Default for Palette {
    fn default() -> Self {
        Self {
            line: BLACK,
            vertex: BLACK,
            midpoint: RED,
            selected: YELLOW,
            preview: BLACK,
        }
    }
}
