//! Generic pointer event types for host-independent input handling.

use crate::draw::Point;
use serde::{Deserialize, Serialize};

/// Mouse button identification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MouseButton {
    /// Left mouse button (primary drawing button)
    #[default]
    Left,
    /// Right mouse button
    Right,
    /// Middle mouse button
    Middle,
}

impl MouseButton {
    /// Whether this is the button that places and edits points.
    pub fn is_primary(self) -> bool {
        self == MouseButton::Left
    }
}

/// A pointer press, motion, or release as delivered by the host.
///
/// Coordinates are relative to the drawing surface.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PointerEvent {
    /// Button that changed state (motion events carry the primary button)
    pub button: MouseButton,
    /// Pointer position on the surface
    pub position: Point,
}

impl PointerEvent {
    pub fn new(button: MouseButton, x: f64, y: f64) -> Self {
        Self {
            button,
            position: Point::new(x, y),
        }
    }

    /// Event for the primary button at `(x, y)`.
    pub fn primary(x: f64, y: f64) -> Self {
        Self::new(MouseButton::Left, x, y)
    }
}
