//! Point data model and draw command primitives.
//!
//! This module defines the core drawing types used by the line tool:
//! - [`Point`]: a 2D coordinate pair
//! - [`PointSequence`]: the alternating vertex/midpoint storage of a polyline
//! - [`Color`]: RGBA color representation with predefined color constants
//! - [`DrawCommand`] / [`DrawList`]: the retained command list handed to a renderer
//! - [`LineStyle`] / [`Palette`]: stroke geometry and widget colors

pub mod color;
pub mod command;
pub mod point;
pub mod sequence;
pub mod style;

// Re-export commonly used types at module level
pub use color::Color;
pub use command::{DrawCommand, DrawList};
pub use point::Point;
pub use sequence::{PointSequence, SequenceError};
pub use style::{LineStyle, Palette};

pub use color::{BLACK, BLUE, GREEN, RED, WHITE, YELLOW};
