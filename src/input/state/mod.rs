mod core;
mod hit;
mod mouse;
mod render;

pub use core::{EditMode, IgnoreReason, InteractionState, LineTool, PressOutcome};
pub use hit::CONTAINS_DISTANCE;
