//! Input handling and the line editing state machine.
//!
//! This module translates host pointer events into edits of a tool's point data.
//! It defines the tool contract, the available tool kinds, and the draw/modify
//! state machine of the line tool.

pub mod events;
pub mod state;
pub mod tool;

// Re-export commonly used types at module level
pub use events::{MouseButton, PointerEvent};
pub use state::{EditMode, IgnoreReason, InteractionState, LineTool, PressOutcome};
pub use tool::{Tool, ToolBehavior, ToolKind};
