//! Retained draw command lists.
//!
//! Tools never touch pixels. They record primitive commands into a
//! [`DrawList`] that an external renderer replays in order.

use super::color::Color;
use super::point::Point;
use serde::Serialize;
use std::fmt;

/// A single rendering primitive.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(tag = "op", rename_all = "kebab-case")]
pub enum DrawCommand {
    /// Discard everything drawn so far
    Clear,
    /// Stroke style for subsequent path segments
    LineStyle { width: f64, color: Color },
    /// Start a new sub-path at `to`
    MoveTo { to: Point },
    /// Straight segment from the current position to `to`
    LineTo { to: Point },
    /// Fill color for subsequent closed shapes
    BeginFill { color: Color },
    /// Circle centered on `center`
    Circle { center: Point, radius: f64 },
    /// End of the current fill group
    EndFill,
}

impl fmt::Display for DrawCommand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DrawCommand::Clear => write!(f, "clear"),
            DrawCommand::LineStyle { width, color } => {
                write!(f, "line-style {width} #{:06x}", color.to_rgb_hex())
            }
            DrawCommand::MoveTo { to } => write!(f, "move-to {to}"),
            DrawCommand::LineTo { to } => write!(f, "line-to {to}"),
            DrawCommand::BeginFill { color } => write!(f, "begin-fill #{:06x}", color.to_rgb_hex()),
            DrawCommand::Circle { center, radius } => write!(f, "circle {center} r={radius}"),
            DrawCommand::EndFill => write!(f, "end-fill"),
        }
    }
}

/// Ordered list of draw commands, rebuilt by a tool each time it renders.
#[derive(Clone, Debug, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct DrawList {
    commands: Vec<DrawCommand>,
}

impl DrawList {
    pub fn new() -> Self {
        Self {
            commands: Vec::new(),
        }
    }

    /// Drops all recorded commands and records a [`DrawCommand::Clear`].
    pub fn clear(&mut self) {
        self.commands.clear();
        self.commands.push(DrawCommand::Clear);
    }

    pub fn line_style(&mut self, width: f64, color: Color) {
        self.commands.push(DrawCommand::LineStyle { width, color });
    }

    pub fn move_to(&mut self, to: Point) {
        self.commands.push(DrawCommand::MoveTo { to });
    }

    pub fn line_to(&mut self, to: Point) {
        self.commands.push(DrawCommand::LineTo { to });
    }

    pub fn begin_fill(&mut self, color: Color) {
        self.commands.push(DrawCommand::BeginFill { color });
    }

    pub fn circle(&mut self, center: Point, radius: f64) {
        self.commands.push(DrawCommand::Circle { center, radius });
    }

    pub fn end_fill(&mut self) {
        self.commands.push(DrawCommand::EndFill);
    }

    pub fn commands(&self) -> &[DrawCommand] {
        &self.commands
    }

    pub fn len(&self) -> usize {
        self.commands.len()
    }

    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }

    /// Circles recorded while `fill` was the active fill color.
    pub fn circles_filled_with(&self, fill: Color) -> Vec<Point> {
        let mut active = None;
        let mut centers = Vec::new();
        for command in &self.commands {
            match command {
                DrawCommand::BeginFill { color } => active = Some(*color),
                DrawCommand::EndFill => active = None,
                DrawCommand::Circle { center, .. } if active == Some(fill) => {
                    centers.push(*center)
                }
                _ => {}
            }
        }
        centers
    }
}

impl fmt::Display for DrawList {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for command in &self.commands {
            writeln!(f, "{command}")?;
        }
        Ok(())
    }
}
