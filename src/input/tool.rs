//! Tool contract and the set of available tools.

use crate::draw::{DrawList, LineStyle, Palette, Point};
use crate::input::events::PointerEvent;
use crate::input::state::{EditMode, LineTool, PressOutcome};

/// Capabilities every interactive tool exposes to the host.
///
/// The host owns selection: it decides which tool receives pointer events
/// and flips `selected` accordingly. Tools answer hit queries, consume
/// pointer events, and keep a retained [`DrawList`] current.
pub trait ToolBehavior {
    /// Registered tool name, all lowercase.
    fn name(&self) -> &'static str;

    fn is_selected(&self) -> bool;

    /// Changes selection and re-renders.
    fn set_selected(&mut self, selected: bool);

    fn mode(&self) -> EditMode;

    /// Changes the editing mode and re-renders.
    fn set_mode(&mut self, mode: EditMode);

    /// Whether `point` touches the tool's shape.
    fn contains(&self, point: Point) -> bool;

    /// Selects the tool when `point` touches it. Returns whether it was hit.
    fn try_select(&mut self, point: Point) -> bool {
        let hit = self.contains(point);
        if hit {
            self.set_selected(true);
        }
        hit
    }

    /// Handles a press; [`PressOutcome::remain_active`] tells the host whether to
    /// keep routing events here.
    fn on_pointer_down(&mut self, event: PointerEvent) -> PressOutcome;

    fn on_pointer_move(&mut self, event: PointerEvent);

    fn on_pointer_up(&mut self, event: PointerEvent);

    /// Rebuilds the retained view.
    fn render(&mut self);

    fn view(&self) -> &DrawList;

    /// Returns whether the view changed since the last call.
    fn take_redraw(&mut self) -> bool;
}

/// Kinds of tool the host can instantiate.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToolKind {
    /// Multi-segment line with draw and modify modes
    Line,
}

impl ToolKind {
    /// Looks a tool kind up by its registered name (case-insensitive).
    pub fn from_name(name: &str) -> Option<Self> {
        match name.to_lowercase().as_str() {
            LineTool::NAME => Some(ToolKind::Line),
            _ => None,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            ToolKind::Line => LineTool::NAME,
        }
    }

    /// Instantiates a fresh, unselected tool of this kind.
    pub fn create(self, id: usize, style: LineStyle, palette: Palette) -> Tool {
        match self {
            ToolKind::Line => Tool::Line(LineTool::with_style(id, style, palette)),
        }
    }
}

/// A live tool instance.
#[derive(Debug, Clone)]
pub enum Tool {
    Line(LineTool),
}

impl Tool {
    pub fn kind(&self) -> ToolKind {
        match self {
            Tool::Line(_) => ToolKind::Line,
        }
    }

    /// The underlying line tool, if this is one.
    pub fn as_line(&self) -> Option<&LineTool> {
        match self {
            Tool::Line(line) => Some(line),
        }
    }
}

impl ToolBehavior for LineTool {
    fn name(&self) -> &'static str {
        LineTool::NAME
    }

    fn is_selected(&self) -> bool {
        LineTool::is_selected(self)
    }

    fn set_selected(&mut self, selected: bool) {
        LineTool::set_selected(self, selected);
    }

    fn mode(&self) -> EditMode {
        LineTool::mode(self)
    }

    fn set_mode(&mut self, mode: EditMode) {
        LineTool::set_mode(self, mode);
    }

    fn contains(&self, point: Point) -> bool {
        LineTool::contains(self, point)
    }

    fn on_pointer_down(&mut self, event: PointerEvent) -> PressOutcome {
        LineTool::on_pointer_down(self, event)
    }

    fn on_pointer_move(&mut self, event: PointerEvent) {
        LineTool::on_pointer_move(self, event);
    }

    fn on_pointer_up(&mut self, event: PointerEvent) {
        LineTool::on_pointer_up(self, event);
    }

    fn render(&mut self) {
        LineTool::render(self);
    }

    fn view(&self) -> &DrawList {
        LineTool::view(self)
    }

    fn take_redraw(&mut self) -> bool {
        LineTool::take_redraw(self)
    }
}

impl ToolBehavior for Tool {
    fn name(&self) -> &'static str {
        self.kind().name()
    }

    fn is_selected(&self) -> bool {
        match self {
            Tool::Line(line) => line.is_selected(),
        }
    }

    fn set_selected(&mut self, selected: bool) {
        match self {
            Tool::Line(line) => line.set_selected(selected),
        }
    }

    fn mode(&self) -> EditMode {
        match self {
            Tool::Line(line) => line.mode(),
        }
    }

    fn set_mode(&mut self, mode: EditMode) {
        match self {
            Tool::Line(line) => line.set_mode(mode),
        }
    }

    fn contains(&self, point: Point) -> bool {
        match self {
            Tool::Line(line) => line.contains(point),
        }
    }

    fn on_pointer_down(&mut self, event: PointerEvent) -> PressOutcome {
        match self {
            Tool::Line(line) => line.on_pointer_down(event),
        }
    }

    fn on_pointer_move(&mut self, event: PointerEvent) {
        match self {
            Tool::Line(line) => line.on_pointer_move(event),
        }
    }

    fn on_pointer_up(&mut self, event: PointerEvent) {
        match self {
            Tool::Line(line) => line.on_pointer_up(event),
        }
    }

    fn render(&mut self) {
        match self {
            Tool::Line(line) => line.render(),
        }
    }

    fn view(&self) -> &DrawList {
        match self {
            Tool::Line(line) => line.view(),
        }
    }

    fn take_redraw(&mut self) -> bool {
        match self {
            Tool::Line(line) => line.take_redraw(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_name_is_case_insensitive() {
        assert_eq!(ToolKind::from_name("line"), Some(ToolKind::Line));
        assert_eq!(ToolKind::from_name("LINE"), Some(ToolKind::Line));
        assert_eq!(ToolKind::from_name("rect"), None);
    }

    #[test]
    fn created_tool_starts_unselected_in_draw_mode() {
        let tool = ToolKind::Line.create(7, LineStyle::default(), Palette::default());
        assert_eq!(tool.name(), "line");
        assert!(!tool.is_selected());
        assert_eq!(tool.mode(), EditMode::Draw);
        assert_eq!(tool.as_line().map(LineTool::id), Some(7));
    }

    #[test]
    fn enum_dispatch_reaches_line_tool() {
        let mut tool = ToolKind::Line.create(0, LineStyle::default(), Palette::default());
        tool.set_selected(true);
        assert!(tool.on_pointer_down(PointerEvent::primary(0.0, 0.0)).remain_active());
        tool.on_pointer_up(PointerEvent::primary(0.0, 0.0));
        assert!(tool.on_pointer_down(PointerEvent::primary(100.0, 0.0)).remain_active());
        tool.on_pointer_up(PointerEvent::primary(100.0, 0.0));

        assert!(tool.contains(Point::new(50.0, 4.0)));
        assert!(tool.take_redraw());
        assert!(!tool.take_redraw());
        assert!(!tool.view().is_empty());
        assert_eq!(tool.as_line().map(|line| line.points().len()), Some(3));
    }
}
