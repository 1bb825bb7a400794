//! Line tool state: point storage, selection, and interaction mode.

use crate::draw::{DrawList, LineStyle, Palette, PointSequence};

/// Editing mode of a line tool.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EditMode {
    /// Each primary press appends a vertex; pressing the last vertex finishes the line
    Draw,
    /// Presses drag, split, or delete existing points
    Modify,
}

/// Externally observable interaction state.
///
/// `Idle` is reported whenever the tool is unselected; the stored
/// [`EditMode`] comes back into effect once it is selected again.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InteractionState {
    Idle,
    Draw,
    Modify,
}

/// Why a press was not handled.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IgnoreReason {
    /// Only the primary button interacts with the line
    InvalidButton,
    /// The tool is not selected
    NotSelected,
}

/// Result of a pointer press.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PressOutcome {
    /// Press was handled and the tool wants further events
    Active,
    /// The last vertex was pressed in draw mode; the line is complete
    Finished,
    /// Press in modify mode landed on no point
    Missed,
    /// Press was not handled
    Ignored(IgnoreReason),
}

impl PressOutcome {
    /// Whether the host should keep routing events to this tool.
    pub fn remain_active(self) -> bool {
        matches!(self, PressOutcome::Active)
    }
}

/// Interactive multi-segment line.
///
/// Points alternate between user-placed vertices (even indices) and the
/// midpoints between them (odd indices). Every interior midpoint equals the
/// mean of its two neighbors after each handler returns.
///
/// The tool is driven exclusively through its pointer handlers (see
/// `mouse.rs`) and rebuilds its [`DrawList`] synchronously after each
/// mutation, raising `needs_redraw` for the host.
#[derive(Debug, Clone)]
pub struct LineTool {
    /// Host-assigned identifier
    pub(super) id: usize,
    /// Vertices and midpoints, `[P0, M0, P1, M1, P2, ...]`
    pub(super) points: PointSequence,
    pub(super) style: LineStyle,
    pub(super) palette: Palette,
    pub(super) selected: bool,
    pub(super) mode: EditMode,
    /// Primary button is held
    pub(super) pressed: bool,
    /// Pointer moved since the last press
    pub(super) moved_since_press: bool,
    /// Point hit by the most recent press
    pub(super) selected_index: Option<usize>,
    /// Point hit by the press before that, used to detect repeated presses
    pub(super) previous_selected_index: Option<usize>,
    /// Retained command list handed to the renderer
    pub(super) view: DrawList,
    /// Whether the view changed since the host last looked
    pub(super) needs_redraw: bool,
}

impl LineTool {
    /// Name under which the tool is registered.
    pub const NAME: &'static str = "line";

    /// Creates an unselected line tool in draw mode with default styling.
    pub fn new(id: usize) -> Self {
        Self::with_style(id, LineStyle::default(), Palette::default())
    }

    /// Creates an unselected line tool in draw mode.
    pub fn with_style(id: usize, style: LineStyle, palette: Palette) -> Self {
        Self {
            id,
            points: PointSequence::new(),
            style,
            palette,
            selected: false,
            mode: EditMode::Draw,
            pressed: false,
            moved_since_press: false,
            selected_index: None,
            previous_selected_index: None,
            view: DrawList::new(),
            needs_redraw: false,
        }
    }

    pub fn id(&self) -> usize {
        self.id
    }

    pub fn points(&self) -> &PointSequence {
        &self.points
    }

    pub fn style(&self) -> LineStyle {
        self.style
    }

    pub fn palette(&self) -> Palette {
        self.palette
    }

    pub fn is_selected(&self) -> bool {
        self.selected
    }

    /// Selects or deselects the tool and re-renders.
    ///
    /// Deselecting drops the current point selection.
    pub fn set_selected(&mut self, selected: bool) {
        self.selected = selected;
        if !selected {
            self.selected_index = None;
        }
        self.render();
    }

    pub fn mode(&self) -> EditMode {
        self.mode
    }

    /// Switches editing mode and re-renders.
    pub fn set_mode(&mut self, mode: EditMode) {
        if self.mode != mode {
            log::debug!("Line {} switching to {:?} mode", self.id, mode);
        }
        self.mode = mode;
        self.render();
    }

    pub fn interaction_state(&self) -> InteractionState {
        match (self.selected, self.mode) {
            (false, _) => InteractionState::Idle,
            (true, EditMode::Draw) => InteractionState::Draw,
            (true, EditMode::Modify) => InteractionState::Modify,
        }
    }

    pub fn selected_index(&self) -> Option<usize> {
        self.selected_index
    }

    pub fn previous_selected_index(&self) -> Option<usize> {
        self.previous_selected_index
    }

    pub fn is_pressed(&self) -> bool {
        self.pressed
    }

    /// Commands describing the current visual state.
    pub fn view(&self) -> &DrawList {
        &self.view
    }

    pub fn needs_redraw(&self) -> bool {
        self.needs_redraw
    }

    /// Returns whether a redraw was requested and clears the request.
    pub fn take_redraw(&mut self) -> bool {
        std::mem::take(&mut self.needs_redraw)
    }
}
