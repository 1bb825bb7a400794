use crate::draw::Point;
use crate::input::events::PointerEvent;
use log::{debug, trace, warn};

use super::{EditMode, IgnoreReason, LineTool, PressOutcome};

impl LineTool {
    /// Processes a pointer button press.
    ///
    /// # Behavior
    /// - Non-primary buttons and presses while unselected are ignored
    /// - Draw mode: pressing the last vertex finishes the line and switches to
    ///   modify mode; any other press appends a midpoint and a new vertex
    /// - Modify mode: pressing a midpoint splits its segment; pressing a vertex
    ///   selects it for dragging or deletion
    pub fn on_pointer_down(&mut self, event: PointerEvent) -> PressOutcome {
        if !event.button.is_primary() {
            return PressOutcome::Ignored(IgnoreReason::InvalidButton);
        }
        if !self.selected {
            return PressOutcome::Ignored(IgnoreReason::NotSelected);
        }
        self.pressed = true;
        self.moved_since_press = false;

        // Remember the last hit so a repeated press on the same point can be detected
        self.previous_selected_index = self.selected_index.take();
        self.selected_index = self.hit_test(event.position);

        match self.mode {
            EditMode::Draw => self.press_draw(event.position),
            EditMode::Modify => self.press_modify(),
        }
    }

    fn press_draw(&mut self, position: Point) -> PressOutcome {
        let last_index = self.points.len().checked_sub(1);
        if self.selected_index.is_some() && self.selected_index == last_index {
            debug!(
                "Line {} finished with {} vertices",
                self.id,
                self.points.vertices().count()
            );
            self.set_mode(EditMode::Modify);
            return PressOutcome::Finished;
        }

        if let Some(last) = self.points.last() {
            self.points.push(last.midpoint(position));
        }
        self.points.push(position);
        trace!("Line {} added vertex at {}", self.id, position);

        self.render();
        PressOutcome::Active
    }

    fn press_modify(&mut self) -> PressOutcome {
        let Some(hit) = self.selected_index else {
            return PressOutcome::Missed;
        };

        if hit % 2 == 1 {
            self.split_at_midpoint(hit);
        }

        self.render();
        PressOutcome::Active
    }

    /// Promotes the midpoint at `index` to a vertex flanked by two new midpoints.
    fn split_at_midpoint(&mut self, index: usize) {
        let (Some(current), Some(previous), Some(after)) = (
            self.points.get(index),
            self.points.get(index - 1),
            self.points.get(index + 1),
        ) else {
            warn!(
                "Line {}: midpoint {} has no neighbors, not splitting",
                self.id, index
            );
            return;
        };

        self.points.insert_after(Some(index), current.midpoint(after));
        self.points.insert_after(Some(index - 1), current.midpoint(previous));
        self.selected_index = Some(index + 1);
        // Indices recorded before the insert no longer name the same points
        self.previous_selected_index = None;

        debug!(
            "Line {} split segment at {}, now {} points",
            self.id,
            current,
            self.points.len()
        );
    }

    /// Processes pointer motion.
    ///
    /// # Behavior
    /// - Draw mode: shows a preview segment from the last point to the pointer
    /// - Modify mode: while pressed, drags the selected vertex and keeps the
    ///   neighboring midpoints centered
    pub fn on_pointer_move(&mut self, event: PointerEvent) {
        self.moved_since_press = true;

        match self.mode {
            EditMode::Draw => {
                if !self.points.is_empty() {
                    self.render();
                    self.render_preview(event.position);
                }
            }
            EditMode::Modify => {
                let Some(index) = self.selected_index else {
                    return;
                };
                // Midpoints follow their vertices and are never dragged directly
                if self.pressed && index % 2 == 0 {
                    self.drag_vertex(index, event.position);
                    self.render();
                }
            }
        }
    }

    fn drag_vertex(&mut self, index: usize, to: Point) {
        let Some(vertex) = self.points.get_mut(index) else {
            return;
        };
        *vertex = to;
        trace!("Line {} dragged vertex {} to {}", self.id, index, to);

        if index >= 1 {
            self.recompute_midpoint(index - 1);
        }
        self.recompute_midpoint(index + 1);
    }

    /// Resets the midpoint at `index` to the mean of its neighbors.
    ///
    /// Does nothing unless `index` is an interior odd index.
    pub(super) fn recompute_midpoint(&mut self, index: usize) {
        if index % 2 == 0 || index + 1 >= self.points.len() {
            return;
        }
        let (Some(left), Some(right)) = (self.points.get(index - 1), self.points.get(index + 1))
        else {
            return;
        };
        if let Some(midpoint) = self.points.get_mut(index) {
            *midpoint = left.midpoint(right);
        }
    }

    /// Processes a pointer button release.
    ///
    /// A vertex pressed twice in a row with no motion in between is deleted
    /// along with the midpoint that follows it. Press and motion tracking is
    /// always reset.
    pub fn on_pointer_up(&mut self, event: PointerEvent) {
        trace!("Line {} release at {}", self.id, event.position);

        let repeated = self
            .selected_index
            .filter(|index| self.previous_selected_index == Some(*index) && index % 2 == 0);
        if let (false, Some(index)) = (self.moved_since_press, repeated) {
            self.delete_vertex(index);
            self.selected_index = None;
            self.previous_selected_index = None;
            self.render();
        }

        self.pressed = false;
        self.moved_since_press = false;
    }

    fn delete_vertex(&mut self, index: usize) {
        // Vertex first, then the midpoint that slid into its slot
        for _ in 0..2 {
            if let Err(err) = self.points.remove_at(index) {
                debug!("Line {}: {}", self.id, err);
                break;
            }
        }

        if index >= 2 && index < self.points.len() {
            self.recompute_midpoint(index - 1);
        }
        debug!(
            "Line {} deleted vertex {}, {} points remain",
            self.id,
            index,
            self.points.len()
        );
    }
}
