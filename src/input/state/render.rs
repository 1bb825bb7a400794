use crate::draw::Point;

use super::LineTool;

impl LineTool {
    /// Rebuilds the view from the stored points.
    ///
    /// Only vertices are connected; midpoints are skipped. While selected the
    /// editing widgets are drawn on top (vertex and midpoint handles).
    /// An empty line renders as a bare clear.
    pub fn render(&mut self) {
        self.view.clear();
        self.needs_redraw = true;
        let Some(first) = self.points.get(0) else {
            return;
        };

        self.view.line_style(self.style.line_width, self.palette.line);
        self.view.move_to(first);
        for vertex in self.points.vertices().skip(1) {
            self.view.line_to(vertex);
        }

        if self.selected {
            self.render_widgets();
        }
    }

    /// Draws the vertex and midpoint handles plus the selected point highlight.
    fn render_widgets(&mut self) {
        let radius = self.style.point_radius;

        self.view.begin_fill(self.palette.vertex);
        for vertex in self.points.vertices() {
            self.view.circle(vertex, radius);
        }
        self.view.end_fill();

        self.view.begin_fill(self.palette.midpoint);
        for midpoint in self.points.midpoints() {
            self.view.circle(midpoint, radius);
        }
        self.view.end_fill();

        if let Some(selected) = self.selected_index.and_then(|i| self.points.get(i)) {
            self.view.begin_fill(self.palette.selected);
            self.view.circle(selected, radius);
            self.view.end_fill();
        }
    }

    /// Appends the rubber-band segment and pointer marker shown while drawing.
    pub(super) fn render_preview(&mut self, pointer: Point) {
        let Some(last) = self.points.last() else {
            return;
        };
        self.view.move_to(last);
        self.view.line_to(pointer);

        self.view.begin_fill(self.palette.preview);
        self.view.circle(pointer, self.style.point_radius);
        self.view.end_fill();
        self.needs_redraw = true;
    }
}
