use crate::draw::{render_polyline, render_vertex_markers};

use super::InputState;

impl InputState {
    /// Renders the polyline under construction, including the provisional
    /// segment to the pointer.
    ///
    /// When `show_vertices` is set, committed points get a small marker.
    /// Returns `true` if anything was drawn.
    pub fn render_in_progress(&self, ctx: &cairo::Context, show_vertices: bool) -> bool {
        let Some(buffer) = self.buffer() else {
            return false;
        };

        render_polyline(ctx, buffer.points(), self.stroke_color, self.stroke_thickness);
        if show_vertices {
            render_vertex_markers(ctx, buffer.committed(), self.stroke_color);
        }
        true
    }
}
