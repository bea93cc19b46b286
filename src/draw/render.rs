//! Cairo-based rendering functions for shapes.

use super::color::Color;
use super::shape::Shape;

/// Side length of the square drawn over committed vertices.
const VERTEX_MARKER_SIZE: f64 = 5.0;

/// Paints the whole canvas with the background color.
///
/// Should be called before rendering shapes.
pub fn render_background(ctx: &cairo::Context, color: Color) {
    let _ = ctx.save();
    ctx.set_operator(cairo::Operator::Source);
    color.apply(ctx);
    let _ = ctx.paint(); // Ignore errors - a failed paint leaves the previous contents
    let _ = ctx.restore();
}

/// Renders all shapes in draw order (first shape = bottom layer).
pub fn render_shapes(ctx: &cairo::Context, shapes: &[Shape]) {
    for shape in shapes {
        render_shape(ctx, shape);
    }
}

/// Renders a single shape to a Cairo context.
pub fn render_shape(ctx: &cairo::Context, shape: &Shape) {
    match shape {
        Shape::Polyline {
            points,
            color,
            thick,
        } => render_polyline(ctx, points, *color, *thick),
    }
}

/// Strokes an open polyline through `points`.
///
/// Takes a borrowed slice so the in-progress buffer can be drawn without
/// cloning it. A single point (or several identical points) renders as a
/// round dot of the stroke width.
pub fn render_polyline(ctx: &cairo::Context, points: &[(i32, i32)], color: Color, thick: f64) {
    let Some((&(x0, y0), rest)) = points.split_first() else {
        return;
    };

    let _ = ctx.save();
    color.apply(ctx);
    ctx.set_line_width(thick);
    ctx.set_line_cap(cairo::LineCap::Round);
    ctx.set_line_join(cairo::LineJoin::Round);

    if rest.iter().all(|&p| p == (x0, y0)) {
        ctx.arc(
            x0 as f64,
            y0 as f64,
            (thick / 2.0).max(0.5),
            0.0,
            std::f64::consts::PI * 2.0,
        );
        let _ = ctx.fill();
    } else {
        ctx.move_to(x0 as f64, y0 as f64);
        for &(x, y) in rest {
            ctx.line_to(x as f64, y as f64);
        }
        let _ = ctx.stroke();
    }

    let _ = ctx.restore();
}

/// Draws small filled squares over each vertex.
pub fn render_vertex_markers(ctx: &cairo::Context, points: &[(i32, i32)], color: Color) {
    if points.is_empty() {
        return;
    }

    let _ = ctx.save();
    color.apply(ctx);
    let half = VERTEX_MARKER_SIZE / 2.0;
    for &(x, y) in points {
        ctx.rectangle(
            x as f64 - half,
            y as f64 - half,
            VERTEX_MARKER_SIZE,
            VERTEX_MARKER_SIZE,
        );
    }
    let _ = ctx.fill();
    let _ = ctx.restore();
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::draw::{BLUE, RED, WHITE};

    fn pixel_at(surface: &mut cairo::ImageSurface, x: usize, y: usize) -> [u8; 4] {
        let stride = surface.stride() as usize;
        let data = surface.data().unwrap();
        let offset = y * stride + x * 4;
        [
            data[offset],
            data[offset + 1],
            data[offset + 2],
            data[offset + 3],
        ]
    }

    #[test]
    fn polyline_stroke_covers_segment_midpoint() {
        let mut surface = cairo::ImageSurface::create(cairo::Format::ARgb32, 40, 40).unwrap();
        {
            let ctx = cairo::Context::new(&surface).unwrap();
            render_background(&ctx, WHITE);
            render_polyline(&ctx, &[(5, 20), (35, 20)], BLUE, 4.0);
        }
        surface.flush();
        // ARGB32 is stored little-endian as B, G, R, A
        assert_eq!(pixel_at(&mut surface, 20, 20), [255, 0, 0, 255]);
        assert_eq!(pixel_at(&mut surface, 20, 5), [255, 255, 255, 255]);
    }

    #[test]
    fn single_point_renders_dot() {
        let mut surface = cairo::ImageSurface::create(cairo::Format::ARgb32, 20, 20).unwrap();
        {
            let ctx = cairo::Context::new(&surface).unwrap();
            render_polyline(&ctx, &[(10, 10)], RED, 6.0);
        }
        surface.flush();
        let [_, _, r, a] = pixel_at(&mut surface, 10, 10);
        assert_eq!(r, 255);
        assert_eq!(a, 255);
    }

    #[test]
    fn empty_polyline_draws_nothing() {
        let mut surface = cairo::ImageSurface::create(cairo::Format::ARgb32, 10, 10).unwrap();
        {
            let ctx = cairo::Context::new(&surface).unwrap();
            render_polyline(&ctx, &[], RED, 2.0);
            render_vertex_markers(&ctx, &[], RED);
        }
        surface.flush();
        assert!(surface.data().unwrap().iter().all(|byte| *byte == 0));
    }
}
