//! Shape definitions for finished drawings.

use super::color::Color;
use crate::util::{self, Rect};

/// A drawable shape that has been committed to the canvas.
#[derive(Clone, Debug, PartialEq)]
pub enum Shape {
    /// Open polyline through the committed points of a finished buffer
    Polyline {
        /// Vertices in click order
        points: Vec<(i32, i32)>,
        /// Stroke color
        color: Color,
        /// Line thickness in pixels
        thick: f64,
    },
}

impl Shape {
    /// Returns the axis-aligned bounding box for this shape, expanded to cover stroke width.
    ///
    /// Returns `None` only when the shape has no points.
    pub fn bounding_box(&self) -> Option<Rect> {
        match self {
            Shape::Polyline { points, thick, .. } => util::bounding_box_for_points(points, *thick),
        }
    }

    /// Number of vertices in the shape.
    pub fn point_count(&self) -> usize {
        match self {
            Shape::Polyline { points, .. } => points.len(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::draw::RED;

    #[test]
    fn polyline_bounding_box_covers_all_points() {
        let shape = Shape::Polyline {
            points: vec![(10, 40), (50, 20), (30, 90)],
            color: RED,
            thick: 2.0,
        };
        let rect = shape.bounding_box().unwrap();
        assert!(rect.x <= 10 && rect.y <= 20);
        assert!(rect.x + rect.width > 50);
        assert!(rect.y + rect.height > 90);
        assert_eq!(shape.point_count(), 3);
    }

    #[test]
    fn empty_polyline_has_no_bounds() {
        let shape = Shape::Polyline {
            points: Vec::new(),
            color: RED,
            thick: 2.0,
        };
        assert!(shape.bounding_box().is_none());
    }
}
