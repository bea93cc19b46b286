//! Frame container for finished shapes.

use super::shape::Shape;

/// Container for every finished shape on the canvas.
///
/// Shapes are kept in draw order (first = bottom layer, last = top layer).
#[derive(Debug, Clone, Default)]
pub struct Frame {
    pub shapes: Vec<Shape>,
}

impl Frame {
    /// Creates a new empty frame with no shapes.
    pub fn new() -> Self {
        Self { shapes: Vec::new() }
    }

    /// Attempts to add a shape, enforcing a maximum shape count when `max` > 0.
    ///
    /// Returns `true` if the shape was added, `false` if the limit would be exceeded.
    pub fn try_add_shape(&mut self, shape: Shape, max: usize) -> bool {
        if max == 0 || self.shapes.len() < max {
            self.shapes.push(shape);
            true
        } else {
            false
        }
    }

    pub fn len(&self) -> usize {
        self.shapes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.shapes.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::draw::{GREEN, RED};

    fn line(points: Vec<(i32, i32)>, color: crate::draw::Color) -> Shape {
        Shape::Polyline {
            points,
            color,
            thick: 2.0,
        }
    }

    #[test]
    fn try_add_shape_respects_limit() {
        let mut frame = Frame::new();
        assert!(frame.try_add_shape(line(vec![(0, 0), (1, 1)], RED), 1));
        assert!(!frame.try_add_shape(line(vec![(1, 1), (2, 2)], GREEN), 1));
        assert_eq!(frame.len(), 1);
    }

    #[test]
    fn zero_limit_means_unlimited() {
        let mut frame = Frame::new();
        for i in 0..50 {
            assert!(frame.try_add_shape(line(vec![(i, i), (i + 1, i)], RED), 0));
        }
        assert_eq!(frame.len(), 50);
        assert!(!frame.is_empty());
    }
}
