//! Point buffer for the polyline being drawn.

use crate::util::{self, Rect};

/// Fewest committed points a delete-last may leave behind.
const MIN_COMMITTED_AFTER_DELETE: usize = 2;

/// Ordered points of the in-progress polyline.
///
/// The last point is always provisional: it follows the pointer until the next
/// click commits it. The buffer holds at least two points (one committed plus
/// the provisional one) for its whole lifetime.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PolylineBuffer {
    points: Vec<(i32, i32)>,
}

impl PolylineBuffer {
    /// Starts a buffer at the click position: one committed point and a
    /// provisional point on top of it.
    pub fn start(x: i32, y: i32) -> Self {
        Self {
            points: vec![(x, y), (x, y)],
        }
    }

    /// All points, provisional last.
    pub fn points(&self) -> &[(i32, i32)] {
        &self.points
    }

    /// Points excluding the provisional one.
    pub fn committed(&self) -> &[(i32, i32)] {
        &self.points[..self.points.len() - 1]
    }

    pub fn committed_count(&self) -> usize {
        self.points.len() - 1
    }

    pub fn provisional(&self) -> (i32, i32) {
        self.points[self.points.len() - 1]
    }

    /// Moves the provisional point. Returns `false` when it was already there.
    pub fn set_provisional(&mut self, x: i32, y: i32) -> bool {
        let last = self.points.len() - 1;
        if self.points[last] == (x, y) {
            return false;
        }
        self.points[last] = (x, y);
        true
    }

    /// Commits the provisional point and adds a new provisional one at `(x, y)`.
    ///
    /// Refused once `max_points` points are committed.
    pub fn push_point(&mut self, x: i32, y: i32, max_points: usize) -> bool {
        if self.committed_count() >= max_points {
            return false;
        }
        self.points.push((x, y));
        true
    }

    /// Drops the last committed point, keeping the provisional one.
    ///
    /// Refused unless more than two points are committed.
    pub fn remove_last_committed(&mut self) -> bool {
        if self.committed_count() <= MIN_COMMITTED_AFTER_DELETE {
            return false;
        }
        let index = self.points.len() - 2;
        self.points.remove(index);
        true
    }

    /// Consumes the buffer and returns the committed points.
    pub fn finish(mut self) -> Vec<(i32, i32)> {
        self.points.pop();
        self.points
    }

    /// Bounding box of every point, padded for a stroke of `thick` pixels.
    pub fn bounds(&self, thick: f64) -> Option<Rect> {
        util::bounding_box_for_points(&self.points, thick)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn start_holds_committed_and_provisional_copies() {
        let buffer = PolylineBuffer::start(3, 4);
        assert_eq!(buffer.points(), &[(3, 4), (3, 4)]);
        assert_eq!(buffer.committed(), &[(3, 4)]);
        assert_eq!(buffer.provisional(), (3, 4));
        assert_eq!(buffer.committed_count(), 1);
    }

    #[test]
    fn set_provisional_reports_changes() {
        let mut buffer = PolylineBuffer::start(0, 0);
        assert!(buffer.set_provisional(10, 0));
        assert!(!buffer.set_provisional(10, 0));
        assert_eq!(buffer.points(), &[(0, 0), (10, 0)]);
    }

    #[test]
    fn push_point_stops_at_limit() {
        let mut buffer = PolylineBuffer::start(0, 0);
        assert!(buffer.push_point(1, 1, 3));
        assert!(buffer.push_point(2, 2, 3));
        assert!(!buffer.push_point(3, 3, 3));
        assert_eq!(buffer.committed_count(), 3);
        assert_eq!(buffer.points().len(), 4);
    }

    /// Pointer moves to (x, y), then clicks there.
    fn move_and_click(buffer: &mut PolylineBuffer, x: i32, y: i32) -> bool {
        buffer.set_provisional(x, y);
        buffer.push_point(x, y, 10)
    }

    #[test]
    fn click_without_move_commits_provisional_where_it_is() {
        let mut buffer = PolylineBuffer::start(0, 0);
        assert!(buffer.push_point(10, 0, 10));
        assert_eq!(buffer.points(), &[(0, 0), (0, 0), (10, 0)]);
    }

    #[test]
    fn remove_last_committed_keeps_provisional_and_two_points() {
        let mut buffer = PolylineBuffer::start(0, 0);
        move_and_click(&mut buffer, 10, 0);
        move_and_click(&mut buffer, 20, 0);
        buffer.set_provisional(25, 5);

        assert!(buffer.remove_last_committed());
        assert_eq!(buffer.points(), &[(0, 0), (10, 0), (25, 5)]);
        assert!(!buffer.remove_last_committed());
    }

    #[test]
    fn finish_strips_provisional_point() {
        let mut buffer = PolylineBuffer::start(0, 0);
        move_and_click(&mut buffer, 5, 5);
        buffer.set_provisional(9, 9);
        assert_eq!(buffer.finish(), vec![(0, 0), (5, 5)]);
    }
}
