//! Polyline editing state machine and input state management.

use super::buffer::PolylineBuffer;
use crate::config::{Action, Config, KeyBinding};
use crate::draw::{Color, DirtyTracker, Frame, Shape};
use crate::input::modifiers::Modifiers;
use crate::util::Rect;
use log::{debug, trace, warn};
use std::collections::HashMap;
use std::fmt;

/// Current editing mode.
///
/// `Idle` has no active polyline; `Drawing` owns the point buffer of the
/// polyline under construction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DrawingState {
    /// Waiting for the first click of a new polyline
    Idle,
    /// Placing points; the buffer's last point follows the pointer
    Drawing { buffer: PolylineBuffer },
}

impl DrawingState {
    /// Short lowercase name used in logs and the status bar.
    pub fn name(&self) -> &'static str {
        match self {
            DrawingState::Idle => "idle",
            DrawingState::Drawing { .. } => "drawing",
        }
    }
}

impl fmt::Display for DrawingState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Main input state containing the whole editing session.
///
/// Holds the finished shapes, the stroke parameters, the modifier keys, and
/// the polyline state machine. Every pointer and keyboard event is routed
/// through here; effective changes set `needs_redraw` and record damage in
/// the dirty tracker for the backend to consume.
pub struct InputState {
    /// Finished polylines in draw order
    pub frame: Frame,
    /// Stroke color for new polylines
    pub stroke_color: Color,
    /// Stroke thickness in pixels for new polylines
    pub stroke_thickness: f64,
    /// Maximum committed points per polyline
    pub max_points: usize,
    /// Maximum number of finished polylines (0 = unlimited)
    pub max_shapes: usize,
    /// Current modifier key state
    pub modifiers: Modifiers,
    /// Polyline editing state machine
    pub state: DrawingState,
    /// Whether user requested to exit
    pub should_exit: bool,
    /// Whether the display needs to be redrawn
    pub needs_redraw: bool,
    /// Whether the help overlay is currently visible
    pub show_help: bool,
    /// Whether the status bar is currently visible
    pub show_status_bar: bool,
    /// Surface width in pixels (set by backend after configuration)
    pub screen_width: u32,
    /// Surface height in pixels (set by backend after configuration)
    pub screen_height: u32,
    pub(crate) dirty_tracker: DirtyTracker,
    action_map: HashMap<KeyBinding, Action>,
}

impl InputState {
    /// Creates a new InputState with the given stroke, limits, and keybindings.
    ///
    /// Screen dimensions default to 0 and should be updated by the backend
    /// once the surface size is known (see `update_screen_dimensions`).
    pub fn with_defaults(
        stroke_color: Color,
        stroke_thickness: f64,
        max_points: usize,
        max_shapes: usize,
        show_status_bar: bool,
        action_map: HashMap<KeyBinding, Action>,
    ) -> Self {
        let mut dirty_tracker = DirtyTracker::new();
        dirty_tracker.mark_full();

        Self {
            frame: Frame::new(),
            stroke_color,
            stroke_thickness,
            max_points,
            max_shapes,
            modifiers: Modifiers::new(),
            state: DrawingState::Idle,
            should_exit: false,
            needs_redraw: true,
            show_help: false,
            show_status_bar,
            screen_width: 0,
            screen_height: 0,
            dirty_tracker,
            action_map,
        }
    }

    /// Builds the input state from a loaded configuration.
    pub fn from_config(config: &Config) -> Self {
        let mut state = Self::with_defaults(
            config.drawing.stroke_color.to_color(),
            config.drawing.stroke_thickness,
            config.polyline.max_points,
            config.polyline.max_shapes,
            config.ui.show_status_bar,
            config.action_map(),
        );
        state.update_screen_dimensions(config.canvas.width, config.canvas.height);
        state
    }

    /// Updates screen dimensions after backend configuration.
    pub fn update_screen_dimensions(&mut self, width: u32, height: u32) {
        if self.screen_width != width || self.screen_height != height {
            self.screen_width = width;
            self.screen_height = height;
            self.dirty_tracker.mark_full();
            self.needs_redraw = true;
        }
    }

    /// Drains pending dirty rectangles for the current surface size.
    pub fn take_dirty_regions(&mut self) -> Vec<Rect> {
        let width = self.screen_width.min(i32::MAX as u32) as i32;
        let height = self.screen_height.min(i32::MAX as u32) as i32;
        self.dirty_tracker.take_regions(width, height)
    }

    /// Returns true when edits have marked damage since the last drain.
    pub fn has_pending_damage(&self) -> bool {
        !self.dirty_tracker.is_clean()
    }

    /// Forces a full repaint on the next render.
    pub fn mark_all_dirty(&mut self) {
        self.dirty_tracker.mark_full();
        self.needs_redraw = true;
    }

    /// Returns the in-progress buffer, if a polyline is being drawn.
    pub fn buffer(&self) -> Option<&PolylineBuffer> {
        match &self.state {
            DrawingState::Drawing { buffer } => Some(buffer),
            DrawingState::Idle => None,
        }
    }

    pub fn is_drawing(&self) -> bool {
        matches!(self.state, DrawingState::Drawing { .. })
    }

    /// Idle + click: starts a polyline at the click position.
    /// Drawing + click: commits the provisional point and appends a new one,
    /// unless `max_points` points are already committed.
    ///
    /// Returns `true` if the buffer changed.
    pub fn click(&mut self, x: i32, y: i32) -> bool {
        let max_points = self.max_points;
        match &mut self.state {
            DrawingState::Idle => {
                self.transition(DrawingState::Drawing {
                    buffer: PolylineBuffer::start(x, y),
                });
                self.mark_buffer_dirty();
                true
            }
            DrawingState::Drawing { buffer } => {
                let before = buffer.bounds(self.stroke_thickness);
                if buffer.push_point(x, y, max_points) {
                    debug!(
                        "Added point ({}, {}); {} committed",
                        x,
                        y,
                        buffer.committed_count()
                    );
                    self.dirty_tracker.mark_optional_rect(before);
                    self.mark_buffer_dirty();
                    true
                } else {
                    trace!("Point limit ({}) reached; click ignored", max_points);
                    false
                }
            }
        }
    }

    /// Drawing + move: moves the provisional point to the pointer.
    ///
    /// Returns `true` if the buffer changed.
    pub fn move_pointer(&mut self, x: i32, y: i32) -> bool {
        let DrawingState::Drawing { buffer } = &mut self.state else {
            return false;
        };

        let before = buffer.bounds(self.stroke_thickness);
        if !buffer.set_provisional(x, y) {
            return false;
        }
        self.dirty_tracker.mark_optional_rect(before);
        self.mark_buffer_dirty();
        true
    }

    /// Drawing + delete-last: drops the last committed point while more than
    /// two are committed.
    ///
    /// Returns `true` if the buffer changed.
    pub fn delete_last_point(&mut self) -> bool {
        let DrawingState::Drawing { buffer } = &mut self.state else {
            return false;
        };

        let before = buffer.bounds(self.stroke_thickness);
        if !buffer.remove_last_committed() {
            trace!("Delete-last ignored: too few committed points");
            return false;
        }
        debug!("Removed last point; {} committed", buffer.committed_count());
        self.dirty_tracker.mark_optional_rect(before);
        self.mark_buffer_dirty();
        true
    }

    /// Drawing + commit: strips the provisional point and stores the
    /// remaining points as a finished polyline.
    ///
    /// Returns the finished shape, or `None` when idle. When the shape limit
    /// is reached the polyline is discarded with a warning and `None` is returned.
    pub fn commit(&mut self) -> Option<Shape> {
        if !self.is_drawing() {
            return None;
        }
        self.mark_buffer_dirty();
        let DrawingState::Drawing { buffer } = self.transition(DrawingState::Idle) else {
            return None;
        };

        let shape = Shape::Polyline {
            points: buffer.finish(),
            color: self.stroke_color,
            thick: self.stroke_thickness,
        };

        if self.frame.try_add_shape(shape.clone(), self.max_shapes) {
            self.dirty_tracker.mark_optional_rect(shape.bounding_box());
            debug!(
                "Committed polyline with {} points ({} shapes on canvas)",
                shape.point_count(),
                self.frame.len()
            );
            Some(shape)
        } else {
            warn!(
                "Shape limit ({}) reached; discarding new polyline",
                self.max_shapes
            );
            None
        }
    }

    /// Drawing + cancel: discards the buffer.
    ///
    /// Returns `true` if a polyline was discarded.
    pub fn cancel(&mut self) -> bool {
        if !self.is_drawing() {
            return false;
        }
        self.mark_buffer_dirty();
        self.transition(DrawingState::Idle);
        debug!("Polyline discarded");
        true
    }

    /// Look up an action for the given key name and the current modifiers.
    pub(super) fn find_action(&self, key_str: &str) -> Option<Action> {
        self.action_map
            .iter()
            .find(|(binding, _)| {
                binding.matches(
                    key_str,
                    self.modifiers.ctrl,
                    self.modifiers.shift,
                    self.modifiers.alt,
                )
            })
            .map(|(_, action)| *action)
    }

    /// Replaces the state, logging the transition. Returns the previous state.
    fn transition(&mut self, next: DrawingState) -> DrawingState {
        let previous = std::mem::replace(&mut self.state, next);
        debug!("Polyline state: {} -> {}", previous, self.state);
        self.needs_redraw = true;
        previous
    }

    /// Marks the current buffer's area as damaged.
    fn mark_buffer_dirty(&mut self) {
        let bounds = self.buffer().and_then(|b| b.bounds(self.stroke_thickness));
        self.dirty_tracker.mark_optional_rect(bounds);
        self.needs_redraw = true;
    }
}
