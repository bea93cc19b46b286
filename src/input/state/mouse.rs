use crate::input::events::MouseButton;
use log::trace;

use super::InputState;

impl InputState {
    /// Processes a mouse button press event.
    ///
    /// # Behavior
    /// - Left click while Idle: starts a polyline at the click position
    /// - Left click while Drawing: commits the provisional point (up to `max_points`)
    /// - Right click: discards the polyline being drawn
    pub fn on_mouse_press(&mut self, button: MouseButton, x: i32, y: i32) {
        match button {
            MouseButton::Left => {
                self.click(x, y);
            }
            MouseButton::Right => {
                self.cancel();
            }
            MouseButton::Middle => {
                trace!("Ignoring middle click at ({}, {})", x, y);
            }
        }
    }

    /// Processes pointer motion.
    ///
    /// While drawing, the provisional point follows the pointer. Motion while
    /// idle does nothing.
    pub fn on_mouse_motion(&mut self, x: i32, y: i32) {
        self.move_pointer(x, y);
    }
}
