use crate::config::Action;
use crate::input::events::Key;
use log::{debug, info};

use super::InputState;

impl InputState {
    /// Processes a key press event.
    ///
    /// Modifier keys only update the modifier state. Every other key is looked
    /// up in the keybinding map (together with the held modifiers) and the
    /// bound action, if any, is dispatched.
    pub fn on_key_press(&mut self, key: Key) {
        if self.modifiers.update(key, true) {
            return;
        }

        let Some(key_str) = key.binding_name() else {
            return;
        };

        match self.find_action(&key_str) {
            Some(action) => self.handle_action(action),
            None => debug!("No action bound to {:?}", key_str),
        }
    }

    /// Handle an action triggered by a keybinding.
    pub fn handle_action(&mut self, action: Action) {
        match action {
            Action::Commit => {
                self.commit();
            }
            Action::Cancel => {
                self.cancel();
            }
            Action::DeleteLastPoint => {
                self.delete_last_point();
            }
            Action::ToggleHelp => {
                self.show_help = !self.show_help;
                self.mark_all_dirty();
            }
            Action::ToggleStatusBar => {
                self.show_status_bar = !self.show_status_bar;
                self.mark_all_dirty();
            }
            Action::Exit => {
                // Exit abandons the current polyline first; a second press quits
                if !self.cancel() {
                    info!("Exit requested");
                    self.should_exit = true;
                }
            }
        }
    }

    /// Processes a key release event.
    ///
    /// Only modifier releases matter.
    pub fn on_key_release(&mut self, key: Key) {
        self.modifiers.update(key, false);
    }
}
