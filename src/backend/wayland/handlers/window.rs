// Responds to xdg-toplevel configure/close events, keeping dimensions in sync with the compositor.
use log::info;
use smithay_client_toolkit::shell::xdg::window::{Window, WindowConfigure, WindowHandler};
use wayland_client::{Connection, QueueHandle};

use super::super::state::WaylandState;

impl WindowHandler for WaylandState {
    fn request_close(&mut self, _conn: &Connection, _qh: &QueueHandle<Self>, _window: &Window) {
        info!("Window closed by compositor");
        self.input_state.should_exit = true;
    }

    fn configure(
        &mut self,
        _conn: &Connection,
        _qh: &QueueHandle<Self>,
        _window: &Window,
        configure: WindowConfigure,
        _serial: u32,
    ) {
        // The compositor leaves the size to us until the user resizes the window
        let width = configure
            .new_size
            .0
            .map_or(self.config.canvas.width, |w| w.get());
        let height = configure
            .new_size
            .1
            .map_or(self.config.canvas.height, |h| h.get());
        info!("Window configured: {}x{}", width, height);

        if self.surface.update_dimensions(width, height) {
            info!("Surface size changed - recreating SlotPool");
        }
        self.input_state.update_screen_dimensions(width, height);

        self.surface.set_configured(true);
        self.input_state.needs_redraw = true;
    }
}
