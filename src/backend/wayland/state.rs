// Holds the live Wayland protocol state shared by the backend loop and the handler
// submodules; provides the render path used across them.
use anyhow::{Context, Result};
use log::debug;
use smithay_client_toolkit::{
    compositor::CompositorState, output::OutputState, registry::RegistryState, seat::SeatState,
    shell::WaylandSurface, shell::xdg::XdgShell, shm::Shm,
};
use wayland_client::{
    QueueHandle,
    protocol::{wl_keyboard, wl_pointer, wl_shm},
};

use crate::{config::Config, input::InputState, ui, util::Rect};

use super::surface::SurfaceState;

/// Internal Wayland state shared across modules.
pub(super) struct WaylandState {
    // Wayland protocol objects
    pub(super) registry_state: RegistryState,
    pub(super) compositor_state: CompositorState,
    pub(super) xdg_shell: XdgShell,
    pub(super) shm: Shm,
    pub(super) output_state: OutputState,
    pub(super) seat_state: SeatState,

    // Input devices handed out by the seat
    pub(super) keyboard: Option<wl_keyboard::WlKeyboard>,
    pub(super) pointer: Option<wl_pointer::WlPointer>,

    // Surface and buffer management
    pub(super) surface: SurfaceState,

    // Configuration
    pub(super) config: Config,

    // Input state
    pub(super) input_state: InputState,

    // Status bar area drawn by the previous frame
    last_status_rect: Option<Rect>,
}

impl WaylandState {
    #[allow(clippy::too_many_arguments)]
    pub(super) fn new(
        registry_state: RegistryState,
        compositor_state: CompositorState,
        xdg_shell: XdgShell,
        shm: Shm,
        output_state: OutputState,
        seat_state: SeatState,
        config: Config,
        input_state: InputState,
    ) -> Self {
        Self {
            registry_state,
            compositor_state,
            xdg_shell,
            shm,
            output_state,
            seat_state,
            keyboard: None,
            pointer: None,
            surface: SurfaceState::new(),
            config,
            input_state,
            last_status_rect: None,
        }
    }

    pub(super) fn render(&mut self, qh: &QueueHandle<Self>) -> Result<()> {
        debug!("=== RENDER START ===");
        let buffer_count = self.config.performance.buffer_count as usize;
        let width = self.surface.width();
        let height = self.surface.height();

        // Get a buffer from the pool
        let (buffer, canvas) = {
            let pool = self.surface.ensure_pool(&self.shm, buffer_count)?;
            debug!("Requesting buffer from pool");
            let result = pool
                .create_buffer(
                    width as i32,
                    height as i32,
                    (width * 4) as i32,
                    wl_shm::Format::Argb8888,
                )
                .context("Failed to create buffer")?;
            debug!("Buffer acquired from pool");
            result
        };

        // SAFETY: `canvas` is the SlotPool slice for this buffer, exactly
        // width * height * 4 bytes in ARGB32 layout with a stride of width * 4.
        // The Cairo surface and context are dropped before the buffer is attached,
        // so Cairo never touches the memory after it is handed to the compositor.
        let cairo_surface = unsafe {
            cairo::ImageSurface::create_for_data_unsafe(
                canvas.as_mut_ptr(),
                cairo::Format::ARgb32,
                width as i32,
                height as i32,
                (width * 4) as i32,
            )
            .context("Failed to create Cairo surface")?
        };

        let ctx = cairo::Context::new(&cairo_surface).context("Failed to create Cairo context")?;

        debug!(
            "Rendering {} finished polylines (state: {})",
            self.input_state.frame.len(),
            self.input_state.state
        );
        let status_rect = ui::render_scene(&ctx, &self.input_state, &self.config, width, height);

        debug!("Flushing Cairo surface");
        cairo_surface.flush();
        drop(ctx);
        drop(cairo_surface);

        debug!("Attaching buffer and committing surface");
        let wl_surface = self
            .surface
            .window()
            .context("Window not created")?
            .wl_surface();
        wl_surface.attach(Some(buffer.wl_buffer()), 0, 0);

        let surface_width = width.min(i32::MAX as u32) as i32;
        let surface_height = height.min(i32::MAX as u32) as i32;

        // The status bar text changes with every edit; repaint where it was and where it is
        let edited = self.input_state.has_pending_damage();
        let mut regions = self.input_state.take_dirty_regions();
        if edited {
            regions.extend(self.last_status_rect);
            regions.extend(status_rect);
        }
        self.last_status_rect = status_rect;

        let dirty_regions = resolve_damage_regions(surface_width, surface_height, regions);

        if dirty_regions.is_empty() {
            debug!("No valid dirty regions; skipping damage request");
        } else {
            for rect in &dirty_regions {
                debug!(
                    "Damaging buffer region x={} y={} w={} h={}",
                    rect.x, rect.y, rect.width, rect.height
                );
                wl_surface.damage_buffer(rect.x, rect.y, rect.width, rect.height);
            }
        }

        if self.config.performance.enable_vsync {
            debug!("Requesting frame callback (vsync enabled)");
            wl_surface.frame(qh, wl_surface.clone());
        } else {
            debug!("Skipping frame callback (vsync disabled - allows back-to-back renders)");
        }

        wl_surface.commit();
        debug!("=== RENDER COMPLETE ===");

        Ok(())
    }
}

fn resolve_damage_regions(width: i32, height: i32, mut regions: Vec<Rect>) -> Vec<Rect> {
    regions.retain(Rect::is_valid);

    if regions.is_empty() && width > 0 && height > 0 {
        if let Some(full) = Rect::new(0, 0, width, height) {
            regions.push(full);
        }
    }

    regions
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn resolve_damage_returns_full_when_empty() {
        let regions = resolve_damage_regions(400, 400, Vec::new());
        assert_eq!(regions, vec![Rect::new(0, 0, 400, 400).unwrap()]);
    }

    #[test]
    fn resolve_damage_filters_invalid_rects() {
        let regions = resolve_damage_regions(
            800,
            600,
            vec![
                Rect {
                    x: 10,
                    y: 10,
                    width: 50,
                    height: 40,
                },
                Rect {
                    x: 0,
                    y: 0,
                    width: 0,
                    height: 10,
                },
            ],
        );

        assert_eq!(regions, vec![Rect::new(10, 10, 50, 40).unwrap()]);
    }

    #[test]
    fn resolve_damage_keeps_nothing_for_empty_surface() {
        assert!(resolve_damage_regions(0, 0, Vec::new()).is_empty());
    }
}
