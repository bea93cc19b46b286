//! Wayland windowing backend: an xdg-shell toplevel rendered with Cairo into
//! shared memory buffers.

mod backend;
mod handlers;
mod state;
mod surface;

pub use backend::WaylandBackend;
