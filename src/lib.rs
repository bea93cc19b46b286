//! Click-to-place polyline drawing for Wayland.
//!
//! The editing logic lives in [`input`]: a two-state controller that owns the
//! polyline under construction. [`backend`] hosts it in a Wayland window and
//! [`replay`] drives it headless from a script, both rendering through
//! [`ui::render_scene`].

pub mod backend;
pub mod config;
pub mod draw;
pub mod input;
pub mod replay;
pub mod ui;
pub mod util;

pub use config::Config;
