//! Rendering primitives and shape definitions (Cairo-based).
//!
//! This module defines the core drawing types used by the polyline editor:
//! - [`Color`]: RGBA color representation with a named palette
//! - [`Shape`]: finished polylines
//! - [`Frame`]: container for all finished shapes on the canvas
//! - [`DirtyTracker`]: damage regions collected between renders
//! - Rendering functions for Cairo-based output

pub mod color;
pub mod dirty;
pub mod frame;
pub mod render;
pub mod shape;

pub use color::{BLACK, BLUE, Color, GREEN, ORANGE, PINK, RED, WHITE, YELLOW};
pub use dirty::DirtyTracker;
pub use frame::Frame;
pub use render::{
    render_background, render_polyline, render_shape, render_shapes, render_vertex_markers,
};
pub use shape::Shape;
