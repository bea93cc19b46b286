mod actions;
mod buffer;
mod core;
mod mouse;
mod render;

pub use buffer::PolylineBuffer;
pub use core::{DrawingState, InputState};
