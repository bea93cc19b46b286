//! Input handling and the polyline editing state machine.
//!
//! This module translates backend keyboard and mouse events into editing
//! actions. It owns the finished polylines, the stroke parameters, and the
//! two-state (idle, drawing) controller that builds new polylines.

pub mod events;
pub mod modifiers;
pub mod state;

pub use events::{Key, MouseButton};
pub use modifiers::Modifiers;
pub use state::{DrawingState, InputState, PolylineBuffer};
