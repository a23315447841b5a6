//! Platform abstraction layer
//!
//! The host owns the window, the input devices, and the clock. The simulation
//! only ever sees the flag set produced here from drained events.

pub mod input;

pub use input::{Axis, InputEvent, Key, apply_event};
