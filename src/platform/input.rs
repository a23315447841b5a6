//! Input-event mapping
//!
//! Translates discrete press/release events and controller axis motion into
//! the flag set the simulation consumes. The host drains all pending events
//! before each tick and folds them in one at a time.

use crate::consts::AXIS_DEAD_ZONE;
use crate::sim::TickInput;

/// Logical keys the game cares about; scancode translation is the host's job.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    Up,
    Down,
    Left,
    Right,
    Fire,
    Restart,
}

/// Controller axes, already oriented to screen directions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Axis {
    Horizontal,
    Vertical,
}

/// A discrete event drained from the host's queue.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputEvent {
    KeyDown(Key),
    KeyUp(Key),
    AxisMotion { axis: Axis, value: i16 },
    Quit,
}

/// Fold one event into the tick's input flags. Returns `true` when the event
/// asks the host to stop the loop; the decision to actually quit stays with
/// the caller.
pub fn apply_event(input: &mut TickInput, event: InputEvent) -> bool {
    match event {
        InputEvent::KeyDown(key) => match key {
            Key::Up => input.up = true,
            Key::Down => input.down = true,
            Key::Left => input.left = true,
            Key::Right => input.right = true,
            Key::Fire => input.fire = true,
            Key::Restart => input.restart = true,
        },
        InputEvent::KeyUp(key) => match key {
            Key::Up => input.up = false,
            Key::Down => input.down = false,
            Key::Left => input.left = false,
            Key::Right => input.right = false,
            // One-shots are cleared by the host after the tick that consumed
            // them, not by key release
            Key::Fire | Key::Restart => {}
        },
        InputEvent::AxisMotion { axis, value } => apply_axis(input, axis, value),
        InputEvent::Quit => return true,
    }
    false
}

/// Stick motion past the dead zone acts like holding the matching direction;
/// returning inside the dead zone releases both directions on that axis.
fn apply_axis(input: &mut TickInput, axis: Axis, value: i16) {
    let live = value.unsigned_abs() > AXIS_DEAD_ZONE as u16;
    match axis {
        Axis::Vertical => {
            input.up = live && value < 0;
            input.down = live && value > 0;
        }
        Axis::Horizontal => {
            input.left = live && value < 0;
            input.right = live && value > 0;
        }
    }
}
