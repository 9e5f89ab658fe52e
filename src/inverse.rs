//! Commands that undo themselves by pressing the opposite key.
//!
//! An inverse command keeps no state. Undoing [`MoveLeft`] presses right,
//! undoing [`MoveUp`] presses down, and so on. The [`Keyboard`] only remembers
//! which key it dispatched last, so undoing twice in a row presses the
//! opposite key twice.

mod builder;
mod keyboard;

pub use self::{builder::Builder, keyboard::Keyboard};

use crate::{Command, Direction, NoCommand, Signal, Slot, Socket};
use core::fmt::{self, Display, Formatter};

/// The target of inverse commands.
///
/// Every mutator emits [`Signal::Pressed`] to the connected slot.
/// It keeps no direction of its own.
#[derive(Clone, Debug, Default)]
pub struct PressKey<S = ()> {
    socket: Socket<S>,
}

impl PressKey {
    /// Returns a new press key without a slot.
    pub fn new() -> PressKey {
        PressKey::default()
    }
}

impl<S> PressKey<S> {
    /// Returns a new press key that emits to the slot.
    pub fn with_slot(slot: S) -> PressKey<S> {
        PressKey {
            socket: Socket::new(slot),
        }
    }

    /// Connects the slot and returns the previous one if it exists.
    pub fn connect(&mut self, slot: S) -> Option<S> {
        self.socket.connect(Some(slot))
    }

    /// Removes and returns the slot if it exists.
    pub fn disconnect(&mut self) -> Option<S> {
        self.socket.disconnect()
    }
}

impl<S: Slot> PressKey<S> {
    /// Presses the up key.
    pub fn move_up(&mut self) {
        self.pressed(Direction::Up);
    }

    /// Presses the down key.
    pub fn move_down(&mut self) {
        self.pressed(Direction::Down);
    }

    /// Presses the left key.
    pub fn move_left(&mut self) {
        self.pressed(Direction::Left);
    }

    /// Presses the right key.
    pub fn move_right(&mut self) {
        self.pressed(Direction::Right);
    }

    /// Calls the mutator of the direction.
    pub fn press(&mut self, direction: Direction) {
        match direction {
            Direction::Up => self.move_up(),
            Direction::Down => self.move_down(),
            Direction::Left => self.move_left(),
            Direction::Right => self.move_right(),
        }
    }

    fn pressed(&mut self, direction: Direction) {
        tracing::trace!(%direction, "key pressed");
        self.socket.emit(|| Signal::Pressed(direction));
    }
}

impl<S: Slot> Command<PressKey<S>> for NoCommand {
    type Output = ();

    fn execute(&mut self, _: &mut PressKey<S>) {}

    fn undo(&mut self, _: &mut PressKey<S>) {}
}

macro_rules! inverse_command {
    ($(#[$attr:meta])* $name:ident, $execute:ident, $undo:ident, $text:literal) => {
        $(#[$attr])*
        #[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
        #[derive(Copy, Clone, Debug, Default, Hash, Eq, PartialEq)]
        pub struct $name;

        impl<S: Slot> Command<PressKey<S>> for $name {
            type Output = ();

            fn execute(&mut self, target: &mut PressKey<S>) {
                target.$execute();
            }

            fn undo(&mut self, target: &mut PressKey<S>) {
                target.$undo();
            }
        }

        impl Display for $name {
            fn fmt(&self, f: &mut Formatter) -> fmt::Result {
                f.write_str($text)
            }
        }
    };
}

inverse_command!(
    /// Presses up, undone by pressing down.
    MoveUp, move_up, move_down, "KEY UP"
);
inverse_command!(
    /// Presses down, undone by pressing up.
    MoveDown, move_down, move_up, "KEY DOWN"
);
inverse_command!(
    /// Presses left, undone by pressing right.
    MoveLeft, move_left, move_right, "KEY LEFT"
);
inverse_command!(
    /// Presses right, undone by pressing left.
    MoveRight, move_right, move_left, "KEY RIGHT"
);
