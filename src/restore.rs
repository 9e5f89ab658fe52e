//! Commands that remember the direction they replaced.
//!
//! A restoring command captures the current direction of the [`PressKey`]
//! right before it presses its own key. Undoing it does not touch the press
//! key, it only returns the captured direction. The [`Keyboard`] then
//! dispatches that direction again, so the command bound to the restored
//! direction becomes the one that was executed last.
//!
//! Only one direction is captured per command. Undoing twice in a row toggles
//! between the two most recent directions instead of walking further back.

mod builder;
mod keyboard;

pub use self::{builder::Builder, keyboard::Keyboard};

use crate::{Command, Direction, NoCommand, Signal, Slot, Socket};
use core::fmt::{self, Display, Formatter};

/// The target of restoring commands.
///
/// Every mutator emits [`Signal::Pressed`] to the connected slot and then
/// updates the current direction.
#[derive(Clone, Debug, Default)]
pub struct PressKey<S = ()> {
    current: Option<Direction>,
    socket: Socket<S>,
}

impl PressKey {
    /// Returns a new press key without a slot and without a direction.
    pub fn new() -> PressKey {
        PressKey::default()
    }
}

impl<S> PressKey<S> {
    /// Returns a new press key that emits to the slot.
    pub fn with_slot(slot: S) -> PressKey<S> {
        PressKey {
            current: None,
            socket: Socket::new(slot),
        }
    }

    /// Returns the direction of the key that was pressed last,
    /// or `None` if no key has been pressed.
    pub fn current(&self) -> Option<Direction> {
        self.current
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
        tracing::trace!(%direction, previous = ?self.current, "key pressed");
        self.socket.emit(|| Signal::Pressed(direction));
        // Must be last so readers never observe the old direction after a press.
        self.current = Some(direction);
    }
}

impl<S: Slot> Command<PressKey<S>> for NoCommand {
    type Output = Option<Direction>;

    fn execute(&mut self, _: &mut PressKey<S>) {}

    fn undo(&mut self, _: &mut PressKey<S>) -> Option<Direction> {
        None
    }
}

macro_rules! restore_command {
    ($(#[$attr:meta])* $name:ident, $execute:ident, $text:literal) => {
        $(#[$attr])*
        #[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
        #[derive(Copy, Clone, Debug, Default, Hash, Eq, PartialEq)]
        pub struct $name {
            previous: Option<Direction>,
        }

        impl $name {
            /// Returns a new command that has not captured a direction yet.
            pub const fn new() -> $name {
                $name { previous: None }
            }

            /// Returns the direction captured by the last execute.
            pub fn previous(&self) -> Option<Direction> {
                self.previous
            }
        }

        impl<S: Slot> Command<PressKey<S>> for $name {
            type Output = Option<Direction>;

            fn execute(&mut self, target: &mut PressKey<S>) {
                self.previous = target.current();
                target.$execute();
            }

            fn undo(&mut self, _: &mut PressKey<S>) -> Option<Direction> {
                self.previous
            }
        }

        impl Display for $name {
            fn fmt(&self, f: &mut Formatter) -> fmt::Result {
                f.write_str($text)
            }
        }
    };
}

restore_command!(
    /// Presses up and captures the direction it replaced.
    MoveUp, move_up, "KEY UP"
);
restore_command!(
    /// Presses down and captures the direction it replaced.
    MoveDown, move_down, "KEY DOWN"
);
restore_command!(
    /// Presses left and captures the direction it replaced.
    MoveLeft, move_left, "KEY LEFT"
);
restore_command!(
    /// Presses right and captures the direction it replaced.
    MoveRight, move_right, "KEY RIGHT"
);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn execute_captures_before_pressing() {
        let mut target = PressKey::new();
        let mut up = MoveUp::new();
        let mut left = MoveLeft::new();
        up.execute(&mut target);
        assert_eq!(up.previous(), None);
        assert_eq!(target.current(), Some(Direction::Up));
        left.execute(&mut target);
        assert_eq!(left.previous(), Some(Direction::Up));
        assert_eq!(target.current(), Some(Direction::Left));
    }

    #[test]
    fn undo_leaves_target_alone() {
        let mut target = PressKey::new();
        let mut right = MoveRight::new();
        target.move_down();
        right.execute(&mut target);
        assert_eq!(right.undo(&mut target), Some(Direction::Down));
        assert_eq!(target.current(), Some(Direction::Right));
        assert_eq!(NoCommand.undo(&mut target), None);
    }
}
