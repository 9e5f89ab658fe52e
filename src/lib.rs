//! Directional key commands with single-level undo.
//!
//! It is an implementation of the command pattern where every key press is routed
//! through a [`Keyboard`](inverse::Keyboard) to the command bound to that key, and the
//! command applies the move to a target press key. The keyboard remembers the last
//! command it dispatched, and a single undo request is routed to that command.
//!
//! Two flavors of undo are provided:
//!
//! * [`inverse`] commands undo themselves by pressing the geometrically opposite key.
//!   They keep no state.
//! * [`restore`] commands capture the direction that was active before they were
//!   executed. Undo returns that direction and the keyboard dispatches it again.
//!
//! There is no history stack. Undoing twice without pressing a key in between
//! repeats the inverse move twice, or toggles between the two most recent
//! directions when restoring.
//!
//! # Features
//!
//! * [`Command`] provides the base functionality for all commands.
//! * [`Registry`] maps every key to a command, unbound keys map to [`NoCommand`].
//! * [`Slot`] receives a [`Signal`] every time a key is pressed or undone.
//! * Configurable display formatting of the bindings through `describe`.
//! * Colored output when the `colored` feature is enabled.
//! * Time stamps on the last dispatched key when the `chrono` feature is enabled.
//! * Serialization when the `serde` feature is enabled.
//!
//! # Examples
//! ```
//! use keypress::inverse::{Keyboard, MoveLeft, MoveUp, PressKey};
//! use keypress::{Direction, Signal};
//! use std::sync::mpsc;
//!
//! # fn main() -> keypress::Result<()> {
//! let (sender, receiver) = mpsc::channel::<Signal>();
//! let mut target = PressKey::with_slot(sender.clone());
//! let mut keyboard = Keyboard::builder()
//!     .bind(Direction::Up, MoveUp)
//!     .bind(Direction::Left, MoveLeft)
//!     .connect(sender)
//!     .build();
//!
//! keyboard.press(&mut target, Direction::Left)?;
//! keyboard.undo(&mut target)?;
//!
//! let signals = receiver.try_iter().collect::<Vec<_>>();
//! assert_eq!(
//!     signals,
//!     [
//!         Signal::Pressed(Direction::Left),
//!         Signal::Undo("KEY LEFT".into()),
//!         Signal::Pressed(Direction::Right),
//!     ]
//! );
//! # Ok(())
//! # }
//! ```

#![no_std]
#![doc(html_root_url = "https://docs.rs/keypress")]
#![deny(missing_docs)]
#![forbid(unsafe_code)]

extern crate alloc;
#[cfg(feature = "std")]
extern crate std;

mod any;
mod direction;
mod display;
mod entry;
mod error;
mod format;
pub mod inverse;
mod last;
mod registry;
pub mod restore;
mod socket;

pub use any::AnyCommand;
pub use direction::{Direction, Key};
pub use display::Display;
pub use entry::Entry;
pub use error::{Error, Result};
pub use registry::Registry;
pub use socket::{Signal, Slot};

use core::fmt;
use format::Format;
use socket::Socket;

/// Base functionality for all commands.
///
/// A command is bound to a key in a [`Registry`] and applies its move to the
/// target it is given. The `Display` implementation is the human readable name
/// used in notifications and in the binding listing.
pub trait Command<T>: fmt::Display {
    /// The value returned by [`undo`](Command::undo).
    type Output;

    /// Applies the command to the target.
    fn execute(&mut self, target: &mut T);

    /// Undoes the most recent [`execute`](Command::execute).
    fn undo(&mut self, target: &mut T) -> Self::Output;
}

impl<T, C: Command<T> + ?Sized> Command<T> for alloc::boxed::Box<C> {
    type Output = C::Output;

    fn execute(&mut self, target: &mut T) {
        (**self).execute(target)
    }

    fn undo(&mut self, target: &mut T) -> Self::Output {
        (**self).undo(target)
    }
}

/// The inert command.
///
/// Every key starts out bound to this command. Executing it does nothing,
/// and undoing it does nothing or returns the no-direction sentinel.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Copy, Clone, Debug, Default, Hash, Eq, PartialEq)]
pub struct NoCommand;

impl fmt::Display for NoCommand {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str("No Command")
    }
}
