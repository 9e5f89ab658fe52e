//! Module used to communicate key presses and undos.

use crate::Direction;
use alloc::{string::String, vec::Vec};
use arrayvec::ArrayVec;
use core::mem;
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};
#[cfg(feature = "std")]
use std::sync::mpsc::{Sender, SyncSender};

/// Slot wrapper that adds some additional functionality.
#[derive(Clone, Debug)]
pub(crate) struct Socket<S>(Option<S>);

impl<S> Socket<S> {
    pub const fn new(slot: S) -> Socket<S> {
        Socket(Some(slot))
    }

    pub fn connect(&mut self, slot: Option<S>) -> Option<S> {
        mem::replace(&mut self.0, slot)
    }

    pub fn disconnect(&mut self) -> Option<S> {
        self.0.take()
    }
}

impl<S> Default for Socket<S> {
    fn default() -> Self {
        Socket(None)
    }
}

impl<S: Slot> Socket<S> {
    pub fn emit(&mut self, signal: impl FnOnce() -> Signal) {
        if let Some(slot) = &mut self.0 {
            slot.on_emit(signal());
        }
    }
}

/// The `Signal` describes what a press key or a keyboard just did.
///
/// See [`Slot`] for more information.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Clone, Debug, Hash, Eq, PartialEq)]
#[non_exhaustive]
pub enum Signal {
    /// Emitted by a press key when the key in the direction was pressed.
    Pressed(Direction),
    /// Emitted by an inverse keyboard before it undoes the named command.
    Undo(String),
    /// Emitted by a restoring keyboard before it dispatches the restored direction.
    Restore(Option<Direction>),
}

/// Use this to handle signals emitted.
///
/// This allows you to observe every key press and every undo.
///
/// # Examples
/// ```
/// # use std::sync::mpsc;
/// # use keypress::{Direction, Signal};
/// # use keypress::restore::{Keyboard, MoveUp, PressKey};
/// # fn main() -> keypress::Result<()> {
/// let (sender, receiver) = mpsc::channel::<Signal>();
/// let mut iter = receiver.try_iter();
///
/// let mut target = PressKey::with_slot(sender.clone());
/// let mut keyboard = Keyboard::builder()
///     .bind(Some(Direction::Up), MoveUp::new())
///     .connect(sender)
///     .build();
///
/// keyboard.press(&mut target, Some(Direction::Up))?;
/// assert_eq!(iter.next(), Some(Signal::Pressed(Direction::Up)));
/// assert_eq!(iter.next(), None);
///
/// keyboard.undo(&mut target)?;
/// assert_eq!(iter.next(), Some(Signal::Restore(None)));
/// assert_eq!(iter.next(), None);
/// # Ok(())
/// # }
/// ```
pub trait Slot {
    /// Receives a signal that describes what just happened.
    fn on_emit(&mut self, signal: Signal);
}

impl Slot for () {
    fn on_emit(&mut self, _: Signal) {}
}

impl<F: FnMut(Signal)> Slot for F {
    fn on_emit(&mut self, signal: Signal) {
        self(signal)
    }
}

impl Slot for Vec<Signal> {
    fn on_emit(&mut self, signal: Signal) {
        self.push(signal);
    }
}

/// Signals that do not fit are dropped.
impl<const CAP: usize> Slot for ArrayVec<Signal, CAP> {
    fn on_emit(&mut self, signal: Signal) {
        self.try_push(signal).ok();
    }
}

#[cfg(feature = "std")]
impl Slot for Sender<Signal> {
    fn on_emit(&mut self, signal: Signal) {
        self.send(signal).ok();
    }
}

#[cfg(feature = "std")]
impl Slot for SyncSender<Signal> {
    fn on_emit(&mut self, signal: Signal) {
        self.send(signal).ok();
    }
}
