use super::Builder;
use crate::last::Last;
use crate::{
    AnyCommand, Command, Direction, Display, Entry, Error, NoCommand, Registry, Result, Signal,
    Slot, Socket,
};
use alloc::string::ToString;

/// Routes key presses to bound inverse commands.
///
/// The keyboard remembers the command it dispatched last. [`undo`](Keyboard::undo)
/// calls the undo method of that command, which presses the opposite key on the
/// target. Rebinding the key afterwards does not change what is undone. There is
/// no history, so the same command is undone again on every call until another
/// key is pressed.
///
/// # Examples
/// ```
/// # use keypress::Direction;
/// # use keypress::inverse::{Keyboard, MoveLeft, PressKey};
/// # fn main() -> keypress::Result<()> {
/// let mut target = PressKey::new();
/// let mut keyboard = Keyboard::new();
/// keyboard.bind(Direction::Left, MoveLeft)?;
///
/// keyboard.press(&mut target, Direction::Left)?;
/// assert_eq!(keyboard.last(), Some(Direction::Left));
/// keyboard.undo(&mut target)?;
/// assert_eq!(keyboard.last(), Some(Direction::Left));
/// # Ok(())
/// # }
/// ```
pub struct Keyboard<T, S = ()> {
    pub(super) registry: Registry<Direction, AnyCommand<T, ()>>,
    pub(super) last: Option<Last<Direction, AnyCommand<T, ()>>>,
    pub(super) socket: Socket<S>,
}

impl<T> Keyboard<T>
where
    NoCommand: Command<T, Output = ()>,
{
    /// Returns a new keyboard with every key bound to [`NoCommand`].
    pub fn new() -> Keyboard<T> {
        Builder::default().build()
    }
}

impl<T, S> Keyboard<T, S>
where
    NoCommand: Command<T, Output = ()>,
{
    /// Returns a builder for a keyboard.
    pub fn builder() -> Builder<T, S> {
        Builder::default()
    }

    /// Binds the command to the key, replacing the command that was bound before.
    ///
    /// If the replaced command was the one dispatched last, it stays the target of undo.
    pub fn bind<C>(&mut self, direction: Direction, command: C) -> Result<()>
    where
        C: Command<T, Output = ()> + 'static,
    {
        tracing::debug!(%direction, %command, "bind");
        let old = self.registry.bind(direction, AnyCommand::new(command))?;
        self.replaced(direction, old);
        Ok(())
    }

    /// Binds [`NoCommand`] to the key.
    ///
    /// If the removed command was the one dispatched last, it stays the target of undo.
    pub fn unbind(&mut self, direction: Direction) -> Result<()> {
        tracing::debug!(%direction, "unbind");
        let old = self.registry.unbind(direction)?;
        self.replaced(direction, old);
        Ok(())
    }

    fn replaced(&mut self, direction: Direction, old: AnyCommand<T, ()>) {
        if let Some(last) = &mut self.last {
            last.replaced(direction, old);
        }
    }
}

impl<T, S> Keyboard<T, S> {
    /// Returns the key bindings.
    pub fn registry(&self) -> &Registry<Direction, AnyCommand<T, ()>> {
        &self.registry
    }

    /// Returns the key that was dispatched last.
    pub fn last(&self) -> Option<Direction> {
        self.last.as_ref().map(Last::key)
    }

    /// Returns the entry of the key that was dispatched last.
    pub fn last_entry(&self) -> Option<&Entry<Direction>> {
        self.last.as_ref().map(Last::entry)
    }

    /// Connects the slot and returns the previous one if it exists.
    pub fn connect(&mut self, slot: S) -> Option<S> {
        self.socket.connect(Some(slot))
    }

    /// Removes and returns the slot if it exists.
    pub fn disconnect(&mut self) -> Option<S> {
        self.socket.disconnect()
    }

    /// Returns a structure for configurable formatting of the key bindings.
    pub fn describe(&self) -> Display<'_, Direction, AnyCommand<T, ()>> {
        Display::new(&self.registry, self.last.as_ref().map(Last::entry))
    }
}

impl<T, S: Slot> Keyboard<T, S> {
    /// Executes the command bound to the key and remembers it for undo.
    ///
    /// # Errors
    /// If the key has no slot in the registry [`Error::Unbound`] is returned.
    pub fn press(&mut self, target: &mut T, direction: Direction) -> Result<()> {
        let command = self.registry.get_mut(direction)?;
        tracing::debug!(%direction, %command, "dispatch");
        command.execute(target);
        self.last = Some(Last::new(direction));
        Ok(())
    }

    /// Undoes the command that was dispatched last.
    ///
    /// Emits [`Signal::Undo`] naming the command before it is undone.
    ///
    /// # Errors
    /// If no key has been pressed yet [`Error::NothingToUndo`] is returned.
    pub fn undo(&mut self, target: &mut T) -> Result<()> {
        let Some(last) = &mut self.last else {
            tracing::warn!("undo requested before any key was pressed");
            return Err(Error::NothingToUndo);
        };
        let direction = last.key();
        let command = last.command(&mut self.registry)?;
        tracing::debug!(%direction, %command, "undo");
        self.socket.emit(|| Signal::Undo(command.to_string()));
        command.undo(target);
        Ok(())
    }
}

impl<T> Default for Keyboard<T>
where
    NoCommand: Command<T, Output = ()>,
{
    fn default() -> Self {
        Keyboard::new()
    }
}
