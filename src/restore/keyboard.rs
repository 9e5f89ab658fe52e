use super::Builder;
use crate::last::Last;
use crate::{
    AnyCommand, Command, Direction, Display, Entry, Error, NoCommand, Registry, Result, Signal,
    Slot, Socket,
};

/// Routes key presses to bound restoring commands.
///
/// The registry has a slot for every direction and one for the `None`
/// sentinel, all bound to [`NoCommand`] until something else is bound.
/// [`undo`](Keyboard::undo) asks the command that was dispatched last for the
/// direction it replaced and dispatches that direction again. Rebinding the
/// key in between does not change which command is asked.
///
/// # Examples
/// ```
/// # use keypress::Direction;
/// # use keypress::restore::{Keyboard, MoveLeft, MoveUp, PressKey};
/// # fn main() -> keypress::Result<()> {
/// let mut target = PressKey::new();
/// let mut keyboard = Keyboard::new();
/// keyboard.bind(Some(Direction::Up), MoveUp::new())?;
/// keyboard.bind(Some(Direction::Left), MoveLeft::new())?;
///
/// keyboard.press(&mut target, Some(Direction::Up))?;
/// keyboard.press(&mut target, Some(Direction::Left))?;
/// assert_eq!(keyboard.undo(&mut target)?, Some(Direction::Up));
/// assert_eq!(target.current(), Some(Direction::Up));
///
/// // The restored up command captured left, so undo toggles back.
/// assert_eq!(keyboard.undo(&mut target)?, Some(Direction::Left));
/// assert_eq!(target.current(), Some(Direction::Left));
/// # Ok(())
/// # }
/// ```
pub struct Keyboard<T, S = ()> {
    pub(super) registry: Registry<Option<Direction>, AnyCommand<T, Option<Direction>>>,
    pub(super) last: Option<Last<Option<Direction>, AnyCommand<T, Option<Direction>>>>,
    pub(super) socket: Socket<S>,
}

impl<T> Keyboard<T>
where
    NoCommand: Command<T, Output = Option<Direction>>,
{
    /// Returns a new keyboard with every key bound to [`NoCommand`].
    pub fn new() -> Keyboard<T> {
        Builder::default().build()
    }
}

impl<T, S> Keyboard<T, S>
where
    NoCommand: Command<T, Output = Option<Direction>>,
{
    /// Returns a builder for a keyboard.
    pub fn builder() -> Builder<T, S> {
        Builder::default()
    }

    /// Binds the command to the key, replacing the command that was bound before.
    ///
    /// If the replaced command was the one dispatched last, it stays the target of
    /// undo together with the direction it captured.
    pub fn bind<C>(&mut self, key: Option<Direction>, command: C) -> Result<()>
    where
        C: Command<T, Output = Option<Direction>> + 'static,
    {
        tracing::debug!(?key, %command, "bind");
        let old = self.registry.bind(key, AnyCommand::new(command))?;
        self.replaced(key, old);
        Ok(())
    }

    /// Binds [`NoCommand`] to the key.
    ///
    /// If the removed command was the one dispatched last, it stays the target of undo.
    pub fn unbind(&mut self, key: Option<Direction>) -> Result<()> {
        tracing::debug!(?key, "unbind");
        let old = self.registry.unbind(key)?;
        self.replaced(key, old);
        Ok(())
    }

    fn replaced(&mut self, key: Option<Direction>, old: AnyCommand<T, Option<Direction>>) {
        if let Some(last) = &mut self.last {
            last.replaced(key, old);
        }
    }
}

impl<T, S> Keyboard<T, S> {
    /// Returns the key bindings.
    pub fn registry(&self) -> &Registry<Option<Direction>, AnyCommand<T, Option<Direction>>> {
        &self.registry
    }

    /// Returns the key that was dispatched last, `None` if no key has been dispatched.
    ///
    /// `Some(None)` means the sentinel was dispatched last.
    pub fn last(&self) -> Option<Option<Direction>> {
        self.last.as_ref().map(Last::key)
    }

    /// Returns the entry of the key that was dispatched last.
    pub fn last_entry(&self) -> Option<&Entry<Option<Direction>>> {
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
    pub fn describe(&self) -> Display<'_, Option<Direction>, AnyCommand<T, Option<Direction>>> {
        Display::new(&self.registry, self.last.as_ref().map(Last::entry))
    }
}

impl<T, S: Slot> Keyboard<T, S> {
    /// Executes the command bound to the key and remembers it for undo.
    ///
    /// # Errors
    /// If the key has no slot in the registry [`Error::Unbound`] is returned.
    pub fn press(&mut self, target: &mut T, key: Option<Direction>) -> Result<()> {
        let command = self.registry.get_mut(key)?;
        tracing::debug!(?key, %command, "dispatch");
        command.execute(target);
        self.last = Some(Last::new(key));
        Ok(())
    }

    /// Restores the direction that was active before the last dispatch.
    ///
    /// Emits [`Signal::Restore`] naming the direction and then presses it, so the
    /// command bound to the restored direction becomes the last dispatched one.
    /// Returns the restored direction.
    ///
    /// # Errors
    /// If no key has been pressed yet [`Error::NothingToUndo`] is returned.
    pub fn undo(&mut self, target: &mut T) -> Result<Option<Direction>> {
        let Some(last) = &mut self.last else {
            tracing::warn!("undo requested before any key was pressed");
            return Err(Error::NothingToUndo);
        };
        let key = last.key();
        let command = last.command(&mut self.registry)?;
        let previous = command.undo(target);
        tracing::debug!(?key, ?previous, %command, "undo");
        self.socket.emit(|| Signal::Restore(previous));
        self.press(target, previous)?;
        Ok(previous)
    }
}

impl<T> Default for Keyboard<T>
where
    NoCommand: Command<T, Output = Option<Direction>>,
{
    fn default() -> Self {
        Keyboard::new()
    }
}
