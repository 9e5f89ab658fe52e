use super::Keyboard;
use crate::{AnyCommand, Command, Direction, NoCommand, Registry, Socket};

/// Builder for a [`Keyboard`].
///
/// # Examples
/// ```
/// # use keypress::{Direction, Signal};
/// # use keypress::restore::{Keyboard, MoveDown, MoveUp, PressKey};
/// # let mut target = PressKey::new();
/// let mut keyboard = Keyboard::builder()
///     .bind(Some(Direction::Up), MoveUp::new())
///     .bind(Some(Direction::Down), MoveDown::new())
///     .connect(|signal: Signal| { dbg!(signal); })
///     .build();
/// # keyboard.press(&mut target, Some(Direction::Up)).unwrap();
/// ```
pub struct Builder<T, S = ()> {
    registry: Registry<Option<Direction>, AnyCommand<T, Option<Direction>>>,
    socket: Socket<S>,
}

impl<T, S> Builder<T, S>
where
    NoCommand: Command<T, Output = Option<Direction>>,
{
    /// Binds the command to the key, replacing any earlier binding of the key.
    pub fn bind<C>(mut self, key: Option<Direction>, command: C) -> Builder<T, S>
    where
        C: Command<T, Output = Option<Direction>> + 'static,
    {
        // Every key of the set has a slot.
        self.registry.bind(key, AnyCommand::new(command)).ok();
        self
    }

    /// Connects the slot that receives restore signals.
    pub fn connect(mut self, slot: S) -> Builder<T, S> {
        self.socket = Socket::new(slot);
        self
    }

    /// Builds the keyboard.
    pub fn build(self) -> Keyboard<T, S> {
        Keyboard {
            registry: self.registry,
            last: None,
            socket: self.socket,
        }
    }
}

impl<T, S> Default for Builder<T, S>
where
    NoCommand: Command<T, Output = Option<Direction>>,
{
    fn default() -> Self {
        Builder {
            registry: Registry::new(),
            socket: Socket::default(),
        }
    }
}
