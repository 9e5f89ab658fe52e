use crate::{Entry, Format, Key, Registry};
use alloc::string::ToString;
use core::fmt;

/// Configurable display formatting of the key bindings.
///
/// Every key is listed exactly once, in the order of `K::ALL`.
/// Created by the `describe` method on the keyboards.
///
/// # Examples
/// ```
/// # use keypress::Direction;
/// # use keypress::inverse::{Keyboard, MoveDown, MoveUp, PressKey};
/// let mut keyboard = Keyboard::<PressKey>::new();
/// keyboard.bind(Direction::Up, MoveUp).unwrap();
/// keyboard.bind(Direction::Down, MoveDown).unwrap();
///
/// let mut describe = keyboard.describe();
/// # #[cfg(feature = "colored")]
/// # describe.colored(false);
/// assert_eq!(
///     describe.heading(false).to_string(),
///     "UP: KEY UP\nDOWN: KEY DOWN\nLEFT: No Command\nRIGHT: No Command\n"
/// );
/// ```
#[derive(Copy, Clone, Debug)]
pub struct Display<'a, K, C> {
    registry: &'a Registry<K, C>,
    last: Option<&'a Entry<K>>,
    format: Format,
}

impl<'a, K, C> Display<'a, K, C> {
    pub(crate) fn new(registry: &'a Registry<K, C>, last: Option<&'a Entry<K>>) -> Self {
        Display {
            registry,
            last,
            format: Format::default(),
        }
    }

    /// Show colored output (on by default).
    ///
    /// Requires the `colored` feature to be enabled.
    #[cfg(feature = "colored")]
    pub fn colored(&mut self, on: bool) -> &mut Self {
        self.format.colored = on;
        self
    }

    /// Show the time stamp of the last dispatched key (on by default).
    pub fn detailed(&mut self, on: bool) -> &mut Self {
        self.format.detailed = on;
        self
    }

    /// Show the heading line (on by default).
    pub fn heading(&mut self, on: bool) -> &mut Self {
        self.format.heading = on;
        self
    }

    /// Mark the key that was dispatched last (on by default).
    pub fn last(&mut self, on: bool) -> &mut Self {
        self.format.last = on;
        self
    }
}

impl<K: Key, C: fmt::Display> Display<'_, K, C> {
    fn fmt_binding(&self, f: &mut fmt::Formatter, key: K, command: &C) -> fmt::Result {
        let last = self.last.filter(|entry| entry.key() == key);
        self.format.key(f, key.name())?;
        self.format.message(f, &command.to_string())?;
        self.format.label(f, last.is_some())?;
        #[cfg(feature = "chrono")]
        if let Some(entry) = last {
            if self.format.detailed && self.format.last {
                self.format.timestamp(f, &entry.timestamp())?;
            }
        }
        self.format.end(f)
    }
}

impl<K: Key, C: fmt::Display> fmt::Display for Display<'_, K, C> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        self.format.heading(f)?;
        for (key, command) in self.registry.iter() {
            self.fmt_binding(f, key, command)?;
        }
        Ok(())
    }
}
