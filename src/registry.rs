//! A registry of key bindings.

use crate::{Error, Key, Result};
use arrayvec::ArrayVec;
use core::marker::PhantomData;
use core::mem;

/// The largest key set a registry can hold.
const CAPACITY: usize = 8;

/// Maps every key in `K::ALL` to exactly one command.
///
/// Keys that have not been bound map to the default command, which is
/// [`NoCommand`](crate::NoCommand) for [`AnyCommand`](crate::AnyCommand).
/// A slot is never empty: unbinding a key puts the default command back.
///
/// # Examples
/// ```
/// # use keypress::{AnyCommand, Direction, Registry};
/// # use keypress::inverse::{MoveLeft, PressKey};
/// let mut registry = Registry::<Direction, AnyCommand<PressKey, ()>>::new();
/// registry.bind(Direction::Left, AnyCommand::new(MoveLeft)).unwrap();
///
/// let names = registry
///     .iter()
///     .map(|(key, command)| format!("{key}: {command}"))
///     .collect::<Vec<_>>();
/// assert_eq!(names, ["UP: No Command", "DOWN: No Command", "LEFT: KEY LEFT", "RIGHT: No Command"]);
/// ```
#[derive(Clone, Debug)]
pub struct Registry<K, C> {
    slots: ArrayVec<C, CAPACITY>,
    pd: PhantomData<K>,
}

impl<K: Key, C: Default> Registry<K, C> {
    /// Returns a new registry with every key bound to the default command.
    ///
    /// A key set with more keys than the registry can hold fails to compile.
    pub fn new() -> Registry<K, C> {
        const { assert!(K::ALL.len() <= CAPACITY, "too many keys for a registry") };
        Registry {
            slots: K::ALL.iter().map(|_| C::default()).collect(),
            pd: PhantomData,
        }
    }

    /// Binds the command to the key and returns the command that was bound before.
    ///
    /// # Errors
    /// If the key has no slot [`Error::Unbound`] is returned.
    pub fn bind(&mut self, key: K, command: C) -> Result<C> {
        self.get_mut(key).map(|slot| mem::replace(slot, command))
    }

    /// Puts the default command back in the slot of the key and returns
    /// the command that was bound before.
    ///
    /// # Errors
    /// If the key has no slot [`Error::Unbound`] is returned.
    pub fn unbind(&mut self, key: K) -> Result<C> {
        self.bind(key, C::default())
    }
}

impl<K: Key, C> Registry<K, C> {
    /// Returns the command bound to the key.
    ///
    /// # Errors
    /// If the key has no slot [`Error::Unbound`] is returned.
    pub fn get(&self, key: K) -> Result<&C> {
        self.slots.get(key.index()).ok_or(Error::Unbound(key.name()))
    }

    /// Returns the command bound to the key.
    ///
    /// # Errors
    /// If the key has no slot [`Error::Unbound`] is returned.
    pub fn get_mut(&mut self, key: K) -> Result<&mut C> {
        self.slots
            .get_mut(key.index())
            .ok_or(Error::Unbound(key.name()))
    }

    /// Returns an iterator over every key and its command, in the order of `K::ALL`.
    pub fn iter(&self) -> impl Iterator<Item = (K, &C)> {
        K::ALL.iter().copied().zip(self.slots.iter())
    }

    /// Returns the number of slots, one for each key.
    pub fn len(&self) -> usize {
        self.slots.len()
    }

    /// Returns `true` if the key set is empty.
    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }
}

impl<K: Key, C: Default> Default for Registry<K, C> {
    fn default() -> Self {
        Registry::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Direction;

    #[derive(Clone, Debug, Default, PartialEq)]
    struct Name(&'static str);

    #[derive(Copy, Clone, Debug, Eq, PartialEq)]
    struct Broken;

    impl Key for Broken {
        const ALL: &'static [Broken] = &[];

        fn index(self) -> usize {
            0
        }

        fn name(self) -> &'static str {
            "BROKEN"
        }
    }

    #[test]
    fn bind_returns_previous() {
        let mut registry = Registry::<Direction, Name>::new();
        assert_eq!(registry.bind(Direction::Up, Name("a")), Ok(Name("")));
        assert_eq!(registry.bind(Direction::Up, Name("b")), Ok(Name("a")));
        assert_eq!(registry.get(Direction::Up), Ok(&Name("b")));
        assert_eq!(registry.unbind(Direction::Up), Ok(Name("b")));
        assert_eq!(registry.get(Direction::Up), Ok(&Name("")));
    }

    #[test]
    fn sentinel_has_a_slot() {
        let registry = Registry::<Option<Direction>, Name>::new();
        assert_eq!(registry.len(), 5);
        assert_eq!(registry.get(None), Ok(&Name("")));
    }

    #[test]
    fn lookup_miss() {
        let mut registry = Registry::<Broken, Name>::new();
        assert!(registry.is_empty());
        assert_eq!(registry.get(Broken), Err(Error::Unbound("BROKEN")));
        assert_eq!(
            registry.bind(Broken, Name("a")),
            Err(Error::Unbound("BROKEN"))
        );
    }
}
