use crate::{Entry, Key, Registry, Result};

/// The command that was executed last.
///
/// While its key keeps the binding it was dispatched with, the command is
/// looked up in the registry. Once `bind` or `unbind` replaces that binding,
/// the displaced command is held here so undo still reaches it.
pub(crate) struct Last<K, C> {
    entry: Entry<K>,
    detached: Option<C>,
}

impl<K: Key, C> Last<K, C> {
    pub fn new(key: K) -> Last<K, C> {
        Last {
            entry: Entry::from(key),
            detached: None,
        }
    }

    pub fn key(&self) -> K {
        self.entry.key()
    }

    pub fn entry(&self) -> &Entry<K> {
        &self.entry
    }

    /// Keeps `old` if it is the executed command that was just replaced in the slot of `key`.
    pub fn replaced(&mut self, key: K, old: C) {
        if self.detached.is_none() && self.key() == key {
            self.detached = Some(old);
        }
    }

    pub fn command<'a>(&'a mut self, registry: &'a mut Registry<K, C>) -> Result<&'a mut C> {
        match &mut self.detached {
            Some(command) => Ok(command),
            None => registry.get_mut(self.entry.key()),
        }
    }
}
