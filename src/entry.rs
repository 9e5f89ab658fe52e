#[cfg(feature = "chrono")]
use chrono::{DateTime, Utc};
use core::fmt::{self, Display, Formatter};
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Marks the key that was dispatched most recently.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Copy, Clone, Debug, Hash, Eq, PartialEq)]
pub struct Entry<K> {
    key: K,
    #[cfg(feature = "chrono")]
    timestamp: DateTime<Utc>,
}

impl<K: Copy> Entry<K> {
    /// Returns the key.
    pub fn key(&self) -> K {
        self.key
    }

    /// Returns when the key was dispatched.
    #[cfg(feature = "chrono")]
    pub fn timestamp(&self) -> DateTime<Utc> {
        self.timestamp
    }
}

impl<K> From<K> for Entry<K> {
    fn from(key: K) -> Self {
        Entry {
            key,
            #[cfg(feature = "chrono")]
            timestamp: Utc::now(),
        }
    }
}

impl<K: crate::Key> Display for Entry<K> {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        f.write_str(self.key.name())
    }
}
