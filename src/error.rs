use alloc::string::String;
use thiserror::Error;

/// A specialized Result type for keyboard operations.
pub type Result<T> = core::result::Result<T, Error>;

/// The errors that can occur when dispatching, undoing or parsing keys.
#[derive(Clone, Debug, Error, Eq, PartialEq)]
pub enum Error {
    /// The key has no slot in the registry.
    #[error("no slot for key `{0}` in the registry")]
    Unbound(&'static str),
    /// Undo was requested before any key was pressed.
    #[error("nothing to undo, no key has been pressed")]
    NothingToUndo,
    /// The string does not name a direction.
    #[error("`{0}` is not a direction")]
    UnknownDirection(String),
}
