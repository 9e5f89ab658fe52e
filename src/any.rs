use crate::{Command, NoCommand};
use alloc::boxed::Box;
use core::fmt::{self, Debug, Display, Formatter};

/// Any command type.
///
/// This allows you to bind different commands in the same registry
/// as long as they all share the same target and output type.
pub struct AnyCommand<T, O> {
    command: Box<dyn Command<T, Output = O>>,
}

impl<T, O> AnyCommand<T, O> {
    /// Creates an `AnyCommand` from the provided command.
    pub fn new<C>(command: C) -> AnyCommand<T, O>
    where
        C: Command<T, Output = O>,
        C: 'static,
    {
        AnyCommand {
            command: Box::new(command),
        }
    }
}

/// Defaults to the inert command.
impl<T, O> Default for AnyCommand<T, O>
where
    NoCommand: Command<T, Output = O>,
{
    fn default() -> Self {
        AnyCommand::new(NoCommand)
    }
}

impl<T, O> Command<T> for AnyCommand<T, O> {
    type Output = O;

    fn execute(&mut self, target: &mut T) {
        self.command.execute(target)
    }

    fn undo(&mut self, target: &mut T) -> O {
        self.command.undo(target)
    }
}

impl<T, O> Display for AnyCommand<T, O> {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        Display::fmt(&self.command, f)
    }
}

impl<T, O> Debug for AnyCommand<T, O> {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        f.debug_tuple("AnyCommand")
            .field(&format_args!("{}", self.command))
            .finish()
    }
}
