//! Read-dispatch state holder.

use coinshell_types::error::Result;

use crate::console::Console;
use crate::dispatcher::Dispatcher;
use crate::session::WalletSession;

/// Whether the shell still accepts input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShellState {
    Running,
    Exited,
}

/// A dispatcher bound to one wallet session.
///
/// The only transition out of `Running` is a successful `exit`. Once
/// exited, further lines are ignored.
pub struct Shell<S: WalletSession> {
    dispatcher: Dispatcher,
    session: S,
    state: ShellState,
}

impl<S: WalletSession> Shell<S> {
    pub fn new(dispatcher: Dispatcher, session: S) -> Self {
        Self {
            dispatcher,
            session,
            state: ShellState::Running,
        }
    }

    pub fn state(&self) -> ShellState {
        self.state
    }

    pub fn dispatcher(&self) -> &Dispatcher {
        &self.dispatcher
    }

    pub fn session(&self) -> &S {
        &self.session
    }

    pub fn session_mut(&mut self) -> &mut S {
        &mut self.session
    }

    /// Trim and dispatch one raw input line.
    pub fn handle_line(&mut self, line: &str, console: &mut Console<'_>) -> Result<ShellState> {
        if self.state == ShellState::Exited {
            return Ok(self.state);
        }
        if self
            .dispatcher
            .dispatch(&mut self.session, line.trim(), console)?
        {
            self.state = ShellState::Exited;
        }
        Ok(self.state)
    }

    /// Consume the shell, returning the session.
    pub fn into_session(self) -> S {
        self.session
    }
}
