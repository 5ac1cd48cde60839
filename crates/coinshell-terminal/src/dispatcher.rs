//! Route one input line to its handler.

use coinshell_types::error::{CoinshellError, Result};
use coinshell_types::style::Style;

use crate::console::Console;
use crate::error::DispatchError;
use crate::handlers::{Flow, HandlerContext, HandlerTable};
use crate::registry::{CommandRegistry, available_commands};
use crate::resolver::resolve;
use crate::session::WalletSession;

/// Routes input lines to handlers.
///
/// Holds only static configuration. The registry and the mode-filtered
/// list are rebuilt on every call, so the numbers a listing printed and the
/// numbers the next call accepts always agree.
#[derive(Debug)]
pub struct Dispatcher {
    ticker: String,
    handlers: HandlerTable,
}

impl Dispatcher {
    pub fn new(ticker: impl Into<String>, handlers: HandlerTable) -> Self {
        Self {
            ticker: ticker.into(),
            handlers,
        }
    }

    /// A dispatcher with every registry command wired.
    pub fn standard(ticker: impl Into<String>) -> Self {
        Self::new(ticker, HandlerTable::standard())
    }

    /// Build the registry for this dispatcher's ticker.
    pub fn registry(&self) -> CommandRegistry {
        CommandRegistry::build(&self.ticker)
    }

    pub fn ticker(&self) -> &str {
        &self.ticker
    }

    /// Verify every registry command has a handler.
    pub fn check_wiring(&self) -> Result<()> {
        let missing = self.handlers.missing(&self.registry());
        if missing.is_empty() {
            return Ok(());
        }
        Err(CoinshellError::Command(format!(
            "no handler for: {}",
            missing.join(", ")
        )))
    }

    /// Dispatch one trimmed input line.
    ///
    /// Returns `true` when the session should end. Resolution, permission
    /// and handler failures are reported on the console and never returned;
    /// `Err` means the console itself could not be written.
    pub fn dispatch(
        &self,
        session: &mut dyn WalletSession,
        input: &str,
        console: &mut Console<'_>,
    ) -> Result<bool> {
        let registry = self.registry();
        let view_only = session.is_view_only();
        let available = available_commands(registry.commands(), view_only);

        let command = match resolve(input, registry.commands(), &available) {
            Ok(command) => command,
            Err(e) => {
                log::debug!("'{input}' did not resolve: {e}");
                e.report(console)?;
                return Ok(false);
            },
        };
        let name = command.name;
        log::debug!("'{input}' resolved to {name}");

        if view_only && !command.available_in_view_wallet {
            DispatchError::ForbiddenInViewOnlyMode(name.to_string()).report(console)?;
            return Ok(false);
        }

        let Some(handler) = self.handlers.get(name) else {
            log::warn!("command {name} has no handler");
            DispatchError::HandlerNotWired(name.to_string()).report(console)?;
            return Ok(false);
        };

        let mut ctx = HandlerContext {
            session,
            console: &mut *console,
            available: &available,
        };
        match handler.handle(&mut ctx) {
            Ok(Flow::Exit) => {
                log::info!("session exit requested");
                Ok(true)
            },
            Ok(Flow::Continue) => Ok(false),
            Err(e) => {
                log::warn!("{name} failed: {e}");
                console.line(&format!("{} {e}", console.paint(Style::Warning, "error:")))?;
                Ok(false)
            },
        }
    }
}
