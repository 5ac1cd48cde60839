//! Command dispatcher for the wallet shell.
//!
//! The shell is a table-driven dispatch system. A fresh [`CommandRegistry`]
//! is built for every input line, filtered by the session's capability
//! mode, and the input token is resolved by name or by displayed index.
//! The resolved command is routed to exactly one handler in the
//! [`HandlerTable`].

mod console;
mod dispatcher;
mod error;
mod handlers;
mod listing;
mod registry;
mod resolver;
mod session;
mod shell;

#[cfg(test)]
mod testing;

/// Output channel that every diagnostic and listing is written to.
pub use console::Console;
/// Routes one input line to its handler.
pub use dispatcher::Dispatcher;
/// Failure reasons reported at the dispatch boundary.
pub use error::DispatchError;
/// Context handed to every handler.
pub use handlers::HandlerContext;
/// A command handler: any `fn` item or closure with the handler signature.
pub use handlers::Handler;
/// Map from canonical command name to handler.
pub use handlers::HandlerTable;
/// Whether the session continues after a handler returns.
pub use handlers::Flow;
/// Print one tier of the numbered command menu.
pub use listing::list_commands;
/// Filter commands by session capability mode.
pub use registry::available_commands;
/// A single registered command.
pub use registry::Command;
/// The ordered set of all known commands.
pub use registry::CommandRegistry;
/// Basic or advanced command tier.
pub use registry::Tier;
/// Map an input token to a command.
pub use resolver::resolve;
/// Wallet-side collaborator the handlers delegate to.
pub use session::WalletSession;
/// Read-dispatch state holder.
pub use shell::{Shell, ShellState};
