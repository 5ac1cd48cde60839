//! Handler table: one handler per canonical command name.

use std::collections::HashMap;

use coinshell_types::error::Result;
use coinshell_types::style::Style;

use crate::console::Console;
use crate::listing::list_commands;
use crate::registry::{Command, CommandRegistry, Tier};
use crate::session::WalletSession;

/// What the dispatcher does after a handler returns.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    /// End the session.
    Exit,
}

/// Everything a handler may touch.
pub struct HandlerContext<'a, 'w> {
    pub session: &'a mut dyn WalletSession,
    pub console: &'a mut Console<'w>,
    /// The mode-filtered list the resolver used, for numbered listings.
    pub available: &'a [&'a Command],
}

/// A command handler.
///
/// Implemented for every `fn` item and closure with the handler signature,
/// so stateful handlers can be registered alongside the built-in ones.
pub trait Handler {
    fn handle(&self, ctx: &mut HandlerContext<'_, '_>) -> Result<Flow>;
}

impl<F> Handler for F
where
    F: Fn(&mut HandlerContext<'_, '_>) -> Result<Flow>,
{
    fn handle(&self, ctx: &mut HandlerContext<'_, '_>) -> Result<Flow> {
        self(ctx)
    }
}

/// Map from canonical command name to handler.
#[derive(Default)]
pub struct HandlerTable {
    handlers: HashMap<&'static str, Box<dyn Handler>>,
}

impl HandlerTable {
    /// Create an empty table.
    pub fn new() -> Self {
        Self::default()
    }

    /// A table wired for every command in the registry.
    pub fn standard() -> Self {
        let mut table = Self::new();
        table.register("address", address);
        table.register("advanced", advanced);
        table.register("balance", balance);
        table.register("exit", exit);
        table.register("export_keys", export_keys);
        table.register("help", help);
        table.register("transfer", transfer);
        table.register("ab_add", ab_add);
        table.register("ab_delete", ab_delete);
        table.register("ab_list", ab_list);
        table.register("ab_send", ab_send);
        table.register("bc_height", bc_height);
        table.register("change_password", change_password);
        table.register("incoming_transfers", incoming_transfers);
        table.register("list_transfers", list_transfers);
        table.register("optimize", optimize);
        table.register("outgoing_transfers", outgoing_transfers);
        table.register("reset", reset);
        table.register("save", save);
        table.register("save_csv", save_csv);
        table.register("status", status);
        table
    }

    /// Register a handler. Replaces any existing handler with the same name.
    pub fn register<F>(&mut self, name: &'static str, handler: F)
    where
        F: Fn(&mut HandlerContext<'_, '_>) -> Result<Flow> + 'static,
    {
        if self.handlers.insert(name, Box::new(handler)).is_some() {
            log::debug!("handler for '{name}' replaced");
        }
    }

    /// Remove a handler, returning whether one was registered.
    pub fn unregister(&mut self, name: &str) -> bool {
        self.handlers.remove(name).is_some()
    }

    pub fn get(&self, name: &str) -> Option<&dyn Handler> {
        self.handlers.get(name).map(|h| h.as_ref())
    }

    pub fn len(&self) -> usize {
        self.handlers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.handlers.is_empty()
    }

    /// Registry commands that have no handler, in registry order.
    pub fn missing(&self, registry: &CommandRegistry) -> Vec<&'static str> {
        registry
            .names()
            .filter(|name| !self.handlers.contains_key(name))
            .collect()
    }
}

impl std::fmt::Debug for HandlerTable {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut names: Vec<&str> = self.handlers.keys().copied().collect();
        names.sort_unstable();
        f.debug_struct("HandlerTable").field("handlers", &names).finish()
    }
}

// ---------------------------------------------------------------------------
// Listings and local handlers
// ---------------------------------------------------------------------------

fn help(ctx: &mut HandlerContext<'_, '_>) -> Result<Flow> {
    list_commands(ctx.available, Tier::Basic, ctx.console)?;
    Ok(Flow::Continue)
}

fn advanced(ctx: &mut HandlerContext<'_, '_>) -> Result<Flow> {
    list_commands(ctx.available, Tier::Advanced, ctx.console)?;
    Ok(Flow::Continue)
}

fn address(ctx: &mut HandlerContext<'_, '_>) -> Result<Flow> {
    ctx.console.styled_line(Style::Success, ctx.session.address())?;
    Ok(Flow::Continue)
}

fn exit(_ctx: &mut HandlerContext<'_, '_>) -> Result<Flow> {
    Ok(Flow::Exit)
}

// ---------------------------------------------------------------------------
// Wallet collaborators
// ---------------------------------------------------------------------------

fn export_keys(ctx: &mut HandlerContext<'_, '_>) -> Result<Flow> {
    ctx.session.export_keys(ctx.console)?;
    Ok(Flow::Continue)
}

fn status(ctx: &mut HandlerContext<'_, '_>) -> Result<Flow> {
    ctx.session.status(ctx.console)?;
    Ok(Flow::Continue)
}

fn balance(ctx: &mut HandlerContext<'_, '_>) -> Result<Flow> {
    ctx.session.balance(ctx.console)?;
    Ok(Flow::Continue)
}

fn incoming_transfers(ctx: &mut HandlerContext<'_, '_>) -> Result<Flow> {
    ctx.session.list_transfers(true, false, ctx.console)?;
    Ok(Flow::Continue)
}

fn outgoing_transfers(ctx: &mut HandlerContext<'_, '_>) -> Result<Flow> {
    ctx.session.list_transfers(false, true, ctx.console)?;
    Ok(Flow::Continue)
}

fn list_transfers(ctx: &mut HandlerContext<'_, '_>) -> Result<Flow> {
    ctx.session.list_transfers(true, true, ctx.console)?;
    Ok(Flow::Continue)
}

fn save_csv(ctx: &mut HandlerContext<'_, '_>) -> Result<Flow> {
    ctx.session.save_csv(ctx.console)?;
    Ok(Flow::Continue)
}

fn save(ctx: &mut HandlerContext<'_, '_>) -> Result<Flow> {
    ctx.session.save(ctx.console)?;
    Ok(Flow::Continue)
}

fn bc_height(ctx: &mut HandlerContext<'_, '_>) -> Result<Flow> {
    ctx.session.blockchain_height(ctx.console)?;
    Ok(Flow::Continue)
}

fn reset(ctx: &mut HandlerContext<'_, '_>) -> Result<Flow> {
    ctx.session.reset(ctx.console)?;
    Ok(Flow::Continue)
}

fn transfer(ctx: &mut HandlerContext<'_, '_>) -> Result<Flow> {
    let height = ctx.session.last_known_height();
    ctx.session.transfer(height, ctx.console)?;
    Ok(Flow::Continue)
}

fn optimize(ctx: &mut HandlerContext<'_, '_>) -> Result<Flow> {
    ctx.session.optimize(ctx.console)?;
    Ok(Flow::Continue)
}

fn ab_add(ctx: &mut HandlerContext<'_, '_>) -> Result<Flow> {
    ctx.session.address_book_add(ctx.console)?;
    Ok(Flow::Continue)
}

fn ab_delete(ctx: &mut HandlerContext<'_, '_>) -> Result<Flow> {
    ctx.session.address_book_delete(ctx.console)?;
    Ok(Flow::Continue)
}

fn ab_list(ctx: &mut HandlerContext<'_, '_>) -> Result<Flow> {
    ctx.session.address_book_list(ctx.console)?;
    Ok(Flow::Continue)
}

fn ab_send(ctx: &mut HandlerContext<'_, '_>) -> Result<Flow> {
    let height = ctx.session.last_known_height();
    ctx.session.address_book_send(height, ctx.console)?;
    Ok(Flow::Continue)
}

fn change_password(ctx: &mut HandlerContext<'_, '_>) -> Result<Flow> {
    ctx.session.change_password(ctx.console)?;
    Ok(Flow::Continue)
}
