//! The wallet-side collaborator that handlers delegate to.

use coinshell_types::error::Result;

use crate::console::Console;

/// Wallet session state and the operations the shell can invoke on it.
///
/// The dispatcher only reads [`is_view_only`](Self::is_view_only). Every
/// other method is called from exactly one handler and owns its own
/// behaviour, including any interactive prompting and error reporting.
pub trait WalletSession {
    /// The session holds only view keys and cannot spend.
    fn is_view_only(&self) -> bool;

    /// Payment address shown by the `address` command.
    fn address(&self) -> &str;

    /// Last block height the node reported.
    fn last_known_height(&self) -> u64;

    fn export_keys(&mut self, console: &mut Console<'_>) -> Result<()>;

    /// Daemon sync status.
    fn status(&mut self, console: &mut Console<'_>) -> Result<()>;

    fn balance(&mut self, console: &mut Console<'_>) -> Result<()>;

    /// Print transfers, filtered by direction.
    fn list_transfers(
        &mut self,
        incoming: bool,
        outgoing: bool,
        console: &mut Console<'_>,
    ) -> Result<()>;

    fn save_csv(&mut self, console: &mut Console<'_>) -> Result<()>;

    fn save(&mut self, console: &mut Console<'_>) -> Result<()>;

    /// Print the wallet and network heights.
    fn blockchain_height(&mut self, console: &mut Console<'_>) -> Result<()>;

    /// Rescan the chain from zero.
    fn reset(&mut self, console: &mut Console<'_>) -> Result<()>;

    /// Build and send a transfer, using `height` for unlock checks.
    fn transfer(&mut self, height: u64, console: &mut Console<'_>) -> Result<()>;

    /// Merge small outputs so large amounts can be sent.
    fn optimize(&mut self, console: &mut Console<'_>) -> Result<()>;

    fn address_book_add(&mut self, console: &mut Console<'_>) -> Result<()>;

    fn address_book_delete(&mut self, console: &mut Console<'_>) -> Result<()>;

    fn address_book_list(&mut self, console: &mut Console<'_>) -> Result<()>;

    /// Send to an address book entry, using `height` for unlock checks.
    fn address_book_send(&mut self, height: u64, console: &mut Console<'_>) -> Result<()>;

    fn change_password(&mut self, console: &mut Console<'_>) -> Result<()>;
}
