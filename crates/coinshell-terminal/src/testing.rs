//! Test double for [`WalletSession`] that records which operation ran.

use coinshell_types::error::{CoinshellError, Result};

use crate::console::Console;
use crate::session::WalletSession;

pub(crate) struct RecordingWallet {
    pub view_only: bool,
    pub height: u64,
    pub calls: Vec<String>,
    /// When set, every collaborator call fails with this message.
    pub fail_with: Option<String>,
}

impl RecordingWallet {
    pub fn full() -> Self {
        Self {
            view_only: false,
            height: 1000,
            calls: Vec::new(),
            fail_with: None,
        }
    }

    pub fn view_only() -> Self {
        Self {
            view_only: true,
            ..Self::full()
        }
    }

    fn record(&mut self, call: impl Into<String>) -> Result<()> {
        self.calls.push(call.into());
        match &self.fail_with {
            Some(msg) => Err(CoinshellError::Wallet(msg.clone())),
            None => Ok(()),
        }
    }
}

impl WalletSession for RecordingWallet {
    fn is_view_only(&self) -> bool {
        self.view_only
    }

    fn address(&self) -> &str {
        "TRTLtestaddress"
    }

    fn last_known_height(&self) -> u64 {
        self.height
    }

    fn export_keys(&mut self, _console: &mut Console<'_>) -> Result<()> {
        self.record("export_keys")
    }

    fn status(&mut self, _console: &mut Console<'_>) -> Result<()> {
        self.record("status")
    }

    fn balance(&mut self, console: &mut Console<'_>) -> Result<()> {
        console.line("balance: 0")?;
        self.record("balance")
    }

    fn list_transfers(
        &mut self,
        incoming: bool,
        outgoing: bool,
        _console: &mut Console<'_>,
    ) -> Result<()> {
        let call = match (incoming, outgoing) {
            (true, true) => "list_transfers(in,out)",
            (true, false) => "list_transfers(in)",
            (false, true) => "list_transfers(out)",
            (false, false) => "list_transfers()",
        };
        self.record(call)
    }

    fn save_csv(&mut self, _console: &mut Console<'_>) -> Result<()> {
        self.record("save_csv")
    }

    fn save(&mut self, _console: &mut Console<'_>) -> Result<()> {
        self.record("save")
    }

    fn blockchain_height(&mut self, _console: &mut Console<'_>) -> Result<()> {
        self.record("blockchain_height")
    }

    fn reset(&mut self, _console: &mut Console<'_>) -> Result<()> {
        self.record("reset")
    }

    fn transfer(&mut self, height: u64, _console: &mut Console<'_>) -> Result<()> {
        self.record(format!("transfer@{height}"))
    }

    fn optimize(&mut self, _console: &mut Console<'_>) -> Result<()> {
        self.record("optimize")
    }

    fn address_book_add(&mut self, _console: &mut Console<'_>) -> Result<()> {
        self.record("address_book_add")
    }

    fn address_book_delete(&mut self, _console: &mut Console<'_>) -> Result<()> {
        self.record("address_book_delete")
    }

    fn address_book_list(&mut self, _console: &mut Console<'_>) -> Result<()> {
        self.record("address_book_list")
    }

    fn address_book_send(&mut self, height: u64, _console: &mut Console<'_>) -> Result<()> {
        self.record(format!("address_book_send@{height}"))
    }

    fn change_password(&mut self, _console: &mut Console<'_>) -> Result<()> {
        self.record("change_password")
    }
}
