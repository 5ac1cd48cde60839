//! In-memory wallet session so the shell runs without a node.

use std::path::PathBuf;

use coinshell_terminal::{Console, WalletSession};
use coinshell_types::error::{CoinshellError, Result};
use coinshell_types::style::Style;

/// Atomic units per coin.
const COIN: u64 = 100;

/// Blocks a received transfer stays locked for.
const UNLOCK_BLOCKS: u64 = 10;

#[derive(Debug, Clone)]
struct Transfer {
    /// Positive for incoming, negative for outgoing.
    amount: i64,
    height: u64,
    hash: String,
}

/// A wallet session backed by fixed demo data.
pub struct DemoWallet {
    ticker: String,
    view_only: bool,
    address: String,
    wallet_height: u64,
    network_height: u64,
    transfers: Vec<Transfer>,
    address_book: Vec<(String, String)>,
    csv_path: PathBuf,
    saves: usize,
}

impl DemoWallet {
    pub fn new(ticker: &str, view_only: bool) -> Self {
        let transfers = vec![
            Transfer {
                amount: 150_000,
                height: 1_200,
                hash: "9a1c0e5f3b7d2a64".to_string(),
            },
            Transfer {
                amount: -25_050,
                height: 1_350,
                hash: "47be91d0c2f8a315".to_string(),
            },
            Transfer {
                amount: 4_200,
                height: 1_496,
                hash: "e03f6b2d98c17a5e".to_string(),
            },
        ];
        Self {
            ticker: ticker.to_string(),
            view_only,
            address: format!("{ticker}v1demo5s8Hn2QxK7pLwZ3cYr9mE4tUbAfVg6"),
            wallet_height: 1_500,
            network_height: 1_500,
            transfers,
            address_book: vec![("alice".to_string(), format!("{ticker}v1alice7Jq2"))],
            csv_path: PathBuf::from("transactions.csv"),
            saves: 0,
        }
    }

    /// Write CSV exports to `path` instead of the working directory.
    pub fn with_csv_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.csv_path = path.into();
        self
    }

    /// Number of times the wallet was saved.
    pub fn saves(&self) -> usize {
        self.saves
    }

    fn format_amount(&self, atomic: u64) -> String {
        format!("{}.{:02} {}", atomic / COIN, atomic % COIN, self.ticker)
    }

    fn balances(&self) -> (u64, u64) {
        let mut unlocked = 0i64;
        let mut locked = 0i64;
        for t in &self.transfers {
            if t.amount > 0 && t.height + UNLOCK_BLOCKS > self.wallet_height {
                locked += t.amount;
            } else {
                unlocked += t.amount;
            }
        }
        (unlocked.max(0) as u64, locked.max(0) as u64)
    }

    fn unsupported(&self, what: &str) -> CoinshellError {
        CoinshellError::Wallet(format!(
            "{what} needs a connected node, not available in demo mode"
        ))
    }
}

impl WalletSession for DemoWallet {
    fn is_view_only(&self) -> bool {
        self.view_only
    }

    fn address(&self) -> &str {
        &self.address
    }

    fn last_known_height(&self) -> u64 {
        self.network_height
    }

    fn export_keys(&mut self, console: &mut Console<'_>) -> Result<()> {
        console.line(&format!(
            "Private view key: {}",
            console.paint(Style::Success, "3b5f0d9ae17c42b8")
        ))?;
        if self.view_only {
            console.styled_line(
                Style::Warning,
                "This is a view only wallet, there is no spend key to export.",
            )
        } else {
            console.line(&format!(
                "Private spend key: {}",
                console.paint(Style::Success, "c81e2a7f604d93b5")
            ))
        }
    }

    fn status(&mut self, console: &mut Console<'_>) -> Result<()> {
        console.line(&format!(
            "Synced {}/{} blocks",
            self.wallet_height, self.network_height
        ))?;
        console.line("Connected to: demo (no daemon)")
    }

    fn balance(&mut self, console: &mut Console<'_>) -> Result<()> {
        let (unlocked, locked) = self.balances();
        console.line(&format!(
            "Available balance: {}",
            console.paint(Style::Success, &self.format_amount(unlocked))
        ))?;
        console.line(&format!(
            "Locked (unconfirmed) balance: {}",
            console.paint(Style::Warning, &self.format_amount(locked))
        ))?;
        if self.view_only {
            console.styled_line(
                Style::Information,
                "Please note that view only wallets can only track incoming transactions,",
            )?;
            console.styled_line(
                Style::Information,
                "and so your wallet balance may appear inflated.",
            )?;
        }
        Ok(())
    }

    fn list_transfers(
        &mut self,
        incoming: bool,
        outgoing: bool,
        console: &mut Console<'_>,
    ) -> Result<()> {
        let mut shown = 0;
        for t in &self.transfers {
            let is_incoming = t.amount > 0;
            if (is_incoming && !incoming) || (!is_incoming && !outgoing) {
                continue;
            }
            let (label, style) = if is_incoming {
                ("Incoming", Style::Success)
            } else {
                ("Outgoing", Style::Warning)
            };
            let line = format!(
                "{} transfer: {} at height {} ({})",
                label,
                console.paint(style, &self.format_amount(t.amount.unsigned_abs())),
                t.height,
                t.hash,
            );
            console.line(&line)?;
            shown += 1;
        }
        if shown == 0 {
            console.styled_line(Style::Warning, "No transfers to show.")?;
        }
        Ok(())
    }

    fn save_csv(&mut self, console: &mut Console<'_>) -> Result<()> {
        let mut csv = String::from("Height,Hash,Amount,Direction\n");
        for t in &self.transfers {
            let direction = if t.amount > 0 { "IN" } else { "OUT" };
            csv.push_str(&format!(
                "{},{},{},{}\n",
                t.height,
                t.hash,
                self.format_amount(t.amount.unsigned_abs()),
                direction
            ));
        }
        std::fs::write(&self.csv_path, csv)?;
        log::info!(
            "wrote {} transfers to {}",
            self.transfers.len(),
            self.csv_path.display()
        );
        console.styled_line(
            Style::Success,
            &format!("CSV successfully written to {}!", self.csv_path.display()),
        )
    }

    fn save(&mut self, console: &mut Console<'_>) -> Result<()> {
        self.saves += 1;
        console.styled_line(Style::Success, "Saved.")
    }

    fn blockchain_height(&mut self, console: &mut Console<'_>) -> Result<()> {
        console.line(&format!(
            "Local blockchain height: {}",
            console.paint(Style::Success, &self.wallet_height.to_string())
        ))?;
        console.line(&format!(
            "Network blockchain height: {}",
            console.paint(Style::Success, &self.network_height.to_string())
        ))
    }

    fn reset(&mut self, console: &mut Console<'_>) -> Result<()> {
        console.styled_line(Style::Information, "Resetting wallet...")?;
        // Demo data is local, so the rescan completes at once.
        self.wallet_height = self.network_height;
        console.styled_line(
            Style::Success,
            &format!("Finished scanning {} blocks.", self.network_height),
        )
    }

    fn transfer(&mut self, height: u64, _console: &mut Console<'_>) -> Result<()> {
        log::debug!("transfer requested at height {height}");
        Err(self.unsupported("transfer"))
    }

    fn optimize(&mut self, console: &mut Console<'_>) -> Result<()> {
        console.styled_line(Style::Success, "Wallet fully optimized!")
    }

    fn address_book_add(&mut self, _console: &mut Console<'_>) -> Result<()> {
        Err(self.unsupported("ab_add"))
    }

    fn address_book_delete(&mut self, _console: &mut Console<'_>) -> Result<()> {
        Err(self.unsupported("ab_delete"))
    }

    fn address_book_list(&mut self, console: &mut Console<'_>) -> Result<()> {
        if self.address_book.is_empty() {
            return console.styled_line(Style::Warning, "Your address book is empty!");
        }
        for (name, address) in &self.address_book {
            console.line(&format!(
                "{}: {}",
                console.paint(Style::Information, name),
                console.paint(Style::Success, address)
            ))?;
        }
        Ok(())
    }

    fn address_book_send(&mut self, height: u64, _console: &mut Console<'_>) -> Result<()> {
        log::debug!("address book send requested at height {height}");
        Err(self.unsupported("ab_send"))
    }

    fn change_password(&mut self, _console: &mut Console<'_>) -> Result<()> {
        Err(self.unsupported("change_password"))
    }
}
