//! The canonical command set and the availability filter.

/// Command tier. Basic commands are listed (and numbered) first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Tier {
    Basic,
    Advanced,
}

/// A single registered command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Command {
    /// Canonical name (what the user types).
    pub name: &'static str,
    /// One-line description for listings.
    pub description: String,
    /// Usable in a view-only wallet.
    pub available_in_view_wallet: bool,
    pub tier: Tier,
}

impl Command {
    fn new(
        name: &'static str,
        description: impl Into<String>,
        available_in_view_wallet: bool,
        tier: Tier,
    ) -> Self {
        Self {
            name,
            description: description.into(),
            available_in_view_wallet,
            tier,
        }
    }

    /// Whether the command belongs to the advanced tier.
    pub fn is_advanced(&self) -> bool {
        self.tier == Tier::Advanced
    }
}

/// The ordered set of all known commands.
///
/// Ordering is by tier, then by name. Numeric input indexes into this
/// ordering, so the listing and the resolver must both see it unchanged.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandRegistry {
    commands: Vec<Command>,
}

impl CommandRegistry {
    /// Build the full command set, substituting `ticker` into descriptions.
    pub fn build(ticker: &str) -> Self {
        use Tier::{Advanced, Basic};

        let mut commands = vec![
            // Basic commands
            Command::new("address", "Display your payment address", true, Basic),
            Command::new("advanced", "List available advanced commands", true, Basic),
            Command::new(
                "balance",
                format!("Display how much {ticker} you have"),
                true,
                Basic,
            ),
            Command::new("exit", "Exit and save your wallet", true, Basic),
            Command::new("export_keys", "Export your private keys", true, Basic),
            Command::new("help", "List this help message", true, Basic),
            Command::new("transfer", format!("Send {ticker} to someone"), false, Basic),
            // Advanced commands
            Command::new("ab_add", "Add a person to your address book", true, Advanced),
            Command::new(
                "ab_delete",
                "Delete a person from your address book",
                true,
                Advanced,
            ),
            Command::new("ab_list", "List everyone in your address book", true, Advanced),
            Command::new(
                "ab_send",
                format!("Send {ticker} to someone in your address book"),
                false,
                Advanced,
            ),
            Command::new("bc_height", "Show the blockchain height", true, Advanced),
            Command::new("change_password", "Change your wallet password", true, Advanced),
            Command::new("incoming_transfers", "Show incoming transfers", true, Advanced),
            Command::new("list_transfers", "Show all transfers", false, Advanced),
            Command::new(
                "optimize",
                "Optimize your wallet to send large amounts",
                false,
                Advanced,
            ),
            Command::new("outgoing_transfers", "Show outgoing transfers", false, Advanced),
            Command::new(
                "reset",
                "Recheck the chain from zero for transactions",
                true,
                Advanced,
            ),
            Command::new("save", "Save your wallet state", true, Advanced),
            Command::new(
                "save_csv",
                "Save all wallet transactions to a CSV file",
                false,
                Advanced,
            ),
            Command::new("status", "Show the daemon status", true, Advanced),
        ];

        commands.sort_by(|a, b| a.tier.cmp(&b.tier).then_with(|| a.name.cmp(b.name)));

        Self { commands }
    }

    /// All commands in display order.
    pub fn commands(&self) -> &[Command] {
        &self.commands
    }

    /// Look up a command by exact name.
    pub fn find(&self, name: &str) -> Option<&Command> {
        find_by_name(&self.commands, name)
    }

    /// Canonical names in display order.
    pub fn names(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.commands.iter().map(|c| c.name)
    }

    pub fn len(&self) -> usize {
        self.commands.len()
    }

    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }

    /// Number of basic-tier commands.
    pub fn basic_count(&self) -> usize {
        self.commands.iter().filter(|c| !c.is_advanced()).count()
    }
}

/// Exact, case-sensitive name lookup.
pub(crate) fn find_by_name<'a>(commands: &'a [Command], name: &str) -> Option<&'a Command> {
    commands.iter().find(|c| c.name == name)
}

// ---------------------------------------------------------------------------
// Availability filter
// ---------------------------------------------------------------------------

/// Commands usable in the current session mode, in registry order.
///
/// A full wallet sees everything. A view-only wallet sees only the commands
/// flagged `available_in_view_wallet`.
pub fn available_commands(all: &[Command], view_only: bool) -> Vec<&Command> {
    all.iter()
        .filter(|c| !view_only || c.available_in_view_wallet)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn registry_has_21_commands() {
        let reg = CommandRegistry::build("TRTL");
        assert_eq!(reg.len(), 21);
        assert_eq!(reg.basic_count(), 7);
        assert!(!reg.is_empty());
    }

    #[test]
    fn basic_commands_come_first_sorted_by_name() {
        let reg = CommandRegistry::build("TRTL");
        let names: Vec<&str> = reg.names().collect();
        assert_eq!(
            &names[..7],
            &[
                "address",
                "advanced",
                "balance",
                "exit",
                "export_keys",
                "help",
                "transfer"
            ]
        );
        assert_eq!(names[7], "ab_add");
        assert_eq!(names[20], "status");
    }

    #[test]
    fn ordering_is_tier_then_name() {
        let reg = CommandRegistry::build("TRTL");
        for pair in reg.commands().windows(2) {
            let (a, b) = (&pair[0], &pair[1]);
            assert!((a.tier, a.name) < (b.tier, b.name), "{} before {}", a.name, b.name);
        }
    }

    #[test]
    fn names_are_unique() {
        let reg = CommandRegistry::build("TRTL");
        let names: std::collections::HashSet<&str> = reg.names().collect();
        assert_eq!(names.len(), reg.len());
    }

    #[test]
    fn names_are_lowercase_without_spaces() {
        let reg = CommandRegistry::build("TRTL");
        for name in reg.names() {
            assert!(!name.contains(' '));
            assert_eq!(name, name.to_lowercase());
        }
    }

    #[test]
    fn build_is_idempotent() {
        assert_eq!(CommandRegistry::build("TRTL"), CommandRegistry::build("TRTL"));
    }

    #[test]
    fn ticker_is_substituted() {
        let reg = CommandRegistry::build("XMR");
        assert_eq!(
            reg.find("balance").unwrap().description,
            "Display how much XMR you have"
        );
        assert_eq!(reg.find("transfer").unwrap().description, "Send XMR to someone");
        assert!(reg.find("ab_send").unwrap().description.contains("XMR"));
    }

    #[test]
    fn find_is_exact() {
        let reg = CommandRegistry::build("TRTL");
        assert!(reg.find("help").is_some());
        assert!(reg.find("HELP").is_none());
        assert!(reg.find("hel").is_none());
        assert!(reg.find("").is_none());
    }

    #[test]
    fn full_wallet_sees_everything() {
        let reg = CommandRegistry::build("TRTL");
        let available = available_commands(reg.commands(), false);
        let expected: Vec<&Command> = reg.commands().iter().collect();
        assert_eq!(available, expected);
    }

    #[test]
    fn view_wallet_sees_subsequence() {
        let reg = CommandRegistry::build("TRTL");
        let available = available_commands(reg.commands(), true);
        assert_eq!(available.len(), 15);
        assert!(available.iter().all(|c| c.available_in_view_wallet));
        let flagged = reg
            .commands()
            .iter()
            .filter(|c| c.available_in_view_wallet)
            .count();
        assert_eq!(available.len(), flagged);
        for pair in available.windows(2) {
            assert!((pair[0].tier, pair[0].name) < (pair[1].tier, pair[1].name));
        }
    }

    #[test]
    fn view_wallet_hides_spending_commands() {
        let reg = CommandRegistry::build("TRTL");
        let available = available_commands(reg.commands(), true);
        for hidden in [
            "transfer",
            "ab_send",
            "list_transfers",
            "optimize",
            "outgoing_transfers",
            "save_csv",
        ] {
            assert!(available.iter().all(|c| c.name != hidden), "{hidden} visible");
        }
    }

    proptest! {
        #[test]
        fn build_is_idempotent_for_any_ticker(ticker in "[A-Za-z]{1,8}") {
            let reg = CommandRegistry::build(&ticker);
            prop_assert_eq!(&reg, &CommandRegistry::build(&ticker));
            prop_assert_eq!(reg.len(), 21);
            prop_assert_eq!(reg.basic_count(), 7);
        }

        #[test]
        fn order_does_not_depend_on_ticker(a in "[A-Za-z]{1,8}", b in "[A-Za-z]{1,8}") {
            let left: Vec<&str> = CommandRegistry::build(&a).names().collect();
            let right: Vec<&str> = CommandRegistry::build(&b).names().collect();
            prop_assert_eq!(left, right);
        }

        #[test]
        fn full_mode_filter_is_identity(ticker in "[A-Za-z]{1,8}") {
            let reg = CommandRegistry::build(&ticker);
            let available = available_commands(reg.commands(), false);
            prop_assert_eq!(available.len(), reg.len());
            for (kept, original) in available.iter().zip(reg.commands()) {
                prop_assert_eq!(*kept, original);
            }
        }

        #[test]
        fn view_mode_filter_is_flagged_subsequence(ticker in "[A-Za-z]{1,8}") {
            let reg = CommandRegistry::build(&ticker);
            let available = available_commands(reg.commands(), true);
            let flagged: Vec<&Command> = reg
                .commands()
                .iter()
                .filter(|c| c.available_in_view_wallet)
                .collect();
            prop_assert_eq!(&available, &flagged);
            prop_assert_eq!(available.len(), 15);
        }
    }
}
