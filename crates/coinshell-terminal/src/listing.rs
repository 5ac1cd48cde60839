//! Numbered command menu.

use coinshell_types::error::Result;
use coinshell_types::style::Style;

use crate::console::Console;
use crate::registry::{Command, Tier};

/// Print the commands of one tier with their selection numbers.
///
/// Basic commands are always numbered `1..=basic`, advanced commands
/// continue from `basic + 1`, whichever tier is being printed. These are
/// the numbers the resolver accepts, so `commands` must be the same
/// filtered list the resolver is given.
pub fn list_commands(commands: &[&Command], tier: Tier, console: &mut Console<'_>) -> Result<()> {
    let mut index = match tier {
        Tier::Basic => 1,
        Tier::Advanced => 1 + commands.iter().filter(|c| c.tier == Tier::Basic).count(),
    };
    let width = console.name_padding();

    for command in commands.iter().filter(|c| c.tier == tier) {
        let line = format!(
            " {}\t{}{}",
            console.paint(Style::Information, &index.to_string()),
            console.paint(Style::Success, &format!("{:<width$}", command.name)),
            command.description,
        );
        console.line(&line)?;
        index += 1;
    }
    Ok(())
}
