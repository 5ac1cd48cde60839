//! Map an input token to a registered command.

use crate::error::DispatchError;
use crate::registry::{Command, find_by_name};

/// Resolve `input` to a command.
///
/// Numeric input is a 1-based index into `available`, the list most
/// recently shown to the user. Names are looked up in `all`, so a command
/// hidden by the session mode still resolves and the dispatcher can report
/// it as forbidden rather than unknown.
///
/// Tokens that do not parse as an `i64` (overflow, trailing characters)
/// are treated as names.
pub fn resolve<'a>(
    input: &str,
    all: &'a [Command],
    available: &[&'a Command],
) -> Result<&'a Command, DispatchError> {
    let name = match input.parse::<i64>() {
        Ok(n) => {
            let index = usize::try_from(n)
                .ok()
                .and_then(|n| n.checked_sub(1))
                .filter(|&i| i < available.len())
                .ok_or(DispatchError::NumericOutOfRange {
                    available: available.len(),
                })?;
            available[index].name
        },
        Err(_) => input,
    };

    if name.is_empty() {
        return Err(DispatchError::EmptyInput);
    }

    find_by_name(all, name).ok_or_else(|| DispatchError::UnknownCommand(name.to_string()))
}
