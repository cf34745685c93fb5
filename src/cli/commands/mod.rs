pub mod entry;
pub mod system;
pub mod view;

use crate::cli::core::CommandError;
use crate::cli::registry::CommandEntry;

pub(crate) fn all_definitions() -> Vec<CommandEntry> {
    let mut commands = Vec::new();
    commands.extend(entry::definitions());
    commands.extend(view::definitions());
    commands.extend(system::definitions());
    commands
}

/// Converts a 1-based row number as shown in the transaction list.
pub(crate) fn parse_row(raw: &str) -> Result<usize, CommandError> {
    match raw.trim().parse::<usize>() {
        Ok(row) if row >= 1 => Ok(row - 1),
        _ => Err(CommandError::InvalidArguments(format!(
            "`{}` is not a transaction number (see `list`)",
            raw
        ))),
    }
}
