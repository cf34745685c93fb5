//! Name-to-handler table behind shell dispatch and `help`.

use std::collections::BTreeMap;

use crate::cli::core::CommandResult;
use crate::cli::shell_context::ShellContext;

pub type CommandHandler = fn(&mut ShellContext, &[&str]) -> CommandResult;

/// A shell command with the text `help` shows for it.
pub struct CommandEntry {
    pub name: &'static str,
    pub description: &'static str,
    pub usage: &'static str,
    pub handler: CommandHandler,
}

impl CommandEntry {
    pub const fn new(
        name: &'static str,
        description: &'static str,
        usage: &'static str,
        handler: CommandHandler,
    ) -> Self {
        Self {
            name,
            description,
            usage,
            handler,
        }
    }
}

/// Commands in registration order, which is also the `help` listing order.
/// Registering a name twice replaces the earlier entry in its original slot.
#[derive(Default)]
pub struct CommandRegistry {
    entries: Vec<CommandEntry>,
    slots: BTreeMap<&'static str, usize>,
}

impl CommandRegistry {
    pub fn with_entries(entries: impl IntoIterator<Item = CommandEntry>) -> Self {
        entries
            .into_iter()
            .fold(Self::default(), |mut registry, entry| {
                registry.register(entry);
                registry
            })
    }

    pub fn register(&mut self, entry: CommandEntry) {
        if let Some(existing) = self
            .slots
            .get(entry.name)
            .and_then(|&slot| self.entries.get_mut(slot))
        {
            *existing = entry;
            return;
        }
        self.slots.insert(entry.name, self.entries.len());
        self.entries.push(entry);
    }

    pub fn get(&self, name: &str) -> Option<&CommandEntry> {
        self.slots
            .get(name)
            .and_then(|&slot| self.entries.get(slot))
    }

    pub fn list(&self) -> &[CommandEntry] {
        &self.entries
    }

    pub fn names(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.entries.iter().map(|entry| entry.name)
    }

    pub fn handler(&self, name: &str) -> Option<CommandHandler> {
        self.get(name).map(|entry| entry.handler)
    }
}
