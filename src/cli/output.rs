use colored::Colorize;
use std::fmt;
use std::sync::{OnceLock, RwLock};

/// Message categories used by the CLI output helpers.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MessageKind {
    Info,
    Success,
    Warning,
    Error,
    Hint,
    Section,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct OutputPreferences {
    /// No colors and ASCII-only glyphs.
    pub plain_mode: bool,
}

static PREFERENCES: OnceLock<RwLock<OutputPreferences>> = OnceLock::new();

pub fn set_preferences(prefs: OutputPreferences) {
    let lock = PREFERENCES.get_or_init(|| RwLock::new(OutputPreferences::default()));
    if let Ok(mut guard) = lock.write() {
        *guard = prefs;
    }
    if prefs.plain_mode {
        colored::control::set_override(false);
    } else {
        colored::control::unset_override();
    }
}

pub fn current_preferences() -> OutputPreferences {
    PREFERENCES
        .get_or_init(|| RwLock::new(OutputPreferences::default()))
        .read()
        .map(|guard| *guard)
        .unwrap_or_default()
}

/// Formats a message without printing it.
pub fn format_message(kind: MessageKind, message: impl fmt::Display) -> String {
    let prefs = current_preferences();
    let text = message.to_string();

    let (icon, plain_label) = match kind {
        MessageKind::Success => ("✔", "OK:"),
        MessageKind::Warning => ("⚠", "WARNING:"),
        MessageKind::Error => ("✖", "ERROR:"),
        MessageKind::Hint => ("›", "HINT:"),
        MessageKind::Section => return section_text(&text, prefs),
        MessageKind::Info => return text,
    };

    if prefs.plain_mode {
        return format!("{plain_label} {text}");
    }

    let base = format!("{icon} {text}");
    match kind {
        MessageKind::Success => base.green().to_string(),
        MessageKind::Warning => base.yellow().to_string(),
        MessageKind::Error => base.red().to_string(),
        MessageKind::Hint => base.dimmed().to_string(),
        MessageKind::Info | MessageKind::Section => base,
    }
}

fn section_text(title: &str, prefs: OutputPreferences) -> String {
    let text = format!("=== {} ===", title.trim());
    if prefs.plain_mode {
        text
    } else {
        text.bold().to_string()
    }
}

pub fn print(kind: MessageKind, message: impl fmt::Display) {
    let formatted = format_message(kind, message);
    match kind {
        MessageKind::Section => println!("\n{}", formatted),
        _ => println!("{}", formatted),
    }
}

pub fn info(message: impl fmt::Display) {
    print(MessageKind::Info, message);
}

pub fn success(message: impl fmt::Display) {
    print(MessageKind::Success, message);
}

pub fn warning(message: impl fmt::Display) {
    print(MessageKind::Warning, message);
}

pub fn error(message: impl fmt::Display) {
    print(MessageKind::Error, message);
}

pub fn hint(message: impl fmt::Display) {
    print(MessageKind::Hint, message);
}

pub fn section(title: impl fmt::Display) {
    print(MessageKind::Section, title);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plain_mode_uses_text_labels() {
        set_preferences(OutputPreferences {
            plain_mode: true,
        });
        assert_eq!(
            format_message(MessageKind::Error, "Insufficient balance"),
            "ERROR: Insufficient balance"
        );
        assert_eq!(format_message(MessageKind::Section, " Expenses "), "=== Expenses ===");
        assert_eq!(format_message(MessageKind::Info, "plain"), "plain");
    }
}
