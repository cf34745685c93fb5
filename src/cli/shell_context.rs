use std::path::PathBuf;

use dialoguer::theme::ColorfulTheme;
use tracing::warn;

use crate::{
    cli::output::{set_preferences, OutputPreferences},
    config::{Config, ConfigManager},
    core::{Dialog, FormController, FormMode, Tracker},
    storage::JsonFileStore,
    utils::paths,
};

use super::commands;
use super::core::CliError;
use super::registry::CommandRegistry;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CliMode {
    Interactive,
    Script,
}

/// Everything a command handler can see: the persisted tracker, the open
/// form, and user preferences.
pub struct ShellContext {
    pub mode: CliMode,
    pub registry: CommandRegistry,
    pub tracker: Tracker<JsonFileStore>,
    pub forms: FormController,
    pub config_manager: ConfigManager,
    pub config: Config,
    pub theme: ColorfulTheme,
    pub running: bool,
}

impl ShellContext {
    pub fn new(mode: CliMode) -> Result<Self, CliError> {
        Self::with_home(mode, paths::app_data_dir())
    }

    /// Builds a context whose config and storage live under `base`.
    pub fn with_home(mode: CliMode, base: PathBuf) -> Result<Self, CliError> {
        let config_manager = ConfigManager::with_base_dir(base.clone())?;
        let config = config_manager.load().unwrap_or_else(|err| {
            warn!(%err, "using default configuration");
            Config::default()
        });
        apply_output_preferences(&config, mode);

        let store = JsonFileStore::open(paths::storage_file_in(&base))?;
        let tracker = Tracker::restore(store, config.starting_balance);

        Ok(Self {
            mode,
            registry: CommandRegistry::with_entries(commands::all_definitions()),
            tracker,
            forms: FormController::new(),
            config_manager,
            config,
            theme: ColorfulTheme::default(),
            running: true,
        })
    }

    pub fn mode(&self) -> CliMode {
        self.mode
    }

    pub fn currency(&self) -> &str {
        &self.config.currency_symbol
    }

    pub fn command_names(&self) -> Vec<&'static str> {
        self.registry.names().collect()
    }

    /// Shell prompt showing which dialog, if any, is open.
    pub fn prompt(&self) -> String {
        match self.forms.dialog() {
            Dialog::Closed => "wallet> ".to_string(),
            Dialog::Income(_) => "wallet [income]> ".to_string(),
            Dialog::Expense {
                mode: FormMode::Create,
                ..
            } => "wallet [expense:new]> ".to_string(),
            Dialog::Expense {
                mode: FormMode::Edit(index),
                ..
            } => format!("wallet [expense:edit #{}]> ", index + 1),
        }
    }

    pub(crate) fn apply_config(&mut self, config: Config) {
        apply_output_preferences(&config, self.mode);
        self.config = config;
    }
}

/// Script mode always prints plain text so its output can be piped.
fn apply_output_preferences(config: &Config, mode: CliMode) {
    set_preferences(OutputPreferences {
        plain_mode: config.plain_output || mode == CliMode::Script,
    });
}
