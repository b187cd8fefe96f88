//! Configuration management for taskdesk.
//!
//! Settings are stored as pretty-printed JSON in the platform data directory
//! (see [`DataStorage`]). A missing file is not an error: [`Config::read`]
//! falls back to [`Config::default`], so the application works without any
//! setup.
//!
//! ## Settings
//!
//! - **database**: Path of the SQLite file. Defaults to `taskdesk.db` in the
//!   data directory.
//! - **categories**: Replaces the built-in seed categories and their colors.
//!   The first entry becomes the default category for new tasks.
//! - **description_width**: Maximum number of characters of a description
//!   shown in the task list before it is truncated.
//!
//! ## Usage
//!
//! ```rust,no_run
//! use taskdesk::libs::config::Config;
//!
//! let config = Config::read()?;
//! let db_path = config.database_path()?;
//!
//! // Interactive wizard, pre-filled with the current values
//! Config::init()?.save()?;
//! # Ok::<(), anyhow::Error>(())
//! ```

use super::data_storage::DataStorage;
use crate::db::db::DB_FILE_NAME;
use crate::libs::messages::Message;
use anyhow::Result;
use dialoguer::{theme::ColorfulTheme, Input};
use serde::{Deserialize, Serialize};
use std::fs::{self, File};
use std::path::{Path, PathBuf};

pub const CONFIG_FILE_NAME: &str = "config.json";

/// Default number of description characters shown in the task list.
pub const DEFAULT_DESCRIPTION_WIDTH: usize = 60;

/// A user-defined category and the terminal color used to render it.
///
/// Colors are named terminal colors: `black`, `red`, `green`, `yellow`,
/// `blue`, `magenta`, `cyan` or `white`.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct CategoryConfig {
    pub name: String,
    pub color: String,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
#[serde(default)]
pub struct Config {
    /// Explicit location of the task database file.
    pub database: Option<PathBuf>,
    /// Replacement for the built-in seed categories, in display order.
    pub categories: Option<Vec<CategoryConfig>>,
    /// Description truncation width for the list view.
    pub description_width: usize,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            database: None,
            categories: None,
            description_width: DEFAULT_DESCRIPTION_WIDTH,
        }
    }
}

impl Config {
    /// Reads the configuration from the data directory, or returns defaults when none exists.
    pub fn read() -> Result<Config> {
        let config_file_path = DataStorage::new().get_path(CONFIG_FILE_NAME)?;
        Self::read_from(&config_file_path)
    }

    pub fn read_from(path: &Path) -> Result<Config> {
        if !path.exists() {
            return Ok(Config::default());
        }

        let config_str = fs::read_to_string(path)?;
        let config: Config = serde_json::from_str(&config_str)?;
        Ok(config)
    }

    pub fn save(&self) -> Result<()> {
        let config_file_path = DataStorage::new().get_path(CONFIG_FILE_NAME)?;
        self.save_to(&config_file_path)
    }

    pub fn save_to(&self, path: &Path) -> Result<()> {
        let config_file = File::create(path)?;
        serde_json::to_writer_pretty(&config_file, &self)?;
        Ok(())
    }

    /// Removes the configuration file. Returns `false` if there was nothing to remove.
    pub fn delete() -> Result<bool> {
        let config_file_path = DataStorage::new().get_path(CONFIG_FILE_NAME)?;
        if !config_file_path.exists() {
            return Ok(false);
        }
        fs::remove_file(config_file_path)?;
        Ok(true)
    }

    /// Resolves the database file, honouring the `database` override.
    pub fn database_path(&self) -> Result<PathBuf> {
        match &self.database {
            Some(path) => Ok(path.clone()),
            None => DataStorage::new().get_path(DB_FILE_NAME),
        }
    }

    /// Runs the interactive setup wizard, pre-filled with the current settings.
    ///
    /// Categories are entered as a comma-separated list; colors of categories
    /// that already exist in the configuration are kept, new ones get the
    /// fallback color until edited in the file.
    pub fn init() -> Result<Self> {
        let current = Config::read()?;
        let theme = ColorfulTheme::default();

        let database: String = Input::with_theme(&theme)
            .with_prompt(Message::PromptDatabasePath.to_string())
            .default(current.database.as_ref().map(|p| p.display().to_string()).unwrap_or_default())
            .allow_empty(true)
            .interact_text()?;

        let description_width: usize = Input::with_theme(&theme)
            .with_prompt(Message::PromptDescriptionWidth.to_string())
            .default(current.description_width)
            .interact_text()?;

        let current_names = current
            .categories
            .as_ref()
            .map(|categories| categories.iter().map(|c| c.name.clone()).collect::<Vec<_>>().join(", "))
            .unwrap_or_default();
        let categories: String = Input::with_theme(&theme)
            .with_prompt(Message::PromptCategories.to_string())
            .default(current_names)
            .allow_empty(true)
            .interact_text()?;

        Ok(Config {
            database: (!database.trim().is_empty()).then(|| PathBuf::from(database.trim())),
            categories: current.merge_category_names(&categories),
            description_width,
        })
    }

    /// Turns a comma-separated list into category entries, reusing known colors.
    /// An empty list means "use the built-in categories".
    pub fn merge_category_names(&self, names: &str) -> Option<Vec<CategoryConfig>> {
        let entries: Vec<CategoryConfig> = names
            .split(',')
            .map(str::trim)
            .filter(|name| !name.is_empty())
            .map(|name| {
                let color = self
                    .categories
                    .iter()
                    .flatten()
                    .find(|existing| existing.name == name)
                    .map(|existing| existing.color.clone())
                    .unwrap_or_else(|| "white".to_string());
                CategoryConfig {
                    name: name.to_string(),
                    color,
                }
            })
            .collect();

        (!entries.is_empty()).then_some(entries)
    }
}
