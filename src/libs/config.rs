//! Configuration management for the sesh application.
//!
//! Holds the schedule defaults applied when a new profile is created and the
//! optional default profile name used when a command is invoked without
//! `--user`. Settings are stored as JSON in the platform data directory and
//! can be overridden per-invocation through environment variables
//! (`SESH_DAY_START`, `SESH_DAY_END`, `SESH_SESSION_SIZE`), which is handy
//! for scripting and tests.
//!
//! Defaults are plain values handed to callers; nothing in this module is
//! global mutable state. The slot generator only ever sees explicit
//! arguments.
//!
//! ## Usage
//!
//! ```rust,no_run
//! use sesh::libs::config::Config;
//!
//! let config = Config::read()?;
//! let defaults = config.schedule_defaults();
//! # anyhow::Ok(())
//! ```

use super::data_storage::DataStorage;
use crate::libs::messages::Message;
use crate::msg_print;
use anyhow::Result;
use dialoguer::{theme::ColorfulTheme, Input};
use serde::{Deserialize, Serialize};
use std::env;
use std::fs::{self, File};

pub const CONFIG_FILE_NAME: &str = "config.json";

/// Schedule settings applied to newly created profiles.
///
/// A profile copies these values at creation time and owns them afterwards;
/// changing the defaults never rewrites existing profiles.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct ScheduleDefaults {
    /// Start of the working window, `HH:MM`
    pub day_start: String,

    /// End of the working window, `HH:MM`; must lie after `day_start`
    pub day_end: String,

    /// Slot length in minutes, 1-60
    pub session_size: u32,
}

impl Default for ScheduleDefaults {
    fn default() -> Self {
        ScheduleDefaults {
            day_start: "09:00".to_string(),
            day_end: "17:00".to_string(),
            session_size: 15,
        }
    }
}

#[derive(Serialize, Deserialize, Clone, Debug, Default)]
pub struct Config {
    /// Schedule defaults for new profiles
    #[serde(skip_serializing_if = "Option::is_none")]
    pub schedule: Option<ScheduleDefaults>,

    /// Profile used when a command is invoked without `--user`
    #[serde(skip_serializing_if = "Option::is_none")]
    pub default_user: Option<String>,
}

impl Config {
    /// Reads configuration from the filesystem, falling back to defaults
    /// when no file exists yet.
    pub fn read() -> Result<Config> {
        let config_file_path = DataStorage::new().get_path(CONFIG_FILE_NAME)?;

        if !config_file_path.exists() {
            return Ok(Config::default());
        }

        let config_str = fs::read_to_string(config_file_path)?;
        let config: Config = serde_json::from_str(&config_str)?;
        Ok(config)
    }

    /// Saves the current configuration as pretty-printed JSON.
    pub fn save(&self) -> Result<()> {
        let config_file_path = DataStorage::new().get_path(CONFIG_FILE_NAME)?;

        let config_file = File::create(config_file_path)?;
        serde_json::to_writer_pretty(&config_file, &self)?;
        Ok(())
    }

    /// Resolves the effective schedule defaults.
    ///
    /// Environment variables win over the stored configuration, which wins
    /// over the built-in 09:00-17:00 / 15 minute window.
    pub fn schedule_defaults(&self) -> ScheduleDefaults {
        let mut defaults = self.schedule.clone().unwrap_or_default();

        if let Ok(day_start) = env::var("SESH_DAY_START") {
            defaults.day_start = day_start;
        }
        if let Ok(day_end) = env::var("SESH_DAY_END") {
            defaults.day_end = day_end;
        }
        if let Ok(size) = env::var("SESH_SESSION_SIZE") {
            if let Ok(size) = size.parse() {
                defaults.session_size = size;
            }
        }

        defaults
    }

    /// Runs an interactive configuration setup wizard.
    ///
    /// Prompts for the schedule defaults and the default profile name,
    /// pre-filling existing values. The returned configuration still has to
    /// be persisted with [`Config::save`].
    pub fn init() -> Result<Self> {
        let mut config = Self::read().unwrap_or_default();
        let defaults = config.schedule.clone().unwrap_or_default();

        msg_print!(Message::ConfigModuleSchedule);
        config.schedule = Some(ScheduleDefaults {
            day_start: Input::with_theme(&ColorfulTheme::default())
                .with_prompt(Message::PromptDayStart.to_string())
                .default(defaults.day_start)
                .interact_text()?,

            day_end: Input::with_theme(&ColorfulTheme::default())
                .with_prompt(Message::PromptDayEnd.to_string())
                .default(defaults.day_end)
                .interact_text()?,

            session_size: Input::with_theme(&ColorfulTheme::default())
                .with_prompt(Message::PromptSessionSize.to_string())
                .default(defaults.session_size)
                .interact_text()?,
        });

        let default_user: String = Input::with_theme(&ColorfulTheme::default())
            .with_prompt(Message::PromptDefaultUser.to_string())
            .default(config.default_user.clone().unwrap_or_default())
            .allow_empty(true)
            .interact_text()?;
        config.default_user = if default_user.is_empty() { None } else { Some(default_user) };

        Ok(config)
    }
}
