//! Configuration management for tapstamp.
//!
//! Settings are stored as pretty-printed JSON in the platform data
//! directory next to the stamp database. Every field has a default and is
//! marked `#[serde(default)]`, so a partial or older file still loads and a
//! missing file simply means "all defaults".
//!
//! ## Structure
//!
//! - **Display**: milliseconds toggle and locale for the list view
//! - **Export**: timestamp style and the two independent milliseconds
//!   choices for CSV output (timestamp column, interval column)
//! - **Limits**: maximum number of stored timestamps
//! - **Diagnostics**: whether interval formatting is traced in debug logs
//!
//! ## Usage
//!
//! ```rust,no_run
//! use tapstamp::libs::config::Config;
//!
//! let mut config = Config::read()?;
//! config.toggle_milliseconds();
//! config.save()?;
//! # Ok::<(), anyhow::Error>(())
//! ```

use super::data_storage::DataStorage;
use super::timestamp::DEFAULT_LOCALE;
use crate::libs::messages::Message;
use crate::{msg_print, msg_warning};
use anyhow::{Context, Result};
use dialoguer::{theme::ColorfulTheme, Confirm, Input, Select};
use serde::{Deserialize, Serialize};
use std::env;
use std::fmt;
use std::fs::{self, File};
use std::path::Path;

/// Configuration file name inside the data directory.
pub const CONFIG_FILE_NAME: &str = "config.json";

/// Default cap on stored timestamps.
pub const DEFAULT_MAX_RECORDS: usize = 100;

/// How the timestamp column of a CSV export is rendered.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq, Default, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum TimestampStyle {
    /// Locale-aware text, the same as the list view.
    #[default]
    Display,
    /// Fixed `YYYY-MM-DD HH:MM:SS.sss`, sorts correctly as text.
    Sortable,
}

impl fmt::Display for TimestampStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TimestampStyle::Display => write!(f, "display"),
            TimestampStyle::Sortable => write!(f, "sortable"),
        }
    }
}

/// Settings for the on-screen list.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
#[serde(default)]
pub struct DisplayConfig {
    /// Show milliseconds in timestamps and intervals.
    pub include_milliseconds: bool,

    /// Locale tag for dates; the system locale is used when unset.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub locale: Option<String>,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        DisplayConfig {
            include_milliseconds: true,
            locale: None,
        }
    }
}

/// Settings for CSV export. Independent of the display toggle.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
#[serde(default)]
pub struct ExportConfig {
    pub style: TimestampStyle,

    /// Milliseconds in the timestamp column.
    pub include_milliseconds: bool,

    /// Milliseconds in the interval column.
    pub interval_milliseconds: bool,
}

impl Default for ExportConfig {
    fn default() -> Self {
        ExportConfig {
            style: TimestampStyle::Display,
            include_milliseconds: true,
            interval_milliseconds: true,
        }
    }
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
#[serde(default)]
pub struct Config {
    pub display: DisplayConfig,
    pub export: ExportConfig,

    /// Oldest timestamps beyond this count are dropped on insert.
    pub max_records: usize,

    /// Emit trace events for each interval that is formatted.
    pub trace_formatting: bool,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            display: DisplayConfig::default(),
            export: ExportConfig::default(),
            max_records: DEFAULT_MAX_RECORDS,
            trace_formatting: false,
        }
    }
}

impl Config {
    /// Reads the configuration from the data directory.
    pub fn read() -> Result<Config> {
        let config_file_path = DataStorage::new().get_path(CONFIG_FILE_NAME)?;
        Self::read_from(&config_file_path)
    }

    /// Reads the configuration from `path`, defaulting when it is missing.
    pub fn read_from(path: &Path) -> Result<Config> {
        if !path.exists() {
            return Ok(Config::default());
        }

        let config_str = fs::read_to_string(path)?;
        let config: Config = serde_json::from_str(&config_str)
            .with_context(|| Message::ConfigReadFailed(path.display().to_string()).to_string())?;
        Ok(config.normalized())
    }

    pub fn save(&self) -> Result<()> {
        let config_file_path = DataStorage::new().get_path(CONFIG_FILE_NAME)?;
        self.save_to(&config_file_path)
    }

    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        let config_file = File::create(path)?;
        serde_json::to_writer_pretty(&config_file, &self)?;
        Ok(())
    }

    /// Flips the display milliseconds toggle and returns the new value.
    pub fn toggle_milliseconds(&mut self) -> bool {
        self.display.include_milliseconds = !self.display.include_milliseconds;
        self.display.include_milliseconds
    }

    /// Locale for rendering dates: configured, then `LC_ALL`/`LANG`, then `en_US`.
    pub fn locale(&self) -> String {
        self.display
            .locale
            .clone()
            .filter(|locale| !locale.trim().is_empty())
            .or_else(system_locale)
            .unwrap_or_else(|| DEFAULT_LOCALE.to_string())
    }

    /// Interactive setup wizard, prefilled with the current values.
    pub fn init() -> Result<Self> {
        let current = Self::read()?;
        let theme = ColorfulTheme::default();

        let include_milliseconds = Confirm::with_theme(&theme)
            .with_prompt(Message::PromptIncludeMilliseconds.to_string())
            .default(current.display.include_milliseconds)
            .interact()?;

        let locale: String = Input::with_theme(&theme)
            .with_prompt(Message::PromptLocale.to_string())
            .default(current.display.locale.clone().unwrap_or_default())
            .allow_empty(true)
            .interact_text()?;

        let styles = [TimestampStyle::Display, TimestampStyle::Sortable];
        let style_index = Select::with_theme(&theme)
            .with_prompt(Message::PromptExportStyle.to_string())
            .items(&styles)
            .default(styles.iter().position(|s| *s == current.export.style).unwrap_or(0))
            .interact()?;

        let export_milliseconds = Confirm::with_theme(&theme)
            .with_prompt(Message::PromptExportMilliseconds.to_string())
            .default(current.export.include_milliseconds)
            .interact()?;

        let interval_milliseconds = Confirm::with_theme(&theme)
            .with_prompt(Message::PromptIntervalMilliseconds.to_string())
            .default(current.export.interval_milliseconds)
            .interact()?;

        let max_records: usize = Input::with_theme(&theme)
            .with_prompt(Message::PromptMaxRecords.to_string())
            .default(current.max_records)
            .validate_with(|value: &usize| if *value >= 1 { Ok(()) } else { Err(Message::InvalidMaxRecords.to_string()) })
            .interact_text()?;

        let trace_formatting = Confirm::with_theme(&theme)
            .with_prompt(Message::PromptTraceFormatting.to_string())
            .default(current.trace_formatting)
            .interact()?;

        Ok(Config {
            display: DisplayConfig {
                include_milliseconds,
                locale: Some(locale.trim().to_string()).filter(|l| !l.is_empty()),
            },
            export: ExportConfig {
                style: styles[style_index],
                include_milliseconds: export_milliseconds,
                interval_milliseconds,
            },
            max_records,
            trace_formatting,
        })
    }

    /// Prints the settings in JSON form.
    pub fn show(&self) -> Result<()> {
        msg_print!(Message::ConfigCurrent(serde_json::to_string_pretty(self)?));
        Ok(())
    }

    fn normalized(mut self) -> Self {
        if self.max_records == 0 {
            msg_warning!(Message::MaxRecordsReset(DEFAULT_MAX_RECORDS));
            self.max_records = DEFAULT_MAX_RECORDS;
        }
        self
    }
}

fn system_locale() -> Option<String> {
    ["LC_ALL", "LC_TIME", "LANG"]
        .iter()
        .filter_map(|key| env::var(key).ok())
        .find(|value| !value.is_empty() && value != "C" && value != "POSIX")
}
