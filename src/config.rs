// This file is part of scrimmage-scheduler.
//
// scrimmage-scheduler is free software: you can redistribute it and/or modify
// it under the terms of the GNU Affero General Public License as published by
// the Free Software Foundation, either version 3 of the License, or
// (at your option) any later version.
//
// scrimmage-scheduler is distributed in the hope that it will be useful,
// but WITHOUT ANY WARRANTY; without even the implied warranty of
// MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the
// GNU Affero General Public License for more details.
//
// You should have received a copy of the GNU Affero General Public License
// along with this program.  If not, see <https://www.gnu.org/licenses/>.

use std::{
    fs,
    io::ErrorKind,
    path::{Path, PathBuf},
};

use serde::Deserialize;

use crate::{error::SchedulerError, player::MULTIPLIER_SEPARATOR, time::TimeControls, utils};

pub const CONFIG_FILE: &str = "config.ron";

/// Settings read once at start up.
///
/// Every field may be left out of the file:
///
/// ```ron
/// (
///     staff: ["reference", "reference_plusplus"],
///     time_controls: (blitz: (increment_seconds: 0.5, pool_seconds: 60.0)),
///     list_limit: 10000,
/// )
/// ```
#[derive(Clone, Debug, Deserialize, PartialEq)]
#[serde(default)]
pub struct Config {
    /// Bots everyone may play against under their bare name.
    pub staff: Vec<String>,
    pub time_controls: TimeControls,
    /// Passed to the lister as the maximum number of entries.
    pub list_limit: usize,
    pub lister: String,
    pub runner: String,
    /// Where game lists are written, the system temp directory if unset.
    pub game_list_dir: Option<PathBuf>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            staff: vec!["reference".to_string(), "reference_plusplus".to_string()],
            time_controls: TimeControls::default(),
            list_limit: 10_000,
            lister: "autotest-list".to_string(),
            runner: "autotest-lowlevelrun".to_string(),
            game_list_dir: None,
        }
    }
}

impl Config {
    /// Loads `path`, or the default config file if there is one.
    ///
    /// # Errors
    ///
    /// If `path` doesn't exist, if a file can't be read or parsed, or if the
    /// settings are invalid.
    pub fn load(path: Option<&Path>) -> Result<Self, SchedulerError> {
        let config = match path {
            Some(path) => Self::read(path)?,
            None => match utils::config_file() {
                Some(path) => match Self::read(&path) {
                    Err(SchedulerError::Io(error)) if error.kind() == ErrorKind::NotFound => {
                        Self::default()
                    }
                    result => result?,
                },
                None => Self::default(),
            },
        };

        config.validate()?;
        Ok(config)
    }

    fn read(path: &Path) -> Result<Self, SchedulerError> {
        let string = fs::read_to_string(path)?;

        Self::from_ron(&string).map_err(|error| {
            SchedulerError::Configuration(format!("RON: {}: {error}", path.display()))
        })
    }

    /// # Errors
    ///
    /// If `string` isn't a valid RON config.
    pub fn from_ron(string: &str) -> anyhow::Result<Self> {
        Ok(ron::from_str(string)?)
    }

    /// # Errors
    ///
    /// If a staff name is empty, holds whitespace or the multiplier separator,
    /// or a time control profile is invalid.
    pub fn validate(&self) -> Result<(), SchedulerError> {
        for name in &self.staff {
            if name.is_empty() {
                return Err(SchedulerError::Configuration(
                    "staff names can't be empty".to_string(),
                ));
            }

            if name
                .chars()
                .any(|c| c.is_whitespace() || c == MULTIPLIER_SEPARATOR)
            {
                return Err(SchedulerError::Configuration(format!(
                    "staff name '{name}' can't contain whitespace or '{MULTIPLIER_SEPARATOR}'"
                )));
            }
        }

        self.time_controls.validate()
    }

    #[must_use]
    pub fn game_list_dir(&self) -> PathBuf {
        self.game_list_dir.clone().unwrap_or_else(std::env::temp_dir)
    }
}
