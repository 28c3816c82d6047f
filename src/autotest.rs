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

//! The autotester's command line tools.

use std::{path::Path, process::Command};

use anyhow::Context;
use log::debug;
use rustc_hash::FxHashSet;

use crate::{availability::AvailabilitySource, scheduler::MatchExecutor};

/// Lists uploaded bots by running `<program> <limit>`.
#[derive(Clone, Debug)]
pub struct AutotestList {
    pub program: String,
}

impl AutotestList {
    #[must_use]
    pub fn new(program: &str) -> Self {
        Self {
            program: program.to_string(),
        }
    }
}

impl AvailabilitySource for AutotestList {
    fn list(&self, owner: &str, limit: usize) -> anyhow::Result<FxHashSet<String>> {
        debug!("running {} {limit}", self.program);

        let output = Command::new(&self.program)
            .arg(limit.to_string())
            .output()
            .with_context(|| format!("failed to run {}", self.program))?;

        if !output.status.success() {
            return Err(anyhow::Error::msg(format!(
                "{} exited with {}: {}",
                self.program,
                output.status,
                String::from_utf8_lossy(&output.stderr).trim()
            )));
        }

        Ok(registered_players(
            &String::from_utf8_lossy(&output.stdout),
            owner,
        ))
    }
}

/// Keeps the first word of every line that names one of `owner`'s bots.
#[must_use]
pub fn registered_players(listing: &str, owner: &str) -> FxHashSet<String> {
    let prefix = format!("{owner}.");

    listing
        .lines()
        .filter_map(|line| line.split_ascii_whitespace().next())
        .filter(|player| player.starts_with(&prefix))
        .map(ToString::to_string)
        .collect()
}

/// Queues a game list by running `<program> <path>`.
#[derive(Clone, Debug)]
pub struct AutotestRun {
    pub program: String,
}

impl AutotestRun {
    #[must_use]
    pub fn new(program: &str) -> Self {
        Self {
            program: program.to_string(),
        }
    }
}

impl MatchExecutor for AutotestRun {
    fn execute(&self, game_list: &Path) -> anyhow::Result<()> {
        debug!("running {} {}", self.program, game_list.display());

        let status = Command::new(&self.program)
            .arg(game_list)
            .status()
            .with_context(|| format!("failed to run {}", self.program))?;

        if status.success() {
            debug!("{} finished", self.program);
            Ok(())
        } else {
            Err(anyhow::Error::msg(format!(
                "{} exited with {status}",
                self.program
            )))
        }
    }
}
