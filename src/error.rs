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

use std::io;

use thiserror::Error;

/// Everything that can stop a round robin from being queued.
///
/// None of these are retried. When one is returned before the game list is
/// written, nothing has been persisted.
#[derive(Error, Debug)]
pub enum SchedulerError {
    #[error("player `{token}`: {reason}")]
    Parse { token: String, reason: &'static str },
    #[error("bot `{0}` has not been uploaded to the scrimmage server")]
    UnknownPlayer(String),
    #[error("configuration: {0}")]
    Configuration(String),
    #[error("{collaborator}: {message}")]
    Collaborator {
        collaborator: &'static str,
        message: String,
    },
    #[error("game list: {0}")]
    Io(#[from] io::Error),
}

impl SchedulerError {
    pub(crate) fn parse(token: &str, reason: &'static str) -> Self {
        Self::Parse {
            token: token.to_string(),
            reason,
        }
    }

    pub(crate) fn collaborator(collaborator: &'static str, error: &anyhow::Error) -> Self {
        Self::Collaborator {
            collaborator,
            message: format!("{error:#}"),
        }
    }
}
