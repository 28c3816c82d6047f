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

use log::info;
use rustc_hash::FxHashSet;

use crate::{error::SchedulerError, player::PlayerSpec};

/// Something that knows which bots a user has uploaded.
pub trait AvailabilitySource {
    /// Returns the qualified names registered under `owner`.
    ///
    /// # Errors
    ///
    /// If the registry can't be queried.
    fn list(&self, owner: &str, limit: usize) -> anyhow::Result<FxHashSet<String>>;
}

/// The bots a requester may put into a round robin.
#[derive(Clone, Debug, Default)]
pub struct Availability {
    names: FxHashSet<String>,
}

impl Availability {
    #[must_use]
    pub fn new(staff: &[String], registered: FxHashSet<String>) -> Self {
        let mut names = registered;
        names.extend(staff.iter().cloned());

        Self { names }
    }

    #[must_use]
    pub fn contains(&self, base_name: &str) -> bool {
        self.names.contains(base_name)
    }

    /// Names in sorted order, for display.
    #[must_use]
    pub fn sorted(&self) -> Vec<&str> {
        let mut names: Vec<_> = self.names.iter().map(String::as_str).collect();
        names.sort_unstable();
        names
    }

    /// # Errors
    ///
    /// On the first player whose base name isn't available.
    pub fn validate(&self, players: &[PlayerSpec]) -> Result<(), SchedulerError> {
        match players.iter().find(|player| !self.contains(&player.base_name)) {
            Some(player) => Err(SchedulerError::UnknownPlayer(player.base_name.clone())),
            None => Ok(()),
        }
    }

    pub fn log(&self) {
        info!("All available competitors (add #<number> to multiply total time, e.g. reference#4 has 4x time):");
        for name in self.sorted() {
            info!("* {name}");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn availability() -> Availability {
        let staff = vec!["reference".to_string(), "reference_plusplus".to_string()];
        let registered = ["carol.alice", "carol.bob"]
            .into_iter()
            .map(ToString::to_string)
            .collect();

        Availability::new(&staff, registered)
    }

    #[test]
    fn staff_and_registered_are_available() -> anyhow::Result<()> {
        let players = [
            PlayerSpec::new("carol.alice"),
            PlayerSpec::new("carol.bob").with_multiplier(2.0),
            PlayerSpec::new("reference"),
        ];

        availability().validate(&players)?;
        Ok(())
    }

    #[test]
    fn first_unknown_player_is_reported() {
        let players = [
            PlayerSpec::new("carol.alice"),
            PlayerSpec::new("carol.mallory"),
            PlayerSpec::new("carol.trent"),
        ];

        let result = availability().validate(&players);
        assert!(
            matches!(&result, Err(SchedulerError::UnknownPlayer(name)) if name == "carol.mallory"),
            "{result:?}"
        );
    }

    #[test]
    fn sorted_names() {
        assert_eq!(
            availability().sorted(),
            vec!["carol.alice", "carol.bob", "reference", "reference_plusplus"]
        );
    }
}
