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
    path::{Path, PathBuf},
    str::FromStr,
};

use log::info;

use crate::{
    availability::{Availability, AvailabilitySource},
    config::Config,
    error::SchedulerError,
    game_list::GameList,
    player::PlayerSpec,
    qualify::Qualifier,
    round_robin::{MAX_GAMES, round_robin, total_games},
    time::TimeControl,
};

/// Something that plays a written game list.
pub trait MatchExecutor {
    /// # Errors
    ///
    /// If the game list could not be handed over.
    fn execute(&self, game_list: &Path) -> anyhow::Result<()>;
}

/// A round robin as asked for, before any name is qualified.
#[derive(Clone, Debug, PartialEq)]
pub struct Request {
    pub owner: String,
    pub time_control: TimeControl,
    pub rounds: u32,
    pub players: Vec<PlayerSpec>,
}

impl Request {
    /// Parses the player tokens and checks the round count.
    ///
    /// # Errors
    ///
    /// If `rounds` is zero, there are no players, the owner is empty, a token
    /// is malformed, or the round robin would be longer than [`MAX_GAMES`].
    pub fn new<T: AsRef<str>>(
        owner: &str,
        time_control: TimeControl,
        rounds: u32,
        tokens: &[T],
    ) -> Result<Self, SchedulerError> {
        if rounds == 0 {
            return Err(SchedulerError::Configuration(
                "the number of rounds has to be at least 1".to_string(),
            ));
        }

        if owner.trim().is_empty() {
            return Err(SchedulerError::Configuration(
                "the owner can't be empty".to_string(),
            ));
        }

        if tokens.is_empty() {
            return Err(SchedulerError::Configuration(
                "at least one player is needed".to_string(),
            ));
        }

        let players = tokens
            .iter()
            .map(|token| PlayerSpec::from_str(token.as_ref()))
            .collect::<Result<Vec<_>, _>>()?;

        // Qualifying can only merge names, so this is an upper bound.
        match total_games(&players, rounds) {
            Some(games) if games <= MAX_GAMES => {}
            games => {
                return Err(SchedulerError::Configuration(format!(
                    "{} games requested, at most {MAX_GAMES} may be queued at once",
                    games.map_or_else(|| "too many".to_string(), |games| games.to_string())
                )));
            }
        }

        Ok(Self {
            owner: owner.trim().to_string(),
            time_control,
            rounds,
            players,
        })
    }
}

/// Turns requests into game lists and queues them.
pub struct Scheduler<'a> {
    config: &'a Config,
    lister: &'a dyn AvailabilitySource,
    executor: &'a dyn MatchExecutor,
}

impl<'a> Scheduler<'a> {
    #[must_use]
    pub fn new(
        config: &'a Config,
        lister: &'a dyn AvailabilitySource,
        executor: &'a dyn MatchExecutor,
    ) -> Self {
        Self {
            config,
            lister,
            executor,
        }
    }

    /// Qualifies and checks the players, then generates the games.
    ///
    /// Nothing is written.
    ///
    /// # Errors
    ///
    /// If the lister fails or a player isn't available.
    pub fn plan(&self, request: &Request) -> Result<GameList, SchedulerError> {
        let qualifier = Qualifier::new(&request.owner, &self.config.staff);
        let players = qualifier.qualify_all(&request.players);

        let registered = self
            .lister
            .list(&request.owner, self.config.list_limit)
            .map_err(|error| SchedulerError::collaborator("availability lister", &error))?;

        let availability = Availability::new(&self.config.staff, registered);
        availability.log();
        availability.validate(&players)?;

        let profile = self.config.time_controls.resolve(request.time_control);
        info!(
            "{} round(s) of {} ({profile}) between {} player(s)",
            request.rounds,
            request.time_control,
            players.len()
        );

        let games = round_robin(&players, profile, request.rounds);

        Ok(GameList::new(&request.owner, games))
    }

    /// Writes `game_list` and hands it to the executor.
    ///
    /// # Errors
    ///
    /// If the file can't be written or the executor fails.
    pub fn submit(&self, game_list: &GameList) -> Result<PathBuf, SchedulerError> {
        let path = game_list.write(&self.config.game_list_dir())?;
        info!("wrote {} game(s) to {}", game_list.games.len(), path.display());

        self.executor
            .execute(&path)
            .map_err(|error| SchedulerError::collaborator("match runner", &error))?;

        Ok(path)
    }

    /// [`Scheduler::plan`] followed by [`Scheduler::submit`].
    ///
    /// # Errors
    ///
    /// See [`Scheduler::plan`] and [`Scheduler::submit`].
    pub fn schedule(&self, request: &Request) -> Result<PathBuf, SchedulerError> {
        let game_list = self.plan(request)?;
        self.submit(&game_list)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_rounds() {
        let result = Request::new("carol", TimeControl::Blitz, 0, &["alice", "bob"]);
        assert!(matches!(result, Err(SchedulerError::Configuration(_))));
    }

    #[test]
    fn no_players() {
        let tokens: [&str; 0] = [];
        let result = Request::new("carol", TimeControl::Blitz, 1, &tokens);
        assert!(matches!(result, Err(SchedulerError::Configuration(_))));
    }

    #[test]
    fn bad_token_is_named() {
        let result = Request::new("carol", TimeControl::Blitz, 1, &["alice", "bob#x"]);

        assert!(
            matches!(&result, Err(SchedulerError::Parse { token, .. }) if token == "bob#x"),
            "{result:?}"
        );
    }

    #[test]
    fn too_many_games() {
        let result = Request::new("carol", TimeControl::Blitz, u32::MAX, &["alice", "bob"]);

        assert!(
            matches!(
                &result,
                Err(SchedulerError::Configuration(message)) if message.contains("8589934590")
            ),
            "{result:?}"
        );
    }

    #[test]
    fn game_limit_is_inclusive() -> anyhow::Result<()> {
        let rounds = u32::try_from(MAX_GAMES / 2)?;

        Request::new("carol", TimeControl::Blitz, rounds, &["alice", "bob"])?;

        let result = Request::new("carol", TimeControl::Blitz, rounds + 1, &["alice", "bob"]);
        assert!(matches!(result, Err(SchedulerError::Configuration(_))));
        Ok(())
    }

    #[test]
    fn many_rounds_of_one_bot_are_empty() -> anyhow::Result<()> {
        let tokens = ["alice", "alice#2"];
        let request = Request::new("carol", TimeControl::Blitz, u32::MAX, &tokens)?;

        assert_eq!(request.rounds, u32::MAX);
        Ok(())
    }

    #[test]
    fn tokens_keep_their_order() -> anyhow::Result<()> {
        let request = Request::new("carol", TimeControl::Long, 3, &["bob#2", "alice", "bob"])?;

        let names: Vec<_> = request
            .players
            .iter()
            .map(|player| player.base_name.as_str())
            .collect();
        assert_eq!(names, vec!["bob", "alice", "bob"]);
        assert_eq!(request.rounds, 3);
        Ok(())
    }
}
