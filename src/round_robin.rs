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

use std::fmt;

use crate::{player::PlayerSpec, time::TimeControlProfile};

/// Always written between the first and the second side of a game line.
pub const FIXED_FLAG: &str = "true";

/// Largest number of games a single request may queue.
pub const MAX_GAMES: u64 = 1_000_000;

/// One scheduled game. `player1` moves first.
#[derive(Clone, Debug, PartialEq)]
pub struct GameDescriptor {
    pub player1: String,
    pub player2: String,
    pub pool1: i64,
    pub inc1: f64,
    pub pool2: i64,
    pub inc2: f64,
}

impl GameDescriptor {
    #[must_use]
    pub fn new(player1: &PlayerSpec, player2: &PlayerSpec, profile: TimeControlProfile) -> Self {
        let (pool1, inc1) = scaled_clock(profile, player1.multiplier);
        let (pool2, inc2) = scaled_clock(profile, player2.multiplier);

        Self {
            player1: player1.base_name.clone(),
            player2: player2.base_name.clone(),
            pool1,
            inc1,
            pool2,
            inc2,
        }
    }
}

impl fmt::Display for GameDescriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {} {} {} {FIXED_FLAG} {} {}",
            self.player1,
            self.player2,
            self.pool1,
            seconds(self.inc1),
            self.pool2,
            seconds(self.inc2),
        )
    }
}

/// The pool is truncated toward zero, the increment is kept as is.
#[allow(clippy::cast_possible_truncation)]
#[must_use]
pub fn scaled_clock(profile: TimeControlProfile, multiplier: f64) -> (i64, f64) {
    let pool = (profile.pool_seconds * multiplier).trunc() as i64;
    let increment = profile.increment_seconds * multiplier;

    (pool, increment)
}

/// Shortest round-trip form that always keeps a fractional part: `1.0`, `0.5`.
///
/// Very small or very large values use an exponent with a sign and at least
/// two digits, `5e-05` or `1e+16`, the way the autotester's own tools print them.
#[must_use]
pub fn seconds(value: f64) -> String {
    let debug = format!("{value:?}");

    let Some((mantissa, exponent)) = debug.split_once('e') else {
        return debug;
    };

    let (sign, digits) = match exponent.strip_prefix('-') {
        Some(digits) => ('-', digits),
        None => ('+', exponent),
    };

    format!("{mantissa}e{sign}{digits:0>2}")
}

/// Number of games one round produces for `players`.
#[must_use]
pub fn games_per_round(players: &[PlayerSpec]) -> usize {
    players
        .iter()
        .map(|player1| {
            players
                .iter()
                .filter(|player2| player1.base_name != player2.base_name)
                .count()
        })
        .sum()
}

/// Number of games `rounds` rounds produce, `None` on overflow.
#[must_use]
pub fn total_games(players: &[PlayerSpec], rounds: u32) -> Option<u64> {
    u64::try_from(games_per_round(players))
        .ok()?
        .checked_mul(u64::from(rounds))
}

/// Schedules every ordered pair of different bots, `rounds` times over.
///
/// Both colors of a pairing are played in the same round. Games come out
/// round by round, then in the order of the first player, then of the second
/// player, exactly as `players` is ordered. Two entries with the same base name
/// never meet, whatever their multipliers.
#[must_use]
pub fn round_robin(
    players: &[PlayerSpec],
    profile: TimeControlProfile,
    rounds: u32,
) -> Vec<GameDescriptor> {
    let mut games = Vec::new();
    if games_per_round(players) == 0 {
        return games;
    }

    for _round in 0..rounds {
        for player1 in players {
            for player2 in players {
                if player1.base_name == player2.base_name {
                    continue;
                }

                games.push(GameDescriptor::new(player1, player2, profile));
            }
        }
    }

    games
}
