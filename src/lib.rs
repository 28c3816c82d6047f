//! A round robin scheduler for the scrimmage autotester.
//!
//! Give it a time control, a number of rounds and a list of bots, and it writes
//! the autotester's manual game list and queues it.
//!
//! ## Players
//!
//! A player is written `name` or `name#multiplier`. The multiplier scales both
//! the time pool and the increment of that bot, so `reference#4` plays with four
//! times the clock of a bot without a multiplier. Names are put in the
//! namespace of the invoking user (`alice` becomes `carol.alice`) unless they
//! already are or they name a staff bot.
//!
//! ## Game List
//!
//! ```text
//! ***Manual Game List***
//! carol.
//! carol.alice carol.bob 60 0.5 true 120 1.0
//! carol.bob carol.alice 120 1.0 true 60 0.5
//! ```

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

#![deny(clippy::panic)]

pub mod autotest;
pub mod availability;
pub mod config;
pub mod error;
pub mod game_list;
pub mod player;
pub mod qualify;
pub mod round_robin;
pub mod scheduler;
pub mod time;
pub mod utils;

pub const HOME: &str = "scrimmage-scheduler";

pub const COPYRIGHT: &str = r".SH COPYRIGHT
Copyright (C) 2026 Developers of the scrimmage-scheduler project

This program is free software: you can redistribute it and/or modify
it under the terms of the GNU Affero General Public License as published by
the Free Software Foundation, either version 3 of the License, or
(at your option) any later version.

This program is distributed in the hope that it will be useful,
but WITHOUT ANY WARRANTY; without even the implied warranty of
MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the
GNU Affero General Public License for more details.

You should have received a copy of the GNU Affero General Public License
along with this program.  If not, see <https://www.gnu.org/licenses/>.
";

pub const LONG_VERSION: &str = concat!(
    env!("CARGO_PKG_VERSION"),
    "
Copyright (c) 2026 Developers of the scrimmage-scheduler project
Licensed under the AGPLv3"
);

#[cfg(test)]
mod tests {
    use std::{fmt, str::FromStr};

    use super::*;
    use error::SchedulerError;
    use player::PlayerSpec;
    use time::TimeControl;

    fn assert_error_str<T: fmt::Debug>(result: Result<T, SchedulerError>, string: &str) {
        assert!(result.is_err(), "{result:?}");

        if let Err(error) = result {
            assert_eq!(error.to_string(), string);
        }
    }

    #[test]
    fn parse_diagnostics() {
        assert_error_str(
            PlayerSpec::from_str("bob#fast"),
            "player `bob#fast`: the multiplier is not a number",
        );
        assert_error_str(
            PlayerSpec::from_str("#2"),
            "player `#2`: the name is empty",
        );
        assert_error_str(
            PlayerSpec::from_str("bob#-2"),
            "player `bob#-2`: the multiplier has to be a positive number",
        );
    }

    #[test]
    fn configuration_diagnostics() {
        assert_error_str(
            TimeControl::from_str("bullet"),
            "configuration: unknown time control 'bullet', expected one of: blitz, blitz2, regular, regular2, long",
        );
    }

    #[test]
    fn unknown_player_diagnostic() {
        let error = SchedulerError::UnknownPlayer("carol.mallory".to_string());

        assert_eq!(
            error.to_string(),
            "bot `carol.mallory` has not been uploaded to the scrimmage server"
        );
    }
}
