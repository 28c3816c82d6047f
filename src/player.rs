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

use std::{fmt, str::FromStr};

use crate::error::SchedulerError;

pub const MULTIPLIER_SEPARATOR: char = '#';

/// Keeps scaled clocks well inside what a game line can carry exactly.
pub const MAX_MULTIPLIER: f64 = 1_000.0;

/// A bot together with the factor applied to its clock.
///
/// Written on the command line as `name` or `name#multiplier`, so
/// `reference#4` is the reference bot with four times the time.
#[derive(Clone, Debug, PartialEq)]
pub struct PlayerSpec {
    pub base_name: String,
    pub multiplier: f64,
}

impl PlayerSpec {
    #[must_use]
    pub fn new(base_name: &str) -> Self {
        Self {
            base_name: base_name.to_string(),
            multiplier: 1.0,
        }
    }

    #[must_use]
    pub fn with_multiplier(mut self, multiplier: f64) -> Self {
        self.multiplier = multiplier;
        self
    }
}

impl fmt::Display for PlayerSpec {
    #[allow(clippy::float_cmp)]
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.multiplier == 1.0 {
            write!(f, "{}", self.base_name)
        } else {
            write!(
                f,
                "{}{MULTIPLIER_SEPARATOR}{}",
                self.base_name, self.multiplier
            )
        }
    }
}

impl FromStr for PlayerSpec {
    type Err = SchedulerError;

    fn from_str(token: &str) -> Result<Self, Self::Err> {
        let Some((base_name, multiplier)) = token.split_once(MULTIPLIER_SEPARATOR) else {
            let base_name = token.trim();
            if base_name.is_empty() {
                return Err(SchedulerError::parse(token, "the name is empty"));
            }

            return Ok(Self::new(base_name));
        };

        let base_name = base_name.trim();
        if base_name.is_empty() {
            return Err(SchedulerError::parse(token, "the name is empty"));
        }

        let multiplier = multiplier
            .trim()
            .parse::<f64>()
            .map_err(|_| SchedulerError::parse(token, "the multiplier is not a number"))?;

        if !multiplier.is_finite() || multiplier <= 0.0 {
            return Err(SchedulerError::parse(token, "the multiplier has to be a positive number"));
        }

        if multiplier > MAX_MULTIPLIER {
            return Err(SchedulerError::parse(token, "the multiplier can be at most 1000"));
        }

        Ok(Self::new(base_name).with_multiplier(multiplier))
    }
}

#[cfg(test)]
#[allow(clippy::float_cmp)]
mod tests {
    use super::*;

    fn assert_parse_error(token: &str) {
        let result = PlayerSpec::from_str(token);

        assert!(
            matches!(&result, Err(SchedulerError::Parse { token: bad, .. }) if bad == token),
            "{token:?}: {result:?}"
        );
    }

    #[test]
    fn plain_name_has_unit_multiplier() -> anyhow::Result<()> {
        let player = PlayerSpec::from_str("alice")?;

        assert_eq!(player.base_name, "alice");
        assert_eq!(player.multiplier, 1.0);
        Ok(())
    }

    #[test]
    fn multiplier_after_separator() -> anyhow::Result<()> {
        let player = PlayerSpec::from_str("bob#2.0")?;
        assert_eq!(player, PlayerSpec::new("bob").with_multiplier(2.0));

        let player = PlayerSpec::from_str("reference#4")?;
        assert_eq!(player.base_name, "reference");
        assert_eq!(player.multiplier, 4.0);

        let player = PlayerSpec::from_str("carol.bot#0.25")?;
        assert_eq!(player.base_name, "carol.bot");
        assert_eq!(player.multiplier, 0.25);
        Ok(())
    }

    #[test]
    fn malformed_tokens() {
        assert_parse_error("");
        assert_parse_error("   ");
        assert_parse_error("#2");
        assert_parse_error("bob#");
        assert_parse_error("bob#fast");
        assert_parse_error("bob#0");
        assert_parse_error("bob#-1.5");
        assert_parse_error("bob#inf");
        assert_parse_error("bob#NaN");
        assert_parse_error("bob#2#3");
    }

    #[test]
    fn multiplier_is_bounded() -> anyhow::Result<()> {
        assert_parse_error("bob#1e300");
        assert_parse_error("bob#1000.5");

        let player = PlayerSpec::from_str("bob#1000")?;
        assert_eq!(player.multiplier, MAX_MULTIPLIER);

        let player = PlayerSpec::from_str("bob#0.0001")?;
        assert_eq!(player.multiplier, 0.0001);
        Ok(())
    }

    #[test]
    fn display_omits_unit_multiplier() -> anyhow::Result<()> {
        assert_eq!(PlayerSpec::from_str("alice")?.to_string(), "alice");
        assert_eq!(PlayerSpec::from_str("bob#2.5")?.to_string(), "bob#2.5");
        Ok(())
    }
}
