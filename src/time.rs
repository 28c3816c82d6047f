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

use serde::Deserialize;

use crate::error::SchedulerError;

/// Largest increment or pool a profile may have, about 31 years.
pub const MAX_SECONDS: f64 = 1e9;

/// The named paces a round robin can be played at.
#[derive(Clone, Copy, Debug, Default, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub enum TimeControl {
    #[default]
    Blitz,
    Blitz2,
    Regular,
    Regular2,
    Long,
}

impl TimeControl {
    pub const ALL: [Self; 5] = [
        Self::Blitz,
        Self::Blitz2,
        Self::Regular,
        Self::Regular2,
        Self::Long,
    ];
}

impl fmt::Display for TimeControl {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Blitz => write!(f, "blitz"),
            Self::Blitz2 => write!(f, "blitz2"),
            Self::Regular => write!(f, "regular"),
            Self::Regular2 => write!(f, "regular2"),
            Self::Long => write!(f, "long"),
        }
    }
}

impl FromStr for TimeControl {
    type Err = SchedulerError;

    fn from_str(string: &str) -> Result<Self, Self::Err> {
        match string {
            "blitz" => Ok(Self::Blitz),
            "blitz2" => Ok(Self::Blitz2),
            "regular" => Ok(Self::Regular),
            "regular2" => Ok(Self::Regular2),
            "long" => Ok(Self::Long),
            _ => {
                let choices: Vec<_> = Self::ALL.iter().map(ToString::to_string).collect();

                Err(SchedulerError::Configuration(format!(
                    "unknown time control '{string}', expected one of: {}",
                    choices.join(", ")
                )))
            }
        }
    }
}

/// Base clock for one side before its multiplier is applied.
#[derive(Clone, Copy, Debug, Deserialize, PartialEq)]
pub struct TimeControlProfile {
    pub increment_seconds: f64,
    pub pool_seconds: f64,
}

impl TimeControlProfile {
    #[must_use]
    pub const fn new(increment_seconds: f64, pool_seconds: f64) -> Self {
        Self {
            increment_seconds,
            pool_seconds,
        }
    }

    fn is_valid(&self) -> bool {
        self.increment_seconds.is_finite()
            && self.pool_seconds.is_finite()
            && (0.0..=MAX_SECONDS).contains(&self.increment_seconds)
            && (0.0..=MAX_SECONDS).contains(&self.pool_seconds)
    }
}

impl fmt::Display for TimeControlProfile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}s + {}s per move",
            self.pool_seconds, self.increment_seconds
        )
    }
}

/// One profile for every [`TimeControl`].
#[derive(Clone, Debug, Deserialize, PartialEq)]
#[serde(default)]
pub struct TimeControls {
    pub blitz: TimeControlProfile,
    pub blitz2: TimeControlProfile,
    pub regular: TimeControlProfile,
    pub regular2: TimeControlProfile,
    pub long: TimeControlProfile,
}

impl Default for TimeControls {
    fn default() -> Self {
        Self {
            blitz: TimeControlProfile::new(0.5, 60.0),
            blitz2: TimeControlProfile::new(1.0, 60.0),
            regular: TimeControlProfile::new(2.0, 120.0),
            regular2: TimeControlProfile::new(1.0, 180.0),
            long: TimeControlProfile::new(10.0, 480.0),
        }
    }
}

impl TimeControls {
    #[must_use]
    pub fn resolve(&self, time_control: TimeControl) -> TimeControlProfile {
        match time_control {
            TimeControl::Blitz => self.blitz,
            TimeControl::Blitz2 => self.blitz2,
            TimeControl::Regular => self.regular,
            TimeControl::Regular2 => self.regular2,
            TimeControl::Long => self.long,
        }
    }

    /// # Errors
    ///
    /// If a profile has a negative, non-finite or too large value.
    pub fn validate(&self) -> Result<(), SchedulerError> {
        for time_control in TimeControl::ALL {
            let profile = self.resolve(time_control);

            if !profile.is_valid() {
                return Err(SchedulerError::Configuration(format!(
                    "time control '{time_control}' has an invalid profile: {profile:?}"
                )));
            }
        }

        Ok(())
    }
}

#[cfg(test)]
#[allow(clippy::float_cmp)]
mod tests {
    use super::*;

    #[test]
    fn names_round_trip() -> anyhow::Result<()> {
        for time_control in TimeControl::ALL {
            assert_eq!(TimeControl::from_str(&time_control.to_string())?, time_control);
        }

        Ok(())
    }

    #[test]
    fn unknown_mode_is_a_configuration_error() {
        let result = TimeControl::from_str("bullet");

        assert!(
            matches!(
                &result,
                Err(SchedulerError::Configuration(message)) if message.contains("bullet")
            ),
            "{result:?}"
        );
        assert!(TimeControl::from_str("Blitz").is_err());
    }

    #[test]
    fn default_table() {
        let time_controls = TimeControls::default();

        let blitz = time_controls.resolve(TimeControl::Blitz);
        assert_eq!(blitz.increment_seconds, 0.5);
        assert_eq!(blitz.pool_seconds, 60.0);

        let long = time_controls.resolve(TimeControl::Long);
        assert_eq!(long.increment_seconds, 10.0);
        assert_eq!(long.pool_seconds, 480.0);

        assert!(time_controls.validate().is_ok());
    }

    #[test]
    fn negative_profile_is_rejected() {
        let time_controls = TimeControls {
            regular2: TimeControlProfile::new(-1.0, 180.0),
            ..Default::default()
        };

        assert!(matches!(
            time_controls.validate(),
            Err(SchedulerError::Configuration(_))
        ));
    }

    #[test]
    fn huge_profile_is_rejected() {
        let time_controls = TimeControls {
            long: TimeControlProfile::new(10.0, MAX_SECONDS * 2.0),
            ..Default::default()
        };
        assert!(time_controls.validate().is_err());

        let time_controls = TimeControls {
            long: TimeControlProfile::new(MAX_SECONDS, MAX_SECONDS),
            ..Default::default()
        };
        assert!(time_controls.validate().is_ok());
    }
}
