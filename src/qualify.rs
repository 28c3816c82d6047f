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

use crate::player::PlayerSpec;

/// Puts bot names into the namespace of the user who uploaded them.
///
/// Every user shares one matchmaking pool on the autotester, so `alice` uploaded
/// by `carol` is known there as `carol.alice`. Staff bots keep their bare names.
#[derive(Clone, Debug)]
pub struct Qualifier<'a> {
    owner: &'a str,
    staff: &'a [String],
}

impl<'a> Qualifier<'a> {
    #[must_use]
    pub fn new(owner: &'a str, staff: &'a [String]) -> Self {
        Self { owner, staff }
    }

    #[must_use]
    pub fn is_staff(&self, base_name: &str) -> bool {
        self.staff.iter().any(|staff| staff == base_name)
    }

    #[must_use]
    pub fn is_qualified(&self, base_name: &str) -> bool {
        base_name
            .strip_prefix(self.owner)
            .is_some_and(|rest| rest.starts_with('.'))
    }

    #[must_use]
    pub fn qualify_name(&self, base_name: &str) -> String {
        if self.is_staff(base_name) || self.is_qualified(base_name) {
            base_name.to_string()
        } else {
            format!("{}.{base_name}", self.owner)
        }
    }

    /// The multiplier is carried over untouched.
    #[must_use]
    pub fn qualify(&self, player: &PlayerSpec) -> PlayerSpec {
        PlayerSpec {
            base_name: self.qualify_name(&player.base_name),
            multiplier: player.multiplier,
        }
    }

    #[must_use]
    pub fn qualify_all(&self, players: &[PlayerSpec]) -> Vec<PlayerSpec> {
        players.iter().map(|player| self.qualify(player)).collect()
    }
}
