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
    fmt,
    fs::{self, File, OpenOptions},
    io::{self, Write},
    path::{Path, PathBuf},
};

use log::{info, warn};
use uuid::Uuid;

use crate::round_robin::GameDescriptor;

pub const HEADER: &str = "***Manual Game List***";
pub const FILE_PREFIX: &str = "scrimmage-";
pub const FILE_EXTENSION: &str = "games";
const PARTIAL_SUFFIX: &str = ".partial";

/// The file the autotester reads, one game per line after a two line header.
///
/// ```text
/// ***Manual Game List***
/// carol.
/// carol.alice carol.bob 60 0.5 true 120 1.0
/// ```
#[derive(Clone, Debug, PartialEq)]
pub struct GameList {
    pub owner: String,
    pub games: Vec<GameDescriptor>,
}

impl GameList {
    #[must_use]
    pub fn new(owner: &str, games: Vec<GameDescriptor>) -> Self {
        Self {
            owner: owner.to_string(),
            games,
        }
    }

    /// Writes the list to a new uniquely named file in `directory`.
    ///
    /// The file only shows up under its final name once it is complete.
    ///
    /// # Errors
    ///
    /// If the file can't be created or written.
    pub fn write(&self, directory: &Path) -> io::Result<PathBuf> {
        for game in &self.games {
            info!("Queuing game: {game}");
        }

        let contents = self.to_string();
        write_atomically(directory, |file| {
            file.write_all(contents.as_bytes())?;
            file.flush()
        })
    }
}

/// Fills a hidden file in `directory` with `write`, then renames it to a fresh
/// game list name. Nothing is left behind on failure.
fn write_atomically(
    directory: &Path,
    write: impl FnOnce(&mut File) -> io::Result<()>,
) -> io::Result<PathBuf> {
    let id = Uuid::new_v4();
    let partial = directory.join(format!(".{FILE_PREFIX}{id}.{FILE_EXTENSION}{PARTIAL_SUFFIX}"));
    let path = directory.join(format!("{FILE_PREFIX}{id}.{FILE_EXTENSION}"));

    let mut file = OpenOptions::new()
        .write(true)
        .create_new(true)
        .open(&partial)?;

    let result = write(&mut file).and_then(|()| file.sync_all());
    drop(file);
    let result = result.and_then(|()| fs::rename(&partial, &path));

    if let Err(error) = result {
        if let Err(remove_error) = fs::remove_file(&partial) {
            warn!("{}: {remove_error}", partial.display());
        }
        return Err(error);
    }

    Ok(path)
}

impl fmt::Display for GameList {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{HEADER}")?;
        writeln!(f, "{}.", self.owner)?;

        for game in &self.games {
            writeln!(f, "{game}")?;
        }

        Ok(())
    }
}
