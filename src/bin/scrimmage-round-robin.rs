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

use std::{io::Write as _, path::PathBuf};

use clap::{CommandFactory, Parser};
use log::info;
use scrimmage_scheduler::{
    COPYRIGHT, LONG_VERSION,
    autotest::{AutotestList, AutotestRun},
    config::Config,
    scheduler::{Request, Scheduler},
    time::TimeControl,
    utils,
};

/// Scrimmage Round Robin
///
/// Queues round robin games between already uploaded bots on the scrimmage
/// server. Add #<number> to a player to multiply its total time, e.g.
/// reference#4 has 4x time.
#[derive(Parser, Debug)]
#[command(long_version = LONG_VERSION, about = "Scrimmage Round Robin")]
struct Args {
    /// Time control mode to play: blitz, blitz2, regular, regular2 or long
    #[arg(index = 1, required_unless_present = "man", value_name = "MODE")]
    time_control: Option<TimeControl>,

    /// Number of round robin rounds to play
    #[arg(index = 2, required_unless_present = "man")]
    rounds: Option<u32>,

    /// Players to participate in the round robin
    #[arg(index = 3, num_args = 1.., required_unless_present = "man")]
    players: Vec<String>,

    /// Schedule as this user instead of the one logged in
    #[arg(long)]
    owner: Option<String>,

    /// Read the configuration from this RON file
    #[arg(long, value_name = "path")]
    config: Option<PathBuf>,

    /// Print the game list instead of queuing it
    #[arg(long)]
    dry_run: bool,

    /// Whether to log on the debug level
    #[arg(long)]
    debug: bool,

    /// Build the manpage
    #[arg(long)]
    man: bool,
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    utils::init_logger(args.debug);

    if args.man {
        let mut buffer: Vec<u8> = Vec::default();
        let cmd = Args::command()
            .name("scrimmage-round-robin")
            .long_version(None);
        let man = clap_mangen::Man::new(cmd).date("2026-10-17");

        man.render(&mut buffer)?;
        write!(buffer, "{COPYRIGHT}")?;

        std::fs::write("scrimmage-round-robin.1", buffer)?;
        return Ok(());
    }

    let config = Config::load(args.config.as_deref())?;

    let owner = match args.owner {
        Some(owner) => owner,
        None => utils::username()?,
    };
    info!("Found username `{owner}`.");

    let request = Request::new(
        &owner,
        args.time_control.unwrap_or_default(),
        args.rounds.unwrap_or_default(),
        args.players.as_slice(),
    )?;

    let lister = AutotestList::new(&config.lister);
    let runner = AutotestRun::new(&config.runner);
    let scheduler = Scheduler::new(&config, &lister, &runner);

    if args.dry_run {
        let game_list = scheduler.plan(&request)?;
        print!("{game_list}");
    } else {
        let path = scheduler.schedule(&request)?;
        info!("queued {}", path.display());
    }

    Ok(())
}
