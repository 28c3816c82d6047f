use std::{env, io::Write, path::PathBuf};

use chrono::Utc;
use env_logger::Builder;
use log::LevelFilter;

use crate::{HOME, config::CONFIG_FILE, error::SchedulerError};

const USER_VARIABLES: [&str; 4] = ["LOGNAME", "USER", "LNAME", "USERNAME"];

pub fn init_logger(debug: bool) {
    let mut builder = Builder::new();

    builder.format(|formatter, record| {
        writeln!(
            formatter,
            "{} [{}] ({}): {}",
            Utc::now().format("%Y-%m-%d %H:%M:%S %z"),
            record.level(),
            record.target(),
            record.args()
        )
    });

    if let Ok(var) = env::var("RUST_LOG") {
        builder.parse_filters(&var);
    } else if debug {
        builder.filter(None, LevelFilter::Debug);
    } else {
        // if no RUST_LOG provided, default to logging at the Info level
        builder.filter(None, LevelFilter::Info);
    }

    builder.init();
}

/// The login name of whoever is running the scheduler.
///
/// # Errors
///
/// If none of the usual environment variables hold a name.
pub fn username() -> Result<String, SchedulerError> {
    username_from(|variable| env::var(variable).ok())
}

fn username_from(lookup: impl Fn(&str) -> Option<String>) -> Result<String, SchedulerError> {
    USER_VARIABLES
        .into_iter()
        .filter_map(&lookup)
        .map(|name| name.trim().to_string())
        .find(|name| !name.is_empty())
        .ok_or_else(|| SchedulerError::Configuration("could not get the username".to_string()))
}

#[must_use]
pub fn config_file() -> Option<PathBuf> {
    dirs::config_dir().map(|directory| directory.join(HOME).join(CONFIG_FILE))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn first_non_empty_variable_wins() -> anyhow::Result<()> {
        let username = username_from(|variable| match variable {
            "LOGNAME" => Some(String::new()),
            "USER" => Some("carol".to_string()),
            "USERNAME" => Some("dave".to_string()),
            _ => None,
        })?;

        assert_eq!(username, "carol");
        Ok(())
    }

    #[test]
    fn no_username() {
        assert!(matches!(
            username_from(|_| None),
            Err(SchedulerError::Configuration(_))
        ));
    }
}
