//! Logger setup.

use std::fs::{self, File};

use simplelog::{Config, SimpleLogger, WriteLogger};

use crate::config::KitConfig;
use crate::paths;
use crate::Result;

/// Install the global logger described by `config`.
///
/// With a log path, the previous log is rotated and a fresh file is written.
/// Without one, records go to stderr.
pub fn init(config: &KitConfig) -> Result<()> {
    match &config.log_path {
        Some(path) => {
            if let Some(dir) = path.parent() {
                fs::create_dir_all(dir)?;
            }
            paths::rotate_logs(path);
            let log_file = File::create(path)?;
            WriteLogger::init(config.log_level, Config::default(), log_file)?;
            log::info!("{} logging to {}", config.name, path.display());
        }
        None => {
            SimpleLogger::init(config.log_level, Config::default())?;
        }
    }

    Ok(())
}
