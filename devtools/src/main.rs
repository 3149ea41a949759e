mod commands;
mod console;
mod demo;

use std::io;
use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use devkit::config::KitConfig;
use devkit::storage::StorageService;
use devkit::widgets::SelectionMode;
use log::LevelFilter;

use crate::console::Console;

/// Admin console over a persisted members list and a recipients chooser.
#[derive(Debug, Parser)]
#[command(name = "devtools", version, about)]
struct Args {
    /// SQLite file for durable storage (defaults to the platform data dir)
    #[arg(long, value_name = "PATH", conflicts_with = "in_memory")]
    storage: Option<PathBuf>,

    /// Keep durable storage in memory for this run only
    #[arg(long)]
    in_memory: bool,

    /// Log file (defaults to the platform cache dir; stderr if unavailable)
    #[arg(long, value_name = "PATH")]
    log_file: Option<PathBuf>,

    #[arg(long, default_value_t = LevelFilter::Info)]
    log_level: LevelFilter,

    /// Member group to open instead of the last one used
    #[arg(long)]
    group: Option<String>,

    /// Selection mode of the members list: none, single or multiple
    #[arg(long, default_value_t = SelectionMode::Single)]
    mode: SelectionMode,
}

impl Args {
    fn config(&self) -> KitConfig {
        let mut config = KitConfig::new("devtools").log_level(self.log_level);
        if self.in_memory {
            config = config.in_memory();
        } else if let Some(path) = &self.storage {
            config = config.storage_path(path);
        }
        if let Some(path) = &self.log_file {
            config = config.log_path(Some(path.clone()));
        }
        config
    }
}

fn main() -> ExitCode {
    let args = Args::parse();
    let config = args.config();

    if let Err(e) = devkit::logging::init(&config) {
        eprintln!("Error: failed to initialize logging: {e}");
        return ExitCode::FAILURE;
    }

    let storage = match StorageService::open(&config) {
        Ok(storage) => storage,
        Err(e) => {
            log::warn!("Durable storage unavailable, selections will not persist: {e}");
            StorageService::in_memory()
        }
    };

    let mut console = Console::new(storage.clone(), &config, args.group, args.mode);
    let result = console.run(io::stdin().lock(), &mut io::stdout().lock());
    storage.end_session();

    let members: Vec<String> = console
        .members()
        .selected_items()
        .iter()
        .map(demo::member_id)
        .collect();
    log::info!(
        "Leaving group {} (members {:?}, {} recipients chosen)",
        console.group(),
        members,
        console.chooser().chosen().len()
    );

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mode_argument() {
        let args = Args::try_parse_from(["devtools", "--mode", "multi"]).unwrap();
        assert_eq!(args.mode, SelectionMode::Multiple);

        let args = Args::try_parse_from(["devtools"]).unwrap();
        assert_eq!(args.mode, SelectionMode::Single);

        assert!(Args::try_parse_from(["devtools", "--mode", "both"]).is_err());
    }
}
