//! Command-line interface entry point for `cgpacalc`

mod args;
mod commands;

use args::{Cli, Command};
use cgpa_calc::config::Config;
use cgpa_calc::core::store::JsonFileStore;
use cgpa_calc::core::tracker::Tracker;
use clap::Parser;
use logger::{
    close_file_logging, debug, enable_debug, enable_verbose, info, init_file_logging, set_level,
    Level,
};
use std::path::PathBuf;

fn main() {
    let args = Cli::parse();

    // Load configuration once at startup; overrides apply to a runtime copy so
    // `config set` never writes them back
    let mut stored_config = Config::load();
    let defaults = Config::from_defaults();
    let mut config = stored_config.clone();
    config.apply_overrides(&args.to_config_overrides());

    init_logging(&args, &config);

    let result = match args.command {
        Command::Config { subcommand } => {
            commands::config::run(subcommand, &mut stored_config, &defaults);
            Ok(())
        }
        Command::Semester { subcommand } => {
            open_tracker(&config).and_then(|mut tracker| commands::semester::run(subcommand, &mut tracker))
        }
        Command::Course { subcommand } => open_tracker(&config).and_then(|mut tracker| {
            commands::course::run(subcommand, &mut tracker, config.course_defaults())
        }),
        Command::Show { json } => {
            open_tracker(&config).and_then(|tracker| commands::show::run(&tracker, json))
        }
        Command::Report {
            output,
            format,
            title,
        } => open_tracker(&config).and_then(|tracker| {
            commands::report::run(
                tracker.record(),
                output.as_deref(),
                &format,
                title.as_deref(),
                &config,
            )
        }),
    };

    close_file_logging();

    if let Err(e) = result {
        eprintln!("✗ {e}");
        std::process::exit(1);
    }
}

/// Configure level, verbosity and the optional file sink
fn init_logging(args: &Cli, config: &Config) {
    // CLI flag overrides config; otherwise use config logging.level; fallback warn
    let mut level = args
        .log_level
        .map(Into::into)
        .or_else(|| Level::parse(&config.logging.level))
        .unwrap_or(Level::Warn);

    if args.debug_flag || level == Level::Debug {
        level = Level::Debug;
        enable_debug();
    }

    let verbose = args.verbose || config.logging.verbose;
    if verbose {
        enable_verbose();
    }
    set_level(level);

    // CLI flag wins, otherwise use config logging.file if set
    let config_log_path = if config.logging.file.is_empty() {
        None
    } else {
        Some(PathBuf::from(&config.logging.file))
    };

    if let Some(log_path) = args.log_file.as_ref().or(config_log_path.as_ref()) {
        let display_path = log_path.to_string_lossy();
        if init_file_logging(log_path) {
            if verbose {
                eprintln!("✓ File logging initialized at: {display_path}");
            } else {
                info!("File logging initialized at: {display_path}");
            }
        } else {
            eprintln!("✗ Failed to initialize file logging at: {display_path}");
        }
    }
}

/// Open the record stored at the configured data file
fn open_tracker(config: &Config) -> Result<Tracker<JsonFileStore>, String> {
    if config.paths.data_file.is_empty() {
        return Err(
            "No data file configured; set one with `cgpacalc config set data_file PATH`".to_string(),
        );
    }
    let store = JsonFileStore::new(&config.paths.data_file);
    debug!("Opening record at {}", store.path().display());
    Ok(Tracker::open(store))
}
