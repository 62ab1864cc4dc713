//! GridView builder CLI.

use std::io::{self, IsTerminal};

use clap::Parser;
use tracing::level_filters::LevelFilter;

use gridview_builder::logging::{init_logging, LogConfig};
use gridview_builder::pipeline;
use gridview_builder::state::UnavailableClipboard;
use gridview_builder::{descriptors, BuilderOptions, GridViewBuilder, Result};

mod cli;

use crate::cli::{Cli, Command};

fn main() {
    let cli = Cli::parse();
    let command = cli.command.unwrap_or(Command::Run);

    let log_config = log_config_from_cli(&cli, command);
    if !log_config.is_off() {
        if let Err(error) = init_logging(&log_config) {
            eprintln!("error: failed to initialize logging: {error}");
            std::process::exit(1);
        }
    }

    let exit_code = match execute(&cli, command) {
        Ok(()) => 0,
        Err(error) => {
            eprintln!("error: {error}");
            1
        }
    };
    std::process::exit(exit_code);
}

/// Build logging configuration from CLI flags.
///
/// The interactive view owns the terminal, so without `--log-file` it logs nothing.
fn log_config_from_cli(cli: &Cli, command: Command) -> LogConfig {
    let mut config = LogConfig {
        level_filter: cli.verbosity.tracing_level_filter(),
        use_env_filter: !cli.verbosity.is_present(),
        with_ansi: io::stderr().is_terminal(),
        ..LogConfig::default()
    }
    .with_log_file(cli.log_file.clone());

    if command == Command::Run && cli.log_file.is_none() {
        config.level_filter = LevelFilter::OFF;
        config.use_env_filter = false;
    }
    config
}

fn load_options(cli: &Cli) -> Result<BuilderOptions> {
    let options = match &cli.config.options {
        Some(path) => BuilderOptions::from_path(path)?,
        None => BuilderOptions::default(),
    };
    Ok(cli.config.apply(options))
}

fn execute(cli: &Cli, command: Command) -> Result<()> {
    match command {
        Command::Run => {
            let widget = GridViewBuilder::new(load_options(cli)?);
            let mut handle = pipeline::mount(widget)?;
            let result = pipeline::run(&mut handle);
            handle.unmount();
            result
        }
        Command::Code => {
            let widget = GridViewBuilder::with_clipboard(load_options(cli)?, Box::new(UnavailableClipboard));
            println!("{}", widget.get_code());
            Ok(())
        }
        Command::State => {
            let widget = GridViewBuilder::with_clipboard(load_options(cli)?, Box::new(UnavailableClipboard));
            let json = serde_json::to_string_pretty(&widget.get_state()).map_err(io::Error::other)?;
            println!("{json}");
            Ok(())
        }
        Command::Templates => {
            for descriptor in descriptors() {
                println!("{:<10} {:<18} {}", descriptor.id, descriptor.label, descriptor.description);
            }
            Ok(())
        }
    }
}
