//! giftgraph CLI
//!
//! Command-line interface for extracting NPC gift preferences from a game
//! data dump into JSON documents and item icons.

mod cli_types;
mod commands;
mod error;
mod settings;
mod spinner;

use std::io::Write;

use clap::Parser;
use log::LevelFilter;

use cli_types::{Cli, Commands, ConfigAction};
pub(crate) use error::CliError;

/// Log an empty line at info level.
pub(crate) fn log_blank() {
    log::info!("");
}

/// Install the logger. Info lines print bare since they are the command's
/// output; other levels carry a prefix.
fn init_logging(quiet: bool, verbose: bool) {
    let level = if quiet {
        LevelFilter::Warn
    } else if verbose {
        LevelFilter::Debug
    } else {
        LevelFilter::Info
    };

    let mut builder = env_logger::Builder::new();
    builder.filter_level(level);
    if let Ok(spec) = std::env::var("RUST_LOG") {
        builder.parse_filters(&spec);
    }
    builder.format(|buf, record| match record.level() {
        log::Level::Info => writeln!(buf, "{}", record.args()),
        level => writeln!(buf, "[{}] {}", level, record.args()),
    });
    builder.init();
}

fn main() {
    let cli = Cli::parse();
    init_logging(cli.quiet, cli.verbose);

    if let Err(e) = run(cli) {
        log::error!("{}", e);
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<(), CliError> {
    let config_path = cli.config.as_deref();
    match cli.command {
        Commands::Extract {
            source,
            images_dir,
            output_dir,
            image_output_dir,
            default_icon,
            dry_run,
        } => {
            let mut overrides = source.overrides();
            overrides.images_dir = images_dir;
            overrides.output_dir = output_dir;
            overrides.image_output_dir = image_output_dir;
            overrides.default_icon = default_icon;
            commands::extract::run_extract(config_path, overrides, dry_run, cli.quiet)
        }
        Commands::Inspect { source, npc, prop } => {
            commands::inspect::run_inspect(config_path, source.overrides(), npc, prop, cli.quiet)
        }
        Commands::ItemTypes { source } => {
            commands::item_types::run_item_types(config_path, source.overrides(), cli.quiet)
        }
        Commands::Config { action } => match action {
            ConfigAction::Show => commands::config::run_config_show(config_path),
            ConfigAction::Path => {
                commands::config::run_config_path(config_path);
                Ok(())
            }
            ConfigAction::Init { force } => commands::config::run_config_init(config_path, force),
        },
    }
}
