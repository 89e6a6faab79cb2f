use std::path::{Path, PathBuf};

use owo_colors::OwoColorize;
use owo_colors::Stream::Stdout;

use crate::CliError;
use crate::settings::{ConfigOrigin, ExtractConfig, settings_path, write_template};

fn target_path(explicit: Option<&Path>) -> PathBuf {
    explicit.map(Path::to_path_buf).unwrap_or_else(settings_path)
}

/// Show the effective settings and their source.
pub(crate) fn run_config_show(explicit: Option<&Path>) -> Result<(), CliError> {
    let (config, origin) = ExtractConfig::load(explicit)?;

    log::info!(
        "{}",
        "giftgraph Configuration".if_supports_color(Stdout, |t| t.bold()),
    );
    match origin {
        ConfigOrigin::File(p) => log::info!(
            "  Settings file: {} {}",
            p.display().if_supports_color(Stdout, |t| t.cyan()),
            "(loaded)".if_supports_color(Stdout, |t| t.green()),
        ),
        ConfigOrigin::Defaults => log::info!(
            "  Settings file: {} {}",
            target_path(explicit)
                .display()
                .if_supports_color(Stdout, |t| t.cyan()),
            "(not found, using defaults)".if_supports_color(Stdout, |t| t.dimmed()),
        ),
    }
    crate::log_blank();

    for line in config.to_toml()?.lines() {
        log::info!("  {line}");
    }
    if config.database.is_none() {
        crate::log_blank();
        log::info!(
            "  {} {}",
            "database:".if_supports_color(Stdout, |t| t.cyan()),
            "not set".if_supports_color(Stdout, |t| t.yellow()),
        );
    }
    Ok(())
}

/// Print the settings file path.
pub(crate) fn run_config_path(explicit: Option<&Path>) {
    println!("{}", target_path(explicit).display());
}

/// Write a commented default settings file.
pub(crate) fn run_config_init(explicit: Option<&Path>, force: bool) -> Result<(), CliError> {
    let path = target_path(explicit);
    write_template(&path, force)?;
    log::info!(
        "{} Wrote {}",
        "\u{2714}".if_supports_color(Stdout, |t| t.green()),
        path.display(),
    );
    Ok(())
}
