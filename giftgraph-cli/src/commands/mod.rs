pub(crate) mod config;
pub(crate) mod extract;
pub(crate) mod inspect;
pub(crate) mod item_types;

use std::path::Path;

use owo_colors::OwoColorize;
use owo_colors::Stream::Stdout;

use giftgraph_db::SqliteSource;
use giftgraph_import::{ExtractionContext, LoadStats, run_pipeline};

use crate::CliError;
use crate::settings::{ConfigOverrides, ExtractConfig};
use crate::spinner::LoadSpinner;

/// Resolve the effective settings from the settings file and CLI overrides.
pub(crate) fn resolve_config(
    config_path: Option<&Path>,
    overrides: ConfigOverrides,
) -> Result<ExtractConfig, CliError> {
    let (mut config, _) = ExtractConfig::load(config_path)?;
    config.apply(overrides);
    Ok(config)
}

/// Open the configured dump and run every loader stage.
pub(crate) fn load_dump(config: &ExtractConfig, quiet: bool) -> Result<ExtractionContext, CliError> {
    let database = config.database()?;
    log::info!(
        "Reading {}",
        database
            .display()
            .if_supports_color(Stdout, |t| t.cyan()),
    );

    let source = SqliteSource::open(database)?;
    let spinner = LoadSpinner::new(quiet);
    let result = run_pipeline(&source, config.load_options(), Some(&spinner));
    spinner.finish();
    Ok(result?)
}

/// Print the loader counters.
pub(crate) fn log_load_stats(stats: &LoadStats) {
    log::info!("{}", "Load Summary".if_supports_color(Stdout, |t| t.bold()));
    log::info!("  Strings:            {:>8}", stats.strings);
    log::info!("  Props loaded:       {:>8}", stats.props_loaded);
    log::info!(
        "  Props skipped:      {:>8} (not giftable {}, duplicate {}, unnamed {})",
        stats.props_not_giftable + stats.props_duplicate + stats.props_unnamed,
        stats.props_not_giftable,
        stats.props_duplicate,
        stats.props_unnamed,
    );
    log::info!("  NPCs loaded:        {:>8}", stats.npcs_loaded);
    log::info!(
        "  NPCs skipped:       {:>8} (excluded {}, unnamed {})",
        stats.npcs_excluded + stats.npcs_unnamed,
        stats.npcs_excluded,
        stats.npcs_unnamed,
    );
    log::info!("  Gifts created:      {:>8}", stats.gifts_created);
    if stats.duplicate_gifts_suppressed > 0 {
        log::info!(
            "  Duplicates dropped: {:>8}",
            stats.duplicate_gifts_suppressed
        );
    }
    if stats.gift_rows_skipped > 0 || stats.unknown_gift_tags > 0 {
        log::info!(
            "  {} {} gift rows without a loaded NPC, {} unknown gift tags",
            "\u{26A0}".if_supports_color(Stdout, |t| t.yellow()),
            stats.gift_rows_skipped,
            stats.unknown_gift_tags,
        );
    }
}
