use std::path::Path;

use owo_colors::OwoColorize;
use owo_colors::Stream::Stdout;

use giftgraph_export::export;

use crate::CliError;
use crate::settings::ConfigOverrides;

use super::{load_dump, log_load_stats, resolve_config};

/// Run the full extraction: load the dump, then export documents and icons.
pub(crate) fn run_extract(
    config_path: Option<&Path>,
    overrides: ConfigOverrides,
    dry_run: bool,
    quiet: bool,
) -> Result<(), CliError> {
    let config = resolve_config(config_path, overrides)?;
    let ctx = load_dump(&config, quiet)?;
    log_load_stats(ctx.stats());
    crate::log_blank();

    let options = config.export_options(dry_run);
    let summary = export(ctx.graph(), &options)?;

    if dry_run {
        log::info!(
            "{}",
            "Dry run: no files written".if_supports_color(Stdout, |t| t.bold()),
        );
        log::info!(
            "  Would write {} props, {} npcs, {} gifts to {}",
            summary.props,
            summary.npcs,
            summary.gifts,
            options.output_dir.display(),
        );
        log::info!(
            "  Would copy {} icons to {}",
            summary.images_planned,
            options.image_output_dir.display(),
        );
    } else {
        for path in &summary.documents {
            log::info!(
                "  {} {}",
                "\u{2714}".if_supports_color(Stdout, |t| t.green()),
                path.display(),
            );
        }
        log::info!(
            "  Copied {} of {} icons to {}",
            summary.images_copied,
            summary.images_planned,
            options.image_output_dir.display(),
        );
    }

    if summary.icon_fallbacks > 0 || summary.icon_ambiguous > 0 {
        log::info!(
            "  {} {} icons fell back to {}, {} matched several images",
            "\u{26A0}".if_supports_color(Stdout, |t| t.yellow()),
            summary.icon_fallbacks,
            options.default_icon,
            summary.icon_ambiguous,
        );
    }

    if !summary.copy_failures.is_empty() {
        log::warn!("{} icon copies failed:", summary.copy_failures.len());
        for failure in &summary.copy_failures {
            log::warn!(
                "  {} prop {}: {}",
                "\u{2718}".if_supports_color(Stdout, |t| t.red()),
                failure.prop_id,
                failure.reason,
            );
        }
    }

    Ok(())
}
