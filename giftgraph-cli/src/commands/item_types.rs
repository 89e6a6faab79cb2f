use std::collections::BTreeMap;
use std::path::Path;

use owo_colors::OwoColorize;
use owo_colors::Stream::Stdout;

use crate::CliError;
use crate::settings::ConfigOverrides;

use super::{load_dump, resolve_config};

/// List every distinct `Item_Type` value across giftable props, with counts.
pub(crate) fn run_item_types(
    config_path: Option<&Path>,
    overrides: ConfigOverrides,
    quiet: bool,
) -> Result<(), CliError> {
    let config = resolve_config(config_path, overrides)?;
    let ctx = load_dump(&config, quiet)?;

    let mut counts: BTreeMap<&str, usize> = BTreeMap::new();
    let mut untyped = 0usize;
    for prop in ctx.graph().props() {
        if prop.item_types.is_empty() {
            untyped += 1;
        }
        for item_type in &prop.item_types {
            *counts.entry(item_type.as_str()).or_default() += 1;
        }
    }

    crate::log_blank();
    log::info!(
        "{}",
        format!("{} item types", counts.len()).if_supports_color(Stdout, |t| t.bold()),
    );
    for (item_type, count) in &counts {
        log::info!(
            "  {} {:>6}",
            format!("{item_type:<24}").if_supports_color(Stdout, |t| t.cyan()),
            count
        );
    }
    if untyped > 0 {
        log::info!(
            "  {} {:>6}",
            format!("{:<24}", "(none)").if_supports_color(Stdout, |t| t.dimmed()),
            untyped
        );
    }
    Ok(())
}
