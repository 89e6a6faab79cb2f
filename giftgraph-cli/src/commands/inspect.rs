use std::path::Path;

use owo_colors::OwoColorize;
use owo_colors::Stream::Stdout;

use giftgraph_catalog::{GiftGraph, GiftLevel, HasGiftEdges};

use crate::CliError;
use crate::settings::ConfigOverrides;

use super::{load_dump, resolve_config};

/// Show the favor summary of one NPC and/or one prop, or list every NPC with
/// its gift counts when neither is named.
pub(crate) fn run_inspect(
    config_path: Option<&Path>,
    overrides: ConfigOverrides,
    npc: Option<String>,
    prop: Option<String>,
    quiet: bool,
) -> Result<(), CliError> {
    let config = resolve_config(config_path, overrides)?;
    let ctx = load_dump(&config, quiet)?;
    let graph = ctx.graph();

    if npc.is_none() && prop.is_none() {
        list_npcs(graph);
        return Ok(());
    }

    if let Some(name) = npc {
        let id = graph
            .find_npc(&name)
            .ok_or_else(|| CliError::not_found(format!("NPC '{name}'")))?;
        let found = graph.npc(id);
        crate::log_blank();
        log::info!(
            "{} {}",
            found.name.if_supports_color(Stdout, |t| t.bold()),
            format!("(id {}, gift id {})", found.id, found.gift_id)
                .if_supports_color(Stdout, |t| t.dimmed()),
        );
        if let Some(birthday) = &found.birthday {
            log::info!("Birthday: {birthday}");
        }
        for line in graph.npc_favor_info(id).lines() {
            log::info!("{line}");
        }
    }

    if let Some(name) = prop {
        let id = graph
            .find_prop(&name)
            .ok_or_else(|| CliError::not_found(format!("prop '{name}'")))?;
        let found = graph.prop(id);
        crate::log_blank();
        log::info!(
            "{} {}",
            found.name.if_supports_color(Stdout, |t| t.bold()),
            format!(
                "(id {}, {}, universality {})",
                found.id, found.prop_type, found.universality
            )
            .if_supports_color(Stdout, |t| t.dimmed()),
        );
        for line in graph.prop_favor_info(id).lines() {
            log::info!("{line}");
        }
    }

    Ok(())
}

fn list_npcs(graph: &GiftGraph) {
    crate::log_blank();
    log::info!(
        "{}",
        format!("{} NPCs", graph.npcs().len()).if_supports_color(Stdout, |t| t.bold()),
    );
    log::info!(
        "  {:<24} {:>5} {:>5} {:>7} {:>5}",
        "Name",
        "Love",
        "Like",
        "Dislike",
        "Hate"
    );
    for npc in graph.npcs() {
        let count = |level| npc.gifts_at_level(graph.gifts(), level).len();
        log::info!(
            "  {} {:>5} {:>5} {:>7} {:>5}",
            format!("{:<24}", npc.name).if_supports_color(Stdout, |t| t.cyan()),
            count(GiftLevel::Love),
            count(GiftLevel::Like),
            count(GiftLevel::Dislike),
            count(GiftLevel::Hate),
        );
    }
}
