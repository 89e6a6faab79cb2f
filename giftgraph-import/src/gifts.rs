//! Stage 4: expand gift rows into weighted NPC → prop edges.
//!
//! Two tag namespaces are involved and must not be mixed up:
//!
//! - **gift-tag ids** (`Props_total_table.Gift_TagID`) select the candidate
//!   props of a level, through [`GiftTagIndex`];
//! - **tag-list ids** (`Props_total_table.Tag_List`) key the favor overrides
//!   of the level's favor spec.

use std::collections::{HashMap, HashSet};

use giftgraph_catalog::{
    Favor, FavorSpec, GiftGraph, LevelSpec, NpcId, ParseError, PropId, split_ids,
};
use giftgraph_db::DataSource;

use crate::context::{DuplicatePolicy, ExtractionContext, Stage};
use crate::error::LoadError;
use crate::progress::{LoadProgress, LogProgress};

/// Inverted index from gift-tag id to the props carrying it.
///
/// Built once per run from every loaded prop; lists follow graph order.
#[derive(Debug, Default)]
pub struct GiftTagIndex {
    by_tag: HashMap<String, Vec<PropId>>,
}

impl GiftTagIndex {
    pub fn build(graph: &GiftGraph) -> Self {
        let mut by_tag: HashMap<String, Vec<PropId>> = HashMap::new();
        for id in graph.prop_ids() {
            for tag in &graph.prop(id).gift_tag_ids {
                by_tag.entry(tag.clone()).or_default().push(id);
            }
        }
        Self { by_tag }
    }

    /// Props carrying `tag`, or `None` if no loaded prop does.
    pub fn props_for(&self, tag: &str) -> Option<&[PropId]> {
        self.by_tag.get(tag).map(Vec::as_slice)
    }
}

/// Resolved edges for one (tag-id list, favor spec) pair.
#[derive(Debug, Default, PartialEq, Eq)]
pub struct LevelResolution {
    /// Target props with their resolved favor, in expansion order.
    pub gifts: Vec<(PropId, Favor)>,
    /// Tag ids that matched no prop.
    pub unknown_tags: Vec<String>,
    /// Candidates dropped under [`DuplicatePolicy::Suppress`].
    pub duplicates: u64,
}

/// Resolve one level of a gift row.
///
/// An empty tag-id list yields nothing and its favor spec is not parsed.
/// Otherwise the favor spec must parse. Each candidate prop gets the favor of
/// the first exception matching one of its tag-list ids, or the default.
pub fn resolve_level(
    index: &GiftTagIndex,
    graph: &GiftGraph,
    spec: &LevelSpec,
    duplicates: DuplicatePolicy,
) -> Result<LevelResolution, ParseError> {
    let tag_ids = split_ids(&spec.tag_ids, ';');
    let mut resolution = LevelResolution::default();
    if tag_ids.is_empty() {
        return Ok(resolution);
    }

    let favor: FavorSpec = spec.favor.parse()?;

    let mut candidates = Vec::new();
    for tag in tag_ids {
        match index.props_for(&tag) {
            Some(props) => candidates.extend_from_slice(props),
            None => resolution.unknown_tags.push(tag),
        }
    }

    let mut seen = HashSet::new();
    for prop in candidates {
        if duplicates == DuplicatePolicy::Suppress && !seen.insert(prop) {
            resolution.duplicates += 1;
            continue;
        }
        let value = favor.resolve(&graph.prop(prop).tag_list_ids);
        resolution.gifts.push((prop, value));
    }

    Ok(resolution)
}

/// Map each gift id to the loaded NPCs that carry it.
fn npcs_by_gift_id(graph: &GiftGraph) -> HashMap<String, Vec<NpcId>> {
    let mut map: HashMap<String, Vec<NpcId>> = HashMap::new();
    for id in graph.npc_ids() {
        map.entry(graph.npc(id).gift_id.clone())
            .or_default()
            .push(id);
    }
    map
}

/// Stage 4: load gift rows and attach edges to both endpoints.
///
/// Rows for NPCs that were not loaded are skipped. A malformed favor spec on
/// a row that is processed aborts the stage.
pub fn load_gifts(
    ctx: &mut ExtractionContext,
    source: &dyn DataSource,
    progress: Option<&dyn LoadProgress>,
) -> Result<(), LoadError> {
    ctx.begin(Stage::Gifts)?;
    let progress = progress.unwrap_or(&LogProgress);
    progress.on_stage(Stage::Gifts);

    let npc_index = npcs_by_gift_id(&ctx.graph);
    let tag_index = GiftTagIndex::build(&ctx.graph);
    let policy = ctx.options.duplicates;

    let rows = source.gifts()?;
    let total = rows.len();
    for (i, row) in rows.iter().enumerate() {
        progress.on_row(i + 1, total);

        let Some(npcs) = npc_index.get(&row.gift_id) else {
            log::debug!("Skipping gift row {}: no loaded NPC", row.gift_id);
            ctx.stats.gift_rows_skipped += 1;
            continue;
        };

        for (level, spec) in row.levels() {
            let resolution = resolve_level(&tag_index, &ctx.graph, spec, policy).map_err(
                |source| LoadError::FavorSpec {
                    gift_id: row.gift_id.clone(),
                    level,
                    source,
                },
            )?;

            for tag in &resolution.unknown_tags {
                log::debug!(
                    "Gift row {} ({}): no prop carries gift tag {}",
                    row.gift_id,
                    level,
                    tag
                );
            }
            ctx.stats.unknown_gift_tags += resolution.unknown_tags.len() as u64;
            ctx.stats.duplicate_gifts_suppressed += resolution.duplicates;

            for &npc in npcs {
                for &(prop, favor) in &resolution.gifts {
                    ctx.graph.connect(npc, prop, level, favor);
                    ctx.stats.gifts_created += 1;
                }
            }
        }
    }

    progress.on_complete(
        Stage::Gifts,
        &format!("{} gifts loaded.", ctx.stats.gifts_created),
    );
    ctx.finish(Stage::Gifts);
    Ok(())
}
