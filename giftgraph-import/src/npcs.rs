use giftgraph_catalog::Npc;
use giftgraph_db::{DataSource, Table};

use crate::context::{ExtractionContext, Stage};
use crate::error::LoadError;
use crate::progress::{LoadProgress, LogProgress};

/// Stage 3: load the NPCs that can receive gifts.
///
/// An NPC is kept when its display name is not excluded and its interaction
/// field carries the gift marker. Kept NPCs are sorted by display name. A
/// kept NPC without a gift id is fatal.
pub fn load_npcs(
    ctx: &mut ExtractionContext,
    source: &dyn DataSource,
    progress: Option<&dyn LoadProgress>,
) -> Result<(), LoadError> {
    ctx.begin(Stage::Npcs)?;
    let progress = progress.unwrap_or(&LogProgress);
    progress.on_stage(Stage::Npcs);

    let rows = source.npcs()?;
    let total = rows.len();

    let mut npcs = Vec::new();
    for (i, row) in rows.into_iter().enumerate() {
        progress.on_row(i + 1, total);

        let Some(name) = ctx.strings.get(&row.name).map(str::to_string) else {
            log::warn!(
                "NPC {} has no string for name id {}; skipping",
                row.id,
                row.name
            );
            ctx.stats.npcs_unnamed += 1;
            continue;
        };
        if !ctx
            .options
            .npc_filter
            .is_eligible(&name, row.interact.as_deref())
        {
            log::debug!("Excluding NPC {} ({})", name, row.id);
            ctx.stats.npcs_excluded += 1;
            continue;
        }
        if let Some(column) = row.missing_column() {
            return Err(LoadError::MalformedRow {
                table: Table::Npcs.name(),
                column,
                row: row.id,
            });
        }

        npcs.push(Npc::from_row(row, name));
    }

    npcs.sort_by(|a, b| a.name.cmp(&b.name));
    ctx.stats.npcs_loaded = npcs.len() as u64;
    for npc in npcs {
        ctx.graph.add_npc(npc);
    }

    progress.on_complete(
        Stage::Npcs,
        &format!("{} npcs loaded.", ctx.stats.npcs_loaded),
    );
    ctx.finish(Stage::Npcs);
    Ok(())
}
