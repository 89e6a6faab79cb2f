use std::collections::HashSet;

use giftgraph_catalog::Prop;
use giftgraph_db::{DataSource, Table};

use crate::context::{ExtractionContext, Stage};
use crate::error::LoadError;
use crate::progress::{LoadProgress, LogProgress};

/// Stage 2: load giftable props, classified and deduplicated by id.
///
/// Props are added to the graph sorted by display name. A giftable row with a
/// NULL name or tag list is fatal; non-giftable rows are never inspected.
pub fn load_props(
    ctx: &mut ExtractionContext,
    source: &dyn DataSource,
    progress: Option<&dyn LoadProgress>,
) -> Result<(), LoadError> {
    ctx.begin(Stage::Props)?;
    let progress = progress.unwrap_or(&LogProgress);
    progress.on_stage(Stage::Props);

    let sets = source.classification_sets()?;
    let rows = source.props()?;
    let total = rows.len();

    let mut seen = HashSet::new();
    let mut props = Vec::new();
    for (i, row) in rows.into_iter().enumerate() {
        progress.on_row(i + 1, total);

        if !row.is_giftable() {
            ctx.stats.props_not_giftable += 1;
            continue;
        }
        if !seen.insert(row.id.clone()) {
            log::warn!("Duplicate prop id {}; keeping the first row", row.id);
            ctx.stats.props_duplicate += 1;
            continue;
        }
        if let Some(column) = row.missing_column() {
            return Err(LoadError::MalformedRow {
                table: Table::Props.name(),
                column,
                row: row.id,
            });
        }
        let name_id = row.name.as_deref().unwrap_or_default();
        let Some(name) = ctx.strings.get(name_id).map(str::to_string) else {
            log::warn!("Prop {} has no string for name id {}; skipping", row.id, name_id);
            ctx.stats.props_unnamed += 1;
            continue;
        };

        props.push(Prop::from_row(row, name, &sets));
    }

    props.sort_by(|a, b| a.name.cmp(&b.name));
    ctx.stats.props_loaded = props.len() as u64;
    for prop in props {
        ctx.graph.add_prop(prop);
    }

    progress.on_complete(
        Stage::Props,
        &format!("{} props loaded.", ctx.stats.props_loaded),
    );
    ctx.finish(Stage::Props);
    Ok(())
}
