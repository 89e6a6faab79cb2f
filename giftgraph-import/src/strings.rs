use giftgraph_catalog::StringTable;
use giftgraph_db::DataSource;

use crate::context::{ExtractionContext, Stage};
use crate::error::LoadError;
use crate::progress::{LoadProgress, LogProgress};

/// Stage 1: load the localized string table.
pub fn load_strings(
    ctx: &mut ExtractionContext,
    source: &dyn DataSource,
    progress: Option<&dyn LoadProgress>,
) -> Result<(), LoadError> {
    ctx.begin(Stage::Strings)?;
    let progress = progress.unwrap_or(&LogProgress);
    progress.on_stage(Stage::Strings);

    ctx.strings = StringTable::from_rows(source.strings()?);
    ctx.stats.strings = ctx.strings.len() as u64;

    progress.on_complete(
        Stage::Strings,
        &format!("{} strings loaded.", ctx.strings.len()),
    );
    ctx.finish(Stage::Strings);
    Ok(())
}
