use giftgraph_db::DataSource;

use crate::context::{ExtractionContext, LoadOptions};
use crate::error::LoadError;
use crate::gifts::load_gifts;
use crate::npcs::load_npcs;
use crate::progress::LoadProgress;
use crate::props::load_props;
use crate::strings::load_strings;

/// Run all four stages in order and return the completed context.
pub fn run_pipeline(
    source: &dyn DataSource,
    options: LoadOptions,
    progress: Option<&dyn LoadProgress>,
) -> Result<ExtractionContext, LoadError> {
    let mut ctx = ExtractionContext::new(options);
    load_strings(&mut ctx, source, progress)?;
    load_props(&mut ctx, source, progress)?;
    load_npcs(&mut ctx, source, progress)?;
    load_gifts(&mut ctx, source, progress)?;
    Ok(ctx)
}
