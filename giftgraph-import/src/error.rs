use giftgraph_catalog::{GiftLevel, ParseError};
use giftgraph_db::SourceError;
use thiserror::Error;

use crate::context::Stage;

/// Fatal loader errors. Referential gaps are not errors; they are counted in
/// [`LoadStats`](crate::LoadStats) and skipped.
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("Source error: {0}")]
    Source(#[from] SourceError),
    #[error("{table} row {row}: '{column}' is NULL on a row that is loaded")]
    MalformedRow {
        table: &'static str,
        column: &'static str,
        row: String,
    },
    #[error("Gift row '{gift_id}', {level} favor spec: {source}")]
    FavorSpec {
        gift_id: String,
        level: GiftLevel,
        #[source]
        source: ParseError,
    },
    #[error("Cannot run the {stage} stage: expected {expected} to be the last completed stage, found {found}")]
    StageOrder {
        stage: Stage,
        expected: Stage,
        found: Stage,
    },
}
