//! Load a game data dump into a gift graph.
//!
//! This crate owns the relational-to-graph transformation. Four stages run
//! strictly in order, each reading the output of the ones before it through
//! an [`ExtractionContext`]:
//!
//! 1. [`load_strings`] fills the string table
//! 2. [`load_props`] classifies and dedupes giftable props
//! 3. [`load_npcs`] keeps NPCs that can receive gifts
//! 4. [`load_gifts`] expands gift rows into weighted edges via tag indices

pub mod context;
pub mod error;
pub mod gifts;
pub mod npcs;
pub mod pipeline;
pub mod progress;
pub mod props;
pub mod strings;

pub use context::{DuplicatePolicy, ExtractionContext, LoadOptions, LoadStats, Stage};
pub use error::LoadError;
pub use gifts::{GiftTagIndex, LevelResolution, load_gifts, resolve_level};
pub use npcs::load_npcs;
pub use pipeline::run_pipeline;
pub use progress::{LoadProgress, LogProgress, SilentProgress};
pub use props::load_props;
pub use strings::load_strings;
