//! State threaded through the loader stages.

use std::fmt;

use giftgraph_catalog::{GiftGraph, NpcFilter, StringTable};
use serde::{Deserialize, Serialize};

use crate::error::LoadError;

/// What to do when one gift-row level reaches the same prop through several
/// gift-tag ids.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DuplicatePolicy {
    /// Keep the first edge only.
    #[default]
    Suppress,
    /// Create one edge per tag id that reaches the prop.
    Keep,
}

/// Knobs for a loader run.
#[derive(Debug, Clone, Default)]
pub struct LoadOptions {
    pub npc_filter: NpcFilter,
    pub duplicates: DuplicatePolicy,
}

/// Loader stages, in the order they must run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Default)]
pub enum Stage {
    /// Nothing loaded yet.
    #[default]
    Empty,
    Strings,
    Props,
    Npcs,
    Gifts,
}

impl Stage {
    /// The stage that must have completed before this one runs.
    pub fn prerequisite(self) -> Stage {
        match self {
            Self::Empty | Self::Strings => Self::Empty,
            Self::Props => Self::Strings,
            Self::Npcs => Self::Props,
            Self::Gifts => Self::Npcs,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Empty => "empty",
            Self::Strings => "strings",
            Self::Props => "props",
            Self::Npcs => "npcs",
            Self::Gifts => "gifts",
        }
    }
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Counters collected while loading.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LoadStats {
    pub strings: u64,
    pub props_loaded: u64,
    pub props_not_giftable: u64,
    pub props_duplicate: u64,
    pub props_unnamed: u64,
    pub npcs_loaded: u64,
    pub npcs_excluded: u64,
    pub npcs_unnamed: u64,
    /// Gift rows whose gift id matches no loaded NPC.
    pub gift_rows_skipped: u64,
    /// Gift-tag ids referenced by a gift row that no prop carries.
    pub unknown_gift_tags: u64,
    pub duplicate_gifts_suppressed: u64,
    pub gifts_created: u64,
}

/// Everything one extraction run knows: the string table, the graph, and
/// bookkeeping. Stages take it by `&mut` and refuse to run out of order.
#[derive(Debug, Default)]
pub struct ExtractionContext {
    pub(crate) options: LoadOptions,
    pub(crate) strings: StringTable,
    pub(crate) graph: GiftGraph,
    pub(crate) stats: LoadStats,
    pub(crate) stage: Stage,
}

impl ExtractionContext {
    pub fn new(options: LoadOptions) -> Self {
        Self {
            options,
            ..Self::default()
        }
    }

    pub fn options(&self) -> &LoadOptions {
        &self.options
    }

    pub fn strings(&self) -> &StringTable {
        &self.strings
    }

    pub fn graph(&self) -> &GiftGraph {
        &self.graph
    }

    pub fn stats(&self) -> &LoadStats {
        &self.stats
    }

    /// The last stage that completed.
    pub fn stage(&self) -> Stage {
        self.stage
    }

    pub fn is_complete(&self) -> bool {
        self.stage == Stage::Gifts
    }

    /// Fail unless `stage`'s prerequisite is exactly the last completed stage.
    pub(crate) fn begin(&self, stage: Stage) -> Result<(), LoadError> {
        let expected = stage.prerequisite();
        if self.stage != expected {
            return Err(LoadError::StageOrder {
                stage,
                expected,
                found: self.stage,
            });
        }
        Ok(())
    }

    pub(crate) fn finish(&mut self, stage: Stage) {
        self.stage = stage;
    }
}
