//! Gift graph data model: NPCs, props, and the gift edges between them.
//!
//! This crate holds the in-memory object graph built from a game data dump
//! without any database or filesystem dependencies. `giftgraph-db` produces
//! the typed rows defined here, `giftgraph-import` turns them into a
//! [`GiftGraph`], and `giftgraph-export` flattens the graph back out.

pub mod classify;
pub mod favor;
pub mod graph;
pub mod slug;
pub mod strings;
pub mod types;

pub use classify::{ClassificationSets, NpcFilter, split_ids, universality_from_tags};
pub use favor::{FavorException, FavorSpec, ParseError};
pub use graph::{Gift, GiftEdges, GiftGraph, GiftId, HasGiftEdges, Npc, NpcId, Prop, PropId};
pub use slug::slugify;
pub use strings::StringTable;
pub use types::*;
