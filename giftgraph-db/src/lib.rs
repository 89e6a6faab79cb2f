//! SQLite access to the game data dump.
//!
//! Reads the eight source tables into the typed rows defined by
//! `giftgraph-catalog`, checking column presence up front and NULLs per row.
//! The dump is only ever opened read-only.

#[cfg(any(test, feature = "fixtures"))]
pub mod fixtures;
pub mod rows;
pub mod schema;
pub mod source;

pub use rows::{
    SourceError, read_classification_sets, read_gifts, read_npcs, read_props, read_strings,
};
pub use schema::{Table, check_tables, create_source_schema, open_dump, open_memory};
pub use source::{DataSource, SqliteSource};
