//! The data source seam consumed by the loader pipeline.

use std::path::Path;

use giftgraph_catalog::{ClassificationSets, GiftRow, NpcRow, PropRow, StringRow};
use rusqlite::Connection;

use crate::rows::{self, SourceError};
use crate::schema;

/// Supplies the rows of every source table.
///
/// Each call returns the whole table; rows come back in storage order.
pub trait DataSource {
    fn strings(&self) -> Result<Vec<StringRow>, SourceError>;

    fn props(&self) -> Result<Vec<PropRow>, SourceError>;

    fn npcs(&self) -> Result<Vec<NpcRow>, SourceError>;

    fn gifts(&self) -> Result<Vec<GiftRow>, SourceError>;

    /// The four auxiliary eligibility tables.
    fn classification_sets(&self) -> Result<ClassificationSets, SourceError>;
}

/// A [`DataSource`] backed by a SQLite game dump.
pub struct SqliteSource {
    conn: Connection,
}

impl SqliteSource {
    /// Open a dump file read-only.
    pub fn open(path: &Path) -> Result<Self, SourceError> {
        let conn = schema::open_dump(path)?;
        log::debug!("Opened game dump {}", path.display());
        Ok(Self { conn })
    }

    /// Wrap an existing connection after checking the source tables exist.
    pub fn from_connection(conn: Connection) -> Result<Self, SourceError> {
        schema::check_tables(&conn)?;
        Ok(Self { conn })
    }

    pub fn connection(&self) -> &Connection {
        &self.conn
    }
}

impl DataSource for SqliteSource {
    fn strings(&self) -> Result<Vec<StringRow>, SourceError> {
        rows::read_strings(&self.conn)
    }

    fn props(&self) -> Result<Vec<PropRow>, SourceError> {
        rows::read_props(&self.conn)
    }

    fn npcs(&self) -> Result<Vec<NpcRow>, SourceError> {
        rows::read_npcs(&self.conn)
    }

    fn gifts(&self) -> Result<Vec<GiftRow>, SourceError> {
        rows::read_gifts(&self.conn)
    }

    fn classification_sets(&self) -> Result<ClassificationSets, SourceError> {
        rows::read_classification_sets(&self.conn)
    }
}
