//! Source table layout and connection setup.

use std::path::Path;

use rusqlite::{Connection, OpenFlags};

use crate::rows::SourceError;

/// The eight tables read from the game dump.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Table {
    Strings,
    Npcs,
    Props,
    Gifts,
    CookBook,
    AckCookBook,
    Relics,
    Crafts,
}

impl Table {
    pub const ALL: [Table; 8] = [
        Table::Strings,
        Table::Npcs,
        Table::Props,
        Table::Gifts,
        Table::CookBook,
        Table::AckCookBook,
        Table::Relics,
        Table::Crafts,
    ];

    /// Table name as it appears in the dump.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Strings => "Translation_hint",
            Self::Npcs => "NpcRepository",
            Self::Props => "Props_total_table",
            Self::Gifts => "Gift",
            Self::CookBook => "Cook_Book",
            Self::AckCookBook => "Cook_AckList",
            Self::Relics => "Repair_table",
            Self::Crafts => "Synthesis_table",
        }
    }
}

/// Open a game dump read-only and verify every source table is present.
pub fn open_dump(path: &Path) -> Result<Connection, SourceError> {
    if !path.is_file() {
        return Err(SourceError::NotFound(path.display().to_string()));
    }
    let conn = Connection::open_with_flags(
        path,
        OpenFlags::SQLITE_OPEN_READ_ONLY | OpenFlags::SQLITE_OPEN_NO_MUTEX,
    )?;
    check_tables(&conn)?;
    Ok(conn)
}

/// Open an in-memory database with the source table layout. Useful for testing.
pub fn open_memory() -> Result<Connection, SourceError> {
    let conn = Connection::open_in_memory()?;
    create_source_schema(&conn)?;
    Ok(conn)
}

/// Create the source tables if they don't exist.
pub fn create_source_schema(conn: &Connection) -> Result<(), SourceError> {
    conn.execute_batch(SOURCE_SCHEMA_SQL)?;
    Ok(())
}

/// Fail with [`SourceError::MissingTable`] for the first absent source table.
pub fn check_tables(conn: &Connection) -> Result<(), SourceError> {
    for table in Table::ALL {
        let exists: bool = conn.query_row(
            "SELECT EXISTS(SELECT 1 FROM sqlite_master WHERE type='table' AND name=?1)",
            [table.name()],
            |row| row.get(0),
        )?;
        if !exists {
            return Err(SourceError::MissingTable(table.name()));
        }
    }
    Ok(())
}

/// Column names present on a table, in declaration order.
pub(crate) fn table_columns(conn: &Connection, table: Table) -> Result<Vec<String>, SourceError> {
    let mut stmt = conn.prepare(&format!("PRAGMA table_info(\"{}\")", table.name()))?;
    let names = stmt.query_map([], |row| row.get::<_, String>(1))?;
    names.collect::<Result<Vec<_>, _>>().map_err(Into::into)
}

// The real dumps mix INTEGER and TEXT ids; the fixture layout does the same
// so decoding is exercised on both.
const SOURCE_SCHEMA_SQL: &str = r#"
CREATE TABLE IF NOT EXISTS Translation_hint (
    ID TEXT PRIMARY KEY,
    English TEXT
);

CREATE TABLE IF NOT EXISTS NpcRepository (
    Id INTEGER PRIMARY KEY,
    Name TEXT,
    Birthday TEXT,
    GiftID TEXT,
    Interact TEXT
);

CREATE TABLE IF NOT EXISTS Props_total_table (
    Props_Id INTEGER PRIMARY KEY,
    Props_Name TEXT,
    Gift_TagID TEXT,
    Tag_List TEXT,
    IsGift TEXT,
    Icon_Path TEXT,
    Item_Type TEXT
);

CREATE TABLE IF NOT EXISTS Gift (
    Gift_ID TEXT PRIMARY KEY,
    TagID_Excellent TEXT,
    Favor_Excellent TEXT,
    TagID_Like TEXT,
    Favor_Like TEXT,
    TagID_Dislike TEXT,
    Favor_Dislike TEXT,
    TagID_Hate TEXT,
    Favor_Hate TEXT
);

CREATE TABLE IF NOT EXISTS Cook_Book (
    ID INTEGER PRIMARY KEY,
    Food INTEGER
);

CREATE TABLE IF NOT EXISTS Cook_AckList (
    Food INTEGER PRIMARY KEY
);

CREATE TABLE IF NOT EXISTS Repair_table (
    Repair_Id INTEGER PRIMARY KEY,
    Item_Id INTEGER
);

CREATE TABLE IF NOT EXISTS Synthesis_table (
    Repair_Id INTEGER PRIMARY KEY,
    Item_Id INTEGER
);
"#;
