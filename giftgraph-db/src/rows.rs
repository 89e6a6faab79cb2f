//! Typed row readers for each source table.
//!
//! Every reader first checks that the columns it needs exist, then decodes
//! rows one by one. Values are rendered to text whatever their storage class;
//! NULL in a required column is a hard error naming the table, column and row.
//! Columns only some rows need are decoded as `Option` and checked by the
//! loader once it knows whether the row is kept.

use std::collections::HashSet;

use giftgraph_catalog::{ClassificationSets, GiftRow, LevelSpec, NpcRow, PropRow, StringRow};
use rusqlite::types::Value;
use rusqlite::{Connection, Row, Statement};
use thiserror::Error;

use crate::schema::{Table, table_columns};

#[derive(Debug, Error)]
pub enum SourceError {
    #[error("SQLite error: {0}")]
    Sqlite(#[from] rusqlite::Error),
    #[error("Game dump not found: {0}")]
    NotFound(String),
    #[error("Table '{0}' is missing from the game dump")]
    MissingTable(&'static str),
    #[error("Column '{column}' is missing from table '{table}'")]
    MissingColumn {
        table: &'static str,
        column: &'static str,
    },
    #[error("{table} row {row}: required field '{column}' is NULL")]
    NullField {
        table: &'static str,
        column: &'static str,
        row: String,
    },
}

// ── Decoding Helpers ────────────────────────────────────────────────────────

/// Prepare `SELECT <columns> FROM <table>` after checking the columns exist.
fn prepare_select<'c>(
    conn: &'c Connection,
    table: Table,
    columns: &[&'static str],
) -> Result<Statement<'c>, SourceError> {
    let present = table_columns(conn, table)?;
    for &column in columns {
        if !present.iter().any(|c| c == column) {
            return Err(SourceError::MissingColumn {
                table: table.name(),
                column,
            });
        }
    }

    let select = columns
        .iter()
        .map(|c| format!("\"{c}\""))
        .collect::<Vec<_>>()
        .join(", ");
    let stmt = conn.prepare(&format!("SELECT {select} FROM \"{}\"", table.name()))?;
    Ok(stmt)
}

/// Column value as text, or `None` for NULL.
fn text_at(row: &Row<'_>, idx: usize) -> Result<Option<String>, SourceError> {
    let value: Value = row.get(idx)?;
    Ok(match value {
        Value::Null => None,
        Value::Integer(i) => Some(i.to_string()),
        Value::Real(f) => Some(f.to_string()),
        Value::Text(s) => Some(s),
        Value::Blob(b) => Some(String::from_utf8_lossy(&b).into_owned()),
    })
}

/// Reads the columns of one row, labelling errors with the row's key.
struct RowReader<'a, 'r> {
    table: Table,
    columns: &'a [&'static str],
    row: &'a Row<'r>,
    key: String,
}

impl<'a, 'r> RowReader<'a, 'r> {
    /// Start reading a row whose column 0 is its id. `ordinal` labels rows
    /// whose id itself is NULL.
    fn new(
        table: Table,
        columns: &'a [&'static str],
        row: &'a Row<'r>,
        ordinal: usize,
    ) -> Result<(Self, String), SourceError> {
        let id = text_at(row, 0)?.ok_or_else(|| SourceError::NullField {
            table: table.name(),
            column: columns[0],
            row: format!("#{ordinal}"),
        })?;
        let reader = Self {
            table,
            columns,
            row,
            key: id.clone(),
        };
        Ok((reader, id))
    }

    fn required(&self, idx: usize) -> Result<String, SourceError> {
        text_at(self.row, idx)?.ok_or_else(|| SourceError::NullField {
            table: self.table.name(),
            column: self.columns[idx],
            row: self.key.clone(),
        })
    }

    fn optional(&self, idx: usize) -> Result<Option<String>, SourceError> {
        text_at(self.row, idx)
    }

    /// NULL reads as an empty string.
    fn or_empty(&self, idx: usize) -> Result<String, SourceError> {
        Ok(text_at(self.row, idx)?.unwrap_or_default())
    }
}

// ── Table Readers ───────────────────────────────────────────────────────────

/// Read `Translation_hint`. A NULL `English` value reads as empty text.
pub fn read_strings(conn: &Connection) -> Result<Vec<StringRow>, SourceError> {
    const COLUMNS: &[&str] = &["ID", "English"];
    let mut stmt = prepare_select(conn, Table::Strings, COLUMNS)?;
    let mut rows = stmt.query([])?;

    let mut out = Vec::new();
    while let Some(row) = rows.next()? {
        let (r, id) = RowReader::new(Table::Strings, COLUMNS, row, out.len())?;
        out.push(StringRow {
            english: r.or_empty(1)?,
            id,
        });
    }
    Ok(out)
}

/// Read `NpcRepository`. `GiftID` may be NULL.
pub fn read_npcs(conn: &Connection) -> Result<Vec<NpcRow>, SourceError> {
    const COLUMNS: &[&str] = &["Id", "Name", "Birthday", "GiftID", "Interact"];
    let mut stmt = prepare_select(conn, Table::Npcs, COLUMNS)?;
    let mut rows = stmt.query([])?;

    let mut out = Vec::new();
    while let Some(row) = rows.next()? {
        let (r, id) = RowReader::new(Table::Npcs, COLUMNS, row, out.len())?;
        out.push(NpcRow {
            name: r.required(1)?,
            birthday: r.optional(2)?,
            gift_id: r.optional(3)?,
            interact: r.optional(4)?,
            id,
        });
    }
    Ok(out)
}

/// Read `Props_total_table`. Everything but the id may be NULL.
pub fn read_props(conn: &Connection) -> Result<Vec<PropRow>, SourceError> {
    const COLUMNS: &[&str] = &[
        "Props_Id",
        "Props_Name",
        "Gift_TagID",
        "Tag_List",
        "IsGift",
        "Icon_Path",
        "Item_Type",
    ];
    let mut stmt = prepare_select(conn, Table::Props, COLUMNS)?;
    let mut rows = stmt.query([])?;

    let mut out = Vec::new();
    while let Some(row) = rows.next()? {
        let (r, id) = RowReader::new(Table::Props, COLUMNS, row, out.len())?;
        out.push(PropRow {
            name: r.optional(1)?,
            gift_tag_ids: r.optional(2)?,
            tag_list: r.optional(3)?,
            is_gift: r.optional(4)?,
            icon_path: r.optional(5)?,
            item_type: r.optional(6)?,
            id,
        });
    }
    Ok(out)
}

/// Read `Gift`. NULL level fields read as empty (the level has no entries).
pub fn read_gifts(conn: &Connection) -> Result<Vec<GiftRow>, SourceError> {
    const COLUMNS: &[&str] = &[
        "Gift_ID",
        "TagID_Excellent",
        "Favor_Excellent",
        "TagID_Like",
        "Favor_Like",
        "TagID_Dislike",
        "Favor_Dislike",
        "TagID_Hate",
        "Favor_Hate",
    ];
    let mut stmt = prepare_select(conn, Table::Gifts, COLUMNS)?;
    let mut rows = stmt.query([])?;

    let mut out = Vec::new();
    while let Some(row) = rows.next()? {
        let (r, gift_id) = RowReader::new(Table::Gifts, COLUMNS, row, out.len())?;
        let level = |tags: usize| -> Result<LevelSpec, SourceError> {
            Ok(LevelSpec {
                tag_ids: r.or_empty(tags)?,
                favor: r.or_empty(tags + 1)?,
            })
        };
        out.push(GiftRow {
            love: level(1)?,
            like: level(3)?,
            dislike: level(5)?,
            hate: level(7)?,
            gift_id,
        });
    }
    Ok(out)
}

/// Read one id column of an auxiliary table into a set, skipping NULLs.
fn read_id_set(
    conn: &Connection,
    table: Table,
    column: &'static str,
) -> Result<HashSet<String>, SourceError> {
    let mut stmt = prepare_select(conn, table, &[column])?;
    let mut rows = stmt.query([])?;

    let mut ids = HashSet::new();
    let mut nulls = 0usize;
    while let Some(row) = rows.next()? {
        match text_at(row, 0)? {
            Some(id) => {
                ids.insert(id);
            }
            None => nulls += 1,
        }
    }
    if nulls > 0 {
        log::debug!("{}: skipped {} NULL {} values", table.name(), nulls, column);
    }
    Ok(ids)
}

/// Read the four auxiliary tables that drive prop classification.
pub fn read_classification_sets(conn: &Connection) -> Result<ClassificationSets, SourceError> {
    Ok(ClassificationSets {
        cookable_pc: read_id_set(conn, Table::CookBook, "Food")?,
        cookable_ack: read_id_set(conn, Table::AckCookBook, "Food")?,
        relic: read_id_set(conn, Table::Relics, "Item_Id")?,
        craftable: read_id_set(conn, Table::Crafts, "Item_Id")?,
    })
}
