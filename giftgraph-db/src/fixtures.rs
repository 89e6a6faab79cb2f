//! Row insertion helpers for building test dumps.
//!
//! Only compiled for tests or with the `fixtures` feature; the extraction
//! pipeline itself never writes to a dump.

use giftgraph_catalog::{GiftRow, NpcRow, PropRow};
use rusqlite::{Connection, params};

use crate::rows::SourceError;

pub fn insert_string(conn: &Connection, id: &str, english: &str) -> Result<(), SourceError> {
    conn.execute(
        "INSERT INTO Translation_hint (ID, English) VALUES (?1, ?2)",
        params![id, english],
    )?;
    Ok(())
}

pub fn insert_npc(conn: &Connection, npc: &NpcRow) -> Result<(), SourceError> {
    conn.execute(
        "INSERT INTO NpcRepository (Id, Name, Birthday, GiftID, Interact)
         VALUES (?1, ?2, ?3, ?4, ?5)",
        params![npc.id, npc.name, npc.birthday, npc.gift_id, npc.interact],
    )?;
    Ok(())
}

pub fn insert_prop(conn: &Connection, prop: &PropRow) -> Result<(), SourceError> {
    conn.execute(
        "INSERT INTO Props_total_table
             (Props_Id, Props_Name, Gift_TagID, Tag_List, IsGift, Icon_Path, Item_Type)
         VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7)",
        params![
            prop.id,
            prop.name,
            prop.gift_tag_ids,
            prop.tag_list,
            prop.is_gift,
            prop.icon_path,
            prop.item_type,
        ],
    )?;
    Ok(())
}

pub fn insert_gift(conn: &Connection, gift: &GiftRow) -> Result<(), SourceError> {
    conn.execute(
        "INSERT INTO Gift
             (Gift_ID, TagID_Excellent, Favor_Excellent, TagID_Like, Favor_Like,
              TagID_Dislike, Favor_Dislike, TagID_Hate, Favor_Hate)
         VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9)",
        params![
            gift.gift_id,
            gift.love.tag_ids,
            gift.love.favor,
            gift.like.tag_ids,
            gift.like.favor,
            gift.dislike.tag_ids,
            gift.dislike.favor,
            gift.hate.tag_ids,
            gift.hate.favor,
        ],
    )?;
    Ok(())
}

/// Mark a prop as cookable at a cooking station (`Cook_Book`).
pub fn insert_cookable_pc(conn: &Connection, prop_id: &str) -> Result<(), SourceError> {
    conn.execute("INSERT INTO Cook_Book (Food) VALUES (?1)", params![prop_id])?;
    Ok(())
}

/// Mark a prop as a recipe-list dish (`Cook_AckList`).
pub fn insert_cookable_ack(conn: &Connection, prop_id: &str) -> Result<(), SourceError> {
    conn.execute("INSERT INTO Cook_AckList (Food) VALUES (?1)", params![prop_id])?;
    Ok(())
}

/// Mark a prop as a relic (`Repair_table`).
pub fn insert_relic(conn: &Connection, prop_id: &str) -> Result<(), SourceError> {
    conn.execute("INSERT INTO Repair_table (Item_Id) VALUES (?1)", params![prop_id])?;
    Ok(())
}

/// Mark a prop as craftable (`Synthesis_table`).
pub fn insert_craftable(conn: &Connection, prop_id: &str) -> Result<(), SourceError> {
    conn.execute("INSERT INTO Synthesis_table (Item_Id) VALUES (?1)", params![prop_id])?;
    Ok(())
}
