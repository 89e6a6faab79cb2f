//! Core value types and the typed source rows they are decoded from.
//!
//! Enum variants serialize to the upper-case names the presentation layer
//! keys its CSS classes on (`COOKABLE_PC`, `LOVE`, ...).

use std::fmt;

use serde::{Deserialize, Serialize};

// ── Prop Classification ─────────────────────────────────────────────────────

/// How a prop is obtained, derived from the auxiliary eligibility tables.
///
/// Variants are declared in precedence order: when a prop id appears in
/// several tables the earliest variant wins.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum PropType {
    /// Cooked by the player at a cooking station.
    CookablePc,
    /// Unlocked through the recipe (ACK) list.
    CookableAck,
    /// Assembled from relic parts.
    Relic,
    /// Produced at a crafting station.
    Craftable,
    Other,
}

impl PropType {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::CookablePc => "COOKABLE_PC",
            Self::CookableAck => "COOKABLE_ACK",
            Self::Relic => "RELIC",
            Self::Craftable => "CRAFTABLE",
            Self::Other => "OTHER",
        }
    }
}

impl fmt::Display for PropType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A prop-level preference shared by every NPC.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Universality {
    #[default]
    None,
    Love,
    Like,
    Dislike,
    Hate,
}

impl Universality {
    /// Reserved gift-tag values marking universal affinity, in priority order.
    pub const SENTINELS: [(&'static str, Universality); 4] = [
        ("1", Universality::Love),
        ("2", Universality::Like),
        ("3", Universality::Dislike),
        ("4", Universality::Hate),
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::None => "NONE",
            Self::Love => "LOVE",
            Self::Like => "LIKE",
            Self::Dislike => "DISLIKE",
            Self::Hate => "HATE",
        }
    }
}

impl fmt::Display for Universality {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ── Gift Level ──────────────────────────────────────────────────────────────

/// The four affection levels a gift row can assign.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum GiftLevel {
    Love,
    Like,
    Dislike,
    Hate,
}

impl GiftLevel {
    /// All levels, strongest first.
    pub const ALL: [GiftLevel; 4] = [
        GiftLevel::Love,
        GiftLevel::Like,
        GiftLevel::Dislike,
        GiftLevel::Hate,
    ];

    /// Ranking score. The gap between Like and Dislike is intentional.
    pub fn weight(self) -> u8 {
        match self {
            Self::Love => 5,
            Self::Like => 4,
            Self::Dislike => 2,
            Self::Hate => 1,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Love => "LOVE",
            Self::Like => "LIKE",
            Self::Dislike => "DISLIKE",
            Self::Hate => "HATE",
        }
    }
}

impl fmt::Display for GiftLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ── Favor ───────────────────────────────────────────────────────────────────

/// Signed favor gained (or lost) when a gift is given.
///
/// Displays with an explicit `+` for positive values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Favor(pub i32);

impl fmt::Display for Favor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.0 > 0 {
            write!(f, "+{}", self.0)
        } else {
            write!(f, "{}", self.0)
        }
    }
}

// ── Source Rows ─────────────────────────────────────────────────────────────

/// A `Translation_hint` row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StringRow {
    pub id: String,
    pub english: String,
}

/// An `NpcRepository` row. `name` is a string-table id, not display text.
///
/// `gift_id` may be NULL on NPCs that never receive gifts; it is only
/// required once the NPC passes the eligibility filter.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NpcRow {
    pub id: String,
    pub name: String,
    pub birthday: Option<String>,
    pub gift_id: Option<String>,
    /// Raw interaction capability list, e.g. `"Talk,SendGift"`.
    pub interact: Option<String>,
}

impl NpcRow {
    /// First column an eligible NPC needs that is NULL in this row.
    pub fn missing_column(&self) -> Option<&'static str> {
        self.gift_id.is_none().then_some("GiftID")
    }
}

/// A `Props_total_table` row. `name` is a string-table id.
///
/// Only giftable rows must carry a name and both tag lists.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PropRow {
    pub id: String,
    pub name: Option<String>,
    /// Comma-separated gift-tag ids (candidate selection namespace).
    pub gift_tag_ids: Option<String>,
    /// Comma-separated tag-list ids (favor override namespace).
    pub tag_list: Option<String>,
    /// `"1"` marks a giftable prop. NULL reads as not giftable.
    pub is_gift: Option<String>,
    pub icon_path: Option<String>,
    pub item_type: Option<String>,
}

impl PropRow {
    pub fn is_giftable(&self) -> bool {
        self.is_gift.as_deref().is_some_and(|v| v.trim() == "1")
    }

    /// First column a giftable prop needs that is NULL in this row.
    pub fn missing_column(&self) -> Option<&'static str> {
        if self.name.is_none() {
            Some("Props_Name")
        } else if self.gift_tag_ids.is_none() {
            Some("Gift_TagID")
        } else if self.tag_list.is_none() {
            Some("Tag_List")
        } else {
            None
        }
    }
}

/// Tag-id list and favor spec for one affection level of a gift row.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LevelSpec {
    /// Semicolon-separated gift-tag ids.
    pub tag_ids: String,
    /// `"<default>|<tag_list_id>_<favor>$..."`
    pub favor: String,
}

/// A `Gift` row: the preferences of every NPC sharing `gift_id`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GiftRow {
    pub gift_id: String,
    pub love: LevelSpec,
    pub like: LevelSpec,
    pub dislike: LevelSpec,
    pub hate: LevelSpec,
}

impl GiftRow {
    /// Level specs in processing order (Love, Like, Dislike, Hate).
    pub fn levels(&self) -> [(GiftLevel, &LevelSpec); 4] {
        [
            (GiftLevel::Love, &self.love),
            (GiftLevel::Like, &self.like),
            (GiftLevel::Dislike, &self.dislike),
            (GiftLevel::Hate, &self.hate),
        ]
    }
}
