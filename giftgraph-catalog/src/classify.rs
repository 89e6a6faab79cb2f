//! Pure classification rules for props and NPCs.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use crate::types::{PropRow, PropType, Universality};

/// Split a delimited id list, trimming entries and dropping empty ones.
pub fn split_ids(raw: &str, sep: char) -> Vec<String> {
    raw.split(sep)
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .collect()
}

/// Universal affinity from a prop's gift tags.
///
/// Sentinels are checked in fixed priority (Love, Like, Dislike, Hate)
/// regardless of where they appear in the list.
pub fn universality_from_tags<S: AsRef<str>>(gift_tag_ids: &[S]) -> Universality {
    Universality::SENTINELS
        .iter()
        .find(|(sentinel, _)| gift_tag_ids.iter().any(|t| t.as_ref() == *sentinel))
        .map(|(_, u)| *u)
        .unwrap_or(Universality::None)
}

// ── Prop Types ──────────────────────────────────────────────────────────────

/// Prop ids listed in each auxiliary eligibility table.
#[derive(Debug, Clone, Default)]
pub struct ClassificationSets {
    /// `Cook_Book.Food`
    pub cookable_pc: HashSet<String>,
    /// `Cook_AckList.Food`
    pub cookable_ack: HashSet<String>,
    /// `Repair_table.Item_Id`
    pub relic: HashSet<String>,
    /// `Synthesis_table.Item_Id`
    pub craftable: HashSet<String>,
}

impl ClassificationSets {
    /// Classify a prop id. First match in precedence order wins.
    pub fn classify(&self, prop_id: &str) -> PropType {
        if self.cookable_pc.contains(prop_id) {
            PropType::CookablePc
        } else if self.cookable_ack.contains(prop_id) {
            PropType::CookableAck
        } else if self.relic.contains(prop_id) {
            PropType::Relic
        } else if self.craftable.contains(prop_id) {
            PropType::Craftable
        } else {
            PropType::Other
        }
    }

    /// Type and universal affinity of a raw prop row.
    pub fn classify_row(&self, row: &PropRow) -> (PropType, Universality) {
        let tags = split_ids(row.gift_tag_ids.as_deref().unwrap_or_default(), ',');
        (self.classify(&row.id), universality_from_tags(&tags))
    }
}

// ── NPC Eligibility ─────────────────────────────────────────────────────────

/// Which NPCs can receive gifts.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NpcFilter {
    /// Display names that never receive gifts.
    pub excluded: Vec<String>,
    /// Substring of the interaction field that marks gift-giving.
    pub marker: String,
}

impl Default for NpcFilter {
    fn default() -> Self {
        Self {
            excluded: vec![
                "Yoyo".to_string(),
                "First Child".to_string(),
                "Second Child".to_string(),
            ],
            marker: "SendGift".to_string(),
        }
    }
}

impl NpcFilter {
    pub fn is_eligible(&self, display_name: &str, interact: Option<&str>) -> bool {
        !self.excluded.iter().any(|n| n == display_name)
            && interact.is_some_and(|i| i.contains(self.marker.as_str()))
    }
}
