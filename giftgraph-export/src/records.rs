//! Flat, serializable views of the gift graph.

use giftgraph_catalog::{
    GiftGraph, GiftLevel, HasGiftEdges, Npc, Prop, PropType, Universality,
};
use serde::{Deserialize, Serialize};

/// One entry of `props.json`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PropRecord {
    pub id: String,
    pub name: String,
    /// Image stem under the items image directory.
    pub icon_name: String,
    #[serde(rename = "type")]
    pub prop_type: PropType,
    pub universality: Universality,
}

impl From<&Prop> for PropRecord {
    fn from(prop: &Prop) -> Self {
        Self {
            id: prop.id.clone(),
            name: prop.name.clone(),
            icon_name: prop.icon_name(),
            prop_type: prop.prop_type,
            universality: prop.universality,
        }
    }
}

/// One entry of `npcs.json`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NpcRecord {
    pub id: String,
    pub name: String,
    pub icon: String,
    pub birthday: Option<String>,
}

impl From<&Npc> for NpcRecord {
    fn from(npc: &Npc) -> Self {
        Self {
            id: npc.id.clone(),
            name: npc.name.clone(),
            icon: npc.icon_slug(),
            birthday: npc.birthday.clone(),
        }
    }
}

/// One entry of `gifts.json`: a gift edge with both endpoints denormalized.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GiftRecord {
    pub npc: String,
    pub npc_name: String,
    pub prop: String,
    pub prop_name: String,
    pub prop_icon: String,
    pub prop_type: PropType,
    pub prop_universality: Universality,
    pub gift_level: GiftLevel,
    /// Signed favor, e.g. `"+12"`.
    pub favor: String,
}

/// `metadata.json`: describes the dump the data came from.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Metadata {
    pub game_version: String,
    pub platform: String,
    pub dump_date: String,
}

/// The four documents of one export.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportDocuments {
    pub props: Vec<PropRecord>,
    pub npcs: Vec<NpcRecord>,
    pub gifts: Vec<GiftRecord>,
    pub metadata: Metadata,
}

impl ExportDocuments {
    /// Flatten `graph`. Gifts are grouped by NPC (in graph order), then by
    /// level from Love to Hate, each level ranked by favor.
    pub fn build(graph: &GiftGraph, metadata: Metadata) -> Self {
        let props = graph.props().iter().map(PropRecord::from).collect();
        let npcs = graph.npcs().iter().map(NpcRecord::from).collect();

        let mut gifts = Vec::with_capacity(graph.gifts().len());
        for npc in graph.npcs() {
            for level in GiftLevel::ALL {
                for gift in npc.gifts_at_level(graph.gifts(), level) {
                    let prop = graph.prop(gift.prop);
                    gifts.push(GiftRecord {
                        npc: npc.id.clone(),
                        npc_name: npc.name.clone(),
                        prop: prop.id.clone(),
                        prop_name: prop.name.clone(),
                        prop_icon: prop.icon_name(),
                        prop_type: prop.prop_type,
                        prop_universality: prop.universality,
                        gift_level: gift.level,
                        favor: gift.favor.to_string(),
                    });
                }
            }
        }

        Self {
            props,
            npcs,
            gifts,
            metadata,
        }
    }
}
