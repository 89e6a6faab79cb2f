//! The NPC/prop object graph and its gift edges.
//!
//! Entities live in arenas owned by [`GiftGraph`] and refer to each other by
//! index. Every [`Gift`] is stored once in the graph and its id is pushed to
//! the edge lists of both endpoints by [`GiftGraph::connect`].

use crate::classify::{ClassificationSets, split_ids};
use crate::slug::slugify;
use crate::types::{Favor, GiftLevel, NpcRow, PropRow, PropType, Universality};

/// Index of an NPC inside a [`GiftGraph`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NpcId(usize);

/// Index of a prop inside a [`GiftGraph`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct PropId(usize);

/// Index of a gift edge inside a [`GiftGraph`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct GiftId(usize);

impl NpcId {
    pub fn index(self) -> usize {
        self.0
    }
}

impl PropId {
    pub fn index(self) -> usize {
        self.0
    }
}

impl GiftId {
    pub fn index(self) -> usize {
        self.0
    }
}

// ── Edges ───────────────────────────────────────────────────────────────────

/// A directed, weighted NPC → prop preference.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Gift {
    pub npc: NpcId,
    pub prop: PropId,
    pub level: GiftLevel,
    pub favor: Favor,
}

/// Ordered list of gift ids attached to one entity.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GiftEdges(Vec<GiftId>);

/// Shared behaviour of entities that gifts attach to.
pub trait HasGiftEdges {
    /// Attached gift ids in insertion order.
    fn edges(&self) -> &[GiftId];

    fn add_edge(&mut self, gift: GiftId);

    /// Gifts at `level`, highest favor first. Ties keep insertion order.
    ///
    /// Computed fresh on every call; the edge list is never reordered.
    fn gifts_at_level<'g>(&self, gifts: &'g [Gift], level: GiftLevel) -> Vec<&'g Gift> {
        let mut ranked: Vec<&Gift> = self
            .edges()
            .iter()
            .filter_map(|id| gifts.get(id.0))
            .filter(|g| g.level == level)
            .collect();
        ranked.sort_by(|a, b| b.favor.cmp(&a.favor));
        ranked
    }

    fn loves<'g>(&self, gifts: &'g [Gift]) -> Vec<&'g Gift> {
        self.gifts_at_level(gifts, GiftLevel::Love)
    }

    fn likes<'g>(&self, gifts: &'g [Gift]) -> Vec<&'g Gift> {
        self.gifts_at_level(gifts, GiftLevel::Like)
    }

    fn dislikes<'g>(&self, gifts: &'g [Gift]) -> Vec<&'g Gift> {
        self.gifts_at_level(gifts, GiftLevel::Dislike)
    }

    fn hates<'g>(&self, gifts: &'g [Gift]) -> Vec<&'g Gift> {
        self.gifts_at_level(gifts, GiftLevel::Hate)
    }
}

impl HasGiftEdges for GiftEdges {
    fn edges(&self) -> &[GiftId] {
        &self.0
    }

    fn add_edge(&mut self, gift: GiftId) {
        self.0.push(gift);
    }
}

// ── Entities ────────────────────────────────────────────────────────────────

/// A giftable character.
#[derive(Debug, Clone)]
pub struct Npc {
    pub id: String,
    /// Resolved display name.
    pub name: String,
    pub birthday: Option<String>,
    /// Join key into the `Gift` table.
    pub gift_id: String,
    pub interact: Option<String>,
    edges: GiftEdges,
}

impl Npc {
    /// Build an NPC from a row that passed [`NpcRow::missing_column`].
    pub fn from_row(row: NpcRow, name: String) -> Self {
        Self {
            id: row.id,
            name,
            birthday: row.birthday,
            gift_id: row.gift_id.unwrap_or_default(),
            interact: row.interact,
            edges: GiftEdges::default(),
        }
    }

    /// Image slug for the presentation layer (`images/npcs/<slug>.png`).
    pub fn icon_slug(&self) -> String {
        slugify(&self.name)
    }
}

impl HasGiftEdges for Npc {
    fn edges(&self) -> &[GiftId] {
        self.edges.edges()
    }

    fn add_edge(&mut self, gift: GiftId) {
        self.edges.add_edge(gift);
    }
}

/// A giftable item.
#[derive(Debug, Clone)]
pub struct Prop {
    pub id: String,
    /// Resolved display name.
    pub name: String,
    pub prop_type: PropType,
    pub universality: Universality,
    /// Candidate-selection namespace.
    pub gift_tag_ids: Vec<String>,
    /// Favor-override namespace.
    pub tag_list_ids: Vec<String>,
    pub icon_path: Option<String>,
    pub item_types: Vec<String>,
    edges: GiftEdges,
}

impl Prop {
    /// Build a prop from a row that passed [`PropRow::missing_column`].
    pub fn from_row(row: PropRow, name: String, sets: &ClassificationSets) -> Self {
        let (prop_type, universality) = sets.classify_row(&row);
        Self {
            gift_tag_ids: split_ids(row.gift_tag_ids.as_deref().unwrap_or_default(), ','),
            tag_list_ids: split_ids(row.tag_list.as_deref().unwrap_or_default(), ','),
            item_types: row
                .item_type
                .as_deref()
                .map(|t| split_ids(t, ','))
                .unwrap_or_default(),
            id: row.id,
            name,
            prop_type,
            universality,
            icon_path: row.icon_path,
            edges: GiftEdges::default(),
        }
    }

    /// Exported image stem: `<prop-id>_<slugified-name>`.
    pub fn icon_name(&self) -> String {
        format!("{}_{}", self.id, slugify(&self.name))
    }
}

impl HasGiftEdges for Prop {
    fn edges(&self) -> &[GiftId] {
        self.edges.edges()
    }

    fn add_edge(&mut self, gift: GiftId) {
        self.edges.add_edge(gift);
    }
}

// ── Graph ───────────────────────────────────────────────────────────────────

/// Arena holding every NPC, prop, and gift of one extraction run.
#[derive(Debug, Clone, Default)]
pub struct GiftGraph {
    npcs: Vec<Npc>,
    props: Vec<Prop>,
    gifts: Vec<Gift>,
}

impl GiftGraph {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_npc(&mut self, npc: Npc) -> NpcId {
        self.npcs.push(npc);
        NpcId(self.npcs.len() - 1)
    }

    pub fn add_prop(&mut self, prop: Prop) -> PropId {
        self.props.push(prop);
        PropId(self.props.len() - 1)
    }

    /// Create a gift and register it on both endpoints exactly once.
    ///
    /// # Panics
    /// If `npc` or `prop` was not issued by this graph.
    pub fn connect(&mut self, npc: NpcId, prop: PropId, level: GiftLevel, favor: Favor) -> GiftId {
        let id = GiftId(self.gifts.len());
        self.npcs[npc.0].add_edge(id);
        self.props[prop.0].add_edge(id);
        self.gifts.push(Gift {
            npc,
            prop,
            level,
            favor,
        });
        id
    }

    pub fn npcs(&self) -> &[Npc] {
        &self.npcs
    }

    pub fn props(&self) -> &[Prop] {
        &self.props
    }

    pub fn gifts(&self) -> &[Gift] {
        &self.gifts
    }

    pub fn npc(&self, id: NpcId) -> &Npc {
        &self.npcs[id.0]
    }

    pub fn prop(&self, id: PropId) -> &Prop {
        &self.props[id.0]
    }

    pub fn gift(&self, id: GiftId) -> &Gift {
        &self.gifts[id.0]
    }

    pub fn npc_ids(&self) -> impl Iterator<Item = NpcId> + use<> {
        (0..self.npcs.len()).map(NpcId)
    }

    pub fn prop_ids(&self) -> impl Iterator<Item = PropId> + use<> {
        (0..self.props.len()).map(PropId)
    }

    /// Look up an NPC by display name, ignoring ASCII case.
    pub fn find_npc(&self, name: &str) -> Option<NpcId> {
        self.npcs
            .iter()
            .position(|n| n.name.eq_ignore_ascii_case(name))
            .map(NpcId)
    }

    /// Look up a prop by display name, ignoring ASCII case.
    pub fn find_prop(&self, name: &str) -> Option<PropId> {
        self.props
            .iter()
            .position(|p| p.name.eq_ignore_ascii_case(name))
            .map(PropId)
    }

    /// Human-readable preference summary for an NPC.
    pub fn npc_favor_info(&self, id: NpcId) -> String {
        let npc = self.npc(id);
        let labels = ["Loves", "Likes", "Dislikes", "Hates"];
        let lines: Vec<String> = GiftLevel::ALL
            .iter()
            .zip(labels)
            .map(|(level, label)| {
                let items: Vec<String> = npc
                    .gifts_at_level(&self.gifts, *level)
                    .iter()
                    .map(|g| format!("{} ({})", self.prop(g.prop).name, g.favor))
                    .collect();
                format!("{label}: {}", items.join(", "))
            })
            .collect();
        lines.join("\n")
    }

    /// Human-readable summary of who likes a prop.
    pub fn prop_favor_info(&self, id: PropId) -> String {
        let prop = self.prop(id);
        let labels = ["Loved by", "Liked by", "Disliked by", "Hated by"];
        let lines: Vec<String> = GiftLevel::ALL
            .iter()
            .zip(labels)
            .map(|(level, label)| {
                let npcs: Vec<String> = prop
                    .gifts_at_level(&self.gifts, *level)
                    .iter()
                    .map(|g| format!("{} ({})", self.npc(g.npc).name, g.favor))
                    .collect();
                format!("{label}: {}", npcs.join(", "))
            })
            .collect();
        lines.join("\n")
    }
}
