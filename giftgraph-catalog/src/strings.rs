//! Localized string lookup.

use std::collections::HashMap;

use crate::types::StringRow;

/// Maps opaque string ids to English display text.
///
/// Built once from the `Translation_hint` rows and read-only afterwards.
#[derive(Debug, Clone, Default)]
pub struct StringTable {
    entries: HashMap<String, String>,
}

impl StringTable {
    /// Build a table from source rows. A repeated id keeps the last value.
    pub fn from_rows(rows: impl IntoIterator<Item = StringRow>) -> Self {
        let entries = rows.into_iter().map(|r| (r.id, r.english)).collect();
        Self { entries }
    }

    pub fn get(&self, id: &str) -> Option<&str> {
        self.entries.get(id).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
