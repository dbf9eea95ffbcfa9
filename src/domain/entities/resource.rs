//! Resource item entity produced by the source parsers.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

/// One character or monster record with display metadata and an image reference.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResourceItem {
    /// Upstream identifier.
    pub id: String,
    /// Display name, unique within a source.
    pub name: String,
    /// Star rarity (4 or 5 for the known catalogs).
    pub rarity: u8,
    /// Element tag, empty when the upstream has none.
    #[serde(default)]
    pub element: String,
    /// Remote image URL.
    pub icon_url: String,
    /// File name of the locally cached image, unique within a source.
    pub filename: String,
}

impl ResourceItem {
    /// Sorts by descending rarity, then ascending name.
    pub fn sort_by_rarity(items: &mut [Self]) {
        items.sort_by(|a, b| b.rarity.cmp(&a.rarity).then_with(|| a.name.cmp(&b.name)));
    }

    /// Drops every item whose name was already seen, keeping the first one.
    #[must_use]
    pub fn dedup_by_name(items: Vec<Self>) -> Vec<Self> {
        let mut seen = HashSet::new();
        items
            .into_iter()
            .filter(|item| seen.insert(item.name.clone()))
            .collect()
    }
}
