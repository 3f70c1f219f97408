use serde::Deserialize;

use super::{deserialize_nullable_string, localized_or};

/// Response body of the ranking endpoint.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct RankedList {
    #[serde(default)]
    pub data: Vec<RankedItem>,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct RankedItem {
    pub node: ItemSummary,
    pub ranking: Ranking,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ItemSummary {
    pub id: u64,
    #[serde(default, deserialize_with = "deserialize_nullable_string")]
    pub title: String,
    #[serde(default)]
    pub alternative_titles: AlternativeTitles,
}

/// Only the English and Japanese alternatives are used.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct AlternativeTitles {
    #[serde(default, deserialize_with = "deserialize_nullable_string")]
    pub en: String,
    #[serde(default, deserialize_with = "deserialize_nullable_string")]
    pub ja: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub struct Ranking {
    pub rank: u32,
}

/// One row of the rank table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RankEntry {
    pub rank: u32,
    pub display_title: String,
    pub japanese_title: String,
    pub item_id: u64,
}

impl From<&RankedItem> for RankEntry {
    fn from(item: &RankedItem) -> Self {
        let node = &item.node;
        Self {
            rank: item.ranking.rank,
            display_title: localized_or(&node.alternative_titles.en, &node.title).to_string(),
            japanese_title: node.alternative_titles.ja.clone(),
            item_id: node.id,
        }
    }
}

impl RankedList {
    /// Entries in delivery order.
    pub fn entries(&self) -> Vec<RankEntry> {
        self.data.iter().map(RankEntry::from).collect()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }
}
