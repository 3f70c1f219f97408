use serde::Deserialize;

use super::names::DisplayName;
use super::ranking::AlternativeTitles;
use super::{deserialize_nullable_string, localized_or};

/// Response body of the per-item detail endpoint.
///
/// `background` keeps the distinction between a missing field (`None`) and
/// an empty one (`Some("")`); the detail renderer shows the section whenever
/// the field is present, even when it is empty.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct DetailDocument {
    #[serde(default)]
    pub id: u64,
    #[serde(default, deserialize_with = "deserialize_nullable_string")]
    pub title: String,
    #[serde(default)]
    pub alternative_titles: AlternativeTitles,
    #[serde(default, deserialize_with = "deserialize_nullable_string")]
    pub start_date: String,
    #[serde(default, deserialize_with = "deserialize_nullable_string")]
    pub synopsis: String,
    #[serde(default)]
    pub rank: Option<u32>,
    #[serde(default)]
    pub popularity: Option<u32>,
    #[serde(default, deserialize_with = "deserialize_nullable_string")]
    pub status: String,
    #[serde(default)]
    pub genres: Vec<Genre>,
    #[serde(default, deserialize_with = "deserialize_nullable_string")]
    pub rating: String,
    #[serde(default)]
    pub background: Option<String>,
    #[serde(default)]
    pub related_anime: Vec<RelatedItem>,
    #[serde(default)]
    pub recommendations: Vec<Recommendation>,
    #[serde(default)]
    pub studios: Vec<Studio>,
}

impl DetailDocument {
    pub fn display_title(&self) -> &str {
        localized_or(&self.alternative_titles.en, &self.title)
    }

    /// Status with underscores spelled as spaces, e.g. `finished airing`.
    pub fn status_text(&self) -> String {
        self.status.replace('_', " ")
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct Genre {
    #[serde(default, deserialize_with = "deserialize_nullable_string")]
    pub name: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct Studio {
    #[serde(default)]
    pub id: u64,
    #[serde(default, deserialize_with = "deserialize_nullable_string")]
    pub name: String,
}

/// Minimal reference to another item.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct ItemRef {
    #[serde(default)]
    pub id: u64,
    #[serde(default, deserialize_with = "deserialize_nullable_string")]
    pub title: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct RelatedItem {
    pub node: ItemRef,
    #[serde(
        default,
        rename = "relation_type_formatted",
        deserialize_with = "deserialize_nullable_string"
    )]
    pub relation: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct Recommendation {
    pub node: ItemRef,
}

impl DisplayName for Genre {
    fn display_name(&self) -> &str {
        &self.name
    }
}

impl DisplayName for Studio {
    fn display_name(&self) -> &str {
        &self.name
    }
}

impl DisplayName for ItemRef {
    fn display_name(&self) -> &str {
        &self.title
    }
}

impl DisplayName for RelatedItem {
    fn display_name(&self) -> &str {
        self.node.display_name()
    }
}

impl DisplayName for Recommendation {
    fn display_name(&self) -> &str {
        self.node.display_name()
    }
}
