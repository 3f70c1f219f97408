//! Wire entities for the anime API and the view-side records built from them.

mod detail;
mod names;
mod ranking;

pub use detail::{DetailDocument, Genre, ItemRef, Recommendation, RelatedItem, Studio};
pub use names::{join_names, DisplayName};
pub use ranking::{AlternativeTitles, ItemSummary, RankEntry, RankedItem, RankedList, Ranking};

use serde::{Deserialize, Deserializer};

/// Treat an explicit JSON `null` the same as a missing string.
pub(crate) fn deserialize_nullable_string<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Option::<String>::deserialize(deserializer).map(|opt| opt.unwrap_or_default())
}

/// Localized title when present, canonical title otherwise.
pub(crate) fn localized_or<'a>(localized: &'a str, canonical: &'a str) -> &'a str {
    if localized.is_empty() {
        canonical
    } else {
        localized
    }
}
