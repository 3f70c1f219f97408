use std::fmt;

use super::{DEFAULT_LIMIT, RANKING_FIELDS};

/// Ranking list offered by the ranking endpoint.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum RankingType {
    All,
    #[default]
    Airing,
    Upcoming,
    Tv,
    Ova,
    Movie,
    Special,
    ByPopularity,
    Favorite,
}

impl RankingType {
    pub const ALL: [RankingType; 9] = [
        RankingType::All,
        RankingType::Airing,
        RankingType::Upcoming,
        RankingType::Tv,
        RankingType::Ova,
        RankingType::Movie,
        RankingType::Special,
        RankingType::ByPopularity,
        RankingType::Favorite,
    ];

    /// Value sent as the `ranking_type` query parameter.
    pub fn as_str(&self) -> &'static str {
        match self {
            RankingType::All => "all",
            RankingType::Airing => "airing",
            RankingType::Upcoming => "upcoming",
            RankingType::Tv => "tv",
            RankingType::Ova => "ova",
            RankingType::Movie => "movie",
            RankingType::Special => "special",
            RankingType::ByPopularity => "bypopularity",
            RankingType::Favorite => "favorite",
        }
    }

    /// Case-insensitive parse; unrecognized values become [`RankingType::Airing`].
    pub fn parse_or_default(value: &str) -> Self {
        let value = value.trim();
        Self::ALL
            .into_iter()
            .find(|t| t.as_str().eq_ignore_ascii_case(value))
            .unwrap_or_default()
    }

    /// Next type in declaration order, wrapping around.
    pub fn next(&self) -> Self {
        let idx = Self::ALL.iter().position(|t| t == self).unwrap_or(0);
        Self::ALL[(idx + 1) % Self::ALL.len()]
    }
}

impl fmt::Display for RankingType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Parameters of one ranking request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct RankingQuery {
    pub ranking_type: RankingType,
    pub limit: Option<i64>,
    pub offset: Option<i64>,
}

impl RankingQuery {
    pub fn new(ranking_type: RankingType) -> Self {
        Self {
            ranking_type,
            ..Default::default()
        }
    }

    pub fn with_limit(mut self, limit: i64) -> Self {
        self.limit = Some(limit);
        self
    }

    pub fn with_offset(mut self, offset: i64) -> Self {
        self.offset = Some(offset);
        self
    }

    pub fn effective_limit(&self) -> i64 {
        match self.limit {
            Some(limit) if limit > 0 => limit,
            _ => DEFAULT_LIMIT,
        }
    }

    pub fn effective_offset(&self) -> Option<i64> {
        self.offset.filter(|offset| *offset > 0)
    }

    /// Query pairs in request order. `offset` is left out unless positive.
    pub fn query_pairs(&self) -> Vec<(&'static str, String)> {
        let mut pairs = vec![
            ("ranking_type", self.ranking_type.as_str().to_string()),
            ("limit", self.effective_limit().to_string()),
        ];
        if let Some(offset) = self.effective_offset() {
            pairs.push(("offset", offset.to_string()));
        }
        pairs.push(("fields", RANKING_FIELDS.to_string()));
        pairs
    }
}
