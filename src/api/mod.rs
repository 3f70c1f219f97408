//! Data fetch commands against the anime API.
//!
//! Two calls, both `GET` with the client id header:
//! - `{base}/ranking?ranking_type=..&limit=..[&offset=..]&fields=alternative_titles`
//! - `{base}/{id}?fields=<DETAIL_FIELDS>`

mod client;
mod query;

pub use client::ApiClient;
pub use query::{RankingQuery, RankingType};

pub const DEFAULT_BASE_URL: &str = "https://api.myanimelist.net/v2/anime";

/// Header carrying the API client id.
pub const CLIENT_ID_HEADER: &str = "X-MAL-CLIENT-ID";

/// Page size used when none (or a non-positive one) is given.
pub const DEFAULT_LIMIT: i64 = 100;

/// Field set requested by the detail call, in one round trip.
pub const DETAIL_FIELDS: &str = "id,title,main_picture,alternative_titles,start_date,end_date,\
synopsis,mean,rank,popularity,num_list_users,num_scoring_users,nsfw,created_at,updated_at,\
media_type,status,genres,num_episodes,start_season,broadcast,source,average_episode_duration,\
rating,pictures,background,related_anime,related_manga,recommendations,studios,statistics";

/// Extra fields requested on ranking rows so localized titles are delivered.
pub const RANKING_FIELDS: &str = "alternative_titles";
