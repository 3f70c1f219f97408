//! `--version` and `--help` output.

/// The current version of anitui, read from Cargo.toml at compile time.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub fn version_text() -> String {
    format!("anitui {}", VERSION)
}

pub fn help_text() -> String {
    format!(
        "{version}
Browse MyAnimeList rankings in the terminal.

USAGE:
    anitui [OPTIONS]

OPTIONS:
    -h, --help       Print this help and exit
    -V, --version    Print version and exit

ENVIRONMENT:
    MAL_CLIENT_ID          MyAnimeList API client id (required; CLIENT_ID also accepted)
    ANITUI_API_URL         Base URL of the anime API
    ANITUI_RANKING_TYPE    Initial ranking (all, airing, upcoming, tv, ova, movie, special, bypopularity, favorite)
    ANITUI_PAGE_SIZE       Items per ranking page (default 100)
    ANITUI_LOG             Log file path
    RUST_LOG               Log filter (default info)
",
        version = version_text()
    )
}
