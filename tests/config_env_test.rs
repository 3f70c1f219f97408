//! Config::from_env against the real process environment.
//!
//! Environment variables are process-global, so every test here is serial.

use serial_test::serial;

use anitui::api::RankingType;
use anitui::config::{
    Config, API_URL_VAR, CLIENT_ID_VAR, LEGACY_CLIENT_ID_VAR, PAGE_SIZE_VAR, RANKING_TYPE_VAR,
};
use anitui::error::ConfigError;

const ALL_VARS: [&str; 5] = [
    CLIENT_ID_VAR,
    LEGACY_CLIENT_ID_VAR,
    API_URL_VAR,
    RANKING_TYPE_VAR,
    PAGE_SIZE_VAR,
];

fn clear_env() {
    for var in ALL_VARS {
        std::env::remove_var(var);
    }
}

#[test]
#[serial]
fn test_from_env_requires_client_id() {
    clear_env();
    assert_eq!(
        Config::from_env(),
        Err(ConfigError::MissingClientId { var: CLIENT_ID_VAR })
    );
}

#[test]
#[serial]
fn test_from_env_reads_all_settings() {
    clear_env();
    std::env::set_var(CLIENT_ID_VAR, "from-env");
    std::env::set_var(API_URL_VAR, "http://localhost:8080/v2/anime/");
    std::env::set_var(RANKING_TYPE_VAR, "movie");
    std::env::set_var(PAGE_SIZE_VAR, "25");

    let config = Config::from_env().unwrap();
    clear_env();

    assert_eq!(config.client_id, "from-env");
    assert_eq!(config.base_url, "http://localhost:8080/v2/anime");
    assert_eq!(config.ranking_type, RankingType::Movie);
    assert_eq!(config.page_size, 25);
}

#[test]
#[serial]
fn test_from_env_falls_back_to_legacy_variable() {
    clear_env();
    std::env::set_var(LEGACY_CLIENT_ID_VAR, "legacy");
    let config = Config::from_env().unwrap();
    clear_env();
    assert_eq!(config.client_id, "legacy");
}

#[test]
#[serial]
fn test_from_env_rejects_non_http_url() {
    clear_env();
    std::env::set_var(CLIENT_ID_VAR, "id");
    std::env::set_var(API_URL_VAR, "ftp://example.com");
    let result = Config::from_env();
    clear_env();
    assert!(matches!(result, Err(ConfigError::InvalidBaseUrl { .. })));
}
