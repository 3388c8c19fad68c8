use std::fs;

use portfolio_api::models::config::ClientConfig;
use portfolio_api::routes::ApiRoute;
use portfolio_api::{ContractError, ProjectTagSearchObject, SearchObject};
use tempfile::TempDir;

fn config_dir(default_yaml: &str) -> TempDir {
    let dir = tempfile::tempdir().unwrap();
    fs::write(dir.path().join("default.yaml"), default_yaml).unwrap();
    dir
}

#[test]
fn test_load_applies_defaults() {
    let dir = config_dir("api_base_url: \"https://portfolio.test/api\"\n");
    let config = ClientConfig::load(dir.path(), "missing-profile").unwrap();
    assert_eq!(config.api_base_url, "https://portfolio.test/api");
    assert_eq!(config.default_page_size, 20);
    assert!(!config.include_total_count);
}

#[test]
fn test_profile_overrides_default() {
    let dir = config_dir("api_base_url: \"https://portfolio.test/api\"\ndefault_page_size: 20\n");
    fs::write(
        dir.path().join("staging.yaml"),
        "default_page_size: 50\ninclude_total_count: true\n",
    )
    .unwrap();

    let config = ClientConfig::load(dir.path(), "staging").unwrap();
    assert_eq!(config.api_base_url, "https://portfolio.test/api");
    assert_eq!(config.default_page_size, 50);
    assert!(config.include_total_count);
}

#[test]
fn test_missing_default_file_is_an_error() {
    let dir = tempfile::tempdir().unwrap();
    let result = ClientConfig::load(dir.path(), "local");
    assert!(matches!(result, Err(ContractError::Config(_))));
}

#[test]
fn test_base_search_uses_configured_defaults() {
    let dir = config_dir(
        "api_base_url: \"https://portfolio.test/api\"\ndefault_page_size: 25\ninclude_total_count: true\n",
    );
    let config = ClientConfig::load(dir.path(), "local").unwrap();

    let search = ProjectTagSearchObject::from(config.base_search());
    assert_eq!(
        config.search_url(ApiRoute::ProjectTags, &search).unwrap(),
        "https://portfolio.test/api/project-tags?page=1&pageSize=25&includeTotalCount=true"
    );
    assert_eq!(search.base().retrieve_all, None);
}
