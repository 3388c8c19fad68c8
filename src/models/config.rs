//! Client configuration loaded from external sources.

use std::path::Path;

use config::Config;
use serde::Deserialize;

use crate::dto::search::BaseSearchObject;
use crate::errors::ContractResult;

fn default_page_size() -> u32 {
    20
}

#[derive(Clone, Debug, Deserialize, PartialEq, Eq)]
/// Settings shared by every request built by the client.
pub struct ClientConfig {
    /// Root of the backend API, e.g. `https://example.com/api`.
    pub api_base_url: String,
    #[serde(default = "default_page_size")]
    pub default_page_size: u32,
    #[serde(default)]
    pub include_total_count: bool,
}

impl ClientConfig {
    /// Loads `<dir>/default`, the optional `<dir>/<profile>` override and
    /// `APP_`-prefixed environment variables, in that order.
    pub fn load(dir: &Path, profile: &str) -> ContractResult<Self> {
        let default_file = dir.join("default");
        let profile_file = dir.join(profile);

        let settings = Config::builder()
            .add_source(config::File::with_name(&default_file.to_string_lossy()))
            .add_source(config::File::with_name(&profile_file.to_string_lossy()).required(false))
            .add_source(config::Environment::with_prefix("APP"))
            .build()?;

        let client_config = settings.try_deserialize::<ClientConfig>()?;
        log::debug!(
            "Loaded client config for profile `{profile}`: {}",
            client_config.api_base_url
        );
        Ok(client_config)
    }

    /// First page of a search using the configured defaults.
    pub fn base_search(&self) -> BaseSearchObject {
        BaseSearchObject {
            page: Some(1),
            page_size: Some(self.default_page_size),
            include_total_count: self.include_total_count.then_some(true),
            ..BaseSearchObject::default()
        }
    }
}
