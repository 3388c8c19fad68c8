//! Prints payloads conforming to the portfolio API contract, for use by test
//! doubles and mock backends.

use std::env;
use std::path::Path;

use chrono::{Duration, Utc};
use dotenvy::dotenv;
use serde_json::json;

use portfolio_api::domain::project::ProjectTag;
use portfolio_api::domain::types::{ProjectId, TagId, TechId, UserId};
use portfolio_api::domain::user::UserInfo;
use portfolio_api::models::config::ClientConfig;
use portfolio_api::pagination::PagedResult;
use portfolio_api::routes::ApiRoute;
use portfolio_api::{
    ApiResponse, ContractResult, LoginResponse, ProjectTagSearchObject, ProjectTechSearchObject,
    SearchObject,
};

const KINDS: &[&str] = &[
    "api-response",
    "api-failure",
    "login-response",
    "project-tags-url",
    "project-techs-url",
];

fn sample_user() -> ContractResult<UserInfo> {
    Ok(UserInfo::new(UserId::new("u-1")?, "demo", "demo@example.com")
        .display_name("Demo User")
        .role("viewer"))
}

fn render(kind: &str, config: &ClientConfig) -> ContractResult<Option<String>> {
    let rendered = match kind {
        "api-response" => {
            let links = vec![ProjectTag {
                project_id: ProjectId::new("p-1")?,
                tag_id: TagId::new("t-1")?,
            }];
            let response = ApiResponse::ok(PagedResult::new(links, Some(1)));
            serde_json::to_string_pretty(&response)?
        }
        "api-failure" => {
            let response = ApiResponse::<serde_json::Value>::failure_with_errors(
                "Validation failed",
                ["pageSize must be between 1 and 1000"],
            );
            serde_json::to_string_pretty(&response)?
        }
        "login-response" => {
            let response = LoginResponse::new(
                "access-token",
                "refresh-token",
                Utc::now() + Duration::hours(1),
                sample_user()?,
            );
            serde_json::to_string_pretty(&ApiResponse::ok(response))?
        }
        "project-tags-url" => {
            let search = ProjectTagSearchObject::from(config.base_search())
                .project(ProjectId::new("p-1")?)
                .sort("tagId", false);
            config.search_url(ApiRoute::ProjectTags, &search)?
        }
        "project-techs-url" => {
            let search = ProjectTechSearchObject::new()
                .tech(TechId::new("rust")?)
                .all();
            config.search_url(ApiRoute::ProjectTechs, &search)?
        }
        _ => return Ok(None),
    };
    Ok(Some(rendered))
}

fn main() {
    dotenv().ok(); // Load .env file
    env_logger::init_from_env(env_logger::Env::default().default_filter_or("info"));

    // Select config profile (defaults to `local`).
    let app_env = env::var("APP_ENV").unwrap_or_else(|_| "local".into());

    let config = match ClientConfig::load(Path::new("config"), &app_env) {
        Ok(config) => config,
        Err(err) => {
            log::error!("Error loading client config: {err}");
            std::process::exit(1);
        }
    };

    let Some(kind) = env::args().nth(1) else {
        log::error!("Missing payload kind, expected one of: {}", KINDS.join(", "));
        std::process::exit(2);
    };

    match render(&kind, &config) {
        Ok(Some(payload)) => println!("{payload}"),
        Ok(None) => {
            log::error!(
                "Unknown payload kind `{kind}`, expected one of: {}",
                KINDS.join(", ")
            );
            std::process::exit(2);
        }
        Err(err) => {
            log::error!("Failed to render `{kind}`: {err}");
            std::process::exit(1);
        }
    }
}
