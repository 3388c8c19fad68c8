//! Backend routes consumed by the client and URL construction for them.

use crate::dto::search::SearchObject;
use crate::errors::ContractResult;
use crate::models::config::ClientConfig;

/// Endpoints of the portfolio API.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ApiRoute {
    Login,
    RefreshToken,
    ProjectTags,
    ProjectTechs,
}

impl ApiRoute {
    /// Path relative to the API base URL.
    pub const fn path(self) -> &'static str {
        match self {
            ApiRoute::Login => "auth/login",
            ApiRoute::RefreshToken => "auth/refresh",
            ApiRoute::ProjectTags => "project-tags",
            ApiRoute::ProjectTechs => "project-techs",
        }
    }
}

impl ClientConfig {
    /// Absolute URL of `route`.
    pub fn url_for(&self, route: ApiRoute) -> String {
        format!("{}/{}", self.api_base_url.trim_end_matches('/'), route.path())
    }

    /// Absolute URL of `route` with the encoded search appended.
    pub fn search_url<S>(&self, route: ApiRoute, search: &S) -> ContractResult<String>
    where
        S: SearchObject,
    {
        let base = self.url_for(route);
        let query = search.to_query_string()?;
        let url = if query.is_empty() {
            base
        } else {
            format!("{base}?{query}")
        };
        log::debug!("Built search url {url}");
        Ok(url)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::types::{ProjectId, TechId};
    use crate::dto::search::{BaseSearchObject, ProjectTechSearchObject};

    fn config() -> ClientConfig {
        ClientConfig {
            api_base_url: "https://portfolio.test/api/".to_string(),
            default_page_size: 20,
            include_total_count: false,
        }
    }

    #[test]
    fn url_for_joins_without_double_slash() {
        assert_eq!(
            config().url_for(ApiRoute::Login),
            "https://portfolio.test/api/auth/login"
        );
    }

    #[test]
    fn search_url_omits_empty_query() {
        let url = config()
            .search_url(ApiRoute::ProjectTags, &BaseSearchObject::default())
            .unwrap();
        assert_eq!(url, "https://portfolio.test/api/project-tags");
    }

    #[test]
    fn search_url_appends_filters() {
        let search = ProjectTechSearchObject::new()
            .project(ProjectId::new("p1").unwrap())
            .tech(TechId::new("rust").unwrap())
            .paginate(2, 10);
        let url = config()
            .search_url(ApiRoute::ProjectTechs, &search)
            .unwrap();
        assert_eq!(
            url,
            "https://portfolio.test/api/project-techs?page=2&pageSize=10&projectId=p1&techId=rust"
        );
    }

    #[test]
    fn search_url_rejects_invalid_search() {
        let search = BaseSearchObject::default().paginate(0, 10);
        assert!(config().search_url(ApiRoute::ProjectTags, &search).is_err());
    }
}
