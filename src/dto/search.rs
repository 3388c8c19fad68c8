//! Query parameter bags accepted by the list endpoints.
//!
//! Every field is optional. The project search objects extend
//! [`BaseSearchObject`] by composition and flatten it on the wire, so the
//! inherited fields keep their names and stay optional.
//!
//! When both `retrieveAll` and `page`/`pageSize` are set the values are sent
//! as they are. Which one wins is up to the backend.

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_with::{DisplayFromStr, PickFirst, serde_as};
use validator::Validate;

use crate::domain::types::{ProjectId, TagId, TechId};
use crate::errors::{ContractError, ContractResult};

/// Largest page size accepted by [`BaseSearchObject`] validation.
pub const MAX_PAGE_SIZE: u32 = 1000;

/// Paging and sorting parameters shared by every search.
///
/// Numeric and boolean fields also accept their string form. Query strings
/// carry every value as text, and the flattened extensions hand those texts
/// to these fields unparsed.
#[serde_as]
#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq, Eq, Validate)]
#[serde(rename_all = "camelCase")]
pub struct BaseSearchObject {
    /// One-based page number.
    #[serde_as(as = "Option<PickFirst<(_, DisplayFromStr)>>")]
    #[serde(skip_serializing_if = "Option::is_none")]
    #[validate(range(min = 1))]
    pub page: Option<u32>,
    #[serde_as(as = "Option<PickFirst<(_, DisplayFromStr)>>")]
    #[serde(skip_serializing_if = "Option::is_none")]
    #[validate(range(min = 1, max = MAX_PAGE_SIZE))]
    pub page_size: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    #[validate(length(min = 1))]
    pub sort_by: Option<String>,
    #[serde_as(as = "Option<PickFirst<(_, DisplayFromStr)>>")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub desc: Option<bool>,
    #[serde_as(as = "Option<PickFirst<(_, DisplayFromStr)>>")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub include_total_count: Option<bool>,
    #[serde_as(as = "Option<PickFirst<(_, DisplayFromStr)>>")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub retrieve_all: Option<bool>,
}

/// Project/tag link search.
#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq, Eq, Validate)]
#[serde(rename_all = "camelCase")]
pub struct ProjectTagSearchObject {
    #[serde(flatten)]
    #[validate(nested)]
    pub base: BaseSearchObject,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub project_id: Option<ProjectId>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tag_id: Option<TagId>,
}

/// Project/technology link search.
#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq, Eq, Validate)]
#[serde(rename_all = "camelCase")]
pub struct ProjectTechSearchObject {
    #[serde(flatten)]
    #[validate(nested)]
    pub base: BaseSearchObject,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub project_id: Option<ProjectId>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tech_id: Option<TechId>,
}

/// Common behaviour of the search objects: access to the shared paging
/// parameters, builder helpers and query-string encoding.
pub trait SearchObject: Serialize + Validate {
    fn base(&self) -> &BaseSearchObject;

    fn base_mut(&mut self) -> &mut BaseSearchObject;

    fn paginate(mut self, page: u32, page_size: u32) -> Self
    where
        Self: Sized,
    {
        let base = self.base_mut();
        base.page = Some(page);
        base.page_size = Some(page_size);
        self
    }

    fn sort(mut self, field: impl Into<String>, desc: bool) -> Self
    where
        Self: Sized,
    {
        let base = self.base_mut();
        base.sort_by = Some(field.into());
        base.desc = Some(desc);
        self
    }

    fn with_total_count(mut self) -> Self
    where
        Self: Sized,
    {
        self.base_mut().include_total_count = Some(true);
        self
    }

    /// Asks for every matching record.
    fn all(mut self) -> Self
    where
        Self: Sized,
    {
        self.base_mut().retrieve_all = Some(true);
        self
    }

    /// Validates the parameters and encodes them as `application/x-www-form-urlencoded`.
    ///
    /// Absent fields are omitted; an empty search yields an empty string.
    fn to_query_string(&self) -> ContractResult<String> {
        self.validate()?;
        Ok(serde_html_form::to_string(self)?)
    }

    /// Decodes a query string produced by [`SearchObject::to_query_string`]
    /// (or sent by a client) and validates the result.
    fn from_query_string(query: &str) -> ContractResult<Self>
    where
        Self: Sized + DeserializeOwned,
    {
        let search: Self = serde_html_form::from_str(query.trim_start_matches('?'))
            .map_err(|err| ContractError::QueryDecode(err.to_string()))?;
        search.validate()?;
        Ok(search)
    }
}

impl SearchObject for BaseSearchObject {
    fn base(&self) -> &BaseSearchObject {
        self
    }

    fn base_mut(&mut self) -> &mut BaseSearchObject {
        self
    }
}

impl SearchObject for ProjectTagSearchObject {
    fn base(&self) -> &BaseSearchObject {
        &self.base
    }

    fn base_mut(&mut self) -> &mut BaseSearchObject {
        &mut self.base
    }
}

impl SearchObject for ProjectTechSearchObject {
    fn base(&self) -> &BaseSearchObject {
        &self.base
    }

    fn base_mut(&mut self) -> &mut BaseSearchObject {
        &mut self.base
    }
}

impl From<BaseSearchObject> for ProjectTagSearchObject {
    fn from(base: BaseSearchObject) -> Self {
        Self {
            base,
            ..Self::default()
        }
    }
}

impl From<BaseSearchObject> for ProjectTechSearchObject {
    fn from(base: BaseSearchObject) -> Self {
        Self {
            base,
            ..Self::default()
        }
    }
}

impl ProjectTagSearchObject {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn project(mut self, project_id: ProjectId) -> Self {
        self.project_id = Some(project_id);
        self
    }

    pub fn tag(mut self, tag_id: TagId) -> Self {
        self.tag_id = Some(tag_id);
        self
    }
}

impl ProjectTechSearchObject {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn project(mut self, project_id: ProjectId) -> Self {
        self.project_id = Some(project_id);
        self
    }

    pub fn tech(mut self, tech_id: TechId) -> Self {
        self.tech_id = Some(tech_id);
        self
    }
}
