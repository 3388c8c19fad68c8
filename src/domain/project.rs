use serde::{Deserialize, Serialize};

use crate::domain::types::{ProjectId, TagId, TechId};

/// Link between a project and one of its tags.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "camelCase")]
pub struct ProjectTag {
    pub project_id: ProjectId,
    pub tag_id: TagId,
}

/// Link between a project and a technology it uses.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "camelCase")]
pub struct ProjectTech {
    pub project_id: ProjectId,
    pub tech_id: TechId,
}
