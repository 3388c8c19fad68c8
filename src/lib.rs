//! Typed contract for the portfolio backend API: response envelope, login
//! payloads and search parameters, plus helpers to build request URLs.

pub mod domain;
pub mod dto;
pub mod errors;
pub mod forms;
pub mod pagination;

#[cfg(feature = "client")]
pub mod models;
#[cfg(feature = "client")]
pub mod routes;

pub use dto::api::{ApiFailure, ApiResponse};
pub use dto::auth::{LoginResponse, RefreshTokenRequest};
pub use dto::search::{
    BaseSearchObject, ProjectTagSearchObject, ProjectTechSearchObject, SearchObject,
};
pub use errors::{ContractError, ContractResult};
