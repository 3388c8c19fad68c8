//! Error types shared by the payload helpers.

use thiserror::Error;

use crate::domain::types::TypeConstraintError;
use crate::dto::api::ApiFailure;

/// Errors raised while preparing or interpreting API payloads.
#[derive(Debug, Error)]
pub enum ContractError {
    #[error("constraint violation: {0}")]
    TypeConstraint(#[from] TypeConstraintError),
    #[error("validation failed: {0}")]
    Validation(#[from] validator::ValidationErrors),
    #[error("failed to encode query string: {0}")]
    Query(#[from] serde_html_form::ser::Error),
    #[error("failed to decode query string: {0}")]
    QueryDecode(String),
    #[error("invalid json payload: {0}")]
    Json(#[from] serde_json::Error),
    #[error("invalid timestamp: {0}")]
    Timestamp(#[from] chrono::ParseError),
    #[error(transparent)]
    Api(#[from] ApiFailure),
    #[cfg(feature = "client")]
    #[error("configuration error: {0}")]
    Config(#[from] config::ConfigError),
}

pub type ContractResult<T> = Result<T, ContractError>;
