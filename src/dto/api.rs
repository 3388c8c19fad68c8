//! Response envelope wrapping every payload returned by the backend.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Generic envelope: `{ data?, message?, success, errors? }`.
///
/// A failed envelope conventionally carries no `data`, but nothing here
/// enforces it. Absent and empty `errors` are kept distinct.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct ApiResponse<T> {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub errors: Option<Vec<String>>,
}

/// A failed envelope turned into an error value.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
#[error("{}", describe_failure(.message, .errors))]
pub struct ApiFailure {
    pub message: Option<String>,
    pub errors: Vec<String>,
}

/// Message first, then the joined error list.
fn describe_failure(message: &Option<String>, errors: &[String]) -> String {
    match (message, errors.is_empty()) {
        (Some(message), true) => message.clone(),
        (Some(message), false) => format!("{message}: {}", errors.join("; ")),
        (None, false) => errors.join("; "),
        (None, true) => "request failed".to_string(),
    }
}

impl<T> ApiResponse<T> {
    /// Successful envelope carrying `data`.
    pub fn ok(data: T) -> Self {
        Self {
            data: Some(data),
            message: None,
            success: true,
            errors: None,
        }
    }

    pub fn ok_with_message(data: T, message: impl Into<String>) -> Self {
        Self {
            message: Some(message.into()),
            ..Self::ok(data)
        }
    }

    /// Failed envelope without payload.
    pub fn failure(message: impl Into<String>) -> Self {
        Self {
            data: None,
            message: Some(message.into()),
            success: false,
            errors: None,
        }
    }

    pub fn failure_with_errors<I, S>(message: impl Into<String>, errors: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            errors: Some(errors.into_iter().map(Into::into).collect()),
            ..Self::failure(message)
        }
    }

    pub fn is_success(&self) -> bool {
        self.success
    }

    /// Iterates over the reported errors; empty when the field is absent.
    pub fn error_messages(&self) -> impl Iterator<Item = &str> {
        self.errors.iter().flatten().map(String::as_str)
    }

    /// Transforms the payload while keeping the envelope metadata.
    pub fn map<U, F>(self, f: F) -> ApiResponse<U>
    where
        F: FnOnce(T) -> U,
    {
        ApiResponse {
            data: self.data.map(f),
            message: self.message,
            success: self.success,
            errors: self.errors,
        }
    }

    /// Splits the envelope into its payload or an [`ApiFailure`].
    pub fn into_result(self) -> Result<Option<T>, ApiFailure> {
        if self.success {
            return Ok(self.data);
        }

        let failure = ApiFailure {
            message: self.message,
            errors: self.errors.unwrap_or_default(),
        };
        log::warn!("API request failed: {failure}");
        Err(failure)
    }

    /// Like [`ApiResponse::into_result`] but a success without `data` is an error.
    pub fn into_data(self) -> Result<T, ApiFailure> {
        self.into_result()?.ok_or_else(|| ApiFailure {
            message: Some("response is missing data".to_string()),
            errors: Vec::new(),
        })
    }
}
