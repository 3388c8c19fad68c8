use std::fmt::{Debug, Formatter};

use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::errors::ContractResult;

#[derive(Clone, Serialize, Deserialize, PartialEq, Eq, Validate)]
/// Credentials posted to the login endpoint.
pub struct LoginRequest {
    /// Account name or email address.
    #[validate(length(min = 1))]
    pub username: String,
    #[validate(length(min = 1))]
    pub password: String,
}

impl LoginRequest {
    /// Builds a request with a trimmed username. The password is kept verbatim.
    pub fn new(username: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            username: username.into().trim().to_string(),
            password: password.into(),
        }
    }

    /// Validates the credentials and renders the JSON body.
    pub fn to_json(&self) -> ContractResult<String> {
        self.validate()?;
        Ok(serde_json::to_string(self)?)
    }
}

impl Debug for LoginRequest {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LoginRequest")
            .field("username", &self.username)
            .field("password", &"***")
            .finish()
    }
}
