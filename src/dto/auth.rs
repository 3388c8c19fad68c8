//! Payloads exchanged with the authentication endpoints.

use chrono::{DateTime, SecondsFormat, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::user::UserInfo;
use crate::errors::ContractResult;

/// Tokens issued after a successful login.
///
/// `expires_at` is kept as the backend sent it so that re-serializing the
/// value never rewrites the timestamp.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct LoginResponse {
    pub access_token: String,
    pub refresh_token: String,
    /// RFC 3339 timestamp of the access token expiry.
    pub expires_at: String,
    pub user: UserInfo,
}

/// Body of the token refresh request.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct RefreshTokenRequest {
    pub refresh_token: String,
}

impl LoginResponse {
    #[must_use]
    pub fn new(
        access_token: impl Into<String>,
        refresh_token: impl Into<String>,
        expires_at: DateTime<Utc>,
        user: UserInfo,
    ) -> Self {
        Self {
            access_token: access_token.into(),
            refresh_token: refresh_token.into(),
            expires_at: expires_at.to_rfc3339_opts(SecondsFormat::Secs, true),
            user,
        }
    }

    /// Parses `expires_at` into a UTC timestamp.
    pub fn expires_at_utc(&self) -> ContractResult<DateTime<Utc>> {
        let parsed = DateTime::parse_from_rfc3339(self.expires_at.trim())?;
        Ok(parsed.with_timezone(&Utc))
    }

    /// Returns `true` once `now` has reached the expiry.
    pub fn is_expired_at(&self, now: DateTime<Utc>) -> ContractResult<bool> {
        Ok(now >= self.expires_at_utc()?)
    }

    pub fn refresh_request(&self) -> RefreshTokenRequest {
        RefreshTokenRequest {
            refresh_token: self.refresh_token.clone(),
        }
    }
}
