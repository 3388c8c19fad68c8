use serde::{Deserialize, Serialize};

use crate::domain::types::UserId;

/// Profile of the authenticated user embedded in a login response.
///
/// Text fields are kept exactly as given, whether built here or decoded.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct UserInfo {
    pub id: UserId,
    pub username: String,
    pub email: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub display_name: Option<String>,
    /// Roles granted to the user. Omitted on the wire when empty.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub roles: Vec<String>,
}

impl UserInfo {
    #[must_use]
    pub fn new(id: UserId, username: impl Into<String>, email: impl Into<String>) -> Self {
        Self {
            id,
            username: username.into(),
            email: email.into(),
            display_name: None,
            roles: Vec::new(),
        }
    }

    pub fn display_name(mut self, display_name: impl Into<String>) -> Self {
        self.display_name = Some(display_name.into());
        self
    }

    pub fn role(mut self, role: impl Into<String>) -> Self {
        self.roles.push(role.into());
        self
    }

    /// Returns `true` when the user was granted `role`.
    pub fn has_role(&self, role: &str) -> bool {
        self.roles.iter().any(|r| r == role)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn sample() -> UserInfo {
        UserInfo::new(UserId::new("u1").unwrap(), "alice", "alice@example.com")
    }

    #[test]
    fn built_and_decoded_users_agree() {
        let built = UserInfo::new(UserId::new("u2").unwrap(), "bob", "Bob@Example.com");
        let decoded: UserInfo = serde_json::from_value(
            json!({"id": "u2", "username": "bob", "email": "Bob@Example.com"}),
        )
        .unwrap();
        assert_eq!(built.email, "Bob@Example.com");
        assert_eq!(built, decoded);
    }

    #[test]
    fn has_role_checks_granted_roles() {
        let user = sample().role("admin");
        assert!(user.has_role("admin"));
        assert!(!user.has_role("editor"));
    }

    #[test]
    fn optional_fields_are_omitted() {
        let value = serde_json::to_value(sample()).unwrap();
        assert_eq!(
            value,
            json!({"id": "u1", "username": "alice", "email": "alice@example.com"})
        );
    }

    #[test]
    fn display_name_uses_camel_case() {
        let value = serde_json::to_value(sample().display_name("Alice A.")).unwrap();
        assert_eq!(value["displayName"], "Alice A.");
    }
}
