//! Session model and related functionality

use serde::{Deserialize, Serialize};

use super::role::Role;
use super::user::UserInfo;

/// Signed-in session: the bearer token and who it belongs to
///
/// Token and user are only ever stored and cleared together.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Session {
    pub token: String,
    pub user: UserInfo,
}

impl Session {
    /// Whether the token carries a credential
    pub fn has_token(&self) -> bool {
        !self.token.trim().is_empty()
    }
}

/// Body returned by login and registration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuthResponse {
    pub token: String,
    pub username: String,
    pub role: Role,
}

impl From<AuthResponse> for Session {
    fn from(response: AuthResponse) -> Self {
        Self {
            token: response.token,
            user: UserInfo {
                username: response.username,
                role: response.role,
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_session_from_auth_response() {
        let response: AuthResponse = serde_json::from_value(json!({
            "token": "jwt",
            "username": "manager",
            "role": "ROLE_MANAGER"
        }))
        .unwrap();

        let session = Session::from(response);
        assert_eq!(session.token, "jwt");
        assert_eq!(session.user.username, "manager");
        assert_eq!(session.user.role, Role::Manager);
        assert_eq!(
            serde_json::to_value(&session).unwrap(),
            json!({"token": "jwt", "user": {"username": "manager", "role": "ROLE_MANAGER"}})
        );
    }
}
