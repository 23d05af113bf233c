//! Authentication models

use crate::store::UserRecord;
use serde::{Deserialize, Serialize};

/// Login credentials submitted by a client, never stored
#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

/// Issued token plus its scheme, as handed back to a client
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TokenResponse {
    pub access_token: String,
    pub token_type: String,
}

impl TokenResponse {
    /// Wrap a signed token as a bearer credential
    pub fn bearer(access_token: String) -> Self {
        Self {
            access_token,
            token_type: "bearer".to_string(),
        }
    }
}

/// User information safe to expose in responses
#[derive(Debug, Serialize)]
pub struct UserInfo {
    pub email: String,
    pub disabled: bool,
}

impl From<UserRecord> for UserInfo {
    fn from(user: UserRecord) -> Self {
        Self {
            email: user.email,
            disabled: user.disabled,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bearer_response_shape() {
        let response = TokenResponse::bearer("abc.def.ghi".to_string());
        assert_eq!(response.access_token, "abc.def.ghi");
        assert_eq!(response.token_type, "bearer");

        let json = serde_json::to_value(&response).unwrap();
        assert_eq!(json["token_type"], "bearer");
        assert_eq!(json["access_token"], "abc.def.ghi");
    }

    #[test]
    fn test_user_info_omits_password_hash() {
        let user = UserRecord {
            email: "alice@example.com".to_string(),
            password_hash: "$2b$12$secret".to_string(),
            disabled: false,
        };
        let info = UserInfo::from(user);
        let json = serde_json::to_string(&info).unwrap();

        assert!(json.contains("alice@example.com"));
        assert!(!json.contains("secret"));
    }
}
