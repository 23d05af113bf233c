//! Configuration schema definitions

use crate::store::UserRecord;
use serde::{Deserialize, Serialize};

/// Main configuration structure
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub auth: AuthConfig,

    /// Users seeded into the credential store at startup
    #[serde(default)]
    pub users: Vec<UserRecord>,
}

/// Token signing configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuthConfig {
    /// HMAC secret the authority signs tokens with
    #[serde(default = "default_signing_key")]
    pub signing_key: String,

    /// Lifetime of issued tokens, in minutes
    #[serde(default = "default_token_ttl_minutes")]
    pub token_ttl_minutes: i64,
}

fn default_signing_key() -> String {
    "change-me-in-production".to_string()
}

fn default_token_ttl_minutes() -> i64 {
    30
}

impl Default for AuthConfig {
    fn default() -> Self {
        Self {
            signing_key: default_signing_key(),
            token_ttl_minutes: default_token_ttl_minutes(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = Config::default();
        assert_eq!(config.auth.signing_key, "change-me-in-production");
        assert_eq!(config.auth.token_ttl_minutes, 30);
        assert!(config.users.is_empty());
    }

    #[test]
    fn test_partial_config_fills_defaults() {
        let config: Config = toml::from_str(
            r#"
            [auth]
            signing_key = "s3cret"
            "#,
        )
        .unwrap();
        assert_eq!(config.auth.signing_key, "s3cret");
        assert_eq!(config.auth.token_ttl_minutes, 30);
    }

    #[test]
    fn test_users_parsed_from_config() {
        let config: Config = toml::from_str(
            r#"
            [[users]]
            email = "alice@example.com"
            password_hash = "$2b$12$hash"

            [[users]]
            email = "bob@example.com"
            password_hash = "$2b$12$hash"
            disabled = true
            "#,
        )
        .unwrap();
        assert_eq!(config.users.len(), 2);
        assert!(!config.users[0].disabled);
        assert!(config.users[1].disabled);
    }
}
