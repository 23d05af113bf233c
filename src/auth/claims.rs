//! JWT claim set

use serde::{Deserialize, Serialize};

/// Claims carried inside an access token
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct Claims {
    /// Subject (the user's email)
    pub sub: String,
    /// Issued at (unix seconds)
    pub iat: i64,
    /// Expiration time (unix seconds)
    pub exp: i64,
}

impl Claims {
    /// Create claims for a subject, expiring `ttl` from now
    pub fn new(subject: &str, ttl: chrono::Duration) -> Self {
        let now = chrono::Utc::now().timestamp();
        Self {
            sub: subject.to_string(),
            iat: now,
            exp: now + ttl.num_seconds(),
        }
    }

    /// Check if the claim set is past its expiry
    pub fn is_expired(&self) -> bool {
        chrono::Utc::now().timestamp() >= self.exp
    }
}
