//! Credential checks and token issuance/verification

use crate::auth::claims::Claims;
use crate::auth::models::TokenResponse;
use crate::config::AuthConfig;
use crate::error::{Error, Result};
use crate::store::{CredentialStore, UserRecord};
use jsonwebtoken::{
    decode, encode, errors::ErrorKind, DecodingKey, EncodingKey, Header, Validation,
};
use tracing::debug;

/// Issues and verifies access tokens against a credential store.
///
/// Holds the signing key and default TTL for its whole lifetime; every
/// operation is a pure function of the token, the store, and the clock.
pub struct TokenAuthority<S> {
    store: S,
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    validation: Validation,
    default_ttl: chrono::Duration,
}

impl<S: CredentialStore> TokenAuthority<S> {
    /// Create an authority from a store and signing configuration
    pub fn new(store: S, config: &AuthConfig) -> Self {
        let mut validation = Validation::default();
        // Tokens are invalid the second they expire, no grace window.
        validation.leeway = 0;

        Self {
            store,
            encoding_key: EncodingKey::from_secret(config.signing_key.as_bytes()),
            decoding_key: DecodingKey::from_secret(config.signing_key.as_bytes()),
            validation,
            default_ttl: chrono::Duration::minutes(config.token_ttl_minutes),
        }
    }

    /// Check a password against the stored digest.
    ///
    /// Unknown users, wrong passwords, and disabled accounts all fail with
    /// `Error::InvalidCredentials`, so a caller cannot probe which accounts
    /// exist or which of them are disabled.
    pub fn authenticate(&self, email: &str, password: &str) -> Result<UserRecord> {
        let Some(user) = self.store.lookup(email) else {
            return Err(Error::InvalidCredentials);
        };

        // bcrypt compares digests in constant time.
        if !bcrypt::verify(password, &user.password_hash)? {
            return Err(Error::InvalidCredentials);
        }

        if user.disabled {
            return Err(Error::InvalidCredentials);
        }

        debug!("Authenticated {}", user.email);
        Ok(user)
    }

    /// Issue a signed token for a subject using the configured TTL
    pub fn issue_token(&self, email: &str) -> Result<String> {
        self.issue_token_with_ttl(email, self.default_ttl)
    }

    /// Issue a signed token with an explicit TTL.
    ///
    /// Issuance does not consult the store; callers that need the existence
    /// check run `authenticate` first (or use `login`).
    pub fn issue_token_with_ttl(&self, email: &str, ttl: chrono::Duration) -> Result<String> {
        let claims = Claims::new(email, ttl);

        debug!("Issuing token for {}, expires at {}", email, claims.exp);

        encode(&Header::default(), &claims, &self.encoding_key)
            .map_err(|e| Error::Config(format!("Failed to sign token: {}", e)))
    }

    /// Decode a token, check its signature and expiry, and re-resolve the
    /// subject in the store.
    ///
    /// The record comes back fresh from the store, never from the token, so
    /// an account disabled or removed after issuance stops working even
    /// while its token is unexpired. Disabled and removed accounts are
    /// rejected with the same error.
    pub fn verify_token(&self, token: &str) -> Result<UserRecord> {
        let data =
            decode::<Claims>(token, &self.decoding_key, &self.validation).map_err(|e| {
                match e.kind() {
                    ErrorKind::ExpiredSignature => Error::TokenExpired,
                    _ => Error::TokenMalformed,
                }
            })?;

        let Some(user) = self.store.lookup(&data.claims.sub) else {
            return Err(Error::UnknownSubject);
        };

        if user.disabled {
            return Err(Error::UnknownSubject);
        }

        debug!("Verified token for {}", user.email);
        Ok(user)
    }

    /// Authenticate and issue in one step, as a login endpoint would
    pub fn login(&self, email: &str, password: &str) -> Result<TokenResponse> {
        let user = self.authenticate(email, password)?;
        let token = self.issue_token(&user.email)?;
        Ok(TokenResponse::bearer(token))
    }
}

/// Strip the `Bearer ` scheme prefix from an Authorization header value
pub fn extract_bearer(header_value: &str) -> Option<&str> {
    header_value.strip_prefix("Bearer ")
}
