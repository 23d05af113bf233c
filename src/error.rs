//! Error types for Keygate

use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Config file not found. Run 'keygate init' first.")]
    ConfigNotFound,

    #[error("Incorrect email or password")]
    InvalidCredentials,

    #[error("Token has expired")]
    TokenExpired,

    #[error("Invalid token")]
    TokenMalformed,

    #[error("User not found")]
    UnknownSubject,

    #[error("Password hashing error: {0}")]
    Hash(#[from] bcrypt::BcryptError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("TOML parse error: {0}")]
    TomlParse(#[from] toml::de::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("{0}")]
    Other(String),
}

impl Error {
    /// Whether this failure maps to an HTTP 401 at the caller's boundary.
    ///
    /// Everything else is an operational error (bad config, IO) and should
    /// surface as a 5xx or a CLI failure instead.
    pub fn is_unauthorized(&self) -> bool {
        matches!(
            self,
            Error::InvalidCredentials
                | Error::TokenExpired
                | Error::TokenMalformed
                | Error::UnknownSubject
        )
    }
}

impl From<anyhow::Error> for Error {
    fn from(err: anyhow::Error) -> Self {
        Error::Other(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_auth_failures_are_unauthorized() {
        assert!(Error::InvalidCredentials.is_unauthorized());
        assert!(Error::TokenExpired.is_unauthorized());
        assert!(Error::TokenMalformed.is_unauthorized());
        assert!(Error::UnknownSubject.is_unauthorized());
    }

    #[test]
    fn test_operational_failures_are_not_unauthorized() {
        assert!(!Error::ConfigNotFound.is_unauthorized());
        assert!(!Error::Config("bad".to_string()).is_unauthorized());
    }
}
