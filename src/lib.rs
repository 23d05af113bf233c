//! Keygate - password login and JWT issuance for small services
//!
//! This is the library interface for Keygate, exposing the credential
//! store and token authority so a host process (an HTTP layer, a job
//! runner) can embed them directly.

pub mod auth;
pub mod cli;
pub mod config;
pub mod error;
pub mod store;

pub use auth::TokenAuthority;
pub use config::Config;
pub use error::Error;
pub use store::{CredentialStore, MemoryStore, UserRecord};
