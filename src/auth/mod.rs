//! Authentication core: credential checks and signed access tokens

pub mod authority;
pub mod claims;
pub mod models;

pub use authority::{extract_bearer, TokenAuthority};
pub use claims::Claims;
pub use models::{LoginRequest, TokenResponse, UserInfo};
