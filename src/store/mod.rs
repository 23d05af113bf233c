//! Credential storage

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// A registered user account
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserRecord {
    /// Email address, also the login identifier
    pub email: String,
    /// Bcrypt digest of the user's password
    pub password_hash: String,
    /// Disabled accounts cannot log in or present tokens
    #[serde(default)]
    pub disabled: bool,
}

/// Read-only lookup into the set of known users.
///
/// The token authority only ever reads through this trait, so a database
/// or directory-backed store can be swapped in without touching it.
pub trait CredentialStore {
    /// Fetch a user by email. Returns `None` for unknown users.
    fn lookup(&self, email: &str) -> Option<UserRecord>;
}

/// In-memory store seeded once at startup
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    users: HashMap<String, UserRecord>,
}

impl MemoryStore {
    /// Create an empty store
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a store from configured user records
    pub fn from_records(records: impl IntoIterator<Item = UserRecord>) -> Self {
        let users = records
            .into_iter()
            .map(|record| (record.email.clone(), record))
            .collect();
        Self { users }
    }

    /// Add a record, replacing any existing record with the same email
    pub fn insert(&mut self, record: UserRecord) {
        self.users.insert(record.email.clone(), record);
    }

    /// Number of registered users
    pub fn len(&self) -> usize {
        self.users.len()
    }

    /// Whether the store has no users
    pub fn is_empty(&self) -> bool {
        self.users.is_empty()
    }

    /// Iterate over all records, in no particular order
    pub fn iter(&self) -> impl Iterator<Item = &UserRecord> {
        self.users.values()
    }
}

impl CredentialStore for MemoryStore {
    fn lookup(&self, email: &str) -> Option<UserRecord> {
        self.users.get(email).cloned()
    }
}
