//! Collaborator identity records.

use serde::{Deserialize, Serialize};

use crate::department::Department;
use crate::id::UserId;

/// Stored password hash in PHC string form.
///
/// Opaque at this layer: the hashing algorithm is a capability of the
/// credential verifier, and nothing here inspects the contents. `Debug`
/// never prints the hash.
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PasswordHash(String);

impl PasswordHash {
    pub fn new(hash: impl Into<String>) -> Self {
        Self(hash.into())
    }

    /// The stored hash string, for verifier implementations only.
    pub fn expose(&self) -> &str {
        &self.0
    }
}

impl core::fmt::Debug for PasswordHash {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str("PasswordHash(***)")
    }
}

/// A collaborator identity.
///
/// Created and mutated by management-department actions only; an identity
/// never changes its own department (only management holds user mutations in
/// the permission matrix).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Identity {
    pub id: UserId,
    pub full_name: String,
    /// Unique; looked up with a case-sensitive exact match.
    pub email: String,
    pub password_hash: PasswordHash,
    pub department: Department,
}
