//! Caller identity.
//!
//! The principal is always passed explicitly into store and service
//! operations. It selects the storage backend: anonymous callers share the
//! local file, authenticated callers get a per-user document.

use serde::{Deserialize, Serialize};

/// The resolved identity of the caller.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Principal {
    /// Anonymous caller. Data lives in the shared local backlog file.
    Local,
    /// Authenticated caller. Data lives under the user's own document.
    User { uid: String },
}

impl Principal {
    /// Creates an authenticated principal for the given user id.
    pub fn user(uid: impl Into<String>) -> Self {
        Self::User { uid: uid.into() }
    }

    /// Returns the user id, or `None` for the local principal.
    pub fn uid(&self) -> Option<&str> {
        match self {
            Self::Local => None,
            Self::User { uid } => Some(uid),
        }
    }

    pub fn is_local(&self) -> bool {
        matches!(self, Self::Local)
    }
}

impl Default for Principal {
    fn default() -> Self {
        Self::Local
    }
}
