//! Unified path management for triage data files.
//!
//! All persisted collections live under one base directory, which defaults
//! to the platform data directory and can be overridden for tests or
//! portable deployments.
//!
//! # Directory Structure
//!
//! ```text
//! <base>/                      # ~/.local/share/triage/ by default
//! ├── tasks/
//! │   ├── backlog.json         # shared backlog (local principal)
//! │   └── pending_proposals.json
//! └── users/
//!     └── <uid>/
//!         └── backlog.json     # per-user backlog
//! ```

use std::path::{Path, PathBuf};
use triage_core::{Result, TriageError};

/// Application directory name under the platform data dir.
const APP_DIR: &str = "triage";

/// Resolves the on-disk locations of the persisted collections.
#[derive(Debug, Clone)]
pub struct TriagePaths {
    base_dir: PathBuf,
}

impl TriagePaths {
    /// Creates a `TriagePaths` rooted at `base_dir`, or at the platform data
    /// directory when `None`.
    pub fn new(base_dir: Option<&Path>) -> Result<Self> {
        let base_dir = match base_dir {
            Some(dir) => dir.to_path_buf(),
            None => dirs::data_dir()
                .ok_or_else(|| TriageError::storage("cannot determine the data directory"))?
                .join(APP_DIR),
        };
        Ok(Self { base_dir })
    }

    pub fn base_dir(&self) -> &Path {
        &self.base_dir
    }

    /// Path of the shared backlog document used by the local principal.
    pub fn backlog_file(&self) -> PathBuf {
        self.base_dir.join("tasks").join("backlog.json")
    }

    /// Path of the proposal collection document.
    pub fn proposals_file(&self) -> PathBuf {
        self.base_dir.join("tasks").join("pending_proposals.json")
    }

    /// Path of an authenticated user's backlog document.
    ///
    /// The uid becomes a directory component, so it is restricted to a safe
    /// character set; anything else is rejected before it can escape the
    /// data directory.
    pub fn user_backlog_file(&self, uid: &str) -> Result<PathBuf> {
        if uid.is_empty()
            || !uid
                .bytes()
                .all(|b| b.is_ascii_alphanumeric() || b == b'-' || b == b'_')
        {
            return Err(TriageError::validation(
                "uid",
                "user id may only contain letters, digits, '-' and '_'",
            ));
        }
        Ok(self.base_dir.join("users").join(uid).join("backlog.json"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_explicit_base_dir() {
        let paths = TriagePaths::new(Some(Path::new("/tmp/triage-test"))).unwrap();
        assert_eq!(paths.base_dir(), Path::new("/tmp/triage-test"));
        assert!(paths.backlog_file().ends_with("tasks/backlog.json"));
        assert!(paths
            .proposals_file()
            .ends_with("tasks/pending_proposals.json"));
    }

    #[test]
    fn test_user_backlog_file() {
        let paths = TriagePaths::new(Some(Path::new("/tmp/triage-test"))).unwrap();
        let file = paths.user_backlog_file("alice-01").unwrap();
        assert!(file.ends_with("users/alice-01/backlog.json"));
    }

    #[test]
    fn test_rejects_unsafe_uids() {
        let paths = TriagePaths::new(Some(Path::new("/tmp/triage-test"))).unwrap();
        for uid in ["", "../evil", "a/b", "a b", "caf\u{e9}"] {
            let err = paths.user_backlog_file(uid).unwrap_err();
            assert!(err.is_validation(), "uid {uid:?} should be rejected");
        }
    }
}
