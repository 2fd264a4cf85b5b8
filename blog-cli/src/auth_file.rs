use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use blog_composer::{AuthRecord, AuthStore, ComposerError, ComposerResult, parse_auth_record};
use tracing::debug;

/// Запись авторизации в JSON-файле; для CLI это аналог `localStorage`.
#[derive(Debug, Clone)]
pub struct FileAuthStore {
    path: PathBuf,
}

impl FileAuthStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn save(&self, record: &AuthRecord) -> ComposerResult<()> {
        let raw = serde_json::to_string(record)?;
        fs::write(&self.path, raw).map_err(|err| {
            ComposerError::Storage(format!("failed to write {}: {err}", self.path.display()))
        })
    }
}

impl AuthStore for FileAuthStore {
    fn current_user(&self) -> Option<AuthRecord> {
        match fs::read_to_string(&self.path) {
            Ok(raw) => parse_auth_record(&raw),
            Err(err) if err.kind() == io::ErrorKind::NotFound => None,
            Err(err) => {
                debug!(path = %self.path.display(), error = %err, "auth record is unreadable");
                None
            }
        }
    }

    fn clear_current_user(&self) -> ComposerResult<()> {
        match fs::remove_file(&self.path) {
            Ok(()) => Ok(()),
            Err(err) if err.kind() == io::ErrorKind::NotFound => Ok(()),
            Err(err) => Err(ComposerError::Storage(format!(
                "failed to remove {}: {err}",
                self.path.display()
            ))),
        }
    }
}

#[cfg(test)]
mod tests {
    use std::time::{SystemTime, UNIX_EPOCH};

    use blog_composer::resolve_author;

    use super::*;

    fn temp_store() -> FileAuthStore {
        let nanos = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .expect("system clock must be after unix epoch")
            .as_nanos();
        FileAuthStore::new(std::env::temp_dir().join(format!("blog_cli_auth_{nanos}.json")))
    }

    #[test]
    fn missing_file_resolves_to_default_author() {
        let store = temp_store();
        assert!(store.current_user().is_none());
        assert_eq!(resolve_author(&store, "User"), "User");
    }

    #[test]
    fn saved_record_is_read_back() {
        let store = temp_store();
        store
            .save(&AuthRecord::with_username("alice"))
            .expect("save must succeed");

        assert_eq!(resolve_author(&store, "User"), "alice");
        store.clear_current_user().expect("clear must succeed");
    }

    #[test]
    fn malformed_file_is_ignored() {
        let store = temp_store();
        fs::write(store.path(), "{oops").expect("write temp file");

        assert_eq!(resolve_author(&store, "User"), "User");
        store.clear_current_user().expect("clear must succeed");
    }

    #[test]
    fn clear_is_idempotent() {
        let store = temp_store();
        store
            .save(&AuthRecord::with_username("bob"))
            .expect("save must succeed");

        store.clear_current_user().expect("first clear");
        store.clear_current_user().expect("second clear");
        assert!(!store.path().exists());
    }
}
