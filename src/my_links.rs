//! Advisory record of short codes created from this machine
//!
//! A plain JSON array on disk, loaded into a set. This is a convenience
//! marker for the list view ("mine" column) and the `mine` CLI command, never
//! a source of truth: the backend can delete or expire codes without this
//! file noticing. A missing or corrupt file degrades to the empty set.

use std::collections::BTreeSet;
use std::fs;
use std::path::{Path, PathBuf};

use tracing::warn;

use crate::errors::ConsoleError;

#[derive(Debug, Clone)]
pub struct MyLinks {
    path: PathBuf,
    codes: BTreeSet<String>,
}

impl MyLinks {
    /// Load the advisory set from `path`. Read or parse failures are logged
    /// and treated as "nothing recorded yet".
    pub fn load(path: impl AsRef<Path>) -> Self {
        let path = path.as_ref().to_path_buf();
        let codes = match fs::read_to_string(&path) {
            Ok(raw) => match serde_json::from_str::<BTreeSet<String>>(&raw) {
                Ok(codes) => codes,
                Err(err) => {
                    warn!("Ignoring unreadable advisory list {}: {}", path.display(), err);
                    BTreeSet::new()
                }
            },
            Err(_) => BTreeSet::new(),
        };
        MyLinks { path, codes }
    }

    pub fn contains(&self, code: &str) -> bool {
        self.codes.contains(code)
    }

    pub fn len(&self) -> usize {
        self.codes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.codes.is_empty()
    }

    pub fn codes(&self) -> impl Iterator<Item = &str> {
        self.codes.iter().map(String::as_str)
    }

    /// Record a freshly created code. Set-idempotent: recording the same code
    /// twice keeps a single entry. Returns whether the code was new.
    pub fn record(&mut self, code: &str) -> Result<bool, ConsoleError> {
        let added = self.codes.insert(code.to_string());
        if added {
            self.save()?;
        }
        Ok(added)
    }

    pub fn forget(&mut self, code: &str) -> Result<bool, ConsoleError> {
        let removed = self.codes.remove(code);
        if removed {
            self.save()?;
        }
        Ok(removed)
    }

    pub fn clear(&mut self) -> Result<(), ConsoleError> {
        self.codes.clear();
        self.save()
    }

    /// Drop every recorded code the authoritative list no longer knows about.
    /// Returns how many entries were pruned.
    pub fn resync<'a, I>(&mut self, server_codes: I) -> Result<usize, ConsoleError>
    where
        I: IntoIterator<Item = &'a str>,
    {
        let server: BTreeSet<&str> = server_codes.into_iter().collect();
        let before = self.codes.len();
        self.codes.retain(|code| server.contains(code.as_str()));
        let pruned = before - self.codes.len();
        if pruned > 0 {
            self.save()?;
        }
        Ok(pruned)
    }

    fn save(&self) -> Result<(), ConsoleError> {
        if let Some(parent) = self.path.parent()
            && !parent.as_os_str().is_empty()
        {
            fs::create_dir_all(parent)?;
        }
        let raw = serde_json::to_string_pretty(&self.codes)?;
        fs::write(&self.path, raw)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn list_in(dir: &TempDir) -> MyLinks {
        MyLinks::load(dir.path().join("my_links.json"))
    }

    #[test]
    fn missing_file_is_empty_set() {
        let dir = TempDir::new().unwrap();
        let links = list_in(&dir);
        assert!(links.is_empty());
    }

    #[test]
    fn record_is_idempotent() {
        let dir = TempDir::new().unwrap();
        let mut links = list_in(&dir);

        assert!(links.record("abc123").unwrap());
        assert!(!links.record("abc123").unwrap());
        assert_eq!(links.len(), 1);
        assert!(links.contains("abc123"));
    }

    #[test]
    fn survives_reload() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("my_links.json");

        let mut links = MyLinks::load(&path);
        links.record("abc123").unwrap();
        links.record("golang").unwrap();

        let reloaded = MyLinks::load(&path);
        assert_eq!(reloaded.len(), 2);
        assert!(reloaded.contains("golang"));
    }

    #[test]
    fn corrupt_file_degrades_to_empty() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("my_links.json");
        fs::write(&path, "{not json").unwrap();

        let links = MyLinks::load(&path);
        assert!(links.is_empty());
    }

    #[test]
    fn resync_prunes_codes_unknown_to_server() {
        let dir = TempDir::new().unwrap();
        let mut links = list_in(&dir);
        links.record("keep").unwrap();
        links.record("gone").unwrap();

        let pruned = links.resync(["keep", "other"]).unwrap();
        assert_eq!(pruned, 1);
        assert!(links.contains("keep"));
        assert!(!links.contains("gone"));
    }

    #[test]
    fn clear_empties_and_persists() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("my_links.json");
        let mut links = MyLinks::load(&path);
        links.record("abc123").unwrap();
        links.clear().unwrap();

        assert!(links.is_empty());
        assert!(MyLinks::load(&path).is_empty());
    }
}
