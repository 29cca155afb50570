//! Small string key-value stores used to keep the best score between runs.

use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use tracing::warn;

pub trait KeyValueStore {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&mut self, key: &str, value: &str) -> Result<()>;
}

/// Store that forgets everything when dropped
#[derive(Debug, Default, Clone)]
pub struct MemoryStore {
    entries: BTreeMap<String, String>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Option<String> {
        self.entries.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: &str) -> Result<()> {
        self.entries.insert(key.to_string(), value.to_string());
        Ok(())
    }
}

/// Store kept as a flat JSON object on disk, rewritten on every `set`.
#[derive(Debug)]
pub struct JsonFileStore {
    path: PathBuf,
    entries: BTreeMap<String, String>,
}

impl JsonFileStore {
    /// Opens the store at `path`. A missing file is an empty store; an
    /// unreadable or malformed one is logged and also treated as empty.
    pub fn open(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let entries = match Self::load(&path) {
            Ok(entries) => entries,
            Err(error) => {
                warn!(path = %path.display(), error = %format!("{error:#}"), "store_unreadable");
                BTreeMap::new()
            }
        };
        Self { path, entries }
    }

    fn load(path: &Path) -> Result<BTreeMap<String, String>> {
        if !path.exists() {
            return Ok(BTreeMap::new());
        }
        let text = fs::read_to_string(path)
            .with_context(|| format!("Failed to read {}", path.display()))?;
        serde_json::from_str(&text).with_context(|| format!("Malformed store {}", path.display()))
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl KeyValueStore for JsonFileStore {
    fn get(&self, key: &str) -> Option<String> {
        self.entries.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: &str) -> Result<()> {
        self.entries.insert(key.to_string(), value.to_string());

        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create {}", parent.display()))?;
        }
        let text = serde_json::to_string_pretty(&self.entries).context("Failed to encode store")?;
        fs::write(&self.path, text)
            .with_context(|| format!("Failed to write {}", self.path.display()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};

    fn scratch_path(name: &str) -> PathBuf {
        static COUNTER: AtomicUsize = AtomicUsize::new(0);
        let n = COUNTER.fetch_add(1, Ordering::Relaxed);
        std::env::temp_dir().join(format!(
            "torus_snake_{}_{}_{}.json",
            name,
            std::process::id(),
            n
        ))
    }

    #[test]
    fn test_memory_store() {
        let mut store = MemoryStore::new();
        assert_eq!(store.get("bestScore"), None);
        store.set("bestScore", "4").unwrap();
        assert_eq!(store.get("bestScore").as_deref(), Some("4"));
    }

    #[test]
    fn test_file_store_persists_between_opens() {
        let path = scratch_path("persist");
        {
            let mut store = JsonFileStore::open(&path);
            assert_eq!(store.path(), path.as_path());
            assert_eq!(store.get("bestScore"), None);
            store.set("bestScore", "12").unwrap();
        }

        let store = JsonFileStore::open(&path);
        assert_eq!(store.get("bestScore").as_deref(), Some("12"));
        fs::remove_file(&path).unwrap();
    }

    #[test]
    fn test_file_store_ignores_corrupt_file() {
        let path = scratch_path("corrupt");
        fs::write(&path, "not json at all").unwrap();

        let mut store = JsonFileStore::open(&path);
        assert_eq!(store.get("bestScore"), None);

        store.set("bestScore", "1").unwrap();
        let reopened = JsonFileStore::open(&path);
        assert_eq!(reopened.get("bestScore").as_deref(), Some("1"));
        fs::remove_file(&path).unwrap();
    }
}
