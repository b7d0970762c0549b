use std::{collections::HashMap, path::PathBuf, sync::Arc};

use anyhow::{anyhow, Context, Result};

/// Read-only access to bundled data files by relative name, e.g.
/// "locations.csv", "shelters.json", "earthquakes.json".
pub trait DataSource: Send + Sync {
    fn get(&self, rel: &str) -> Result<Arc<[u8]>>;
    fn has(&self, rel: &str) -> bool;
}

/// Data directory on disk.
#[derive(Debug, Clone)]
pub struct DiskSource {
    root: PathBuf,
}

impl DiskSource {
    pub fn new(root: impl Into<PathBuf>) -> Self { Self { root: root.into() } }

    fn full(&self, rel: &str) -> PathBuf { self.root.join(rel) }
}

impl DataSource for DiskSource {
    fn get(&self, rel: &str) -> Result<Arc<[u8]>> {
        let path = self.full(rel);
        let bytes = std::fs::read(&path)
            .with_context(|| format!("[data::source] Failed to read {}", path.display()))?;
        Ok(Arc::from(bytes))
    }

    fn has(&self, rel: &str) -> bool { self.full(rel).is_file() }
}

/// In-memory data files, keyed by relative name.
/// Used by the browser build, where the page fetches the bundled files itself.
#[derive(Debug, Default, Clone)]
pub struct MemSource {
    files: HashMap<String, Arc<[u8]>>,
}

impl MemSource {
    pub fn new(files: HashMap<String, Arc<[u8]>>) -> Self { Self { files } }

    /// Insert (or replace) a file.
    pub fn insert(&mut self, rel: impl Into<String>, bytes: impl Into<Arc<[u8]>>) {
        self.files.insert(rel.into(), bytes.into());
    }

    /// Builder-style variant of `insert`.
    pub fn with(mut self, rel: impl Into<String>, bytes: impl Into<Arc<[u8]>>) -> Self {
        self.insert(rel, bytes);
        self
    }
}

impl DataSource for MemSource {
    fn get(&self, rel: &str) -> Result<Arc<[u8]>> {
        self.files.get(rel).cloned()
            .ok_or_else(|| anyhow!("[data::source] missing data file: {rel}"))
    }

    fn has(&self, rel: &str) -> bool { self.files.contains_key(rel) }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mem_source_get_and_has() {
        let src = MemSource::default().with("shelters.json", b"[]".as_slice());
        assert!(src.has("shelters.json"));
        assert!(!src.has("earthquakes.json"));
        assert_eq!(&*src.get("shelters.json").unwrap(), b"[]");
        assert!(src.get("earthquakes.json").is_err());
    }

    #[test]
    fn disk_source_reads_relative_to_root() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("locations.csv"), "Province,City,Latitude,Longitude\n").unwrap();

        let src = DiskSource::new(dir.path());
        assert!(src.has("locations.csv"));
        assert!(!src.has("missing.csv"));
        assert!(src.get("locations.csv").unwrap().starts_with(b"Province"));

        let err = src.get("missing.csv").unwrap_err();
        assert!(err.to_string().contains("missing.csv"));
    }
}
