use crate::types::Result;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;

/// The durable record of item identifiers already delivered.
///
/// Serialized as a flat JSON object mapping identifier to `true`. The set
/// grows for the life of the deployment; identifiers are short strings, so
/// no eviction is done.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SeenSet(HashMap<String, bool>);

impl SeenSet {
    pub fn contains(&self, id: &str) -> bool {
        self.0.contains_key(id)
    }

    /// Record an identifier as delivered. Idempotent.
    pub fn mark(&mut self, id: &str) {
        self.0.insert(id.to_string(), true);
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

/// File-backed storage for the [`SeenSet`].
///
/// One file, rewritten in full after every run. A corrupt or unreadable file
/// is surfaced as an error rather than silently reset: resetting would
/// re-post every feed's recent history on the next run.
pub struct SeenStore {
    path: PathBuf,
}

impl SeenStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Create an empty persisted record on first-ever startup.
    pub fn init(&self) -> Result<()> {
        if !self.path.exists() {
            debug!("creating empty seen store at {}", self.path.display());
            write_atomic(&self.path, b"{}")?;
        }
        Ok(())
    }

    /// Read the full persisted set.
    pub fn load(&self) -> Result<SeenSet> {
        let raw = fs::read(&self.path)?;
        let seen = serde_json::from_slice(&raw)?;
        Ok(seen)
    }

    /// Overwrite the persisted state with the full current set.
    pub fn save(&self, seen: &SeenSet) -> Result<()> {
        let raw = serde_json::to_vec(seen)?;
        write_atomic(&self.path, &raw)?;
        debug!("persisted {} seen identifiers", seen.len());
        Ok(())
    }
}

/// Write via a sibling temp file and rename, so a crash mid-write never
/// leaves a truncated store behind.
fn write_atomic(path: &Path, contents: &[u8]) -> std::io::Result<()> {
    let tmp = path.with_extension("tmp");
    fs::write(&tmp, contents)?;
    fs::rename(&tmp, path)
}
