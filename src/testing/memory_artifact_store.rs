use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};

use serde_json::Value;

use crate::domain::AppError;
use crate::ports::ArtifactStore;

/// In-memory artifact store keyed by relative path.
#[derive(Clone, Default)]
pub struct MemoryArtifactStore {
    files: Arc<Mutex<BTreeMap<PathBuf, Vec<u8>>>>,
}

impl MemoryArtifactStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn paths(&self) -> Vec<PathBuf> {
        self.files.lock().unwrap().keys().cloned().collect()
    }

    pub fn bytes(&self, path: &str) -> Option<Vec<u8>> {
        self.files.lock().unwrap().get(Path::new(path)).cloned()
    }

    pub fn json(&self, path: &str) -> Value {
        let bytes = self.bytes(path).unwrap_or_else(|| panic!("artifact {} not written", path));
        serde_json::from_slice(&bytes).unwrap()
    }
}

impl ArtifactStore for MemoryArtifactStore {
    fn write_artifact(&self, relative: &Path, contents: &[u8]) -> Result<PathBuf, AppError> {
        self.files.lock().unwrap().insert(relative.to_path_buf(), contents.to_vec());
        Ok(relative.to_path_buf())
    }
}
