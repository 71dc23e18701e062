use std::fs;
use std::path::{Path, PathBuf};

use crate::domain::AppError;
use crate::ports::ArtifactStore;

/// Filesystem-based artifact store rooted at an output directory.
#[derive(Debug, Clone)]
pub struct FilesystemArtifactStore {
    root: PathBuf,
}

impl FilesystemArtifactStore {
    /// Create an artifact store for the given root directory.
    pub fn new(root: PathBuf) -> Self {
        Self { root }
    }

    /// Artifacts under the current directory keep their relative path.
    fn resolve(&self, relative: &Path) -> PathBuf {
        if self.root.as_os_str().is_empty() || self.root == Path::new(".") {
            relative.to_path_buf()
        } else {
            self.root.join(relative)
        }
    }
}

impl ArtifactStore for FilesystemArtifactStore {
    fn write_artifact(&self, relative: &Path, contents: &[u8]) -> Result<PathBuf, AppError> {
        let path = self.resolve(relative);
        if let Some(parent) = path.parent()
            && !parent.as_os_str().is_empty()
        {
            fs::create_dir_all(parent)?;
        }
        fs::write(&path, contents)?;
        tracing::debug!(path = %path.display(), bytes = contents.len(), "wrote artifact");
        Ok(path)
    }
}
