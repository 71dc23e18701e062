use std::path::{Path, PathBuf};

use crate::domain::AppError;

/// Port for persisting run artifacts.
pub trait ArtifactStore {
    /// Write `contents` at `relative` (below the store root), creating parent
    /// directories as needed. Returns the path that was written.
    fn write_artifact(&self, relative: &Path, contents: &[u8]) -> Result<PathBuf, AppError>;
}
