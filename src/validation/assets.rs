use std::collections::HashSet;
use std::path::PathBuf;

/// Answers whether a referenced asset (image, scanned PDF) is present.
pub trait AssetStore {
    fn exists(&self, relative_path: &str) -> bool;
}

/// Assets on disk, relative to the archive's data directory.
#[derive(Debug, Clone)]
pub struct DirectoryAssets {
    root: PathBuf,
}

impl DirectoryAssets {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }
}

impl AssetStore for DirectoryAssets {
    fn exists(&self, relative_path: &str) -> bool {
        self.root.join(relative_path).exists()
    }
}

/// A fixed set of known asset paths.
impl AssetStore for HashSet<String> {
    fn exists(&self, relative_path: &str) -> bool {
        self.contains(relative_path)
    }
}
