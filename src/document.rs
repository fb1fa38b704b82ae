use serde_json::Value;
use std::ffi::OsString;
use std::path::{Path, PathBuf};
use tokio::fs;
use tracing::debug;

use crate::error::{ArchiveError, Result};

/// The archive's JSON document: a `meta` object plus a `recipes` array.
///
/// Held as a raw `serde_json::Value` so hand-curated records with odd or
/// missing fields still load, and so unknown fields survive a rewrite in
/// their original order.
#[derive(Debug, Clone, PartialEq)]
pub struct RecipeDocument {
    root: Value,
}

impl RecipeDocument {
    pub fn from_value(root: Value) -> Self {
        Self { root }
    }

    pub async fn load(path: &Path) -> Result<Self> {
        let bytes = match fs::read(path).await {
            Ok(bytes) => bytes,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                return Err(ArchiveError::DocumentNotFound(path.to_path_buf()));
            }
            Err(source) => {
                return Err(ArchiveError::Io {
                    path: path.to_path_buf(),
                    source,
                });
            }
        };
        let root = serde_json::from_slice(&bytes).map_err(|source| ArchiveError::InvalidJson {
            path: path.to_path_buf(),
            source,
        })?;
        debug!("Loaded recipe document from {:?}", path);
        Ok(Self { root })
    }

    /// Writes the whole document, two-space indented, via a sibling temp
    /// file and a rename so readers never see a half-written archive.
    pub async fn save(&self, path: &Path) -> Result<()> {
        let mut text = serde_json::to_string_pretty(&self.root).map_err(|source| {
            ArchiveError::InvalidJson {
                path: path.to_path_buf(),
                source,
            }
        })?;
        text.push('\n');

        let tmp_path = temp_path_for(path);
        let io_err = |source| ArchiveError::Io {
            path: path.to_path_buf(),
            source,
        };
        fs::write(&tmp_path, text).await.map_err(io_err)?;
        fs::rename(&tmp_path, path).await.map_err(io_err)?;
        debug!("Saved recipe document to {:?}", path);
        Ok(())
    }

    pub fn root(&self) -> &Value {
        &self.root
    }

    pub fn meta(&self) -> Option<&Value> {
        self.root.get("meta")
    }

    /// The `recipes` array, if the document has one.
    pub fn recipes(&self) -> Option<&Vec<Value>> {
        self.root.get("recipes").and_then(Value::as_array)
    }

    pub fn recipes_mut(&mut self) -> Result<&mut Vec<Value>> {
        self.root
            .get_mut("recipes")
            .and_then(Value::as_array_mut)
            .ok_or(ArchiveError::MissingRecipes)
    }

    pub fn recipe_count(&self) -> usize {
        self.recipes().map_or(0, Vec::len)
    }
}

fn temp_path_for(path: &Path) -> PathBuf {
    let mut name = path
        .file_name()
        .map(OsString::from)
        .unwrap_or_else(|| OsString::from("recipes.json"));
    name.push(".tmp");
    path.with_file_name(name)
}
