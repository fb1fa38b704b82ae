use std::env;
use std::path::{Path, PathBuf};

/// Environment variable naming the archive's data directory.
pub const DATA_DIR_ENV_VAR: &str = "RECIPE_ARCHIVE_DATA_DIR";
const DEFAULT_DATA_DIR: &str = "data";

/// Document the validator checks unless told otherwise.
pub const MASTER_DOCUMENT: &str = "recipes_master.json";
/// Document the estimator rewrites unless told otherwise.
pub const PUBLISHED_DOCUMENT: &str = "recipes.json";

/// Where the archive lives on disk.
///
/// `data_dir` doubles as the root that `image_refs` are resolved against.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArchiveConfig {
    pub data_dir: PathBuf,
    pub document_path: PathBuf,
}

impl ArchiveConfig {
    /// Resolves the data directory and document path.
    ///
    /// Precedence: explicit CLI value, then `RECIPE_ARCHIVE_DATA_DIR` (a `.env`
    /// file is honoured), then `./data`. The document defaults to
    /// `default_document` inside the data directory.
    pub fn resolve(
        data_dir_override: Option<&Path>,
        document_override: Option<&Path>,
        default_document: &str,
    ) -> Self {
        dotenv::dotenv().ok();

        let data_dir = match data_dir_override {
            Some(dir) => dir.to_path_buf(),
            None => env::var(DATA_DIR_ENV_VAR)
                .map(PathBuf::from)
                .unwrap_or_else(|_| PathBuf::from(DEFAULT_DATA_DIR)),
        };
        let document_path = document_override
            .map(Path::to_path_buf)
            .unwrap_or_else(|| data_dir.join(default_document));

        Self {
            data_dir,
            document_path,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_explicit_overrides_win() {
        let config = ArchiveConfig::resolve(
            Some(Path::new("/srv/archive")),
            Some(Path::new("/tmp/other.json")),
            MASTER_DOCUMENT,
        );
        assert_eq!(config.data_dir, PathBuf::from("/srv/archive"));
        assert_eq!(config.document_path, PathBuf::from("/tmp/other.json"));
    }

    #[test]
    fn test_document_defaults_inside_data_dir() {
        let config =
            ArchiveConfig::resolve(Some(Path::new("/srv/archive")), None, PUBLISHED_DOCUMENT);
        assert_eq!(
            config.document_path,
            PathBuf::from("/srv/archive").join("recipes.json")
        );
    }
}
