use serde::Deserialize;
use std::path::{Path, PathBuf};

pub const DEFAULT_DATASET_DIR: &str = "datasets";

#[derive(Debug, Deserialize, PartialEq, Clone, serde::Serialize)]
pub struct PathsConfig {
    pub dataset_dir: PathBuf,
    /// Reports are also written here when set.
    pub output: Option<PathBuf>,
}

impl PathsConfig {
    pub fn resolve_dataset(&self, dataset: &Path) -> PathBuf {
        if dataset.is_absolute() {
            dataset.to_path_buf()
        } else {
            self.dataset_dir.join(dataset)
        }
    }
}

impl Default for PathsConfig {
    fn default() -> Self {
        Self {
            dataset_dir: PathBuf::from(DEFAULT_DATASET_DIR),
            output: None,
        }
    }
}
