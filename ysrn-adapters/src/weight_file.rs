//! JsonWeightFile: constraint weights as a pretty-printed JSON file.
//!
//! Writes go to a sibling temp file first and are renamed into place, so a
//! reader never sees a half-written file.

use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use tracing::debug;

use ysrn_core::errors::YsrnResult;
use ysrn_core::models::WeightState;
use ysrn_core::traits::IWeightPersistence;

#[derive(Debug, Clone)]
pub struct JsonWeightFile {
    path: PathBuf,
}

impl JsonWeightFile {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn temp_path(&self) -> PathBuf {
        let mut name = self
            .path
            .file_name()
            .map(|n| n.to_os_string())
            .unwrap_or_default();
        name.push(".tmp");
        self.path.with_file_name(name)
    }
}

impl IWeightPersistence for JsonWeightFile {
    fn save_weights(&self, state: &WeightState) -> YsrnResult<()> {
        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent)?;
        }
        let json = serde_json::to_string_pretty(state)?;
        let tmp = self.temp_path();
        fs::write(&tmp, json)?;
        fs::rename(&tmp, &self.path)?;
        debug!(path = %self.path.display(), constraints = state.constraints.len(), "weights saved");
        Ok(())
    }

    fn load_weights(&self) -> YsrnResult<Option<WeightState>> {
        let content = match fs::read_to_string(&self.path) {
            Ok(c) => c,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(None),
            Err(e) => return Err(e.into()),
        };
        Ok(Some(serde_json::from_str(&content)?))
    }
}
