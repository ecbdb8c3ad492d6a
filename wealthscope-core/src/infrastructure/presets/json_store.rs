// wealthscope-core/src/infrastructure/presets/json_store.rs

use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use tracing::{debug, instrument};

use crate::domain::presets::{FilterPreset, default_presets};
use crate::error::WealthscopeError;
use crate::infrastructure::error::InfrastructureError;
use crate::infrastructure::fs::atomic_write;
use crate::ports::PresetStore;

pub const PRESETS_KEY: &str = "billionaire-filter-presets";

#[derive(Debug, Default, Serialize, Deserialize)]
struct PresetFile {
    #[serde(rename = "billionaire-filter-presets", default)]
    presets: Vec<FilterPreset>,
}

/// Presets kept in a single JSON document under [`PRESETS_KEY`].
#[derive(Debug, Clone)]
pub struct JsonPresetStore {
    path: PathBuf,
}

impl JsonPresetStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl PresetStore for JsonPresetStore {
    #[instrument(skip(self), fields(path = %self.path.display()))]
    fn load(&self) -> Result<Vec<FilterPreset>, WealthscopeError> {
        if !self.path.exists() {
            debug!("No preset file yet, using defaults");
            return Ok(default_presets());
        }
        let content = std::fs::read_to_string(&self.path).map_err(InfrastructureError::Io)?;
        let file: PresetFile =
            serde_json::from_str(&content).map_err(InfrastructureError::JsonError)?;
        Ok(file.presets)
    }

    #[instrument(skip(self, presets), fields(path = %self.path.display(), count = presets.len()))]
    fn save(&self, presets: &[FilterPreset]) -> Result<(), WealthscopeError> {
        let file = PresetFile {
            presets: presets.to_vec(),
        };
        let json = serde_json::to_vec_pretty(&file).map_err(InfrastructureError::JsonError)?;
        atomic_write(&self.path, json)?;
        Ok(())
    }
}
