// wealthscope-core/src/ports/preset_store.rs

use crate::domain::presets::FilterPreset;
use crate::error::WealthscopeError;

/// Persistence for named filter presets.
pub trait PresetStore {
    /// Returns the saved presets, or the shipped defaults when nothing was saved.
    fn load(&self) -> Result<Vec<FilterPreset>, WealthscopeError>;

    /// Replaces the whole saved list.
    fn save(&self, presets: &[FilterPreset]) -> Result<(), WealthscopeError>;
}
