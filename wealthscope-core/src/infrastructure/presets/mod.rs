// wealthscope-core/src/infrastructure/presets/mod.rs

pub mod json_store;

pub use json_store::{JsonPresetStore, PRESETS_KEY};
