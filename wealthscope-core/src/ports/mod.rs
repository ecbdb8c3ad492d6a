// wealthscope-core/src/ports/mod.rs

pub mod preset_store;
pub mod source;

pub use preset_store::PresetStore;
pub use source::DatasetSource;
