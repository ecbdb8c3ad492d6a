// wealthscope-core/src/infrastructure/mod.rs

pub mod config;
pub mod error;
pub mod export;
pub mod fs;
pub mod loader;
pub mod presets;
pub mod source;

pub use config::{AppConfig, load_app_config, load_app_config_file};
pub use loader::LoadProgress;
pub use presets::JsonPresetStore;
pub use source::FileSource;
