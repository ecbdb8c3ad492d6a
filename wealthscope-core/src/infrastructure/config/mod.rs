// wealthscope-core/src/infrastructure/config/mod.rs

pub mod app;

pub use crate::domain::configuration::AppConfig;
pub use app::{CONFIG_CANDIDATES, apply_env_overrides, load_app_config, load_app_config_file};
