// wealthscope-core/src/infrastructure/config/app.rs

use std::fs;
use std::path::{Path, PathBuf};
use tracing::{info, instrument, warn};
use validator::Validate;

use crate::domain::configuration::AppConfig;
use crate::infrastructure::error::InfrastructureError;

pub const CONFIG_CANDIDATES: [&str; 2] = ["wealthscope.yaml", "wealthscope_conf.yaml"];

pub const ENV_DATASET: &str = "WEALTHSCOPE_DATASET";
pub const ENV_SEED: &str = "WEALTHSCOPE_SEED";
pub const ENV_EXPORT_DIR: &str = "WEALTHSCOPE_EXPORT_DIR";

/// Loads the configuration for a project directory.
///
/// Layering: serde defaults, then the YAML file (if any), then environment
/// variables. Relative paths are resolved against `project_dir`.
#[instrument(skip(project_dir))]
pub fn load_app_config(project_dir: &Path) -> Result<AppConfig, InfrastructureError> {
    let mut config = match find_main_config(project_dir) {
        Some(path) => read_config(&path)?,
        None => {
            info!(dir = ?project_dir, "No configuration file found, using defaults");
            AppConfig::default()
        }
    };

    apply_env_overrides(&mut config, |key| std::env::var(key).ok());
    validate(&config)?;
    resolve_paths(&mut config, project_dir);
    Ok(config)
}

/// Loads an explicit configuration file. Unlike [`load_app_config`], a missing
/// file is an error here.
#[instrument]
pub fn load_app_config_file(path: &Path) -> Result<AppConfig, InfrastructureError> {
    if !path.exists() {
        return Err(InfrastructureError::ConfigError(format!(
            "Configuration file {:?} does not exist",
            path
        )));
    }
    let mut config = read_config(path)?;
    apply_env_overrides(&mut config, |key| std::env::var(key).ok());
    validate(&config)?;

    let root = path.parent().unwrap_or_else(|| Path::new("."));
    resolve_paths(&mut config, root);
    Ok(config)
}

fn find_main_config(root: &Path) -> Option<PathBuf> {
    CONFIG_CANDIDATES
        .iter()
        .map(|name| root.join(name))
        .find(|p| p.exists())
}

fn read_config(path: &Path) -> Result<AppConfig, InfrastructureError> {
    info!(path = ?path, "Loading configuration");
    let content = fs::read_to_string(path)?;
    if content.trim().is_empty() {
        return Ok(AppConfig::default());
    }
    Ok(serde_yaml::from_str(&content)?)
}

fn validate(config: &AppConfig) -> Result<(), InfrastructureError> {
    config
        .validate()
        .map_err(|e| InfrastructureError::ConfigError(e.to_string()))
}

/// Environment layer. `lookup` is `std::env::var` outside of tests.
pub fn apply_env_overrides<F>(config: &mut AppConfig, lookup: F)
where
    F: Fn(&str) -> Option<String>,
{
    if let Some(val) = lookup(ENV_DATASET) {
        info!(old = %config.dataset.path, new = %val, "Overriding dataset path via ENV");
        config.dataset.path = val;
    }
    if let Some(val) = lookup(ENV_SEED) {
        match val.trim().parse::<u64>() {
            Ok(seed) => {
                info!(old = config.quality.seed, new = seed, "Overriding seed via ENV");
                config.quality.seed = seed;
            }
            Err(_) => warn!(value = %val, "Ignoring non-numeric {}", ENV_SEED),
        }
    }
    if let Some(val) = lookup(ENV_EXPORT_DIR) {
        info!(old = %config.export.output_dir, new = %val, "Overriding export dir via ENV");
        config.export.output_dir = val;
    }
}

fn resolve_paths(config: &mut AppConfig, root: &Path) {
    let resolve = |p: &str| -> String {
        let path = Path::new(p);
        if path.is_absolute() {
            p.to_string()
        } else {
            root.join(path).display().to_string()
        }
    };
    config.dataset.path = resolve(&config.dataset.path);
    config.export.output_dir = resolve(&config.export.output_dir);
    config.presets.path = resolve(&config.presets.path);
}
