// wealthscope/src/commands/mod.rs

pub mod browse;
pub mod charts;
pub mod export;
pub mod find;
pub mod overview;
pub mod presets;
pub mod quality;

use anyhow::{Context, bail};
use comfy_table::{ContentArrangement, Table, presets::UTF8_FULL};
use tracing::{debug, info};

use crate::cli::{FilterArgs, GlobalArgs};
use wealthscope_core::application::{describe_load_failure, try_load_records};
use wealthscope_core::domain::AppConfig;
use wealthscope_core::domain::presets::find;
use wealthscope_core::domain::query::FilterCriteria;
use wealthscope_core::domain::record::BillionaireRecord;
use wealthscope_core::infrastructure::{
    FileSource, JsonPresetStore, load_app_config, load_app_config_file,
};
use wealthscope_core::ports::PresetStore;

/// Config file (or defaults), then ENV, then command line flags.
pub fn load_config(global: &GlobalArgs) -> anyhow::Result<AppConfig> {
    let loaded = match &global.config {
        Some(path) => load_app_config_file(path),
        None => load_app_config(&global.project_dir),
    };
    let mut config = match loaded {
        Ok(config) => config,
        Err(e) => {
            // miette renders the diagnostic code and help text
            eprintln!("{:?}", miette::Report::new(e));
            bail!("Failed to load configuration");
        }
    };

    if let Some(data) = &global.data {
        config.dataset.path = data.display().to_string();
    }
    if let Some(seed) = global.seed {
        config.quality.seed = seed;
    }
    Ok(config)
}

/// Loads and annotates the dataset with the configured strategy.
pub async fn load_records(config: &AppConfig) -> anyhow::Result<Vec<BillionaireRecord>> {
    let source = FileSource::new(&config.dataset.path);
    let result = try_load_records(&source, config, |p| {
        debug!(loaded = p.loaded, total = p.total, "Loading... {}%", p.percentage);
    })
    .await;

    match result {
        Ok(records) => {
            info!(count = records.len(), "Dataset ready");
            Ok(records)
        }
        Err(e) => {
            eprintln!("❌ {}", describe_load_failure(&e.to_string()));
            bail!(e)
        }
    }
}

/// Filter flags on top of the optional preset they name.
pub fn resolve_criteria(config: &AppConfig, filters: &FilterArgs) -> anyhow::Result<FilterCriteria> {
    let base = match &filters.preset {
        Some(name) => {
            let presets = JsonPresetStore::new(&config.presets.path)
                .load()
                .with_context(|| format!("Failed to read presets from {}", config.presets.path))?;
            Some(find(&presets, name)?.filters.clone())
        }
        None => None,
    };
    Ok(filters.to_criteria(base))
}

pub fn new_table() -> Table {
    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL)
        .set_content_arrangement(ContentArrangement::Dynamic);
    table
}
