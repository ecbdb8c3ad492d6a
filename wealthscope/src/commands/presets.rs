// wealthscope/src/commands/presets.rs
//
// USE CASE: List and save filter presets.

use comfy_table::Cell;

use crate::cli::{FilterArgs, GlobalArgs};
use crate::commands::{load_config, new_table, resolve_criteria};
use wealthscope_core::domain::presets::{FilterPreset, upsert};
use wealthscope_core::infrastructure::JsonPresetStore;
use wealthscope_core::ports::PresetStore;

pub fn list(global: &GlobalArgs) -> anyhow::Result<()> {
    let config = load_config(global)?;
    let presets = JsonPresetStore::new(&config.presets.path).load()?;

    let mut table = new_table();
    table.set_header(vec!["Name", "Description", "Active Filters"]);
    for preset in &presets {
        table.add_row(vec![
            Cell::new(&preset.name),
            Cell::new(&preset.description),
            Cell::new(preset.filters.active_count()),
        ]);
    }
    println!("{table}");
    Ok(())
}

pub fn save(
    global: &GlobalArgs,
    name: &str,
    description: &str,
    filters: &FilterArgs,
) -> anyhow::Result<()> {
    let config = load_config(global)?;
    let criteria = resolve_criteria(&config, filters)?;
    criteria.validate()?;
    if criteria.is_empty() {
        anyhow::bail!("Refusing to save preset '{}' without any filter", name);
    }

    let store = JsonPresetStore::new(&config.presets.path);
    let mut presets = store.load()?;
    upsert(&mut presets, FilterPreset::new(name, description, criteria));
    store.save(&presets)?;

    println!("🔖 Preset '{}' saved ({} presets)", name, presets.len());
    Ok(())
}
