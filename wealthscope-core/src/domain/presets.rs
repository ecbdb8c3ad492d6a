// wealthscope-core/src/domain/presets.rs

use serde::{Deserialize, Serialize};

use crate::domain::error::DomainError;
use crate::domain::query::FilterCriteria;
use crate::domain::stats::sources_in;

/// A named, reusable filter configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FilterPreset {
    pub name: String,
    #[serde(default)]
    pub description: String,
    pub filters: FilterCriteria,
}

impl FilterPreset {
    pub fn new(name: impl Into<String>, description: impl Into<String>, filters: FilterCriteria) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
            filters,
        }
    }
}

/// Shipped when nothing has been saved yet.
pub fn default_presets() -> Vec<FilterPreset> {
    vec![
        FilterPreset::new(
            "Tech Billionaires",
            "Technology industry leaders",
            FilterCriteria {
                sources: sources_in("Technology")
                    .into_iter()
                    .map(String::from)
                    .collect(),
                ..Default::default()
            },
        ),
        FilterPreset::new(
            "Young Entrepreneurs",
            "Under 50 years old",
            FilterCriteria {
                age_range: Some((20, 50)),
                ..Default::default()
            },
        ),
        FilterPreset::new(
            "US Billionaires",
            "Based in United States",
            FilterCriteria {
                countries: vec!["United States".into()],
                ..Default::default()
            },
        ),
        FilterPreset::new(
            "Top 100",
            "Highest ranked billionaires",
            FilterCriteria {
                net_worth_range: Some((50_000.0, 500_000.0)),
                ..Default::default()
            },
        ),
    ]
}

/// Replaces a preset with the same name, or appends it.
pub fn upsert(presets: &mut Vec<FilterPreset>, preset: FilterPreset) {
    match presets.iter_mut().find(|p| p.name == preset.name) {
        Some(existing) => *existing = preset,
        None => presets.push(preset),
    }
}

/// Case-insensitive lookup by name.
pub fn find<'a>(presets: &'a [FilterPreset], name: &str) -> Result<&'a FilterPreset, DomainError> {
    presets
        .iter()
        .find(|p| p.name.eq_ignore_ascii_case(name.trim()))
        .ok_or_else(|| DomainError::PresetNotFound(name.to_string()))
}
