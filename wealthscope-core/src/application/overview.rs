// wealthscope-core/src/application/overview.rs

use serde::Serialize;

use crate::domain::quality::DataQualityMetrics;
use crate::domain::record::BillionaireRecord;
use crate::domain::stats;

pub const TOP_COUNTRIES: usize = 5;

/// Headline numbers for a loaded dataset.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DatasetOverview {
    pub total_records: usize,
    pub countries: usize,
    pub industries: usize,
    pub age_range: Option<(u32, u32)>,
    /// Millions.
    pub net_worth_range: Option<(f64, f64)>,
    pub top_countries: Vec<(String, usize)>,
    pub quality: DataQualityMetrics,
}

impl DatasetOverview {
    pub fn build(records: &[BillionaireRecord]) -> Self {
        Self {
            total_records: records.len(),
            countries: stats::countries(records).len(),
            industries: stats::industry_categories(records).len(),
            age_range: stats::age_range(records),
            net_worth_range: stats::net_worth_range(records),
            top_countries: stats::top_countries(records, TOP_COUNTRIES),
            quality: DataQualityMetrics::compute(records),
        }
    }

    /// `"$1.0B - $219.0B"`, or `"n/a"` for a dataset without parsable amounts.
    pub fn net_worth_label(&self) -> String {
        match self.net_worth_range {
            Some((lo, hi)) => format!(
                "{} - {}",
                stats::format_millions(lo),
                stats::format_millions(hi)
            ),
            None => "n/a".to_string(),
        }
    }

    /// The score is considered healthy from 95% up.
    pub fn quality_is_healthy(&self) -> bool {
        self.quality.quality_score >= 95.0
    }
}
