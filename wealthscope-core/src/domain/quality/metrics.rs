// wealthscope-core/src/domain/quality/metrics.rs

use serde::Serialize;
use std::collections::BTreeMap;

use crate::domain::record::{BillionaireRecord, IssueType, Severity, ValidationStatus};

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DataQualityMetrics {
    pub total_records: usize,
    pub valid_records: usize,
    pub records_with_issues: usize,
    /// Percentage of valid records, one decimal.
    pub quality_score: f64,
    pub issues_by_type: BTreeMap<IssueType, usize>,
    pub issues_by_severity: BTreeMap<Severity, usize>,
}

impl DataQualityMetrics {
    /// Computed once over the loaded set. An empty set scores 0.0.
    pub fn compute(records: &[BillionaireRecord]) -> Self {
        let total_records = records.len();
        let valid_records = records
            .iter()
            .filter(|r| r.validation_status() == ValidationStatus::Valid)
            .count();
        let records_with_issues = records.iter().filter(|r| !r.issues().is_empty()).count();

        let quality_score = if total_records == 0 {
            0.0
        } else {
            (valid_records as f64 / total_records as f64 * 1000.0).round() / 10.0
        };

        let mut issues_by_type = BTreeMap::new();
        let mut issues_by_severity = BTreeMap::new();
        for issue in records.iter().flat_map(|r| r.issues()) {
            *issues_by_type.entry(issue.issue_type).or_insert(0) += 1;
            *issues_by_severity.entry(issue.severity).or_insert(0) += 1;
        }

        Self {
            total_records,
            valid_records,
            records_with_issues,
            quality_score,
            issues_by_type,
            issues_by_severity,
        }
    }

    pub fn total_issues(&self) -> usize {
        self.issues_by_type.values().sum()
    }
}
