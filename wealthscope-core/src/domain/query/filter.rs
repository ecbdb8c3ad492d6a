// wealthscope-core/src/domain/query/filter.rs

use serde::{Deserialize, Serialize};

use crate::domain::error::DomainError;
use crate::domain::record::{BillionaireRecord, ValidationStatus};
use crate::domain::stats::net_worth::parse_net_worth;

/// Predicate configuration narrowing the displayed record set.
/// Every criterion is optional; an empty list means "no restriction".
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FilterCriteria {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub search: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub countries: Vec<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub sources: Vec<String>,
    /// Inclusive bounds.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub age_range: Option<(u32, u32)>,
    /// Inclusive bounds, in millions.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub net_worth_range: Option<(f64, f64)>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub quality_status: Vec<ValidationStatus>,
}

impl FilterCriteria {
    pub fn is_empty(&self) -> bool {
        self.search.as_deref().is_none_or(|s| s.trim().is_empty())
            && self.countries.is_empty()
            && self.sources.is_empty()
            && self.age_range.is_none()
            && self.net_worth_range.is_none()
            && self.quality_status.is_empty()
    }

    /// Rejects inverted ranges.
    pub fn validate(&self) -> Result<(), DomainError> {
        if let Some((min, max)) = self.age_range {
            if min > max {
                return Err(DomainError::InvalidRange {
                    min: min.to_string(),
                    max: max.to_string(),
                });
            }
        }
        if let Some((min, max)) = self.net_worth_range {
            if min > max {
                return Err(DomainError::InvalidRange {
                    min: min.to_string(),
                    max: max.to_string(),
                });
            }
        }
        Ok(())
    }

    pub fn matches(&self, record: &BillionaireRecord) -> bool {
        if let Some(search) = self.search.as_deref().map(str::trim).filter(|s| !s.is_empty()) {
            let needle = search.to_lowercase();
            let hit = [record.name(), record.source(), record.country()]
                .iter()
                .any(|field| field.to_lowercase().contains(&needle));
            if !hit {
                return false;
            }
        }

        if !self.countries.is_empty() && !self.countries.iter().any(|c| c == record.country()) {
            return false;
        }

        if !self.sources.is_empty() && !self.sources.iter().any(|s| s == record.source()) {
            return false;
        }

        if let Some((min, max)) = self.age_range {
            if record.age() < min || record.age() > max {
                return false;
            }
        }

        if let Some((min, max)) = self.net_worth_range {
            let worth = parse_net_worth(record.net_worth());
            if worth < min || worth > max {
                return false;
            }
        }

        if !self.quality_status.is_empty()
            && !self.quality_status.contains(&record.validation_status())
        {
            return false;
        }

        true
    }

    /// Matching records, in input order.
    pub fn apply<'a>(&self, records: &'a [BillionaireRecord]) -> Vec<&'a BillionaireRecord> {
        records.iter().filter(|r| self.matches(r)).collect()
    }

    /// Same as `apply`, over an already narrowed view.
    pub fn apply_refs<'a>(&self, records: &[&'a BillionaireRecord]) -> Vec<&'a BillionaireRecord> {
        records.iter().copied().filter(|r| self.matches(r)).collect()
    }

    /// Number of active criteria, as shown next to the filter toggle.
    pub fn active_count(&self) -> usize {
        [
            self.search.as_deref().is_some_and(|s| !s.trim().is_empty()),
            !self.countries.is_empty(),
            !self.sources.is_empty(),
            self.age_range.is_some(),
            self.net_worth_range.is_some(),
            !self.quality_status.is_empty(),
        ]
        .iter()
        .filter(|active| **active)
        .count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::record::{
        DataQualityIssue, IssueType, RawRow, RecordField, RecordFields, Severity,
    };

    fn rec(rank: u32, name: &str, worth: &str, age: u32, source: &str, country: &str) -> BillionaireRecord {
        let raw = RawRow {
            rank: rank.to_string(),
            name: name.into(),
            net_worth: worth.into(),
            age: age.to_string(),
            source: source.into(),
            country: country.into(),
            ..Default::default()
        };
        BillionaireRecord::new(RecordFields::from_raw(&raw), vec![])
    }

    fn flagged(rank: u32, severity: Severity) -> BillionaireRecord {
        let issue = DataQualityIssue::new(RecordField::NetWorth, IssueType::Parsing, severity, "x");
        let fields = RecordFields {
            rank,
            name: format!("Flagged {rank}"),
            country: "Chile".into(),
            ..Default::default()
        };
        BillionaireRecord::new(fields, vec![issue])
    }

    fn sample() -> Vec<BillionaireRecord> {
        vec![
            rec(1, "Elon Musk", "$219.0 B", 50, "Tesla, SpaceX", "United States"),
            rec(2, "Jeff Bezos", "$171.0 B", 58, "Amazon", "United States"),
            rec(3, "Bernard Arnault", "$158.0 B", 73, "LVMH", "France"),
            rec(4, "Mukesh Ambani", "$90.7 B", 64, "Diversified", "India"),
            flagged(5, Severity::High),
            flagged(6, Severity::Low),
        ]
    }

    #[test]
    fn test_empty_criteria_keeps_everything() {
        let records = sample();
        let criteria = FilterCriteria::default();
        assert!(criteria.is_empty());
        assert_eq!(criteria.apply(&records).len(), records.len());
    }

    #[test]
    fn test_search_is_case_insensitive_over_name_source_country() {
        let records = sample();
        let by_name = FilterCriteria {
            search: Some("MUSK".into()),
            ..Default::default()
        };
        assert_eq!(by_name.apply(&records).len(), 1);

        let by_source = FilterCriteria {
            search: Some("amazon".into()),
            ..Default::default()
        };
        assert_eq!(by_source.apply(&records)[0].rank(), 2);

        let by_country = FilterCriteria {
            search: Some("fRaNcE".into()),
            ..Default::default()
        };
        assert_eq!(by_country.apply(&records)[0].rank(), 3);
    }

    #[test]
    fn test_country_filter_is_sound_and_idempotent() {
        let records = sample();
        let criteria = FilterCriteria {
            countries: vec!["United States".into(), "India".into()],
            ..Default::default()
        };
        let once = criteria.apply(&records);
        assert_eq!(once.len(), 3);
        assert!(once.iter().all(|r| criteria.countries.iter().any(|c| c == r.country())));

        let twice = criteria.apply_refs(&once);
        assert_eq!(once, twice);
    }

    #[test]
    fn test_age_range_is_inclusive() {
        let records = sample();
        let criteria = FilterCriteria {
            age_range: Some((50, 64)),
            ..Default::default()
        };
        let ranks: Vec<u32> = criteria.apply(&records).iter().map(|r| r.rank()).collect();
        assert_eq!(ranks, vec![1, 2, 4]);
    }

    #[test]
    fn test_net_worth_range_in_millions() {
        let records = sample();
        let criteria = FilterCriteria {
            net_worth_range: Some((100_000.0, 171_000.0)),
            ..Default::default()
        };
        let ranks: Vec<u32> = criteria.apply(&records).iter().map(|r| r.rank()).collect();
        assert_eq!(ranks, vec![2, 3]);
    }

    #[test]
    fn test_sources_and_quality_status() {
        let records = sample();
        let by_source = FilterCriteria {
            sources: vec!["LVMH".into()],
            ..Default::default()
        };
        assert_eq!(by_source.apply(&records).len(), 1);

        let errors_only = FilterCriteria {
            quality_status: vec![ValidationStatus::Error],
            ..Default::default()
        };
        let ranks: Vec<u32> = errors_only.apply(&records).iter().map(|r| r.rank()).collect();
        assert_eq!(ranks, vec![5]);

        let not_valid = FilterCriteria {
            quality_status: vec![ValidationStatus::Warning, ValidationStatus::Error],
            ..Default::default()
        };
        assert_eq!(not_valid.apply(&records).len(), 2);
    }

    #[test]
    fn test_validate_rejects_inverted_ranges() {
        let bad = FilterCriteria {
            age_range: Some((70, 20)),
            ..Default::default()
        };
        assert!(matches!(bad.validate(), Err(DomainError::InvalidRange { .. })));
        assert!(FilterCriteria::default().validate().is_ok());
    }

    #[test]
    fn test_active_count_and_json_shape() -> anyhow::Result<()> {
        let criteria = FilterCriteria {
            search: Some("tech".into()),
            age_range: Some((20, 50)),
            ..Default::default()
        };
        assert_eq!(criteria.active_count(), 2);

        let json = serde_json::to_value(&criteria)?;
        assert_eq!(json["ageRange"], serde_json::json!([20, 50]));
        assert!(json.get("countries").is_none());

        let back: FilterCriteria = serde_json::from_value(json)?;
        assert_eq!(back, criteria);
        Ok(())
    }
}
