// wealthscope-core/src/domain/stats/aggregation.rs

use std::collections::{BTreeSet, HashMap, HashSet};

use crate::domain::record::BillionaireRecord;
use crate::domain::stats::industry::industry_for;
use crate::domain::stats::net_worth::parse_net_worth;

pub const DEFAULT_SUGGESTION_LIMIT: usize = 8;

/// Distinct non-empty countries, sorted.
pub fn countries(records: &[BillionaireRecord]) -> Vec<String> {
    distinct_sorted(records.iter().map(|r| r.country()))
}

/// Distinct non-empty sources, sorted.
pub fn sources(records: &[BillionaireRecord]) -> Vec<String> {
    distinct_sorted(records.iter().map(|r| r.source()))
}

fn distinct_sorted<'a>(values: impl Iterator<Item = &'a str>) -> Vec<String> {
    values
        .filter(|v| !v.is_empty())
        .collect::<BTreeSet<_>>()
        .into_iter()
        .map(str::to_string)
        .collect()
}

/// Industries present among records with a source, sorted.
pub fn industry_categories(records: &[BillionaireRecord]) -> Vec<String> {
    distinct_sorted(
        records
            .iter()
            .filter(|r| !r.source().is_empty())
            .map(|r| industry_for(r.source())),
    )
}

pub fn records_by_industry<'a>(
    records: &'a [BillionaireRecord],
    industry: &str,
) -> Vec<&'a BillionaireRecord> {
    records
        .iter()
        .filter(|r| industry_for(r.source()) == industry)
        .collect()
}

/// Min/max over known ages (age > 0). `None` when no record has an age.
pub fn age_range(records: &[BillionaireRecord]) -> Option<(u32, u32)> {
    let ages = records.iter().map(|r| r.age()).filter(|a| *a > 0);
    min_max(ages)
}

/// Min/max of parsed net worth in millions, ignoring zero values.
pub fn net_worth_range(records: &[BillionaireRecord]) -> Option<(f64, f64)> {
    let values = records
        .iter()
        .map(|r| parse_net_worth(r.net_worth()))
        .filter(|v| *v > 0.0);
    values.fold(None, |acc, v| match acc {
        None => Some((v, v)),
        Some((lo, hi)) => Some((lo.min(v), hi.max(v))),
    })
}

fn min_max<T: PartialOrd + Copy>(values: impl Iterator<Item = T>) -> Option<(T, T)> {
    values.fold(None, |acc, v| match acc {
        None => Some((v, v)),
        Some((lo, hi)) => Some((if v < lo { v } else { lo }, if v > hi { v } else { hi })),
    })
}

/// Countries by record count, descending; ties by name.
pub fn top_countries(records: &[BillionaireRecord], n: usize) -> Vec<(String, usize)> {
    let mut counts: HashMap<&str, usize> = HashMap::new();
    for record in records.iter().filter(|r| !r.country().is_empty()) {
        *counts.entry(record.country()).or_insert(0) += 1;
    }
    let mut ranked: Vec<(String, usize)> = counts
        .into_iter()
        .map(|(country, count)| (country.to_string(), count))
        .collect();
    ranked.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(&b.0)));
    ranked.truncate(n);
    ranked
}

/// Names, sources and countries containing `query`, in first-seen order.
/// Queries shorter than two characters suggest nothing.
pub fn search_suggestions(records: &[BillionaireRecord], query: &str, limit: usize) -> Vec<String> {
    if limit == 0 || query.chars().count() < 2 {
        return Vec::new();
    }
    let needle = query.to_lowercase();
    let mut seen: HashSet<&str> = HashSet::new();
    let mut suggestions = Vec::new();

    for record in records {
        for candidate in [record.name(), record.source(), record.country()] {
            if candidate.to_lowercase().contains(&needle) && seen.insert(candidate) {
                suggestions.push(candidate.to_string());
                if suggestions.len() == limit {
                    return suggestions;
                }
            }
        }
    }
    suggestions
}

/// Exact name match first (case-insensitive), then the first name containing
/// the query once it is longer than three characters.
pub fn find_record<'a>(records: &'a [BillionaireRecord], query: &str) -> Option<&'a BillionaireRecord> {
    let needle = query.trim().to_lowercase();
    if needle.is_empty() {
        return None;
    }
    records
        .iter()
        .find(|r| r.name().to_lowercase() == needle)
        .or_else(|| {
            (needle.chars().count() > 3).then(|| {
                records
                    .iter()
                    .find(|r| r.name().to_lowercase().contains(&needle))
            })?
        })
}
