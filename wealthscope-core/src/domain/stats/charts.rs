// wealthscope-core/src/domain/stats/charts.rs

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use crate::domain::record::BillionaireRecord;
use crate::domain::stats::net_worth::{parse_net_worth, parse_percentage};

/// Half-up rounding (`Math.round`), also for negative values: -2.5 -> -2.
fn round_half_up(x: f64) -> f64 {
    (x + 0.5).floor()
}

fn percentage_of(count: usize, total: usize) -> u32 {
    if total == 0 {
        return 0;
    }
    round_half_up(count as f64 / total as f64 * 100.0) as u32
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum ChartSort {
    #[default]
    Count,
    Value,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CountryPoint {
    pub name: String,
    pub billionaires: usize,
    /// Billions, rounded.
    pub total_wealth: i64,
    pub avg_wealth: i64,
    pub avg_age: i64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AgeBucketPoint {
    pub name: String,
    pub count: usize,
    pub avg_wealth: i64,
    pub percentage: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct WealthBucketPoint {
    pub name: String,
    pub count: usize,
    pub total_wealth: i64,
    pub avg_age: i64,
    pub percentage: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TrendPoint {
    pub name: String,
    pub billionaires: usize,
    pub total_wealth: i64,
    pub avg_change: f64,
    pub growth: usize,
    pub decline: usize,
}

// (min, max inclusive, label)
const AGE_BUCKETS: [(u32, u32, &str); 8] = [
    (20, 30, "20-30"),
    (31, 40, "31-40"),
    (41, 50, "41-50"),
    (51, 60, "51-60"),
    (61, 70, "61-70"),
    (71, 80, "71-80"),
    (81, 90, "81-90"),
    (91, 101, "90+"),
];

// (min inclusive, max exclusive, label), in millions
const WEALTH_BUCKETS: [(f64, f64, &str); 7] = [
    (1000.0, 2000.0, "$1-2B"),
    (2000.0, 5000.0, "$2-5B"),
    (5000.0, 10000.0, "$5-10B"),
    (10000.0, 20000.0, "$10-20B"),
    (20000.0, 50000.0, "$20-50B"),
    (50000.0, 100000.0, "$50-100B"),
    (100000.0, 500000.0, "$100B+"),
];

/// Per-country totals, ordered by count or by total wealth, top `top_n`.
pub fn geographic(records: &[BillionaireRecord], sort: ChartSort, top_n: usize) -> Vec<CountryPoint> {
    struct Acc {
        count: usize,
        wealth: f64,
        ages: u64,
    }

    // first-seen order is the tie-breaker
    let mut order: Vec<&str> = Vec::new();
    let mut stats: HashMap<&str, Acc> = HashMap::new();
    for record in records {
        let acc = stats.entry(record.country()).or_insert_with(|| {
            order.push(record.country());
            Acc {
                count: 0,
                wealth: 0.0,
                ages: 0,
            }
        });
        acc.count += 1;
        acc.wealth += parse_net_worth(record.net_worth());
        acc.ages += u64::from(record.age());
    }

    let mut points: Vec<CountryPoint> = order
        .into_iter()
        .filter_map(|country| {
            stats.get(country).map(|acc| CountryPoint {
                name: country.to_string(),
                billionaires: acc.count,
                total_wealth: round_half_up(acc.wealth / 1000.0) as i64,
                avg_wealth: round_half_up(acc.wealth / acc.count as f64 / 1000.0) as i64,
                avg_age: round_half_up(acc.ages as f64 / acc.count as f64) as i64,
            })
        })
        .collect();

    match sort {
        ChartSort::Count => points.sort_by(|a, b| b.billionaires.cmp(&a.billionaires)),
        ChartSort::Value => points.sort_by(|a, b| b.total_wealth.cmp(&a.total_wealth)),
    }
    points.truncate(top_n);
    points
}

/// Fixed age buckets; empty buckets are dropped.
pub fn demographics(records: &[BillionaireRecord]) -> Vec<AgeBucketPoint> {
    AGE_BUCKETS
        .iter()
        .map(|(min, max, label)| {
            let in_range: Vec<&BillionaireRecord> = records
                .iter()
                .filter(|r| r.age() >= *min && r.age() <= *max)
                .collect();
            let count = in_range.len();
            let avg_wealth = if count > 0 {
                let total: f64 = in_range.iter().map(|r| parse_net_worth(r.net_worth())).sum();
                round_half_up(total / count as f64 / 1000.0) as i64
            } else {
                0
            };
            AgeBucketPoint {
                name: label.to_string(),
                count,
                avg_wealth,
                percentage: percentage_of(count, records.len()),
            }
        })
        .filter(|p| p.count > 0)
        .collect()
}

/// Fixed net-worth buckets; empty buckets are dropped.
pub fn wealth_distribution(records: &[BillionaireRecord]) -> Vec<WealthBucketPoint> {
    WEALTH_BUCKETS
        .iter()
        .map(|(min, max, label)| {
            let in_range: Vec<(&BillionaireRecord, f64)> = records
                .iter()
                .map(|r| (r, parse_net_worth(r.net_worth())))
                .filter(|(_, worth)| worth >= min && worth < max)
                .collect();
            let count = in_range.len();
            let total: f64 = in_range.iter().map(|(_, w)| w).sum();
            let avg_age = if count > 0 {
                let ages: u64 = in_range.iter().map(|(r, _)| u64::from(r.age())).sum();
                round_half_up(ages as f64 / count as f64) as i64
            } else {
                0
            };
            WealthBucketPoint {
                name: label.to_string(),
                count,
                total_wealth: round_half_up(total / 1000.0) as i64,
                avg_age,
                percentage: percentage_of(count, records.len()),
            }
        })
        .filter(|p| p.count > 0)
        .collect()
}

/// Label used to group sources in the trends chart: long sources are cut at
/// their first comma, or to 20 characters when that leaves nothing.
pub fn trend_label(source: &str) -> String {
    if source.chars().count() <= 20 {
        return source.to_string();
    }
    match source.split(',').next() {
        Some(head) if !head.is_empty() => head.to_string(),
        _ => source.chars().take(20).collect(),
    }
}

/// Per-source totals and percentage-change direction, top `top_n` by count.
pub fn trends(records: &[BillionaireRecord], top_n: usize) -> Vec<TrendPoint> {
    struct Acc {
        count: usize,
        wealth: f64,
        changes: Vec<f64>,
    }

    let mut order: Vec<String> = Vec::new();
    let mut stats: HashMap<String, Acc> = HashMap::new();
    for record in records {
        let label = trend_label(record.source());
        let acc = stats.entry(label.clone()).or_insert_with(|| {
            order.push(label);
            Acc {
                count: 0,
                wealth: 0.0,
                changes: Vec::new(),
            }
        });
        acc.count += 1;
        acc.wealth += parse_net_worth(record.net_worth());
        acc.changes.push(parse_percentage(record.percentage_change()));
    }

    let mut points: Vec<TrendPoint> = order
        .into_iter()
        .filter_map(|label| {
            stats.get(&label).map(|acc| {
                let mean = acc.changes.iter().sum::<f64>() / acc.changes.len() as f64;
                TrendPoint {
                    name: label.clone(),
                    billionaires: acc.count,
                    total_wealth: round_half_up(acc.wealth / 1000.0) as i64,
                    avg_change: round_half_up(mean * 100.0) / 100.0,
                    growth: acc.changes.iter().filter(|c| **c > 0.0).count(),
                    decline: acc.changes.iter().filter(|c| **c < 0.0).count(),
                }
            })
        })
        .collect();

    points.sort_by(|a, b| b.billionaires.cmp(&a.billionaires));
    points.truncate(top_n);
    points
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::record::{RawRow, RecordFields};

    fn rec(name: &str, worth: &str, age: u32, source: &str, country: &str, pct: &str) -> BillionaireRecord {
        let raw = RawRow {
            rank: "1".into(),
            name: name.into(),
            net_worth: worth.into(),
            age: age.to_string(),
            source: source.into(),
            country: country.into(),
            percentage_change: pct.into(),
            ..Default::default()
        };
        BillionaireRecord::new(RecordFields::from_raw(&raw), vec![])
    }

    fn sample() -> Vec<BillionaireRecord> {
        vec![
            rec("A", "$219.0 B", 50, "Tesla, SpaceX", "United States", "1.5%"),
            rec("B", "$171.0 B", 58, "Amazon", "United States", "-0.5%"),
            rec("C", "$158.0 B", 73, "LVMH", "France", "2.0%"),
            rec("D", "$1.5 B", 35, "Amazon", "Germany", "0.0%"),
        ]
    }

    #[test]
    fn test_round_half_up_matches_math_round() {
        assert_eq!(round_half_up(2.5), 3.0);
        assert_eq!(round_half_up(-2.5), -2.0);
        assert_eq!(round_half_up(-2.6), -3.0);
    }

    #[test]
    fn test_geographic_by_count_and_value() {
        let records = sample();
        let by_count = geographic(&records, ChartSort::Count, 10);
        assert_eq!(by_count[0].name, "United States");
        assert_eq!(by_count[0].billionaires, 2);
        assert_eq!(by_count[0].total_wealth, 390);
        assert_eq!(by_count[0].avg_wealth, 195);
        assert_eq!(by_count[0].avg_age, 54);
        // ties keep first-seen order
        assert_eq!(by_count[1].name, "France");
        assert_eq!(by_count[2].name, "Germany");

        let by_value = geographic(&records, ChartSort::Value, 2);
        assert_eq!(by_value.len(), 2);
        assert_eq!(by_value[1].name, "France");
    }

    #[test]
    fn test_demographics_drops_empty_buckets() {
        let points = demographics(&sample());
        let labels: Vec<&str> = points.iter().map(|p| p.name.as_str()).collect();
        assert_eq!(labels, vec!["31-40", "41-50", "51-60", "71-80"]);
        assert_eq!(points[0].percentage, 25);
        assert_eq!(points[0].avg_wealth, 2);
    }

    #[test]
    fn test_wealth_distribution_upper_bound_is_exclusive() {
        let records = vec![
            rec("A", "$2.0 B", 40, "x", "y", "0%"),
            rec("B", "$1.999 B", 40, "x", "y", "0%"),
        ];
        let points = wealth_distribution(&records);
        assert_eq!(points.len(), 2);
        assert_eq!(points[0].name, "$1-2B");
        assert_eq!(points[1].name, "$2-5B");
        assert_eq!(points[1].percentage, 50);
    }

    #[test]
    fn test_trend_label() {
        assert_eq!(trend_label("Amazon"), "Amazon");
        assert_eq!(trend_label("Smartphones, automobiles"), "Smartphones");
        assert_eq!(trend_label(",aaaaaaaaaaaaaaaaaaaaaaaaa"), ",aaaaaaaaaaaaaaaaaaa");
    }

    #[test]
    fn test_trends_growth_and_decline() {
        let points = trends(&sample(), 5);
        assert_eq!(points[0].name, "Amazon");
        assert_eq!(points[0].billionaires, 2);
        assert_eq!(points[0].growth, 0);
        assert_eq!(points[0].decline, 1);
        assert_eq!(points[0].avg_change, -0.25);
    }
}
