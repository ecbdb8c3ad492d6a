// wealthscope-core/src/domain/query/sort.rs

use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::fmt;

use crate::domain::error::DomainError;
use crate::domain::record::{BillionaireRecord, FieldValue, RecordField};
use crate::domain::stats::net_worth::{parse_net_worth, parse_percentage};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum SortDirection {
    #[default]
    Asc,
    Desc,
}

impl SortDirection {
    pub fn toggled(self) -> Self {
        match self {
            Self::Asc => Self::Desc,
            Self::Desc => Self::Asc,
        }
    }

    pub fn arrow(&self) -> &'static str {
        match self {
            Self::Asc => "↑",
            Self::Desc => "↓",
        }
    }
}

impl fmt::Display for SortDirection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Asc => write!(f, "asc"),
            Self::Desc => write!(f, "desc"),
        }
    }
}

impl std::str::FromStr for SortDirection {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "asc" | "ascending" => Ok(Self::Asc),
            "desc" | "descending" => Ok(Self::Desc),
            _ => Err(DomainError::UnknownOption(format!("sort direction '{}'", s))),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SortConfig {
    pub field: RecordField,
    pub direction: SortDirection,
}

impl Default for SortConfig {
    fn default() -> Self {
        Self {
            field: RecordField::Rank,
            direction: SortDirection::Asc,
        }
    }
}

impl SortConfig {
    pub fn new(field: RecordField, direction: SortDirection) -> Self {
        Self { field, direction }
    }

    /// Same field flips the direction; a new field starts ascending.
    pub fn toggle(self, field: RecordField) -> Self {
        if self.field == field {
            Self::new(field, self.direction.toggled())
        } else {
            Self::new(field, SortDirection::Asc)
        }
    }

    pub fn compare(&self, a: &BillionaireRecord, b: &BillionaireRecord) -> Ordering {
        let ordering = compare_field(self.field, a, b);
        match self.direction {
            SortDirection::Asc => ordering,
            SortDirection::Desc => ordering.reverse(),
        }
    }

    /// Stable sort: records that compare equal keep their input order in
    /// both directions.
    pub fn sort(&self, records: &mut [&BillionaireRecord]) {
        records.sort_by(|a, b| self.compare(a, b));
    }
}

fn compare_field(field: RecordField, a: &BillionaireRecord, b: &BillionaireRecord) -> Ordering {
    match field {
        RecordField::NetWorth => {
            parse_net_worth(a.net_worth()).total_cmp(&parse_net_worth(b.net_worth()))
        }
        RecordField::PercentageChange => parse_percentage(a.percentage_change())
            .total_cmp(&parse_percentage(b.percentage_change())),
        _ => compare_values(&a.value(field), &b.value(field)),
    }
}

// Integers numerically, text lexically; empty cells sort first.
fn compare_values(a: &FieldValue<'_>, b: &FieldValue<'_>) -> Ordering {
    match (a, b) {
        (FieldValue::Int(x), FieldValue::Int(y)) => x.cmp(y),
        (FieldValue::Text(x), FieldValue::Text(y)) => x.cmp(y),
        (FieldValue::Flag(x), FieldValue::Flag(y)) => x.cmp(y),
        (FieldValue::Empty, FieldValue::Empty) => Ordering::Equal,
        (FieldValue::Empty, _) => Ordering::Less,
        (_, FieldValue::Empty) => Ordering::Greater,
        _ => a.render().cmp(&b.render()),
    }
}
