// wealthscope-core/src/domain/record/field.rs

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::domain::error::DomainError;

/// Every addressable column of a `BillionaireRecord`.
///
/// The same enum names issue targets, sort keys and export columns, so the
/// camelCase key is the single public spelling of a column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum RecordField {
    Rank,
    Name,
    NetWorth,
    Change,
    PercentageChange,
    Age,
    Source,
    Country,
    Industry,
    City,
    SelfMade,
    Education,
    MaritalStatus,
    Children,
}

impl RecordField {
    pub const ALL: [RecordField; 14] = [
        Self::Rank,
        Self::Name,
        Self::NetWorth,
        Self::Change,
        Self::PercentageChange,
        Self::Age,
        Self::Source,
        Self::Country,
        Self::Industry,
        Self::City,
        Self::SelfMade,
        Self::Education,
        Self::MaritalStatus,
        Self::Children,
    ];

    pub fn key(&self) -> &'static str {
        match self {
            Self::Rank => "rank",
            Self::Name => "name",
            Self::NetWorth => "netWorth",
            Self::Change => "change",
            Self::PercentageChange => "percentageChange",
            Self::Age => "age",
            Self::Source => "source",
            Self::Country => "country",
            Self::Industry => "industry",
            Self::City => "city",
            Self::SelfMade => "selfMade",
            Self::Education => "education",
            Self::MaritalStatus => "maritalStatus",
            Self::Children => "children",
        }
    }

    /// Human label, matching the dataset header where one exists.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Rank => "Rank",
            Self::Name => "Name",
            Self::NetWorth => "Net Worth",
            Self::Change => "Change",
            Self::PercentageChange => "Percentage Change",
            Self::Age => "Age",
            Self::Source => "Source",
            Self::Country => "Country/Territory",
            Self::Industry => "Industry",
            Self::City => "City",
            Self::SelfMade => "Self-made",
            Self::Education => "Education",
            Self::MaritalStatus => "Marital Status",
            Self::Children => "Children",
        }
    }

    /// Columns selected by default when exporting.
    pub fn is_essential(&self) -> bool {
        matches!(self, Self::Rank | Self::Name | Self::NetWorth)
    }

    pub fn essentials() -> Vec<RecordField> {
        Self::ALL.into_iter().filter(|f| f.is_essential()).collect()
    }
}

impl fmt::Display for RecordField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.key())
    }
}

impl std::str::FromStr for RecordField {
    type Err = DomainError;

    /// Accepts the camelCase key, snake_case, kebab-case or the header label.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized: String = s
            .trim()
            .chars()
            .filter(|c| c.is_alphanumeric())
            .collect::<String>()
            .to_lowercase();

        Self::ALL
            .into_iter()
            .find(|field| {
                let key = field.key().to_lowercase();
                let label: String = field
                    .label()
                    .chars()
                    .filter(|c| c.is_alphanumeric())
                    .collect::<String>()
                    .to_lowercase();
                normalized == key || normalized == label
            })
            .ok_or_else(|| DomainError::UnknownField(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn test_parse_accepts_all_spellings() -> anyhow::Result<()> {
        assert_eq!(RecordField::from_str("netWorth")?, RecordField::NetWorth);
        assert_eq!(RecordField::from_str("net_worth")?, RecordField::NetWorth);
        assert_eq!(RecordField::from_str("Net Worth")?, RecordField::NetWorth);
        assert_eq!(RecordField::from_str("Country/Territory")?, RecordField::Country);
        assert_eq!(RecordField::from_str("self-made")?, RecordField::SelfMade);
        assert!(RecordField::from_str("salary").is_err());
        Ok(())
    }

    #[test]
    fn test_essential_columns() {
        assert_eq!(
            RecordField::essentials(),
            vec![RecordField::Rank, RecordField::Name, RecordField::NetWorth]
        );
    }
}
