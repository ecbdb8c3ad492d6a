// wealthscope-core/src/domain/record/issue.rs

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::domain::error::DomainError;
use crate::domain::record::field::RecordField;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum IssueType {
    Parsing,
    Format,
    Missing,
    Encoding,
}

impl IssueType {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Parsing => "parsing",
            Self::Format => "format",
            Self::Missing => "missing",
            Self::Encoding => "encoding",
        }
    }
}

impl fmt::Display for IssueType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

// Declaration order gives Low < Medium < High.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Low,
    Medium,
    High,
}

impl Severity {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Low => "low",
            Self::Medium => "medium",
            Self::High => "high",
        }
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DataQualityIssue {
    pub field: RecordField,
    #[serde(rename = "type")]
    pub issue_type: IssueType,
    pub severity: Severity,
    pub description: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub suggestion: Option<String>,
}

impl DataQualityIssue {
    pub fn new(
        field: RecordField,
        issue_type: IssueType,
        severity: Severity,
        description: impl Into<String>,
    ) -> Self {
        Self {
            field,
            issue_type,
            severity,
            description: description.into(),
            suggestion: None,
        }
    }

    pub fn with_suggestion(mut self, suggestion: impl Into<String>) -> Self {
        self.suggestion = Some(suggestion.into());
        self
    }

    /// Compact `field:type:severity` flag used by exports.
    pub fn flag(&self) -> String {
        format!("{}:{}:{}", self.field, self.issue_type, self.severity)
    }
}

/// Tri-state summary of a record's issues.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum ValidationStatus {
    #[default]
    Valid,
    Warning,
    Error,
}

impl ValidationStatus {
    /// `error` if any issue is high severity, `warning` if there is any other
    /// issue, `valid` otherwise.
    pub fn from_issues(issues: &[DataQualityIssue]) -> Self {
        if issues.iter().any(|i| i.severity == Severity::High) {
            Self::Error
        } else if !issues.is_empty() {
            Self::Warning
        } else {
            Self::Valid
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Valid => "valid",
            Self::Warning => "warning",
            Self::Error => "error",
        }
    }
}

impl fmt::Display for ValidationStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for ValidationStatus {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "valid" => Ok(Self::Valid),
            "warning" => Ok(Self::Warning),
            "error" => Ok(Self::Error),
            _ => Err(DomainError::UnknownStatus(s.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn issue(severity: Severity) -> DataQualityIssue {
        DataQualityIssue::new(RecordField::Name, IssueType::Encoding, severity, "test")
    }

    #[test]
    fn test_status_from_no_issues_is_valid() {
        assert_eq!(ValidationStatus::from_issues(&[]), ValidationStatus::Valid);
    }

    #[test]
    fn test_status_high_severity_wins() {
        let issues = vec![issue(Severity::Low), issue(Severity::High), issue(Severity::Medium)];
        assert_eq!(ValidationStatus::from_issues(&issues), ValidationStatus::Error);
    }

    #[test]
    fn test_status_low_and_medium_is_warning() {
        let issues = vec![issue(Severity::Low), issue(Severity::Medium)];
        assert_eq!(ValidationStatus::from_issues(&issues), ValidationStatus::Warning);
    }

    #[test]
    fn test_issue_flag_format() {
        let i = DataQualityIssue::new(
            RecordField::NetWorth,
            IssueType::Parsing,
            Severity::High,
            "Currency format issue",
        );
        assert_eq!(i.flag(), "netWorth:parsing:high");
    }

    #[test]
    fn test_issue_serializes_type_key() -> anyhow::Result<()> {
        let json = serde_json::to_value(issue(Severity::Medium))?;
        assert_eq!(json["type"], "encoding");
        assert_eq!(json["field"], "name");
        assert_eq!(json["severity"], "medium");
        assert!(json.get("suggestion").is_none());
        Ok(())
    }
}
