// wealthscope-core/src/domain/error.rs

use miette::Diagnostic;
use thiserror::Error;

#[derive(Error, Debug, Diagnostic)]
pub enum DomainError {
    #[error("Unknown record field: '{0}'")]
    #[diagnostic(
        code(wealthscope::domain::field),
        help("Use one of: rank, name, netWorth, change, percentageChange, age, source, country, industry, city, selfMade, education, maritalStatus, children.")
    )]
    UnknownField(String),

    #[error("Unknown validation status: '{0}'")]
    #[diagnostic(
        code(wealthscope::domain::status),
        help("Expected one of: valid, warning, error.")
    )]
    UnknownStatus(String),

    #[error("Invalid range: min {min} is greater than max {max}")]
    #[diagnostic(code(wealthscope::domain::range))]
    InvalidRange { min: String, max: String },

    #[error("Filter preset '{0}' not found")]
    #[diagnostic(
        code(wealthscope::domain::preset_not_found),
        help("Run `wealthscope presets list` to see the saved presets.")
    )]
    PresetNotFound(String),

    #[error("Invalid configuration: {0}")]
    #[diagnostic(code(wealthscope::domain::config))]
    InvalidConfig(String),

    #[error("Unknown option value: {0}")]
    #[diagnostic(code(wealthscope::domain::option))]
    UnknownOption(String),
}
