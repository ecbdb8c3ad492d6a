// wealthscope-core/src/domain/quality/config.rs

use serde::{Deserialize, Serialize};
use validator::Validate;

/// How issues get attached to records at load time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum QualityMode {
    /// Seeded random injection of illustrative issues.
    #[default]
    Simulated,
    /// Deterministic checks of the actual field values.
    Rules,
    /// No annotation; every record is valid.
    Off,
}

/// Rate presets for the simulated mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum QualityProfile {
    /// Low rates, two categories, no value corruption.
    #[default]
    Reduced,
    /// All four categories; currency issues also corrupt the stored net worth.
    Standard,
}

/// Per-category probability of an issue draw succeeding.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, Validate)]
pub struct IssueRates {
    #[validate(range(min = 0.0, max = 1.0))]
    pub currency: f64,
    #[validate(range(min = 0.0, max = 1.0))]
    pub encoding: f64,
    #[validate(range(min = 0.0, max = 1.0))]
    pub missing: f64,
    #[validate(range(min = 0.0, max = 1.0))]
    pub source_format: f64,
}

impl IssueRates {
    pub const REDUCED: IssueRates = IssueRates {
        currency: 0.005,
        encoding: 0.001,
        missing: 0.0,
        source_format: 0.0,
    };

    pub const STANDARD: IssueRates = IssueRates {
        currency: 0.015,
        encoding: 0.005,
        missing: 0.003,
        source_format: 0.008,
    };

    pub fn for_profile(profile: QualityProfile) -> Self {
        match profile {
            QualityProfile::Reduced => Self::REDUCED,
            QualityProfile::Standard => Self::STANDARD,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
pub struct QualityConfig {
    #[serde(default)]
    pub mode: QualityMode,
    #[serde(default)]
    pub profile: QualityProfile,
    #[serde(default = "default_seed")]
    pub seed: u64,
    /// Overrides the profile's rates when set.
    #[serde(default)]
    #[validate(nested)]
    pub rates: Option<IssueRates>,
}

impl Default for QualityConfig {
    fn default() -> Self {
        Self {
            mode: QualityMode::default(),
            profile: QualityProfile::default(),
            seed: default_seed(),
            rates: None,
        }
    }
}

impl QualityConfig {
    pub fn effective_rates(&self) -> IssueRates {
        self.rates
            .unwrap_or_else(|| IssueRates::for_profile(self.profile))
    }
}

fn default_seed() -> u64 {
    42
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_use_reduced_rates() {
        let config = QualityConfig::default();
        assert_eq!(config.mode, QualityMode::Simulated);
        assert_eq!(config.effective_rates(), IssueRates::REDUCED);
    }

    #[test]
    fn test_rate_override_takes_precedence() {
        let config = QualityConfig {
            profile: QualityProfile::Standard,
            rates: Some(IssueRates {
                currency: 1.0,
                encoding: 0.0,
                missing: 0.0,
                source_format: 0.0,
            }),
            ..Default::default()
        };
        assert_eq!(config.effective_rates().currency, 1.0);
    }

    #[test]
    fn test_out_of_range_rate_fails_validation() {
        let config = QualityConfig {
            rates: Some(IssueRates {
                currency: 1.5,
                ..IssueRates::STANDARD
            }),
            ..Default::default()
        };
        assert!(config.validate().is_err());
        assert!(QualityConfig::default().validate().is_ok());
    }

    #[test]
    fn test_yaml_parses_mode_and_profile() -> anyhow::Result<()> {
        let config: QualityConfig = serde_yaml::from_str("mode: rules\nprofile: standard\n")?;
        assert_eq!(config.mode, QualityMode::Rules);
        assert_eq!(config.profile, QualityProfile::Standard);
        assert_eq!(config.seed, 42);
        Ok(())
    }
}
