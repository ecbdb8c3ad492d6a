// wealthscope/src/cli.rs
//
// Single source of truth for all CLI definitions (Clap structs).

use clap::{Args, Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

use wealthscope_core::domain::query::{FilterCriteria, SortConfig, SortDirection};
use wealthscope_core::domain::record::{RecordField, ValidationStatus};
use wealthscope_core::domain::stats::ChartSort;
use wealthscope_core::infrastructure::export::ExportFormat;

#[derive(Parser)]
#[command(name = "wealthscope")]
#[command(about = "Explore, audit and export the Forbes billionaires dataset", long_about = None)]
#[command(version)]
pub struct Cli {
    #[command(flatten)]
    pub global: GlobalArgs,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Args, Debug, Clone)]
pub struct GlobalArgs {
    /// Project directory (where wealthscope.yaml lives)
    #[arg(long, global = true, default_value = ".")]
    pub project_dir: PathBuf,

    /// Explicit configuration file
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Dataset CSV, overrides `dataset.path`
    #[arg(long, global = true)]
    pub data: Option<PathBuf>,

    /// Quality annotation seed, overrides `quality.seed`
    #[arg(long, global = true)]
    pub seed: Option<u64>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// 📊 Dataset summary: ranges, top countries, quality score
    Overview,

    /// 📋 Filtered, sorted, paginated records
    Browse {
        #[command(flatten)]
        filters: FilterArgs,

        #[command(flatten)]
        sort: SortArgs,

        /// 1-based page number
        #[arg(long, default_value = "1")]
        page: usize,

        /// Rows per page (defaults to `table.page-size`)
        #[arg(long)]
        page_size: Option<usize>,
    },

    /// 🔎 Looks a billionaire up by name, or suggests matches
    Find {
        query: String,

        /// Maximum number of suggestions
        #[arg(long, default_value = "8")]
        limit: usize,
    },

    /// ✅ Data quality metrics and flagged records
    Quality {
        /// Number of flagged records to list
        #[arg(long, default_value = "10")]
        issues: usize,
    },

    /// 📈 Chart groupings (geographic, demographics, wealth, trends)
    Charts {
        #[arg(value_enum)]
        kind: ChartKind,

        /// Order for the geographic chart
        #[arg(long, value_enum, default_value = "count")]
        sort_by: ChartSortArg,

        /// Number of groups for geographic and trends
        #[arg(long, default_value = "10")]
        top: usize,

        /// Also write the series as CSV to this file
        #[arg(long)]
        csv: Option<PathBuf>,
    },

    /// 💾 Writes records to CSV, JSON or Excel-compatible CSV
    Export {
        #[command(flatten)]
        filters: FilterArgs,

        #[command(flatten)]
        sort: SortArgs,

        /// csv | json | excel
        #[arg(long, default_value = "csv")]
        format: ExportFormat,

        /// Columns to export, comma separated (default: rank,name,netWorth)
        #[arg(long, value_delimiter = ',')]
        columns: Vec<RecordField>,

        /// Export every column
        #[arg(long, conflicts_with = "columns")]
        all_columns: bool,

        /// Leave out the dataQualityFlags column
        #[arg(long)]
        no_quality_flags: bool,

        /// Drop records whose validation status is error
        #[arg(long)]
        exclude_errors: bool,

        /// Add validationStatus, hasIssues and issueCount
        #[arg(long)]
        validation_column: bool,

        /// Title stored in JSON exports
        #[arg(long)]
        title: Option<String>,

        /// Output directory (defaults to `export.output-dir`)
        #[arg(long)]
        output_dir: Option<PathBuf>,
    },

    /// 🔖 Saved filter presets
    Presets {
        #[command(subcommand)]
        action: PresetAction,
    },
}

#[derive(Subcommand)]
pub enum PresetAction {
    /// Lists saved presets (the defaults when none were saved)
    List,

    /// Saves the given filters under a name, replacing a preset with the same name
    Save {
        #[arg(long)]
        name: String,

        #[arg(long, default_value = "")]
        description: String,

        #[command(flatten)]
        filters: FilterArgs,
    },
}

#[derive(Args, Debug, Clone, Default)]
pub struct FilterArgs {
    /// Start from a saved preset; other filter flags are added on top
    #[arg(long)]
    pub preset: Option<String>,

    /// Case-insensitive text in name, source or country
    #[arg(long, short)]
    pub search: Option<String>,

    /// Country (repeatable)
    #[arg(long = "country")]
    pub countries: Vec<String>,

    /// Source (repeatable)
    #[arg(long = "source")]
    pub sources: Vec<String>,

    #[arg(long)]
    pub min_age: Option<u32>,

    #[arg(long)]
    pub max_age: Option<u32>,

    /// Millions of USD
    #[arg(long)]
    pub min_worth: Option<f64>,

    /// Millions of USD
    #[arg(long)]
    pub max_worth: Option<f64>,

    /// valid | warning | error (repeatable)
    #[arg(long = "status")]
    pub statuses: Vec<ValidationStatus>,
}

impl FilterArgs {
    /// Merges the flags over `base` (a preset's filters, or nothing).
    pub fn to_criteria(&self, base: Option<FilterCriteria>) -> FilterCriteria {
        let mut criteria = base.unwrap_or_default();
        if let Some(search) = &self.search {
            criteria.search = Some(search.clone());
        }
        criteria.countries.extend(self.countries.iter().cloned());
        criteria.sources.extend(self.sources.iter().cloned());
        if self.min_age.is_some() || self.max_age.is_some() {
            criteria.age_range = Some((
                self.min_age.unwrap_or(0),
                self.max_age.unwrap_or(u32::MAX),
            ));
        }
        if self.min_worth.is_some() || self.max_worth.is_some() {
            criteria.net_worth_range = Some((
                self.min_worth.unwrap_or(0.0),
                self.max_worth.unwrap_or(f64::MAX),
            ));
        }
        criteria.quality_status.extend(self.statuses.iter().copied());
        criteria
    }
}

#[derive(Args, Debug, Clone, Default)]
pub struct SortArgs {
    /// Sort field (rank, name, netWorth, age, country, source, change, percentageChange)
    #[arg(long)]
    pub sort: Option<RecordField>,

    /// Sort descending
    #[arg(long)]
    pub desc: bool,
}

impl SortArgs {
    pub fn to_config(&self) -> SortConfig {
        let direction = if self.desc {
            SortDirection::Desc
        } else {
            SortDirection::Asc
        };
        SortConfig::new(self.sort.unwrap_or(RecordField::Rank), direction)
    }
}

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChartKind {
    Geographic,
    Demographics,
    Wealth,
    Trends,
}

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChartSortArg {
    Count,
    Value,
}

impl From<ChartSortArg> for ChartSort {
    fn from(arg: ChartSortArg) -> Self {
        match arg {
            ChartSortArg::Count => ChartSort::Count,
            ChartSortArg::Value => ChartSort::Value,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use anyhow::{Result, bail};
    use clap::Parser;

    #[test]
    fn test_cli_parse_browse_defaults() -> Result<()> {
        let args = Cli::parse_from(["wealthscope", "browse"]);
        assert_eq!(args.global.project_dir.to_string_lossy(), ".");
        match args.command {
            Commands::Browse {
                filters,
                sort,
                page,
                page_size,
            } => {
                assert_eq!(page, 1);
                assert_eq!(page_size, None);
                assert!(filters.to_criteria(None).is_empty());
                assert_eq!(sort.to_config(), SortConfig::default());
                Ok(())
            }
            _ => bail!("Expected Browse command"),
        }
    }

    #[test]
    fn test_cli_parse_browse_filters() -> Result<()> {
        let args = Cli::parse_from([
            "wealthscope",
            "browse",
            "--country",
            "France",
            "--country",
            "Spain",
            "--min-age",
            "40",
            "--status",
            "error",
            "--sort",
            "net-worth",
            "--desc",
        ]);
        match args.command {
            Commands::Browse { filters, sort, .. } => {
                let criteria = filters.to_criteria(None);
                assert_eq!(criteria.countries, vec!["France", "Spain"]);
                assert_eq!(criteria.age_range, Some((40, u32::MAX)));
                assert_eq!(criteria.quality_status, vec![ValidationStatus::Error]);
                assert_eq!(
                    sort.to_config(),
                    SortConfig::new(RecordField::NetWorth, SortDirection::Desc)
                );
                Ok(())
            }
            _ => bail!("Expected Browse command"),
        }
    }

    #[test]
    fn test_cli_parse_export() -> Result<()> {
        let args = Cli::parse_from([
            "wealthscope",
            "export",
            "--format",
            "json",
            "--columns",
            "rank,name,country",
            "--exclude-errors",
            "--data",
            "/tmp/forbes.csv",
        ]);
        assert_eq!(
            args.global.data.map(|p| p.to_string_lossy().into_owned()),
            Some("/tmp/forbes.csv".to_string())
        );
        match args.command {
            Commands::Export {
                format,
                columns,
                exclude_errors,
                all_columns,
                ..
            } => {
                assert_eq!(format, ExportFormat::Json);
                assert_eq!(
                    columns,
                    vec![RecordField::Rank, RecordField::Name, RecordField::Country]
                );
                assert!(exclude_errors);
                assert!(!all_columns);
                Ok(())
            }
            _ => bail!("Expected Export command"),
        }
    }

    #[test]
    fn test_cli_parse_charts() -> Result<()> {
        let args = Cli::parse_from(["wealthscope", "charts", "geographic", "--sort-by", "value"]);
        match args.command {
            Commands::Charts {
                kind, sort_by, top, ..
            } => {
                assert_eq!(kind, ChartKind::Geographic);
                assert_eq!(ChartSort::from(sort_by), ChartSort::Value);
                assert_eq!(top, 10);
                Ok(())
            }
            _ => bail!("Expected Charts command"),
        }
    }

    #[test]
    fn test_preset_base_is_extended() {
        let filters = FilterArgs {
            countries: vec!["Chile".into()],
            ..Default::default()
        };
        let base = FilterCriteria {
            countries: vec!["Peru".into()],
            search: Some("mining".into()),
            ..Default::default()
        };
        let criteria = filters.to_criteria(Some(base));
        assert_eq!(criteria.countries, vec!["Peru", "Chile"]);
        assert_eq!(criteria.search.as_deref(), Some("mining"));
    }
}
