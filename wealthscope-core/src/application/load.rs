// wealthscope-core/src/application/load.rs

use tracing::{error, info, instrument};

use crate::domain::configuration::{AppConfig, LoadStrategy};
use crate::domain::quality::QualityAnnotator;
use crate::domain::record::BillionaireRecord;
use crate::error::WealthscopeError;
use crate::infrastructure::loader::{self, LoadProgress};
use crate::ports::DatasetSource;

/// First `dataset.row_limit` rows (1000 by default).
#[instrument(skip(source, config), fields(source = %source.describe()))]
pub async fn try_load_bounded(
    source: &dyn DatasetSource,
    config: &AppConfig,
) -> Result<Vec<BillionaireRecord>, WealthscopeError> {
    let text = source.fetch_text().await?;
    let mut annotator = QualityAnnotator::from_config(&config.quality);
    let records = loader::load_bounded(&text, config.dataset.row_limit, &mut annotator)?;
    info!("Loaded {} billionaire records (limited to {})", records.len(), config.dataset.row_limit);
    Ok(records)
}

/// Whole dataset, streamed in `dataset.chunk_size` chunks.
#[instrument(skip(source, config, on_progress), fields(source = %source.describe()))]
pub async fn try_load_chunked<F>(
    source: &dyn DatasetSource,
    config: &AppConfig,
    on_progress: F,
) -> Result<Vec<BillionaireRecord>, WealthscopeError>
where
    F: FnMut(LoadProgress),
{
    let text = source.fetch_text().await?;
    let mut annotator = QualityAnnotator::from_config(&config.quality);
    let records =
        loader::load_chunked(&text, config.dataset.chunk_size, &mut annotator, on_progress).await?;
    info!("Loaded {} billionaire records in chunks", records.len());
    Ok(records)
}

/// Like [`try_load_bounded`], but a failure is logged and yields no records.
pub async fn load_bounded(source: &dyn DatasetSource, config: &AppConfig) -> Vec<BillionaireRecord> {
    try_load_bounded(source, config)
        .await
        .unwrap_or_else(|e| log_failure(&e))
}

/// Like [`try_load_chunked`], but a failure is logged and yields no records.
pub async fn load_chunked<F>(
    source: &dyn DatasetSource,
    config: &AppConfig,
    on_progress: F,
) -> Vec<BillionaireRecord>
where
    F: FnMut(LoadProgress),
{
    try_load_chunked(source, config, on_progress)
        .await
        .unwrap_or_else(|e| log_failure(&e))
}

/// Runs the loader selected by `dataset.strategy`.
pub async fn try_load_records<F>(
    source: &dyn DatasetSource,
    config: &AppConfig,
    on_progress: F,
) -> Result<Vec<BillionaireRecord>, WealthscopeError>
where
    F: FnMut(LoadProgress),
{
    match config.dataset.strategy {
        LoadStrategy::Chunked => try_load_chunked(source, config, on_progress).await,
        LoadStrategy::Bounded => try_load_bounded(source, config).await,
    }
}

fn log_failure(err: &WealthscopeError) -> Vec<BillionaireRecord> {
    error!(error = %err, "Error loading billionaire data");
    Vec::new()
}

/// User facing text for a failed load.
pub fn describe_load_failure(message: &str) -> String {
    let lower = message.to_lowercase();
    if lower.contains("memory") || lower.contains("allocation") {
        "The application ran out of memory while processing the dataset. \
         This usually happens with very large CSV files. \
         Try reloading, or use a smaller dataset (see `dataset.strategy: bounded`)."
            .to_string()
    } else {
        "Something went wrong while loading the dataset. Please try reloading.".to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::quality::{QualityConfig, QualityMode};
    use crate::infrastructure::error::InfrastructureError;
    use async_trait::async_trait;

    struct StaticSource(Result<String, String>);

    #[async_trait]
    impl DatasetSource for StaticSource {
        async fn fetch_text(&self) -> Result<String, WealthscopeError> {
            self.0
                .clone()
                .map_err(|e| InfrastructureError::DatasetNotFound(e).into())
        }

        fn describe(&self) -> String {
            "static".into()
        }
    }

    fn dataset(rows: usize) -> StaticSource {
        let mut text = String::from("Rank,Name,Net Worth,Age,Source,Country/Territory\n");
        for i in 1..=rows {
            text.push_str(&format!("{i},Person {i},${i}.0 B,{},Retail,Peru\n", 40 + i % 30));
        }
        StaticSource(Ok(text))
    }

    fn config(strategy: LoadStrategy, row_limit: usize) -> AppConfig {
        let mut config = AppConfig::default();
        config.dataset.strategy = strategy;
        config.dataset.row_limit = row_limit;
        config.quality = QualityConfig {
            mode: QualityMode::Off,
            ..Default::default()
        };
        config
    }

    #[tokio::test]
    async fn test_bounded_respects_row_limit() {
        let records = load_bounded(&dataset(50), &config(LoadStrategy::Bounded, 20)).await;
        assert_eq!(records.len(), 20);
    }

    #[tokio::test]
    async fn test_strategy_dispatch() -> anyhow::Result<()> {
        let source = dataset(50);
        let chunked =
            try_load_records(&source, &config(LoadStrategy::Chunked, 20), |_| {}).await?;
        let bounded =
            try_load_records(&source, &config(LoadStrategy::Bounded, 20), |_| {}).await?;
        assert_eq!(chunked.len(), 50);
        assert_eq!(bounded.len(), 20);
        assert_eq!(&chunked[..20], &bounded[..]);
        Ok(())
    }

    #[tokio::test]
    async fn test_failure_yields_empty_and_try_variant_errors() {
        let source = StaticSource(Err("gone".into()));
        let config = AppConfig::default();

        assert!(load_chunked(&source, &config, |_| {}).await.is_empty());
        assert!(load_bounded(&source, &config).await.is_empty());
        assert!(try_load_bounded(&source, &config).await.is_err());
    }

    #[tokio::test]
    async fn test_same_seed_same_annotations() -> anyhow::Result<()> {
        let source = dataset(400);
        let mut config = AppConfig::default();
        config.quality.profile = crate::domain::quality::QualityProfile::Standard;

        let first = try_load_chunked(&source, &config, |_| {}).await?;
        let second = try_load_chunked(&source, &config, |_| {}).await?;
        assert_eq!(first, second);
        Ok(())
    }

    #[test]
    fn test_describe_load_failure() {
        assert!(describe_load_failure("Out Of Memory").contains("ran out of memory"));
        assert!(describe_load_failure("Array buffer allocation failed").contains("ran out of memory"));
        assert!(describe_load_failure("file not found").starts_with("Something went wrong"));
        assert!(describe_load_failure("x").contains("reloading"));
    }
}
