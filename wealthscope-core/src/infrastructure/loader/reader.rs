// wealthscope-core/src/infrastructure/loader/reader.rs

use csv::{ReaderBuilder, StringRecord, Trim};
use rand::Rng;
use serde::Serialize;
use tracing::{debug, instrument};

use crate::domain::quality::QualityAnnotator;
use crate::domain::record::{BillionaireRecord, RawRow};
use crate::infrastructure::error::InfrastructureError;

/// Progress is reported every this many processed rows.
pub const PROGRESS_INTERVAL: usize = 100;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct LoadProgress {
    pub loaded: usize,
    pub total: usize,
    /// `round(loaded / total * 100)`, 0 when `total` is 0.
    pub percentage: u32,
}

impl LoadProgress {
    pub fn new(loaded: usize, total: usize) -> Self {
        let percentage = if total == 0 {
            0
        } else {
            ((loaded as f64 / total as f64) * 100.0 + 0.5).floor() as u32
        };
        Self {
            loaded,
            total,
            percentage,
        }
    }
}

/// Number of data rows announced for progress: non-blank lines minus the header.
pub fn count_data_lines(text: &str) -> usize {
    text.lines()
        .filter(|line| !line.trim().is_empty())
        .count()
        .saturating_sub(1)
}

/// Position of each known column in the header. Only `Rank` is mandatory.
#[derive(Debug, Clone, Copy)]
struct ColumnIndex {
    rank: usize,
    name: Option<usize>,
    net_worth: Option<usize>,
    change: Option<usize>,
    percentage_change: Option<usize>,
    age: Option<usize>,
    source: Option<usize>,
    country: Option<usize>,
}

impl ColumnIndex {
    fn from_headers(headers: &StringRecord) -> Result<Self, InfrastructureError> {
        let find = |name: &str| headers.iter().position(|h| h.trim() == name);
        Ok(Self {
            rank: find("Rank").ok_or_else(|| InfrastructureError::MissingColumn("Rank".into()))?,
            name: find("Name"),
            net_worth: find("Net Worth"),
            change: find("Change"),
            percentage_change: find("Percentage Change"),
            age: find("Age"),
            source: find("Source"),
            country: find("Country/Territory"),
        })
    }

    fn row(&self, record: &StringRecord) -> RawRow {
        let cell = |idx: Option<usize>| {
            idx.and_then(|i| record.get(i))
                .unwrap_or_default()
                .to_string()
        };
        RawRow {
            rank: cell(Some(self.rank)),
            name: cell(self.name),
            net_worth: cell(self.net_worth),
            change: cell(self.change),
            percentage_change: cell(self.percentage_change),
            age: cell(self.age),
            source: cell(self.source),
            country: cell(self.country),
        }
    }
}

/// Single forward pass over the data rows of a CSV document.
///
/// Yields `(processed, row)` where `processed` counts every data row read so
/// far, including the ones skipped because their `Rank` cell is empty.
pub struct CsvRows<'t> {
    reader: csv::Reader<&'t [u8]>,
    columns: ColumnIndex,
    record: StringRecord,
    processed: usize,
}

impl<'t> CsvRows<'t> {
    pub fn new(text: &'t str) -> Result<Self, InfrastructureError> {
        let mut reader = ReaderBuilder::new()
            .has_headers(true)
            .flexible(true)
            .trim(Trim::Headers)
            .from_reader(text.as_bytes());
        let columns = ColumnIndex::from_headers(reader.headers()?)?;
        Ok(Self {
            reader,
            columns,
            record: StringRecord::new(),
            processed: 0,
        })
    }

    pub fn processed(&self) -> usize {
        self.processed
    }

    /// Reads the next data row. Rows with an empty `Rank` are returned as `None`
    /// inside `Some(Ok(..))` so the caller can still account for them.
    pub fn next_row(&mut self) -> Option<Result<Option<RawRow>, InfrastructureError>> {
        match self.reader.read_record(&mut self.record) {
            Ok(false) => None,
            Ok(true) => {
                self.processed += 1;
                let row = self.columns.row(&self.record);
                Some(Ok((!row.rank.is_empty()).then_some(row)))
            }
            Err(e) => Some(Err(e.into())),
        }
    }
}

impl Iterator for CsvRows<'_> {
    type Item = Result<RawRow, InfrastructureError>;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            match self.next_row()? {
                Ok(Some(row)) => return Some(Ok(row)),
                Ok(None) => continue,
                Err(e) => return Some(Err(e)),
            }
        }
    }
}

/// Reads at most `limit` data rows and annotates the ones that carry a rank.
#[instrument(skip(text, annotator))]
pub fn load_bounded<R: Rng>(
    text: &str,
    limit: usize,
    annotator: &mut QualityAnnotator<R>,
) -> Result<Vec<BillionaireRecord>, InfrastructureError> {
    let mut rows = CsvRows::new(text)?;
    let mut records = Vec::with_capacity(limit.min(4096));

    while rows.processed() < limit {
        match rows.next_row() {
            None => break,
            Some(row) => {
                if let Some(raw) = row? {
                    records.push(annotator.annotate(&raw));
                }
            }
        }
    }

    debug!(records = records.len(), "Bounded load finished");
    Ok(records)
}

/// Reads the whole document in one pass, yielding to the runtime after every
/// `chunk_size` rows and reporting progress every [`PROGRESS_INTERVAL`] rows.
#[instrument(skip(text, annotator, on_progress))]
pub async fn load_chunked<R, F>(
    text: &str,
    chunk_size: usize,
    annotator: &mut QualityAnnotator<R>,
    mut on_progress: F,
) -> Result<Vec<BillionaireRecord>, InfrastructureError>
where
    R: Rng,
    F: FnMut(LoadProgress),
{
    let chunk_size = chunk_size.max(1);
    let total = count_data_lines(text);
    let mut rows = CsvRows::new(text)?;
    let mut records = Vec::with_capacity(total);

    while let Some(row) = rows.next_row() {
        if let Some(raw) = row? {
            records.push(annotator.annotate(&raw));
        }

        let processed = rows.processed();
        if processed % PROGRESS_INTERVAL == 0 {
            on_progress(LoadProgress::new(processed, total));
        }
        if processed % chunk_size == 0 {
            tokio::task::yield_now().await;
        }
    }

    debug!(records = records.len(), total, "Chunked load finished");
    Ok(records)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::quality::{QualityConfig, QualityMode};

    const SAMPLE: &str = " Rank , Name,Net Worth,Age,Country/Territory,Source,Change,Percentage Change,Extra\n\
1,Elon Musk,$219.0 B,50,United States,\"Tesla, SpaceX\",+$68.0 B,+45.1%,x\n\
\n\
,No Rank,$1.0 B,40,France,Retail,0,0%,x\n\
2,Jeff Bezos,$171.0 B,58,United States,Amazon,+$5.0 B,+3.0%,x\n";

    fn quiet() -> QualityAnnotator<rand::rngs::StdRng> {
        QualityAnnotator::from_config(&QualityConfig {
            mode: QualityMode::Off,
            ..Default::default()
        })
    }

    fn many_rows(n: usize) -> String {
        let mut text = String::from("Rank,Name,Net Worth,Age,Source,Country/Territory\n");
        for i in 1..=n {
            text.push_str(&format!("{i},Person {i},$1.{i} B,{},Retail,Chile\n", 30 + i % 50));
        }
        text
    }

    #[test]
    fn test_headers_are_matched_by_trimmed_name() -> anyhow::Result<()> {
        let rows: Vec<RawRow> = CsvRows::new(SAMPLE)?.collect::<Result<_, _>>()?;
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].rank, "1");
        assert_eq!(rows[0].source, "Tesla, SpaceX");
        assert_eq!(rows[0].country, "United States");
        assert_eq!(rows[1].name, "Jeff Bezos");
        Ok(())
    }

    #[test]
    fn test_missing_rank_column_is_an_error() {
        let result = CsvRows::new("Name,Age\nA,1\n");
        assert!(matches!(result, Err(InfrastructureError::MissingColumn(c)) if c == "Rank"));
    }

    #[test]
    fn test_count_data_lines_ignores_blank_lines() {
        assert_eq!(count_data_lines(SAMPLE), 3);
        assert_eq!(count_data_lines(""), 0);
    }

    #[test]
    fn test_progress_percentage_rounds() {
        assert_eq!(LoadProgress::new(100, 300).percentage, 33);
        assert_eq!(LoadProgress::new(200, 300).percentage, 67);
        assert_eq!(LoadProgress::new(5, 0).percentage, 0);
    }

    #[test]
    fn test_bounded_load_stops_at_limit() -> anyhow::Result<()> {
        let text = many_rows(30);
        let records = load_bounded(&text, 10, &mut quiet())?;
        assert_eq!(records.len(), 10);
        assert_eq!(records[9].rank(), 10);
        Ok(())
    }

    #[tokio::test]
    async fn test_chunked_load_reports_progress_and_keeps_order() -> anyhow::Result<()> {
        let text = many_rows(250);
        let mut seen = Vec::new();
        let records = load_chunked(&text, 40, &mut quiet(), |p| seen.push(p)).await?;

        assert_eq!(records.len(), 250);
        assert!(records.windows(2).all(|w| w[0].rank() < w[1].rank()));
        assert_eq!(
            seen,
            vec![LoadProgress::new(100, 250), LoadProgress::new(200, 250)]
        );
        assert_eq!(seen[1].percentage, 80);
        Ok(())
    }

    #[tokio::test]
    async fn test_chunked_and_bounded_agree() -> anyhow::Result<()> {
        let text = many_rows(120);
        let config = QualityConfig::default();
        let bounded = load_bounded(&text, 1000, &mut QualityAnnotator::from_config(&config))?;
        let chunked =
            load_chunked(&text, 500, &mut QualityAnnotator::from_config(&config), |_| {}).await?;
        assert_eq!(bounded, chunked);
        Ok(())
    }
}
