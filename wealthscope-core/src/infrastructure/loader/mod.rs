// wealthscope-core/src/infrastructure/loader/mod.rs

pub mod reader;

pub use reader::{CsvRows, LoadProgress, PROGRESS_INTERVAL, count_data_lines, load_bounded, load_chunked};
