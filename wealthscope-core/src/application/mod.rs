// wealthscope-core/src/application/mod.rs

pub mod export;
pub mod load;
pub mod overview;
pub mod table;

// --- RE-EXPORTS (FACADE PATTERN) ---
// The CLI can write `use wealthscope_core::application::{try_load_records, TableView};`
// without knowing the file layout.

pub use export::{ExportSession, ExportStatus, ExportSummary};
pub use load::{
    describe_load_failure, load_bounded, load_chunked, try_load_bounded, try_load_chunked,
    try_load_records,
};
pub use overview::DatasetOverview;
pub use table::TableView;
