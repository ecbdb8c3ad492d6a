// wealthscope-core/src/infrastructure/export/mod.rs

pub mod charts;
pub mod format;
pub mod row;
pub mod writer;

pub use charts::render_chart_csv;
pub use format::{ExportFormat, ExportOptions};
pub use row::ExportRow;
pub use writer::{ExportInfo, export_filename, render, render_csv, render_json};
