// wealthscope-core/src/ports/source.rs

// Where the dataset text comes from. The loader only sees the text,
// never the file system or the network.

use crate::error::WealthscopeError;
use async_trait::async_trait;

#[async_trait]
pub trait DatasetSource: Send + Sync {
    /// Fetches the whole CSV document as text.
    async fn fetch_text(&self) -> Result<String, WealthscopeError>;

    /// Human readable location, used in logs and error messages.
    fn describe(&self) -> String;
}
