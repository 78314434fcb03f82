use serde::{Deserialize, Serialize};

pub type Result<T> = std::result::Result<T, Box<dyn std::error::Error + Send + Sync>>;

/// One extracted staff-directory entry. Every field is always present;
/// anything the page didn't yield stays an empty string.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StaffRecord {
    pub name: String,
    pub email: String,
    pub title: String,
    pub phone: String,
    pub department: String,
    pub source_url: String,
}

/// Running totals for a batch. Nothing per-record is retained across URLs.
#[derive(Debug, Clone, Default)]
pub struct BatchSummary {
    pub urls_processed: usize,
    pub records_extracted: usize,
    pub failed_or_empty: usize,
}
