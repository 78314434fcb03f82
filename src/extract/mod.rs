mod contact_info;
mod definition_list;
mod generic_table;
mod sidearm_table;

pub use contact_info::ContactExtractor;

use crate::models::StaffRecord;
use scraper::{ElementRef, Html};
use tracing::info;

/// One structural-pattern recognizer. Implementations are pure over the
/// parsed document: no matching structure means an empty vector, never an
/// error, and a record is produced only when a non-empty name was derived.
pub trait ExtractionStrategy {
    fn name(&self) -> &'static str;
    fn extract(&self, document: &Html, source_url: &str) -> Vec<StaffRecord>;
}

/// The recognizers in priority order: the vendor-specific table convention
/// first, then the first generic table, then definition lists.
pub fn strategy_chain() -> Vec<Box<dyn ExtractionStrategy>> {
    vec![
        Box::new(sidearm_table::SidearmTableStrategy::new()),
        Box::new(generic_table::GenericTableStrategy::new()),
        Box::new(definition_list::DefinitionListStrategy::new()),
    ]
}

/// Tries each strategy in order and keeps the first non-empty result.
/// A strategy yielding zero records is treated as "does not apply here",
/// even though a matching-but-empty page looks identical.
pub fn run_chain(
    chain: &[Box<dyn ExtractionStrategy>],
    document: &Html,
    source_url: &str,
) -> Vec<StaffRecord> {
    for strategy in chain {
        let records = strategy.extract(document, source_url);
        if !records.is_empty() {
            info!(
                "Extracted {} entries using {} format",
                records.len(),
                strategy.name()
            );
            return records;
        }
    }
    Vec::new()
}

/// Text content of an element with all runs of whitespace collapsed to
/// single spaces and the ends trimmed.
pub(crate) fn element_text(element: ElementRef) -> String {
    element
        .text()
        .collect::<Vec<_>>()
        .join(" ")
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
}
