use super::{element_text, ContactExtractor, ExtractionStrategy};
use crate::models::StaffRecord;
use regex::Regex;
use scraper::{ElementRef, Html, Selector};
use tracing::debug;

/// Definition lists pairing `<dt>` category terms with `<dd>` staff details.
/// Each list starts over at "Unknown Department"; every non-empty term text
/// becomes the category for the details that follow it.
pub struct DefinitionListStrategy {
    list_selector: Selector,
    item_selector: Selector,
    title_lead_in: Regex,
    contacts: ContactExtractor,
}

impl DefinitionListStrategy {
    pub fn new() -> Self {
        Self {
            list_selector: Selector::parse("dl").unwrap(),
            item_selector: Selector::parse("dt, dd").unwrap(),
            // Separator residue left at the front of the title after the
            // name/title split: commas, hyphens, en dashes, whitespace.
            title_lead_in: Regex::new(r"^[,\-\u{2013}\s]+").unwrap(),
            contacts: ContactExtractor::new(),
        }
    }

    fn record_from_details(
        &self,
        details: ElementRef,
        category: &str,
        source_url: &str,
    ) -> Option<StaffRecord> {
        let text = element_text(details);
        if text.is_empty() {
            return None;
        }

        let (email, phone) = self.contacts.find_contact_info(&[details]);

        // Strip the contact substrings so they don't end up in the
        // name/title split.
        let mut cleaned = text;
        if !email.is_empty() {
            cleaned = cleaned.replace(&email, "");
        }
        if !phone.is_empty() {
            cleaned = cleaned.replace(&phone, "");
        }

        // Best-effort split at the first whitespace run: everything after
        // the first token lands in the title, so multi-word names lose
        // their tail to it.
        let cleaned = cleaned.trim();
        let mut parts = cleaned.splitn(2, char::is_whitespace);
        let name = parts.next().unwrap_or("").to_string();
        let rest = parts.next().unwrap_or("");
        let title = self.title_lead_in.replace(rest, "").trim().to_string();

        if name.is_empty() {
            return None;
        }
        Some(StaffRecord {
            name,
            email,
            title,
            phone,
            department: category.to_string(),
            source_url: source_url.to_string(),
        })
    }
}

impl ExtractionStrategy for DefinitionListStrategy {
    fn name(&self) -> &'static str {
        "definition list"
    }

    fn extract(&self, document: &Html, source_url: &str) -> Vec<StaffRecord> {
        let lists: Vec<_> = document.select(&self.list_selector).collect();
        if lists.is_empty() {
            return Vec::new();
        }
        debug!("Trying definition list format, {} lists", lists.len());

        let mut records = Vec::new();
        for list in lists {
            let mut current_category = String::from("Unknown Department");
            for item in list.select(&self.item_selector) {
                match item.value().name() {
                    "dt" => {
                        let category = element_text(item);
                        if !category.is_empty() {
                            debug!("Detected category: {}", category);
                            current_category = category;
                        }
                    }
                    "dd" => {
                        if let Some(record) =
                            self.record_from_details(item, &current_category, source_url)
                        {
                            records.push(record);
                        }
                    }
                    _ => {}
                }
            }
        }
        records
    }
}
