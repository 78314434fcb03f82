use super::{element_text, ContactExtractor, ExtractionStrategy};
use crate::models::StaffRecord;
use scraper::{ElementRef, Html, Selector};
use tracing::debug;

/// The first `<table>` on the page, read as alternating category-heading
/// rows and data rows. The current category carries forward until the next
/// heading; rows before any heading fall under "General".
pub struct GenericTableStrategy {
    table_selector: Selector,
    row_selector: Selector,
    cell_selector: Selector,
    link_selector: Selector,
    image_selector: Selector,
    contacts: ContactExtractor,
}

impl GenericTableStrategy {
    pub fn new() -> Self {
        Self {
            table_selector: Selector::parse("table").unwrap(),
            row_selector: Selector::parse("tr").unwrap(),
            cell_selector: Selector::parse("td").unwrap(),
            link_selector: Selector::parse("a").unwrap(),
            image_selector: Selector::parse("img").unwrap(),
            contacts: ContactExtractor::new(),
        }
    }

    /// A heading row has either a single non-empty cell, or a first cell
    /// that spans columns with short, link-free text.
    fn heading_text(&self, cells: &[ElementRef]) -> Option<String> {
        let first = cells[0];
        let text = element_text(first);
        if text.is_empty() {
            return None;
        }

        let single_cell = cells.len() == 1;
        let spanning = first.value().attr("colspan").is_some()
            && text.chars().count() < 50
            && first.select(&self.link_selector).next().is_none();

        (single_cell || spanning).then_some(text)
    }
}

impl ExtractionStrategy for GenericTableStrategy {
    fn name(&self) -> &'static str {
        "generic table"
    }

    fn extract(&self, document: &Html, source_url: &str) -> Vec<StaffRecord> {
        let Some(table) = document.select(&self.table_selector).next() else {
            return Vec::new();
        };
        debug!("Trying generic table format");

        let mut current_category = String::from("General");
        let mut records = Vec::new();

        for row in table.select(&self.row_selector) {
            let cells: Vec<_> = row.select(&self.cell_selector).collect();
            // Header rows (th only) and empty rows carry no data cells.
            if cells.is_empty() {
                continue;
            }

            if let Some(category) = self.heading_text(&cells) {
                debug!("Detected category: {}", category);
                current_category = category;
                continue;
            }

            // A leading image cell is presumed to be an avatar column.
            let start = if cells[0].select(&self.image_selector).next().is_some()
                && cells.len() > 1
            {
                1
            } else {
                0
            };

            let name_cell = cells[start];
            let name = match name_cell.select(&self.link_selector).next() {
                Some(link) => element_text(link),
                None => element_text(name_cell),
            };
            let title = cells
                .get(start + 1)
                .map(|cell| element_text(*cell))
                .unwrap_or_default();
            let (email, phone) = self.contacts.find_contact_info(&cells);

            if name.is_empty() {
                continue;
            }
            records.push(StaffRecord {
                name,
                email,
                title,
                phone,
                department: current_category.clone(),
                source_url: source_url.to_string(),
            });
        }
        records
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn extract(html: &str) -> Vec<StaffRecord> {
        let document = Html::parse_document(html);
        GenericTableStrategy::new().extract(&document, "https://example.com/staff")
    }

    #[test]
    fn no_table_yields_nothing() {
        let records = extract("<div><p>No staff listing</p></div>");
        assert!(records.is_empty());
    }

    #[test]
    fn rows_before_any_heading_default_to_general() {
        let records = extract(
            r#"<table>
                <tr><td>Jane Doe</td><td>Head Coach</td></tr>
            </table>"#,
        );
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].name, "Jane Doe");
        assert_eq!(records[0].title, "Head Coach");
        assert_eq!(records[0].department, "General");
    }

    #[test]
    fn single_cell_rows_become_category_headings() {
        let records = extract(
            r#"<table>
                <tr><td>Men's Basketball</td></tr>
                <tr><td>Jane Doe</td><td>Head Coach</td></tr>
                <tr><td>Sam Lee</td><td>Assistant Coach</td></tr>
                <tr><td>Women's Soccer</td></tr>
                <tr><td>Ann Ray</td><td>Head Coach</td></tr>
            </table>"#,
        );
        assert_eq!(records.len(), 3);
        assert_eq!(records[0].department, "Men's Basketball");
        assert_eq!(records[1].department, "Men's Basketball");
        assert_eq!(records[2].department, "Women's Soccer");
    }

    #[test]
    fn colspan_rows_with_short_linkfree_text_are_headings() {
        let records = extract(
            r#"<table>
                <tr><td colspan="3">Athletics Department</td></tr>
                <tr><td>Jane Doe</td><td>Director</td><td></td></tr>
            </table>"#,
        );
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].department, "Athletics Department");
    }

    #[test]
    fn colspan_rows_containing_links_are_data_rows() {
        let records = extract(
            r#"<table>
                <tr><td colspan="2"><a href="/p/1">Jane Doe</a></td><td>Coach</td></tr>
            </table>"#,
        );
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].name, "Jane Doe");
        assert_eq!(records[0].department, "General");
    }

    #[test]
    fn leading_avatar_cell_is_skipped() {
        let records = extract(
            r#"<table>
                <tr>
                  <td><img src="jane.jpg"></td>
                  <td><a href="/p/jane">Jane Doe</a></td>
                  <td>Head Coach</td>
                  <td><a href="mailto:jane@example.edu">jane@example.edu</a></td>
                </tr>
            </table>"#,
        );
        assert_eq!(records.len(), 1);
        let record = &records[0];
        assert_eq!(record.name, "Jane Doe");
        assert_eq!(record.title, "Head Coach");
        assert_eq!(record.email, "jane@example.edu");
    }

    #[test]
    fn image_only_single_cell_rows_produce_nothing() {
        let records = extract(
            r#"<table>
                <tr><td><img src="banner.jpg"></td></tr>
            </table>"#,
        );
        assert!(records.is_empty());
    }

    #[test]
    fn only_the_first_table_is_read() {
        let records = extract(
            r#"<table>
                <tr><td>Jane Doe</td><td>Coach</td></tr>
            </table>
            <table>
                <tr><td>Ignored Person</td><td>Ignored Title</td></tr>
            </table>"#,
        );
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].name, "Jane Doe");
    }

    #[test]
    fn header_only_rows_are_skipped() {
        let records = extract(
            r#"<table>
                <tr><th>Name</th><th>Title</th></tr>
                <tr><td>Jane Doe</td><td>Coach</td></tr>
            </table>"#,
        );
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].name, "Jane Doe");
    }
}
