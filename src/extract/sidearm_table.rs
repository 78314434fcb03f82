use super::{element_text, ContactExtractor, ExtractionStrategy};
use crate::models::StaffRecord;
use scraper::{Html, Selector};
use tracing::debug;

/// Staff tables produced by the Sidearm Sports platform: rows carry a
/// `s-table-body__row` class, the first cell is a photo, the second holds
/// the name link and the third the title. No per-row department column.
pub struct SidearmTableStrategy {
    row_selector: Selector,
    cell_selector: Selector,
    link_selector: Selector,
    contacts: ContactExtractor,
}

impl SidearmTableStrategy {
    pub fn new() -> Self {
        Self {
            row_selector: Selector::parse(r#"tr[class*="s-table-body__row"]"#).unwrap(),
            cell_selector: Selector::parse("td").unwrap(),
            link_selector: Selector::parse("a").unwrap(),
            contacts: ContactExtractor::new(),
        }
    }
}

impl ExtractionStrategy for SidearmTableStrategy {
    fn name(&self) -> &'static str {
        "Sidearm table"
    }

    fn extract(&self, document: &Html, source_url: &str) -> Vec<StaffRecord> {
        let rows: Vec<_> = document.select(&self.row_selector).collect();
        if rows.is_empty() {
            return Vec::new();
        }
        debug!("Trying Sidearm-style table, {} potential rows", rows.len());

        let mut records = Vec::new();
        for row in rows {
            let cells: Vec<_> = row.select(&self.cell_selector).collect();
            if cells.len() < 2 {
                continue;
            }

            let name_cell = cells[1];
            let name = match name_cell.select(&self.link_selector).next() {
                Some(link) => element_text(link),
                None => element_text(name_cell),
            };
            let title = cells.get(2).map(|cell| element_text(*cell)).unwrap_or_default();
            let (email, phone) = self.contacts.find_contact_info(&cells);

            if name.is_empty() {
                continue;
            }
            records.push(StaffRecord {
                name,
                email,
                title,
                phone,
                department: String::new(),
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
        SidearmTableStrategy::new().extract(&document, "https://example.com/staff")
    }

    #[test]
    fn no_matching_rows_yields_nothing() {
        let records = extract("<table><tr><td>Jane</td><td>Coach</td></tr></table>");
        assert!(records.is_empty());
    }

    #[test]
    fn maps_name_title_and_contact_cells() {
        let records = extract(
            r#"<table>
                <tr class="s-table-body__row">
                  <td><img src="jane.jpg"></td>
                  <td><a href="/roster/jane">Jane Doe</a></td>
                  <td>Head Coach</td>
                  <td><a href="mailto:jane@example.edu">Email</a></td>
                  <td>555-123-4567</td>
                </tr>
            </table>"#,
        );
        assert_eq!(records.len(), 1);
        let record = &records[0];
        assert_eq!(record.name, "Jane Doe");
        assert_eq!(record.title, "Head Coach");
        assert_eq!(record.email, "jane@example.edu");
        assert_eq!(record.phone, "555-123-4567");
        assert_eq!(record.department, "");
        assert_eq!(record.source_url, "https://example.com/staff");
    }

    #[test]
    fn falls_back_to_cell_text_without_a_link() {
        let records = extract(
            r#"<table>
                <tr class="s-table-body__row">
                  <td></td>
                  <td>Sam Adams</td>
                  <td>Trainer</td>
                </tr>
            </table>"#,
        );
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].name, "Sam Adams");
    }

    #[test]
    fn skips_rows_with_fewer_than_two_cells() {
        let records = extract(
            r#"<table>
                <tr class="s-table-body__row"><td>Lone cell</td></tr>
            </table>"#,
        );
        assert!(records.is_empty());
    }

    #[test]
    fn skips_rows_without_a_name() {
        let records = extract(
            r#"<table>
                <tr class="s-table-body__row">
                  <td><img src="x.jpg"></td>
                  <td></td>
                  <td>Assistant Coach</td>
                </tr>
            </table>"#,
        );
        assert!(records.is_empty());
    }

    #[test]
    fn row_class_may_carry_modifier_suffixes() {
        let records = extract(
            r#"<table>
                <tr class="s-table-body__row s-table-body__row--even">
                  <td></td>
                  <td>Pat Lee</td>
                </tr>
            </table>"#,
        );
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].name, "Pat Lee");
        assert_eq!(records[0].title, "");
    }
}
