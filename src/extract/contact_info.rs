use super::element_text;
use regex::Regex;
use scraper::{ElementRef, Selector};

const MAILTO_PREFIX: &str = "mailto:";

/// Finds the first embedded email and phone number across a sequence of
/// document fragments (table cells, list details). The two searches are
/// independent: the email may come from a later fragment than the phone.
pub struct ContactExtractor {
    phone_regex: Regex,
    mailto_selector: Selector,
}

impl ContactExtractor {
    pub fn new() -> Self {
        Self {
            // 3-3-4 digit groups with optional dash/dot/space separators,
            // delimited by word boundaries.
            phone_regex: Regex::new(r"\b\d{3}[-.\s]?\d{3}[-.\s]?\d{4}\b").unwrap(),
            mailto_selector: Selector::parse(r#"a[href^="mailto:" i]"#).unwrap(),
        }
    }

    /// Returns `(email, phone)`, either of which may be empty. Never fails;
    /// a fragment sequence with no contact info yields `("", "")`.
    pub fn find_contact_info(&self, fragments: &[ElementRef]) -> (String, String) {
        let mut email = String::new();
        let mut phone = String::new();

        for fragment in fragments {
            if email.is_empty() {
                if let Some(link) = fragment.select(&self.mailto_selector).next() {
                    email = email_from_link(link);
                }
            }

            if phone.is_empty() {
                if let Some(found) = self.phone_regex.find(&element_text(*fragment)) {
                    phone = found.as_str().to_string();
                }
            }

            if !email.is_empty() && !phone.is_empty() {
                break;
            }
        }

        (email, phone)
    }
}

/// Prefers the link's visible text when it looks like an address; otherwise
/// decodes the address from the href by stripping the mailto prefix.
fn email_from_link(link: ElementRef) -> String {
    let text = element_text(link);
    if text.contains('@') {
        return text;
    }

    let href = link.value().attr("href").unwrap_or("");
    if href.len() >= MAILTO_PREFIX.len()
        && href[..MAILTO_PREFIX.len()].eq_ignore_ascii_case(MAILTO_PREFIX)
    {
        href[MAILTO_PREFIX.len()..].to_string()
    } else {
        String::new()
    }
}
