use crate::models::Result;
use tracing::info;

/// Filters a line-oriented URL list down to usable targets: trimmed,
/// non-empty lines that start with "http" in any case. Tolerates the BOM
/// that Excel prepends when saving CSV as UTF-8.
pub fn parse_url_list(raw: &str) -> Vec<String> {
    let raw = raw.strip_prefix('\u{feff}').unwrap_or(raw);
    raw.lines()
        .map(str::trim)
        .filter(|line| line.to_lowercase().starts_with("http"))
        .map(str::to_string)
        .collect()
}

pub async fn load_target_urls(path: &str) -> Result<Vec<String>> {
    let raw = tokio::fs::read_to_string(path).await?;
    let urls = parse_url_list(&raw);
    info!("Read {} target URLs from {}", urls.len(), path);
    Ok(urls)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn keeps_only_http_lines() {
        let raw = "https://example.com/staff\n# comment\n\nhttp://other.org/coaches\nftp://nope\n";
        let urls = parse_url_list(raw);
        assert_eq!(
            urls,
            vec![
                "https://example.com/staff".to_string(),
                "http://other.org/coaches".to_string(),
            ]
        );
    }

    #[test]
    fn prefix_check_is_case_insensitive() {
        let urls = parse_url_list("HTTPS://Example.com/Staff\n");
        assert_eq!(urls, vec!["HTTPS://Example.com/Staff".to_string()]);
    }

    #[test]
    fn strips_byte_order_mark() {
        let raw = "\u{feff}https://example.com/staff\n";
        let urls = parse_url_list(raw);
        assert_eq!(urls, vec!["https://example.com/staff".to_string()]);
    }

    #[test]
    fn trims_surrounding_whitespace() {
        let urls = parse_url_list("   https://example.com/staff   \n");
        assert_eq!(urls, vec!["https://example.com/staff".to_string()]);
    }
}
