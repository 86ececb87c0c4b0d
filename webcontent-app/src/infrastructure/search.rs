use scraper::Selector;
use url::Url;

use crate::domain::SearchResultItem;
use crate::infrastructure::html::ParsedDocument;

/// DuckDuckGo's plain-HTML interface; no API key, no JavaScript.
pub const SEARCH_ENDPOINT: &str = "https://html.duckduckgo.com/html/";

/// Base origin for resolving the relative redirector hrefs on result links.
const REDIRECT_BASE: &str = "https://duckduckgo.com";

/// Walks result containers in page order and stops scanning once `limit`
/// items have been accepted. Malformed nodes are skipped, never surfaced.
pub fn parse_results(doc: &ParsedDocument, limit: usize) -> Vec<SearchResultItem> {
    let mut results = Vec::new();

    let (Ok(container_sel), Ok(link_sel), Ok(snippet_sel)) = (
        Selector::parse(".result"),
        Selector::parse(".result__a"),
        Selector::parse(".result__snippet"),
    ) else {
        return results;
    };

    for container in doc.tree().select(&container_sel) {
        if results.len() >= limit {
            break;
        }

        let Some(link) = container.select(&link_sel).next() else {
            continue;
        };
        let title = link.text().collect::<String>().trim().to_string();
        let href = link.value().attr("href").unwrap_or_default();
        // A container can split its snippet across several nodes; join
        // them all, matching how the markup reads in page order.
        let snippet = container
            .select(&snippet_sel)
            .flat_map(|el| el.text())
            .collect::<String>()
            .trim()
            .to_string();

        let url = resolve_redirect(href);
        if title.is_empty() || url.is_empty() {
            continue;
        }

        results.push(SearchResultItem {
            title,
            url,
            snippet,
        });
    }

    results
}

/// The engine wraps outbound links in a redirector URL whose `uddg` query
/// parameter carries the real destination. Falls back to the raw href when
/// the parameter is absent, empty, or the href does not resolve.
pub fn resolve_redirect(href: &str) -> String {
    let Ok(base) = Url::parse(REDIRECT_BASE) else {
        return href.to_string();
    };

    match base.join(href) {
        Ok(resolved) => resolved
            .query_pairs()
            .find(|(key, _)| key == "uddg")
            .map(|(_, value)| value.into_owned())
            .filter(|value| !value.is_empty())
            .unwrap_or_else(|| href.to_string()),
        Err(_) => href.to_string(),
    }
}
