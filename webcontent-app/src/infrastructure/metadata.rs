use scraper::Selector;

use crate::domain::PageMetadata;
use crate::infrastructure::html::ParsedDocument;

/// Reads canonical tags with a fixed fallback order. Never fails; absent
/// fields degrade to empty strings.
pub fn extract_metadata(doc: &ParsedDocument) -> PageMetadata {
    let title = meta_content(doc, "meta[property='og:title']")
        .or_else(|| title_text(doc))
        .unwrap_or_default();

    let description = meta_content(doc, "meta[property='og:description']")
        .or_else(|| meta_content(doc, "meta[name='description']"))
        .unwrap_or_default();

    let preview_image_url = meta_content(doc, "meta[property='og:image']").unwrap_or_default();

    PageMetadata {
        title,
        description,
        preview_image_url,
    }
}

fn meta_content(doc: &ParsedDocument, selector: &str) -> Option<String> {
    let selector = Selector::parse(selector).ok()?;
    doc.tree()
        .select(&selector)
        .next()
        .and_then(|el| el.value().attr("content"))
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
}

fn title_text(doc: &ParsedDocument) -> Option<String> {
    let selector = Selector::parse("title").ok()?;
    doc.tree()
        .select(&selector)
        .next()
        .map(|el| el.text().collect::<String>().trim().to_string())
        .filter(|s| !s.is_empty())
}
