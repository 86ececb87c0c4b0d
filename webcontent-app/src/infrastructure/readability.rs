use std::io::Cursor;

use scraper::Selector;
use url::Url;

use crate::domain::ExtractedArticle;
use crate::infrastructure::html::ParsedDocument;

/// Seam for the "main content" heuristic so another engine can be swapped in
/// without touching the extraction pipeline.
pub trait ArticleExtractor: Send + Sync {
    /// Returns `None` when the document does not look like an article.
    fn extract(&self, doc: &ParsedDocument, url: &Url) -> Option<ExtractedArticle>;
}

/// Content-density extraction backed by the `readability` crate, the same
/// algorithm family as Firefox Reader Mode: scores subtrees by
/// text-to-markup ratio and keeps the primary content block.
pub struct ReadabilityExtractor;

impl ArticleExtractor for ReadabilityExtractor {
    fn extract(&self, doc: &ParsedDocument, url: &Url) -> Option<ExtractedArticle> {
        let mut cursor = Cursor::new(doc.source().as_bytes());
        let product = match ::readability::extractor::extract(&mut cursor, url) {
            Ok(product) => product,
            Err(e) => {
                tracing::debug!("readability extraction failed for {}: {}", url, e);
                return None;
            }
        };

        let text = product.text.trim().to_string();
        let title = Some(product.title.trim().to_string()).filter(|t| !t.is_empty());
        if text.is_empty() && title.is_none() {
            return None;
        }

        Some(ExtractedArticle {
            title,
            excerpt: first_paragraph(&product.content),
            site_name: site_name(doc),
            text,
        })
    }
}

/// The crate's `Product` carries no excerpt; mirror Readability's own
/// fallback and take the first paragraph of the extracted content.
fn first_paragraph(content_html: &str) -> Option<String> {
    let fragment = scraper::Html::parse_fragment(content_html);
    let selector = Selector::parse("p").ok()?;
    fragment
        .select(&selector)
        .map(|el| el.text().collect::<String>().trim().to_string())
        .find(|t| !t.is_empty())
}

fn site_name(doc: &ParsedDocument) -> Option<String> {
    let selector = Selector::parse("meta[property='og:site_name']").ok()?;
    doc.tree()
        .select(&selector)
        .next()
        .and_then(|el| el.value().attr("content"))
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
}
