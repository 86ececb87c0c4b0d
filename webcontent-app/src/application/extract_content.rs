use url::Url;
use webcontent_errors::{AppError, ScrapeError};

use crate::domain::{ExtractedArticle, ExtractionResult, PageMetadata};
use crate::infrastructure::fetcher::PageFetcher;
use crate::infrastructure::html::ParsedDocument;
use crate::infrastructure::metadata::extract_metadata;
use crate::infrastructure::readability::{ArticleExtractor, ReadabilityExtractor};

/// Hard cap on returned text. Word counting runs on the capped text so the
/// reported count always matches the payload.
pub const MAX_TEXT_CHARS: usize = 50_000;

/// URL in, `ExtractionResult` out: fetch, parse both views, read metadata,
/// run the content heuristic, reconcile.
pub struct ExtractContent {
    fetcher: PageFetcher,
    extractor: Box<dyn ArticleExtractor>,
}

impl ExtractContent {
    pub fn new() -> Self {
        Self::with_parts(PageFetcher::new(), Box::new(ReadabilityExtractor))
    }

    pub fn with_parts(fetcher: PageFetcher, extractor: Box<dyn ArticleExtractor>) -> Self {
        Self { fetcher, extractor }
    }

    pub async fn execute(&self, url: &str) -> Result<ExtractionResult, AppError> {
        let parsed_url = Url::parse(url).map_err(|_| AppError::InvalidUrl)?;

        let raw = self
            .fetcher
            .fetch(&parsed_url)
            .await
            .map_err(|e| failed(url, e))?;
        let doc = ParsedDocument::parse(&raw.html).map_err(|e| failed(url, e))?;

        let metadata = extract_metadata(&doc);
        let article = self.extractor.extract(&doc, &parsed_url);

        Ok(reconcile(url, &doc, metadata, article))
    }
}

impl Default for ExtractContent {
    fn default() -> Self {
        Self::new()
    }
}

fn failed(url: &str, source: ScrapeError) -> AppError {
    tracing::warn!("extraction failed for {}: {}", url, source);
    AppError::ExtractionFailed {
        url: url.to_string(),
        source,
    }
}

/// Article fields win when present; metadata fills the gaps. Text falls back
/// to the whole-document text, then gets capped before the word count.
fn reconcile(
    url: &str,
    doc: &ParsedDocument,
    metadata: PageMetadata,
    article: Option<ExtractedArticle>,
) -> ExtractionResult {
    let article = article.unwrap_or_default();

    let text = match article.text.trim() {
        "" => doc.full_text(),
        trimmed => trimmed.to_string(),
    };
    let text: String = text.chars().take(MAX_TEXT_CHARS).collect();
    let word_count = text.split_whitespace().count();

    ExtractionResult {
        url: url.to_string(),
        title: article.title.unwrap_or(metadata.title),
        excerpt: article.excerpt.unwrap_or_else(|| metadata.description.clone()),
        description: metadata.description,
        site_name: article.site_name.unwrap_or_default(),
        word_count,
        text,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn doc(html: &str) -> ParsedDocument {
        ParsedDocument::parse(html).unwrap()
    }

    fn article(text: &str) -> ExtractedArticle {
        ExtractedArticle {
            title: Some("Article Title".to_string()),
            text: text.to_string(),
            excerpt: Some("article excerpt".to_string()),
            site_name: Some("Example Site".to_string()),
        }
    }

    #[test]
    fn article_fields_win_over_metadata() {
        let metadata = PageMetadata {
            title: "Meta Title".to_string(),
            description: "meta description".to_string(),
            preview_image_url: String::new(),
        };
        let result = reconcile(
            "https://example.com",
            &doc("<html><body>ignored</body></html>"),
            metadata,
            Some(article("body text here")),
        );

        assert_eq!(result.title, "Article Title");
        assert_eq!(result.excerpt, "article excerpt");
        assert_eq!(result.site_name, "Example Site");
        assert_eq!(result.description, "meta description");
        assert_eq!(result.text, "body text here");
        assert_eq!(result.word_count, 3);
    }

    #[test]
    fn metadata_fills_gaps_when_heuristic_finds_nothing() {
        let metadata = PageMetadata {
            title: "Meta Title".to_string(),
            description: "meta description".to_string(),
            preview_image_url: String::new(),
        };
        let result = reconcile(
            "https://example.com",
            &doc("<html><body><p>fallback body text</p></body></html>"),
            metadata,
            None,
        );

        assert_eq!(result.title, "Meta Title");
        assert_eq!(result.excerpt, "meta description");
        assert_eq!(result.site_name, "");
        assert_eq!(result.text, "fallback body text");
        assert_eq!(result.word_count, 3);
    }

    #[test]
    fn empty_article_text_falls_back_to_document_text() {
        let result = reconcile(
            "https://example.com",
            &doc("<html><body>whole page text</body></html>"),
            PageMetadata::default(),
            Some(article("   ")),
        );
        assert_eq!(result.text, "whole page text");
    }

    #[test]
    fn text_is_capped_before_counting_words() {
        let long_text = "word ".repeat(20_000); // 100,000 chars
        let result = reconcile(
            "https://example.com",
            &doc("<html></html>"),
            PageMetadata::default(),
            Some(article(&long_text)),
        );

        assert_eq!(result.text.chars().count(), MAX_TEXT_CHARS);
        assert_eq!(result.word_count, result.text.split_whitespace().count());
        assert!(result.word_count < 20_000);
    }

    #[test]
    fn cap_counts_characters_not_bytes() {
        let long_text = "žluť ".repeat(20_000); // > 50,000 chars, more bytes
        let result = reconcile(
            "https://example.com",
            &doc("<html></html>"),
            PageMetadata::default(),
            Some(article(&long_text)),
        );
        assert_eq!(result.text.chars().count(), MAX_TEXT_CHARS);
    }

    #[test]
    fn everything_empty_stays_empty_strings() {
        let result = reconcile(
            "https://example.com",
            &doc(""),
            PageMetadata::default(),
            None,
        );
        assert_eq!(result.text, "");
        assert_eq!(result.word_count, 0);
        assert_eq!(result.title, "");
        assert_eq!(result.excerpt, "");
        assert_eq!(result.site_name, "");
    }

    #[tokio::test]
    async fn invalid_url_fails_before_any_network_access() {
        let err = ExtractContent::new().execute("not-a-url").await.unwrap_err();
        assert!(matches!(err, AppError::InvalidUrl));
    }
}
