use scraper::Html;
use webcontent_errors::ScrapeError;

/// Two read-only views over one fetched page: the selector-queryable tree
/// and the retained source bytes the readability engine builds its own
/// standards-shaped tree from. Neither outlives the request that made it.
#[derive(Debug)]
pub struct ParsedDocument {
    html: String,
    tree: Html,
}

impl ParsedDocument {
    /// HTML parsing is forgiving, so this only rejects input that is not
    /// text at all.
    pub fn parse(html: &str) -> Result<Self, ScrapeError> {
        if html.contains('\0') {
            return Err(ScrapeError::Parse(
                "document contains binary data".to_string(),
            ));
        }

        Ok(Self {
            tree: Html::parse_document(html),
            html: html.to_string(),
        })
    }

    pub fn tree(&self) -> &Html {
        &self.tree
    }

    pub fn source(&self) -> &str {
        &self.html
    }

    /// Whole-document text, trimmed. Fallback when the heuristic extractor
    /// yields nothing.
    pub fn full_text(&self) -> String {
        self.tree
            .root_element()
            .text()
            .collect::<String>()
            .trim()
            .to_string()
    }
}
