mod article;
mod extraction;
mod page_metadata;
mod raw_document;
mod search;

pub use article::ExtractedArticle;
pub use extraction::ExtractionResult;
pub use page_metadata::PageMetadata;
pub use raw_document::RawDocument;
pub use search::{SearchResponse, SearchResultItem};
