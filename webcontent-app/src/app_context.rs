use std::sync::Arc;

use crate::application::{ExtractContent, SearchWeb};

/// Shared handle for the route layer. The pipelines are stateless, so
/// nothing here is mutated across requests.
#[derive(Clone)]
pub struct AppContext {
    pub extract_content: Arc<ExtractContent>,
    pub search_web: Arc<SearchWeb>,
}

impl AppContext {
    pub fn new() -> Self {
        Self {
            extract_content: Arc::new(ExtractContent::new()),
            search_web: Arc::new(SearchWeb::new()),
        }
    }
}

impl Default for AppContext {
    fn default() -> Self {
        Self::new()
    }
}
