/// Output of the content-density heuristic before reconciliation with page
/// metadata. `text` may be empty; the pipeline falls back to whole-page text.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExtractedArticle {
    pub title: Option<String>,
    pub text: String,
    pub excerpt: Option<String>,
    pub site_name: Option<String>,
}
