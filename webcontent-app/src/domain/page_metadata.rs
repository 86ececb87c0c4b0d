/// Canonical page metadata. Fields are empty strings when the page does not
/// declare them, so callers never need presence checks.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PageMetadata {
    pub title: String,
    pub description: String,
    pub preview_image_url: String,
}
