use chrono::{DateTime, Utc};
use url::Url;

/// One fetched page. Owned by the pipeline invocation that produced it and
/// discarded once parsed; never cached or shared across requests.
#[derive(Debug, Clone)]
pub struct RawDocument {
    pub source_url: Url,
    pub html: String,
    pub fetched_at: DateTime<Utc>,
}
