use serde::{Deserialize, Serialize};

/// Response body of `/api/extract`. `word_count` is computed from the
/// already-capped `text`, so the two are always consistent.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExtractionResult {
    pub url: String,
    pub title: String,
    pub description: String,
    pub text: String,
    pub word_count: usize,
    pub excerpt: String,
    pub site_name: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn serializes_with_camel_case_keys() {
        let result = ExtractionResult {
            url: "https://example.com".to_string(),
            title: "t".to_string(),
            description: String::new(),
            text: "a b".to_string(),
            word_count: 2,
            excerpt: String::new(),
            site_name: String::new(),
        };
        let json = serde_json::to_value(&result).unwrap();
        assert_eq!(json["wordCount"], 2);
        assert_eq!(json["siteName"], "");
        assert!(json.get("word_count").is_none());
    }
}
