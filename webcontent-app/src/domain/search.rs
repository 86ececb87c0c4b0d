use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchResultItem {
    pub title: String,
    pub url: String,
    pub snippet: String,
}

/// Response body of `/api/search`. `results` keeps page order and `count`
/// always equals `results.len()`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchResponse {
    pub query: String,
    pub results: Vec<SearchResultItem>,
    pub count: usize,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn serializes_flat_keys() {
        let response = SearchResponse {
            query: "q".to_string(),
            results: vec![SearchResultItem {
                title: "t".to_string(),
                url: "https://example.com".to_string(),
                snippet: String::new(),
            }],
            count: 1,
        };
        let json = serde_json::to_value(&response).unwrap();
        assert_eq!(json["count"], 1);
        assert_eq!(json["results"][0]["snippet"], "");
    }
}
