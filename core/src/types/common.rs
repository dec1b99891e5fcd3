use serde::{Deserialize, Serialize};

/// Page envelope returned by every findMany endpoint: the matched rows for
/// the requested `skip`/`take` window plus the total matching row count.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Page<T> {
    pub rows: Vec<T>,
    pub count: u64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn page_envelope_roundtrips() {
        let page = Page {
            rows: vec!["a".to_string(), "b".to_string()],
            count: 17,
        };
        let json = serde_json::to_string(&page).unwrap();
        let back: Page<String> = serde_json::from_str(&json).unwrap();
        assert_eq!(back, page);
    }

    #[test]
    fn count_can_exceed_rows_len() {
        let page: Page<String> = serde_json::from_str(r#"{"rows":[],"count":42}"#).unwrap();
        assert!(page.rows.is_empty());
        assert_eq!(page.count, 42);
    }
}
