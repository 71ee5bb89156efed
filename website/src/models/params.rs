use core::fmt;
use serde::Deserialize;
use urlencoding::encode;

#[derive(Clone, Debug, Default, Deserialize)]
pub struct SearchParams {
    pub q: Option<String>,
}

impl SearchParams {
    pub fn query(&self) -> &str {
        self.q.as_deref().unwrap_or("")
    }
}

impl fmt::Display for SearchParams {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        // Empty string when there is nothing to search for
        match self.q.as_deref() {
            Some(q) if !q.trim().is_empty() => write!(f, "q={}", encode(q)),
            _ => write!(f, ""),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_query_string() {
        let params = SearchParams {
            q: Some("a@x.com & co".to_string()),
        };
        assert_eq!(params.to_string(), "q=a%40x.com%20%26%20co");
        assert_eq!(params.query(), "a@x.com & co");

        let params = SearchParams { q: Some("  ".to_string()) };
        assert_eq!(params.to_string(), "");

        let params = SearchParams::default();
        assert_eq!(params.to_string(), "");
        assert_eq!(params.query(), "");
    }
}
