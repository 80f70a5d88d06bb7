/// Raw response body of the search API: whitespace-delimited URL tokens.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResultPayload {
    body: String,
}

impl ResultPayload {
    pub fn new(body: impl Into<String>) -> Self {
        Self { body: body.into() }
    }

    pub fn tokens(&self) -> impl Iterator<Item = &str> {
        self.body.split_whitespace()
    }

    pub fn token_count(&self) -> usize {
        self.tokens().count()
    }

    pub fn is_empty(&self) -> bool {
        self.tokens().next().is_none()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tokens_keep_payload_order() {
        let payload = ResultPayload::new("http://a.com http://b.com http://c.com");
        let tokens: Vec<&str> = payload.tokens().collect();
        assert_eq!(tokens, vec!["http://a.com", "http://b.com", "http://c.com"]);
    }

    #[test]
    fn test_tokens_discard_irregular_whitespace() {
        let payload = ResultPayload::new("  img1.png  img2.png\n\timg3.png  ");
        let tokens: Vec<&str> = payload.tokens().collect();
        assert_eq!(tokens, vec!["img1.png", "img2.png", "img3.png"]);
    }

    #[test]
    fn test_tokens_keep_duplicates() {
        let payload = ResultPayload::new("x.png x.png");
        assert_eq!(payload.token_count(), 2);
    }

    #[test]
    fn test_blank_payload_is_empty() {
        assert!(ResultPayload::new("").is_empty());
        assert!(ResultPayload::new("   \n ").is_empty());
        assert!(!ResultPayload::new("a").is_empty());
    }
}
