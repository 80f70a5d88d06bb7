use async_trait::async_trait;

use crate::core::errors::SearchError;
use crate::core::models::{SearchMode, SearchQuery};

#[async_trait]
pub trait SearchEndpoint: Send + Sync {
    /// Issues exactly one request and returns the raw response body.
    async fn submit(&self, query: &SearchQuery, mode: SearchMode) -> Result<String, SearchError>;
}
