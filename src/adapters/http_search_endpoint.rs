use async_trait::async_trait;
use reqwest::header::CONTENT_TYPE;

use crate::core::errors::SearchError;
use crate::core::interfaces::adapters::SearchEndpoint;
use crate::core::models::{ClientConfig, SearchMode, SearchQuery};
use crate::global_constants;

pub struct HttpSearchEndpoint {
    client: reqwest::Client,
    config: ClientConfig,
}

impl HttpSearchEndpoint {
    pub fn new(config: ClientConfig) -> Self {
        Self {
            client: reqwest::Client::new(),
            config,
        }
    }
}

#[async_trait]
impl SearchEndpoint for HttpSearchEndpoint {
    async fn submit(&self, query: &SearchQuery, mode: SearchMode) -> Result<String, SearchError> {
        let endpoint_url = self.config.endpoint_for(mode);
        let body = query.to_form_body(&self.config.form_field);

        log::debug!("[HTTP] POST {}", endpoint_url);

        let response = self
            .client
            .post(&endpoint_url)
            .header(CONTENT_TYPE, global_constants::FORM_CONTENT_TYPE)
            .body(body)
            .send()
            .await
            .map_err(|e| {
                log::warn!("[HTTP] Request to {} failed: {}", endpoint_url, e);
                SearchError::Transport(e.to_string())
            })?;

        let status = response.status();
        if !status.is_success() {
            log::warn!("[HTTP] {} answered with status {}", endpoint_url, status);
            return Err(SearchError::Server);
        }

        let response_text = response
            .text()
            .await
            .map_err(|e| SearchError::Transport(e.to_string()))?;

        log::debug!("[HTTP] Received {} bytes", response_text.len());
        Ok(response_text)
    }
}
