use anyhow::Result;
use async_trait::async_trait;

use crate::core::interfaces::adapters::ImageLoader;

pub struct HttpImageLoader {
    client: reqwest::Client,
}

impl HttpImageLoader {
    pub fn new() -> Self {
        Self {
            client: reqwest::Client::new(),
        }
    }
}

#[async_trait]
impl ImageLoader for HttpImageLoader {
    async fn load_image_bytes(&self, url: &str) -> Result<Vec<u8>> {
        log::debug!("[IMAGES] Fetching {}", url);

        let response = self.client.get(url).send().await?.error_for_status()?;
        let bytes = response.bytes().await?;

        log::debug!("[IMAGES] Fetched {} bytes from {}", bytes.len(), url);
        Ok(bytes.to_vec())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_load_image_bytes_returns_body() {
        let mut server = mockito::Server::new_async().await;
        let _mock = server
            .mock("GET", "/img1.png")
            .with_status(200)
            .with_body([137u8, 80, 78, 71])
            .create_async()
            .await;

        let loader = HttpImageLoader::new();
        let bytes = loader
            .load_image_bytes(&format!("{}/img1.png", server.url()))
            .await
            .unwrap();

        assert_eq!(bytes, vec![137u8, 80, 78, 71]);
    }

    #[tokio::test]
    async fn test_load_image_bytes_fails_on_missing_image() {
        let mut server = mockito::Server::new_async().await;
        let _mock = server
            .mock("GET", "/missing.png")
            .with_status(404)
            .create_async()
            .await;

        let loader = HttpImageLoader::new();
        let result = loader
            .load_image_bytes(&format!("{}/missing.png", server.url()))
            .await;

        assert!(result.is_err());
    }

    #[tokio::test]
    async fn test_load_image_bytes_rejects_relative_url() {
        let loader = HttpImageLoader::new();
        assert!(loader.load_image_bytes("img1.png").await.is_err());
    }
}
