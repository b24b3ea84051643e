//! Art Institute of Chicago API client.
//!
//! This module provides the client for the public artworks collection
//! endpoint. It handles request construction, response decoding, and error
//! mapping. There is deliberately no retry loop and no request deadline: a
//! failed or slow fetch never disturbs what is already on screen, and the
//! event loop stays responsive regardless of how long the transport takes.

use reqwest::{header, Client, Response};
use tracing::{debug, instrument};

use super::error::{ApiError, Result};
use super::types::ArtworkPage;

/// Default base URL for the collection API.
pub const DEFAULT_BASE_URL: &str = "https://api.artic.edu/api/v1";

/// User agent sent with every request, as the public API asks of clients.
const USER_AGENT: &str = concat!("artscope/", env!("CARGO_PKG_VERSION"));

/// The collection API client.
///
/// Wraps a [`reqwest::Client`] and knows how to fetch one page of artwork
/// records. The only query parameter ever sent is the page number.
#[derive(Debug, Clone)]
pub struct ArticClient {
    /// The HTTP client.
    client: Client,
    /// Base URL for the API, without a trailing slash.
    base_url: String,
}

impl ArticClient {
    /// Create a client against the given base URL.
    ///
    /// # Errors
    ///
    /// Returns an error if the underlying HTTP client cannot be built.
    pub fn new(base_url: &str) -> Result<Self> {
        let client = Client::builder()
            .user_agent(USER_AGENT)
            .build()
            .map_err(ApiError::Network)?;

        Ok(Self {
            client,
            base_url: normalize_base_url(base_url),
        })
    }

    /// Fetch one page of artwork records.
    ///
    /// `page_index` is 0-based; the endpoint is 1-based. The `page_index + 1`
    /// translation here is a fixed contract: UI page 0 is endpoint page 1.
    ///
    /// # Errors
    ///
    /// Returns an error on network failure, a non-2xx status, or a response
    /// body that does not decode as an [`ArtworkPage`].
    #[instrument(skip(self), fields(page_index))]
    pub async fn fetch_page(&self, page_index: u32) -> Result<ArtworkPage> {
        let url = self.page_url(page_index);
        debug!(url = %url, "Fetching artwork page");

        let response = self
            .client
            .get(&url)
            .header(header::ACCEPT, "application/json")
            .send()
            .await?;

        let page = self.handle_response(response).await?;
        debug!(
            records = page.data.len(),
            total = page.total(),
            "Fetched artwork page"
        );
        Ok(page)
    }

    /// Build the request URL for a 0-based page index.
    fn page_url(&self, page_index: u32) -> String {
        format!("{}/artworks?page={}", self.base_url, page_index + 1)
    }

    /// Check the HTTP status and decode the JSON body.
    async fn handle_response(&self, response: Response) -> Result<ArtworkPage> {
        let status = response.status();
        let url = response.url().to_string();

        if status.is_success() {
            response.json::<ArtworkPage>().await.map_err(|e| {
                ApiError::InvalidResponse(format!("Failed to parse response: {}", e))
            })
        } else {
            let body = response.text().await.unwrap_or_default();
            debug!(status = %status, body = %body, "Error response");
            Err(ApiError::from_status(status, &url))
        }
    }

    /// Get the base URL.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }
}

/// Normalize the base URL by removing trailing slashes.
fn normalize_base_url(url: &str) -> String {
    url.trim_end_matches('/').to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_page_url_is_one_based() {
        let client = ArticClient::new(DEFAULT_BASE_URL).unwrap();
        assert_eq!(
            client.page_url(0),
            "https://api.artic.edu/api/v1/artworks?page=1"
        );
        assert_eq!(
            client.page_url(3),
            "https://api.artic.edu/api/v1/artworks?page=4"
        );
    }

    #[test]
    fn test_page_url_sends_only_page_parameter() {
        let client = ArticClient::new(DEFAULT_BASE_URL).unwrap();
        let url = client.page_url(7);
        assert_eq!(url.matches('?').count(), 1);
        assert!(!url.contains('&'));
        assert!(url.ends_with("?page=8"));
    }

    #[test]
    fn test_normalize_base_url_removes_trailing_slash() {
        assert_eq!(
            normalize_base_url("https://api.artic.edu/api/v1/"),
            "https://api.artic.edu/api/v1"
        );
    }

    #[test]
    fn test_normalize_base_url_handles_multiple_slashes() {
        assert_eq!(
            normalize_base_url("https://api.artic.edu/api/v1///"),
            "https://api.artic.edu/api/v1"
        );
    }

    #[test]
    fn test_client_base_url_accessor() {
        let client = ArticClient::new("http://localhost:8080/").unwrap();
        assert_eq!(client.base_url(), "http://localhost:8080");
    }
}
