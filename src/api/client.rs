use reqwest::header;

use super::collections::CollectionList;

/// The base URL of the local PocketBase instance.
const API_BASE_URL: &str = "http://localhost:8090";

/// A single page holds at most this many collections; nothing past the first
/// page is ever requested, so a larger server-side count is silently truncated.
const COLLECTIONS_PER_PAGE: &str = "100";

/// Possible failures while listing collections.
#[derive(Debug)]
pub enum ApiError {
    /// The token file was missing or unreadable.
    TokenFile(std::io::Error),
    /// The request could not be sent, or the response body not received.
    Reqwest(reqwest::Error),
    /// The response body was not the expected JSON envelope.
    Parse(serde_json::Error),
}

pub struct ApiClient {
    client: reqwest::Client,
    /// The admin token presented on every request.
    token: String,
}

impl ApiClient {
    /// Creates a new API client around the given admin token.
    pub fn new(token: String) -> Self {
        Self {
            client: reqwest::Client::new(),
            token,
        }
    }

    /// Fetches one page of collections from the admin API.
    ///
    /// The status code is deliberately not inspected: an error body lacks an
    /// `items` field and surfaces as `ApiError::Parse` instead.
    pub async fn list_collections(&self) -> Result<CollectionList, ApiError> {
        let result = self
            .client
            .get(format!("{API_BASE_URL}/api/collections"))
            // PocketBase expects the raw token here, with no `Bearer` prefix.
            .header(header::AUTHORIZATION, &self.token)
            .query(&[("perPage", COLLECTIONS_PER_PAGE)])
            .send()
            .await
            .map_err(ApiError::Reqwest)?;

        let response_text = result.text().await.map_err(ApiError::Reqwest)?;
        serde_json::from_str(response_text.as_str()).map_err(ApiError::Parse)
    }
}
