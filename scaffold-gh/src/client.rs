//! # GitHub HTTP Client
//!
//! HTTP client implementation for GitHub API interactions, handling
//! authentication, request building, and response parsing for GitHub REST API
//! operations.

use anyhow::{Context, Result};
use reqwest::{Client, Method, RequestBuilder, Response, StatusCode};
use serde::de::DeserializeOwned;
use tracing::trace;

use crate::consts::{ACCEPT, PER_PAGE, USER_AGENT};
use crate::models::GitHubAuth;

/// Represents a GitHub API client
pub struct GitHubClient {
  pub(crate) client: Client,
  pub(crate) base_url: String,
  pub(crate) auth: GitHubAuth,
}

impl GitHubClient {
  /// Create a new GitHub client for the API rooted at `base_url`
  pub fn with_base_url(auth: GitHubAuth, base_url: &str) -> Self {
    Self {
      client: Client::new(),
      base_url: base_url.trim_end_matches('/').to_string(),
      auth,
    }
  }

  /// The API base URL requests are sent to
  pub fn base_url(&self) -> &str {
    &self.base_url
  }

  /// Test the GitHub connection by fetching the current user
  pub async fn test_connection(&self) -> Result<bool> {
    let response = self
      .request(Method::GET, "/user")
      .send()
      .await
      .context("Failed to connect to GitHub")?;

    Ok(response.status().is_success())
  }

  /// Build an authenticated request for `route` (relative to the base URL)
  pub(crate) fn request(&self, method: Method, route: &str) -> RequestBuilder {
    let url = format!("{}{}", self.base_url, route);
    trace!("{} {}", method, url);

    self
      .client
      .request(method, &url)
      .header("Accept", ACCEPT)
      .header("User-Agent", USER_AGENT)
      .header("Authorization", format!("token {}", self.auth.token))
  }

  /// Fetch every page of a listing endpoint
  pub(crate) async fn get_all_pages<T: DeserializeOwned>(&self, route: &str, resource: &str) -> Result<Vec<T>> {
    let mut items = Vec::new();
    let mut page = 1usize;

    loop {
      let response = self
        .request(Method::GET, route)
        .query(&[("per_page", PER_PAGE), ("page", page)])
        .send()
        .await
        .with_context(|| format!("Failed to fetch {resource}"))?;

      let batch: Vec<T> = parse_response(response, resource).await?;
      let count = batch.len();
      items.extend(batch);

      if count < PER_PAGE {
        break;
      }
      page += 1;
    }

    Ok(items)
  }
}

/// Parse a GitHub API response, mapping error statuses to readable errors
pub(crate) async fn parse_response<T: DeserializeOwned>(response: Response, resource: &str) -> Result<T> {
  match response.status() {
    StatusCode::OK | StatusCode::CREATED => {
      // First get the response body as text
      let body = response.text().await.context("Failed to read response body")?;

      // Then try to parse it as JSON
      match serde_json::from_str::<T>(&body) {
        Ok(value) => Ok(value),
        Err(e) => {
          // Try to extract the error message from the response
          if let Ok(error_json) = serde_json::from_str::<serde_json::Value>(&body)
            && let Some(message) = error_json.get("message").and_then(|m| m.as_str())
          {
            return Err(anyhow::anyhow!(
              "Failed to parse {resource}: GitHub API error: {message}"
            ));
          }
          // Fall back to the original error if we can't extract a message
          Err(anyhow::anyhow!("Failed to parse {resource}: {e}"))
        }
      }
    }
    StatusCode::NOT_FOUND => Err(anyhow::anyhow!("GitHub {resource} not found")),
    StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN => Err(anyhow::anyhow!(
      "Authentication failed. Please check your GitHub credentials."
    )),
    status => Err(anyhow::anyhow!(
      "Unexpected error: HTTP {} - {}",
      status,
      response.text().await.unwrap_or_default()
    )),
  }
}

#[cfg(test)]
mod tests {
  use scaffold_core::consts::DEFAULT_API_URL;
  use wiremock::matchers::{header, method, path, query_param};
  use wiremock::{Mock, MockServer, ResponseTemplate};

  use super::*;

  fn test_auth() -> GitHubAuth {
    GitHubAuth {
      token: "test_token".to_string(),
    }
  }

  #[test]
  fn test_github_client_creation() {
    let client = GitHubClient::with_base_url(test_auth(), DEFAULT_API_URL);

    assert_eq!(client.base_url(), "https://api.github.com");
    assert_eq!(client.auth.token, "test_token");
  }

  #[test]
  fn test_base_url_trailing_slash_is_trimmed() {
    let client = GitHubClient::with_base_url(test_auth(), "http://localhost:8080/");

    assert_eq!(client.base_url(), "http://localhost:8080");
  }

  /// Requests carry the token, Accept, and User-Agent headers
  #[tokio::test]
  async fn test_github_client_auth() -> Result<()> {
    let mock_server = MockServer::start().await;
    let client = GitHubClient::with_base_url(test_auth(), &mock_server.uri());

    Mock::given(method("GET"))
      .and(path("/user"))
      .and(header("Authorization", "token test_token"))
      .and(header("Accept", ACCEPT))
      .and(header("User-Agent", USER_AGENT))
      .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
          "login": "testuser",
          "id": 1234
      })))
      .expect(1)
      .mount(&mock_server)
      .await;

    assert!(client.test_connection().await?);
    Ok(())
  }

  #[tokio::test]
  async fn test_connection_failure_status() -> Result<()> {
    let mock_server = MockServer::start().await;
    let client = GitHubClient::with_base_url(test_auth(), &mock_server.uri());

    Mock::given(method("GET"))
      .and(path("/user"))
      .respond_with(ResponseTemplate::new(401))
      .mount(&mock_server)
      .await;

    assert!(!client.test_connection().await?);
    Ok(())
  }

  #[tokio::test]
  async fn test_get_all_pages_follows_full_pages() -> Result<()> {
    let mock_server = MockServer::start().await;
    let client = GitHubClient::with_base_url(test_auth(), &mock_server.uri());

    let full_page: Vec<serde_json::Value> = (0..PER_PAGE).map(|i| serde_json::json!(i)).collect();
    Mock::given(method("GET"))
      .and(path("/items"))
      .and(query_param("page", "1"))
      .and(query_param("per_page", "100"))
      .respond_with(ResponseTemplate::new(200).set_body_json(full_page))
      .expect(1)
      .mount(&mock_server)
      .await;
    Mock::given(method("GET"))
      .and(path("/items"))
      .and(query_param("page", "2"))
      .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!([1000, 1001])))
      .expect(1)
      .mount(&mock_server)
      .await;

    let items: Vec<u64> = client.get_all_pages("/items", "items").await?;
    assert_eq!(items.len(), PER_PAGE + 2);
    assert_eq!(items.last(), Some(&1001));
    Ok(())
  }

  #[tokio::test]
  async fn test_parse_response_extracts_github_message() -> Result<()> {
    let mock_server = MockServer::start().await;
    let client = GitHubClient::with_base_url(test_auth(), &mock_server.uri());

    Mock::given(method("GET"))
      .and(path("/user"))
      .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
          "message": "API rate limit exceeded"
      })))
      .mount(&mock_server)
      .await;

    let response = client.request(Method::GET, "/user").send().await?;
    let err = parse_response::<crate::models::GitHubUser>(response, "user")
      .await
      .unwrap_err();
    assert!(err.to_string().contains("GitHub API error: API rate limit exceeded"));
    Ok(())
  }

  #[tokio::test]
  async fn test_parse_response_unexpected_status() -> Result<()> {
    let mock_server = MockServer::start().await;
    let client = GitHubClient::with_base_url(test_auth(), &mock_server.uri());

    Mock::given(method("GET"))
      .and(path("/user"))
      .respond_with(ResponseTemplate::new(502).set_body_string("bad gateway"))
      .mount(&mock_server)
      .await;

    let response = client.request(Method::GET, "/user").send().await?;
    let err = parse_response::<crate::models::GitHubUser>(response, "user")
      .await
      .unwrap_err();
    assert!(err.to_string().contains("Unexpected error: HTTP 502"));
    assert!(err.to_string().contains("bad gateway"));
    Ok(())
  }
}
