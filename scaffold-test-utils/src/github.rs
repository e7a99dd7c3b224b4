//! Mock GitHub REST API for tests
//!
//! Wraps a [`MockServer`] and mounts the endpoints gh-scaffold talks to. Every
//! mock requires the `Authorization: token <token>` header the client sends,
//! so a request with the wrong credentials falls through to a 404.

use serde_json::{Value, json};
use wiremock::matchers::{body_json, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

/// JSON body GitHub returns for a repository
pub fn repository_json(owner: &str, name: &str, ssh_url: &str, html_url: &str) -> Value {
  json!({
    "id": 1296269,
    "name": name,
    "full_name": format!("{owner}/{name}"),
    "private": false,
    "ssh_url": ssh_url,
    "html_url": html_url,
  })
}

/// A mock GitHub API bound to a single token
pub struct GitHubMock {
  server: MockServer,
  token: String,
}

impl GitHubMock {
  /// Start a mock server accepting `token`
  pub async fn start(token: &str) -> Self {
    Self {
      server: MockServer::start().await,
      token: token.to_string(),
    }
  }

  /// Base URL to point the client at
  pub fn uri(&self) -> String {
    self.server.uri()
  }

  /// The underlying wiremock server
  pub fn server(&self) -> &MockServer {
    &self.server
  }

  fn authorization(&self) -> String {
    format!("token {}", self.token)
  }

  /// `GET /user` returns `login`
  pub async fn authenticated_user(&self, login: &str) {
    Mock::given(method("GET"))
      .and(path("/user"))
      .and(header("Authorization", self.authorization().as_str()))
      .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "login": login, "id": 1 })))
      .mount(&self.server)
      .await;
  }

  /// `GET /user/orgs` returns organizations with the given logins
  pub async fn organizations(&self, logins: &[&str]) {
    let body: Vec<Value> = logins
      .iter()
      .enumerate()
      .map(|(id, login)| json!({ "login": login, "id": id + 1 }))
      .collect();

    Mock::given(method("GET"))
      .and(path("/user/orgs"))
      .and(header("Authorization", self.authorization().as_str()))
      .respond_with(ResponseTemplate::new(200).set_body_json(body))
      .mount(&self.server)
      .await;
  }

  /// `GET /users/{user}/repos` lists repositories with the given names
  pub async fn user_repositories(&self, user: &str, names: &[&str]) {
    self.repositories(&format!("/users/{user}/repos"), user, names).await;
  }

  /// `GET /orgs/{org}/repos` lists repositories with the given names
  pub async fn org_repositories(&self, org: &str, names: &[&str]) {
    self.repositories(&format!("/orgs/{org}/repos"), org, names).await;
  }

  async fn repositories(&self, route: &str, owner: &str, names: &[&str]) {
    let body: Vec<Value> = names
      .iter()
      .map(|name| {
        repository_json(
          owner,
          name,
          &format!("git@github.com:{owner}/{name}.git"),
          &format!("https://github.com/{owner}/{name}"),
        )
      })
      .collect();

    Mock::given(method("GET"))
      .and(path(route))
      .and(header("Authorization", self.authorization().as_str()))
      .respond_with(ResponseTemplate::new(200).set_body_json(body))
      .mount(&self.server)
      .await;
  }

  /// `GET /repos/{owner}/{name}` returns the given URLs
  pub async fn repository(&self, owner: &str, name: &str, ssh_url: &str, html_url: &str) {
    Mock::given(method("GET"))
      .and(path(format!("/repos/{owner}/{name}")))
      .and(header("Authorization", self.authorization().as_str()))
      .respond_with(ResponseTemplate::new(200).set_body_json(repository_json(owner, name, ssh_url, html_url)))
      .expect(1)
      .mount(&self.server)
      .await;
  }

  /// `POST /user/repos` must be called exactly once with `{name, private}`
  pub async fn create_for_user(&self, name: &str, private: bool, ssh_url: &str, html_url: &str) {
    Mock::given(method("POST"))
      .and(path("/user/repos"))
      .and(header("Authorization", self.authorization().as_str()))
      .and(body_json(json!({ "name": name, "private": private })))
      .respond_with(ResponseTemplate::new(201).set_body_json(repository_json("user", name, ssh_url, html_url)))
      .expect(1)
      .mount(&self.server)
      .await;
  }

  /// `POST /orgs/{org}/repos` must be called exactly once with `{name, private}`
  pub async fn create_in_org(&self, org: &str, name: &str, private: bool, ssh_url: &str, html_url: &str) {
    Mock::given(method("POST"))
      .and(path(format!("/orgs/{org}/repos")))
      .and(header("Authorization", self.authorization().as_str()))
      .and(body_json(json!({ "name": name, "private": private })))
      .respond_with(ResponseTemplate::new(201).set_body_json(repository_json(org, name, ssh_url, html_url)))
      .expect(1)
      .mount(&self.server)
      .await;
  }

  /// Fail verification if any `POST` reaches the server
  pub async fn no_repository_created(&self) {
    Mock::given(method("POST"))
      .respond_with(ResponseTemplate::new(500))
      .expect(0)
      .mount(&self.server)
      .await;
  }
}
