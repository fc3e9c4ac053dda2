//! HTTP client for the itrack API
//!
//! Thin wrapper over the five REST operations. Non-success responses carry
//! `{"message": "..."}`; that message becomes the returned error.

use anyhow::{bail, Result};
use itrack_core::{Issue, IssueUpdate, NewIssue};
use reqwest::{Response, StatusCode};
use serde::Deserialize;

#[derive(Debug, Deserialize)]
struct Message {
    message: String,
}

/// Client for one itrack API server
pub struct ApiClient {
    base: String,
    http: reqwest::Client,
}

impl ApiClient {
    pub fn new(base: impl Into<String>) -> Self {
        Self {
            base: base.into().trim_end_matches('/').to_string(),
            http: reqwest::Client::new(),
        }
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base, path)
    }

    async fn expect_json<T: serde::de::DeserializeOwned>(
        response: Response,
        expected: StatusCode,
    ) -> Result<T> {
        if response.status() != expected {
            let status = response.status();
            let message = response
                .json::<Message>()
                .await
                .map(|m| m.message)
                .unwrap_or_else(|_| status.to_string());
            bail!("{}", message);
        }
        Ok(response.json().await?)
    }

    pub async fn list(&self) -> Result<Vec<Issue>> {
        let response = self.http.get(self.url("/api/issues")).send().await?;
        Self::expect_json(response, StatusCode::OK).await
    }

    pub async fn get(&self, id: &str) -> Result<Issue> {
        let response = self
            .http
            .get(self.url(&format!("/api/issues/{id}")))
            .send()
            .await?;
        Self::expect_json(response, StatusCode::OK).await
    }

    pub async fn create(&self, new: &NewIssue) -> Result<Issue> {
        let response = self
            .http
            .post(self.url("/api/issues"))
            .json(new)
            .send()
            .await?;
        Self::expect_json(response, StatusCode::CREATED).await
    }

    pub async fn update(&self, id: &str, update: &IssueUpdate) -> Result<Issue> {
        let response = self
            .http
            .put(self.url(&format!("/api/issues/{id}")))
            .json(update)
            .send()
            .await?;
        Self::expect_json(response, StatusCode::OK).await
    }

    pub async fn delete(&self, id: &str) -> Result<String> {
        let response = self
            .http
            .delete(self.url(&format!("/api/issues/{id}")))
            .send()
            .await?;
        let message: Message = Self::expect_json(response, StatusCode::OK).await?;
        Ok(message.message)
    }
}
