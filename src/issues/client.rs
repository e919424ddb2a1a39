//! Typed HTTP client for the issue API.

use reqwest::{Response, StatusCode};
use serde::de::DeserializeOwned;
use serde_json::json;

use super::models::{CreateIssueRequest, Issue, IssueEnvelope, IssueListEnvelope, IssueStatus};
use crate::errors::ClientError;

const LOAD_ISSUES_FAILED: &str = "Failed to load issues";
const LOAD_ISSUE_FAILED: &str = "Failed to load issue";
const SUBMIT_FAILED: &str = "Failed to submit issue";
const UPDATE_STATUS_FAILED: &str = "Failed to update status";

#[derive(Debug, Clone)]
pub struct IssueClient {
    http: reqwest::Client,
    base_url: String,
}

impl IssueClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self {
            http: reqwest::Client::new(),
            base_url,
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    pub async fn health(&self) -> Result<bool, ClientError> {
        let resp = self.http.get(self.url("/health")).send().await?;
        Ok(resp.status() == StatusCode::OK)
    }

    pub async fn fetch_issues(&self) -> Result<Vec<Issue>, ClientError> {
        let resp = self.http.get(self.url("/api/issues")).send().await?;
        let envelope: IssueListEnvelope = decode(resp, LOAD_ISSUES_FAILED).await?;
        Ok(envelope.issues)
    }

    pub async fn get_issue(&self, id: &str) -> Result<Issue, ClientError> {
        let resp = self
            .http
            .get(self.url(&format!("/api/issues/{}", id)))
            .send()
            .await?;
        let envelope: IssueEnvelope = decode(resp, LOAD_ISSUE_FAILED).await?;
        Ok(envelope.issue)
    }

    pub async fn create_issue(&self, input: &CreateIssueRequest) -> Result<Issue, ClientError> {
        let resp = self
            .http
            .post(self.url("/api/issues"))
            .json(input)
            .send()
            .await?;
        let envelope: IssueEnvelope = decode(resp, SUBMIT_FAILED).await?;
        Ok(envelope.issue)
    }

    pub async fn update_issue_status(
        &self,
        id: &str,
        status: IssueStatus,
    ) -> Result<Issue, ClientError> {
        let resp = self
            .http
            .patch(self.url(&format!("/api/issues/{}/status", id)))
            .json(&json!({ "status": status }))
            .send()
            .await?;
        let envelope: IssueEnvelope = decode(resp, UPDATE_STATUS_FAILED).await?;
        Ok(envelope.issue)
    }
}

/// Turn a response into `T`, or into `ClientError::Api` carrying the body
/// text (falling back to `default_message` when the body is empty).
async fn decode<T: DeserializeOwned>(resp: Response, default_message: &str) -> Result<T, ClientError> {
    let status = resp.status();
    let body = resp.text().await?;
    if !status.is_success() {
        let message = if body.trim().is_empty() {
            default_message.to_string()
        } else {
            body
        };
        return Err(ClientError::Api {
            status: status.as_u16(),
            message,
        });
    }
    serde_json::from_str(&body).map_err(ClientError::Decode)
}
