//! HTTP client for the forms service
//!
//! Thin wrapper over `reqwest` that maps status codes and bodies onto
//! [`ApiError`]. No retries; a failed call is reported and left to the user.

use super::error::{extract_detail, ApiError};
use super::traits::FormsClientTrait;
use super::types::{CreatedForm, FormId, FormRecord, FormSummary};
use crate::config::TuiConfig;
use crate::state::SubmissionPayload;
use async_trait::async_trait;
use reqwest::{header, Response, Url};
use serde::de::DeserializeOwned;
use std::time::Duration;

/// Client for the forms service
pub struct FormsClient {
    http: reqwest::Client,
    base_url: String,
    forms_path: String,
}

impl FormsClient {
    /// Create a client from the resolved configuration
    pub fn new(config: &TuiConfig) -> Result<Self, ApiError> {
        let base_url = config.api_url();
        Url::parse(&base_url).map_err(|_| ApiError::InvalidUrl(base_url.clone()))?;

        let mut headers = header::HeaderMap::new();
        headers.insert(
            header::ACCEPT,
            header::HeaderValue::from_static("application/json"),
        );

        let http = reqwest::Client::builder()
            .default_headers(headers)
            .timeout(Duration::from_secs(config.request_timeout_secs()))
            .build()?;

        Ok(Self {
            http,
            base_url: base_url.trim_end_matches('/').to_string(),
            forms_path: normalize_path(&config.forms_path()),
        })
    }

    fn collection_url(&self) -> String {
        format!("{}{}", self.base_url, self.forms_path)
    }

    fn item_url(&self, id: &FormId) -> String {
        format!(
            "{}{}/{}",
            self.base_url,
            self.forms_path.trim_end_matches('/'),
            id
        )
    }

    /// Turn a response into `T`, or into the matching error
    async fn decode<T: DeserializeOwned>(response: Response) -> Result<T, ApiError> {
        let body = Self::check_status(response).await?;
        serde_json::from_slice(&body).map_err(|e| ApiError::MalformedResponse(e.to_string()))
    }

    /// Body of a 2xx response, or `Rejected` with the server's detail
    async fn check_status(response: Response) -> Result<Vec<u8>, ApiError> {
        let status = response.status();
        let body = response.bytes().await?;

        if status.is_success() {
            return Ok(body.to_vec());
        }

        let detail = extract_detail(&body);
        tracing::warn!(
            "Forms service rejected request: {} {}",
            status.as_u16(),
            detail.as_deref().unwrap_or("-")
        );
        Err(ApiError::Rejected {
            status: status.as_u16(),
            detail,
        })
    }
}

#[async_trait]
impl FormsClientTrait for FormsClient {
    fn endpoint(&self) -> String {
        self.collection_url()
    }

    async fn list_forms(&self) -> Result<Vec<FormSummary>, ApiError> {
        let url = self.collection_url();
        tracing::debug!("GET {url}");
        let response = self.http.get(&url).send().await?;
        Self::decode(response).await
    }

    async fn get_form(&self, id: &FormId) -> Result<FormRecord, ApiError> {
        let url = self.item_url(id);
        tracing::debug!("GET {url}");
        let response = self.http.get(&url).send().await?;
        Self::decode(response).await
    }

    async fn create_form(&self, payload: &SubmissionPayload) -> Result<CreatedForm, ApiError> {
        let url = self.collection_url();
        tracing::debug!("POST {url} ({} questions)", payload.questions.len());
        // .json() sets Content-Type: application/json
        let response = self.http.post(&url).json(payload).send().await?;
        Self::decode(response).await
    }

    async fn delete_form(&self, id: &FormId) -> Result<(), ApiError> {
        let url = self.item_url(id);
        tracing::debug!("DELETE {url}");
        let response = self.http.delete(&url).send().await?;
        Self::check_status(response).await?;
        Ok(())
    }
}

/// Ensure the path starts with a slash
fn normalize_path(path: &str) -> String {
    if path.starts_with('/') {
        path.to_string()
    } else {
        format!("/{path}")
    }
}
