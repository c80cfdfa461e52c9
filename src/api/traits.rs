//! Trait abstraction for the forms client to enable mocking in tests

use super::error::ApiError;
use super::types::{CreatedForm, FormId, FormRecord, FormSummary};
use crate::state::SubmissionPayload;
use async_trait::async_trait;

/// Operations against the forms service
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait FormsClientTrait: Send + Sync {
    /// Base URL requests are sent to, for display
    fn endpoint(&self) -> String;

    /// List previously created forms
    async fn list_forms(&self) -> Result<Vec<FormSummary>, ApiError>;

    /// Fetch a single form with its questions
    async fn get_form(&self, id: &FormId) -> Result<FormRecord, ApiError>;

    /// Submit a new form
    async fn create_form(&self, payload: &SubmissionPayload) -> Result<CreatedForm, ApiError>;

    /// Delete a form
    async fn delete_form(&self, id: &FormId) -> Result<(), ApiError>;
}
