//! Forms service client module for HTTP communication

mod client;
mod error;
mod traits;
mod types;

pub use client::FormsClient;
pub use error::ApiError;
pub use traits::FormsClientTrait;
pub use types::{FormId, FormRecord, FormSummary};

#[cfg(test)]
pub use traits::MockFormsClientTrait;
#[cfg(test)]
pub use types::CreatedForm;
