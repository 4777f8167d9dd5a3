//! Error taxonomy for user-triggered operations.
//!
//! Every variant is caught at the screen that issued the operation and turned
//! into a [`StatusMessage`](super::StatusMessage). Nothing here is fatal.

use trialplan_core::{CostError, TemplateError};

use crate::data::StorageError;
use crate::services::ServiceError;

#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("Invalid parameter: {0}")]
    InvalidParameter(#[from] CostError),

    #[error("{0}")]
    MissingPrecondition(&'static str),

    #[error("{operation} failed: {source}")]
    ExternalService {
        operation: &'static str,
        #[source]
        source: ServiceError,
    },

    #[error("Template rejected: {0}")]
    Template(#[from] TemplateError),

    #[error("Storage error: {0}")]
    Storage(#[from] StorageError),
}

impl AppError {
    pub fn external(operation: &'static str, source: ServiceError) -> Self {
        AppError::ExternalService { operation, source }
    }

    /// Message shown to the user.
    ///
    /// A 404 from a backend means the endpoint is not deployed yet and gets a
    /// "coming soon" message instead of a failure.
    pub fn user_message(&self) -> String {
        match self {
            AppError::ExternalService { operation, source } if source.is_not_found() => {
                format!("{operation} is coming soon. This feature is not available on the server yet.")
            }
            _ => self.to_string(),
        }
    }
}

pub type AppResult<T> = Result<T, AppError>;
