use thiserror::Error;

use super::models::{ActivityId, ProductionId};

/// Errors that can occur during progress tracking operations.
#[derive(Debug, Error)]
pub enum ProgressError {
    #[error("{0}")]
    Validation(String),
    #[error("activity not found: {0}")]
    ActivityNotFound(ActivityId),
    #[error("production not found: {0}")]
    ProductionNotFound(ProductionId),
    #[error("storage error: {0}")]
    Storage(String),
}

impl ProgressError {
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    pub fn storage(msg: impl Into<String>) -> Self {
        Self::Storage(msg.into())
    }
}
