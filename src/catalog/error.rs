//! Catalog-specific error types.
//!
//! Granular errors for catalog operations, convertible to `ShorelineError`
//! for API consumers.

use std::fmt;

/// Catalog-specific errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CatalogError {
    /// The specified plan was not found.
    PlanNotFound { plan_id: String },
    /// The filter shape is rejected by opt-in validation.
    InvalidFilter { reason: String },
    /// The page request is rejected by opt-in validation.
    InvalidPageRequest { reason: String },
    /// The upstream catalog source could not be reached.
    SourceUnavailable { reason: String },
}

impl fmt::Display for CatalogError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::PlanNotFound { plan_id } => {
                write!(f, "Plan not found: {}", plan_id)
            }
            Self::InvalidFilter { reason } => {
                write!(f, "Invalid plan filter: {}", reason)
            }
            Self::InvalidPageRequest { reason } => {
                write!(f, "Invalid page request: {}", reason)
            }
            Self::SourceUnavailable { reason } => {
                write!(f, "Catalog source unavailable: {}", reason)
            }
        }
    }
}

impl std::error::Error for CatalogError {}

impl From<CatalogError> for crate::error::ShorelineError {
    fn from(err: CatalogError) -> Self {
        match &err {
            CatalogError::PlanNotFound { .. } => {
                crate::error::ShorelineError::NotFound(err.to_string())
            }
            CatalogError::InvalidFilter { .. } | CatalogError::InvalidPageRequest { .. } => {
                crate::error::ShorelineError::BadRequest(err.to_string())
            }
            CatalogError::SourceUnavailable { .. } => {
                crate::error::ShorelineError::ServiceUnavailable(err.to_string())
            }
        }
    }
}

impl CatalogError {
    /// Check if this is a client error.
    #[must_use]
    pub fn is_client_error(&self) -> bool {
        matches!(
            self,
            Self::PlanNotFound { .. }
                | Self::InvalidFilter { .. }
                | Self::InvalidPageRequest { .. }
        )
    }

    /// Check if the operation can be retried.
    #[must_use]
    pub fn is_retryable(&self) -> bool {
        matches!(self, Self::SourceUnavailable { .. })
    }
}
