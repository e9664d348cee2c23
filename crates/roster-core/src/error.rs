//! Unified error types for all layers of the service.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Unified error type for the Roster service.
///
/// Every layer surfaces failures through this enum, so both the
/// machine-readable kind and the human-readable message survive all the way
/// to the HTTP boundary. There is no typed-error recovery anywhere: a
/// failure is terminal for its call.
#[derive(Error, Debug)]
pub enum RosterError {
    /// A mandatory field is absent from a document handed to the
    /// transformation layer.
    #[error("Missing data on input document: \"{field}\" is required.")]
    IncompleteRecord {
        /// Name of the first missing field.
        field: &'static str,
    },

    /// An update transform was invoked without a single updatable field.
    #[error("No updatable fields were provided.")]
    NoFieldsProvided,

    /// Input failed format validation (e.g. a malformed email address).
    #[error("Validation error: {0}")]
    Validation(String),

    /// No record matched at the DAO or repository level.
    #[error("{0}")]
    NotFound(String),

    /// The DAO produced no record for a create operation.
    #[error("Not created.")]
    NotCreated,

    /// The DAO produced no record for an update operation.
    #[error("Not updated.")]
    NotUpdated,

    /// The DAO produced no record for a delete operation.
    #[error("Not deleted.")]
    NotDeleted,

    /// An underlying store call failed; carries the original message.
    #[error("Store operation failed: {0}")]
    OperationFailed(String),

    /// Infrastructure failure outside the store (hashing, serialization).
    #[error("Internal error: {0}")]
    Internal(String),
}

impl RosterError {
    /// Returns the HTTP status code for this error.
    #[must_use]
    pub const fn status_code(&self) -> u16 {
        match self {
            Self::NotFound(_) | Self::NotUpdated | Self::NotDeleted => 404,
            Self::IncompleteRecord { .. }
            | Self::NoFieldsProvided
            | Self::Validation(_)
            | Self::NotCreated => 400,
            Self::OperationFailed(_) | Self::Internal(_) => 500,
        }
    }

    /// Returns a machine-readable error code.
    #[must_use]
    pub const fn error_code(&self) -> &'static str {
        match self {
            Self::IncompleteRecord { .. } => "INCOMPLETE_RECORD",
            Self::NoFieldsProvided => "NO_FIELDS_PROVIDED",
            Self::Validation(_) => "VALIDATION_ERROR",
            Self::NotFound(_) => "NOT_FOUND",
            Self::NotCreated => "NOT_CREATED",
            Self::NotUpdated => "NOT_UPDATED",
            Self::NotDeleted => "NOT_DELETED",
            Self::OperationFailed(_) => "OPERATION_FAILED",
            Self::Internal(_) => "INTERNAL_ERROR",
        }
    }

    /// Creates an incomplete-record error for a missing field.
    #[must_use]
    pub const fn incomplete(field: &'static str) -> Self {
        Self::IncompleteRecord { field }
    }

    /// Creates a not-found error.
    #[must_use]
    pub fn not_found<T: Into<String>>(message: T) -> Self {
        Self::NotFound(message.into())
    }

    /// Creates a validation error.
    #[must_use]
    pub fn validation<T: Into<String>>(message: T) -> Self {
        Self::Validation(message.into())
    }

    /// Creates an internal error.
    #[must_use]
    pub fn internal<T: Into<String>>(message: T) -> Self {
        Self::Internal(message.into())
    }
}

/// Serializable error response for API payloads.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct ErrorResponse {
    /// Machine-readable error code.
    pub code: String,
    /// Human-readable error message.
    pub message: String,
}

impl ErrorResponse {
    /// Creates a new error response from a `RosterError`.
    #[must_use]
    pub fn from_error(error: &RosterError) -> Self {
        Self {
            code: error.error_code().to_string(),
            message: error.to_string(),
        }
    }
}
