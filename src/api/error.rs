//! Error taxonomy for API calls.
//!
//! Most failures are logged at the call site and never surfaced to the
//! user; the one exception is the referential-conflict case on category
//! delete, which the UI raises as a blocking alert.

use thiserror::Error;

/// Errors produced by [`ApiClient`](crate::api::ApiClient) operations.
#[derive(Debug, Error)]
pub enum ApiError {
    /// The request never produced a response (DNS, connect, TLS, ...).
    #[error("request to {url} failed: {source}")]
    Transport {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    /// The entity does not exist (404 on a single-entity fetch).
    #[error("{resource} {id} no existe")]
    NotFound { resource: &'static str, id: i64 },

    /// Deletion blocked because another entity still references the target.
    /// The API signals this with a 400 on category delete.
    #[error("conflicto referencial: {message}")]
    Conflict { message: String },

    /// Any other non-success status.
    #[error("el servidor respondió {status}: {body}")]
    Status { status: u16, body: String },

    /// The response arrived but its body was not the expected shape.
    #[error("respuesta inválida de {url}: {source}")]
    Decode {
        url: String,
        #[source]
        source: reqwest::Error,
    },
}

impl ApiError {
    /// True for the category-with-products delete rejection.
    pub fn is_conflict(&self) -> bool {
        matches!(self, ApiError::Conflict { .. })
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self, ApiError::NotFound { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn conflict_is_distinguished() {
        let err = ApiError::Conflict {
            message: "tiene productos asociados".to_string(),
        };
        assert!(err.is_conflict());
        assert!(!err.is_not_found());
    }

    #[test]
    fn status_is_not_conflict() {
        let err = ApiError::Status {
            status: 500,
            body: "boom".to_string(),
        };
        assert!(!err.is_conflict());
    }
}
