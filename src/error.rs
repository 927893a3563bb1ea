//! Error types for talking to the analysis API.

use thiserror::Error;

/// Shown when the service answered but reported that the analysis failed.
pub const ANALYSIS_FAILED_MESSAGE: &str = "Project analysis failed, please try again later";

/// Shown when the service could not be reached or answered with an error status.
pub const UNREACHABLE_MESSAGE: &str =
    "Could not fetch project data, please check that the project name is correct";

/// Errors returned by a [`crate::analysis::ProjectService`].
#[derive(Error, Debug)]
pub enum ServiceError {
    /// Network failure, timeout or an undecodable response body
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// The service answered with a non-2xx status
    #[error("Unexpected status code: {0}")]
    Status(u16),

    /// The service answered with `success: false` or without a payload
    #[error("Service reported failure")]
    Rejected,
}

impl ServiceError {
    /// True for failures that happened before a well-formed service reply was read.
    pub fn is_transport(&self) -> bool {
        !matches!(self, ServiceError::Rejected)
    }

    /// The fixed message displayed for a failed analysis.
    pub fn user_message(&self) -> &'static str {
        if self.is_transport() {
            UNREACHABLE_MESSAGE
        } else {
            ANALYSIS_FAILED_MESSAGE
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_user_messages() {
        assert_eq!(ServiceError::Rejected.user_message(), ANALYSIS_FAILED_MESSAGE);
        assert_eq!(ServiceError::Status(404).user_message(), UNREACHABLE_MESSAGE);
        assert!(ServiceError::Status(500).is_transport());
        assert!(!ServiceError::Rejected.is_transport());
    }
}
