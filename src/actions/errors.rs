//! Action error types.

use thiserror::Error;

/// Errors that can occur while invoking an action.
#[derive(Debug, Error)]
pub enum ActionError {
    /// The descriptor's parameter bag did not match the action's schema.
    #[error("invalid parameters for '{action}': {reason}")]
    InvalidParameters { action: String, reason: String },

    /// The action's network request failed before a response arrived.
    #[error("request to {endpoint} failed: {reason}")]
    RequestFailed { endpoint: String, reason: String },

    /// The service answered with a non-2xx status.
    #[error("HTTP {status} from audit service: {body}")]
    ServiceError { status: u16, body: String },

    /// The response body was not the expected JSON.
    #[error("malformed audit payload: {reason}")]
    MalformedPayload { reason: String },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_parameters_display() {
        let err = ActionError::InvalidParameters {
            action: "get_seo_page_report".to_string(),
            reason: "missing field `url`".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "invalid parameters for 'get_seo_page_report': missing field `url`"
        );
    }
}
