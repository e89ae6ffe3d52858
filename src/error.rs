//! Error types for area resolution and upstream calls.

use thiserror::Error;

pub type Result<T, E = Error> = std::result::Result<T, E>;

/// Pipeline failure
#[derive(Debug, Error)]
pub enum Error {
    /// The area name produced zero geocode matches
    #[error("area '{area}' did not resolve to any geocode match")]
    NotFound { area: String },

    #[error(transparent)]
    Upstream(#[from] UpstreamError),
}

impl Error {
    pub fn is_not_found(&self) -> bool {
        matches!(self, Error::NotFound { .. })
    }
}

/// Any failure reported by, or while talking to, the mapping service
#[derive(Debug, Error)]
pub enum UpstreamError {
    /// Network, HTTP status or body decoding failure
    #[error("{operation} request failed: {source}")]
    Transport {
        operation: &'static str,
        #[source]
        source: reqwest::Error,
    },

    /// The service answered with a non-success status (quota, key, ...)
    #[error("{operation} returned status {status}{}", .message.as_deref().map(|m| format!(": {m}")).unwrap_or_default())]
    Status {
        operation: &'static str,
        status: String,
        message: Option<String>,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_message_formatting() {
        let err = UpstreamError::Status {
            operation: "geocode",
            status: "REQUEST_DENIED".to_string(),
            message: Some("The provided API key is invalid.".to_string()),
        };
        assert_eq!(
            err.to_string(),
            "geocode returned status REQUEST_DENIED: The provided API key is invalid."
        );

        let err = UpstreamError::Status {
            operation: "places_nearby",
            status: "OVER_QUERY_LIMIT".to_string(),
            message: None,
        };
        assert_eq!(err.to_string(), "places_nearby returned status OVER_QUERY_LIMIT");
    }

    #[test]
    fn test_not_found() {
        let err = Error::NotFound {
            area: "Zzyzxopolis".to_string(),
        };
        assert!(err.is_not_found());
        assert!(err.to_string().contains("Zzyzxopolis"));
    }
}
