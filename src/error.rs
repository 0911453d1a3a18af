//! Error types for the octop CLI

use thiserror::Error;

use crate::repo::RepoRefError;

/// Result type alias for octop operations
pub type Result<T> = std::result::Result<T, Error>;

/// Top-level error type for the application
#[derive(Debug, Error)]
pub enum Error {
    #[error(transparent)]
    Api(#[from] ApiError),

    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    RepoRef(#[from] RepoRefError),

    /// User input that fails validation before any mutating call
    #[error("{0}")]
    Validation(String),

    /// A user or team the command needs does not exist
    #[error("{0}")]
    NotFound(String),

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error("Interactive prompt error: {0}")]
    Dialoguer(String),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Operation failed: {0}")]
    Other(String),
}

impl From<dialoguer::Error> for Error {
    fn from(err: dialoguer::Error) -> Self {
        Error::Dialoguer(err.to_string())
    }
}

/// A field-level validation error reported by the API
#[derive(Debug, Clone, Default, PartialEq, Eq, serde::Deserialize)]
pub struct FieldError {
    #[serde(default)]
    pub resource: Option<String>,
    #[serde(default)]
    pub field: Option<String>,
    #[serde(default)]
    pub code: Option<String>,
    #[serde(default)]
    pub message: Option<String>,
}

impl std::fmt::Display for FieldError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if let Some(ref message) = self.message {
            return write!(f, "{}", message);
        }

        let location = match (&self.resource, &self.field) {
            (Some(resource), Some(field)) => format!("{}.{}", resource, field),
            (Some(resource), None) => resource.clone(),
            (None, Some(field)) => field.clone(),
            (None, None) => "request".to_string(),
        };
        let code = self.code.as_deref().unwrap_or("invalid");
        write!(f, "{}: {}", location, code)
    }
}

/// API-related errors
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("Authentication failed. Check the GITHUB_ACCESS_TOKEN environment variable.")]
    Unauthorized,

    #[error("Access denied: {0}")]
    Forbidden(String),

    #[error("Resource not found: {0}")]
    NotFound(String),

    /// Structured error body returned by the API
    #[error("{}", format_response_error(*status, message, errors))]
    Response {
        status: u16,
        message: String,
        errors: Vec<FieldError>,
    },

    #[error("Network error: {0}")]
    Network(String),

    #[error("Invalid API response: {0}")]
    InvalidResponse(String),
}

impl From<reqwest::Error> for ApiError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            ApiError::Network("Request timed out".to_string())
        } else if err.is_connect() {
            ApiError::Network("Failed to connect to API".to_string())
        } else {
            ApiError::Network(err.to_string())
        }
    }
}

/// Render an API error message followed by one bullet per field error
fn format_response_error(status: u16, message: &str, errors: &[FieldError]) -> String {
    let mut out = format!("{} (HTTP {})", message, status);
    for err in errors {
        out.push_str(&format!("\n  • {}", err));
    }
    out
}

/// Configuration-related errors
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Configuration file not found: {0}")]
    NotFound(String),

    #[error("Failed to parse configuration: {0}")]
    ParseError(String),

    #[error("Invalid configuration: {0}")]
    Invalid(String),

    #[error(
        "Access token not configured. Set the GITHUB_ACCESS_TOKEN environment variable."
    )]
    MissingToken,
}

impl From<serde_yaml::Error> for ConfigError {
    fn from(err: serde_yaml::Error) -> Self {
        ConfigError::ParseError(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_api_error_unauthorized_message() {
        let err = ApiError::Unauthorized;
        assert!(err.to_string().contains("GITHUB_ACCESS_TOKEN"));
    }

    #[test]
    fn test_api_error_not_found() {
        let err = ApiError::NotFound("repos/octo/missing".to_string());
        assert!(err.to_string().contains("octo/missing"));
    }

    #[test]
    fn test_api_error_response_lists_field_errors() {
        let err = ApiError::Response {
            status: 422,
            message: "Repository creation failed.".to_string(),
            errors: vec![
                FieldError {
                    resource: Some("Repository".to_string()),
                    field: Some("name".to_string()),
                    code: Some("custom".to_string()),
                    message: Some("name already exists on this account".to_string()),
                },
                FieldError {
                    resource: Some("Repository".to_string()),
                    field: Some("name".to_string()),
                    code: Some("missing_field".to_string()),
                    message: None,
                },
            ],
        };

        let msg = err.to_string();
        assert!(msg.starts_with("Repository creation failed. (HTTP 422)"));
        assert!(msg.contains("  • name already exists on this account"));
        assert!(msg.contains("  • Repository.name: missing_field"));
    }

    #[test]
    fn test_api_error_response_without_field_errors() {
        let err = ApiError::Response {
            status: 500,
            message: "Server Error".to_string(),
            errors: vec![],
        };
        assert_eq!(err.to_string(), "Server Error (HTTP 500)");
    }

    #[test]
    fn test_field_error_fallbacks() {
        let err = FieldError {
            field: Some("permission".to_string()),
            ..Default::default()
        };
        assert_eq!(err.to_string(), "permission: invalid");

        assert_eq!(FieldError::default().to_string(), "request: invalid");
    }

    #[test]
    fn test_config_error_missing_token() {
        let err = ConfigError::MissingToken;
        assert!(err.to_string().contains("GITHUB_ACCESS_TOKEN"));
    }

    #[test]
    fn test_config_error_from_yaml_error() {
        let yaml_err = serde_yaml::from_str::<serde_yaml::Value>("invalid: [yaml: content")
            .unwrap_err();
        let config_err: ConfigError = yaml_err.into();

        match config_err {
            ConfigError::ParseError(_) => (),
            _ => panic!("Expected ConfigError::ParseError"),
        }
    }

    #[test]
    fn test_error_from_repo_ref_error() {
        let err: Error = RepoRefError::MissingOwner.into();
        assert!(matches!(err, Error::RepoRef(RepoRefError::MissingOwner)));
        assert!(err.to_string().contains("GITHUB_USERNAME"));
    }

    #[test]
    fn test_error_from_api_error() {
        let err: Error = ApiError::Unauthorized.into();
        match err {
            Error::Api(ApiError::Unauthorized) => (),
            _ => panic!("Expected Error::Api(ApiError::Unauthorized)"),
        }
    }
}
