use reqwest::StatusCode;
use thiserror::Error;

use crate::config::ConfigError;
use crate::envelope::ErrorKind;
use crate::envelope::GraphqlError;

/// Result type for client operations.
pub type Result<T> = std::result::Result<T, ClientError>;

/// Errors from sending a GraphQL operation.
#[derive(Debug, Error)]
pub enum ClientError {
    /// Connection, TLS or timeout failure.
    #[error("transport error: {0}")]
    Transport(#[from] reqwest::Error),

    /// Non-success status with a body that is not a GraphQL envelope.
    #[error("unexpected HTTP status {status}: {body}")]
    Http { status: StatusCode, body: String },

    /// The server answered with a non-empty `errors` array.
    #[error("GraphQL errors: {0}")]
    Graphql(GraphqlErrors),

    /// Neither `errors` nor `data` was present.
    #[error("response carried no data")]
    MissingData,

    /// `data` did not match the expected shape.
    #[error("failed to decode response of {operation}: {source}")]
    Decode {
        operation: String,
        source: serde_json::Error,
    },

    #[error("invalid header value: {0}")]
    InvalidHeader(#[from] reqwest::header::InvalidHeaderValue),

    /// The client identity lacks a piece the operation needs.
    #[error("client identity has no {0}")]
    MissingIdentity(&'static str),

    #[error(transparent)]
    Config(#[from] ConfigError),
}

impl ClientError {
    /// True when the server refused the caller rather than the request.
    pub fn is_forbidden(&self) -> bool {
        match self {
            ClientError::Graphql(errors) => errors.iter().any(|error| {
                matches!(
                    error.kind(),
                    ErrorKind::Forbidden | ErrorKind::Unauthenticated
                )
            }),
            ClientError::Http { status, .. } => {
                *status == StatusCode::UNAUTHORIZED || *status == StatusCode::FORBIDDEN
            }
            _ => false,
        }
    }

    pub fn graphql_errors(&self) -> &[GraphqlError] {
        match self {
            ClientError::Graphql(errors) => &errors.0,
            _ => &[],
        }
    }
}

/// Non-empty list of errors reported by the server.
#[derive(Debug, Clone, PartialEq)]
pub struct GraphqlErrors(pub Vec<GraphqlError>);

impl GraphqlErrors {
    pub fn iter(&self) -> std::slice::Iter<'_, GraphqlError> {
        self.0.iter()
    }

    pub fn messages(&self) -> Vec<&str> {
        self.0.iter().map(|error| error.message.as_str()).collect()
    }
}

impl std::fmt::Display for GraphqlErrors {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for (index, error) in self.0.iter().enumerate() {
            if index > 0 {
                f.write_str("; ")?;
            }
            write!(f, "{error}")?;
        }
        Ok(())
    }
}
