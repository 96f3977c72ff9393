use govern_graphql::ClientError;
use govern_graphql::Role;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, FixtureError>;

/// Errors raised while provisioning users and organizations.
#[derive(Debug, Error)]
pub enum FixtureError {
    #[error(transparent)]
    Client(#[from] ClientError),

    /// The platform accepted the invitation under another role.
    #[error("{email} joined as {actual}, expected {expected}")]
    RoleMismatch {
        email: String,
        expected: Role,
        actual: Role,
    },

    #[error("membership {0} has no profile")]
    MissingProfile(String),
}

impl FixtureError {
    pub fn client_error(&self) -> Option<&ClientError> {
        match self {
            FixtureError::Client(err) => Some(err),
            _ => None,
        }
    }
}
