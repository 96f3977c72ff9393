//! Authenticated GraphQL client for the compliance platform's console and
//! connect APIs.
//!
//! The client sends `{query, operationName, variables}` envelopes over HTTP,
//! authenticates with a bearer token or a session cookie, and decodes the
//! `{data, errors}` response. Any entry in `errors` fails the call, so an
//! authorization refusal shows up as a [`ClientError::Graphql`] that
//! [`ClientError::is_forbidden`] recognizes.

#![deny(clippy::print_stdout, clippy::print_stderr)]

mod client;
pub mod config;
pub mod connection;
mod envelope;
mod error;
pub mod identity;

pub use client::Api;
pub use client::Credentials;
pub use client::GraphqlClient;
pub use crate::config::ClientConfig;
pub use crate::config::ConfigError;
pub use crate::config::ConfigLoader;
pub use crate::config::FixtureConfig;
pub use connection::Connection;
pub use connection::Edge;
pub use connection::PageArgs;
pub use connection::PageInfo;
pub use envelope::ErrorKind;
pub use envelope::GraphqlError;
pub use envelope::GraphqlRequest;
pub use envelope::GraphqlResponse;
pub use envelope::Location;
pub use envelope::PathSegment;
pub use envelope::operation_name;
pub use error::ClientError;
pub use error::GraphqlErrors;
pub use error::Result;
pub use identity::Identity;
pub use identity::Role;
