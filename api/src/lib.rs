//! Typed operations for the compliance platform's console API.
//!
//! Every function sends one GraphQL document through a
//! [`GraphqlClient`] and decodes the part of `data` it cares about.
//! Mutations follow the platform's payload conventions: creates return
//! `<entity>Edge { node }`, updates return the entity, deletes return
//! `deleted<Entity>Id`.
//!
//! Inputs whose `organization_id` is left unset are filled from the
//! client's identity.

pub mod asset;
pub mod continual_improvement;
pub mod document;
pub mod membership;
pub mod node;
pub mod nonconformity;
pub mod obligation;
pub mod organization;
pub mod rights_request;
pub mod snapshot;
pub mod task;
pub mod types;
pub mod vendor;

pub use govern_graphql::ClientError;
pub use govern_graphql::Connection;
pub use govern_graphql::GraphqlClient;
pub use govern_graphql::Result;
pub use govern_graphql::Role;

use serde::de::DeserializeOwned;
use serde_json::Value;

/// Executes `document` against the console API and decodes the value at
/// `pointer` (a JSON pointer into `data`).
pub(crate) async fn run<T: DeserializeOwned>(
    client: &GraphqlClient,
    document: &str,
    variables: Value,
    pointer: &str,
) -> Result<T> {
    client.execute_at(document, variables, pointer).await
}

/// Fills an unset organization id from the client's identity.
pub(crate) fn organization_or_identity(
    client: &GraphqlClient,
    organization_id: &mut Option<String>,
) -> Result<()> {
    if organization_id.is_none() {
        *organization_id = Some(client.organization_id()?.to_string());
    }
    Ok(())
}
