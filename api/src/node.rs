//! Lookups through the Relay `node(id)` root field.

use govern_graphql::ErrorKind;
use serde::Deserialize;
use serde::de::DeserializeOwned;
use serde_json::Value;
use serde_json::json;

use crate::ClientError;
use crate::GraphqlClient;
use crate::Result;
use crate::run;

const NODE_TYPENAME: &str = r#"
query NodeTypename($id: ID!) {
  node(id: $id) { __typename id }
}"#;

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct NodeRef {
    #[serde(rename = "__typename")]
    pub typename: String,
    pub id: String,
}

/// Runs a `node(id: $id)` document and decodes the fragment it selects.
///
/// `extra` is merged into the variables next to `id` (e.g. page arguments).
/// A null node is [`ClientError::MissingData`].
pub async fn fetch_node<T: DeserializeOwned>(
    client: &GraphqlClient,
    document: &str,
    id: &str,
    extra: Value,
) -> Result<T> {
    let mut variables = json!({ "id": id });
    if let (Value::Object(vars), Value::Object(extra)) = (&mut variables, extra) {
        vars.extend(extra);
    }
    run(client, document, variables, "/node").await
}

/// Resolves the type of a global id; `None` when nothing lives there.
pub async fn lookup(client: &GraphqlClient, id: &str) -> Result<Option<NodeRef>> {
    match fetch_node(client, NODE_TYPENAME, id, json!({})).await {
        Ok(node) => Ok(Some(node)),
        Err(ClientError::MissingData) => Ok(None),
        Err(ClientError::Graphql(errors))
            if errors.iter().all(|error| error.kind() == ErrorKind::NotFound) =>
        {
            Ok(None)
        }
        Err(err) => Err(err),
    }
}

/// True when `id` still resolves, e.g. to verify a delete took effect.
pub async fn exists(client: &GraphqlClient, id: &str) -> Result<bool> {
    Ok(lookup(client, id).await?.is_some())
}
