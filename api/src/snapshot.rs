use chrono::DateTime;
use chrono::Utc;
use serde::Deserialize;
use serde::Serialize;
use serde_json::json;

use crate::GraphqlClient;
use crate::Result;
use crate::organization_or_identity;
use crate::run;
use crate::types::SnapshotType;

const CREATE_SNAPSHOT: &str = r#"
mutation CreateSnapshot($input: CreateSnapshotInput!) {
  createSnapshot(input: $input) {
    snapshotEdge { node { id name description type createdAt } }
  }
}"#;

const DELETE_SNAPSHOT: &str = r#"
mutation DeleteSnapshot($input: DeleteSnapshotInput!) {
  deleteSnapshot(input: $input) { deletedSnapshotId }
}"#;

/// Point-in-time copy of one register of the organization.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Snapshot {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(rename = "type")]
    pub snapshot_type: SnapshotType,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateSnapshotInput {
    pub organization_id: Option<String>,
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(rename = "type")]
    pub snapshot_type: SnapshotType,
}

pub async fn create_snapshot(client: &GraphqlClient, mut input: CreateSnapshotInput) -> Result<Snapshot> {
    organization_or_identity(client, &mut input.organization_id)?;
    run(
        client,
        CREATE_SNAPSHOT,
        json!({ "input": input }),
        "/createSnapshot/snapshotEdge/node",
    )
    .await
}

pub async fn delete_snapshot(client: &GraphqlClient, snapshot_id: &str) -> Result<String> {
    run(
        client,
        DELETE_SNAPSHOT,
        json!({ "input": { "snapshotId": snapshot_id } }),
        "/deleteSnapshot/deletedSnapshotId",
    )
    .await
}
