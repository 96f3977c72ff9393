use chrono::DateTime;
use chrono::Utc;
use serde::Deserialize;
use serde::Serialize;
use serde_json::json;

use crate::GraphqlClient;
use crate::Result;
use crate::organization_or_identity;
use crate::run;
use crate::types::NonconformityStatus;
use crate::types::PersonRef;

const CREATE_NONCONFORMITY: &str = r#"
mutation CreateNonconformity($input: CreateNonconformityInput!) {
  createNonconformity(input: $input) {
    nonconformityEdge {
      node {
        id referenceId description dateIdentified rootCause correctiveAction
        dueDate status effectivenessCheck owner { id fullName }
      }
    }
  }
}"#;

const UPDATE_NONCONFORMITY: &str = r#"
mutation UpdateNonconformity($input: UpdateNonconformityInput!) {
  updateNonconformity(input: $input) {
    nonconformity {
      id referenceId description dateIdentified rootCause correctiveAction
      dueDate status effectivenessCheck owner { id fullName }
    }
  }
}"#;

const DELETE_NONCONFORMITY: &str = r#"
mutation DeleteNonconformity($input: DeleteNonconformityInput!) {
  deleteNonconformity(input: $input) { deletedNonconformityId }
}"#;

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Nonconformity {
    pub id: String,
    pub reference_id: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub date_identified: Option<DateTime<Utc>>,
    pub root_cause: String,
    #[serde(default)]
    pub corrective_action: Option<String>,
    #[serde(default)]
    pub due_date: Option<DateTime<Utc>>,
    pub status: NonconformityStatus,
    #[serde(default)]
    pub effectiveness_check: Option<String>,
    #[serde(default)]
    pub owner: Option<PersonRef>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateNonconformityInput {
    pub organization_id: Option<String>,
    pub reference_id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub date_identified: Option<DateTime<Utc>>,
    pub root_cause: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub corrective_action: Option<String>,
    pub owner_id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub audit_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub due_date: Option<DateTime<Utc>>,
    pub status: NonconformityStatus,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub effectiveness_check: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateNonconformityInput {
    pub id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reference_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub root_cause: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub corrective_action: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub owner_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub due_date: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<NonconformityStatus>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub effectiveness_check: Option<String>,
}

pub async fn create_nonconformity(
    client: &GraphqlClient,
    mut input: CreateNonconformityInput,
) -> Result<Nonconformity> {
    organization_or_identity(client, &mut input.organization_id)?;
    run(
        client,
        CREATE_NONCONFORMITY,
        json!({ "input": input }),
        "/createNonconformity/nonconformityEdge/node",
    )
    .await
}

pub async fn update_nonconformity(
    client: &GraphqlClient,
    input: UpdateNonconformityInput,
) -> Result<Nonconformity> {
    run(
        client,
        UPDATE_NONCONFORMITY,
        json!({ "input": input }),
        "/updateNonconformity/nonconformity",
    )
    .await
}

pub async fn delete_nonconformity(client: &GraphqlClient, nonconformity_id: &str) -> Result<String> {
    run(
        client,
        DELETE_NONCONFORMITY,
        json!({ "input": { "nonconformityId": nonconformity_id } }),
        "/deleteNonconformity/deletedNonconformityId",
    )
    .await
}
