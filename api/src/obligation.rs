use chrono::DateTime;
use chrono::Utc;
use serde::Deserialize;
use serde::Serialize;
use serde_json::json;

use crate::GraphqlClient;
use crate::Result;
use crate::organization_or_identity;
use crate::run;
use crate::types::ObligationStatus;
use crate::types::PersonRef;

const CREATE_OBLIGATION: &str = r#"
mutation CreateObligation($input: CreateObligationInput!) {
  createObligation(input: $input) {
    obligationEdge {
      node {
        id area source requirement actionsToBeImplemented regulator
        lastReviewDate dueDate status owner { id fullName }
      }
    }
  }
}"#;

const UPDATE_OBLIGATION: &str = r#"
mutation UpdateObligation($input: UpdateObligationInput!) {
  updateObligation(input: $input) {
    obligation {
      id area source requirement actionsToBeImplemented regulator
      lastReviewDate dueDate status owner { id fullName }
    }
  }
}"#;

const DELETE_OBLIGATION: &str = r#"
mutation DeleteObligation($input: DeleteObligationInput!) {
  deleteObligation(input: $input) { deletedObligationId }
}"#;

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Obligation {
    pub id: String,
    #[serde(default)]
    pub area: Option<String>,
    #[serde(default)]
    pub source: Option<String>,
    #[serde(default)]
    pub requirement: Option<String>,
    #[serde(default)]
    pub actions_to_be_implemented: Option<String>,
    #[serde(default)]
    pub regulator: Option<String>,
    #[serde(default)]
    pub last_review_date: Option<DateTime<Utc>>,
    #[serde(default)]
    pub due_date: Option<DateTime<Utc>>,
    pub status: ObligationStatus,
    #[serde(default)]
    pub owner: Option<PersonRef>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateObligationInput {
    pub organization_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub area: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub source: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub requirement: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub actions_to_be_implemented: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub regulator: Option<String>,
    pub owner_id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_review_date: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub due_date: Option<DateTime<Utc>>,
    pub status: ObligationStatus,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateObligationInput {
    pub id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub area: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub source: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub requirement: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub actions_to_be_implemented: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub regulator: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub owner_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_review_date: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub due_date: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<ObligationStatus>,
}

pub async fn create_obligation(
    client: &GraphqlClient,
    mut input: CreateObligationInput,
) -> Result<Obligation> {
    organization_or_identity(client, &mut input.organization_id)?;
    run(
        client,
        CREATE_OBLIGATION,
        json!({ "input": input }),
        "/createObligation/obligationEdge/node",
    )
    .await
}

pub async fn update_obligation(client: &GraphqlClient, input: UpdateObligationInput) -> Result<Obligation> {
    run(
        client,
        UPDATE_OBLIGATION,
        json!({ "input": input }),
        "/updateObligation/obligation",
    )
    .await
}

pub async fn delete_obligation(client: &GraphqlClient, obligation_id: &str) -> Result<String> {
    run(
        client,
        DELETE_OBLIGATION,
        json!({ "input": { "obligationId": obligation_id } }),
        "/deleteObligation/deletedObligationId",
    )
    .await
}
