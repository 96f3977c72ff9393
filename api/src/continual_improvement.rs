use chrono::DateTime;
use chrono::Utc;
use serde::Deserialize;
use serde::Serialize;
use serde_json::json;

use crate::GraphqlClient;
use crate::Result;
use crate::organization_or_identity;
use crate::run;
use crate::types::ContinualImprovementStatus;
use crate::types::PersonRef;
use crate::types::Priority;

const CREATE_CONTINUAL_IMPROVEMENT: &str = r#"
mutation CreateContinualImprovement($input: CreateContinualImprovementInput!) {
  createContinualImprovement(input: $input) {
    continualImprovementEdge {
      node { id referenceId description source targetDate status priority owner { id fullName } }
    }
  }
}"#;

const UPDATE_CONTINUAL_IMPROVEMENT: &str = r#"
mutation UpdateContinualImprovement($input: UpdateContinualImprovementInput!) {
  updateContinualImprovement(input: $input) {
    continualImprovement { id referenceId description source targetDate status priority owner { id fullName } }
  }
}"#;

const DELETE_CONTINUAL_IMPROVEMENT: &str = r#"
mutation DeleteContinualImprovement($input: DeleteContinualImprovementInput!) {
  deleteContinualImprovement(input: $input) { deletedContinualImprovementId }
}"#;

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContinualImprovement {
    pub id: String,
    pub reference_id: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub source: Option<String>,
    #[serde(default)]
    pub target_date: Option<DateTime<Utc>>,
    pub status: ContinualImprovementStatus,
    pub priority: Priority,
    #[serde(default)]
    pub owner: Option<PersonRef>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateContinualImprovementInput {
    pub organization_id: Option<String>,
    pub reference_id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub source: Option<String>,
    pub owner_id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub target_date: Option<DateTime<Utc>>,
    pub status: ContinualImprovementStatus,
    pub priority: Priority,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateContinualImprovementInput {
    pub id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reference_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub source: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub owner_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub target_date: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<ContinualImprovementStatus>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub priority: Option<Priority>,
}

pub async fn create_continual_improvement(
    client: &GraphqlClient,
    mut input: CreateContinualImprovementInput,
) -> Result<ContinualImprovement> {
    organization_or_identity(client, &mut input.organization_id)?;
    run(
        client,
        CREATE_CONTINUAL_IMPROVEMENT,
        json!({ "input": input }),
        "/createContinualImprovement/continualImprovementEdge/node",
    )
    .await
}

pub async fn update_continual_improvement(
    client: &GraphqlClient,
    input: UpdateContinualImprovementInput,
) -> Result<ContinualImprovement> {
    run(
        client,
        UPDATE_CONTINUAL_IMPROVEMENT,
        json!({ "input": input }),
        "/updateContinualImprovement/continualImprovement",
    )
    .await
}

pub async fn delete_continual_improvement(
    client: &GraphqlClient,
    continual_improvement_id: &str,
) -> Result<String> {
    run(
        client,
        DELETE_CONTINUAL_IMPROVEMENT,
        json!({ "input": { "continualImprovementId": continual_improvement_id } }),
        "/deleteContinualImprovement/deletedContinualImprovementId",
    )
    .await
}
