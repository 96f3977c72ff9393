use chrono::DateTime;
use chrono::Utc;
use serde::Deserialize;
use serde::Serialize;
use serde_json::json;

use crate::GraphqlClient;
use crate::Result;
use crate::organization_or_identity;
use crate::run;
use crate::types::RightsRequestState;
use crate::types::RightsRequestType;

const CREATE_RIGHTS_REQUEST: &str = r#"
mutation CreateRightsRequest($input: CreateRightsRequestInput!) {
  createRightsRequest(input: $input) {
    rightsRequestEdge {
      node { id requestType requestState dataSubject contact details deadline actionTaken }
    }
  }
}"#;

const UPDATE_RIGHTS_REQUEST: &str = r#"
mutation UpdateRightsRequest($input: UpdateRightsRequestInput!) {
  updateRightsRequest(input: $input) {
    rightsRequest { id requestType requestState dataSubject contact details deadline actionTaken }
  }
}"#;

const DELETE_RIGHTS_REQUEST: &str = r#"
mutation DeleteRightsRequest($input: DeleteRightsRequestInput!) {
  deleteRightsRequest(input: $input) { deletedRightsRequestId }
}"#;

/// A data subject request (access, deletion, portability).
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RightsRequest {
    pub id: String,
    pub request_type: RightsRequestType,
    pub request_state: RightsRequestState,
    #[serde(default)]
    pub data_subject: Option<String>,
    #[serde(default)]
    pub contact: Option<String>,
    #[serde(default)]
    pub details: Option<String>,
    #[serde(default)]
    pub deadline: Option<DateTime<Utc>>,
    #[serde(default)]
    pub action_taken: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateRightsRequestInput {
    pub organization_id: Option<String>,
    pub request_type: RightsRequestType,
    pub request_state: RightsRequestState,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data_subject: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub contact: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub deadline: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub action_taken: Option<String>,
}

impl CreateRightsRequestInput {
    pub fn new(request_type: RightsRequestType) -> Self {
        Self {
            organization_id: None,
            request_type,
            request_state: RightsRequestState::Todo,
            data_subject: None,
            contact: None,
            details: None,
            deadline: None,
            action_taken: None,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateRightsRequestInput {
    pub id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub request_type: Option<RightsRequestType>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub request_state: Option<RightsRequestState>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data_subject: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub contact: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub deadline: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub action_taken: Option<String>,
}

pub async fn create_rights_request(
    client: &GraphqlClient,
    mut input: CreateRightsRequestInput,
) -> Result<RightsRequest> {
    organization_or_identity(client, &mut input.organization_id)?;
    run(
        client,
        CREATE_RIGHTS_REQUEST,
        json!({ "input": input }),
        "/createRightsRequest/rightsRequestEdge/node",
    )
    .await
}

pub async fn update_rights_request(
    client: &GraphqlClient,
    input: UpdateRightsRequestInput,
) -> Result<RightsRequest> {
    run(
        client,
        UPDATE_RIGHTS_REQUEST,
        json!({ "input": input }),
        "/updateRightsRequest/rightsRequest",
    )
    .await
}

pub async fn delete_rights_request(client: &GraphqlClient, rights_request_id: &str) -> Result<String> {
    run(
        client,
        DELETE_RIGHTS_REQUEST,
        json!({ "input": { "rightsRequestId": rights_request_id } }),
        "/deleteRightsRequest/deletedRightsRequestId",
    )
    .await
}
