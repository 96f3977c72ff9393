use govern_api::Role;
use govern_api::rights_request;
use govern_api::rights_request::CreateRightsRequestInput;
use govern_api::rights_request::UpdateRightsRequestInput;
use govern_api::types::RightsRequestState;
use govern_api::types::RightsRequestType;
use govern_test_support::ORGANIZATION_ID;
use govern_test_support::last_variables;
use govern_test_support::mount_data;
use govern_test_support::mount_viewer_forbidden;
use govern_test_support::role_client;
use pretty_assertions::assert_eq;
use serde_json::json;
use wiremock::MockServer;

#[tokio::test]
async fn new_requests_start_in_todo() {
    let server = MockServer::start().await;
    mount_data(
        &server,
        "CreateRightsRequest",
        json!({"createRightsRequest": {"rightsRequestEdge": {"node": {
            "id": "rr_1",
            "requestType": "DELETION",
            "requestState": "TODO",
            "dataSubject": "jane@customer.example",
            "contact": null,
            "details": null,
            "deadline": "2025-03-01T00:00:00Z",
            "actionTaken": null
        }}}}),
    )
    .await;

    let mut input = CreateRightsRequestInput::new(RightsRequestType::Deletion);
    input.data_subject = Some("jane@customer.example".to_string());
    let created = rights_request::create_rights_request(&role_client(&server, Role::Admin), input)
        .await
        .expect("create");
    assert_eq!(created.request_state, RightsRequestState::Todo);
    assert!(created.deadline.is_some());
    assert_eq!(
        last_variables(&server, "CreateRightsRequest").await.unwrap()["input"],
        json!({
            "organizationId": ORGANIZATION_ID,
            "requestType": "DELETION",
            "requestState": "TODO",
            "dataSubject": "jane@customer.example"
        })
    );
}

#[tokio::test]
async fn complete_then_delete() {
    let server = MockServer::start().await;
    mount_data(
        &server,
        "UpdateRightsRequest",
        json!({"updateRightsRequest": {"rightsRequest": {
            "id": "rr_1",
            "requestType": "ACCESS",
            "requestState": "DONE",
            "actionTaken": "Export sent"
        }}}),
    )
    .await;
    mount_data(
        &server,
        "DeleteRightsRequest",
        json!({"deleteRightsRequest": {"deletedRightsRequestId": "rr_1"}}),
    )
    .await;

    let owner = role_client(&server, Role::Owner);
    let done = rights_request::update_rights_request(
        &owner,
        UpdateRightsRequestInput {
            id: "rr_1".to_string(),
            request_state: Some(RightsRequestState::Done),
            action_taken: Some("Export sent".to_string()),
            ..UpdateRightsRequestInput::default()
        },
    )
    .await
    .expect("update");
    assert_eq!(done.request_state, RightsRequestState::Done);
    assert_eq!(done.action_taken.as_deref(), Some("Export sent"));

    let deleted = rights_request::delete_rights_request(&owner, "rr_1")
        .await
        .expect("delete");
    assert_eq!(deleted, "rr_1");
    assert_eq!(
        last_variables(&server, "DeleteRightsRequest").await.unwrap()["input"],
        json!({"rightsRequestId": "rr_1"})
    );
}

#[tokio::test]
async fn viewer_cannot_update() {
    let server = MockServer::start().await;
    mount_viewer_forbidden(&server, "UpdateRightsRequest").await;

    let err = rights_request::update_rights_request(
        &role_client(&server, Role::Viewer),
        UpdateRightsRequestInput {
            id: "rr_1".to_string(),
            request_state: Some(RightsRequestState::InProgress),
            ..UpdateRightsRequestInput::default()
        },
    )
    .await
    .unwrap_err();
    assert!(err.is_forbidden());
}
