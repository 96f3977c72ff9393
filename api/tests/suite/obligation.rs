use govern_api::Role;
use govern_api::obligation;
use govern_api::obligation::CreateObligationInput;
use govern_api::obligation::UpdateObligationInput;
use govern_api::types::ObligationStatus;
use govern_test_support::last_variables;
use govern_test_support::mount_data;
use govern_test_support::mount_viewer_forbidden;
use govern_test_support::role_client;
use pretty_assertions::assert_eq;
use serde_json::json;
use wiremock::MockServer;

fn obligation_json(status: &str) -> serde_json::Value {
    json!({
        "id": "obl_1",
        "area": "Privacy",
        "source": "GDPR Art. 30",
        "requirement": "Maintain a record of processing activities",
        "actionsToBeImplemented": null,
        "regulator": "CNIL",
        "lastReviewDate": null,
        "dueDate": null,
        "status": status,
        "owner": {"id": "prof_owner"}
    })
}

#[tokio::test]
async fn create_partially_compliant_obligation() {
    let server = MockServer::start().await;
    mount_data(
        &server,
        "CreateObligation",
        json!({"createObligation": {"obligationEdge": {"node": obligation_json("PARTIALLY_COMPLIANT")}}}),
    )
    .await;

    let created = obligation::create_obligation(
        &role_client(&server, Role::Admin),
        CreateObligationInput {
            organization_id: None,
            area: Some("Privacy".to_string()),
            source: Some("GDPR Art. 30".to_string()),
            requirement: Some("Maintain a record of processing activities".to_string()),
            actions_to_be_implemented: None,
            regulator: Some("CNIL".to_string()),
            owner_id: "prof_owner".to_string(),
            last_review_date: None,
            due_date: None,
            status: ObligationStatus::PartiallyCompliant,
        },
    )
    .await
    .expect("create");
    assert_eq!(created.status, ObligationStatus::PartiallyCompliant);
    assert_eq!(created.regulator.as_deref(), Some("CNIL"));
}

#[tokio::test]
async fn mark_compliant_and_delete() {
    let server = MockServer::start().await;
    mount_data(
        &server,
        "UpdateObligation",
        json!({"updateObligation": {"obligation": obligation_json("COMPLIANT")}}),
    )
    .await;
    mount_data(
        &server,
        "DeleteObligation",
        json!({"deleteObligation": {"deletedObligationId": "obl_1"}}),
    )
    .await;
    mount_viewer_forbidden(&server, "DeleteObligation").await;

    let owner = role_client(&server, Role::Owner);
    let updated = obligation::update_obligation(
        &owner,
        UpdateObligationInput {
            id: "obl_1".to_string(),
            status: Some(ObligationStatus::Compliant),
            ..UpdateObligationInput::default()
        },
    )
    .await
    .expect("update");
    assert_eq!(updated.status, ObligationStatus::Compliant);
    assert_eq!(
        last_variables(&server, "UpdateObligation").await.unwrap()["input"],
        json!({"id": "obl_1", "status": "COMPLIANT"})
    );

    assert!(
        obligation::delete_obligation(&role_client(&server, Role::Viewer), "obl_1")
            .await
            .unwrap_err()
            .is_forbidden()
    );
    assert_eq!(
        obligation::delete_obligation(&owner, "obl_1").await.expect("delete"),
        "obl_1"
    );
}
