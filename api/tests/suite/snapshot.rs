use govern_api::Role;
use govern_api::snapshot;
use govern_api::snapshot::CreateSnapshotInput;
use govern_api::types::SnapshotType;
use govern_test_support::ORGANIZATION_ID;
use govern_test_support::last_variables;
use govern_test_support::mount_data;
use govern_test_support::mount_viewer_forbidden;
use govern_test_support::role_client;
use pretty_assertions::assert_eq;
use serde_json::json;
use wiremock::MockServer;

fn vendors_snapshot() -> CreateSnapshotInput {
    CreateSnapshotInput {
        organization_id: None,
        name: "Q1 vendor review".to_string(),
        description: None,
        snapshot_type: SnapshotType::Vendors,
    }
}

#[tokio::test]
async fn snapshot_type_travels_as_type() {
    let server = MockServer::start().await;
    mount_data(
        &server,
        "CreateSnapshot",
        json!({"createSnapshot": {"snapshotEdge": {"node": {
            "id": "snap_1",
            "name": "Q1 vendor review",
            "description": null,
            "type": "VENDORS",
            "createdAt": "2025-01-15T09:30:00Z"
        }}}}),
    )
    .await;
    mount_data(
        &server,
        "DeleteSnapshot",
        json!({"deleteSnapshot": {"deletedSnapshotId": "snap_1"}}),
    )
    .await;

    let admin = role_client(&server, Role::Admin);
    let created = snapshot::create_snapshot(&admin, vendors_snapshot())
        .await
        .expect("create");
    assert_eq!(created.snapshot_type, SnapshotType::Vendors);
    assert_eq!(
        last_variables(&server, "CreateSnapshot").await.unwrap()["input"],
        json!({"organizationId": ORGANIZATION_ID, "name": "Q1 vendor review", "type": "VENDORS"})
    );

    assert_eq!(
        snapshot::delete_snapshot(&admin, &created.id).await.expect("delete"),
        "snap_1"
    );
}

#[tokio::test]
async fn viewer_cannot_take_snapshots() {
    let server = MockServer::start().await;
    mount_viewer_forbidden(&server, "CreateSnapshot").await;

    let err = snapshot::create_snapshot(&role_client(&server, Role::Viewer), vendors_snapshot())
        .await
        .unwrap_err();
    assert!(err.is_forbidden());
}
