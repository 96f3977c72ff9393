use govern_api::Role;
use govern_api::asset;
use govern_api::asset::CreateAssetInput;
use govern_api::asset::UpdateAssetInput;
use govern_api::types::AssetType;
use govern_test_support::ORGANIZATION_ID;
use govern_test_support::last_variables;
use govern_test_support::mount_data;
use govern_test_support::mount_viewer_forbidden;
use govern_test_support::role_client;
use pretty_assertions::assert_eq;
use serde_json::json;
use wiremock::MockServer;

fn asset_json(asset_type: &str) -> serde_json::Value {
    json!({
        "id": "ast_1",
        "name": "Laptop fleet",
        "amount": 12,
        "assetType": asset_type,
        "dataTypesStored": "customer data",
        "owner": {"id": "prof_owner", "fullName": "Olive Owner"},
        "createdAt": "2025-01-02T03:04:05Z",
        "updatedAt": "2025-01-02T03:04:05Z"
    })
}

#[tokio::test]
async fn create_virtual_asset_fills_organization_from_identity() {
    let server = MockServer::start().await;
    mount_data(
        &server,
        "CreateAsset",
        json!({"createAsset": {"assetEdge": {"node": asset_json("VIRTUAL")}}}),
    )
    .await;

    let owner = role_client(&server, Role::Owner);
    let mut input = CreateAssetInput::new("Laptop fleet", "prof_owner", AssetType::Virtual);
    input.amount = 12;
    input.data_types_stored = "customer data".to_string();

    let created = asset::create_asset(&owner, input).await.expect("create asset");
    assert_eq!(created.asset_type, AssetType::Virtual);
    assert_eq!(created.amount, 12);
    assert_eq!(created.owner.map(|o| o.id), Some("prof_owner".to_string()));

    let variables = last_variables(&server, "CreateAsset").await.unwrap();
    assert_eq!(
        variables["input"],
        json!({
            "organizationId": ORGANIZATION_ID,
            "name": "Laptop fleet",
            "amount": 12,
            "ownerId": "prof_owner",
            "assetType": "VIRTUAL",
            "dataTypesStored": "customer data",
            "vendorIds": []
        })
    );
}

#[tokio::test]
async fn update_sends_only_changed_fields() {
    let server = MockServer::start().await;
    mount_data(
        &server,
        "UpdateAsset",
        json!({"updateAsset": {"asset": asset_json("PHYSICAL")}}),
    )
    .await;

    let admin = role_client(&server, Role::Admin);
    let updated = asset::update_asset(
        &admin,
        UpdateAssetInput {
            id: "ast_1".to_string(),
            asset_type: Some(AssetType::Physical),
            ..UpdateAssetInput::default()
        },
    )
    .await
    .expect("update asset");
    assert_eq!(updated.asset_type, AssetType::Physical);

    let variables = last_variables(&server, "UpdateAsset").await.unwrap();
    assert_eq!(variables["input"], json!({"id": "ast_1", "assetType": "PHYSICAL"}));
}

#[tokio::test]
async fn viewer_cannot_delete_asset() {
    let server = MockServer::start().await;
    mount_viewer_forbidden(&server, "DeleteAsset").await;
    mount_data(
        &server,
        "DeleteAsset",
        json!({"deleteAsset": {"deletedAssetId": "ast_1"}}),
    )
    .await;

    for role in [Role::Owner, Role::Admin] {
        let deleted = asset::delete_asset(&role_client(&server, role), "ast_1")
            .await
            .expect("writer deletes");
        assert_eq!(deleted, "ast_1");
    }

    let err = asset::delete_asset(&role_client(&server, Role::Viewer), "ast_1")
        .await
        .unwrap_err();
    assert!(err.is_forbidden(), "unexpected error: {err}");
}
