use chrono::DateTime;
use chrono::Utc;
use serde::Deserialize;
use serde::Serialize;
use serde_json::json;

use crate::GraphqlClient;
use crate::Result;
use crate::organization_or_identity;
use crate::run;
use crate::types::AssetType;
use crate::types::PersonRef;

const CREATE_ASSET: &str = r#"
mutation CreateAsset($input: CreateAssetInput!) {
  createAsset(input: $input) {
    assetEdge {
      node { id name amount assetType dataTypesStored owner { id fullName } createdAt updatedAt }
    }
  }
}"#;

const UPDATE_ASSET: &str = r#"
mutation UpdateAsset($input: UpdateAssetInput!) {
  updateAsset(input: $input) {
    asset { id name amount assetType dataTypesStored owner { id fullName } createdAt updatedAt }
  }
}"#;

const DELETE_ASSET: &str = r#"
mutation DeleteAsset($input: DeleteAssetInput!) {
  deleteAsset(input: $input) { deletedAssetId }
}"#;

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Asset {
    pub id: String,
    pub name: String,
    pub amount: i64,
    pub asset_type: AssetType,
    #[serde(default)]
    pub data_types_stored: Option<String>,
    #[serde(default)]
    pub owner: Option<PersonRef>,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub updated_at: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateAssetInput {
    pub organization_id: Option<String>,
    pub name: String,
    pub amount: i64,
    pub owner_id: String,
    pub asset_type: AssetType,
    pub data_types_stored: String,
    pub vendor_ids: Vec<String>,
}

impl CreateAssetInput {
    pub fn new(name: impl Into<String>, owner_id: impl Into<String>, asset_type: AssetType) -> Self {
        Self {
            organization_id: None,
            name: name.into(),
            amount: 1,
            owner_id: owner_id.into(),
            asset_type,
            data_types_stored: String::new(),
            vendor_ids: Vec::new(),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateAssetInput {
    pub id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub amount: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub owner_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub asset_type: Option<AssetType>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data_types_stored: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub vendor_ids: Option<Vec<String>>,
}

pub async fn create_asset(client: &GraphqlClient, mut input: CreateAssetInput) -> Result<Asset> {
    organization_or_identity(client, &mut input.organization_id)?;
    run(
        client,
        CREATE_ASSET,
        json!({ "input": input }),
        "/createAsset/assetEdge/node",
    )
    .await
}

pub async fn update_asset(client: &GraphqlClient, input: UpdateAssetInput) -> Result<Asset> {
    run(client, UPDATE_ASSET, json!({ "input": input }), "/updateAsset/asset").await
}

/// Returns the id of the deleted asset.
pub async fn delete_asset(client: &GraphqlClient, asset_id: &str) -> Result<String> {
    run(
        client,
        DELETE_ASSET,
        json!({ "input": { "assetId": asset_id } }),
        "/deleteAsset/deletedAssetId",
    )
    .await
}
