use serde::Deserialize;
use serde::Serialize;
use serde_json::json;

use crate::GraphqlClient;
use crate::Result;
use crate::node::fetch_node;
use crate::organization_or_identity;
use crate::run;

const UPDATE_ORGANIZATION: &str = r#"
mutation UpdateOrganization($input: UpdateOrganizationInput!) {
  updateOrganization(input: $input) {
    organization { id name description websiteUrl email headquarterAddress }
  }
}"#;

const UPDATE_ORGANIZATION_CONTEXT: &str = r#"
mutation UpdateOrganizationContext($input: UpdateOrganizationContextInput!) {
  updateOrganizationContext(input: $input) {
    context { product architecture team processes customers }
  }
}"#;

const GET_ORGANIZATION: &str = r#"
query GetOrganization($id: ID!) {
  node(id: $id) {
    ... on Organization {
      id name description websiteUrl email headquarterAddress
      context { product architecture team processes customers }
    }
  }
}"#;

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Organization {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub website_url: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub headquarter_address: Option<String>,
    #[serde(default)]
    pub context: Option<OrganizationContext>,
}

/// Free-text description of what the organization does, used to scope
/// its compliance program.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct OrganizationContext {
    #[serde(default)]
    pub product: Option<String>,
    #[serde(default)]
    pub architecture: Option<String>,
    #[serde(default)]
    pub team: Option<String>,
    #[serde(default)]
    pub processes: Option<String>,
    #[serde(default)]
    pub customers: Option<String>,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct ContextInput<'a> {
    organization_id: &'a str,
    #[serde(flatten)]
    context: &'a OrganizationContext,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateOrganizationInput {
    pub organization_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub website_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub headquarter_address: Option<String>,
}

pub async fn update_organization(
    client: &GraphqlClient,
    mut input: UpdateOrganizationInput,
) -> Result<Organization> {
    organization_or_identity(client, &mut input.organization_id)?;
    run(
        client,
        UPDATE_ORGANIZATION,
        json!({ "input": input }),
        "/updateOrganization/organization",
    )
    .await
}

/// Replaces the context of the client's organization. Unset fields are
/// sent as null and clear the stored value.
pub async fn update_organization_context(
    client: &GraphqlClient,
    context: &OrganizationContext,
) -> Result<OrganizationContext> {
    let input = ContextInput {
        organization_id: client.organization_id()?,
        context,
    };
    run(
        client,
        UPDATE_ORGANIZATION_CONTEXT,
        json!({ "input": input }),
        "/updateOrganizationContext/context",
    )
    .await
}

pub async fn get_organization(client: &GraphqlClient, organization_id: &str) -> Result<Organization> {
    fetch_node(client, GET_ORGANIZATION, organization_id, json!({})).await
}
