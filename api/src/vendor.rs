//! Vendors with their contacts and the services they provide.

use govern_graphql::Connection;
use govern_graphql::PageArgs;
use serde::Deserialize;
use serde::Serialize;
use serde_json::Value;
use serde_json::json;

use crate::GraphqlClient;
use crate::Result;
use crate::node::fetch_node;
use crate::organization_or_identity;
use crate::run;

const CREATE_VENDOR: &str = r#"
mutation CreateVendor($input: CreateVendorInput!) {
  createVendor(input: $input) {
    vendorEdge { node { id name description websiteUrl category } }
  }
}"#;

const DELETE_VENDOR: &str = r#"
mutation DeleteVendor($input: DeleteVendorInput!) {
  deleteVendor(input: $input) { deletedVendorId }
}"#;

const CREATE_VENDOR_CONTACT: &str = r#"
mutation CreateVendorContact($input: CreateVendorContactInput!) {
  createVendorContact(input: $input) {
    vendorContactEdge { node { id fullName email phone role } }
  }
}"#;

const UPDATE_VENDOR_CONTACT: &str = r#"
mutation UpdateVendorContact($input: UpdateVendorContactInput!) {
  updateVendorContact(input: $input) {
    vendorContact { id fullName email phone role }
  }
}"#;

const DELETE_VENDOR_CONTACT: &str = r#"
mutation DeleteVendorContact($input: DeleteVendorContactInput!) {
  deleteVendorContact(input: $input) { deletedVendorContactId }
}"#;

const CREATE_VENDOR_SERVICE: &str = r#"
mutation CreateVendorService($input: CreateVendorServiceInput!) {
  createVendorService(input: $input) {
    vendorServiceEdge { node { id name description } }
  }
}"#;

const UPDATE_VENDOR_SERVICE: &str = r#"
mutation UpdateVendorService($input: UpdateVendorServiceInput!) {
  updateVendorService(input: $input) {
    vendorService { id name description }
  }
}"#;

const DELETE_VENDOR_SERVICE: &str = r#"
mutation DeleteVendorService($input: DeleteVendorServiceInput!) {
  deleteVendorService(input: $input) { deletedVendorServiceId }
}"#;

const GET_VENDOR: &str = r#"
query GetVendor(
  $id: ID!
  $contactsFirst: Int
  $contactsAfter: CursorKey
  $contactsLast: Int
  $contactsBefore: CursorKey
  $servicesFirst: Int
  $servicesAfter: CursorKey
  $servicesLast: Int
  $servicesBefore: CursorKey
) {
  node(id: $id) {
    ... on Vendor {
      id name description websiteUrl category
      contacts(first: $contactsFirst, after: $contactsAfter, last: $contactsLast, before: $contactsBefore) {
        totalCount
        edges { cursor node { id fullName email phone role } }
        pageInfo { hasNextPage hasPreviousPage startCursor endCursor }
      }
      services(first: $servicesFirst, after: $servicesAfter, last: $servicesLast, before: $servicesBefore) {
        totalCount
        edges { cursor node { id name description } }
        pageInfo { hasNextPage hasPreviousPage startCursor endCursor }
      }
    }
  }
}"#;

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Vendor {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub website_url: Option<String>,
    #[serde(default)]
    pub category: Option<String>,
    /// Only present when fetched through [`get_vendor`].
    #[serde(default)]
    pub contacts: Option<Connection<VendorContact>>,
    #[serde(default)]
    pub services: Option<Connection<VendorService>>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VendorContact {
    pub id: String,
    #[serde(default)]
    pub full_name: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub phone: Option<String>,
    #[serde(default)]
    pub role: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct VendorService {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateVendorInput {
    pub organization_id: Option<String>,
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub website_url: Option<String>,
}

impl CreateVendorInput {
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            organization_id: None,
            name: name.into(),
            description: None,
            website_url: None,
        }
    }
}

/// Contact fields shared by create and update.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct VendorContactFields {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub full_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub role: Option<String>,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct ContactInput<'a> {
    #[serde(skip_serializing_if = "Option::is_none")]
    vendor_id: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    id: Option<&'a str>,
    #[serde(flatten)]
    fields: &'a VendorContactFields,
}

pub async fn create_vendor(client: &GraphqlClient, mut input: CreateVendorInput) -> Result<Vendor> {
    organization_or_identity(client, &mut input.organization_id)?;
    run(
        client,
        CREATE_VENDOR,
        json!({ "input": input }),
        "/createVendor/vendorEdge/node",
    )
    .await
}

pub async fn delete_vendor(client: &GraphqlClient, vendor_id: &str) -> Result<String> {
    run(
        client,
        DELETE_VENDOR,
        json!({ "input": { "vendorId": vendor_id } }),
        "/deleteVendor/deletedVendorId",
    )
    .await
}

pub async fn create_vendor_contact(
    client: &GraphqlClient,
    vendor_id: &str,
    fields: &VendorContactFields,
) -> Result<VendorContact> {
    let input = ContactInput {
        vendor_id: Some(vendor_id),
        id: None,
        fields,
    };
    run(
        client,
        CREATE_VENDOR_CONTACT,
        json!({ "input": input }),
        "/createVendorContact/vendorContactEdge/node",
    )
    .await
}

pub async fn update_vendor_contact(
    client: &GraphqlClient,
    contact_id: &str,
    fields: &VendorContactFields,
) -> Result<VendorContact> {
    let input = ContactInput {
        vendor_id: None,
        id: Some(contact_id),
        fields,
    };
    run(
        client,
        UPDATE_VENDOR_CONTACT,
        json!({ "input": input }),
        "/updateVendorContact/vendorContact",
    )
    .await
}

pub async fn delete_vendor_contact(client: &GraphqlClient, contact_id: &str) -> Result<String> {
    run(
        client,
        DELETE_VENDOR_CONTACT,
        json!({ "input": { "vendorContactId": contact_id } }),
        "/deleteVendorContact/deletedVendorContactId",
    )
    .await
}

pub async fn create_vendor_service(
    client: &GraphqlClient,
    vendor_id: &str,
    name: &str,
    description: Option<&str>,
) -> Result<VendorService> {
    run(
        client,
        CREATE_VENDOR_SERVICE,
        json!({ "input": { "vendorId": vendor_id, "name": name, "description": description } }),
        "/createVendorService/vendorServiceEdge/node",
    )
    .await
}

pub async fn update_vendor_service(
    client: &GraphqlClient,
    service_id: &str,
    name: Option<&str>,
    description: Option<&str>,
) -> Result<VendorService> {
    let mut input = json!({ "id": service_id });
    if let Some(name) = name {
        input["name"] = json!(name);
    }
    if let Some(description) = description {
        input["description"] = json!(description);
    }
    run(
        client,
        UPDATE_VENDOR_SERVICE,
        json!({ "input": input }),
        "/updateVendorService/vendorService",
    )
    .await
}

pub async fn delete_vendor_service(client: &GraphqlClient, service_id: &str) -> Result<String> {
    run(
        client,
        DELETE_VENDOR_SERVICE,
        json!({ "input": { "vendorServiceId": service_id } }),
        "/deleteVendorService/deletedVendorServiceId",
    )
    .await
}

/// Fetches a vendor with one page of its contacts and one of its services.
///
/// Each connection is paged on its own: a cursor from `contacts` is never
/// sent to `services`.
pub async fn get_vendor(
    client: &GraphqlClient,
    vendor_id: &str,
    contacts: &PageArgs,
    services: &PageArgs,
) -> Result<Vendor> {
    let mut variables = contacts.prefixed("contacts");
    variables.extend(services.prefixed("services"));
    fetch_node(client, GET_VENDOR, vendor_id, Value::Object(variables)).await
}
