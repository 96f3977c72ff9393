//! Account and session operations of the connect API.
//!
//! Signing in stores the session cookie in the client's jar; every later
//! call made through that client (or a clone) is authenticated by it.

use govern_api::types::InvitationStatus;
use govern_graphql::GraphqlClient;
use govern_graphql::Result;
use serde::Deserialize;
use serde_json::json;

const SIGN_UP: &str = r#"
mutation SignUp($input: SignUpInput!) {
  signUp(input: $input) {
    identity { id email fullName }
  }
}"#;

const SIGN_IN: &str = r#"
mutation SignIn($input: SignInInput!) {
  signIn(input: $input) {
    identity { id email fullName }
  }
}"#;

const CREATE_ORGANIZATION: &str = r#"
mutation CreateOrganization($input: CreateOrganizationInput!) {
  createOrganization(input: $input) {
    organizationEdge { node { id name } }
  }
}"#;

const ACCEPT_INVITATION: &str = r#"
mutation AcceptInvitation($input: AcceptInvitationInput!) {
  acceptInvitation(input: $input) {
    invitation { id status organization { id } }
  }
}"#;

/// The signed-in user as reported by the connect API.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Account {
    pub id: String,
    pub email: String,
    #[serde(default)]
    pub full_name: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct OrganizationSummary {
    pub id: String,
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct AcceptedInvitation {
    pub id: String,
    #[serde(default)]
    pub status: Option<InvitationStatus>,
    pub organization: OrganizationRef,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct OrganizationRef {
    pub id: String,
}

pub async fn sign_up(
    client: &GraphqlClient,
    email: &str,
    password: &str,
    full_name: &str,
) -> Result<Account> {
    client
        .execute_connect_at(
            SIGN_UP,
            json!({ "input": { "email": email, "password": password, "fullName": full_name } }),
            "/signUp/identity",
        )
        .await
}

pub async fn sign_in(client: &GraphqlClient, email: &str, password: &str) -> Result<Account> {
    client
        .execute_connect_at(
            SIGN_IN,
            json!({ "input": { "email": email, "password": password } }),
            "/signIn/identity",
        )
        .await
}

pub async fn create_organization(client: &GraphqlClient, name: &str) -> Result<OrganizationSummary> {
    client
        .execute_connect_at(
            CREATE_ORGANIZATION,
            json!({ "input": { "name": name } }),
            "/createOrganization/organizationEdge/node",
        )
        .await
}

pub async fn accept_invitation(
    client: &GraphqlClient,
    invitation_id: &str,
) -> Result<AcceptedInvitation> {
    client
        .execute_connect_at(
            ACCEPT_INVITATION,
            json!({ "input": { "invitationId": invitation_id } }),
            "/acceptInvitation/invitation",
        )
        .await
}
