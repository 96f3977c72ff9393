use serde::Deserialize;
use serde::Serialize;
use serde_json::json;

use crate::GraphqlClient;
use crate::Result;
use crate::organization_or_identity;
use crate::run;
use crate::types::InvitationStatus;
use crate::types::PersonRef;
use crate::types::Role;

const UPDATE_MEMBERSHIP: &str = r#"
mutation UpdateMembership($input: UpdateMembershipInput!) {
  updateMembership(input: $input) {
    membership { id role profile { id fullName } }
  }
}"#;

const REMOVE_MEMBER: &str = r#"
mutation RemoveMember($input: RemoveMemberInput!) {
  removeMember(input: $input) { deletedMemberId }
}"#;

const INVITE_MEMBER: &str = r#"
mutation InviteMember($input: InviteMemberInput!) {
  inviteMember(input: $input) {
    invitationEdge { node { id email fullName role status } }
  }
}"#;

const DELETE_INVITATION: &str = r#"
mutation DeleteInvitation($input: DeleteInvitationInput!) {
  deleteInvitation(input: $input) { deletedInvitationId }
}"#;

const VIEWER_MEMBERSHIP: &str = r#"
query ViewerMembership($organizationId: ID!) {
  node(id: $organizationId) {
    ... on Organization {
      viewerMembership { id role profile { id fullName } }
    }
  }
}"#;

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Membership {
    pub id: String,
    pub role: Role,
    #[serde(default)]
    pub profile: Option<PersonRef>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Invitation {
    pub id: String,
    pub email: String,
    #[serde(default)]
    pub full_name: Option<String>,
    pub role: Role,
    #[serde(default)]
    pub status: Option<InvitationStatus>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct InviteMemberInput {
    pub organization_id: Option<String>,
    pub email: String,
    pub full_name: String,
    pub role: Role,
}

pub async fn update_membership(
    client: &GraphqlClient,
    member_id: &str,
    role: Role,
) -> Result<Membership> {
    let organization_id = client.organization_id()?;
    run(
        client,
        UPDATE_MEMBERSHIP,
        json!({
            "input": { "organizationId": organization_id, "memberId": member_id, "role": role }
        }),
        "/updateMembership/membership",
    )
    .await
}

/// Returns the id of the removed membership.
pub async fn remove_member(client: &GraphqlClient, member_id: &str) -> Result<String> {
    let organization_id = client.organization_id()?;
    run(
        client,
        REMOVE_MEMBER,
        json!({ "input": { "organizationId": organization_id, "memberId": member_id } }),
        "/removeMember/deletedMemberId",
    )
    .await
}

pub async fn invite_member(client: &GraphqlClient, mut input: InviteMemberInput) -> Result<Invitation> {
    organization_or_identity(client, &mut input.organization_id)?;
    tracing::debug!(email = %input.email, role = %input.role, "inviting member");
    run(
        client,
        INVITE_MEMBER,
        json!({ "input": input }),
        "/inviteMember/invitationEdge/node",
    )
    .await
}

pub async fn delete_invitation(client: &GraphqlClient, invitation_id: &str) -> Result<String> {
    let organization_id = client.organization_id()?;
    run(
        client,
        DELETE_INVITATION,
        json!({ "input": { "organizationId": organization_id, "invitationId": invitation_id } }),
        "/deleteInvitation/deletedInvitationId",
    )
    .await
}

/// The calling user's own membership in `organization_id`.
pub async fn viewer_membership(client: &GraphqlClient, organization_id: &str) -> Result<Membership> {
    run(
        client,
        VIEWER_MEMBERSHIP,
        json!({ "organizationId": organization_id }),
        "/node/viewerMembership",
    )
    .await
}
