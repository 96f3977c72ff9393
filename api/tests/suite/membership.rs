use govern_api::ClientError;
use govern_api::Role;
use govern_api::membership;
use govern_api::membership::InviteMemberInput;
use govern_api::types::InvitationStatus;
use govern_graphql::ClientConfig;
use govern_graphql::GraphqlClient;
use govern_test_support::ORGANIZATION_ID;
use govern_test_support::last_variables;
use govern_test_support::mount_data;
use govern_test_support::mount_viewer_forbidden;
use govern_test_support::role_client;
use pretty_assertions::assert_eq;
use serde_json::json;
use wiremock::MockServer;

#[tokio::test]
async fn owner_promotes_member_to_admin() {
    let server = MockServer::start().await;
    mount_data(
        &server,
        "UpdateMembership",
        json!({"updateMembership": {"membership": {
            "id": "mem_viewer", "role": "ADMIN", "profile": {"id": "prof_viewer", "fullName": "Vic"}
        }}}),
    )
    .await;

    let updated = membership::update_membership(&role_client(&server, Role::Owner), "mem_viewer", Role::Admin)
        .await
        .expect("update membership");
    assert_eq!(updated.role, Role::Admin);
    assert_eq!(
        last_variables(&server, "UpdateMembership").await.unwrap()["input"],
        json!({"organizationId": ORGANIZATION_ID, "memberId": "mem_viewer", "role": "ADMIN"})
    );
}

#[tokio::test]
async fn viewer_cannot_change_roles_or_remove_members() {
    let server = MockServer::start().await;
    mount_viewer_forbidden(&server, "UpdateMembership").await;
    mount_viewer_forbidden(&server, "RemoveMember").await;

    let viewer = role_client(&server, Role::Viewer);
    assert!(
        membership::update_membership(&viewer, "mem_admin", Role::Viewer)
            .await
            .unwrap_err()
            .is_forbidden()
    );
    assert!(
        membership::remove_member(&viewer, "mem_admin")
            .await
            .unwrap_err()
            .is_forbidden()
    );
}

#[tokio::test]
async fn invite_then_delete_invitation() {
    let server = MockServer::start().await;
    mount_data(
        &server,
        "InviteMember",
        json!({"inviteMember": {"invitationEdge": {"node": {
            "id": "inv_1",
            "email": "new@example.com",
            "fullName": "New Person",
            "role": "VIEWER",
            "status": "PENDING"
        }}}}),
    )
    .await;
    mount_data(
        &server,
        "DeleteInvitation",
        json!({"deleteInvitation": {"deletedInvitationId": "inv_1"}}),
    )
    .await;

    let admin = role_client(&server, Role::Admin);
    let invitation = membership::invite_member(
        &admin,
        InviteMemberInput {
            organization_id: None,
            email: "new@example.com".to_string(),
            full_name: "New Person".to_string(),
            role: Role::Viewer,
        },
    )
    .await
    .expect("invite");
    assert_eq!(invitation.role, Role::Viewer);
    assert_eq!(invitation.status, Some(InvitationStatus::Pending));

    let deleted = membership::delete_invitation(&admin, &invitation.id)
        .await
        .expect("delete invitation");
    assert_eq!(deleted, "inv_1");
}

#[tokio::test]
async fn remove_member_returns_removed_id() {
    let server = MockServer::start().await;
    mount_data(
        &server,
        "RemoveMember",
        json!({"removeMember": {"deletedMemberId": "mem_viewer"}}),
    )
    .await;

    let removed = membership::remove_member(&role_client(&server, Role::Owner), "mem_viewer")
        .await
        .expect("remove");
    assert_eq!(removed, "mem_viewer");
}

#[tokio::test]
async fn viewer_membership_resolves_profile() {
    let server = MockServer::start().await;
    mount_data(
        &server,
        "ViewerMembership",
        json!({"node": {"viewerMembership": {
            "id": "mem_owner", "role": "OWNER", "profile": {"id": "prof_owner", "fullName": "Olive"}
        }}}),
    )
    .await;

    let own = membership::viewer_membership(&role_client(&server, Role::Owner), ORGANIZATION_ID)
        .await
        .expect("viewer membership");
    assert_eq!(own.role, Role::Owner);
    assert_eq!(own.profile.map(|p| p.id), Some("prof_owner".to_string()));
}

#[tokio::test]
async fn organization_scoped_calls_need_an_identity() {
    let server = MockServer::start().await;
    let anonymous = GraphqlClient::new(&ClientConfig::for_base_url(server.uri())).unwrap();

    let err = membership::remove_member(&anonymous, "mem_1").await.unwrap_err();
    assert!(matches!(err, ClientError::MissingIdentity(_)));
    assert!(server.received_requests().await.unwrap().is_empty());
}
