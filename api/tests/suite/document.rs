use govern_api::Role;
use govern_api::document;
use govern_api::document::CreateDocumentInput;
use govern_api::document::UpdateDocumentVersionInput;
use govern_api::types::DocumentVersionSignatureState;
use govern_api::types::DocumentVersionStatus;
use govern_test_support::last_variables;
use govern_test_support::mount_data;
use govern_test_support::mount_viewer_forbidden;
use govern_test_support::role_client;
use pretty_assertions::assert_eq;
use serde_json::json;
use wiremock::MockServer;

fn version(id: &str, version: u32, status: &str) -> serde_json::Value {
    json!({
        "id": id,
        "version": version,
        "status": status,
        "title": "Access control policy",
        "content": "All access is reviewed quarterly.",
        "changelog": null,
        "publishedAt": null
    })
}

#[tokio::test]
async fn create_document_returns_document_and_draft() {
    let server = MockServer::start().await;
    mount_data(
        &server,
        "CreateDocument",
        json!({"createDocument": {
            "documentEdge": {"node": {"id": "doc_1", "title": "Access control policy"}},
            "documentVersionEdge": {"node": version("dv_1", 1, "DRAFT")}
        }}),
    )
    .await;

    let created = document::create_document(
        &role_client(&server, Role::Owner),
        CreateDocumentInput {
            organization_id: None,
            title: "Access control policy".to_string(),
            content: "All access is reviewed quarterly.".to_string(),
            owner_id: "prof_owner".to_string(),
        },
    )
    .await
    .expect("create document");
    assert_eq!(created.document.id, "doc_1");
    assert_eq!(created.draft.status, DocumentVersionStatus::Draft);
    assert_eq!(created.draft.version, Some(1));
}

#[tokio::test]
async fn publish_then_open_new_draft_and_edit() {
    let server = MockServer::start().await;
    mount_data(
        &server,
        "PublishDocumentVersion",
        json!({"publishDocumentVersion": {"documentVersion": version("dv_1", 1, "PUBLISHED")}}),
    )
    .await;
    mount_data(
        &server,
        "CreateDraftDocumentVersion",
        json!({"createDraftDocumentVersion": {"documentVersionEdge": {"node": version("dv_2", 2, "DRAFT")}}}),
    )
    .await;
    mount_data(
        &server,
        "UpdateDocumentVersion",
        json!({"updateDocumentVersion": {"documentVersion": {
            "id": "dv_2", "version": 2, "status": "DRAFT", "content": "Reviewed monthly."
        }}}),
    )
    .await;

    let admin = role_client(&server, Role::Admin);
    let published = document::publish_document_version(&admin, "doc_1", Some("initial release"))
        .await
        .expect("publish");
    assert_eq!(published.status, DocumentVersionStatus::Published);
    assert_eq!(
        last_variables(&server, "PublishDocumentVersion").await.unwrap()["input"],
        json!({"documentId": "doc_1", "changelog": "initial release"})
    );

    let draft = document::create_draft_document_version(&admin, "doc_1")
        .await
        .expect("draft");
    assert_eq!(draft.status, DocumentVersionStatus::Draft);
    assert_eq!(draft.version, Some(2));

    let edited = document::update_document_version(
        &admin,
        UpdateDocumentVersionInput {
            document_version_id: draft.id.clone(),
            content: "Reviewed monthly.".to_string(),
        },
    )
    .await
    .expect("edit draft");
    assert_eq!(edited.content.as_deref(), Some("Reviewed monthly."));
    assert_eq!(
        last_variables(&server, "UpdateDocumentVersion").await.unwrap()["input"],
        json!({"documentVersionId": "dv_2", "content": "Reviewed monthly."})
    );
}

#[tokio::test]
async fn request_signature_from_a_profile() {
    let server = MockServer::start().await;
    mount_data(
        &server,
        "RequestSignature",
        json!({"requestSignature": {"documentVersionSignatureEdge": {"node": {
            "id": "sig_1", "state": "REQUESTED", "signedBy": {"id": "prof_viewer", "fullName": "Vic Viewer"}
        }}}}),
    )
    .await;

    let signature = document::request_signature(&role_client(&server, Role::Owner), "dv_1", "prof_viewer")
        .await
        .expect("request signature");
    assert_eq!(signature.state, DocumentVersionSignatureState::Requested);
    assert_eq!(signature.signed_by.map(|p| p.id), Some("prof_viewer".to_string()));
}

#[tokio::test]
async fn bulk_publish_two_documents() {
    let server = MockServer::start().await;
    mount_data(
        &server,
        "BulkPublishDocumentVersions",
        json!({"bulkPublishDocumentVersions": {"documentVersionEdges": [
            {"node": version("dv_1", 1, "PUBLISHED")},
            {"node": version("dv_9", 1, "PUBLISHED")}
        ]}}),
    )
    .await;

    let ids = vec!["doc_1".to_string(), "doc_2".to_string()];
    let versions = document::bulk_publish_document_versions(&role_client(&server, Role::Owner), &ids, None)
        .await
        .expect("bulk publish");
    assert_eq!(versions.len(), 2);
    assert!(versions.iter().all(|v| v.status == DocumentVersionStatus::Published));
}

#[tokio::test]
async fn bulk_request_signatures_and_bulk_delete() {
    let server = MockServer::start().await;
    mount_data(
        &server,
        "BulkRequestSignatures",
        json!({"bulkRequestSignatures": {"documentVersionSignatureEdges": [
            {"node": {"id": "sig_1", "state": "REQUESTED"}},
            {"node": {"id": "sig_2", "state": "REQUESTED"}}
        ]}}),
    )
    .await;
    mount_data(
        &server,
        "BulkDeleteDocuments",
        json!({"bulkDeleteDocuments": {"deletedDocumentIds": ["doc_1", "doc_2"]}}),
    )
    .await;

    let admin = role_client(&server, Role::Admin);
    let ids = vec!["doc_1".to_string(), "doc_2".to_string()];
    let signatories = vec!["prof_viewer".to_string()];

    let signatures = document::bulk_request_signatures(&admin, &ids, &signatories)
        .await
        .expect("bulk sign");
    assert_eq!(signatures.len(), 2);
    assert_eq!(
        last_variables(&server, "BulkRequestSignatures").await.unwrap()["input"],
        json!({"documentIds": ["doc_1", "doc_2"], "signatoryIds": ["prof_viewer"]})
    );

    let deleted = document::bulk_delete_documents(&admin, &ids).await.expect("bulk delete");
    assert_eq!(deleted, ids);
}

#[tokio::test]
async fn viewer_cannot_publish() {
    let server = MockServer::start().await;
    mount_viewer_forbidden(&server, "BulkPublishDocumentVersions").await;

    let err = document::bulk_publish_document_versions(
        &role_client(&server, Role::Viewer),
        &["doc_1".to_string()],
        None,
    )
    .await
    .unwrap_err();
    assert!(err.is_forbidden());
}
