//! Documents, their versions, and signature requests.
//!
//! A document always has one current version. Publishing freezes the
//! draft; a new draft can then be opened, edited and published again.
//! Signatures are requested against a specific version.

use chrono::DateTime;
use chrono::Utc;
use govern_graphql::Edge;
use serde::Deserialize;
use serde::Serialize;
use serde_json::json;

use crate::GraphqlClient;
use crate::Result;
use crate::organization_or_identity;
use crate::run;
use crate::types::DocumentVersionSignatureState;
use crate::types::DocumentVersionStatus;
use crate::types::PersonRef;

const CREATE_DOCUMENT: &str = r#"
mutation CreateDocument($input: CreateDocumentInput!) {
  createDocument(input: $input) {
    documentEdge { node { id title } }
    documentVersionEdge { node { id version status title content changelog publishedAt } }
  }
}"#;

const PUBLISH_DOCUMENT_VERSION: &str = r#"
mutation PublishDocumentVersion($input: PublishDocumentVersionInput!) {
  publishDocumentVersion(input: $input) {
    documentVersion { id version status title content changelog publishedAt }
  }
}"#;

const CREATE_DRAFT_DOCUMENT_VERSION: &str = r#"
mutation CreateDraftDocumentVersion($input: CreateDraftDocumentVersionInput!) {
  createDraftDocumentVersion(input: $input) {
    documentVersionEdge { node { id version status title content changelog publishedAt } }
  }
}"#;

const UPDATE_DOCUMENT_VERSION: &str = r#"
mutation UpdateDocumentVersion($input: UpdateDocumentVersionInput!) {
  updateDocumentVersion(input: $input) {
    documentVersion { id version status title content changelog publishedAt }
  }
}"#;

const REQUEST_SIGNATURE: &str = r#"
mutation RequestSignature($input: RequestSignatureInput!) {
  requestSignature(input: $input) {
    documentVersionSignatureEdge { node { id state signedBy { id fullName } } }
  }
}"#;

const BULK_PUBLISH_DOCUMENT_VERSIONS: &str = r#"
mutation BulkPublishDocumentVersions($input: BulkPublishDocumentVersionsInput!) {
  bulkPublishDocumentVersions(input: $input) {
    documentVersionEdges { node { id version status title content changelog publishedAt } }
  }
}"#;

const BULK_REQUEST_SIGNATURES: &str = r#"
mutation BulkRequestSignatures($input: BulkRequestSignaturesInput!) {
  bulkRequestSignatures(input: $input) {
    documentVersionSignatureEdges { node { id state signedBy { id fullName } } }
  }
}"#;

const BULK_DELETE_DOCUMENTS: &str = r#"
mutation BulkDeleteDocuments($input: BulkDeleteDocumentsInput!) {
  bulkDeleteDocuments(input: $input) { deletedDocumentIds }
}"#;

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Document {
    pub id: String,
    pub title: String,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DocumentVersion {
    pub id: String,
    #[serde(default)]
    pub version: Option<u32>,
    pub status: DocumentVersionStatus,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub content: Option<String>,
    #[serde(default)]
    pub changelog: Option<String>,
    #[serde(default)]
    pub published_at: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DocumentVersionSignature {
    pub id: String,
    pub state: DocumentVersionSignatureState,
    #[serde(default)]
    pub signed_by: Option<PersonRef>,
}

/// A new document together with its initial draft.
#[derive(Debug, Clone, PartialEq)]
pub struct CreatedDocument {
    pub document: Document,
    pub draft: DocumentVersion,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateDocumentInput {
    pub organization_id: Option<String>,
    pub title: String,
    pub content: String,
    pub owner_id: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateDocumentVersionInput {
    pub document_version_id: String,
    pub content: String,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct CreateDocumentPayload {
    document_edge: Edge<Document>,
    document_version_edge: Edge<DocumentVersion>,
}

pub async fn create_document(
    client: &GraphqlClient,
    mut input: CreateDocumentInput,
) -> Result<CreatedDocument> {
    organization_or_identity(client, &mut input.organization_id)?;
    let payload: CreateDocumentPayload = run(
        client,
        CREATE_DOCUMENT,
        json!({ "input": input }),
        "/createDocument",
    )
    .await?;
    Ok(CreatedDocument {
        document: payload.document_edge.node,
        draft: payload.document_version_edge.node,
    })
}

/// Publishes the current draft of `document_id`.
pub async fn publish_document_version(
    client: &GraphqlClient,
    document_id: &str,
    changelog: Option<&str>,
) -> Result<DocumentVersion> {
    run(
        client,
        PUBLISH_DOCUMENT_VERSION,
        json!({ "input": { "documentId": document_id, "changelog": changelog } }),
        "/publishDocumentVersion/documentVersion",
    )
    .await
}

/// Opens a new draft on top of the latest published version.
pub async fn create_draft_document_version(
    client: &GraphqlClient,
    document_id: &str,
) -> Result<DocumentVersion> {
    run(
        client,
        CREATE_DRAFT_DOCUMENT_VERSION,
        json!({ "input": { "documentId": document_id } }),
        "/createDraftDocumentVersion/documentVersionEdge/node",
    )
    .await
}

pub async fn update_document_version(
    client: &GraphqlClient,
    input: UpdateDocumentVersionInput,
) -> Result<DocumentVersion> {
    run(
        client,
        UPDATE_DOCUMENT_VERSION,
        json!({ "input": input }),
        "/updateDocumentVersion/documentVersion",
    )
    .await
}

pub async fn request_signature(
    client: &GraphqlClient,
    document_version_id: &str,
    signatory_id: &str,
) -> Result<DocumentVersionSignature> {
    run(
        client,
        REQUEST_SIGNATURE,
        json!({
            "input": { "documentVersionId": document_version_id, "signatoryId": signatory_id }
        }),
        "/requestSignature/documentVersionSignatureEdge/node",
    )
    .await
}

/// Publishes the current draft of every document; one version per document.
pub async fn bulk_publish_document_versions(
    client: &GraphqlClient,
    document_ids: &[String],
    changelog: Option<&str>,
) -> Result<Vec<DocumentVersion>> {
    let edges: Vec<Edge<DocumentVersion>> = run(
        client,
        BULK_PUBLISH_DOCUMENT_VERSIONS,
        json!({ "input": { "documentIds": document_ids, "changelog": changelog } }),
        "/bulkPublishDocumentVersions/documentVersionEdges",
    )
    .await?;
    Ok(edges.into_iter().map(|edge| edge.node).collect())
}

/// Requests a signature from every signatory on the latest version of every
/// document.
pub async fn bulk_request_signatures(
    client: &GraphqlClient,
    document_ids: &[String],
    signatory_ids: &[String],
) -> Result<Vec<DocumentVersionSignature>> {
    let edges: Vec<Edge<DocumentVersionSignature>> = run(
        client,
        BULK_REQUEST_SIGNATURES,
        json!({ "input": { "documentIds": document_ids, "signatoryIds": signatory_ids } }),
        "/bulkRequestSignatures/documentVersionSignatureEdges",
    )
    .await?;
    Ok(edges.into_iter().map(|edge| edge.node).collect())
}

pub async fn bulk_delete_documents(
    client: &GraphqlClient,
    document_ids: &[String],
) -> Result<Vec<String>> {
    run(
        client,
        BULK_DELETE_DOCUMENTS,
        json!({ "input": { "documentIds": document_ids } }),
        "/bulkDeleteDocuments/deletedDocumentIds",
    )
    .await
}
