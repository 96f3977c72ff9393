use govern_api::membership;
use govern_api::membership::InviteMemberInput;
use govern_graphql::ClientConfig;
use govern_graphql::Credentials;
use govern_graphql::GraphqlClient;
use govern_graphql::Identity;
use govern_graphql::Role;
use tracing::info;
use uuid::Uuid;

use crate::connect;
use crate::connect::Account;
use crate::connect::OrganizationSummary;
use crate::error::FixtureError;
use crate::error::Result;

/// `{prefix}-{uuid}`, unique across parallel test runs.
pub fn unique_name(prefix: &str) -> String {
    format!("{prefix}-{}", Uuid::new_v4().simple())
}

/// Provisions users and organizations against one deployment.
#[derive(Debug, Clone)]
pub struct Factory {
    config: ClientConfig,
}

impl Factory {
    pub fn new(config: ClientConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    pub fn unique_email(&self, prefix: &str) -> String {
        format!("{}@{}", unique_name(prefix), self.config.fixtures.email_domain)
    }

    /// A client with its own cookie jar, authenticated by session only.
    fn session_client(&self) -> Result<GraphqlClient> {
        Ok(GraphqlClient::new(&self.config)?.with_credentials(Credentials::Session))
    }

    /// Signs up a fresh user and signs it in on a new client.
    async fn register(&self, prefix: &str) -> Result<(GraphqlClient, Account)> {
        let client = self.session_client()?;
        let email = self.unique_email(prefix);
        let full_name = unique_name(prefix);
        let password = self.config.fixtures.password.as_str();

        connect::sign_up(&client, &email, password, &full_name).await?;
        let account = connect::sign_in(&client, &email, password).await?;
        info!(user_id = %account.id, email = %account.email, "fixture user signed in");
        Ok((client, account))
    }

    /// Creates a user owning a brand new organization.
    pub async fn owner(&self) -> Result<TestOrganization> {
        let (mut client, account) = self.register("owner").await?;
        let organization =
            connect::create_organization(&client, &unique_name("organization")).await?;
        info!(organization_id = %organization.id, "fixture organization created");

        let identity = resolve_identity(&client, &account, &organization.id, Role::Owner).await?;
        client.set_identity(identity);
        Ok(TestOrganization {
            factory: self.clone(),
            owner: client,
            organization,
        })
    }
}

/// An organization with its owner's client, able to add members.
#[derive(Debug, Clone)]
pub struct TestOrganization {
    factory: Factory,
    owner: GraphqlClient,
    organization: OrganizationSummary,
}

impl TestOrganization {
    pub fn owner(&self) -> &GraphqlClient {
        &self.owner
    }

    pub fn organization(&self) -> &OrganizationSummary {
        &self.organization
    }

    pub fn organization_id(&self) -> &str {
        &self.organization.id
    }

    /// Client for a member holding `role`.
    ///
    /// OWNER returns the owner's client. Other roles invite a new user,
    /// who signs up and accepts the invitation.
    pub async fn member(&self, role: Role) -> Result<GraphqlClient> {
        if role == Role::Owner {
            return Ok(self.owner.clone());
        }

        let slug = role.to_string().to_lowercase();
        let email = self.factory.unique_email(&slug);
        let full_name = unique_name(&slug);
        let invitation = membership::invite_member(
            &self.owner,
            InviteMemberInput {
                organization_id: Some(self.organization.id.clone()),
                email: email.clone(),
                full_name: full_name.clone(),
                role,
            },
        )
        .await?;

        let mut client = self.factory.session_client()?;
        let password = self.factory.config.fixtures.password.as_str();
        connect::sign_up(&client, &email, password, &full_name).await?;
        let account = connect::sign_in(&client, &email, password).await?;
        connect::accept_invitation(&client, &invitation.id).await?;
        info!(%role, email = %account.email, organization_id = %self.organization.id, "fixture member joined");

        let identity = resolve_identity(&client, &account, &self.organization.id, role).await?;
        client.set_identity(identity);
        Ok(client)
    }
}

async fn resolve_identity(
    client: &GraphqlClient,
    account: &Account,
    organization_id: &str,
    expected: Role,
) -> Result<Identity> {
    let own = membership::viewer_membership(client, organization_id).await?;
    if own.role != expected {
        return Err(FixtureError::RoleMismatch {
            email: account.email.clone(),
            expected,
            actual: own.role,
        });
    }
    let profile = own.profile.ok_or_else(|| FixtureError::MissingProfile(own.id.clone()))?;

    Ok(Identity::new(account.id.clone(), account.email.clone())
        .in_organization(organization_id, expected)
        .with_membership(own.id, Some(profile.id)))
}
