use std::time::Instant;

use reqwest::header::AUTHORIZATION;
use reqwest::header::HeaderValue;
use serde::de::DeserializeOwned;
use serde_json::Value;
use strum_macros::Display;
use tracing::Instrument;
use url::Url;

use crate::config::ClientConfig;
use crate::envelope::GraphqlRequest;
use crate::envelope::GraphqlResponse;
use crate::error::ClientError;
use crate::error::Result;
use crate::identity::Identity;
use crate::identity::Role;

/// Which GraphQL endpoint an operation targets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
#[strum(serialize_all = "lowercase")]
pub enum Api {
    /// Organization-scoped resources (assets, vendors, documents, ...).
    Console,
    /// Identity and session management (sign up, sign in, organizations).
    Connect,
}

/// How requests are authenticated.
///
/// Every client keeps a cookie jar, so `Session` needs no token: signing
/// in through the connect API stores the session cookie and later calls
/// on the same client (or its clones) send it.
#[derive(Clone, Default, PartialEq, Eq)]
pub enum Credentials {
    #[default]
    Session,
    Bearer(String),
}

impl std::fmt::Debug for Credentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Credentials::Session => f.write_str("Session"),
            Credentials::Bearer(_) => f.write_str("Bearer(<redacted>)"),
        }
    }
}

/// GraphQL client bound to one platform deployment.
///
/// Cloning is cheap and clones share the connection pool and cookie jar.
#[derive(Debug, Clone)]
pub struct GraphqlClient {
    http: reqwest::Client,
    console_url: Url,
    connect_url: Url,
    credentials: Credentials,
    identity: Option<Identity>,
}

impl GraphqlClient {
    pub fn new(config: &ClientConfig) -> Result<Self> {
        config.validate()?;
        let http = reqwest::Client::builder()
            .cookie_store(true)
            .timeout(config.timeout())
            .user_agent(config.user_agent.as_str())
            .build()?;
        let credentials = config
            .api_token
            .clone()
            .map(Credentials::Bearer)
            .unwrap_or_default();

        Ok(Self {
            http,
            console_url: config.console_url()?,
            connect_url: config.connect_url()?,
            credentials,
            identity: None,
        })
    }

    pub fn with_credentials(mut self, credentials: Credentials) -> Self {
        self.credentials = credentials;
        self
    }

    pub fn with_identity(mut self, identity: Identity) -> Self {
        self.identity = Some(identity);
        self
    }

    pub fn set_identity(&mut self, identity: Identity) {
        self.identity = Some(identity);
    }

    pub fn identity(&self) -> Option<&Identity> {
        self.identity.as_ref()
    }

    pub fn role(&self) -> Option<Role> {
        self.identity.as_ref().and_then(|identity| identity.role)
    }

    pub fn organization_id(&self) -> Result<&str> {
        self.identity
            .as_ref()
            .and_then(|identity| identity.organization_id.as_deref())
            .ok_or(ClientError::MissingIdentity("organization id"))
    }

    pub fn profile_id(&self) -> Result<&str> {
        self.identity
            .as_ref()
            .and_then(|identity| identity.profile_id.as_deref())
            .ok_or(ClientError::MissingIdentity("profile id"))
    }

    pub fn endpoint(&self, api: Api) -> &Url {
        match api {
            Api::Console => &self.console_url,
            Api::Connect => &self.connect_url,
        }
    }

    /// Runs an operation against the console API and returns `data`.
    pub async fn execute(&self, query: &str, variables: Value) -> Result<Value> {
        self.send(Api::Console, &GraphqlRequest::new(query, variables))
            .await
    }

    /// Runs an operation against the console API and decodes `data` into `T`.
    pub async fn execute_as<T: DeserializeOwned>(&self, query: &str, variables: Value) -> Result<T> {
        self.send_as(Api::Console, GraphqlRequest::new(query, variables))
            .await
    }

    /// Runs an operation against the connect API and returns `data`.
    pub async fn execute_connect(&self, query: &str, variables: Value) -> Result<Value> {
        self.send(Api::Connect, &GraphqlRequest::new(query, variables))
            .await
    }

    pub async fn execute_connect_as<T: DeserializeOwned>(
        &self,
        query: &str,
        variables: Value,
    ) -> Result<T> {
        self.send_as(Api::Connect, GraphqlRequest::new(query, variables))
            .await
    }

    /// Runs an operation against the console API and decodes the value at
    /// `pointer`, a JSON pointer into `data` such as
    /// `/createAsset/assetEdge/node`.
    ///
    /// A missing or null value is [`ClientError::MissingData`].
    pub async fn execute_at<T: DeserializeOwned>(
        &self,
        query: &str,
        variables: Value,
        pointer: &str,
    ) -> Result<T> {
        self.send_at(Api::Console, GraphqlRequest::new(query, variables), pointer)
            .await
    }

    pub async fn execute_connect_at<T: DeserializeOwned>(
        &self,
        query: &str,
        variables: Value,
        pointer: &str,
    ) -> Result<T> {
        self.send_at(Api::Connect, GraphqlRequest::new(query, variables), pointer)
            .await
    }

    async fn send_at<T: DeserializeOwned>(
        &self,
        api: Api,
        request: GraphqlRequest,
        pointer: &str,
    ) -> Result<T> {
        let data = self.send(api, &request).await?;
        decode_at(data, request.label(), pointer)
    }

    async fn send_as<T: DeserializeOwned>(&self, api: Api, request: GraphqlRequest) -> Result<T> {
        let data = self.send(api, &request).await?;
        serde_json::from_value(data).map_err(|source| ClientError::Decode {
            operation: request.label().to_string(),
            source,
        })
    }

    /// POSTs one request. A single attempt is made; failures are returned
    /// to the caller as-is.
    pub async fn send(&self, api: Api, request: &GraphqlRequest) -> Result<Value> {
        let span = tracing::debug_span!("graphql", operation = %request.label(), %api);
        self.send_inner(api, request).instrument(span).await
    }

    async fn send_inner(&self, api: Api, request: &GraphqlRequest) -> Result<Value> {
        let started = Instant::now();

        let mut builder = self.http.post(self.endpoint(api).clone()).json(request);
        if let Credentials::Bearer(token) = &self.credentials {
            builder = builder.header(AUTHORIZATION, HeaderValue::from_str(&format!("Bearer {token}"))?);
        }

        let response = builder.send().await?;
        let status = response.status();
        let body = response.text().await?;
        let elapsed_ms = started.elapsed().as_millis() as u64;

        let envelope = match serde_json::from_str::<GraphqlResponse>(&body) {
            Ok(envelope) if envelope.data.is_some() || !envelope.errors.is_empty() => envelope,
            _ if !status.is_success() => {
                tracing::warn!(%status, elapsed_ms, "request failed");
                return Err(ClientError::Http { status, body });
            }
            Ok(envelope) => envelope,
            Err(source) => {
                return Err(ClientError::Decode {
                    operation: request.label().to_string(),
                    source,
                });
            }
        };

        let result = envelope.into_result();
        match &result {
            Ok(_) => tracing::debug!(%status, elapsed_ms, "operation completed"),
            Err(ClientError::Graphql(errors)) => {
                let codes: Vec<&str> = errors.iter().filter_map(|error| error.code()).collect();
                tracing::warn!(%status, elapsed_ms, ?codes, "operation returned errors: {errors}");
            }
            Err(err) => tracing::warn!(%status, elapsed_ms, "operation failed: {err}"),
        }
        result
    }
}

fn decode_at<T: DeserializeOwned>(mut data: Value, operation: &str, pointer: &str) -> Result<T> {
    let value = data
        .pointer_mut(pointer)
        .map(Value::take)
        .filter(|value| !value.is_null())
        .ok_or(ClientError::MissingData)?;
    serde_json::from_value(value).map_err(|source| ClientError::Decode {
        operation: operation.to_string(),
        source,
    })
}
