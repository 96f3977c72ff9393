//! `govern` command line.
//!
//! # Commands
//! - `govern exec <FILE>` - run a GraphQL document and print `data`
//! - `govern bootstrap` - provision an organization and print the identity

use std::path::PathBuf;

use anyhow::Context;
use anyhow::Result;
use anyhow::bail;
use clap::Parser;
use govern_fixtures::Factory;
use govern_graphql::ClientConfig;
use govern_graphql::ConfigLoader;
use govern_graphql::Credentials;
use govern_graphql::GraphqlClient;
use govern_graphql::Role;
use serde_json::Map;
use serde_json::Value;

#[derive(Debug, Parser)]
#[command(name = "govern", version, about = "GraphQL client for the compliance platform")]
pub struct Cli {
    /// Configuration file. Defaults to ./govern.toml or the user config dir.
    #[arg(long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub cmd: Command,
}

#[derive(Debug, clap::Subcommand)]
pub enum Command {
    /// Run a GraphQL document and print the `data` it returns.
    Exec(ExecArgs),

    /// Create a fresh organization and print the identity of one member.
    Bootstrap(BootstrapArgs),
}

#[derive(Debug, Parser)]
pub struct ExecArgs {
    /// File holding the GraphQL document.
    pub file: PathBuf,

    /// Variables as a JSON object.
    #[arg(long)]
    pub variables: Option<String>,

    /// A single variable; the value is parsed as JSON when it can be.
    #[arg(long = "var", value_name = "KEY=VALUE")]
    pub vars: Vec<String>,

    /// Send to the connect API instead of the console API.
    #[arg(long)]
    pub connect: bool,

    /// Bearer token, overriding the configured one.
    #[arg(long, env = "GOVERN_TOKEN", hide_env_values = true)]
    pub token: Option<String>,
}

#[derive(Debug, Parser)]
pub struct BootstrapArgs {
    /// Role of the member whose identity is printed.
    #[arg(long, default_value = "OWNER")]
    pub role: Role,
}

impl Cli {
    pub async fn run(self) -> Result<()> {
        let config = load_config(self.config.as_deref())?;
        match self.cmd {
            Command::Exec(args) => run_exec(config, args).await,
            Command::Bootstrap(args) => run_bootstrap(config, args).await,
        }
    }
}

fn load_config(path: Option<&std::path::Path>) -> Result<ClientConfig> {
    let config = match path {
        Some(path) => ConfigLoader::new()
            .with_file(path)
            .load()
            .with_context(|| format!("failed to load {}", path.display()))?,
        None => ConfigLoader::load_default().context("failed to load configuration")?,
    };
    Ok(config)
}

async fn run_exec(config: ClientConfig, args: ExecArgs) -> Result<()> {
    let document = tokio::fs::read_to_string(&args.file)
        .await
        .with_context(|| format!("failed to read {}", args.file.display()))?;
    let variables = build_variables(args.variables.as_deref(), &args.vars)?;

    let mut client = GraphqlClient::new(&config)?;
    if let Some(token) = args.token {
        client = client.with_credentials(Credentials::Bearer(token));
    }

    let data = if args.connect {
        client.execute_connect(&document, variables).await?
    } else {
        client.execute(&document, variables).await?
    };
    println!("{}", serde_json::to_string_pretty(&data)?);
    Ok(())
}

async fn run_bootstrap(config: ClientConfig, args: BootstrapArgs) -> Result<()> {
    let organization = Factory::new(config)
        .owner()
        .await
        .context("failed to provision organization")?;
    tracing::info!(organization_id = %organization.organization_id(), "organization ready");
    let client = organization
        .member(args.role)
        .await
        .with_context(|| format!("failed to add {} member", args.role))?;

    let identity = client
        .identity()
        .context("provisioned client has no identity")?;
    println!("{}", serde_json::to_string_pretty(identity)?);
    Ok(())
}

/// Merges `--variables` with every `--var KEY=VALUE`; the latter win.
pub fn build_variables(variables: Option<&str>, vars: &[String]) -> Result<Value> {
    let mut merged = match variables {
        Some(raw) => match serde_json::from_str::<Value>(raw).context("--variables is not valid JSON")? {
            Value::Object(map) => map,
            other => bail!("--variables must be a JSON object, got {other}"),
        },
        None => Map::new(),
    };

    for var in vars {
        let Some((key, raw)) = var.split_once('=') else {
            bail!("--var expects KEY=VALUE, got {var:?}");
        };
        let value = serde_json::from_str(raw).unwrap_or_else(|_| Value::String(raw.to_string()));
        merged.insert(key.to_string(), value);
    }

    Ok(Value::Object(merged))
}
