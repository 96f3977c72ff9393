//! Client configuration
//!
//! Layered like the rest of the workspace: serialized defaults, then an
//! optional TOML file, then `GOVERN_*` environment variables.

mod error;
mod loader;

pub use error::ConfigError;
pub use error::Result;
pub use loader::ClientConfig;
pub use loader::ConfigLoader;
pub use loader::FixtureConfig;
