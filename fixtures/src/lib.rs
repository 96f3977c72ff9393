//! Role-scoped clients for end-to-end tests.
//!
//! Each [`Factory::owner`] call provisions its own user and organization,
//! so tests built on it can run in parallel without sharing state.

pub mod connect;
mod error;
mod factory;

pub use error::FixtureError;
pub use error::Result;
pub use factory::Factory;
pub use factory::TestOrganization;
pub use factory::unique_name;
