//! Port definitions (interfaces)
//!
//! Ports define the boundaries between the OAuth core and external systems.
//! Each port is a trait that can be implemented by adapters in the infrastructure layer.

mod clock;
mod config_provider;
mod token_endpoint;

pub use clock::Clock;
pub use config_provider::ConfigProvider;
pub use token_endpoint::{EndpointError, TokenEndpointClient};
