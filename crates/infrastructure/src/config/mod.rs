//! Configuration provider adapters
//!
//! - [`EnvConfigProvider`] reads the process environment
//! - [`StaticConfigProvider`] serves values from an in-memory map

mod env_provider;
mod static_provider;

pub use env_provider::EnvConfigProvider;
pub use static_provider::StaticConfigProvider;
