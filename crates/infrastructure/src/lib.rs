//! Smartcar Infrastructure - Adapters and implementations
//!
//! This crate provides concrete implementations of the ports
//! defined in the application layer.

pub mod adapters;
pub mod auth;
pub mod config;

pub use adapters::SystemClock;
pub use auth::ReqwestTokenEndpoint;
pub use config::{EnvConfigProvider, StaticConfigProvider};
