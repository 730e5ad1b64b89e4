//! Smartcar Application - OAuth core
//!
//! This crate holds the authorization-code flow: URL building, code
//! exchange and token refresh, written against the ports in [`ports`].

pub mod oauth;
pub mod ports;

pub use oauth::{OAuthClient, TokenLine, assemble_params};
pub use ports::{Clock, ConfigProvider, EndpointError, TokenEndpointClient};
