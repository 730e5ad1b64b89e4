//! OAuth authorization-code flow.
//!
//! This module provides:
//! - The shared client handle with lazily resolved identity
//! - Authorization URL building
//! - Authorization code exchange and token refresh
//! - Token line lifecycle tracking

mod authorization_url;
mod client;
mod exchange;
mod refresh;
mod token_line;

#[cfg(test)]
pub(crate) mod test_support;

pub use authorization_url::assemble_params;
pub use client::OAuthClient;
pub use token_line::TokenLine;
