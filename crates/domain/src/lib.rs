//! Smartcar Domain - Core OAuth types
//!
//! This crate defines the domain model for the Smartcar OAuth client.
//! All types here are pure Rust with no I/O dependencies.

pub mod authorization;
pub mod constants;
pub mod error;
pub mod identity;
pub mod token;

pub use authorization::{ApprovalPrompt, AuthorizationParams, AuthorizationRequestOptions, Mode};
pub use error::{
    ConfigurationError, OAuthError, OAuthResult, ProviderRejection, TransportError,
    TransportErrorKind,
};
pub use identity::ClientIdentity;
pub use token::{TokenGrant, TokenRecord, TokenRecordError, TokenResponse, TokenState};
