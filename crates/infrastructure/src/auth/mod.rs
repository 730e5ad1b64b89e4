//! OAuth endpoint adapters.

mod token_endpoint;

pub use token_endpoint::ReqwestTokenEndpoint;
