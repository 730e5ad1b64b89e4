//! Token domain types

mod grant;
mod record;
mod response;
mod state;

pub use grant::TokenGrant;
pub use record::{TokenRecord, TokenRecordError};
pub use response::TokenResponse;
pub use state::TokenState;
