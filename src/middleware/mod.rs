//! Request middleware.
//!
//! Token deserialization (attaches the authorization context) and the
//! access guards that consume it.

mod deserialize_token;
mod guards;

pub use deserialize_token::DeserializeToken;
pub use guards::AdminUser;
pub use guards::AuthenticatedUser;
