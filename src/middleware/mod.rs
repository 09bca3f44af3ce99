//! HTTP middleware

pub mod identity;
pub mod logging;

pub use identity::{identity_middleware, AuthenticatedUser, Identity, SessionResolver};
pub use logging::logging_middleware;
