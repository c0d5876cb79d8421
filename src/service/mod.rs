//! HTTP boundary around the decision core.
//!
//! Parses and validates inbound JSON, hands typed requests to the
//! [`crate::oracle::Oracle`], and serializes what comes back. Validation
//! failures are the only errors a client can observe.
mod handlers;
mod rejection;
mod server;

pub use handlers::*;
pub use rejection::*;
pub use server::*;
