//! Identity service client.
//!
//! [`IdentityClient`] issues sign-in and reset-password calls against the
//! Keyward identity service. [`IdentityService`] is the seam the submission
//! controller depends on; tests and alternative transports implement it.

mod client;
mod models;
mod service;

pub use client::IdentityClient;
pub use models::{SessionData, SessionUser};
pub use service::IdentityService;
