#![doc = include_str!("../README.md")]

mod auth_client;

pub(crate) mod api; // keep internal to crate

pub mod identity;
pub mod reset;
pub mod submit;

pub use auth_client::{AuthClient, AuthClientExt};
