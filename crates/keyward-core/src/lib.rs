#![doc = include_str!("../README.md")]

pub mod client;
mod error;
pub mod navigator;

pub use client::{Client, ClientSettings};
pub use error::ApiError;
pub use navigator::{Navigator, Route};
