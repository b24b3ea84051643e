//! Client for the Art Institute of Chicago public API.
//!
//! This module contains the HTTP client, the response types, and the API
//! error hierarchy.

pub mod client;
pub mod error;
pub mod types;

pub use client::{ArticClient, DEFAULT_BASE_URL};
pub use error::ApiError;
