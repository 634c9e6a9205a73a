//! # Middleware Modules
//!
//! Tower middleware layers for the API service. Bearer-token
//! authentication lives in [`crate::auth`].

pub mod metrics;
