//! Networking modules for the comparison endpoint.
//!
//! SYSTEM CONTEXT
//! ==============
//! `api` handles REST calls and `types` defines the shared wire schema that
//! the server also serializes.

pub mod api;
pub mod types;
