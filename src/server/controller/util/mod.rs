//! Utility functions for controller request handling.
//!
//! Provides the resolution of the per-request [`Caller`](crate::server::model::caller::Caller)
//! from the session for protected endpoints.

pub mod get_caller;
