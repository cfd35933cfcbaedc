//! Utility functions and helpers for server operations.
//!
//! This module holds the audit scheduling model: item frequencies and due dates
//! (`schedule`), human readable relative times (`time`) and audit history statistics
//! (`stats`), along with input normalization shared by the services (`validate`).

pub mod schedule;
pub mod stats;
pub mod time;
pub mod validate;
