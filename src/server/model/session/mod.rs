//! Session data models and utilities.
//!
//! This module provides type-safe wrappers for session data storage and retrieval using
//! tower-sessions. The session is populated by the authentication provider, Vigil only reads
//! the user ID from it and clears it on logout.

pub mod user;
