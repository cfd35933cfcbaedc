//! HTTP controller endpoints for the Vigil web API.
//!
//! This module contains Axum handlers for teams, projects, items, audits, findings and the
//! current user. Controllers resolve the caller from the session, delegate to the services
//! and return JSON responses. They integrate with tower-sessions for session management and
//! use utoipa for OpenAPI documentation.

pub mod audit;
pub mod auth;
pub mod finding;
pub mod item;
pub mod project;
pub mod team;
pub mod user;
pub mod util;
