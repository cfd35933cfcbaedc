//! Server application models and type definitions.
//!
//! This module contains data models for the server application, including application state,
//! the per-request caller context, database model type aliases, DTO conversions and session
//! data structures.

pub mod app;
pub mod caller;
pub mod db;
pub mod dto;
pub mod session;
