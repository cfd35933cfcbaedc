//! Server application core modules.
//!
//! This module contains all server-side functionality for the Vigil application: HTTP
//! routing, session handling, team-scoped database access and the audit scheduling model
//! (due dates and audit statistics).

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod config;
pub mod controller;
pub mod data;
pub mod error;
pub mod model;
pub mod router;
pub mod service;
pub mod startup;
pub mod util;
