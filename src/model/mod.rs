//! API data transfer objects.
//!
//! These types describe the JSON request and response bodies of the HTTP API. They carry no
//! database or session concerns; conversions from database models live in
//! `server::model::dto`.

pub mod api;
pub mod audit;
pub mod item;
pub mod project;
pub mod team;
pub mod user;
