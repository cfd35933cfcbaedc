//! Service layer.
//!
//! Services implement the operations of the API on top of the data repositories. Every
//! operation receives an explicit [`Caller`](crate::server::model::caller::Caller) and scopes
//! its reads & writes to the caller's team through the [`access`] gate before any entity is
//! returned or mutated.

pub mod access;
pub mod audit;
pub mod finding;
pub mod item;
pub mod project;
pub mod team;
pub mod user;

#[cfg(test)]
mod tests;
