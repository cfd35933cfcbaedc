//! Data access layer repositories.
//!
//! This module contains all database repository implementations for the application.
//! Repositories are generic over [`sea_orm::ConnectionTrait`] and return [`sea_orm::DbErr`];
//! they perform no team scoping themselves, access control is applied by the service layer.

pub mod audit;
pub mod finding;
pub mod item;
pub mod project;
pub mod team;
pub mod user;

#[cfg(test)]
mod tests;
