//! SeaORM entities for the Vigil database schema.

pub mod prelude;

pub mod audit;
pub mod finding;
pub mod item;
pub mod project;
pub mod sea_orm_active_enums;
pub mod team;
pub mod user;
