//! Database model type aliases for test utilities.
//!
//! These aliases match those in the main vigil crate to keep fixtures and tests consistent.

pub type TeamModel = entity::team::Model;
pub type UserModel = entity::user::Model;
pub type ProjectModel = entity::project::Model;
pub type ItemModel = entity::item::Model;
pub type AuditModel = entity::audit::Model;
pub type FindingModel = entity::finding::Model;
