//! Database model type aliases.
//!
//! Convenient aliases for the SeaORM models of the `entity` crate used throughout the server.

/// A Vigil user, member of at most one team.
pub type UserModel = entity::user::Model;

/// A team, the tenancy boundary for all projects, items, audits and findings.
pub type TeamModel = entity::team::Model;

/// A named container of auditable items owned by a team.
pub type ProjectModel = entity::project::Model;

/// An auditable unit with an optional audit frequency.
///
/// # Fields (from `entity::item::Model`)
/// - `id` - Primary key
/// - `project_id` - Foreign key to the owning project
/// - `name` - Item name
/// - `description` - Optional free text description
/// - `frequency_value` / `frequency_unit` - Stored audit frequency, see `util::schedule::Schedule`
/// - `created_at` - Timestamp when the item was created
pub type ItemModel = entity::item::Model;

/// A recorded inspection of an item with a pass/fail status.
pub type AuditModel = entity::audit::Model;

/// An issue recorded against an audit with a severity.
pub type FindingModel = entity::finding::Model;
