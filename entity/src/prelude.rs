pub use super::audit::Entity as Audit;
pub use super::finding::Entity as Finding;
pub use super::item::Entity as Item;
pub use super::project::Entity as Project;
pub use super::team::Entity as Team;
pub use super::user::Entity as User;
