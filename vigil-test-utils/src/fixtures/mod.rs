//! Database fixtures inserted during test execution.
//!
//! Each fixture group is reached through an accessor on [`TestContext`](crate::TestContext):
//!
//! - `team` - Teams
//! - `user` - Users, optionally members of a team
//! - `project` - Projects owned by a team
//! - `item` - Items of a project with an optional frequency
//! - `audit` - Audits of an item and the findings recorded against them

pub mod audit;
pub mod item;
pub mod project;
pub mod team;
pub mod user;
