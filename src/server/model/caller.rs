//! Explicit per-request caller context.
//!
//! Every service operation receives the [`Caller`] it runs on behalf of. The caller is resolved
//! once per request from the session and the user's database record, so services never read
//! ambient session state themselves.

use crate::server::{error::access::AccessError, model::db::UserModel};

/// The authenticated user an operation runs on behalf of, with their team membership
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Caller {
    /// ID of the authenticated user
    pub user_id: i32,
    /// Team the user belongs to, users belong to at most one team
    pub team_id: Option<i32>,
}

impl Caller {
    /// Creates a caller context for the provided user and team membership
    pub fn new(user_id: i32, team_id: Option<i32>) -> Self {
        Self { user_id, team_id }
    }

    /// Returns the caller's team ID
    ///
    /// # Returns
    /// - `Ok(i32)` - ID of the team the caller belongs to
    /// - `Err(AccessError::NotInTeam)` - The caller does not belong to any team
    pub fn require_team(&self) -> Result<i32, AccessError> {
        self.team_id.ok_or(AccessError::NotInTeam)
    }
}

impl From<&UserModel> for Caller {
    fn from(user: &UserModel) -> Self {
        Self::new(user.id, user.team_id)
    }
}
