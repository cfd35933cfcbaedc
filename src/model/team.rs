use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct TeamDto {
    pub id: i32,
    pub name: String,
    pub created_at: NaiveDateTime,
}

#[derive(Clone, Debug, Serialize, Deserialize, ToSchema)]
pub struct CreateTeamDto {
    pub name: String,
}

/// Invite an existing user into the caller's team
#[derive(Clone, Debug, Serialize, Deserialize, ToSchema)]
pub struct AddTeamMemberDto {
    /// Email address of the user to add
    pub email: String,
}
