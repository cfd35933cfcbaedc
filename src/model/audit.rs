use chrono::{DateTime, NaiveDateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::model::{item::ItemDto, user::UserDto};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum AuditStatus {
    Pass,
    Fail,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum FindingSeverity {
    Info,
    Low,
    Medium,
    High,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct FindingDto {
    pub id: i32,
    pub audit_id: i32,
    pub severity: FindingSeverity,
    pub notes: String,
    pub created_at: NaiveDateTime,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct AuditDto {
    pub id: i32,
    pub item_id: i32,
    pub user_id: i32,
    pub status: AuditStatus,
    pub notes: Option<String>,
    pub created_at: NaiveDateTime,
}

/// An audit as listed under its item: who performed it and what was found
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct AuditDetailDto {
    pub id: i32,
    pub item_id: i32,
    pub status: AuditStatus,
    pub notes: Option<String>,
    pub created_at: NaiveDateTime,
    pub user: UserDto,
    pub findings: Vec<FindingDto>,
}

/// An entry of the audit activity feed
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct AuditFeedDto {
    pub id: i32,
    pub status: AuditStatus,
    pub notes: Option<String>,
    pub created_at: NaiveDateTime,
    pub user: UserDto,
    pub item: ItemDto,
    pub findings: Vec<FindingDto>,
}

#[derive(Clone, Debug, Serialize, Deserialize, ToSchema)]
pub struct CreateAuditDto {
    pub item_id: i32,
    pub status: AuditStatus,
    /// When the audit took place, defaults to now
    pub date: Option<DateTime<Utc>>,
    pub notes: Option<String>,
    /// Team member who performed the audit, defaults to the current user
    pub user_id: Option<i32>,
}

#[derive(Clone, Debug, Serialize, Deserialize, ToSchema)]
pub struct CreateFindingDto {
    pub audit_id: i32,
    pub severity: FindingSeverity,
    pub notes: String,
}
