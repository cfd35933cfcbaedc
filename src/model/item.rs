use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::model::audit::AuditDetailDto;

/// Calendar unit of an item's audit frequency
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum FrequencyUnit {
    Day,
    Week,
    Month,
    Year,
}

/// How often an item should be audited, e.g. every 7 days
///
/// A `value` of 0 means the item has no schedule.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct FrequencyDto {
    pub value: i32,
    pub unit: FrequencyUnit,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct ItemDto {
    pub id: i32,
    pub project_id: i32,
    pub name: String,
    pub description: Option<String>,
    pub frequency: Option<FrequencyDto>,
    pub created_at: NaiveDateTime,
}

/// When the next audit of an item is due
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct DueDateDto {
    /// Most recent audit plus the item's frequency, `None` without a schedule or prior audit
    pub due_at: Option<NaiveDateTime>,
    /// Human readable label such as "Due in 2 days" or "No due date"
    pub label: String,
}

/// Summary of an item's audit history
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct AuditStatsDto {
    /// Percentage of audits that passed, rounded to the nearest integer
    pub pass_rate: u32,
    pub audits_performed: u64,
    pub findings: u64,
    pub failures: u64,
}

/// An item together with its audits (newest first), due date and statistics
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct ItemDetailDto {
    pub id: i32,
    pub project_id: i32,
    pub name: String,
    pub description: Option<String>,
    pub frequency: Option<FrequencyDto>,
    pub created_at: NaiveDateTime,
    pub due: DueDateDto,
    pub stats: AuditStatsDto,
    pub audits: Vec<AuditDetailDto>,
}

#[derive(Clone, Debug, Serialize, Deserialize, ToSchema)]
pub struct CreateItemDto {
    pub project_id: i32,
    pub name: String,
    pub description: Option<String>,
    pub frequency: Option<FrequencyDto>,
}

/// Changes to an item, absent fields are left untouched
///
/// A frequency with a value of 0 removes the item's schedule.
#[derive(Clone, Debug, Default, Serialize, Deserialize, ToSchema)]
pub struct UpdateItemDto {
    /// Move the item to another project of the same team
    pub project_id: Option<i32>,
    pub name: Option<String>,
    pub description: Option<String>,
    pub frequency: Option<FrequencyDto>,
}
