mod audit;
mod item;
mod project;
mod team;
mod user;

use chrono::{Duration, NaiveDate, NaiveDateTime};
use entity::sea_orm_active_enums::{AuditStatus, FindingSeverity, FrequencyUnit};
use vigil_test_utils::prelude::*;

/// Fixed reference timestamp for fixtures that need deterministic ordering
fn day(offset: i64) -> NaiveDateTime {
    NaiveDate::from_ymd_opt(2024, 3, 1)
        .unwrap()
        .and_hms_opt(9, 0, 0)
        .unwrap()
        + Duration::days(offset)
}
