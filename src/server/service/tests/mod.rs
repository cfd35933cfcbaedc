
use chrono::{Duration, NaiveDate, NaiveDateTime};
use entity::sea_orm_active_enums::{AuditStatus, FindingSeverity, FrequencyUnit};
use vigil_test_utils::prelude::*;

use crate::server::{
    error::{access::AccessError, Error},
    model::caller::Caller,
};

/// Fixed reference timestamp for fixtures that need deterministic ordering & due dates
fn day(offset: i64) -> NaiveDateTime {
    NaiveDate::from_ymd_opt(2024, 3, 1)
        .unwrap()
        .and_hms_opt(9, 0, 0)
        .unwrap()
        + Duration::days(offset)
}

impl From<Error> for TestError {
    fn from(err: Error) -> Self {
        TestError::AppError(Box::new(err))
    }
}

/// Expect service errors to propagate into the test error with `?`
#[test]
fn converts_service_error_into_test_error() {
    let err = TestError::from(Error::from(AccessError::NotInTeam));

    assert!(matches!(err, TestError::AppError(_)));
    assert_eq!(err.to_string(), "User is not in a team");
}
