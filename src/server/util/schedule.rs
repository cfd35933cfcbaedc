//! Audit schedules and due date estimation.
//!
//! An item is audited on a fixed calendar frequency such as "every 7 days" or "every
//! 3 months". The next audit is due one frequency interval after the most recent audit;
//! items without a schedule or without any audit yet have no due date.

use std::num::NonZeroU32;

use chrono::{Days, Months, NaiveDateTime};
use entity::sea_orm_active_enums as db_enums;

use crate::{
    model::item::{DueDateDto, FrequencyDto, FrequencyUnit},
    server::{error::validation::ValidationError, util::time::relative_to},
};

/// Label used when no due date can be estimated
pub const NO_DUE_DATE: &str = "No due date";

/// How often an item must be audited
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Schedule {
    /// The item is audited ad hoc and never becomes due
    #[default]
    NoSchedule,
    /// The item is due `value` calendar `unit`s after its most recent audit
    Every { value: NonZeroU32, unit: FrequencyUnit },
}

impl Schedule {
    /// Builds a schedule from the `frequency_value` & `frequency_unit` columns of an item
    ///
    /// Missing, zero or negative values yield [`Schedule::NoSchedule`], rows are never
    /// rejected on read.
    pub fn from_columns(value: Option<i32>, unit: Option<db_enums::FrequencyUnit>) -> Self {
        let (Some(value), Some(unit)) = (value, unit) else {
            return Self::NoSchedule;
        };

        match u32::try_from(value).ok().and_then(NonZeroU32::new) {
            Some(value) => Self::Every {
                value,
                unit: unit.into(),
            },
            None => Self::NoSchedule,
        }
    }

    /// Validates a frequency submitted by a client
    ///
    /// An absent frequency or a value of 0 means no schedule.
    ///
    /// # Returns
    /// - `Ok(Schedule)`: The validated schedule
    /// - `Err(ValidationError::NegativeFrequency)`: The frequency value is below zero
    pub fn from_frequency(frequency: Option<&FrequencyDto>) -> Result<Self, ValidationError> {
        let Some(frequency) = frequency else {
            return Ok(Self::NoSchedule);
        };

        let value = u32::try_from(frequency.value)
            .map_err(|_| ValidationError::NegativeFrequency(frequency.value))?;

        Ok(match NonZeroU32::new(value) {
            Some(value) => Self::Every {
                value,
                unit: frequency.unit,
            },
            None => Self::NoSchedule,
        })
    }

    /// Converts the schedule into its API representation, `None` without a schedule
    pub fn to_frequency(&self) -> Option<FrequencyDto> {
        match *self {
            Self::NoSchedule => None,
            Self::Every { value, unit } => Some(FrequencyDto {
                value: i32::try_from(value.get()).unwrap_or(i32::MAX),
                unit,
            }),
        }
    }

    /// Converts the schedule into `(frequency_value, frequency_unit)` column values
    pub fn to_columns(&self) -> (Option<i32>, Option<db_enums::FrequencyUnit>) {
        match self.to_frequency() {
            Some(frequency) => (Some(frequency.value), Some(frequency.unit.into())),
            None => (None, None),
        }
    }

    /// Returns when the next audit is due given the most recent audit
    ///
    /// Month & year intervals are calendar aware, a day of month that does not exist in
    /// the target month is clamped to its last day (Jan 31 + 1 month = Feb 28/29).
    /// Returns `None` without a schedule, without a prior audit or when the due date
    /// would fall outside the representable range.
    pub fn next_due(&self, last_audit_at: Option<NaiveDateTime>) -> Option<NaiveDateTime> {
        let Self::Every { value, unit } = *self else {
            return None;
        };
        let last_audit_at = last_audit_at?;

        match unit {
            FrequencyUnit::Day => last_audit_at.checked_add_days(Days::new(u64::from(value.get()))),
            FrequencyUnit::Week => {
                last_audit_at.checked_add_days(Days::new(u64::from(value.get()) * 7))
            }
            FrequencyUnit::Month => last_audit_at.checked_add_months(Months::new(value.get())),
            FrequencyUnit::Year => {
                last_audit_at.checked_add_months(Months::new(value.get().checked_mul(12)?))
            }
        }
    }
}

/// Estimates when an item is next due for audit and renders a label for it
///
/// # Arguments
/// - `schedule`: The item's audit schedule
/// - `last_audit_at`: Creation time of the item's most recent audit, if any
/// - `now`: Reference time the label is rendered against
///
/// # Returns
/// A [`DueDateDto`] labelled "Due in 2 days", "Due 3 days ago" or "No due date"
pub fn estimate_due_date(
    schedule: &Schedule,
    last_audit_at: Option<NaiveDateTime>,
    now: NaiveDateTime,
) -> DueDateDto {
    match schedule.next_due(last_audit_at) {
        Some(due_at) => DueDateDto {
            due_at: Some(due_at),
            label: format!("Due {}", relative_to(due_at, now)),
        },
        None => DueDateDto {
            due_at: None,
            label: NO_DUE_DATE.to_string(),
        },
    }
}
