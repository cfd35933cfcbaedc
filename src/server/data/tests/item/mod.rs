mod create;
mod delete;
mod get_by_team;
mod update;

use std::num::NonZeroU32;

use sea_orm::EntityTrait;

use super::*;

use crate::{
    model::item::FrequencyUnit as ScheduleUnit,
    server::{
        data::item::{ItemRepository, ItemUpdate},
        util::schedule::Schedule,
    },
};

fn every(value: u32, unit: ScheduleUnit) -> Schedule {
    Schedule::Every {
        value: NonZeroU32::new(value).unwrap(),
        unit,
    }
}
