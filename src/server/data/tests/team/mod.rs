mod create;
mod find_by_id;

use super::*;

use crate::server::data::team::TeamRepository;
