mod create;
mod get_by_team;

use super::*;

use crate::server::data::project::ProjectRepository;
