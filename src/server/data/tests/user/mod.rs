mod set_team;
mod update_profile;

use super::*;

use crate::server::data::user::{UserProfileUpdate, UserRepository};
