mod create_team;
mod get_team_members;

use super::*;
