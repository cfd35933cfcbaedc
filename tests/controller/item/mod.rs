mod get_item;
mod update_item;

use super::*;
