//! Tests for the current user endpoints, including the session checks shared by all
//! authenticated endpoints.


use super::*;
