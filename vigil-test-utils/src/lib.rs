//! Test utilities for the Vigil workspace.
//!
//! Tests are written in two phases:
//! 1. Declare the environment with [`TestBuilder`] (tables to create)
//! 2. Run the test against the resulting [`TestContext`], inserting fixtures with
//!    `test.team()`, `test.user()`, `test.project()`, `test.item()` & `test.audit()`

pub mod builder;
pub mod context;
pub mod error;
pub mod fixtures;
pub mod model;

pub use builder::TestBuilder;
pub use context::TestContext;
pub use error::TestError;

pub mod prelude {
    pub use crate::{TestBuilder, TestContext, TestError};
}
