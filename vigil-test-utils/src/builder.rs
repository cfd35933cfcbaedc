//! Declarative test builder.
//!
//! The builder queues the tables a test needs and creates them against a fresh in-memory
//! database during `build()`.

use sea_orm::{sea_query::TableCreateStatement, EntityTrait, Schema};

use crate::{error::TestError, TestContext};

/// Builder for declarative test initialization.
///
/// # Example
///
/// ```no_run
/// use vigil_test_utils::TestBuilder;
///
/// # async fn example() -> Result<(), vigil_test_utils::TestError> {
/// let test = TestBuilder::new().with_vigil_tables().build().await?;
/// let team = test.team().insert_team("Acme").await?;
/// # Ok(())
/// # }
/// ```
#[derive(Default)]
pub struct TestBuilder {
    tables: Vec<TableCreateStatement>,
    include_vigil_tables: bool,
}

impl TestBuilder {
    /// Create a new TestBuilder without any tables configured.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add every Vigil table to the test database.
    ///
    /// Tables are created in foreign key order: team, user, project, item, audit, finding.
    pub fn with_vigil_tables(mut self) -> Self {
        self.include_vigil_tables = true;
        self
    }

    /// Add a single entity table to the test database.
    ///
    /// Chain multiple calls to add multiple tables, parents before children.
    pub fn with_table<E: EntityTrait>(mut self, entity: E) -> Self {
        let schema = Schema::new(sea_orm::DbBackend::Sqlite);
        self.tables.push(schema.create_table_from_entity(entity));
        self
    }

    /// Build the test context and create all configured tables.
    ///
    /// # Returns
    /// - `Ok(TestContext)` - Test environment ready for use
    /// - `Err(TestError::DbErr)` - Connecting or creating tables failed
    pub async fn build(self) -> Result<TestContext, TestError> {
        let context = TestContext::new().await?;

        let mut all_tables = Vec::new();

        if self.include_vigil_tables {
            let schema = Schema::new(sea_orm::DbBackend::Sqlite);
            all_tables.extend(vec![
                schema.create_table_from_entity(entity::prelude::Team),
                schema.create_table_from_entity(entity::prelude::User),
                schema.create_table_from_entity(entity::prelude::Project),
                schema.create_table_from_entity(entity::prelude::Item),
                schema.create_table_from_entity(entity::prelude::Audit),
                schema.create_table_from_entity(entity::prelude::Finding),
            ]);
        }

        all_tables.extend(self.tables);
        context.with_tables(all_tables).await?;

        Ok(context)
    }
}
