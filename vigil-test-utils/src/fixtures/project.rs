use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue};

use crate::{error::TestError, model::ProjectModel, TestContext};

impl TestContext {
    pub fn project<'a>(&'a self) -> ProjectFixtures<'a> {
        ProjectFixtures { context: self }
    }
}

pub struct ProjectFixtures<'a> {
    context: &'a TestContext,
}

impl<'a> ProjectFixtures<'a> {
    pub async fn insert_project(
        &self,
        team_id: i32,
        name: &str,
    ) -> Result<ProjectModel, TestError> {
        let project = entity::project::ActiveModel {
            team_id: ActiveValue::Set(team_id),
            name: ActiveValue::Set(name.to_string()),
            created_at: ActiveValue::Set(Utc::now().naive_utc()),
            ..Default::default()
        };

        Ok(project.insert(&self.context.db).await?)
    }
}
