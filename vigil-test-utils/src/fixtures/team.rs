use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue};

use crate::{error::TestError, model::TeamModel, TestContext};

impl TestContext {
    pub fn team<'a>(&'a self) -> TeamFixtures<'a> {
        TeamFixtures { context: self }
    }
}

pub struct TeamFixtures<'a> {
    context: &'a TestContext,
}

impl<'a> TeamFixtures<'a> {
    pub async fn insert_team(&self, name: &str) -> Result<TeamModel, TestError> {
        let team = entity::team::ActiveModel {
            name: ActiveValue::Set(name.to_string()),
            created_at: ActiveValue::Set(Utc::now().naive_utc()),
            ..Default::default()
        };

        Ok(team.insert(&self.context.db).await?)
    }
}
