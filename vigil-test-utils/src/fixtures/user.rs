use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue};

use crate::{
    error::TestError,
    model::{TeamModel, UserModel},
    TestContext,
};

impl TestContext {
    pub fn user<'a>(&'a self) -> UserFixtures<'a> {
        UserFixtures { context: self }
    }
}

pub struct UserFixtures<'a> {
    context: &'a TestContext,
}

impl<'a> UserFixtures<'a> {
    /// Insert a user named `name` with the email `<name>@example.com` (lowercased)
    pub async fn insert_user(
        &self,
        name: &str,
        team_id: Option<i32>,
    ) -> Result<UserModel, TestError> {
        let user = entity::user::ActiveModel {
            team_id: ActiveValue::Set(team_id),
            name: ActiveValue::Set(name.to_string()),
            email: ActiveValue::Set(format!("{}@example.com", name.to_lowercase())),
            image: ActiveValue::Set(None),
            created_at: ActiveValue::Set(Utc::now().naive_utc()),
            ..Default::default()
        };

        Ok(user.insert(&self.context.db).await?)
    }

    /// Insert a team together with a user who is a member of it
    pub async fn insert_user_with_team(
        &self,
        user_name: &str,
        team_name: &str,
    ) -> Result<(UserModel, TeamModel), TestError> {
        let team = self.context.team().insert_team(team_name).await?;
        let user = self.insert_user(user_name, Some(team.id)).await?;

        Ok((user, team))
    }
}
