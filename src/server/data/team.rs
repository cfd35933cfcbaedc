use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, ConnectionTrait, DbErr, EntityTrait};

use crate::server::model::db::TeamModel;

pub struct TeamRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> TeamRepository<'a, C> {
    /// Creates a new instance of [`TeamRepository`]
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Creates a new team
    pub async fn create(&self, name: String) -> Result<TeamModel, DbErr> {
        let team = entity::team::ActiveModel {
            name: ActiveValue::Set(name),
            created_at: ActiveValue::Set(Utc::now().naive_utc()),
            ..Default::default()
        };

        team.insert(self.db).await
    }

    pub async fn find_by_id(&self, team_id: i32) -> Result<Option<TeamModel>, DbErr> {
        entity::prelude::Team::find_by_id(team_id).one(self.db).await
    }
}
