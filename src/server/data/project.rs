use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, EntityTrait, QueryFilter,
    QueryOrder,
};

use crate::server::model::db::ProjectModel;

pub struct ProjectRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> ProjectRepository<'a, C> {
    /// Creates a new instance of [`ProjectRepository`]
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    pub async fn create(&self, team_id: i32, name: String) -> Result<ProjectModel, DbErr> {
        let project = entity::project::ActiveModel {
            team_id: ActiveValue::Set(team_id),
            name: ActiveValue::Set(name),
            created_at: ActiveValue::Set(Utc::now().naive_utc()),
            ..Default::default()
        };

        project.insert(self.db).await
    }

    pub async fn find_by_id(&self, project_id: i32) -> Result<Option<ProjectModel>, DbErr> {
        entity::prelude::Project::find_by_id(project_id)
            .one(self.db)
            .await
    }

    /// Gets all projects owned by a team, oldest first
    pub async fn get_by_team(&self, team_id: i32) -> Result<Vec<ProjectModel>, DbErr> {
        entity::prelude::Project::find()
            .filter(entity::project::Column::TeamId.eq(team_id))
            .order_by_asc(entity::project::Column::CreatedAt)
            .order_by_asc(entity::project::Column::Id)
            .all(self.db)
            .await
    }
}
