use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, DeleteResult,
    EntityTrait, IntoActiveModel, QueryFilter, QueryOrder,
};

use crate::server::{
    model::db::{ItemModel, ProjectModel},
    util::schedule::Schedule,
};

/// Fields of an item to change, `None` leaves the field untouched
#[derive(Debug, Default)]
pub struct ItemUpdate {
    pub project_id: Option<i32>,
    pub name: Option<String>,
    pub description: Option<String>,
    pub schedule: Option<Schedule>,
}

pub struct ItemRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> ItemRepository<'a, C> {
    /// Creates a new instance of [`ItemRepository`]
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Creates a new item within a project
    ///
    /// # Arguments
    /// - `project_id`: ID of the project the item belongs to
    /// - `name`: Name of the item
    /// - `description`: Optional free text description
    /// - `schedule`: Audit schedule stored as `frequency_value` & `frequency_unit`
    pub async fn create(
        &self,
        project_id: i32,
        name: String,
        description: Option<String>,
        schedule: &Schedule,
    ) -> Result<ItemModel, DbErr> {
        let (frequency_value, frequency_unit) = schedule.to_columns();

        let item = entity::item::ActiveModel {
            project_id: ActiveValue::Set(project_id),
            name: ActiveValue::Set(name),
            description: ActiveValue::Set(description),
            frequency_value: ActiveValue::Set(frequency_value),
            frequency_unit: ActiveValue::Set(frequency_unit),
            created_at: ActiveValue::Set(Utc::now().naive_utc()),
            ..Default::default()
        };

        item.insert(self.db).await
    }

    /// Gets an item together with the project that owns it
    pub async fn find_with_project(
        &self,
        item_id: i32,
    ) -> Result<Option<(ItemModel, Option<ProjectModel>)>, DbErr> {
        entity::prelude::Item::find_by_id(item_id)
            .find_also_related(entity::project::Entity)
            .one(self.db)
            .await
    }

    /// Gets items of all projects owned by a team together with their project, oldest first
    ///
    /// # Arguments
    /// - `team_id`: ID of the team owning the items' projects
    /// - `project_id`: Restrict results to a single project
    pub async fn get_by_team(
        &self,
        team_id: i32,
        project_id: Option<i32>,
    ) -> Result<Vec<(ItemModel, Option<ProjectModel>)>, DbErr> {
        let mut query = entity::prelude::Item::find()
            .find_also_related(entity::project::Entity)
            .filter(entity::project::Column::TeamId.eq(team_id));

        if let Some(project_id) = project_id {
            query = query.filter(entity::item::Column::ProjectId.eq(project_id));
        }

        query
            .order_by_asc(entity::item::Column::CreatedAt)
            .order_by_asc(entity::item::Column::Id)
            .all(self.db)
            .await
    }

    /// Updates the provided fields of an item
    ///
    /// # Returns
    /// - `Ok(Some(ItemModel))`: The updated item
    /// - `Ok(None)`: No item exists with the provided ID
    /// - `Err(DbErr)`: A database-related error occurred
    pub async fn update(
        &self,
        item_id: i32,
        changes: ItemUpdate,
    ) -> Result<Option<ItemModel>, DbErr> {
        let item = match entity::prelude::Item::find_by_id(item_id).one(self.db).await? {
            Some(item) => item,
            None => return Ok(None),
        };

        let mut item_am = item.into_active_model();
        if let Some(project_id) = changes.project_id {
            item_am.project_id = ActiveValue::Set(project_id);
        }
        if let Some(name) = changes.name {
            item_am.name = ActiveValue::Set(name);
        }
        if let Some(description) = changes.description {
            item_am.description = ActiveValue::Set(Some(description));
        }
        if let Some(schedule) = changes.schedule {
            let (frequency_value, frequency_unit) = schedule.to_columns();
            item_am.frequency_value = ActiveValue::Set(frequency_value);
            item_am.frequency_unit = ActiveValue::Set(frequency_unit);
        }

        let item = item_am.update(self.db).await?;

        Ok(Some(item))
    }

    /// Deletes an item, its audits & their findings are removed by cascade
    ///
    /// Returns OK regardless of item existing, to confirm the deletion result
    /// check the [`DeleteResult::rows_affected`] field.
    pub async fn delete(&self, item_id: i32) -> Result<DeleteResult, DbErr> {
        entity::prelude::Item::delete_by_id(item_id)
            .exec(self.db)
            .await
    }
}
