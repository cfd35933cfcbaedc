use chrono::NaiveDateTime;
use entity::sea_orm_active_enums::AuditStatus;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, DeleteResult,
    EntityTrait, QueryFilter, QueryOrder,
};

use crate::server::model::db::{AuditModel, UserModel};

pub struct AuditRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> AuditRepository<'a, C> {
    /// Creates a new instance of [`AuditRepository`]
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Records an audit of an item
    ///
    /// # Arguments
    /// - `item_id`: ID of the audited item
    /// - `user_id`: ID of the user who performed the audit
    /// - `status`: Outcome of the audit
    /// - `notes`: Optional free text notes
    /// - `created_at`: When the audit took place
    pub async fn create(
        &self,
        item_id: i32,
        user_id: i32,
        status: AuditStatus,
        notes: Option<String>,
        created_at: NaiveDateTime,
    ) -> Result<AuditModel, DbErr> {
        let audit = entity::audit::ActiveModel {
            item_id: ActiveValue::Set(item_id),
            user_id: ActiveValue::Set(user_id),
            status: ActiveValue::Set(status),
            notes: ActiveValue::Set(notes),
            created_at: ActiveValue::Set(created_at),
            ..Default::default()
        };

        audit.insert(self.db).await
    }

    pub async fn find_by_id(&self, audit_id: i32) -> Result<Option<AuditModel>, DbErr> {
        entity::prelude::Audit::find_by_id(audit_id)
            .one(self.db)
            .await
    }

    /// Gets audits of the provided items with the user who performed them, newest first
    pub async fn get_by_item_ids(
        &self,
        item_ids: &[i32],
    ) -> Result<Vec<(AuditModel, Option<UserModel>)>, DbErr> {
        if item_ids.is_empty() {
            return Ok(Vec::new());
        }

        entity::prelude::Audit::find()
            .filter(entity::audit::Column::ItemId.is_in(item_ids.iter().copied()))
            .order_by_desc(entity::audit::Column::CreatedAt)
            .order_by_desc(entity::audit::Column::Id)
            .find_also_related(entity::user::Entity)
            .all(self.db)
            .await
    }

    /// Deletes an audit, its findings are removed by cascade
    ///
    /// Returns OK regardless of audit existing, to confirm the deletion result
    /// check the [`DeleteResult::rows_affected`] field.
    pub async fn delete(&self, audit_id: i32) -> Result<DeleteResult, DbErr> {
        entity::prelude::Audit::delete_by_id(audit_id)
            .exec(self.db)
            .await
    }
}
