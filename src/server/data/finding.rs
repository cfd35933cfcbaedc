use chrono::Utc;
use entity::sea_orm_active_enums::FindingSeverity;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, EntityTrait, QueryFilter,
    QueryOrder,
};

use crate::server::model::db::FindingModel;

pub struct FindingRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> FindingRepository<'a, C> {
    /// Creates a new instance of [`FindingRepository`]
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    pub async fn create(
        &self,
        audit_id: i32,
        severity: FindingSeverity,
        notes: String,
    ) -> Result<FindingModel, DbErr> {
        let finding = entity::finding::ActiveModel {
            audit_id: ActiveValue::Set(audit_id),
            severity: ActiveValue::Set(severity),
            notes: ActiveValue::Set(notes),
            created_at: ActiveValue::Set(Utc::now().naive_utc()),
            ..Default::default()
        };

        finding.insert(self.db).await
    }

    /// Gets findings of the provided audits, oldest first
    pub async fn get_by_audit_ids(&self, audit_ids: &[i32]) -> Result<Vec<FindingModel>, DbErr> {
        if audit_ids.is_empty() {
            return Ok(Vec::new());
        }

        entity::prelude::Finding::find()
            .filter(entity::finding::Column::AuditId.is_in(audit_ids.iter().copied()))
            .order_by_asc(entity::finding::Column::CreatedAt)
            .order_by_asc(entity::finding::Column::Id)
            .all(self.db)
            .await
    }
}
