use chrono::{NaiveDateTime, Utc};
use entity::sea_orm_active_enums::{AuditStatus, FindingSeverity};
use sea_orm::{ActiveModelTrait, ActiveValue};

use crate::{
    error::TestError,
    model::{AuditModel, FindingModel},
    TestContext,
};

impl TestContext {
    pub fn audit<'a>(&'a self) -> AuditFixtures<'a> {
        AuditFixtures { context: self }
    }
}

pub struct AuditFixtures<'a> {
    context: &'a TestContext,
}

impl<'a> AuditFixtures<'a> {
    /// Insert an audit performed at `created_at`
    pub async fn insert_audit(
        &self,
        item_id: i32,
        user_id: i32,
        status: AuditStatus,
        created_at: NaiveDateTime,
    ) -> Result<AuditModel, TestError> {
        let audit = entity::audit::ActiveModel {
            item_id: ActiveValue::Set(item_id),
            user_id: ActiveValue::Set(user_id),
            status: ActiveValue::Set(status),
            notes: ActiveValue::Set(None),
            created_at: ActiveValue::Set(created_at),
            ..Default::default()
        };

        Ok(audit.insert(&self.context.db).await?)
    }

    /// Insert a finding with placeholder notes
    pub async fn insert_finding(
        &self,
        audit_id: i32,
        severity: FindingSeverity,
    ) -> Result<FindingModel, TestError> {
        let finding = entity::finding::ActiveModel {
            audit_id: ActiveValue::Set(audit_id),
            severity: ActiveValue::Set(severity),
            notes: ActiveValue::Set("Test finding".to_string()),
            created_at: ActiveValue::Set(Utc::now().naive_utc()),
            ..Default::default()
        };

        Ok(finding.insert(&self.context.db).await?)
    }
}
