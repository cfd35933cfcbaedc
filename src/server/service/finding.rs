use sea_orm::DatabaseConnection;

use crate::{
    model::audit::{CreateFindingDto, FindingDto},
    server::{
        data::finding::FindingRepository, error::Error, model::caller::Caller,
        service::access::AccessGate,
    },
};

/// Service for findings recorded against the caller's audits.
pub struct FindingService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> FindingService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Records a finding against an audit of the caller's team
    ///
    /// # Returns
    /// - `Ok(FindingDto)`: The recorded finding
    /// - `Err(AccessError::AuditNotFound)`: Audit does not exist or belongs to another team
    /// - `Err(Error::DbErr)`: Database operation failed
    pub async fn create_finding(
        &self,
        caller: &Caller,
        payload: CreateFindingDto,
    ) -> Result<FindingDto, Error> {
        let audit = AccessGate::new(self.db, caller)
            .audit(payload.audit_id)
            .await?;

        let finding = FindingRepository::new(self.db)
            .create(audit.id, payload.severity.into(), payload.notes)
            .await?;

        Ok(finding.into())
    }
}
