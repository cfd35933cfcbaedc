use std::collections::HashMap;

use chrono::NaiveDateTime;
use sea_orm::DatabaseConnection;

use crate::{
    model::{
        audit::{AuditDetailDto, AuditDto, AuditFeedDto, CreateAuditDto, FindingDto},
        item::ItemDto,
    },
    server::{
        data::{audit::AuditRepository, finding::FindingRepository, item::ItemRepository},
        error::{access::AccessError, Error},
        model::caller::Caller,
        service::access::{belongs_to_caller_team, AccessGate},
    },
};

/// Service for audits of the caller's items.
pub struct AuditService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> AuditService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Lists audits of the caller's team newest first, optionally of a single item
    ///
    /// Each entry carries the user who performed the audit, the audited item and its findings.
    /// Returns an empty list for callers without a team and for items of other teams.
    pub async fn get_audits(
        &self,
        caller: &Caller,
        item_id: Option<i32>,
    ) -> Result<Vec<AuditFeedDto>, Error> {
        let Some(team_id) = caller.team_id else {
            return Ok(Vec::new());
        };

        let items: HashMap<i32, ItemDto> = match item_id {
            Some(item_id) => match AccessGate::new(self.db, caller).item(item_id).await {
                Ok((item, _)) => HashMap::from([(item.id, ItemDto::from(item))]),
                Err(Error::AccessError(AccessError::ItemNotFound(_))) => return Ok(Vec::new()),
                Err(err) => return Err(err),
            },
            None => ItemRepository::new(self.db)
                .get_by_team(team_id, None)
                .await?
                .into_iter()
                .filter(|(_, project)| {
                    project
                        .as_ref()
                        .is_some_and(|project| belongs_to_caller_team(project.team_id, caller))
                })
                .map(|(item, _)| (item.id, ItemDto::from(item)))
                .collect(),
        };

        let item_ids: Vec<i32> = items.keys().copied().collect();

        self.get_details_by_item_ids(&item_ids)
            .await?
            .into_iter()
            .map(|audit| {
                let item = items.get(&audit.item_id).cloned().ok_or_else(|| {
                    Error::InternalError(format!(
                        "Audit ID {} references item ID {} outside of the loaded items",
                        audit.id, audit.item_id
                    ))
                })?;

                Ok(AuditFeedDto {
                    id: audit.id,
                    status: audit.status,
                    notes: audit.notes,
                    created_at: audit.created_at,
                    user: audit.user,
                    item,
                    findings: audit.findings,
                })
            })
            .collect()
    }

    /// Loads audits of the provided items with their users & findings, newest first
    ///
    /// Performs no access checks, callers must only pass IDs of items visible to them.
    ///
    /// # Returns
    /// - `Ok(Vec<AuditDetailDto>)`: Audits ordered newest first, findings oldest first
    /// - `Err(Error::InternalError)`: An audit's user is missing despite the foreign key
    /// - `Err(Error::DbErr)`: Database operation failed
    pub async fn get_details_by_item_ids(
        &self,
        item_ids: &[i32],
    ) -> Result<Vec<AuditDetailDto>, Error> {
        let audits = AuditRepository::new(self.db)
            .get_by_item_ids(item_ids)
            .await?;

        let audit_ids: Vec<i32> = audits.iter().map(|(audit, _)| audit.id).collect();

        let mut findings_by_audit: HashMap<i32, Vec<FindingDto>> = HashMap::new();
        for finding in FindingRepository::new(self.db)
            .get_by_audit_ids(&audit_ids)
            .await?
        {
            findings_by_audit
                .entry(finding.audit_id)
                .or_default()
                .push(finding.into());
        }

        audits
            .into_iter()
            .map(|(audit, user)| {
                // Would only occur if the foreign key constraint requiring the user to exist
                // is not enforced
                let user = user.ok_or_else(|| {
                    Error::InternalError(format!(
                        "Failed to find user ID {} who performed audit ID {}",
                        audit.user_id, audit.id
                    ))
                })?;

                Ok(AuditDetailDto {
                    id: audit.id,
                    item_id: audit.item_id,
                    status: audit.status.into(),
                    notes: audit.notes,
                    created_at: audit.created_at,
                    user: user.into(),
                    findings: findings_by_audit.remove(&audit.id).unwrap_or_default(),
                })
            })
            .collect()
    }

    /// Records an audit of an item of the caller's team
    ///
    /// The audit is attributed to the caller unless `user_id` names another member of the
    /// caller's team, and is dated `now` unless `date` is provided.
    ///
    /// # Returns
    /// - `Ok(AuditDto)`: The recorded audit
    /// - `Err(AccessError::ItemNotFound)`: Item does not exist or belongs to another team
    /// - `Err(AccessError::MemberNotFound)`: `user_id` is not a member of the caller's team
    /// - `Err(Error::DbErr)`: Database operation failed
    pub async fn create_audit(
        &self,
        caller: &Caller,
        payload: CreateAuditDto,
        now: NaiveDateTime,
    ) -> Result<AuditDto, Error> {
        let gate = AccessGate::new(self.db, caller);
        let (item, _) = gate.item(payload.item_id).await?;

        let user_id = match payload.user_id {
            Some(user_id) => gate.member(user_id).await?.id,
            None => caller.user_id,
        };

        let created_at = payload
            .date
            .map(|date| date.naive_utc())
            .unwrap_or(now);

        let audit = AuditRepository::new(self.db)
            .create(
                item.id,
                user_id,
                payload.status.into(),
                payload.notes,
                created_at,
            )
            .await?;

        Ok(audit.into())
    }

    /// Deletes an audit of the caller's team along with its findings
    ///
    /// # Returns
    /// - `Ok(())`: Audit deleted
    /// - `Err(AccessError::AuditNotFound)`: Audit does not exist or belongs to another team
    /// - `Err(Error::DbErr)`: Database operation failed
    pub async fn delete_audit(&self, caller: &Caller, audit_id: i32) -> Result<(), Error> {
        let audit = AccessGate::new(self.db, caller).audit(audit_id).await?;

        AuditRepository::new(self.db).delete(audit.id).await?;

        Ok(())
    }
}
