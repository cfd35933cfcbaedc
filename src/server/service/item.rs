use std::collections::HashMap;

use chrono::NaiveDateTime;
use sea_orm::DatabaseConnection;

use crate::{
    model::{
        audit::AuditDetailDto,
        item::{CreateItemDto, ItemDetailDto, ItemDto, UpdateItemDto},
    },
    server::{
        data::item::{ItemRepository, ItemUpdate},
        error::{access::AccessError, Error},
        model::{caller::Caller, db::ItemModel},
        service::{
            access::{belongs_to_caller_team, AccessGate},
            audit::AuditService,
        },
        util::{
            schedule::{estimate_due_date, Schedule},
            stats::audit_stats,
            validate::trimmed_name,
        },
    },
};

/// Service for items of the caller's projects.
///
/// Item reads return [`ItemDetailDto`]s carrying the item's audits (newest first), the
/// estimated due date of its next audit and statistics over its audit history. Due dates
/// are rendered relative to the `now` passed by the caller of the service.
pub struct ItemService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> ItemService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Lists items of the caller's team oldest first, optionally of a single project
    ///
    /// Returns an empty list for callers without a team and for projects of other teams.
    pub async fn get_items(
        &self,
        caller: &Caller,
        project_id: Option<i32>,
        now: NaiveDateTime,
    ) -> Result<Vec<ItemDetailDto>, Error> {
        let Some(team_id) = caller.team_id else {
            return Ok(Vec::new());
        };

        let items = ItemRepository::new(self.db)
            .get_by_team(team_id, project_id)
            .await?
            .into_iter()
            .filter_map(|(item, project)| match project {
                Some(project) if belongs_to_caller_team(project.team_id, caller) => Some(item),
                _ => None,
            })
            .collect();

        self.with_details(items, now).await
    }

    /// Gets a single item of the caller's team with its audits
    ///
    /// # Returns
    /// - `Ok(ItemDetailDto)`: The item with audits, due date & statistics
    /// - `Err(AccessError::ItemNotFound)`: Item does not exist or belongs to another team
    /// - `Err(Error::DbErr)`: Database operation failed
    pub async fn get_item(
        &self,
        caller: &Caller,
        item_id: i32,
        now: NaiveDateTime,
    ) -> Result<ItemDetailDto, Error> {
        let (item, _) = AccessGate::new(self.db, caller).item(item_id).await?;

        self.with_details(vec![item], now)
            .await?
            .pop()
            .ok_or_else(|| {
                Error::InternalError(format!("Failed to load details of item ID {}", item_id))
            })
    }

    /// Creates an item in a project of the caller's team
    ///
    /// # Returns
    /// - `Ok(ItemDto)`: The created item
    /// - `Err(AccessError::ProjectNotFound)`: Project does not exist or belongs to another team
    /// - `Err(Error::ValidationError)`: Item name is empty or the frequency is negative
    /// - `Err(Error::DbErr)`: Database operation failed
    pub async fn create_item(
        &self,
        caller: &Caller,
        payload: CreateItemDto,
    ) -> Result<ItemDto, Error> {
        let project = AccessGate::new(self.db, caller)
            .project(payload.project_id)
            .await?;

        let name = trimmed_name(&payload.name, "item")?;
        let schedule = Schedule::from_frequency(payload.frequency.as_ref())?;

        let item = ItemRepository::new(self.db)
            .create(project.id, name, payload.description, &schedule)
            .await?;

        Ok(item.into())
    }

    /// Updates an item of the caller's team
    ///
    /// A frequency value of 0 clears the item's schedule, a project ID moves the item to
    /// another project which must also belong to the caller's team.
    ///
    /// # Returns
    /// - `Ok(ItemDto)`: The updated item
    /// - `Err(AccessError::ItemNotFound)`: Item does not exist or belongs to another team
    /// - `Err(AccessError::ProjectNotFound)`: Target project does not exist or belongs to another team
    /// - `Err(Error::ValidationError)`: Item name is empty or the frequency is negative
    /// - `Err(Error::DbErr)`: Database operation failed
    pub async fn update_item(
        &self,
        caller: &Caller,
        item_id: i32,
        payload: UpdateItemDto,
    ) -> Result<ItemDto, Error> {
        let gate = AccessGate::new(self.db, caller);
        let (item, _) = gate.item(item_id).await?;

        let project_id = match payload.project_id {
            Some(project_id) => Some(gate.project(project_id).await?.id),
            None => None,
        };

        let changes = ItemUpdate {
            project_id,
            name: payload
                .name
                .map(|name| trimmed_name(&name, "item"))
                .transpose()?,
            description: payload.description,
            schedule: payload
                .frequency
                .map(|frequency| Schedule::from_frequency(Some(&frequency)))
                .transpose()?,
        };

        let item = ItemRepository::new(self.db)
            .update(item.id, changes)
            .await?
            .ok_or(AccessError::ItemNotFound(item_id))?;

        Ok(item.into())
    }

    /// Deletes an item of the caller's team along with its audits & findings
    ///
    /// # Returns
    /// - `Ok(())`: Item deleted
    /// - `Err(AccessError::ItemNotFound)`: Item does not exist or belongs to another team
    /// - `Err(Error::DbErr)`: Database operation failed
    pub async fn delete_item(&self, caller: &Caller, item_id: i32) -> Result<(), Error> {
        let (item, _) = AccessGate::new(self.db, caller).item(item_id).await?;

        ItemRepository::new(self.db).delete(item.id).await?;

        Ok(())
    }

    /// Attaches audits, due date & statistics to items, keeping the order of `items`
    async fn with_details(
        &self,
        items: Vec<ItemModel>,
        now: NaiveDateTime,
    ) -> Result<Vec<ItemDetailDto>, Error> {
        let item_ids: Vec<i32> = items.iter().map(|item| item.id).collect();

        let mut audits_by_item: HashMap<i32, Vec<AuditDetailDto>> = HashMap::new();
        for audit in AuditService::new(self.db)
            .get_details_by_item_ids(&item_ids)
            .await?
        {
            audits_by_item.entry(audit.item_id).or_default().push(audit);
        }

        Ok(items
            .into_iter()
            .map(|item| {
                let audits = audits_by_item.remove(&item.id).unwrap_or_default();
                let schedule = Schedule::from_columns(item.frequency_value, item.frequency_unit);

                // Audits are ordered newest first
                let last_audit_at = audits.first().map(|audit| audit.created_at);

                ItemDetailDto {
                    id: item.id,
                    project_id: item.project_id,
                    name: item.name,
                    description: item.description,
                    frequency: schedule.to_frequency(),
                    created_at: item.created_at,
                    due: estimate_due_date(&schedule, last_audit_at, now),
                    stats: audit_stats(&audits),
                    audits,
                }
            })
            .collect())
    }
}
