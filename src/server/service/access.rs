//! Team access gate.
//!
//! Every entity is owned by exactly one team through the chain team → project → item → audit
//! → finding. An entity is visible to a caller only when [`belongs_to_caller_team`] holds for
//! its owning team. Lookups through [`AccessGate`] report entities owned by another team with
//! the same error as entities that do not exist.

use sea_orm::ConnectionTrait;

use crate::server::{
    data::{
        audit::AuditRepository, item::ItemRepository, project::ProjectRepository,
        user::UserRepository,
    },
    error::{access::AccessError, Error},
    model::{
        caller::Caller,
        db::{AuditModel, ItemModel, ProjectModel, UserModel},
    },
};

/// Returns true if the entity owned by `owner_team_id` is visible to the caller
pub fn belongs_to_caller_team(owner_team_id: i32, caller: &Caller) -> bool {
    caller.team_id == Some(owner_team_id)
}

/// Resolves entities by ID on behalf of a caller, failing with not-found outside the caller's team
pub struct AccessGate<'a, C: ConnectionTrait> {
    db: &'a C,
    caller: &'a Caller,
}

impl<'a, C: ConnectionTrait> AccessGate<'a, C> {
    pub fn new(db: &'a C, caller: &'a Caller) -> Self {
        Self { db, caller }
    }

    /// Gets a project owned by the caller's team
    ///
    /// # Returns
    /// - `Ok(ProjectModel)`: The project
    /// - `Err(AccessError::ProjectNotFound)`: Project does not exist or belongs to another team
    /// - `Err(Error::DbErr)`: Database query failed
    pub async fn project(&self, project_id: i32) -> Result<ProjectModel, Error> {
        match ProjectRepository::new(self.db).find_by_id(project_id).await? {
            Some(project) if belongs_to_caller_team(project.team_id, self.caller) => Ok(project),
            _ => Err(AccessError::ProjectNotFound(project_id).into()),
        }
    }

    /// Gets an item of a project owned by the caller's team, together with that project
    ///
    /// # Returns
    /// - `Ok((ItemModel, ProjectModel))`: The item & its project
    /// - `Err(AccessError::ItemNotFound)`: Item does not exist or belongs to another team
    /// - `Err(Error::DbErr)`: Database query failed
    pub async fn item(&self, item_id: i32) -> Result<(ItemModel, ProjectModel), Error> {
        match ItemRepository::new(self.db).find_with_project(item_id).await? {
            Some((item, Some(project))) if belongs_to_caller_team(project.team_id, self.caller) => {
                Ok((item, project))
            }
            _ => Err(AccessError::ItemNotFound(item_id).into()),
        }
    }

    /// Gets an audit of an item owned by the caller's team
    ///
    /// # Returns
    /// - `Ok(AuditModel)`: The audit
    /// - `Err(AccessError::AuditNotFound)`: Audit does not exist or belongs to another team
    /// - `Err(Error::DbErr)`: Database query failed
    pub async fn audit(&self, audit_id: i32) -> Result<AuditModel, Error> {
        let Some(audit) = AuditRepository::new(self.db).find_by_id(audit_id).await? else {
            return Err(AccessError::AuditNotFound(audit_id).into());
        };

        match self.item(audit.item_id).await {
            Ok(_) => Ok(audit),
            Err(Error::AccessError(AccessError::ItemNotFound(_))) => {
                Err(AccessError::AuditNotFound(audit_id).into())
            }
            Err(err) => Err(err),
        }
    }

    /// Gets a user who is a member of the caller's team
    ///
    /// # Returns
    /// - `Ok(UserModel)`: The team member
    /// - `Err(AccessError::MemberNotFound)`: User does not exist or is not a teammate
    /// - `Err(Error::DbErr)`: Database query failed
    pub async fn member(&self, user_id: i32) -> Result<UserModel, Error> {
        let Some(team_id) = self.caller.team_id else {
            return Err(AccessError::MemberNotFound(user_id).into());
        };

        match UserRepository::new(self.db)
            .find_team_member(team_id, user_id)
            .await?
        {
            Some(user) => Ok(user),
            None => Err(AccessError::MemberNotFound(user_id).into()),
        }
    }
}
