use sea_orm::DatabaseConnection;

use crate::{
    model::project::{CreateProjectDto, ProjectDto},
    server::{
        data::project::ProjectRepository,
        error::{access::AccessError, Error},
        model::caller::Caller,
        service::access::belongs_to_caller_team,
        util::validate::trimmed_name,
    },
};

/// Service for projects owned by the caller's team.
pub struct ProjectService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> ProjectService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Lists projects of the caller's team oldest first, empty for callers without a team
    pub async fn get_projects(&self, caller: &Caller) -> Result<Vec<ProjectDto>, Error> {
        let Some(team_id) = caller.team_id else {
            return Ok(Vec::new());
        };

        let projects = ProjectRepository::new(self.db).get_by_team(team_id).await?;

        Ok(projects
            .into_iter()
            .filter(|project| belongs_to_caller_team(project.team_id, caller))
            .map(ProjectDto::from)
            .collect())
    }

    /// Creates a project owned by the caller's team
    ///
    /// # Returns
    /// - `Ok(ProjectDto)`: The created project
    /// - `Err(AccessError::TeamNotFound)`: The team is not the caller's team
    /// - `Err(Error::ValidationError)`: Project name is empty
    /// - `Err(Error::DbErr)`: Database operation failed
    pub async fn create_project(
        &self,
        caller: &Caller,
        payload: CreateProjectDto,
    ) -> Result<ProjectDto, Error> {
        if !belongs_to_caller_team(payload.team_id, caller) {
            return Err(AccessError::TeamNotFound(payload.team_id).into());
        }

        let name = trimmed_name(&payload.name, "project")?;

        let project = ProjectRepository::new(self.db)
            .create(payload.team_id, name)
            .await?;

        Ok(project.into())
    }
}
