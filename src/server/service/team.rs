use sea_orm::DatabaseConnection;

use crate::{
    model::{
        team::{AddTeamMemberDto, CreateTeamDto, TeamDto},
        user::UserDto,
    },
    server::{
        data::{team::TeamRepository, user::UserRepository},
        error::{access::AccessError, auth::AuthError, Error},
        model::caller::Caller,
        util::validate::{trimmed_email, trimmed_name},
    },
};

/// Service for teams and their membership.
pub struct TeamService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> TeamService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Lists the teams the caller belongs to
    ///
    /// Users belong to at most one team, so the result holds zero or one team.
    pub async fn get_teams(&self, caller: &Caller) -> Result<Vec<TeamDto>, Error> {
        let Some(team_id) = caller.team_id else {
            return Ok(Vec::new());
        };

        let team = TeamRepository::new(self.db).find_by_id(team_id).await?;

        Ok(team.into_iter().map(TeamDto::from).collect())
    }

    /// Creates a team and moves the caller into it
    ///
    /// # Returns
    /// - `Ok(TeamDto)`: The created team
    /// - `Err(Error::ValidationError)`: Team name is empty
    /// - `Err(Error::AuthError)`: Caller no longer exists
    /// - `Err(Error::DbErr)`: Database operation failed
    pub async fn create_team(
        &self,
        caller: &Caller,
        payload: CreateTeamDto,
    ) -> Result<TeamDto, Error> {
        let name = trimmed_name(&payload.name, "team")?;

        let team = TeamRepository::new(self.db).create(name).await?;

        UserRepository::new(self.db)
            .set_team(caller.user_id, Some(team.id))
            .await?
            .ok_or(AuthError::UserNotInDatabase(caller.user_id))?;

        Ok(team.into())
    }

    /// Adds the user registered with an email to the caller's team
    ///
    /// A user who already belongs to another team is moved to the caller's team.
    ///
    /// # Returns
    /// - `Ok(UserDto)`: The updated user
    /// - `Err(AccessError::NotInTeam)`: The caller is not in a team
    /// - `Err(AccessError::EmailNotFound)`: No user is registered with the email
    /// - `Err(Error::ValidationError)`: Email is empty
    /// - `Err(Error::DbErr)`: Database operation failed
    pub async fn add_member(
        &self,
        caller: &Caller,
        payload: AddTeamMemberDto,
    ) -> Result<UserDto, Error> {
        let team_id = caller.require_team()?;
        let email = trimmed_email(&payload.email)?;

        let user_repo = UserRepository::new(self.db);

        let Some(user) = user_repo.find_by_email(&email).await? else {
            return Err(AccessError::EmailNotFound(email).into());
        };

        let user = user_repo
            .set_team(user.id, Some(team_id))
            .await?
            .ok_or(AccessError::EmailNotFound(email))?;

        Ok(user.into())
    }

    /// Lists members of the caller's team ordered by ID, empty for callers without a team
    pub async fn get_members(&self, caller: &Caller) -> Result<Vec<UserDto>, Error> {
        let Some(team_id) = caller.team_id else {
            return Ok(Vec::new());
        };

        let members = UserRepository::new(self.db)
            .get_team_members(team_id)
            .await?;

        Ok(members.into_iter().map(UserDto::from).collect())
    }
}
