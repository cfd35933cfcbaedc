use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, EntityTrait,
    IntoActiveModel, QueryFilter, QueryOrder,
};

use crate::server::model::db::UserModel;

/// Profile fields of a user to change, `None` leaves the field untouched
#[derive(Debug, Default)]
pub struct UserProfileUpdate {
    pub name: Option<String>,
    pub email: Option<String>,
    pub image: Option<String>,
}

pub struct UserRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> UserRepository<'a, C> {
    /// Creates a new instance of [`UserRepository`]
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    pub async fn find_by_id(&self, user_id: i32) -> Result<Option<UserModel>, DbErr> {
        entity::prelude::User::find_by_id(user_id).one(self.db).await
    }

    pub async fn find_by_email(&self, email: &str) -> Result<Option<UserModel>, DbErr> {
        entity::prelude::User::find()
            .filter(entity::user::Column::Email.eq(email))
            .one(self.db)
            .await
    }

    /// Gets a user only if they are a member of the provided team
    pub async fn find_team_member(
        &self,
        team_id: i32,
        user_id: i32,
    ) -> Result<Option<UserModel>, DbErr> {
        entity::prelude::User::find_by_id(user_id)
            .filter(entity::user::Column::TeamId.eq(team_id))
            .one(self.db)
            .await
    }

    /// Gets all members of a team ordered by ID
    pub async fn get_team_members(&self, team_id: i32) -> Result<Vec<UserModel>, DbErr> {
        entity::prelude::User::find()
            .filter(entity::user::Column::TeamId.eq(team_id))
            .order_by_asc(entity::user::Column::Id)
            .all(self.db)
            .await
    }

    /// Moves a user into a team, or out of any team with `None`
    ///
    /// # Returns
    /// - `Ok(Some(UserModel))`: The updated user
    /// - `Ok(None)`: No user exists with the provided ID
    /// - `Err(DbErr)`: A database-related error occurred
    pub async fn set_team(
        &self,
        user_id: i32,
        team_id: Option<i32>,
    ) -> Result<Option<UserModel>, DbErr> {
        let user = match self.find_by_id(user_id).await? {
            Some(user) => user,
            None => return Ok(None),
        };

        let mut user_am = user.into_active_model();
        user_am.team_id = ActiveValue::Set(team_id);

        let user = user_am.update(self.db).await?;

        Ok(Some(user))
    }

    /// Updates the profile fields of a user
    ///
    /// Returns `Ok(None)` if no user exists with the provided ID.
    pub async fn update_profile(
        &self,
        user_id: i32,
        profile: UserProfileUpdate,
    ) -> Result<Option<UserModel>, DbErr> {
        let user = match self.find_by_id(user_id).await? {
            Some(user) => user,
            None => return Ok(None),
        };

        let mut user_am = user.into_active_model();
        if let Some(name) = profile.name {
            user_am.name = ActiveValue::Set(name);
        }
        if let Some(email) = profile.email {
            user_am.email = ActiveValue::Set(email);
        }
        if let Some(image) = profile.image {
            user_am.image = ActiveValue::Set(Some(image));
        }

        let user = user_am.update(self.db).await?;

        Ok(Some(user))
    }
}
