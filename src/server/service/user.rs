use sea_orm::DatabaseConnection;

use crate::{
    model::user::{UpdateUserDto, UserDto},
    server::{
        data::user::{UserProfileUpdate, UserRepository},
        error::{auth::AuthError, Error},
        model::{caller::Caller, db::UserModel},
        util::validate::{trimmed_email, trimmed_name},
    },
};

/// Service for user accounts.
pub struct UserService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> UserService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Retrieves a user by ID
    ///
    /// # Returns
    /// - `Ok(Some(UserModel))`: User found
    /// - `Ok(None)`: User not found in database
    /// - `Err(Error::DbErr)`: Database operation failed
    pub async fn get_user(&self, user_id: i32) -> Result<Option<UserModel>, Error> {
        Ok(UserRepository::new(self.db).find_by_id(user_id).await?)
    }

    /// Updates the caller's own profile
    ///
    /// Absent fields are left untouched, provided names and emails are trimmed and must
    /// not be empty.
    ///
    /// # Returns
    /// - `Ok(UserDto)`: The updated user
    /// - `Err(Error::ValidationError)`: Name or email is empty
    /// - `Err(AuthError::UserNotInDatabase)`: Caller no longer exists
    /// - `Err(Error::DbErr)`: Database operation failed, e.g. the email is already taken
    pub async fn update_user(
        &self,
        caller: &Caller,
        payload: UpdateUserDto,
    ) -> Result<UserDto, Error> {
        let profile = UserProfileUpdate {
            name: payload
                .name
                .map(|name| trimmed_name(&name, "user"))
                .transpose()?,
            email: payload.email.map(|email| trimmed_email(&email)).transpose()?,
            image: payload.image,
        };

        let user = UserRepository::new(self.db)
            .update_profile(caller.user_id, profile)
            .await?
            .ok_or(AuthError::UserNotInDatabase(caller.user_id))?;

        Ok(user.into())
    }
}
