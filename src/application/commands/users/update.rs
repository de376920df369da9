use super::{UserCommandService, create::USERNAME_TAKEN};
use crate::{
    application::{
        dto::UserDto,
        error::{ApplicationError, ApplicationResult},
    },
    domain::user::{Age, PersonName, USER_NOT_FOUND, User, UserId, UserUpdate, Username},
};

pub struct UpdateUserCommand {
    pub user_id: i64,
    pub username: Option<String>,
    pub firstname: Option<String>,
    pub lastname: Option<String>,
    pub age: Option<i32>,
}

impl UpdateUserCommand {
    fn is_empty(&self) -> bool {
        self.username.is_none()
            && self.firstname.is_none()
            && self.lastname.is_none()
            && self.age.is_none()
    }
}

impl UserCommandService {
    /// Apply the supplied fields. The slug is re-derived only when the
    /// username actually changes.
    pub async fn update_user(&self, command: UpdateUserCommand) -> ApplicationResult<UserDto> {
        let user_id = UserId::existing(command.user_id)?;

        if command.is_empty() {
            return Err(ApplicationError::validation(
                "at least one field must be provided",
            ));
        }

        let current = self
            .user_repo
            .find_by_id(user_id)
            .await?
            .ok_or_else(|| ApplicationError::not_found(USER_NOT_FOUND))?;

        let mut update = UserUpdate::new(user_id);

        if let Some(raw) = command.username {
            let username = Username::new(raw)?;
            if current.username.as_ref() != Some(&username) {
                self.ensure_username_free(&username, user_id).await?;
                let slug = self
                    .slug_service
                    .generate_unique_slug(&username, Some(user_id))
                    .await?;
                update = update.with_username(username, slug);
            }
        }

        if let Some(firstname) = PersonName::parse(command.firstname) {
            update = update.with_firstname(firstname);
        }

        if let Some(lastname) = PersonName::parse(command.lastname) {
            update = update.with_lastname(lastname);
        }

        if let Some(age) = command.age {
            update = update.with_age(Age::new(age)?);
        }

        if update.is_empty() {
            return Ok(current.into());
        }

        let user: User = self.user_repo.update(update).await.inspect_err(|err| {
            if err.is_conflict() {
                tracing::warn!(user_id = %user_id, error = %err, "user update rejected by unique constraint");
            }
        })?;

        tracing::info!(user_id = %user.id, slug = %user.slug, "user updated");
        Ok(user.into())
    }

    async fn ensure_username_free(
        &self,
        username: &Username,
        user_id: UserId,
    ) -> ApplicationResult<()> {
        match self.user_repo.find_by_username(username).await? {
            Some(other) if other.id != user_id => Err(ApplicationError::conflict(USERNAME_TAKEN)),
            _ => Ok(()),
        }
    }
}
