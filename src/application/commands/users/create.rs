use super::UserCommandService;
use crate::{
    application::{
        dto::UserDto,
        error::{ApplicationError, ApplicationResult},
    },
    domain::user::{Age, NewUser, PersonName, Username},
};

pub const USERNAME_TAKEN: &str = "User with this username already exists";

pub struct CreateUserCommand {
    pub username: String,
    pub firstname: Option<String>,
    pub lastname: Option<String>,
    pub age: Option<i32>,
}

impl UserCommandService {
    pub async fn create_user(&self, command: CreateUserCommand) -> ApplicationResult<UserDto> {
        let username = Username::new(command.username)?;
        let age = command.age.map(Age::new).transpose()?;

        if self.user_repo.exists_by_username(&username).await? {
            return Err(ApplicationError::conflict(USERNAME_TAKEN));
        }

        let slug = self.slug_service.generate_unique_slug(&username, None).await?;

        let new_user = NewUser::new(username, slug)
            .with_firstname(PersonName::parse(command.firstname))
            .with_lastname(PersonName::parse(command.lastname))
            .with_age(age);

        // A concurrent create can claim the same username or slug between the
        // checks above and this insert; the storage constraint decides.
        let user = self.user_repo.insert(new_user).await.inspect_err(|err| {
            if err.is_conflict() {
                tracing::warn!(error = %err, "user insert rejected by unique constraint");
            }
        })?;

        tracing::info!(user_id = %user.id, slug = %user.slug, "user created");
        Ok(user.into())
    }
}
