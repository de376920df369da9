use super::UserQueryService;
use crate::{
    application::{
        dto::UserDto,
        error::{ApplicationError, ApplicationResult},
    },
    domain::user::{USER_NOT_FOUND, UserId, UserSlug},
};

pub struct GetUserQuery {
    pub user_id: i64,
}

pub struct GetUserBySlugQuery {
    pub slug: String,
}

impl UserQueryService {
    pub async fn get_user(&self, query: GetUserQuery) -> ApplicationResult<UserDto> {
        let user_id = UserId::existing(query.user_id)?;
        self.user_repo
            .find_by_id(user_id)
            .await?
            .map(Into::into)
            .ok_or_else(|| ApplicationError::not_found(USER_NOT_FOUND))
    }

    pub async fn get_user_by_slug(&self, query: GetUserBySlugQuery) -> ApplicationResult<UserDto> {
        let slug = UserSlug::new(query.slug)?;
        self.user_repo
            .find_by_slug(&slug)
            .await?
            .map(Into::into)
            .ok_or_else(|| ApplicationError::not_found(USER_NOT_FOUND))
    }
}
