use super::UserCommandService;
use crate::{application::error::ApplicationResult, domain::user::UserId};

pub struct DeleteUserCommand {
    pub user_id: i64,
}

impl UserCommandService {
    pub async fn delete_user(&self, command: DeleteUserCommand) -> ApplicationResult<()> {
        let user_id = UserId::existing(command.user_id)?;
        self.user_repo.delete(user_id).await?;

        tracing::info!(user_id = %user_id, "user deleted");
        Ok(())
    }
}
