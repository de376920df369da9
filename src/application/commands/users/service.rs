use std::sync::Arc;

use crate::domain::user::{UserRepository, UserSlugService};

pub struct UserCommandService {
    pub(super) user_repo: Arc<dyn UserRepository>,
    pub(super) slug_service: Arc<UserSlugService>,
}

impl UserCommandService {
    pub fn new(user_repo: Arc<dyn UserRepository>, slug_service: Arc<UserSlugService>) -> Self {
        Self {
            user_repo,
            slug_service,
        }
    }
}
