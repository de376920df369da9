// src/application/services/mod.rs
use std::sync::Arc;

use crate::{
    application::{
        commands::users::UserCommandService, ports::util::SlugGenerator,
        queries::users::UserQueryService,
    },
    domain::user::{UserRepository, UserSlugService},
};

pub struct ApplicationServices {
    pub user_commands: Arc<UserCommandService>,
    pub user_queries: Arc<UserQueryService>,
}

impl ApplicationServices {
    pub fn new(
        user_repo: Arc<dyn UserRepository>,
        slugger: Arc<dyn SlugGenerator>,
        slug_max_probes: u32,
    ) -> Self {
        let slug_service = Arc::new(UserSlugService::new(
            Arc::clone(&user_repo),
            Arc::clone(&slugger),
            slug_max_probes,
        ));

        let user_commands = Arc::new(UserCommandService::new(
            Arc::clone(&user_repo),
            Arc::clone(&slug_service),
        ));
        let user_queries = Arc::new(UserQueryService::new(Arc::clone(&user_repo)));

        Self {
            user_commands,
            user_queries,
        }
    }
}
