mod get;
mod list;
mod service;

pub use get::{GetUserBySlugQuery, GetUserQuery};
pub use service::UserQueryService;
