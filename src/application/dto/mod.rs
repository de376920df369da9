pub mod users;

pub use users::UserDto;
