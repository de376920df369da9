//! User management REST API: CRUD over a `users` table, with every user
//! addressed by a unique slug derived from its username.
pub mod application;
pub mod config;
pub mod domain;
pub mod infrastructure;
pub mod presentation;
