// src/infrastructure/mod.rs
pub mod database;
pub mod repositories;
pub mod util;
