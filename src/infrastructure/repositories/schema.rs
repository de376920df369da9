// src/infrastructure/repositories/schema.rs

/// Names the repository needs to know about the `users` table.
///
/// Matches `migrations/20240101000000_create_users.sql`. Handed to the
/// repository at construction so nothing resolves tables through global
/// state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UserTable {
    pub name: &'static str,
    pub username_constraint: &'static str,
    pub slug_constraint: &'static str,
}

impl UserTable {
    pub const COLUMNS: &'static str = "id, username, firstname, lastname, age, slug";

    pub const fn users() -> Self {
        Self {
            name: "users",
            username_constraint: "users_username_key",
            slug_constraint: "users_slug_key",
        }
    }

    pub fn select_sql(&self, filter: &str) -> String {
        format!("SELECT {} FROM {} {filter}", Self::COLUMNS, self.name)
    }

    pub fn insert_sql(&self) -> String {
        format!(
            "INSERT INTO {} (username, firstname, lastname, age, slug)
             VALUES ($1, $2, $3, $4, $5)
             RETURNING {}",
            self.name,
            Self::COLUMNS
        )
    }

    pub fn exists_sql(&self, column: &str) -> String {
        format!(
            "SELECT EXISTS(SELECT 1 FROM {} WHERE {column} = $1)",
            self.name
        )
    }

    pub fn delete_sql(&self) -> String {
        format!("DELETE FROM {} WHERE id = $1", self.name)
    }
}

impl Default for UserTable {
    fn default() -> Self {
        Self::users()
    }
}
