use super::schema::UserTable;
use crate::domain::errors::DomainError;

pub fn map_sqlx(err: sqlx::Error, table: &UserTable) -> DomainError {
    match &err {
        sqlx::Error::Database(db_err) => {
            let constraint = db_err.constraint();
            match db_err.code().as_deref() {
                Some("23505") => DomainError::Conflict(unique_detail(constraint, table)),
                Some("23514") => DomainError::Validation(match constraint {
                    Some(name) => format!("check constraint violated: {name}"),
                    None => "check constraint violated".into(),
                }),
                _ => match constraint {
                    Some(name) => {
                        DomainError::Persistence(format!("database constraint violation: {name}"))
                    }
                    None => DomainError::Persistence(db_err.message().to_string()),
                },
            }
        }
        _ => DomainError::Persistence(err.to_string()),
    }
}

/// Every unique violation is a conflict; the constraint only picks the wording.
fn unique_detail(constraint: Option<&str>, table: &UserTable) -> String {
    match constraint {
        Some(name) if name == table.slug_constraint => "slug already exists".into(),
        Some(name) if name == table.username_constraint => "username already exists".into(),
        Some(name) => format!("unique constraint violated: {name}"),
        None => "unique constraint violated".into(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use sqlx::error::{DatabaseError, ErrorKind};
    use std::{borrow::Cow, error::Error as StdError, fmt};

    #[derive(Debug)]
    struct FakeDbError {
        constraint: Option<&'static str>,
        code: Option<&'static str>,
    }

    impl fmt::Display for FakeDbError {
        fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            f.write_str("fake database error")
        }
    }

    impl StdError for FakeDbError {}

    impl DatabaseError for FakeDbError {
        fn message(&self) -> &str {
            "fake database error"
        }

        fn code(&self) -> Option<Cow<'_, str>> {
            self.code.map(Cow::Borrowed)
        }

        fn as_error(&self) -> &(dyn StdError + Send + Sync + 'static) {
            self
        }

        fn as_error_mut(&mut self) -> &mut (dyn StdError + Send + Sync + 'static) {
            self
        }

        fn into_error(self: Box<Self>) -> Box<dyn StdError + Send + Sync + 'static> {
            self
        }

        fn kind(&self) -> ErrorKind {
            ErrorKind::UniqueViolation
        }

        fn constraint(&self) -> Option<&str> {
            self.constraint
        }
    }

    fn db_error(constraint: Option<&'static str>, code: Option<&'static str>) -> sqlx::Error {
        sqlx::Error::Database(Box::new(FakeDbError { constraint, code }))
    }

    #[test]
    fn slug_constraint_maps_to_conflict() {
        let err = map_sqlx(db_error(Some("users_slug_key"), Some("23505")), &UserTable::users());
        assert!(matches!(err, DomainError::Conflict(msg) if msg == "slug already exists"));
    }

    #[test]
    fn username_constraint_maps_to_conflict() {
        let err = map_sqlx(
            db_error(Some("users_username_key"), Some("23505")),
            &UserTable::users(),
        );
        assert!(matches!(err, DomainError::Conflict(msg) if msg == "username already exists"));
    }

    #[test]
    fn bare_unique_code_maps_to_conflict() {
        let err = map_sqlx(db_error(None, Some("23505")), &UserTable::users());
        assert!(err.is_conflict());
    }

    #[test]
    fn unique_violation_on_unknown_constraint_is_still_a_conflict() {
        let err = map_sqlx(db_error(Some("ix_users_slug"), Some("23505")), &UserTable::users());
        assert!(err.is_conflict());
        assert!(
            matches!(err, DomainError::Conflict(msg) if msg == "unique constraint violated: ix_users_slug")
        );
    }

    #[test]
    fn check_violation_maps_to_validation() {
        let err = map_sqlx(db_error(Some("users_age_check"), Some("23514")), &UserTable::users());
        assert!(matches!(err, DomainError::Validation(_)));
    }

    #[test]
    fn named_constraint_with_other_code_is_persistence() {
        let err = map_sqlx(db_error(Some("users_fk"), Some("23503")), &UserTable::users());
        assert!(matches!(err, DomainError::Persistence(msg) if msg.contains("users_fk")));
    }

    #[test]
    fn other_failures_are_persistence_errors() {
        let err = map_sqlx(sqlx::Error::RowNotFound, &UserTable::users());
        assert!(matches!(err, DomainError::Persistence(_)));
    }
}
