// src/infrastructure/repositories/postgres_user.rs
use super::{map_sqlx, schema::UserTable};
use crate::domain::errors::{DomainError, DomainResult};
use crate::domain::user::{
    Age, NewUser, PersonName, USER_NOT_FOUND, User, UserId, UserRepository, UserSlug, UserUpdate,
    Username,
};
use async_trait::async_trait;
use sqlx::{FromRow, PgPool, Postgres, QueryBuilder};

/// Statements rendered once from the table definition.
#[derive(Debug, Clone)]
struct UserStatements {
    list: String,
    by_id: String,
    by_slug: String,
    by_username: String,
    exists_username: String,
    exists_slug: String,
    insert: String,
    delete: String,
}

impl UserStatements {
    fn render(table: &UserTable) -> Self {
        Self {
            list: table.select_sql("ORDER BY id"),
            by_id: table.select_sql("WHERE id = $1"),
            by_slug: table.select_sql("WHERE slug = $1"),
            by_username: table.select_sql("WHERE username = $1"),
            exists_username: table.exists_sql("username"),
            exists_slug: table.exists_sql("slug"),
            insert: table.insert_sql(),
            delete: table.delete_sql(),
        }
    }
}

#[derive(Clone)]
pub struct PostgresUserRepository {
    pool: PgPool,
    table: UserTable,
    sql: UserStatements,
}

impl PostgresUserRepository {
    pub fn new(pool: PgPool, table: UserTable) -> Self {
        let sql = UserStatements::render(&table);
        Self { pool, table, sql }
    }

    fn map_err(&self, err: sqlx::Error) -> DomainError {
        map_sqlx(err, &self.table)
    }

    async fn fetch_one_by(&self, sql: &str, value: &str) -> DomainResult<Option<User>> {
        let row = sqlx::query_as::<_, UserRow>(sql)
            .bind(value)
            .fetch_optional(&self.pool)
            .await
            .map_err(|err| self.map_err(err))?;

        row.map(User::try_from).transpose()
    }

    async fn exists_by(&self, sql: &str, value: &str) -> DomainResult<bool> {
        sqlx::query_scalar::<_, bool>(sql)
            .bind(value)
            .fetch_one(&self.pool)
            .await
            .map_err(|err| self.map_err(err))
    }
}

fn build_update_query(table: &UserTable, update: UserUpdate) -> QueryBuilder<'static, Postgres> {
    let UserUpdate {
        id,
        username,
        firstname,
        lastname,
        age,
        slug,
    } = update;

    let mut builder: QueryBuilder<Postgres> =
        QueryBuilder::new(format!("UPDATE {} SET ", table.name));
    let mut first = true;

    if let Some(username) = username {
        push_assignment(&mut builder, &mut first, "username");
        builder.push_bind(String::from(username));
    }

    if let Some(slug) = slug {
        push_assignment(&mut builder, &mut first, "slug");
        builder.push_bind(String::from(slug));
    }

    if let Some(firstname) = firstname {
        push_assignment(&mut builder, &mut first, "firstname");
        builder.push_bind(String::from(firstname));
    }

    if let Some(lastname) = lastname {
        push_assignment(&mut builder, &mut first, "lastname");
        builder.push_bind(String::from(lastname));
    }

    if let Some(age) = age {
        push_assignment(&mut builder, &mut first, "age");
        builder.push_bind(i32::from(age));
    }

    builder.push(" WHERE id = ");
    builder.push_bind(i64::from(id));
    builder.push(" RETURNING ");
    builder.push(UserTable::COLUMNS);

    builder
}

fn push_assignment(builder: &mut QueryBuilder<'static, Postgres>, first: &mut bool, column: &str) {
    if !*first {
        builder.push(", ");
    }
    *first = false;
    builder.push(column);
    builder.push(" = ");
}

#[derive(Debug, FromRow)]
struct UserRow {
    id: i64,
    username: Option<String>,
    firstname: Option<String>,
    lastname: Option<String>,
    age: Option<i32>,
    slug: String,
}

impl TryFrom<UserRow> for User {
    type Error = DomainError;

    fn try_from(row: UserRow) -> Result<Self, Self::Error> {
        Ok(User {
            id: UserId::new(row.id)?,
            username: row.username.map(Username::new).transpose()?,
            firstname: PersonName::parse(row.firstname),
            lastname: PersonName::parse(row.lastname),
            age: row.age.map(Age::new).transpose()?,
            slug: UserSlug::new(row.slug)?,
        })
    }
}

#[async_trait]
impl UserRepository for PostgresUserRepository {
    async fn list(&self) -> DomainResult<Vec<User>> {
        let rows = sqlx::query_as::<_, UserRow>(&self.sql.list)
            .fetch_all(&self.pool)
            .await
            .map_err(|err| self.map_err(err))?;

        rows.into_iter().map(User::try_from).collect()
    }

    async fn find_by_id(&self, id: UserId) -> DomainResult<Option<User>> {
        let row = sqlx::query_as::<_, UserRow>(&self.sql.by_id)
            .bind(i64::from(id))
            .fetch_optional(&self.pool)
            .await
            .map_err(|err| self.map_err(err))?;

        row.map(User::try_from).transpose()
    }

    async fn find_by_slug(&self, slug: &UserSlug) -> DomainResult<Option<User>> {
        self.fetch_one_by(&self.sql.by_slug, slug.as_str()).await
    }

    async fn find_by_username(&self, username: &Username) -> DomainResult<Option<User>> {
        self.fetch_one_by(&self.sql.by_username, username.as_str())
            .await
    }

    async fn exists_by_username(&self, username: &Username) -> DomainResult<bool> {
        self.exists_by(&self.sql.exists_username, username.as_str())
            .await
    }

    async fn exists_by_slug(&self, slug: &UserSlug) -> DomainResult<bool> {
        self.exists_by(&self.sql.exists_slug, slug.as_str()).await
    }

    async fn insert(&self, new_user: NewUser) -> DomainResult<User> {
        let NewUser {
            username,
            firstname,
            lastname,
            age,
            slug,
        } = new_user;

        let mut tx = self.pool.begin().await.map_err(|err| self.map_err(err))?;

        let row = sqlx::query_as::<_, UserRow>(&self.sql.insert)
            .bind(String::from(username))
            .bind(firstname.map(String::from))
            .bind(lastname.map(String::from))
            .bind(age.map(i32::from))
            .bind(String::from(slug))
            .fetch_one(&mut *tx)
            .await
            .map_err(|err| self.map_err(err))?;

        tx.commit().await.map_err(|err| self.map_err(err))?;

        User::try_from(row)
    }

    async fn update(&self, update: UserUpdate) -> DomainResult<User> {
        if update.is_empty() {
            return Err(DomainError::Validation(
                "no fields provided for update".into(),
            ));
        }

        let mut builder = build_update_query(&self.table, update);
        let mut tx = self.pool.begin().await.map_err(|err| self.map_err(err))?;

        let row = builder
            .build_query_as::<UserRow>()
            .fetch_optional(&mut *tx)
            .await
            .map_err(|err| self.map_err(err))?
            .ok_or_else(|| DomainError::NotFound(USER_NOT_FOUND.into()))?;

        tx.commit().await.map_err(|err| self.map_err(err))?;

        User::try_from(row)
    }

    async fn delete(&self, id: UserId) -> DomainResult<()> {
        let result = sqlx::query(&self.sql.delete)
            .bind(i64::from(id))
            .execute(&self.pool)
            .await
            .map_err(|err| self.map_err(err))?;

        if result.rows_affected() == 0 {
            return Err(DomainError::NotFound(USER_NOT_FOUND.into()));
        }

        Ok(())
    }
}
