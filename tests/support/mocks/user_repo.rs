// tests/support/mocks/user_repo.rs
use std::collections::BTreeMap;
use std::sync::Mutex;

use async_trait::async_trait;
use user_registry::domain::errors::{DomainError, DomainResult};
use user_registry::domain::user::{
    NewUser, USER_NOT_FOUND, User, UserId, UserRepository, UserSlug, UserUpdate, Username,
};

#[derive(Default)]
struct Table {
    next_id: i64,
    rows: BTreeMap<i64, User>,
}

impl Table {
    fn check_unique(
        &self,
        username: Option<&Username>,
        slug: Option<&UserSlug>,
        exclude: Option<UserId>,
    ) -> DomainResult<()> {
        for user in self.rows.values() {
            if Some(user.id) == exclude {
                continue;
            }
            if username.is_some() && user.username.as_ref() == username {
                return Err(DomainError::Conflict("username already exists".into()));
            }
            if slug == Some(&user.slug) {
                return Err(DomainError::Conflict("slug already exists".into()));
            }
        }
        Ok(())
    }
}

/// In-memory `users` table enforcing the same unique constraints as PostgreSQL.
#[derive(Default)]
pub struct InMemoryUserRepo {
    inner: Mutex<Table>,
}

impl InMemoryUserRepo {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.inner.lock().unwrap().rows.len()
    }

    pub fn slugs(&self) -> Vec<String> {
        self.inner
            .lock()
            .unwrap()
            .rows
            .values()
            .map(|u| u.slug.to_string())
            .collect()
    }

    /// Insert a row directly, bypassing slug generation.
    pub fn seed(&self, username: &str, slug: &str) -> User {
        let mut table = self.inner.lock().unwrap();
        table.next_id += 1;
        let user = User {
            id: UserId::new(table.next_id).unwrap(),
            username: Some(Username::new(username).unwrap()),
            firstname: None,
            lastname: None,
            age: None,
            slug: UserSlug::new(slug).unwrap(),
        };
        let id = table.next_id;
        table.rows.insert(id, user.clone());
        user
    }
}

#[async_trait]
impl UserRepository for InMemoryUserRepo {
    async fn list(&self) -> DomainResult<Vec<User>> {
        Ok(self.inner.lock().unwrap().rows.values().cloned().collect())
    }

    async fn find_by_id(&self, id: UserId) -> DomainResult<Option<User>> {
        Ok(self.inner.lock().unwrap().rows.get(&i64::from(id)).cloned())
    }

    async fn find_by_slug(&self, slug: &UserSlug) -> DomainResult<Option<User>> {
        let table = self.inner.lock().unwrap();
        Ok(table.rows.values().find(|u| &u.slug == slug).cloned())
    }

    async fn find_by_username(&self, username: &Username) -> DomainResult<Option<User>> {
        let table = self.inner.lock().unwrap();
        Ok(table
            .rows
            .values()
            .find(|u| u.username.as_ref() == Some(username))
            .cloned())
    }

    async fn exists_by_username(&self, username: &Username) -> DomainResult<bool> {
        Ok(self.find_by_username(username).await?.is_some())
    }

    async fn exists_by_slug(&self, slug: &UserSlug) -> DomainResult<bool> {
        Ok(self.find_by_slug(slug).await?.is_some())
    }

    async fn insert(&self, new_user: NewUser) -> DomainResult<User> {
        let mut table = self.inner.lock().unwrap();
        table.check_unique(Some(&new_user.username), Some(&new_user.slug), None)?;

        table.next_id += 1;
        let id = table.next_id;
        let user = User {
            id: UserId::new(id)?,
            username: Some(new_user.username),
            firstname: new_user.firstname,
            lastname: new_user.lastname,
            age: new_user.age,
            slug: new_user.slug,
        };
        table.rows.insert(id, user.clone());
        Ok(user)
    }

    async fn update(&self, update: UserUpdate) -> DomainResult<User> {
        if update.is_empty() {
            return Err(DomainError::Validation("no fields provided for update".into()));
        }

        let mut table = self.inner.lock().unwrap();
        let key = i64::from(update.id);
        if !table.rows.contains_key(&key) {
            return Err(DomainError::NotFound(USER_NOT_FOUND.into()));
        }
        table.check_unique(update.username.as_ref(), update.slug.as_ref(), Some(update.id))?;

        let user = table
            .rows
            .get_mut(&key)
            .ok_or_else(|| DomainError::NotFound(USER_NOT_FOUND.into()))?;

        if let Some(username) = update.username {
            user.username = Some(username);
        }
        if let Some(slug) = update.slug {
            user.slug = slug;
        }
        if let Some(firstname) = update.firstname {
            user.firstname = Some(firstname);
        }
        if let Some(lastname) = update.lastname {
            user.lastname = Some(lastname);
        }
        if let Some(age) = update.age {
            user.age = Some(age);
        }

        Ok(user.clone())
    }

    async fn delete(&self, id: UserId) -> DomainResult<()> {
        self.inner
            .lock()
            .unwrap()
            .rows
            .remove(&i64::from(id))
            .map(|_| ())
            .ok_or_else(|| DomainError::NotFound(USER_NOT_FOUND.into()))
    }
}

/// Simulates losing a race: existence checks always report "free", while
/// the wrapped table still enforces its constraints on write.
#[derive(Default)]
pub struct RacingUserRepo {
    pub table: InMemoryUserRepo,
}

#[async_trait]
impl UserRepository for RacingUserRepo {
    async fn list(&self) -> DomainResult<Vec<User>> {
        self.table.list().await
    }

    async fn find_by_id(&self, id: UserId) -> DomainResult<Option<User>> {
        self.table.find_by_id(id).await
    }

    async fn find_by_slug(&self, _slug: &UserSlug) -> DomainResult<Option<User>> {
        Ok(None)
    }

    async fn find_by_username(&self, _username: &Username) -> DomainResult<Option<User>> {
        Ok(None)
    }

    async fn exists_by_username(&self, _username: &Username) -> DomainResult<bool> {
        Ok(false)
    }

    async fn exists_by_slug(&self, _slug: &UserSlug) -> DomainResult<bool> {
        Ok(false)
    }

    async fn insert(&self, new_user: NewUser) -> DomainResult<User> {
        self.table.insert(new_user).await
    }

    async fn update(&self, update: UserUpdate) -> DomainResult<User> {
        self.table.update(update).await
    }

    async fn delete(&self, id: UserId) -> DomainResult<()> {
        self.table.delete(id).await
    }
}
