// src/domain/user/entity.rs
use crate::domain::user::value_objects::{Age, PersonName, UserId, UserSlug, Username};

#[derive(Debug, Clone)]
pub struct User {
    pub id: UserId,
    pub username: Option<Username>,
    pub firstname: Option<PersonName>,
    pub lastname: Option<PersonName>,
    pub age: Option<Age>,
    pub slug: UserSlug,
}

#[derive(Debug, Clone)]
pub struct NewUser {
    pub username: Username,
    pub firstname: Option<PersonName>,
    pub lastname: Option<PersonName>,
    pub age: Option<Age>,
    pub slug: UserSlug,
}

impl NewUser {
    pub fn new(username: Username, slug: UserSlug) -> Self {
        Self {
            username,
            firstname: None,
            lastname: None,
            age: None,
            slug,
        }
    }

    pub fn with_firstname(mut self, firstname: Option<PersonName>) -> Self {
        self.firstname = firstname;
        self
    }

    pub fn with_lastname(mut self, lastname: Option<PersonName>) -> Self {
        self.lastname = lastname;
        self
    }

    pub fn with_age(mut self, age: Option<Age>) -> Self {
        self.age = age;
        self
    }
}

/// Partial update. `None` leaves the stored column untouched.
#[derive(Debug, Clone)]
pub struct UserUpdate {
    pub id: UserId,
    pub username: Option<Username>,
    pub firstname: Option<PersonName>,
    pub lastname: Option<PersonName>,
    pub age: Option<Age>,
    pub slug: Option<UserSlug>,
}

impl UserUpdate {
    pub fn new(id: UserId) -> Self {
        Self {
            id,
            username: None,
            firstname: None,
            lastname: None,
            age: None,
            slug: None,
        }
    }

    /// Username and slug always travel together.
    pub fn with_username(mut self, username: Username, slug: UserSlug) -> Self {
        self.username = Some(username);
        self.slug = Some(slug);
        self
    }

    pub fn with_firstname(mut self, firstname: PersonName) -> Self {
        self.firstname = Some(firstname);
        self
    }

    pub fn with_lastname(mut self, lastname: PersonName) -> Self {
        self.lastname = Some(lastname);
        self
    }

    pub fn with_age(mut self, age: Age) -> Self {
        self.age = Some(age);
        self
    }

    pub fn is_empty(&self) -> bool {
        self.username.is_none()
            && self.firstname.is_none()
            && self.lastname.is_none()
            && self.age.is_none()
            && self.slug.is_none()
    }
}
