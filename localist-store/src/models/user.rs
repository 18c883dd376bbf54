//! User records
//!
//! Users are created through [`crate::auth::sign_up`], which owns the
//! duplicate-email check and password hashing; this module only exposes
//! lookups. Accounts are never mutated and there is no delete-account flow.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::keys;
use crate::store::Store;

/// A user account
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct User {
    /// Unique user id
    pub id: Uuid,

    /// Email address; unique case-insensitively across all users
    pub email: String,

    /// Argon2id password hash in PHC string format
    pub password_hash: String,
}

impl User {
    /// Returns every stored user
    pub fn list(store: &Store) -> Vec<Self> {
        store.read_array(keys::USERS)
    }

    /// Finds a user by id
    pub fn find_by_id(store: &Store, id: Uuid) -> Option<Self> {
        Self::list(store).into_iter().find(|u| u.id == id)
    }

    /// Finds a user by email, case-insensitively
    pub fn find_by_email(store: &Store, email: &str) -> Option<Self> {
        let needle = email.to_lowercase();
        Self::list(store)
            .into_iter()
            .find(|u| u.email.to_lowercase() == needle)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn seed_user(store: &Store, email: &str) -> User {
        let user = User {
            id: Uuid::new_v4(),
            email: email.to_string(),
            password_hash: "$argon2id$test".to_string(),
        };
        let mut users = User::list(store);
        users.push(user.clone());
        store.write_array(keys::USERS, &users);
        user
    }

    #[test]
    fn test_find_by_email_is_case_insensitive() {
        let store = Store::in_memory();
        let user = seed_user(&store, "Someone@Example.com");

        let found = User::find_by_email(&store, "someone@example.COM").unwrap();
        assert_eq!(found.id, user.id);
    }

    #[test]
    fn test_find_by_id_missing_is_none() {
        let store = Store::in_memory();
        seed_user(&store, "a@x.com");
        assert!(User::find_by_id(&store, Uuid::new_v4()).is_none());
    }
}
