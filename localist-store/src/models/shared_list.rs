//! Shared lists
//!
//! A shared list is a task list visible to every user who joined it via its
//! 6-character share code. Codes are drawn at random from `[A-Z0-9]` and are
//! NOT checked against existing lists — the 36^6 space makes collisions
//! unlikely, and a colliding join matches the first list found in storage
//! order.

use chrono::{DateTime, Utc};
use rand::Rng;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::keys;
use crate::models::membership::Membership;
use crate::models::task::Task;
use crate::store::Store;

/// Alphabet share codes are drawn from
const CODE_CHARS: &[u8] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZ0123456789";

/// Length of a share code
const CODE_LEN: usize = 6;

/// Error type for joining a shared list
#[derive(Debug, thiserror::Error)]
pub enum JoinError {
    /// No list carries this share code
    #[error("invalid share code")]
    InvalidCode,
}

/// A task list shared between users
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SharedList {
    /// Unique list id
    pub id: Uuid,

    /// Display name
    pub name: String,

    /// 6-character join code, `[A-Z0-9]`
    pub share_code: String,

    /// The user who created the list
    pub owner_id: Uuid,

    /// When the list was created
    pub created_at: DateTime<Utc>,
}

/// Generates a share code: 6 characters drawn independently from `[A-Z0-9]`
///
/// Pure random generation; uniqueness is not checked anywhere.
pub fn generate_share_code() -> String {
    let mut rng = rand::thread_rng();
    (0..CODE_LEN)
        .map(|_| CODE_CHARS[rng.gen_range(0..CODE_CHARS.len())] as char)
        .collect()
}

impl SharedList {
    /// Returns every stored list
    pub fn list(store: &Store) -> Vec<Self> {
        store.read_array(keys::SHARED_LISTS)
    }

    /// Finds a list by id
    pub fn find_by_id(store: &Store, id: Uuid) -> Option<Self> {
        Self::list(store).into_iter().find(|l| l.id == id)
    }

    /// Returns the lists `user_id` is a member of, newest first
    pub fn list_for_user(store: &Store, user_id: Uuid) -> Vec<Self> {
        let memberships = Membership::list(store);
        Self::list(store)
            .into_iter()
            .filter(|l| {
                memberships
                    .iter()
                    .any(|m| m.list_id == l.id && m.user_id == user_id)
            })
            .collect()
    }

    /// Creates a list owned by `owner_id`, who becomes its first member
    pub fn create(store: &Store, name: impl Into<String>, owner_id: Uuid) -> Self {
        let list = SharedList {
            id: Uuid::new_v4(),
            name: name.into(),
            share_code: generate_share_code(),
            owner_id,
            created_at: Utc::now(),
        };

        let mut lists = Self::list(store);
        lists.insert(0, list.clone());
        store.write_array(keys::SHARED_LISTS, &lists);
        Membership::add(store, list.id, owner_id);

        tracing::info!(list_id = %list.id, "created shared list");
        list
    }

    /// Joins the list carrying `code`
    ///
    /// The code lookup is case-insensitive. Joining a list the user already
    /// belongs to is a no-op that still returns the list.
    ///
    /// # Errors
    ///
    /// Returns `JoinError::InvalidCode` when no list matches.
    pub fn join(store: &Store, code: &str, user_id: Uuid) -> Result<Self, JoinError> {
        let code = code.to_uppercase();
        let list = Self::list(store)
            .into_iter()
            .find(|l| l.share_code.to_uppercase() == code)
            .ok_or(JoinError::InvalidCode)?;

        Membership::add(store, list.id, user_id);
        Ok(list)
    }

    /// Deletes the list, cascading to its memberships and its tasks
    ///
    /// No ownership check happens here; restricting deletion to the owner is
    /// the caller's concern. Deleting a missing id is a no-op.
    pub fn delete(store: &Store, id: Uuid) {
        let lists: Vec<SharedList> = Self::list(store)
            .into_iter()
            .filter(|l| l.id != id)
            .collect();
        store.write_array(keys::SHARED_LISTS, &lists);

        Membership::remove_for_list(store, id);

        let tasks: Vec<Task> = store.read_array(keys::TASKS);
        let tasks: Vec<Task> = tasks
            .into_iter()
            .filter(|t| t.shared_list_id != Some(id))
            .collect();
        store.write_array(keys::TASKS, &tasks);
    }
}
