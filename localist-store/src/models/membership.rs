//! Shared-list memberships
//!
//! A membership is a bare (list, user) pair — no surrogate key, no role.
//! At most one row exists per pair, enforced by an existence check before
//! insert rather than a uniqueness constraint.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::keys;
use crate::store::Store;

/// A user's membership in a shared list
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Membership {
    /// The shared list
    pub list_id: Uuid,

    /// The member
    pub user_id: Uuid,
}

impl Membership {
    /// Returns every membership row
    pub fn list(store: &Store) -> Vec<Self> {
        store.read_array(keys::SHARED_LIST_MEMBERS)
    }

    /// True when `user_id` is a member of `list_id`
    pub fn exists(store: &Store, list_id: Uuid, user_id: Uuid) -> bool {
        Self::list(store)
            .iter()
            .any(|m| m.list_id == list_id && m.user_id == user_id)
    }

    /// Adds a membership unless the pair already exists
    ///
    /// Returns whether a row was inserted.
    pub fn add(store: &Store, list_id: Uuid, user_id: Uuid) -> bool {
        let mut members = Self::list(store);
        if members
            .iter()
            .any(|m| m.list_id == list_id && m.user_id == user_id)
        {
            return false;
        }
        members.push(Membership { list_id, user_id });
        store.write_array(keys::SHARED_LIST_MEMBERS, &members);
        true
    }

    /// Removes every membership of `list_id` (cascade on list deletion)
    pub fn remove_for_list(store: &Store, list_id: Uuid) {
        let members: Vec<Membership> = Self::list(store)
            .into_iter()
            .filter(|m| m.list_id != list_id)
            .collect();
        store.write_array(keys::SHARED_LIST_MEMBERS, &members);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_add_is_idempotent_per_pair() {
        let store = Store::in_memory();
        let list = Uuid::new_v4();
        let user = Uuid::new_v4();

        assert!(Membership::add(&store, list, user));
        assert!(!Membership::add(&store, list, user));

        let count = Membership::list(&store)
            .iter()
            .filter(|m| m.list_id == list && m.user_id == user)
            .count();
        assert_eq!(count, 1);
    }

    #[test]
    fn test_remove_for_list_keeps_other_lists() {
        let store = Store::in_memory();
        let list_a = Uuid::new_v4();
        let list_b = Uuid::new_v4();
        let user = Uuid::new_v4();
        Membership::add(&store, list_a, user);
        Membership::add(&store, list_b, user);

        Membership::remove_for_list(&store, list_a);

        assert!(!Membership::exists(&store, list_a, user));
        assert!(Membership::exists(&store, list_b, user));
    }
}
