//! Task categories
//!
//! Five fixed defaults are seeded the first time the collection is read;
//! after that the set is immutable from the application's perspective — no
//! edit or delete is exposed.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::keys;
use crate::store::Store;

/// A task category
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Category {
    /// Unique category id
    pub id: Uuid,

    /// Display name
    pub name: String,

    /// Hex color, e.g. `#2563eb`
    pub color: String,
}

impl Category {
    /// Returns all categories, seeding the defaults once if none exist
    pub fn list(store: &Store) -> Vec<Self> {
        ensure_defaults(store);
        store.read_array(keys::CATEGORIES)
    }

    /// Finds a category by id
    pub fn find_by_id(store: &Store, id: Uuid) -> Option<Self> {
        Self::list(store).into_iter().find(|c| c.id == id)
    }

    /// Returns an emoji for the category, matched on name keywords
    pub fn emoji(&self) -> &'static str {
        let name = self.name.to_lowercase();
        if name.contains("travail") {
            "\u{1F4BC}" // 💼
        } else if name.contains("étude") || name.contains("etude") || name.contains("study") {
            "\u{1F4DA}" // 📚
        } else if name.contains("maison") || name.contains("home") {
            "\u{1F3E0}" // 🏠
        } else if name.contains("sport") {
            "\u{1F3C3}" // 🏃
        } else if name.contains("vie") || name.contains("personnelle") || name.contains("perso") {
            "\u{1F31F}" // 🌟
        } else {
            "\u{2728}" // ✨
        }
    }
}

/// Seeds the default categories if the collection is empty
fn ensure_defaults(store: &Store) {
    let existing: Vec<Category> = store.read_array(keys::CATEGORIES);
    if !existing.is_empty() {
        return;
    }

    let defaults = [
        ("Travail", "#2563eb"),
        ("Étude", "#7c3aed"),
        ("Maison", "#059669"),
        ("Sport", "#dc2626"),
        ("Vie personnelle", "#f59e0b"),
    ];

    let categories: Vec<Category> = defaults
        .iter()
        .map(|(name, color)| Category {
            id: Uuid::new_v4(),
            name: name.to_string(),
            color: color.to_string(),
        })
        .collect();

    tracing::info!("seeding default categories");
    store.write_array(keys::CATEGORIES, &categories);
}
