//! Task records and repository operations
//!
//! A task lives in exactly one scope: a personal list (owned by a user) or a
//! shared list. The creation input encodes that choice as [`TaskScope`], so
//! the personal-XOR-shared invariant holds by construction; the stored record
//! keeps both nullable columns for the persisted layout.
//!
//! Inserts prepend, so the collection reads newest-first. There is no
//! pagination and no further ordering guarantee.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::keys;
use crate::store::Store;

/// Task priority
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum Priority {
    /// Needs attention now
    Urgent,

    /// Matters, but can wait
    Important,

    /// Everything else
    #[default]
    Normal,
}

impl Priority {
    /// Converts priority to its wire string
    pub fn as_str(&self) -> &'static str {
        match self {
            Priority::Urgent => "Urgent",
            Priority::Important => "Important",
            Priority::Normal => "Normal",
        }
    }

    /// True for the highest priority
    pub fn is_urgent(&self) -> bool {
        matches!(self, Priority::Urgent)
    }
}

/// Where a new task lives: a personal list or a shared list
///
/// Exactly one owner kind exists per task; encoding the choice as a sum type
/// keeps callers from setting both or neither.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TaskScope {
    /// Personal task owned by this user
    Personal(Uuid),

    /// Task on this shared list, visible to every member
    Shared(Uuid),
}

/// A to-do item
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Task {
    /// Unique task id
    pub id: Uuid,

    /// Short title
    pub title: String,

    /// Free-form note
    pub note: String,

    /// Whether the task is done
    pub is_completed: bool,

    /// Priority bucket
    pub priority: Priority,

    /// Optional reminder timestamp
    pub reminder: Option<DateTime<Utc>>,

    /// Category, if any
    pub category_id: Option<Uuid>,

    /// Owner when personal; null when the task is on a shared list
    pub user_id: Option<Uuid>,

    /// Shared list when shared; null when personal
    pub shared_list_id: Option<Uuid>,

    /// Who completed the task (null while open)
    pub completed_by: Option<Uuid>,

    /// When the task was completed (null while open)
    pub completed_at: Option<DateTime<Utc>>,

    /// When the task was created
    pub created_at: DateTime<Utc>,

    /// When the task was last updated
    pub updated_at: DateTime<Utc>,
}

/// Input for creating a new task
#[derive(Debug, Clone)]
pub struct CreateTask {
    /// Short title
    pub title: String,

    /// Free-form note
    pub note: String,

    /// Priority bucket (defaults to Normal)
    pub priority: Priority,

    /// Optional reminder timestamp
    pub reminder: Option<DateTime<Utc>>,

    /// Category, if any
    pub category_id: Option<Uuid>,

    /// Personal or shared ownership
    pub scope: TaskScope,
}

/// Input for updating a task
///
/// `None` leaves a field untouched. Nullable columns take a nested `Option`
/// so they can be cleared: `Some(None)` writes null, `Some(Some(v))` writes
/// a value.
#[derive(Debug, Clone, Default)]
pub struct UpdateTask {
    /// New title
    pub title: Option<String>,

    /// New note
    pub note: Option<String>,

    /// New completion flag
    ///
    /// The caller keeps `completed_by`/`completed_at` consistent when
    /// toggling through this field; [`Task::set_completed`] does the
    /// bookkeeping in one step.
    pub is_completed: Option<bool>,

    /// New priority
    pub priority: Option<Priority>,

    /// Set or clear the reminder
    pub reminder: Option<Option<DateTime<Utc>>>,

    /// Set or clear the category
    pub category_id: Option<Option<Uuid>>,

    /// Set or clear who completed the task
    pub completed_by: Option<Option<Uuid>>,

    /// Set or clear the completion timestamp
    pub completed_at: Option<Option<DateTime<Utc>>>,
}

impl Task {
    /// Lists tasks for a user, or for a shared list
    ///
    /// With `shared_list_id` given, returns every task on that list — any
    /// member sees all of them, `user_id` is not consulted. Otherwise
    /// returns the personal tasks of `user_id` (tasks with no shared-list
    /// association). Newest first.
    pub fn list(store: &Store, user_id: Uuid, shared_list_id: Option<Uuid>) -> Vec<Self> {
        let tasks: Vec<Task> = store.read_array(keys::TASKS);
        match shared_list_id {
            Some(list_id) => tasks
                .into_iter()
                .filter(|t| t.shared_list_id == Some(list_id))
                .collect(),
            None => tasks
                .into_iter()
                .filter(|t| t.user_id == Some(user_id) && t.shared_list_id.is_none())
                .collect(),
        }
    }

    /// Creates a new task and prepends it to the collection
    ///
    /// Assigns a fresh id and sets both timestamps to now. The task starts
    /// open, with the completion fields null.
    pub fn create(store: &Store, data: CreateTask) -> Self {
        let (user_id, shared_list_id) = match data.scope {
            TaskScope::Personal(user_id) => (Some(user_id), None),
            TaskScope::Shared(list_id) => (None, Some(list_id)),
        };

        let now = Utc::now();
        let task = Task {
            id: Uuid::new_v4(),
            title: data.title,
            note: data.note,
            is_completed: false,
            priority: data.priority,
            reminder: data.reminder,
            category_id: data.category_id,
            user_id,
            shared_list_id,
            completed_by: None,
            completed_at: None,
            created_at: now,
            updated_at: now,
        };

        let mut tasks: Vec<Task> = store.read_array(keys::TASKS);
        tasks.insert(0, task.clone());
        store.write_array(keys::TASKS, &tasks);
        task
    }

    /// Merges `updates` into the task and bumps `updated_at`
    ///
    /// Returns the updated record, or `None` (silently) when the id does not
    /// exist.
    pub fn update(store: &Store, id: Uuid, updates: UpdateTask) -> Option<Self> {
        let mut tasks: Vec<Task> = store.read_array(keys::TASKS);
        let task = tasks.iter_mut().find(|t| t.id == id)?;

        if let Some(title) = updates.title {
            task.title = title;
        }
        if let Some(note) = updates.note {
            task.note = note;
        }
        if let Some(is_completed) = updates.is_completed {
            task.is_completed = is_completed;
        }
        if let Some(priority) = updates.priority {
            task.priority = priority;
        }
        if let Some(reminder) = updates.reminder {
            task.reminder = reminder;
        }
        if let Some(category_id) = updates.category_id {
            task.category_id = category_id;
        }
        if let Some(completed_by) = updates.completed_by {
            task.completed_by = completed_by;
        }
        if let Some(completed_at) = updates.completed_at {
            task.completed_at = completed_at;
        }
        task.updated_at = Utc::now();

        let updated = task.clone();
        store.write_array(keys::TASKS, &tasks);
        Some(updated)
    }

    /// Toggles completion, keeping the completion fields consistent
    ///
    /// Completing sets `completed_by` to `by` and `completed_at` to now;
    /// reopening clears both. Returns `None` when the id does not exist.
    pub fn set_completed(store: &Store, id: Uuid, completed: bool, by: Uuid) -> Option<Self> {
        let (completed_by, completed_at) = if completed {
            (Some(by), Some(Utc::now()))
        } else {
            (None, None)
        };
        Self::update(
            store,
            id,
            UpdateTask {
                is_completed: Some(completed),
                completed_by: Some(completed_by),
                completed_at: Some(completed_at),
                ..UpdateTask::default()
            },
        )
    }

    /// Deletes the task; returns whether anything was removed
    pub fn delete(store: &Store, id: Uuid) -> bool {
        let tasks: Vec<Task> = store.read_array(keys::TASKS);
        let len_before = tasks.len();
        let remaining: Vec<Task> = tasks.into_iter().filter(|t| t.id != id).collect();
        if remaining.len() == len_before {
            return false;
        }
        store.write_array(keys::TASKS, &remaining);
        true
    }
}
