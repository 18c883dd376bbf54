//! Persisted key layout
//!
//! Every record collection lives under a `synth:`-prefixed key, matching the
//! layout of the remote-backend substitute this store stands in for. The
//! reminder and habit keys are scoped outside the record namespace on purpose:
//! they belong to features that are independent of the main data model.

/// Prefix shared by every record-collection key
pub const RECORD_PREFIX: &str = "synth:";

/// Array of [`User`](crate::models::user::User)
pub const USERS: &str = "synth:users";

/// Id of the signed-in user, as a plain string
pub const CURRENT_USER: &str = "synth:currentUserId";

/// Array of [`Category`](crate::models::category::Category)
pub const CATEGORIES: &str = "synth:categories";

/// Array of [`Task`](crate::models::task::Task)
pub const TASKS: &str = "synth:tasks";

/// Array of [`SharedList`](crate::models::shared_list::SharedList)
pub const SHARED_LISTS: &str = "synth:shared_lists";

/// Array of [`Membership`](crate::models::membership::Membership)
pub const SHARED_LIST_MEMBERS: &str = "synth:shared_list_members";

/// "true"/"false" — whether the daily reminder is armed
pub const REMINDER_ENABLED: &str = "daily-reminder:enabled";

/// "HH:MM" — local wall-clock time of the daily reminder
pub const REMINDER_TIME: &str = "daily-reminder:time";

/// Per-day habit key prefix; the full key is `habit-tracker:YYYY-MM-DD`
pub const HABIT_PREFIX: &str = "habit-tracker:";
