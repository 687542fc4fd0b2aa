//! Task domain model.
//!
//! A task always belongs to exactly one user; `user_id` is required at
//! creation and immutable afterwards. The ownership reference is not
//! validated against user existence at this layer.

use chrono::{DateTime, Utc};

/// Maximum accepted title length, measured untrimmed in characters.
pub const TITLE_MAX_CHARS: usize = 100;

/// Maximum accepted description length, measured untrimmed in characters.
pub const DESCRIPTION_MAX_CHARS: usize = 500;

/// A task owned by a single user.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Task {
    /// Opaque identifier assigned by the store on creation.
    pub id: String,
    /// Short summary, non-blank and at most [`TITLE_MAX_CHARS`] characters.
    pub title: String,
    /// Longer body, non-blank and at most [`DESCRIPTION_MAX_CHARS`] characters.
    pub description: String,
    /// Completion flag, `false` on creation.
    pub completed: bool,
    /// Creation timestamp stamped by the store.
    pub created_at: DateTime<Utc>,
    /// Stamped by the store on every update; absent until the first one.
    pub updated_at: Option<DateTime<Utc>>,
    /// Identifier of the owning user.
    pub user_id: String,
}

/// Input shape for creating a task.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewTask {
    /// Title for the new task.
    pub title: String,
    /// Description for the new task.
    pub description: String,
    /// Identifier of the owning user.
    pub user_id: String,
}

/// Partial-update input: absent fields are left unchanged by the store.
///
/// Each mutable field is independently present-or-absent so that "field
/// omitted" is distinguishable from "field explicitly set".
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TaskUpdate {
    /// Identifier of the task to update.
    pub id: String,
    /// Replacement title, when provided.
    pub title: Option<String>,
    /// Replacement description, when provided.
    pub description: Option<String>,
    /// Replacement completion flag, when provided.
    pub completed: Option<bool>,
}
