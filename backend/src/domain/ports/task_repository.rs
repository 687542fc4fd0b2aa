//! Port abstraction for task persistence adapters and their errors.

use async_trait::async_trait;
use chrono::Utc;
use uuid::Uuid;

use crate::domain::{NewTask, Task, TaskUpdate};

/// Persistence errors raised by task repository adapters.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum TaskRepositoryError {
    /// Repository connection could not be established.
    #[error("task repository connection failed: {message}")]
    Connection { message: String },
    /// Query or mutation failed during execution.
    #[error("task repository query failed: {message}")]
    Query { message: String },
}

impl TaskRepositoryError {
    /// Create a connection error with the given message.
    pub fn connection(message: impl Into<String>) -> Self {
        Self::Connection {
            message: message.into(),
        }
    }

    /// Create a query error with the given message.
    pub fn query(message: impl Into<String>) -> Self {
        Self::Query {
            message: message.into(),
        }
    }
}

/// Port for task persistence.
///
/// The store owns id assignment, the `completed = false` default, and both
/// timestamp stamps. `list_for_user` returns newest-created first.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait TaskRepository: Send + Sync {
    /// List the tasks owned by a user, newest-created first.
    async fn list_for_user(&self, user_id: &str) -> Result<Vec<Task>, TaskRepositoryError>;

    /// Fetch a task by identifier.
    async fn find_by_id(&self, id: &str) -> Result<Option<Task>, TaskRepositoryError>;

    /// Persist a new task, returning the stored record.
    async fn create(&self, new_task: &NewTask) -> Result<Task, TaskRepositoryError>;

    /// Merge the present fields of `update` into the stored task and stamp
    /// `updated_at`, returning the merged record.
    async fn update(&self, update: &TaskUpdate) -> Result<Task, TaskRepositoryError>;

    /// Delete a task by identifier.
    async fn delete(&self, id: &str) -> Result<(), TaskRepositoryError>;
}

/// Fixture implementation for code paths that do not exercise persistence.
#[derive(Debug, Default, Clone, Copy)]
pub struct FixtureTaskRepository;

#[async_trait]
impl TaskRepository for FixtureTaskRepository {
    async fn list_for_user(&self, _user_id: &str) -> Result<Vec<Task>, TaskRepositoryError> {
        Ok(Vec::new())
    }

    async fn find_by_id(&self, _id: &str) -> Result<Option<Task>, TaskRepositoryError> {
        Ok(None)
    }

    async fn create(&self, new_task: &NewTask) -> Result<Task, TaskRepositoryError> {
        Ok(Task {
            id: Uuid::new_v4().to_string(),
            title: new_task.title.clone(),
            description: new_task.description.clone(),
            completed: false,
            created_at: Utc::now(),
            updated_at: None,
            user_id: new_task.user_id.clone(),
        })
    }

    async fn update(&self, update: &TaskUpdate) -> Result<Task, TaskRepositoryError> {
        Ok(Task {
            id: update.id.clone(),
            title: update.title.clone().unwrap_or_default(),
            description: update.description.clone().unwrap_or_default(),
            completed: update.completed.unwrap_or(false),
            created_at: Utc::now(),
            updated_at: Some(Utc::now()),
            user_id: String::new(),
        })
    }

    async fn delete(&self, _id: &str) -> Result<(), TaskRepositoryError> {
        Ok(())
    }
}
