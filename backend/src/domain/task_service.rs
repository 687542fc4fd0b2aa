//! Task domain service.
//!
//! Field validation runs in a fixed order before any store call; the
//! first failing check is the one reported. Update and delete perform an
//! existence pre-check that is not atomic with the subsequent write.

use std::sync::Arc;

use crate::domain::ports::{TaskRepository, TaskRepositoryError};
use crate::domain::{
    ApiResult, Error, NewTask, Task, TaskUpdate, DESCRIPTION_MAX_CHARS, TITLE_MAX_CHARS,
};

fn map_repository_error(error: TaskRepositoryError) -> Error {
    match error {
        TaskRepositoryError::Connection { message } => {
            Error::service_unavailable(format!("task repository unavailable: {message}"))
        }
        TaskRepositoryError::Query { message } => {
            Error::internal(format!("task repository error: {message}"))
        }
    }
}

/// Application service for task operations.
#[derive(Clone)]
pub struct TaskService {
    repo: Arc<dyn TaskRepository>,
}

impl TaskService {
    /// Create a new service with the task repository.
    pub fn new(repo: Arc<dyn TaskRepository>) -> Self {
        Self { repo }
    }

    /// List the tasks owned by a user, in the store's newest-first order.
    pub async fn get_tasks(&self, user_id: &str) -> ApiResult<Vec<Task>> {
        if user_id.trim().is_empty() {
            return Err(Error::invalid_request("User ID is required"));
        }

        self.repo
            .list_for_user(user_id)
            .await
            .map_err(map_repository_error)
    }

    /// Fetch a task by identifier.
    pub async fn get_task_by_id(&self, id: &str) -> ApiResult<Task> {
        if id.trim().is_empty() {
            return Err(Error::invalid_request("Task ID is required"));
        }

        self.repo
            .find_by_id(id)
            .await
            .map_err(map_repository_error)?
            .ok_or_else(|| Error::not_found("Task not found"))
    }

    /// Create a task after validating its fields.
    ///
    /// Blank checks trim their input; the length checks do not, so a title
    /// of exactly [`TITLE_MAX_CHARS`] visible characters padded with
    /// whitespace fails the length check.
    pub async fn create_task(&self, new_task: NewTask) -> ApiResult<Task> {
        if new_task.title.trim().is_empty() {
            return Err(Error::invalid_request("Task title is required"));
        }
        if new_task.description.trim().is_empty() {
            return Err(Error::invalid_request("Task description is required"));
        }
        if new_task.user_id.trim().is_empty() {
            return Err(Error::invalid_request("User ID is required"));
        }
        if new_task.title.chars().count() > TITLE_MAX_CHARS {
            return Err(Error::invalid_request(
                "Title must not exceed 100 characters",
            ));
        }
        if new_task.description.chars().count() > DESCRIPTION_MAX_CHARS {
            return Err(Error::invalid_request(
                "Description must not exceed 500 characters",
            ));
        }

        self.repo
            .create(&new_task)
            .await
            .map_err(map_repository_error)
    }

    /// Apply a partial update to an existing task.
    ///
    /// Only fields present in `update` are checked and merged; unlike
    /// creation there is no non-blank check, so an update may validly set
    /// title or description to a blank string.
    pub async fn update_task(&self, update: TaskUpdate) -> ApiResult<Task> {
        if update.id.trim().is_empty() {
            return Err(Error::invalid_request("Task ID is required"));
        }

        self.repo
            .find_by_id(&update.id)
            .await
            .map_err(map_repository_error)?
            .ok_or_else(|| Error::not_found("Task not found"))?;

        if let Some(title) = &update.title {
            if title.chars().count() > TITLE_MAX_CHARS {
                return Err(Error::invalid_request(
                    "Title must not exceed 100 characters",
                ));
            }
        }
        if let Some(description) = &update.description {
            if description.chars().count() > DESCRIPTION_MAX_CHARS {
                return Err(Error::invalid_request(
                    "Description must not exceed 500 characters",
                ));
            }
        }

        self.repo
            .update(&update)
            .await
            .map_err(map_repository_error)
    }

    /// Delete an existing task.
    pub async fn delete_task(&self, id: &str) -> ApiResult<()> {
        if id.trim().is_empty() {
            return Err(Error::invalid_request("Task ID is required"));
        }

        self.repo
            .find_by_id(id)
            .await
            .map_err(map_repository_error)?
            .ok_or_else(|| Error::not_found("Task not found"))?;

        self.repo.delete(id).await.map_err(map_repository_error)
    }
}

#[cfg(test)]
#[path = "task_service_tests.rs"]
mod tests;
