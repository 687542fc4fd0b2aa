//! PostgreSQL-backed `TaskRepository` implementation using Diesel ORM.
//!
//! The adapter owns id assignment and timestamp stamping; field validation
//! and existence pre-checks live in the service layer.

use async_trait::async_trait;
use chrono::Utc;
use diesel::prelude::*;
use diesel_async::RunQueryDsl;
use tracing::debug;
use uuid::Uuid;

use crate::domain::ports::{TaskRepository, TaskRepositoryError};
use crate::domain::{NewTask, Task, TaskUpdate};

use super::models::{NewTaskRow, TaskChangeset, TaskRow};
use super::pool::{DbPool, PoolError};
use super::schema::tasks;

/// Diesel-backed implementation of the `TaskRepository` port.
#[derive(Clone)]
pub struct DieselTaskRepository {
    pool: DbPool,
}

impl DieselTaskRepository {
    /// Create a new repository with the given connection pool.
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

/// Map pool errors to port errors.
fn map_pool_error(error: PoolError) -> TaskRepositoryError {
    match error {
        PoolError::Checkout { message } | PoolError::Build { message } => {
            TaskRepositoryError::connection(message)
        }
    }
}

/// Map Diesel errors to port errors, logging the underlying cause.
fn map_diesel_error(error: diesel::result::Error) -> TaskRepositoryError {
    use diesel::result::{DatabaseErrorKind, Error as DieselError};

    match &error {
        DieselError::DatabaseError(kind, info) => {
            debug!(?kind, message = info.message(), "diesel operation failed");
        }
        _ => debug!(
            error_type = %std::any::type_name_of_val(&error),
            "diesel operation failed"
        ),
    }

    match error {
        DieselError::DatabaseError(DatabaseErrorKind::ClosedConnection, _) => {
            TaskRepositoryError::connection("database connection error")
        }
        _ => TaskRepositoryError::query("database error"),
    }
}

fn row_to_task(row: TaskRow) -> Task {
    Task {
        id: row.id.to_string(),
        title: row.title,
        description: row.description,
        completed: row.completed,
        created_at: row.created_at,
        updated_at: row.updated_at,
        user_id: row.user_id,
    }
}

#[async_trait]
impl TaskRepository for DieselTaskRepository {
    async fn list_for_user(&self, user_id: &str) -> Result<Vec<Task>, TaskRepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        let rows: Vec<TaskRow> = tasks::table
            .filter(tasks::user_id.eq(user_id))
            .order(tasks::created_at.desc())
            .select(TaskRow::as_select())
            .load(&mut conn)
            .await
            .map_err(map_diesel_error)?;

        Ok(rows.into_iter().map(row_to_task).collect())
    }

    async fn find_by_id(&self, id: &str) -> Result<Option<Task>, TaskRepositoryError> {
        // Identifiers that do not parse as UUIDs cannot match any record.
        let Ok(uuid) = Uuid::parse_str(id) else {
            return Ok(None);
        };

        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        let row: Option<TaskRow> = tasks::table
            .find(uuid)
            .select(TaskRow::as_select())
            .first(&mut conn)
            .await
            .optional()
            .map_err(map_diesel_error)?;

        Ok(row.map(row_to_task))
    }

    async fn create(&self, new_task: &NewTask) -> Result<Task, TaskRepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        let new_row = NewTaskRow {
            id: Uuid::new_v4(),
            title: &new_task.title,
            description: &new_task.description,
            user_id: &new_task.user_id,
        };

        let row: TaskRow = diesel::insert_into(tasks::table)
            .values(&new_row)
            .returning(TaskRow::as_returning())
            .get_result(&mut conn)
            .await
            .map_err(map_diesel_error)?;

        Ok(row_to_task(row))
    }

    async fn update(&self, update: &TaskUpdate) -> Result<Task, TaskRepositoryError> {
        let uuid = Uuid::parse_str(&update.id)
            .map_err(|_| TaskRepositoryError::query("task id is not a valid UUID"))?;

        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        let changeset = TaskChangeset {
            title: update.title.as_deref(),
            description: update.description.as_deref(),
            completed: update.completed,
            updated_at: Utc::now(),
        };

        let row: TaskRow = diesel::update(tasks::table.find(uuid))
            .set(&changeset)
            .returning(TaskRow::as_returning())
            .get_result(&mut conn)
            .await
            .map_err(map_diesel_error)?;

        Ok(row_to_task(row))
    }

    async fn delete(&self, id: &str) -> Result<(), TaskRepositoryError> {
        let uuid = Uuid::parse_str(id)
            .map_err(|_| TaskRepositoryError::query("task id is not a valid UUID"))?;

        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        diesel::delete(tasks::table.find(uuid))
            .execute(&mut conn)
            .await
            .map(|_| ())
            .map_err(map_diesel_error)
    }
}
