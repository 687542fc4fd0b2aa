//! PostgreSQL-backed `UserRepository` implementation using Diesel ORM.
//!
//! A thin adapter: it translates between Diesel rows and domain types and
//! maps database failures onto the port's error type. Validation and the
//! duplicate-e-mail rule live in the service layer.

use async_trait::async_trait;
use diesel::prelude::*;
use diesel_async::RunQueryDsl;
use tracing::debug;
use uuid::Uuid;

use crate::domain::ports::{UserRepository, UserRepositoryError};
use crate::domain::{NewUser, User, UserLookup};

use super::models::{NewUserRow, UserRow};
use super::pool::{DbPool, PoolError};
use super::schema::users;

/// Diesel-backed implementation of the `UserRepository` port.
#[derive(Clone)]
pub struct DieselUserRepository {
    pool: DbPool,
}

impl DieselUserRepository {
    /// Create a new repository with the given connection pool.
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

/// Map pool errors to port errors.
fn map_pool_error(error: PoolError) -> UserRepositoryError {
    match error {
        PoolError::Checkout { message } | PoolError::Build { message } => {
            UserRepositoryError::connection(message)
        }
    }
}

/// Map Diesel errors to port errors, logging the underlying cause.
fn map_diesel_error(error: diesel::result::Error) -> UserRepositoryError {
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
            UserRepositoryError::connection("database connection error")
        }
        _ => UserRepositoryError::query("database error"),
    }
}

fn row_to_user(row: UserRow) -> User {
    User {
        id: row.id.to_string(),
        email: row.email,
        created_at: row.created_at,
    }
}

#[async_trait]
impl UserRepository for DieselUserRepository {
    async fn check_user_exists(&self, email: &str) -> Result<UserLookup, UserRepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        let row: Option<UserRow> = users::table
            .filter(users::email.eq(email))
            .select(UserRow::as_select())
            .first(&mut conn)
            .await
            .optional()
            .map_err(map_diesel_error)?;

        Ok(row.map_or_else(UserLookup::missing, |row| {
            UserLookup::found(row_to_user(row))
        }))
    }

    async fn create(&self, new_user: &NewUser) -> Result<User, UserRepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        let new_row = NewUserRow {
            id: Uuid::new_v4(),
            email: &new_user.email,
        };

        let row: UserRow = diesel::insert_into(users::table)
            .values(&new_row)
            .returning(UserRow::as_returning())
            .get_result(&mut conn)
            .await
            .map_err(map_diesel_error)?;

        Ok(row_to_user(row))
    }

    async fn find_by_id(&self, id: &str) -> Result<Option<User>, UserRepositoryError> {
        // Identifiers that do not parse as UUIDs cannot match any record.
        let Ok(uuid) = Uuid::parse_str(id) else {
            return Ok(None);
        };

        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        let row: Option<UserRow> = users::table
            .find(uuid)
            .select(UserRow::as_select())
            .first(&mut conn)
            .await
            .optional()
            .map_err(map_diesel_error)?;

        Ok(row.map(row_to_user))
    }
}
