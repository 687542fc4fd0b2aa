//! Port abstraction for user persistence adapters and their errors.

use async_trait::async_trait;
use chrono::Utc;
use uuid::Uuid;

use crate::domain::{NewUser, User, UserLookup};

/// Persistence errors raised by user repository adapters.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum UserRepositoryError {
    /// Repository connection could not be established.
    #[error("user repository connection failed: {message}")]
    Connection { message: String },
    /// Query or mutation failed during execution.
    #[error("user repository query failed: {message}")]
    Query { message: String },
}

impl UserRepositoryError {
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

/// Port for user persistence.
///
/// The store owns id assignment and `created_at` stamping; this layer only
/// supplies validated input.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Look up a user by e-mail address.
    async fn check_user_exists(&self, email: &str) -> Result<UserLookup, UserRepositoryError>;

    /// Persist a new user, returning the stored record.
    async fn create(&self, new_user: &NewUser) -> Result<User, UserRepositoryError>;

    /// Fetch a user by identifier.
    async fn find_by_id(&self, id: &str) -> Result<Option<User>, UserRepositoryError>;
}

/// Fixture implementation for code paths that do not exercise persistence.
///
/// Lookups always miss; creation fabricates a record the way a real store
/// would (fresh id, current timestamp).
#[derive(Debug, Default, Clone, Copy)]
pub struct FixtureUserRepository;

#[async_trait]
impl UserRepository for FixtureUserRepository {
    async fn check_user_exists(&self, _email: &str) -> Result<UserLookup, UserRepositoryError> {
        Ok(UserLookup::missing())
    }

    async fn create(&self, new_user: &NewUser) -> Result<User, UserRepositoryError> {
        Ok(User {
            id: Uuid::new_v4().to_string(),
            email: new_user.email.clone(),
            created_at: Utc::now(),
        })
    }

    async fn find_by_id(&self, _id: &str) -> Result<Option<User>, UserRepositoryError> {
        Ok(None)
    }
}
