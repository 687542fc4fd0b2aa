//! User domain service.
//!
//! Validates inputs and enforces the duplicate-e-mail rule before
//! delegating storage operations to the injected repository.

use std::sync::Arc;

use crate::domain::ports::{UserRepository, UserRepositoryError};
use crate::domain::{email_shape_is_valid, ApiResult, Error, NewUser, User, UserLookup};

fn map_repository_error(error: UserRepositoryError) -> Error {
    match error {
        UserRepositoryError::Connection { message } => {
            Error::service_unavailable(format!("user repository unavailable: {message}"))
        }
        UserRepositoryError::Query { message } => {
            Error::internal(format!("user repository error: {message}"))
        }
    }
}

/// Application service for user operations.
///
/// Stateless aside from the injected repository reference; validation runs
/// before any store call, and every failure aborts the operation whole.
#[derive(Clone)]
pub struct UserService {
    repo: Arc<dyn UserRepository>,
}

impl UserService {
    /// Create a new service with the user repository.
    pub fn new(repo: Arc<dyn UserRepository>) -> Self {
        Self { repo }
    }

    /// Look up whether a user with the given e-mail address exists.
    ///
    /// Returns the repository's lookup result unchanged.
    pub async fn check_user_exists(&self, email: &str) -> ApiResult<UserLookup> {
        if !email_shape_is_valid(email) {
            return Err(Error::invalid_request("Invalid email format"));
        }

        self.repo
            .check_user_exists(email)
            .await
            .map_err(map_repository_error)
    }

    /// Create a user after checking the e-mail is well-formed and unused.
    ///
    /// The existence check and the creation are two separate store
    /// round-trips; concurrent creates for the same e-mail can both pass
    /// the check.
    pub async fn create_user(&self, new_user: NewUser) -> ApiResult<User> {
        if !email_shape_is_valid(&new_user.email) {
            return Err(Error::invalid_request("Invalid email format"));
        }

        let existing = self
            .repo
            .check_user_exists(&new_user.email)
            .await
            .map_err(map_repository_error)?;
        if existing.exists {
            return Err(Error::conflict("User already exists"));
        }

        self.repo
            .create(&new_user)
            .await
            .map_err(map_repository_error)
    }

    /// Fetch a user by identifier.
    pub async fn get_user_by_id(&self, id: &str) -> ApiResult<User> {
        if id.trim().is_empty() {
            return Err(Error::invalid_request("User ID is required"));
        }

        self.repo
            .find_by_id(id)
            .await
            .map_err(map_repository_error)?
            .ok_or_else(|| Error::not_found("User not found"))
    }
}

#[cfg(test)]
#[path = "user_service_tests.rs"]
mod tests;
