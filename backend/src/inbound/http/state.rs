//! Shared HTTP adapter state.
//!
//! HTTP handlers accept this state via `actix_web::web::Data` so they only
//! depend on the domain services and remain testable without I/O.

use std::sync::Arc;

use crate::domain::ports::{TaskRepository, UserRepository};
use crate::domain::{TaskService, UserService};

/// Dependency bundle for HTTP handlers.
#[derive(Clone)]
pub struct HttpState {
    /// User operations service.
    pub users: UserService,
    /// Task operations service.
    pub tasks: TaskService,
}

impl HttpState {
    /// Construct state from pre-built services.
    pub fn new(users: UserService, tasks: TaskService) -> Self {
        Self { users, tasks }
    }

    /// Construct state directly from repository implementations.
    ///
    /// # Examples
    /// ```
    /// use std::sync::Arc;
    ///
    /// use backend::domain::ports::{FixtureTaskRepository, FixtureUserRepository};
    /// use backend::inbound::http::state::HttpState;
    ///
    /// let state = HttpState::with_repositories(
    ///     Arc::new(FixtureUserRepository),
    ///     Arc::new(FixtureTaskRepository),
    /// );
    /// let _users = state.users.clone();
    /// ```
    pub fn with_repositories(
        user_repo: Arc<dyn UserRepository>,
        task_repo: Arc<dyn TaskRepository>,
    ) -> Self {
        Self {
            users: UserService::new(user_repo),
            tasks: TaskService::new(task_repo),
        }
    }
}
