//! Domain ports for storage collaborators.
//!
//! Services reach the managed store only through these capability
//! contracts; adapters in `outbound::persistence` implement them.

mod task_repository;
mod user_repository;

#[cfg(test)]
pub use task_repository::MockTaskRepository;
pub use task_repository::{FixtureTaskRepository, TaskRepository, TaskRepositoryError};
#[cfg(test)]
pub use user_repository::MockUserRepository;
pub use user_repository::{FixtureUserRepository, UserRepository, UserRepositoryError};
