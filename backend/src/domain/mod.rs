//! Domain model, services, and ports.
//!
//! Purpose: define the entities and the validation-and-orchestration
//! services at the core of the system, plus the capability contracts the
//! services require from storage collaborators. Everything here is
//! transport and persistence agnostic.

pub mod error;
pub mod ports;
pub mod task;
pub mod task_service;
pub mod user;
pub mod user_service;

pub use self::error::{Error, ErrorCode};
pub use self::task::{NewTask, Task, TaskUpdate, DESCRIPTION_MAX_CHARS, TITLE_MAX_CHARS};
pub use self::task_service::TaskService;
pub use self::user::{email_shape_is_valid, NewUser, User, UserLookup};
pub use self::user_service::UserService;

/// Convenient result alias for domain operations.
///
/// # Examples
/// ```
/// use backend::domain::{ApiResult, Error};
///
/// fn validate(title: &str) -> ApiResult<()> {
///     if title.trim().is_empty() {
///         return Err(Error::invalid_request("Task title is required"));
///     }
///     Ok(())
/// }
/// ```
pub type ApiResult<T> = Result<T, Error>;
