//! PostgreSQL persistence adapters using Diesel ORM.
//!
//! Concrete implementations of the domain repository ports, backed by
//! PostgreSQL via `diesel-async` with `bb8` connection pooling.
//!
//! The adapters stay thin: they translate between Diesel row structs and
//! domain types and map database failures onto the port error types. Row
//! structs (`models.rs`) and table definitions (`schema.rs`) are internal
//! and never exposed to the domain layer.

mod diesel_task_repository;
mod diesel_user_repository;
mod models;
mod pool;
mod schema;

pub use diesel_task_repository::DieselTaskRepository;
pub use diesel_user_repository::DieselUserRepository;
pub use pool::{DbPool, PoolConfig, PoolError};
