//! HTTP inbound adapter exposing REST endpoints.

pub mod error;
pub mod health;
pub mod schemas;
pub mod state;
pub mod tasks;
pub mod users;

pub use error::ApiResult;
