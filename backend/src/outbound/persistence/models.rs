//! Internal Diesel row structs for database operations.
//!
//! These types are implementation details of the persistence layer and must
//! never be exposed to the domain. They exist solely to satisfy Diesel's
//! type requirements for queries and mutations.

use chrono::{DateTime, Utc};
use diesel::prelude::*;
use uuid::Uuid;

use super::schema::{tasks, users};

/// Row struct for reading from the users table.
#[derive(Debug, Clone, Queryable, Selectable)]
#[diesel(table_name = users)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub(crate) struct UserRow {
    pub id: Uuid,
    pub email: String,
    pub created_at: DateTime<Utc>,
}

/// Insertable struct for creating new user records.
///
/// `created_at` is omitted so the database default supplies it.
#[derive(Debug, Clone, Insertable)]
#[diesel(table_name = users)]
pub(crate) struct NewUserRow<'a> {
    pub id: Uuid,
    pub email: &'a str,
}

/// Row struct for reading from the tasks table.
#[derive(Debug, Clone, Queryable, Selectable)]
#[diesel(table_name = tasks)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub(crate) struct TaskRow {
    pub id: Uuid,
    pub title: String,
    pub description: String,
    pub completed: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: Option<DateTime<Utc>>,
    pub user_id: String,
}

/// Insertable struct for creating new task records.
///
/// `completed` and `created_at` are omitted so the database defaults apply.
#[derive(Debug, Clone, Insertable)]
#[diesel(table_name = tasks)]
pub(crate) struct NewTaskRow<'a> {
    pub id: Uuid,
    pub title: &'a str,
    pub description: &'a str,
    pub user_id: &'a str,
}

/// Changeset struct for partial task updates.
///
/// `None` fields are skipped by Diesel, leaving the stored value intact;
/// `updated_at` is always stamped.
#[derive(Debug, Clone, AsChangeset)]
#[diesel(table_name = tasks)]
pub(crate) struct TaskChangeset<'a> {
    pub title: Option<&'a str>,
    pub description: Option<&'a str>,
    pub completed: Option<bool>,
    pub updated_at: DateTime<Utc>,
}
