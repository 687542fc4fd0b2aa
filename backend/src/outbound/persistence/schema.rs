//! Diesel table definitions for the PostgreSQL schema.
//!
//! These definitions must match the database migrations exactly. They are
//! used by Diesel for compile-time query validation and type-safe SQL
//! generation; regenerate with `diesel print-schema` after a migration.

diesel::table! {
    /// Registered users.
    ///
    /// The `id` column is the primary key (UUID v4, assigned by the
    /// adapter). E-mail uniqueness is enforced by the service layer, not
    /// by an index, so the column intentionally carries no constraint.
    users (id) {
        /// Primary key: UUID v4 identifier.
        id -> Uuid,
        /// E-mail address as submitted at registration.
        email -> Varchar,
        /// Record creation timestamp.
        created_at -> Timestamptz,
    }
}

diesel::table! {
    /// Tasks owned by users.
    ///
    /// `user_id` stores the owner's identifier as free text with no
    /// foreign key; tasks may reference users that do not exist.
    tasks (id) {
        /// Primary key: UUID v4 identifier.
        id -> Uuid,
        /// Task title (validated to 100 characters by the service layer).
        #[max_length = 100]
        title -> Varchar,
        /// Task description (validated to 500 characters by the service layer).
        #[max_length = 500]
        description -> Varchar,
        /// Completion flag, false on creation.
        completed -> Bool,
        /// Record creation timestamp.
        created_at -> Timestamptz,
        /// Last modification timestamp, null until the first update.
        updated_at -> Nullable<Timestamptz>,
        /// Owner identifier, stored as submitted.
        user_id -> Varchar,
    }
}
