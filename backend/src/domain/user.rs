//! User domain model.
//!
//! Users are created once and never mutated: the store assigns `id` and
//! stamps `created_at`, and no update or delete operation exists for them.

use chrono::{DateTime, Utc};

/// A registered user.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct User {
    /// Opaque identifier assigned by the store on creation.
    pub id: String,
    /// Unique e-mail address in `local@domain.tld` shape.
    pub email: String,
    /// Creation timestamp stamped by the store.
    pub created_at: DateTime<Utc>,
}

/// Input shape for creating a user.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewUser {
    /// E-mail address for the new account.
    pub email: String,
}

/// Result of an existence check by e-mail address.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserLookup {
    /// Whether a user with the queried e-mail exists.
    pub exists: bool,
    /// The matching user record, when one exists.
    pub user: Option<User>,
}

impl UserLookup {
    /// Lookup result for an unknown e-mail address.
    #[must_use]
    pub fn missing() -> Self {
        Self {
            exists: false,
            user: None,
        }
    }

    /// Lookup result for a known user.
    #[must_use]
    pub fn found(user: User) -> Self {
        Self {
            exists: true,
            user: Some(user),
        }
    }
}

/// Check whether an e-mail address has the accepted `local@domain.tld`
/// shape: no whitespace, exactly one `@`, a non-empty local part, and a
/// domain containing a dot that is neither its first nor last character.
///
/// # Examples
/// ```
/// use backend::domain::email_shape_is_valid;
///
/// assert!(email_shape_is_valid("ada@example.com"));
/// assert!(!email_shape_is_valid("ada@example"));
/// ```
#[must_use]
pub fn email_shape_is_valid(email: &str) -> bool {
    if email.chars().any(char::is_whitespace) {
        return false;
    }
    let mut parts = email.splitn(2, '@');
    let (Some(local), Some(domain)) = (parts.next(), parts.next()) else {
        return false;
    };
    if local.is_empty() || domain.contains('@') {
        return false;
    }
    domain
        .char_indices()
        .any(|(index, ch)| ch == '.' && index > 0 && index + 1 < domain.len())
}
