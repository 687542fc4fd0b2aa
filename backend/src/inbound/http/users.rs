//! Users API handlers.
//!
//! ```text
//! GET /api/users/check?email=ada@example.com
//! POST /api/users {"email":"ada@example.com"}
//! GET /api/users/42
//! ```

use actix_web::{get, post, web, HttpResponse};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::{Error, NewUser, User, UserLookup};
use crate::inbound::http::schemas::ErrorSchema;
use crate::inbound::http::state::HttpState;
use crate::inbound::http::ApiResult;

/// Query parameters for `GET /api/users/check`.
#[derive(Deserialize, utoipa::IntoParams)]
pub struct CheckUserQuery {
    /// Email address to look up.
    pub email: Option<String>,
}

/// Request body for `POST /api/users`.
///
/// Example JSON: `{"email":"ada@example.com"}`
#[derive(Deserialize, Serialize, utoipa::ToSchema)]
pub struct CreateUserRequest {
    pub email: Option<String>,
}

/// User representation returned to clients.
#[derive(Serialize, utoipa::ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UserResponseBody {
    pub id: String,
    pub email: String,
    /// Creation timestamp in RFC 3339 format.
    #[schema(value_type = String, example = "2026-08-20T12:00:00Z")]
    pub created_at: DateTime<Utc>,
}

impl From<User> for UserResponseBody {
    fn from(user: User) -> Self {
        Self {
            id: user.id,
            email: user.email,
            created_at: user.created_at,
        }
    }
}

/// Response body for `GET /api/users/check`.
#[derive(Serialize, utoipa::ToSchema)]
pub struct CheckUserResponseBody {
    pub exists: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user: Option<UserResponseBody>,
}

impl From<UserLookup> for CheckUserResponseBody {
    fn from(lookup: UserLookup) -> Self {
        Self {
            exists: lookup.exists,
            user: lookup.user.map(UserResponseBody::from),
        }
    }
}

fn require_present(value: Option<String>, message: &str) -> Result<String, Error> {
    match value {
        Some(value) if !value.is_empty() => Ok(value),
        _ => Err(Error::invalid_request(message)),
    }
}

/// Check whether a user with the given email already exists.
#[utoipa::path(
    get,
    path = "/api/users/check",
    params(CheckUserQuery),
    responses(
        (status = 200, description = "Lookup result", body = CheckUserResponseBody),
        (status = 400, description = "Missing or malformed email", body = ErrorSchema),
        (status = 500, description = "Internal server error", body = ErrorSchema),
        (status = 503, description = "Store unavailable", body = ErrorSchema)
    ),
    tags = ["users"],
    operation_id = "checkUser"
)]
#[get("/users/check")]
pub async fn check_user(
    state: web::Data<HttpState>,
    query: web::Query<CheckUserQuery>,
) -> ApiResult<web::Json<CheckUserResponseBody>> {
    let email = require_present(query.into_inner().email, "Email is required")?;
    let lookup = state.users.check_user_exists(&email).await?;
    Ok(web::Json(lookup.into()))
}

/// Register a new user.
#[utoipa::path(
    post,
    path = "/api/users",
    request_body = CreateUserRequest,
    responses(
        (status = 201, description = "User created", body = UserResponseBody),
        (status = 400, description = "Missing or malformed email", body = ErrorSchema),
        (status = 409, description = "Email already registered", body = ErrorSchema),
        (status = 500, description = "Internal server error", body = ErrorSchema),
        (status = 503, description = "Store unavailable", body = ErrorSchema)
    ),
    tags = ["users"],
    operation_id = "createUser"
)]
#[post("/users")]
pub async fn create_user(
    state: web::Data<HttpState>,
    payload: web::Json<CreateUserRequest>,
) -> ApiResult<HttpResponse> {
    let email = require_present(payload.into_inner().email, "Email is required")?;
    let user = state.users.create_user(NewUser { email }).await?;
    Ok(HttpResponse::Created().json(UserResponseBody::from(user)))
}

/// Fetch a single user by identifier.
#[utoipa::path(
    get,
    path = "/api/users/{id}",
    params(("id" = String, Path, description = "User identifier")),
    responses(
        (status = 200, description = "User", body = UserResponseBody),
        (status = 400, description = "Blank identifier", body = ErrorSchema),
        (status = 404, description = "User not found", body = ErrorSchema),
        (status = 500, description = "Internal server error", body = ErrorSchema),
        (status = 503, description = "Store unavailable", body = ErrorSchema)
    ),
    tags = ["users"],
    operation_id = "getUser"
)]
#[get("/users/{id}")]
pub async fn get_user(
    state: web::Data<HttpState>,
    path: web::Path<String>,
) -> ApiResult<web::Json<UserResponseBody>> {
    let user = state.users.get_user_by_id(&path.into_inner()).await?;
    Ok(web::Json(user.into()))
}

#[cfg(test)]
#[path = "users_tests.rs"]
mod tests;
