//! OpenAPI documentation configuration.
//!
//! Defines the [`ApiDoc`] struct which generates the OpenAPI specification
//! for the REST API: every HTTP endpoint from the inbound layer plus the
//! schema wrappers that describe domain types without coupling them to
//! utoipa.
//!
//! The generated specification is served by Swagger UI (debug builds) and
//! exported via `cargo run --bin openapi-dump` for external tooling.

use utoipa::OpenApi;

use crate::inbound::http::schemas::{ErrorCodeSchema, ErrorSchema};
use crate::inbound::http::tasks::{CreateTaskRequest, TaskResponseBody, UpdateTaskRequest};
use crate::inbound::http::users::{CheckUserResponseBody, CreateUserRequest, UserResponseBody};

/// OpenAPI document for the REST API.
/// Swagger UI is enabled in debug builds only and used by tooling.
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Task backend API",
        description = "HTTP interface for user registration and task management."
    ),
    servers(
        (url = "/", description = "Relative to the deployment base URL")
    ),
    paths(
        crate::inbound::http::users::check_user,
        crate::inbound::http::users::create_user,
        crate::inbound::http::users::get_user,
        crate::inbound::http::tasks::list_tasks,
        crate::inbound::http::tasks::create_task,
        crate::inbound::http::tasks::get_task,
        crate::inbound::http::tasks::update_task,
        crate::inbound::http::tasks::delete_task,
        crate::inbound::http::health::ready,
        crate::inbound::http::health::live,
    ),
    components(schemas(
        ErrorSchema,
        ErrorCodeSchema,
        UserResponseBody,
        CheckUserResponseBody,
        CreateUserRequest,
        TaskResponseBody,
        CreateTaskRequest,
        UpdateTaskRequest,
    )),
    tags(
        (name = "users", description = "Operations related to users"),
        (name = "tasks", description = "Operations related to tasks"),
        (name = "health", description = "Endpoints for health checks")
    )
)]
pub struct ApiDoc;
