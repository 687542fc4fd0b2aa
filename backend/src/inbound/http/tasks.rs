//! Tasks API handlers.
//!
//! ```text
//! GET /api/tasks?userId=42
//! POST /api/tasks {"title":"Buy milk","description":"2 litres","userId":"42"}
//! GET /api/tasks/7
//! PUT /api/tasks/7 {"completed":true}
//! DELETE /api/tasks/7
//! ```

use actix_web::{delete, get, post, put, web, HttpResponse};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::{Error, NewTask, Task, TaskUpdate};
use crate::inbound::http::schemas::ErrorSchema;
use crate::inbound::http::state::HttpState;
use crate::inbound::http::ApiResult;

/// Query parameters for `GET /api/tasks`.
#[derive(Deserialize, utoipa::IntoParams)]
pub struct ListTasksQuery {
    /// Owner whose tasks should be listed.
    #[serde(rename = "userId")]
    pub user_id: Option<String>,
}

/// Request body for `POST /api/tasks`.
///
/// Example JSON:
/// `{"title":"Buy milk","description":"2 litres","userId":"42"}`
#[derive(Deserialize, Serialize, utoipa::ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateTaskRequest {
    pub title: Option<String>,
    pub description: Option<String>,
    pub user_id: Option<String>,
}

/// Request body for `PUT /api/tasks/{id}`.
///
/// Omitted fields keep their stored values.
#[derive(Deserialize, Serialize, Default, utoipa::ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpdateTaskRequest {
    pub title: Option<String>,
    pub description: Option<String>,
    pub completed: Option<bool>,
}

/// Task representation returned to clients.
#[derive(Serialize, utoipa::ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct TaskResponseBody {
    pub id: String,
    pub title: String,
    pub description: String,
    pub completed: bool,
    /// Creation timestamp in RFC 3339 format.
    #[schema(value_type = String, example = "2026-08-20T12:00:00Z")]
    pub created_at: DateTime<Utc>,
    /// Last modification timestamp, absent until the first update.
    #[serde(skip_serializing_if = "Option::is_none")]
    #[schema(value_type = Option<String>, example = "2026-08-21T09:30:00Z")]
    pub updated_at: Option<DateTime<Utc>>,
    pub user_id: String,
}

impl From<Task> for TaskResponseBody {
    fn from(task: Task) -> Self {
        Self {
            id: task.id,
            title: task.title,
            description: task.description,
            completed: task.completed,
            created_at: task.created_at,
            updated_at: task.updated_at,
            user_id: task.user_id,
        }
    }
}

fn tasks_to_bodies(tasks: Vec<Task>) -> Vec<TaskResponseBody> {
    tasks.into_iter().map(TaskResponseBody::from).collect()
}

/// List a user's tasks, newest first.
#[utoipa::path(
    get,
    path = "/api/tasks",
    params(ListTasksQuery),
    responses(
        (status = 200, description = "Tasks owned by the user", body = [TaskResponseBody]),
        (status = 400, description = "Missing userId", body = ErrorSchema),
        (status = 500, description = "Internal server error", body = ErrorSchema),
        (status = 503, description = "Store unavailable", body = ErrorSchema)
    ),
    tags = ["tasks"],
    operation_id = "listTasks"
)]
#[get("/tasks")]
pub async fn list_tasks(
    state: web::Data<HttpState>,
    query: web::Query<ListTasksQuery>,
) -> ApiResult<web::Json<Vec<TaskResponseBody>>> {
    let user_id = query.into_inner().user_id.unwrap_or_default();
    let tasks = state.tasks.get_tasks(&user_id).await?;
    Ok(web::Json(tasks_to_bodies(tasks)))
}

/// Create a task for a user.
#[utoipa::path(
    post,
    path = "/api/tasks",
    request_body = CreateTaskRequest,
    responses(
        (status = 201, description = "Task created", body = TaskResponseBody),
        (status = 400, description = "Missing or invalid fields", body = ErrorSchema),
        (status = 500, description = "Internal server error", body = ErrorSchema),
        (status = 503, description = "Store unavailable", body = ErrorSchema)
    ),
    tags = ["tasks"],
    operation_id = "createTask"
)]
#[post("/tasks")]
pub async fn create_task(
    state: web::Data<HttpState>,
    payload: web::Json<CreateTaskRequest>,
) -> ApiResult<HttpResponse> {
    let body = payload.into_inner();
    let (Some(title), Some(description), Some(user_id)) =
        (body.title, body.description, body.user_id)
    else {
        return Err(Error::invalid_request(
            "Title, description, and userId are required",
        ));
    };
    let task = state
        .tasks
        .create_task(NewTask {
            title,
            description,
            user_id,
        })
        .await?;
    Ok(HttpResponse::Created().json(TaskResponseBody::from(task)))
}

/// Fetch a single task by identifier.
#[utoipa::path(
    get,
    path = "/api/tasks/{id}",
    params(("id" = String, Path, description = "Task identifier")),
    responses(
        (status = 200, description = "Task", body = TaskResponseBody),
        (status = 400, description = "Blank identifier", body = ErrorSchema),
        (status = 404, description = "Task not found", body = ErrorSchema),
        (status = 500, description = "Internal server error", body = ErrorSchema),
        (status = 503, description = "Store unavailable", body = ErrorSchema)
    ),
    tags = ["tasks"],
    operation_id = "getTask"
)]
#[get("/tasks/{id}")]
pub async fn get_task(
    state: web::Data<HttpState>,
    path: web::Path<String>,
) -> ApiResult<web::Json<TaskResponseBody>> {
    let task = state.tasks.get_task_by_id(&path.into_inner()).await?;
    Ok(web::Json(task.into()))
}

/// Update fields on an existing task.
#[utoipa::path(
    put,
    path = "/api/tasks/{id}",
    params(("id" = String, Path, description = "Task identifier")),
    request_body = UpdateTaskRequest,
    responses(
        (status = 200, description = "Updated task", body = TaskResponseBody),
        (status = 400, description = "Blank identifier or invalid fields", body = ErrorSchema),
        (status = 404, description = "Task not found", body = ErrorSchema),
        (status = 500, description = "Internal server error", body = ErrorSchema),
        (status = 503, description = "Store unavailable", body = ErrorSchema)
    ),
    tags = ["tasks"],
    operation_id = "updateTask"
)]
#[put("/tasks/{id}")]
pub async fn update_task(
    state: web::Data<HttpState>,
    path: web::Path<String>,
    payload: web::Json<UpdateTaskRequest>,
) -> ApiResult<web::Json<TaskResponseBody>> {
    let body = payload.into_inner();
    let update = TaskUpdate {
        id: path.into_inner(),
        title: body.title,
        description: body.description,
        completed: body.completed,
    };
    let task = state.tasks.update_task(update).await?;
    Ok(web::Json(task.into()))
}

/// Delete a task.
#[utoipa::path(
    delete,
    path = "/api/tasks/{id}",
    params(("id" = String, Path, description = "Task identifier")),
    responses(
        (status = 204, description = "Task deleted"),
        (status = 400, description = "Blank identifier", body = ErrorSchema),
        (status = 404, description = "Task not found", body = ErrorSchema),
        (status = 500, description = "Internal server error", body = ErrorSchema),
        (status = 503, description = "Store unavailable", body = ErrorSchema)
    ),
    tags = ["tasks"],
    operation_id = "deleteTask"
)]
#[delete("/tasks/{id}")]
pub async fn delete_task(
    state: web::Data<HttpState>,
    path: web::Path<String>,
) -> ApiResult<HttpResponse> {
    state.tasks.delete_task(&path.into_inner()).await?;
    Ok(HttpResponse::NoContent().finish())
}

#[cfg(test)]
#[path = "tasks_tests.rs"]
mod tests;
