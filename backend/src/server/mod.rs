//! Server construction and route wiring.

mod config;

pub use config::ServerConfig;

use std::sync::Arc;

use actix_web::dev::{Server, ServiceFactory, ServiceRequest, ServiceResponse};
use actix_web::{web, App, HttpServer};

#[cfg(debug_assertions)]
use backend::doc::ApiDoc;
use backend::inbound::http::health::{live, ready, HealthState};
use backend::inbound::http::state::HttpState;
use backend::inbound::http::tasks::{create_task, delete_task, get_task, list_tasks, update_task};
use backend::inbound::http::users::{check_user, create_user, get_user};
use backend::outbound::persistence::{DieselTaskRepository, DieselUserRepository};
#[cfg(debug_assertions)]
use utoipa::OpenApi;
#[cfg(debug_assertions)]
use utoipa_swagger_ui::SwaggerUi;

/// Build handler state from configuration.
///
/// Uses database-backed repositories when a pool is available, otherwise
/// falls back to the in-memory fixtures so the server can still run
/// without a database (e.g. for local smoke tests).
fn build_http_state(config: &ServerConfig) -> HttpState {
    match &config.db_pool {
        Some(pool) => HttpState::with_repositories(
            Arc::new(DieselUserRepository::new(pool.clone())),
            Arc::new(DieselTaskRepository::new(pool.clone())),
        ),
        None => HttpState::with_repositories(
            Arc::new(backend::domain::ports::FixtureUserRepository),
            Arc::new(backend::domain::ports::FixtureTaskRepository),
        ),
    }
}

fn build_app(
    health_state: web::Data<HealthState>,
    http_state: web::Data<HttpState>,
) -> App<
    impl ServiceFactory<
        ServiceRequest,
        Config = (),
        Response = ServiceResponse,
        Error = actix_web::Error,
        InitError = (),
    >,
> {
    let api = web::scope("/api")
        .service(check_user)
        .service(create_user)
        .service(get_user)
        .service(list_tasks)
        .service(create_task)
        .service(get_task)
        .service(update_task)
        .service(delete_task);

    let app = App::new()
        .app_data(health_state)
        .app_data(http_state)
        .service(api)
        .service(ready)
        .service(live);

    #[cfg(debug_assertions)]
    let app = app.service(SwaggerUi::new("/docs").url("/api-docs/openapi.json", ApiDoc::openapi()));

    app
}

/// Construct an Actix HTTP server using the provided health state and
/// configuration.
///
/// # Errors
///
/// Propagates [`std::io::Error`] when binding the socket fails.
pub fn create_server(
    health_state: web::Data<HealthState>,
    config: ServerConfig,
) -> std::io::Result<Server> {
    let http_state = web::Data::new(build_http_state(&config));
    let server_health_state = health_state.clone();

    let server = HttpServer::new(move || {
        build_app(server_health_state.clone(), http_state.clone())
    })
    .bind(config.bind_addr)?
    .run();

    health_state.mark_ready();
    Ok(server)
}
