pub mod config;
pub mod domain;
pub mod shutdown;
pub mod state;
pub mod utils;

use axum::{response::Redirect, routing::get, Router};
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use domain::{collector, monitor, plugin, status};
use state::AppState;

#[derive(OpenApi)]
#[openapi(
    paths(
        domain::status::handler::get_status,
        domain::collector::handler::list_collectors,
        domain::collector::handler::get_collector,
        domain::collector::handler::create_collector,
        domain::collector::handler::update_collector,
        domain::collector::handler::delete_collector,
        domain::monitor::handler::list_monitors,
        domain::monitor::handler::get_monitor,
        domain::monitor::handler::create_monitor,
        domain::monitor::handler::update_monitor,
        domain::monitor::handler::delete_monitor,
        domain::monitor::handler::dump_config,
        domain::plugin::handler::list_plugins,
        domain::plugin::handler::get_plugin,
    ),
    components(
        schemas(
            domain::collector::dto::CollectorRequest,
            domain::collector::dto::CollectorResponse,
            domain::monitor::dto::MonitorRequest,
            domain::monitor::dto::MonitorResponse,
            domain::status::dto::StatusResponse,
            utils::response::ErrorResponse,
            utils::response::DeleteResponse,
        )
    ),
    tags(
        (name = "Status", description = "Liveness"),
        (name = "Collectors", description = "Collector host registration and heartbeats"),
        (name = "Monitors", description = "Monitor definition management"),
        (name = "Plugins", description = "Plugin descriptor discovery")
    )
)]
pub struct ApiDoc;

/// Build the full application router over the shared state.
pub fn app(state: AppState) -> Router {
    // The browser UI is served separately, so CORS stays permissive
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
        .route("/", get(|| async { Redirect::temporary("/api/status") }))
        .route("/api/status", get(status::handler::get_status))
        .route(
            "/api/collectors",
            get(collector::handler::list_collectors).post(collector::handler::create_collector),
        )
        .route(
            "/api/collectors/:hostname",
            get(collector::handler::get_collector)
                .put(collector::handler::update_collector)
                .delete(collector::handler::delete_collector),
        )
        .route(
            "/api/monitors",
            get(monitor::handler::list_monitors).post(monitor::handler::create_monitor),
        )
        .route("/api/monitors/config", get(monitor::handler::dump_config))
        .route(
            "/api/monitors/:plugin/:name",
            get(monitor::handler::get_monitor)
                .put(monitor::handler::update_monitor)
                .delete(monitor::handler::delete_monitor),
        )
        .route("/api/plugins", get(plugin::handler::list_plugins))
        .route("/api/plugins/:name", get(plugin::handler::get_plugin))
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(state)
}
