use std::net::SocketAddr;

use mntr_server::config::{establish_connection, AppConfig, DATA_PATH};
use mntr_server::domain::status::init_start_time;
use mntr_server::shutdown::shutdown_signal;
use mntr_server::state::AppState;
use mntr_server::utils::logging::init_logging;

#[tokio::main]
async fn main() {
    // 1. Environment
    dotenvy::dotenv().ok();

    // 2. Logging; the guard must live until exit
    let _guard = init_logging();
    init_start_time();

    tracing::info!("mntr server is starting");

    // 3. Configuration and database
    let config = AppConfig::from_env().expect("Invalid configuration");
    tracing::info!(
        "Port: {} DB: {} Plugins: {}",
        config.server_port,
        config.database_file,
        config.plugin_dir.display()
    );

    std::fs::create_dir_all(DATA_PATH).expect("Failed to create data directory");

    let db = establish_connection(&config.database_url())
        .await
        .expect("Failed to open database");

    // 4. Router and server
    let addr = SocketAddr::from(([0, 0, 0, 0], config.server_port));
    let app = mntr_server::app(AppState { db, config });

    tracing::info!("Server listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .expect("Failed to bind server port");
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .expect("Server error");
}
