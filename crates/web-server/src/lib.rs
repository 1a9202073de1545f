use axum::{
    routing::{get, post, put},
    Router,
};
use database::OpiniaoRepository;
use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;
use tower_http::{
    cors::{AllowHeaders, AllowOrigin, Any, CorsLayer, ExposeHeaders},
    timeout::TimeoutLayer,
    trace::TraceLayer,
};
use tracing;

pub mod docs;
pub mod error;
pub mod handlers;
pub mod schemas;

/// The shared application state that all handlers can access.
#[derive(Clone)]
pub struct AppState {
    pub repo: OpiniaoRepository,
}

/// Builds the application router over the given state.
///
/// Kept separate from [`run_server`] so the tests can drive the exact same
/// router in-process without binding a socket.
pub fn app(state: Arc<AppState>) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(AllowOrigin::any())
        .allow_methods(Any)
        .allow_headers(AllowHeaders::any())
        .expose_headers(ExposeHeaders::any());

    Router::new()
        .route("/", get(handlers::home))
        .route(
            "/opiniao",
            post(handlers::create_opiniao).delete(handlers::delete_opiniao),
        )
        .route("/opiniao/:nome", put(handlers::update_opiniao))
        .route("/opinioes", get(handlers::list_opinioes))
        .route("/openapi", get(docs::index))
        .route("/openapi/swagger", get(docs::swagger))
        .route("/openapi/redoc", get(docs::redoc))
        .route("/openapi/rapidoc", get(docs::rapidoc))
        .route("/openapi/openapi.json", get(docs::openapi_json))
        .with_state(state)
        .layer(cors)
        // This middleware will automatically log information about every incoming request.
        .layer(TraceLayer::new_for_http())
        .layer(TimeoutLayer::new(Duration::from_secs(30)))
}

/// The main function to configure and run the web server.
pub async fn run_server(addr: SocketAddr) -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    let db_pool = database::connect().await?;
    database::run_migrations(&db_pool).await?;
    let repo = OpiniaoRepository::new(db_pool);

    let app = app(Arc::new(AppState { repo }));

    tracing::info!("Web server listening on http://{}", addr);
    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}

/// Resolves once the process receives Ctrl+C or, on Unix, SIGTERM.
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(err) = tokio::signal::ctrl_c().await {
            tracing::error!(error = %err, "Unable to install the Ctrl+C handler.");
        }
    };

    #[cfg(unix)]
    let terminate = async {
        use tokio::signal::unix::{signal, SignalKind};

        match signal(SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(err) => {
                tracing::error!(error = %err, "Unable to install the SIGTERM handler.");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    tracing::info!("Shutdown signal received, draining open connections.");
}
