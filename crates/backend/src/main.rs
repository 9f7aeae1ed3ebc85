pub mod handlers;
pub mod shared;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    use axum::http::{header, Method};
    use axum::middleware;
    use axum::{routing::get, Router};
    use std::net::SocketAddr;
    use std::sync::Arc;
    use tokio::net::TcpListener;
    use tower_http::cors::{Any, CorsLayer};
    use tower_http::services::{ServeDir, ServeFile};
    use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| "info,tower_http=warn".into()),
        ))
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = shared::config::load_config()?;
    let fixtures_dir = shared::config::resolve_dir(&config.server.fixtures_dir);
    let static_dir = shared::config::resolve_dir(&config.server.static_dir);

    tracing::info!("Fixtures directory: {}", fixtures_dir.display());
    tracing::info!("Static directory: {}", static_dir.display());
    match config.competition.start {
        Some(start) => tracing::info!("Competition starts at {}", start),
        None => tracing::info!("Competition start not configured, resources are open"),
    }

    let state = Arc::new(handlers::fixtures::FixtureState {
        fixtures_dir,
        competition: config.competition.clone(),
    });

    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([Method::GET, Method::OPTIONS])
        .allow_headers([header::CONTENT_TYPE, header::ACCEPT]);

    // SPA: неизвестные пути отдают index.html, роутинг на клиенте
    let spa = ServeDir::new(&static_dir).fallback(ServeFile::new(static_dir.join("index.html")));

    let app = Router::new()
        .route("/health", get(|| async { "ok" }))
        .route("/fixtures/*path", get(handlers::fixtures::get_fixture))
        .with_state(state)
        .fallback_service(spa)
        .layer(middleware::from_fn(shared::request_log::request_logger))
        .layer(cors);

    let port = config.server.port;
    let addr: SocketAddr = ([0, 0, 0, 0], port).into();

    tracing::info!("Attempting to bind server to http://{}", addr);
    let listener = match TcpListener::bind(addr).await {
        Ok(listener) => {
            tracing::info!("Server successfully bound to {}", addr);
            listener
        }
        Err(e) => {
            if e.kind() == std::io::ErrorKind::AddrInUse {
                tracing::error!("Port {} is already in use", port);
            } else {
                tracing::error!("Failed to bind to port {}. Error: {}", port, e);
            }
            return Err(e.into());
        }
    };

    axum::serve(listener, app).await?;

    Ok(())
}
