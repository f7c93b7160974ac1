use crate::config::ServerConfig;
use crate::fetch::Fetcher;
use axum::extract::{ConnectInfo, Query, Request, State};
use axum::http::{Method, StatusCode, header};
use axum::middleware::{self, Next};
use axum::response::{IntoResponse, Response};
use axum::routing::get;
use axum::{Json, Router};
use serde::Deserialize;
use std::error::Error;
use std::net::SocketAddr;
use std::time::Instant;
use tokio::net::TcpListener;
use tower_http::cors::{Any, CorsLayer};

/// Query string of `GET /scrape`
#[derive(Debug, Deserialize)]
pub struct ScrapeParams {
    pub url: Option<String>,
    pub lang: Option<String>,
}

/// Build the service router
pub fn router(fetcher: Fetcher) -> Router {
    Router::new()
        .route("/scrape", get(scrape_handler))
        .with_state(fetcher)
        .layer(cors_layer())
        .layer(middleware::from_fn(log_requests))
}

/// Bind the configured address and serve until Ctrl-C
pub async fn start(config: &ServerConfig) -> Result<(), Box<dyn Error>> {
    let fetcher = Fetcher::new(&config.fetch)?;
    let listener = TcpListener::bind(config.bind_address()).await?;
    ::log::info!("Server starting on {}", listener.local_addr()?);

    serve(listener, fetcher).await?;
    ::log::info!("Server stopped");
    Ok(())
}

/// Serve on an already bound listener until Ctrl-C
pub async fn serve(listener: TcpListener, fetcher: Fetcher) -> std::io::Result<()> {
    axum::serve(
        listener,
        router(fetcher).into_make_service_with_connect_info::<SocketAddr>(),
    )
    .with_graceful_shutdown(shutdown_signal())
    .await
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        ::log::error!("Failed to listen for shutdown signal: {}", e);
        std::future::pending::<()>().await;
    }
    ::log::info!("Shutdown signal received");
}

async fn scrape_handler(
    State(fetcher): State<Fetcher>,
    Query(params): Query<ScrapeParams>,
) -> Response {
    let Some(url) = params.url.filter(|u| !u.is_empty()) else {
        return (StatusCode::BAD_REQUEST, "URL parameter is required").into_response();
    };

    match fetcher.fetch(&url, params.lang.as_deref()).await {
        Ok(info) => Json(info).into_response(),
        Err(e) => {
            ::log::error!("Error extracting info from {}: {}", url, e);
            (StatusCode::INTERNAL_SERVER_ERROR, format!("Error: {}", e)).into_response()
        }
    }
}

fn cors_layer() -> CorsLayer {
    CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
        .allow_headers([header::CONTENT_TYPE, header::AUTHORIZATION])
}

/// Logs method, path, query, status, duration and peer of every request
async fn log_requests(request: Request, next: Next) -> Response {
    let start = Instant::now();
    let method = request.method().clone();
    let path = request.uri().path().to_string();
    let query = request.uri().query().unwrap_or_default().to_string();
    let remote = request
        .extensions()
        .get::<ConnectInfo<SocketAddr>>()
        .map(|ConnectInfo(addr)| addr.to_string())
        .unwrap_or_default();

    let response = next.run(request).await;

    ::log::info!(
        "HTTP request method={} path={} query={} status={} duration={:?} remote={}",
        method,
        path,
        query,
        response.status().as_u16(),
        start.elapsed(),
        remote
    );
    response
}
