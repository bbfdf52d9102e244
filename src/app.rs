use axum::{http::HeaderValue, routing::get, Json, Router};
use tower_http::{
    cors::{AllowOrigin, Any, CorsLayer},
    trace::TraceLayer,
};

use crate::{
    articles, auth, certificates, comments, contacts, dashboard, gallery, newsletter,
    services_catalog, sliders, state::AppState, statistics, testimonials, videos,
};

pub fn build_app(state: AppState) -> Router {
    let public = Router::new()
        .merge(auth::public_router())
        .merge(articles::public_router())
        .merge(gallery::public_router())
        .merge(testimonials::public_router())
        .merge(certificates::public_router())
        .merge(statistics::public_router())
        .merge(contacts::public_router())
        .merge(newsletter::public_router())
        .merge(services_catalog::public_router())
        .merge(sliders::public_router())
        .merge(comments::public_router())
        .merge(videos::public_router());

    let admin = Router::new()
        .merge(auth::admin_router())
        .merge(articles::admin_router())
        .merge(gallery::admin_router())
        .merge(testimonials::admin_router())
        .merge(certificates::admin_router())
        .merge(statistics::admin_router())
        .merge(contacts::admin_router())
        .merge(newsletter::admin_router())
        .merge(services_catalog::admin_router())
        .merge(sliders::admin_router())
        .merge(comments::admin_router())
        .merge(videos::admin_router())
        .merge(dashboard::admin_router());

    let cors = cors_layer(&state.config.allowed_origins);

    Router::new()
        .route("/", get(root))
        .route("/health", get(health))
        .nest("/api", public)
        .nest("/api/admin", admin)
        .with_state(state)
        .layer(cors)
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(|req: &axum::http::Request<_>| {
                    let method = req.method().clone();
                    let uri = req.uri().clone();
                    tracing::info_span!("http_request", %method, uri = %uri)
                })
                .on_response(
                    |res: &axum::http::Response<_>,
                     _latency: std::time::Duration,
                     span: &tracing::Span| {
                        let status = res.status();
                        span.record("status", tracing::field::display(status));
                        if status.is_server_error() {
                            tracing::error!(%status, "response");
                        } else {
                            tracing::info!(%status, "response");
                        }
                    },
                ),
        )
}

fn cors_layer(allowed_origins: &[String]) -> CorsLayer {
    let origins: Vec<HeaderValue> = allowed_origins
        .iter()
        .filter_map(|o| o.parse().ok())
        .collect();
    if origins.is_empty() {
        CorsLayer::permissive()
    } else {
        CorsLayer::new()
            .allow_origin(AllowOrigin::list(origins))
            .allow_methods(Any)
            .allow_headers(Any)
    }
}

async fn root() -> Json<serde_json::Value> {
    Json(serde_json::json!({
        "message": "portfolio-cms API",
        "health": "/health",
    }))
}

async fn health() -> &'static str {
    "ok"
}

pub async fn serve(app: Router) -> anyhow::Result<()> {
    let addr: std::net::SocketAddr = format!(
        "{}:{}",
        std::env::var("APP_HOST").unwrap_or_else(|_| "0.0.0.0".into()),
        std::env::var("APP_PORT").unwrap_or_else(|_| "8080".into())
    )
    .parse()?;

    tracing::info!("listening on {}", addr);
    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;
    Ok(())
}
