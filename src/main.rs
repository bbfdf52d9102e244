mod app;
mod articles;
mod auth;
mod certificates;
mod comments;
mod config;
mod contacts;
mod dashboard;
mod dto;
mod error;
mod gallery;
mod newsletter;
mod services_catalog;
mod sliders;
mod state;
mod statistics;
mod testimonials;
mod validate;
mod videos;

use crate::state::AppState;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    let env_filter = std::env::var("RUST_LOG")
        .unwrap_or_else(|_| "portfolio_cms=debug,axum=info,tower_http=info".to_string());
    let json_logs = std::env::var("LOG_FORMAT")
        .map(|v| v == "json")
        .unwrap_or(false);

    if json_logs {
        tracing_subscriber::fmt()
            .with_env_filter(env_filter)
            .with_target(false)
            .json()
            .init();
    } else {
        tracing_subscriber::fmt().with_env_filter(env_filter).init();
    }

    let app_state = AppState::init().await?;

    sqlx::migrate!("./migrations").run(&app_state.db).await?;
    tracing::info!("migrations applied");

    auth::service::ensure_admin(&app_state).await?;

    let app = app::build_app(app_state);
    app::serve(app).await
}
