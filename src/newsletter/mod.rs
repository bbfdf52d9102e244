pub mod handlers;
pub mod repo;

use axum::Router;

use crate::state::AppState;

pub fn public_router() -> Router<AppState> {
    handlers::public_routes()
}

pub fn admin_router() -> Router<AppState> {
    handlers::admin_routes()
}
