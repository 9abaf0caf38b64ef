pub mod error;
pub mod handlers;
pub mod state;
pub mod users;

use axum::routing::{get, post};
use axum::Router;
use tower_http::cors::CorsLayer;

pub use error::{ApiError, ApiResult};
pub use state::AppState;

/// Full HTTP surface: recommendation routes plus the auth/booking routes,
/// behind a permissive CORS layer for the frontend dev server.
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/", get(handlers::root))
        .route("/health", get(handlers::health))
        .route("/stats", get(handlers::stats))
        .route("/recommend", post(handlers::recommend))
        .route("/collections/{name}/sample", get(handlers::sample))
        .route("/register", post(users::register))
        .route("/login", post(users::login))
        .route("/book", post(users::book))
        .route("/user/{user_id}/bookings", get(users::user_bookings))
        .layer(CorsLayer::permissive())
        .with_state(state)
}
