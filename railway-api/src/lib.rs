use axum::{http::Method, routing::get, Router};
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

pub mod admin;
pub mod bookings;
pub mod error;
pub mod pages;
pub mod search;
pub mod state;
pub mod templates;
pub mod trains;

pub use state::AppState;

pub fn app(state: AppState) -> Router {
    // CORS Middleware (for the machine-readable /api/trains consumer)
    let cors = CorsLayer::new()
        .allow_origin(tower_http::cors::Any)
        .allow_methods([Method::GET, Method::POST])
        .allow_headers([axum::http::header::CONTENT_TYPE]);

    Router::new()
        .route("/", get(pages::index))
        .route("/health", get(pages::health))
        .merge(search::routes())
        .merge(bookings::routes())
        .merge(trains::routes())
        .merge(admin::routes())
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
