use axum::Router;
use storage::Database;
use tower_http::cors::{Any, CorsLayer};

pub mod config;
pub mod error;
pub mod features;

/// Build the application router with every feature mounted.
///
/// Kept separate from `main` so integration tests can drive the exact
/// router the binary serves.
pub fn app(db: Database) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .nest("/api/categories", features::categories::routes())
        .nest("/api/training_centers", features::training_centers::routes())
        .nest("/api/athletes", features::athletes::routes())
        .layer(cors)
        .with_state(db)
}
