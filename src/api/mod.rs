use axum::routing::{get, post};
use axum::Router;
use tower::ServiceBuilder;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

mod analytics;
mod error;
mod state;

pub use error::*;
pub use state::*;

pub type Result<T, E = ApiError> = std::result::Result<T, E>;

/// Routes of the analytics service. Drafts are addressed as `draft` or `content` interchangeably.
pub fn create_router(app: App) -> Router {
    Router::new()
        .route("/analytics/increment-view/:draft_id", post(analytics::increment_view))
        .route("/analytics/views/increment", post(analytics::increment_view_body))
        .route("/analytics/draft/:draft_id", get(analytics::content_analytics))
        .route("/analytics/content/:content_id", get(analytics::content_analytics))
        .route("/analytics/top-drafts", get(analytics::top_content))
        .route("/analytics/top-content", get(analytics::top_content))
        .route("/analytics/views/total", get(analytics::total_views))
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(CorsLayer::permissive()),
        )
        .with_state(app)
}
