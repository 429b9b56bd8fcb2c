use axum::{
    extract::DefaultBodyLimit,
    routing::get,
    Router,
};
use tower::ServiceBuilder;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use super::handlers::*;
use super::AppState;

pub fn create_router(state: AppState) -> Router {
    let max_upload_bytes = state.max_upload_bytes;

    Router::new()
        .route(
            "/api/locations",
            get(get_locations).post(upload_locations).delete(clear_locations),
        )
        .route("/api/locations.csv", get(export_locations_csv))
        .route("/api/map", get(get_map_frame))
        .route("/api/sample", get(download_sample))
        .route("/api/stats", get(get_stats))
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(DefaultBodyLimit::max(max_upload_bytes))
                .layer(CorsLayer::permissive()),
        )
        .with_state(state)
}
