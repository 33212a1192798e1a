// HTTP surface: thin axum handlers that parse parameters, delegate to
// the repository layer, and serialize results.

pub mod accommodations;
pub mod culinaries;
pub mod destinations;
pub mod photo_spots;
pub mod reviews;
pub mod transport_routes;

use axum::{
    routing::{delete, get, post},
    Json, Router,
};
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use crate::app_state::AppState;
use crate::error::{AppError, AppResult};

/// Validates the shared pagination parameters: `skip` defaults to 0 and
/// must be non-negative, `limit` defaults to 100 and must be 1..=100.
pub(crate) fn page_window(skip: Option<i64>, limit: Option<i64>) -> AppResult<(i64, i64)> {
    let skip = skip.unwrap_or(0);
    if skip < 0 {
        return Err(AppError::Validation("skip must be non-negative".to_string()));
    }
    let limit = limit.unwrap_or(100);
    if !(1..=100).contains(&limit) {
        return Err(AppError::Validation(
            "limit must be between 1 and 100".to_string(),
        ));
    }
    Ok((skip, limit))
}

async fn health_check() -> Json<serde_json::Value> {
    Json(serde_json::json!({
        "status": "healthy",
        "service": "Temajuk Tourism API"
    }))
}

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/api/health", get(health_check))
        .route(
            "/api/destinations",
            get(destinations::list).post(destinations::create),
        )
        .route(
            "/api/destinations/{id}",
            get(destinations::get)
                .put(destinations::update)
                .delete(destinations::remove),
        )
        .route("/api/destinations/{id}/tips", post(destinations::add_tip))
        .route(
            "/api/destinations/{id}/tips/{tip_id}",
            delete(destinations::remove_tip),
        )
        .route(
            "/api/destinations/{id}/gallery",
            post(destinations::add_gallery_image),
        )
        .route(
            "/api/destinations/{id}/gallery/{image_id}",
            delete(destinations::remove_gallery_image),
        )
        .route(
            "/api/accommodations",
            get(accommodations::list).post(accommodations::create),
        )
        .route(
            "/api/accommodations/{id}",
            get(accommodations::get)
                .put(accommodations::update)
                .delete(accommodations::remove),
        )
        .route(
            "/api/accommodations/{id}/rooms",
            post(accommodations::add_room),
        )
        .route(
            "/api/accommodations/{id}/rooms/{room_id}",
            delete(accommodations::remove_room),
        )
        .route(
            "/api/accommodations/{id}/gallery",
            post(accommodations::add_gallery_image),
        )
        .route(
            "/api/accommodations/{id}/gallery/{image_id}",
            delete(accommodations::remove_gallery_image),
        )
        .route(
            "/api/culinaries",
            get(culinaries::list).post(culinaries::create),
        )
        .route(
            "/api/culinaries/{id}",
            get(culinaries::get)
                .put(culinaries::update)
                .delete(culinaries::remove),
        )
        .route(
            "/api/culinaries/{id}/specialties",
            post(culinaries::add_specialty),
        )
        .route(
            "/api/culinaries/{id}/specialties/{specialty_id}",
            delete(culinaries::remove_specialty),
        )
        .route(
            "/api/culinaries/{id}/gallery",
            post(culinaries::add_gallery_image),
        )
        .route(
            "/api/culinaries/{id}/gallery/{image_id}",
            delete(culinaries::remove_gallery_image),
        )
        .route(
            "/api/photo-spots",
            get(photo_spots::list).post(photo_spots::create),
        )
        .route(
            "/api/photo-spots/{id}",
            get(photo_spots::get)
                .put(photo_spots::update)
                .delete(photo_spots::remove),
        )
        .route("/api/photo-spots/{id}/tips", post(photo_spots::add_tip))
        .route(
            "/api/photo-spots/{id}/tips/{tip_id}",
            delete(photo_spots::remove_tip),
        )
        .route(
            "/api/photo-spots/{id}/gallery",
            post(photo_spots::add_gallery_image),
        )
        .route(
            "/api/photo-spots/{id}/gallery/{image_id}",
            delete(photo_spots::remove_gallery_image),
        )
        .route(
            "/api/photo-spots/{id}/nearby-attractions",
            post(photo_spots::add_nearby_attraction),
        )
        .route(
            "/api/photo-spots/{id}/nearby-attractions/{attraction_id}",
            delete(photo_spots::remove_nearby_attraction),
        )
        .route("/api/reviews", get(reviews::list).post(reviews::create))
        .route(
            "/api/reviews/{id}",
            get(reviews::get).put(reviews::update).delete(reviews::remove),
        )
        .route(
            "/api/transport-routes",
            get(transport_routes::list).post(transport_routes::create),
        )
        .route(
            "/api/transport-routes/{id}",
            get(transport_routes::get)
                .put(transport_routes::update)
                .delete(transport_routes::remove),
        )
        .route(
            "/api/transport-routes/{id}/steps",
            post(transport_routes::add_step),
        )
        .route(
            "/api/transport-routes/{id}/steps/{step_id}",
            delete(transport_routes::remove_step),
        )
        .route(
            "/api/transport-routes/{id}/tips",
            post(transport_routes::add_tip),
        )
        .route(
            "/api/transport-routes/{id}/tips/{tip_id}",
            delete(transport_routes::remove_tip),
        )
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}
