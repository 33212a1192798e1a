#![allow(dead_code)]

use axum::body::Body;
use axum::http::{header, Request, StatusCode};
use axum::Router;
use http_body_util::BodyExt;
use serde_json::{json, Value};
use tempfile::NamedTempFile;
use tower::ServiceExt;

use temajuk_api::api;
use temajuk_api::app_state::AppState;
use temajuk_api::config::{Config, DatabaseConfig, ServerConfig};

pub async fn test_state() -> (AppState, NamedTempFile) {
    let temp_db = NamedTempFile::new().expect("Failed to create temp file");
    let config = Config {
        database: DatabaseConfig {
            url: format!("sqlite:{}", temp_db.path().display()),
        },
        server: ServerConfig {
            host: "127.0.0.1".to_string(),
            port: 0,
        },
    };
    let state = AppState::new(config)
        .await
        .expect("Failed to initialize test database");
    (state, temp_db)
}

pub async fn test_app() -> (Router, NamedTempFile) {
    let (state, temp_db) = test_state().await;
    (api::router(state), temp_db)
}

/// Fires one request at the app and returns the status plus the parsed
/// JSON body (Null when the body is empty, e.g. for 204 responses).
pub async fn request(
    app: &Router,
    method: &str,
    uri: &str,
    payload: Option<&Value>,
) -> (StatusCode, Value) {
    let mut builder = Request::builder().method(method).uri(uri);
    let body = match payload {
        Some(payload) => {
            builder = builder.header(header::CONTENT_TYPE, "application/json");
            Body::from(payload.to_string())
        }
        None => Body::empty(),
    };
    let response = app
        .clone()
        .oneshot(builder.body(body).expect("Failed to build request"))
        .await
        .expect("Failed to send request");
    let status = response.status();
    let bytes = response
        .into_body()
        .collect()
        .await
        .expect("Failed to read response body")
        .to_bytes();
    let value = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).expect("Failed to parse JSON")
    };
    (status, value)
}

pub fn destination_payload(id: &str) -> Value {
    json!({
        "id": id,
        "title": "Pantai Temajuk",
        "description": "A quiet beach on the westernmost tip of Borneo",
        "full_description": "A long stretch of white sand facing the South China Sea",
        "image_url": "https://img.example.com/pantai.jpg",
        "category": "beach",
        "price": "Free",
        "location": "Temajuk, Paloh",
        "open_hours": "24 hours",
        "facilities": ["Parking", "Toilets"],
        "activities": ["Swimming", "Sunset watching"],
        "tips": ["Come early for the sunrise"],
        "gallery": ["https://img.example.com/pantai-1.jpg"]
    })
}

pub fn accommodation_payload(id: &str) -> Value {
    json!({
        "id": id,
        "title": "Temajuk Beach Homestay",
        "description": "Family-run homestay a short walk from the beach",
        "full_description": "Simple rooms with fans, shared terrace and home cooking",
        "image_url": "https://img.example.com/homestay.jpg",
        "category": "homestay",
        "price": "Rp 150.000/night",
        "location": "Temajuk village",
        "contact": "+628123456789",
        "website": "https://homestay.example.com",
        "facilities": ["Wifi", "Parking"],
        "rooms": [
            {
                "type": "Standard",
                "price": "Rp 150.000",
                "capacity": "2 people",
                "description": "Double bed with fan"
            }
        ],
        "gallery": ["https://img.example.com/homestay-1.jpg"]
    })
}

pub fn culinary_payload(id: &str) -> Value {
    json!({
        "id": id,
        "title": "Warung Bu Siti",
        "description": "Grilled fish straight from the morning catch",
        "full_description": "A beachfront warung serving seafood and sambal",
        "image_url": "https://img.example.com/warung.jpg",
        "category": "seafood",
        "price": "Rp 25.000-50.000",
        "location": "Temajuk beachfront",
        "open_hours": "10:00-21:00",
        "contact": "+628129876543",
        "specialties": ["Grilled snapper", "Sambal terasi"],
        "gallery": ["https://img.example.com/warung-1.jpg"]
    })
}

pub fn photo_spot_payload(id: &str) -> Value {
    json!({
        "id": id,
        "title": "Tanjung Datu Viewpoint",
        "description": "Panoramic view over the border headland",
        "full_description": "A short hike up the ridge with views of both countries",
        "image_url": "https://img.example.com/viewpoint.jpg",
        "category": "viewpoint",
        "location": "Tanjung Datu",
        "best_time": "Golden hour",
        "tips": ["Bring a wide lens"],
        "gallery": ["https://img.example.com/viewpoint-1.jpg"],
        "nearby_attractions": ["Turtle beach"]
    })
}

pub fn review_payload(id: &str) -> Value {
    json!({
        "id": id,
        "name": "Andi Pratama",
        "image_url": "https://img.example.com/avatar.jpg",
        "date": "2024-06-12",
        "rating": 5,
        "text": "The beach was empty and the sunset unforgettable",
        "destination": "Pantai Temajuk"
    })
}

pub fn transport_route_payload(id: &str) -> Value {
    json!({
        "id": id,
        "title": "Pontianak to Temajuk overland",
        "description": "Bus to Sambas, then motorbike along the coast",
        "estimated_cost": "Rp 350.000",
        "estimated_time": "10-12 hours",
        "difficulty": "moderate",
        "image_url": "https://img.example.com/route.jpg",
        "steps": [
            {
                "step": 1,
                "description": "Bus from Pontianak to Sambas",
                "duration": "6 hours",
                "cost": "Rp 150.000",
                "vehicle": "Bus"
            },
            {
                "step": 2,
                "description": "Motorbike from Sambas to Temajuk",
                "duration": "4 hours",
                "cost": "Rp 200.000",
                "vehicle": "Motorbike"
            }
        ],
        "tips": ["Fuel up in Sambas, there is no station after"]
    })
}
