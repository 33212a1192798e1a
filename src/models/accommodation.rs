use chrono::{DateTime, Utc};
use serde::Serialize;
use sqlx::FromRow;

use super::lookup::Facility;

#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Accommodation {
    pub id: String,
    pub title: String,
    pub description: String,
    pub full_description: String,
    pub image_url: String,
    pub category: String,
    pub price: String,
    pub location: String,
    pub contact: String,
    pub website: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    #[sqlx(skip)]
    pub facilities: Vec<Facility>,
    #[sqlx(skip)]
    pub rooms: Vec<Room>,
    #[sqlx(skip)]
    pub gallery: Vec<AccommodationGallery>,
}

/// Room type offered by an accommodation. Price and capacity are
/// free-text to accommodate ranges ("Rp 800.000/malam", "2 orang").
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Room {
    pub id: i64,
    pub accommodation_id: String,
    #[sqlx(rename = "type")]
    #[serde(rename = "type")]
    pub room_type: String,
    pub price: String,
    pub capacity: String,
    pub description: String,
}

#[derive(Debug, Clone, FromRow, Serialize)]
pub struct AccommodationGallery {
    pub id: i64,
    pub accommodation_id: String,
    pub image_url: String,
}
