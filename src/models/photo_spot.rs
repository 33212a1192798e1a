use chrono::{DateTime, Utc};
use serde::Serialize;
use sqlx::FromRow;

#[derive(Debug, Clone, FromRow, Serialize)]
pub struct PhotoSpot {
    pub id: String,
    pub title: String,
    pub description: String,
    pub full_description: String,
    pub image_url: String,
    pub category: String,
    pub location: String,
    pub best_time: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    #[sqlx(skip)]
    pub tips: Vec<PhotoSpotTip>,
    #[sqlx(skip)]
    pub gallery: Vec<PhotoSpotGallery>,
    #[sqlx(skip)]
    pub nearby_attractions: Vec<PhotoSpotNearbyAttraction>,
}

#[derive(Debug, Clone, FromRow, Serialize)]
pub struct PhotoSpotTip {
    pub id: i64,
    pub photo_spot_id: String,
    pub tip: String,
}

#[derive(Debug, Clone, FromRow, Serialize)]
pub struct PhotoSpotGallery {
    pub id: i64,
    pub photo_spot_id: String,
    pub image_url: String,
}

#[derive(Debug, Clone, FromRow, Serialize)]
pub struct PhotoSpotNearbyAttraction {
    pub id: i64,
    pub photo_spot_id: String,
    pub name: String,
}
