use chrono::{DateTime, Utc};
use serde::Serialize;
use sqlx::FromRow;

use super::lookup::{Activity, Facility};

/// Tourism destination aggregate root. Children and associations are
/// embedded inline on read; the `#[sqlx(skip)]` fields are populated
/// after the root row is fetched.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Destination {
    pub id: String,
    pub title: String,
    pub description: String,
    pub full_description: String,
    pub image_url: String,
    pub category: String,
    pub price: String,
    pub location: String,
    pub open_hours: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    #[sqlx(skip)]
    pub facilities: Vec<Facility>,
    #[sqlx(skip)]
    pub activities: Vec<Activity>,
    #[sqlx(skip)]
    pub tips: Vec<DestinationTip>,
    #[sqlx(skip)]
    pub gallery: Vec<DestinationGallery>,
}

#[derive(Debug, Clone, FromRow, Serialize)]
pub struct DestinationTip {
    pub id: i64,
    pub destination_id: String,
    pub tip: String,
}

#[derive(Debug, Clone, FromRow, Serialize)]
pub struct DestinationGallery {
    pub id: i64,
    pub destination_id: String,
    pub image_url: String,
}
