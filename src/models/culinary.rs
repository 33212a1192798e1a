use chrono::{DateTime, Utc};
use serde::Serialize;
use sqlx::FromRow;

#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Culinary {
    pub id: String,
    pub title: String,
    pub description: String,
    pub full_description: String,
    pub image_url: String,
    pub category: String,
    pub price: String,
    pub location: String,
    pub open_hours: String,
    pub contact: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    #[sqlx(skip)]
    pub specialties: Vec<CulinarySpecialty>,
    #[sqlx(skip)]
    pub gallery: Vec<CulinaryGallery>,
}

#[derive(Debug, Clone, FromRow, Serialize)]
pub struct CulinarySpecialty {
    pub id: i64,
    pub culinary_id: String,
    pub name: String,
}

#[derive(Debug, Clone, FromRow, Serialize)]
pub struct CulinaryGallery {
    pub id: i64,
    pub culinary_id: String,
    pub image_url: String,
}
