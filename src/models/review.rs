use chrono::{DateTime, Utc};
use serde::Serialize;
use sqlx::FromRow;

/// Visitor review. `destination` holds the destination title as free
/// text rather than a foreign key: the association is best-effort for
/// display, and a review stays valid if the destination is renamed or
/// deleted.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Review {
    pub id: String,
    pub name: String,
    pub image_url: String,
    pub date: String,
    pub rating: i64,
    pub text: String,
    pub destination: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}
