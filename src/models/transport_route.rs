use chrono::{DateTime, Utc};
use serde::Serialize;
use sqlx::FromRow;

#[derive(Debug, Clone, FromRow, Serialize)]
pub struct TransportRoute {
    pub id: String,
    pub title: String,
    pub description: String,
    pub estimated_cost: String,
    pub estimated_time: String,
    pub difficulty: String,
    pub image_url: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    #[sqlx(skip)]
    pub steps: Vec<RouteStep>,
    #[sqlx(skip)]
    pub tips: Vec<RouteTip>,
}

/// One leg of a transport route. `step` is the caller-supplied ordinal;
/// rows are returned in insertion order.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct RouteStep {
    pub id: i64,
    pub route_id: String,
    pub step: i64,
    pub description: String,
    pub duration: String,
    pub cost: String,
    pub vehicle: String,
}

#[derive(Debug, Clone, FromRow, Serialize)]
pub struct RouteTip {
    pub id: i64,
    pub route_id: String,
    pub tip: String,
}
