use serde::Serialize;
use sqlx::FromRow;

/// Shared, name-keyed lookup entity referenced by destinations and
/// accommodations. Created lazily on first use; never deleted when a
/// referencing aggregate is deleted.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Facility {
    pub id: i64,
    pub name: String,
}

/// Same lookup pattern as [`Facility`], referenced by destinations only.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Activity {
    pub id: i64,
    pub name: String,
}
