use std::str::FromStr;

use sqlx::sqlite::{SqliteConnectOptions, SqlitePool, SqlitePoolOptions};

use crate::error::AppResult;

/// Async database handle backed by a SQLx connection pool.
///
/// Constructed once at startup and injected into handlers through
/// `AppState`; there is no process-wide singleton.
pub struct Database {
    pub pool: SqlitePool,
}

impl Database {
    pub async fn new(database_url: &str) -> AppResult<Self> {
        let options = SqliteConnectOptions::from_str(database_url)
            .map_err(sqlx::Error::from)?
            .create_if_missing(true)
            .foreign_keys(true);

        let pool = SqlitePoolOptions::new()
            .max_connections(5)
            .connect_with(options)
            .await?;

        Ok(Database { pool })
    }

    /// Create all tables and indexes if they do not exist yet.
    pub async fn init(&self) -> AppResult<()> {
        // Aggregate roots. Slugs are caller-supplied, unique per table.
        sqlx::query(
            "CREATE TABLE IF NOT EXISTS destinations (
                id TEXT PRIMARY KEY,
                title TEXT NOT NULL,
                description TEXT NOT NULL,
                full_description TEXT NOT NULL,
                image_url TEXT NOT NULL,
                category TEXT NOT NULL,
                price TEXT NOT NULL,
                location TEXT NOT NULL,
                open_hours TEXT NOT NULL,
                created_at TIMESTAMP NOT NULL,
                updated_at TIMESTAMP NOT NULL
            )",
        )
        .execute(&self.pool)
        .await?;

        sqlx::query(
            "CREATE TABLE IF NOT EXISTS accommodations (
                id TEXT PRIMARY KEY,
                title TEXT NOT NULL,
                description TEXT NOT NULL,
                full_description TEXT NOT NULL,
                image_url TEXT NOT NULL,
                category TEXT NOT NULL,
                price TEXT NOT NULL,
                location TEXT NOT NULL,
                contact TEXT NOT NULL,
                website TEXT,
                created_at TIMESTAMP NOT NULL,
                updated_at TIMESTAMP NOT NULL
            )",
        )
        .execute(&self.pool)
        .await?;

        sqlx::query(
            "CREATE TABLE IF NOT EXISTS culinaries (
                id TEXT PRIMARY KEY,
                title TEXT NOT NULL,
                description TEXT NOT NULL,
                full_description TEXT NOT NULL,
                image_url TEXT NOT NULL,
                category TEXT NOT NULL,
                price TEXT NOT NULL,
                location TEXT NOT NULL,
                open_hours TEXT NOT NULL,
                contact TEXT,
                created_at TIMESTAMP NOT NULL,
                updated_at TIMESTAMP NOT NULL
            )",
        )
        .execute(&self.pool)
        .await?;

        sqlx::query(
            "CREATE TABLE IF NOT EXISTS photo_spots (
                id TEXT PRIMARY KEY,
                title TEXT NOT NULL,
                description TEXT NOT NULL,
                full_description TEXT NOT NULL,
                image_url TEXT NOT NULL,
                category TEXT NOT NULL,
                location TEXT NOT NULL,
                best_time TEXT NOT NULL,
                created_at TIMESTAMP NOT NULL,
                updated_at TIMESTAMP NOT NULL
            )",
        )
        .execute(&self.pool)
        .await?;

        // Reviews reference their destination by title text, not by
        // foreign key. A review with no matching destination is valid.
        sqlx::query(
            "CREATE TABLE IF NOT EXISTS reviews (
                id TEXT PRIMARY KEY,
                name TEXT NOT NULL,
                image_url TEXT NOT NULL,
                date TEXT NOT NULL,
                rating INTEGER NOT NULL,
                text TEXT NOT NULL,
                destination TEXT NOT NULL,
                created_at TIMESTAMP NOT NULL,
                updated_at TIMESTAMP NOT NULL
            )",
        )
        .execute(&self.pool)
        .await?;

        sqlx::query(
            "CREATE TABLE IF NOT EXISTS transport_routes (
                id TEXT PRIMARY KEY,
                title TEXT NOT NULL,
                description TEXT NOT NULL,
                estimated_cost TEXT NOT NULL,
                estimated_time TEXT NOT NULL,
                difficulty TEXT NOT NULL,
                image_url TEXT NOT NULL,
                created_at TIMESTAMP NOT NULL,
                updated_at TIMESTAMP NOT NULL
            )",
        )
        .execute(&self.pool)
        .await?;

        // Shared lookup tables. UNIQUE(name) is the backstop against the
        // lookup-then-create race in the association resolver.
        sqlx::query(
            "CREATE TABLE IF NOT EXISTS facilities (
                id INTEGER PRIMARY KEY,
                name TEXT NOT NULL UNIQUE
            )",
        )
        .execute(&self.pool)
        .await?;

        sqlx::query(
            "CREATE TABLE IF NOT EXISTS activities (
                id INTEGER PRIMARY KEY,
                name TEXT NOT NULL UNIQUE
            )",
        )
        .execute(&self.pool)
        .await?;

        // Join tables for many-to-many associations.
        sqlx::query(
            "CREATE TABLE IF NOT EXISTS destination_facility (
                destination_id TEXT NOT NULL REFERENCES destinations(id) ON DELETE CASCADE,
                facility_id INTEGER NOT NULL REFERENCES facilities(id),
                PRIMARY KEY (destination_id, facility_id)
            )",
        )
        .execute(&self.pool)
        .await?;

        sqlx::query(
            "CREATE TABLE IF NOT EXISTS destination_activity (
                destination_id TEXT NOT NULL REFERENCES destinations(id) ON DELETE CASCADE,
                activity_id INTEGER NOT NULL REFERENCES activities(id),
                PRIMARY KEY (destination_id, activity_id)
            )",
        )
        .execute(&self.pool)
        .await?;

        sqlx::query(
            "CREATE TABLE IF NOT EXISTS accommodation_facility (
                accommodation_id TEXT NOT NULL REFERENCES accommodations(id) ON DELETE CASCADE,
                facility_id INTEGER NOT NULL REFERENCES facilities(id),
                PRIMARY KEY (accommodation_id, facility_id)
            )",
        )
        .execute(&self.pool)
        .await?;

        // Owned children: autoincrement id, parent foreign key, cascade
        // on parent delete.
        for ddl in [
            "CREATE TABLE IF NOT EXISTS destination_tips (
                id INTEGER PRIMARY KEY,
                destination_id TEXT NOT NULL REFERENCES destinations(id) ON DELETE CASCADE,
                tip TEXT NOT NULL
            )",
            "CREATE TABLE IF NOT EXISTS destination_galleries (
                id INTEGER PRIMARY KEY,
                destination_id TEXT NOT NULL REFERENCES destinations(id) ON DELETE CASCADE,
                image_url TEXT NOT NULL
            )",
            "CREATE TABLE IF NOT EXISTS rooms (
                id INTEGER PRIMARY KEY,
                accommodation_id TEXT NOT NULL REFERENCES accommodations(id) ON DELETE CASCADE,
                type TEXT NOT NULL,
                price TEXT NOT NULL,
                capacity TEXT NOT NULL,
                description TEXT NOT NULL
            )",
            "CREATE TABLE IF NOT EXISTS accommodation_galleries (
                id INTEGER PRIMARY KEY,
                accommodation_id TEXT NOT NULL REFERENCES accommodations(id) ON DELETE CASCADE,
                image_url TEXT NOT NULL
            )",
            "CREATE TABLE IF NOT EXISTS culinary_specialties (
                id INTEGER PRIMARY KEY,
                culinary_id TEXT NOT NULL REFERENCES culinaries(id) ON DELETE CASCADE,
                name TEXT NOT NULL
            )",
            "CREATE TABLE IF NOT EXISTS culinary_galleries (
                id INTEGER PRIMARY KEY,
                culinary_id TEXT NOT NULL REFERENCES culinaries(id) ON DELETE CASCADE,
                image_url TEXT NOT NULL
            )",
            "CREATE TABLE IF NOT EXISTS photo_spot_tips (
                id INTEGER PRIMARY KEY,
                photo_spot_id TEXT NOT NULL REFERENCES photo_spots(id) ON DELETE CASCADE,
                tip TEXT NOT NULL
            )",
            "CREATE TABLE IF NOT EXISTS photo_spot_galleries (
                id INTEGER PRIMARY KEY,
                photo_spot_id TEXT NOT NULL REFERENCES photo_spots(id) ON DELETE CASCADE,
                image_url TEXT NOT NULL
            )",
            "CREATE TABLE IF NOT EXISTS photo_spot_nearby_attractions (
                id INTEGER PRIMARY KEY,
                photo_spot_id TEXT NOT NULL REFERENCES photo_spots(id) ON DELETE CASCADE,
                name TEXT NOT NULL
            )",
            "CREATE TABLE IF NOT EXISTS route_steps (
                id INTEGER PRIMARY KEY,
                route_id TEXT NOT NULL REFERENCES transport_routes(id) ON DELETE CASCADE,
                step INTEGER NOT NULL,
                description TEXT NOT NULL,
                duration TEXT NOT NULL,
                cost TEXT NOT NULL,
                vehicle TEXT NOT NULL
            )",
            "CREATE TABLE IF NOT EXISTS route_tips (
                id INTEGER PRIMARY KEY,
                route_id TEXT NOT NULL REFERENCES transport_routes(id) ON DELETE CASCADE,
                tip TEXT NOT NULL
            )",
        ] {
            sqlx::query(ddl).execute(&self.pool).await?;
        }

        // Query indexes
        for ddl in [
            "CREATE INDEX IF NOT EXISTS idx_destinations_category ON destinations(category)",
            "CREATE INDEX IF NOT EXISTS idx_accommodations_category ON accommodations(category)",
            "CREATE INDEX IF NOT EXISTS idx_culinaries_category ON culinaries(category)",
            "CREATE INDEX IF NOT EXISTS idx_photo_spots_category ON photo_spots(category)",
            "CREATE INDEX IF NOT EXISTS idx_transport_routes_difficulty ON transport_routes(difficulty)",
            "CREATE INDEX IF NOT EXISTS idx_reviews_destination ON reviews(destination)",
            "CREATE INDEX IF NOT EXISTS idx_destination_tips_parent ON destination_tips(destination_id)",
            "CREATE INDEX IF NOT EXISTS idx_destination_galleries_parent ON destination_galleries(destination_id)",
            "CREATE INDEX IF NOT EXISTS idx_rooms_parent ON rooms(accommodation_id)",
            "CREATE INDEX IF NOT EXISTS idx_accommodation_galleries_parent ON accommodation_galleries(accommodation_id)",
            "CREATE INDEX IF NOT EXISTS idx_culinary_specialties_parent ON culinary_specialties(culinary_id)",
            "CREATE INDEX IF NOT EXISTS idx_culinary_galleries_parent ON culinary_galleries(culinary_id)",
            "CREATE INDEX IF NOT EXISTS idx_photo_spot_tips_parent ON photo_spot_tips(photo_spot_id)",
            "CREATE INDEX IF NOT EXISTS idx_photo_spot_galleries_parent ON photo_spot_galleries(photo_spot_id)",
            "CREATE INDEX IF NOT EXISTS idx_photo_spot_nearby_parent ON photo_spot_nearby_attractions(photo_spot_id)",
            "CREATE INDEX IF NOT EXISTS idx_route_steps_parent ON route_steps(route_id)",
            "CREATE INDEX IF NOT EXISTS idx_route_tips_parent ON route_tips(route_id)",
        ] {
            sqlx::query(ddl).execute(&self.pool).await?;
        }

        Ok(())
    }

    pub(crate) async fn exists(&self, table: &str, id: &str) -> AppResult<bool> {
        let sql = format!("SELECT 1 FROM {} WHERE id = ?", table);
        let row = sqlx::query(&sql).bind(id).fetch_optional(&self.pool).await?;
        Ok(row.is_some())
    }

    /// 404 helper shared by the repositories: checks that an aggregate
    /// root with the given slug exists.
    pub(crate) async fn ensure_exists(
        &self,
        table: &str,
        resource: &str,
        id: &str,
    ) -> AppResult<()> {
        if !self.exists(table, id).await? {
            return Err(crate::error::AppError::NotFound(format!(
                "{} not found",
                resource
            )));
        }
        Ok(())
    }
}
