use chrono::Utc;

use crate::database::Database;
use crate::error::{AppError, AppResult};
use crate::models::Review;
use crate::schemas::review::{ReviewCreate, ReviewUpdate};

impl Database {
    pub async fn get_review(&self, id: &str) -> AppResult<Review> {
        sqlx::query_as::<_, Review>("SELECT * FROM reviews WHERE id = ?")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?
            .ok_or_else(|| AppError::NotFound("Review not found".to_string()))
    }

    /// Reviews have no substring search; the only filter is an exact
    /// match on the free-text destination title.
    pub async fn list_reviews(
        &self,
        skip: i64,
        limit: i64,
        destination: Option<&str>,
    ) -> AppResult<Vec<Review>> {
        let mut sql = String::from("SELECT * FROM reviews");
        if destination.is_some() {
            sql.push_str(" WHERE destination = ?");
        }
        sql.push_str(" ORDER BY rowid LIMIT ? OFFSET ?");

        let mut query = sqlx::query_as::<_, Review>(&sql);
        if let Some(dest) = destination {
            query = query.bind(dest.to_string());
        }
        Ok(query.bind(limit).bind(skip).fetch_all(&self.pool).await?)
    }

    pub async fn create_review(&self, payload: ReviewCreate) -> AppResult<Review> {
        payload.validate()?;
        if self.exists("reviews", &payload.id).await? {
            return Err(AppError::Conflict(format!(
                "Review '{}' already exists",
                payload.id
            )));
        }

        let now = Utc::now();
        sqlx::query(
            "INSERT INTO reviews (id, name, image_url, date, rating, text, destination, created_at, updated_at) \
             VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?)",
        )
        .bind(&payload.id)
        .bind(&payload.name)
        .bind(&payload.image_url)
        .bind(&payload.date)
        .bind(payload.rating)
        .bind(&payload.text)
        .bind(&payload.destination)
        .bind(now)
        .bind(now)
        .execute(&self.pool)
        .await?;

        self.get_review(&payload.id).await
    }

    pub async fn update_review(&self, id: &str, payload: ReviewUpdate) -> AppResult<Review> {
        payload.validate()?;
        self.ensure_exists("reviews", "Review", id).await?;

        let mut sets: Vec<&str> = Vec::new();
        if payload.name.is_some() {
            sets.push("name = ?");
        }
        if payload.image_url.is_some() {
            sets.push("image_url = ?");
        }
        if payload.date.is_some() {
            sets.push("date = ?");
        }
        if payload.rating.is_some() {
            sets.push("rating = ?");
        }
        if payload.text.is_some() {
            sets.push("text = ?");
        }
        if payload.destination.is_some() {
            sets.push("destination = ?");
        }
        sets.push("updated_at = ?");

        let sql = format!("UPDATE reviews SET {} WHERE id = ?", sets.join(", "));
        let mut query = sqlx::query(&sql);
        if let Some(v) = &payload.name {
            query = query.bind(v);
        }
        if let Some(v) = &payload.image_url {
            query = query.bind(v);
        }
        if let Some(v) = &payload.date {
            query = query.bind(v);
        }
        if let Some(v) = payload.rating {
            query = query.bind(v);
        }
        if let Some(v) = &payload.text {
            query = query.bind(v);
        }
        if let Some(v) = &payload.destination {
            query = query.bind(v);
        }
        query.bind(Utc::now()).bind(id).execute(&self.pool).await?;

        self.get_review(id).await
    }

    pub async fn delete_review(&self, id: &str) -> AppResult<bool> {
        let done = sqlx::query("DELETE FROM reviews WHERE id = ?")
            .bind(id)
            .execute(&self.pool)
            .await?;
        Ok(done.rows_affected() > 0)
    }
}
