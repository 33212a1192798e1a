use chrono::Utc;

use super::like_pattern;
use crate::database::Database;
use crate::error::{AppError, AppResult};
use crate::models::{Activity, Destination, DestinationGallery, DestinationTip, Facility};
use crate::schemas::destination::{DestinationCreate, DestinationUpdate};
use crate::schemas::{GalleryImagePayload, TipPayload};

impl Database {
    pub async fn get_destination(&self, id: &str) -> AppResult<Destination> {
        let Some(mut destination) =
            sqlx::query_as::<_, Destination>("SELECT * FROM destinations WHERE id = ?")
                .bind(id)
                .fetch_optional(&self.pool)
                .await?
        else {
            return Err(AppError::NotFound("Destination not found".to_string()));
        };
        self.load_destination_children(&mut destination).await?;
        Ok(destination)
    }

    /// Search matches title, description or location as a substring.
    /// Category is part of the same query as the pagination window, so
    /// `skip`/`limit` apply to the filtered set.
    pub async fn list_destinations(
        &self,
        skip: i64,
        limit: i64,
        search: Option<&str>,
        category: Option<&str>,
    ) -> AppResult<Vec<Destination>> {
        let mut sql = String::from("SELECT * FROM destinations");
        let mut clauses: Vec<&str> = Vec::new();
        if search.is_some() {
            clauses.push(
                "(title LIKE ? ESCAPE '\\' OR description LIKE ? ESCAPE '\\' OR location LIKE ? ESCAPE '\\')",
            );
        }
        if category.is_some() {
            clauses.push("category = ?");
        }
        if !clauses.is_empty() {
            sql.push_str(" WHERE ");
            sql.push_str(&clauses.join(" AND "));
        }
        sql.push_str(" ORDER BY rowid LIMIT ? OFFSET ?");

        let mut query = sqlx::query_as::<_, Destination>(&sql);
        if let Some(term) = search {
            let pattern = like_pattern(term);
            query = query
                .bind(pattern.clone())
                .bind(pattern.clone())
                .bind(pattern);
        }
        if let Some(cat) = category {
            query = query.bind(cat.to_string());
        }

        let mut destinations = query.bind(limit).bind(skip).fetch_all(&self.pool).await?;
        for destination in &mut destinations {
            self.load_destination_children(destination).await?;
        }
        Ok(destinations)
    }

    pub async fn create_destination(&self, payload: DestinationCreate) -> AppResult<Destination> {
        payload.validate()?;
        if self.exists("destinations", &payload.id).await? {
            return Err(AppError::Conflict(format!(
                "Destination '{}' already exists",
                payload.id
            )));
        }

        // Lookup rows are persisted before the aggregate transaction.
        let facilities = self.resolve_facilities(&payload.facilities).await?;
        let activities = self.resolve_activities(&payload.activities).await?;

        let now = Utc::now();
        let mut tx = self.pool.begin().await?;

        sqlx::query(
            "INSERT INTO destinations \
             (id, title, description, full_description, image_url, category, price, location, open_hours, created_at, updated_at) \
             VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?)",
        )
        .bind(&payload.id)
        .bind(&payload.title)
        .bind(&payload.description)
        .bind(&payload.full_description)
        .bind(&payload.image_url)
        .bind(&payload.category)
        .bind(&payload.price)
        .bind(&payload.location)
        .bind(&payload.open_hours)
        .bind(now)
        .bind(now)
        .execute(&mut *tx)
        .await?;

        for facility in &facilities {
            sqlx::query("INSERT INTO destination_facility (destination_id, facility_id) VALUES (?, ?)")
                .bind(&payload.id)
                .bind(facility.id)
                .execute(&mut *tx)
                .await?;
        }
        for activity in &activities {
            sqlx::query("INSERT INTO destination_activity (destination_id, activity_id) VALUES (?, ?)")
                .bind(&payload.id)
                .bind(activity.id)
                .execute(&mut *tx)
                .await?;
        }
        for tip in &payload.tips {
            sqlx::query("INSERT INTO destination_tips (destination_id, tip) VALUES (?, ?)")
                .bind(&payload.id)
                .bind(tip)
                .execute(&mut *tx)
                .await?;
        }
        for image_url in &payload.gallery {
            sqlx::query("INSERT INTO destination_galleries (destination_id, image_url) VALUES (?, ?)")
                .bind(&payload.id)
                .bind(image_url)
                .execute(&mut *tx)
                .await?;
        }

        tx.commit().await?;
        self.get_destination(&payload.id).await
    }

    /// Partial update: only fields present in the payload are written.
    /// An association list present in the payload (even empty) replaces
    /// the stored set; an absent list leaves the joins untouched. Tips
    /// and gallery are create-only here; see the child operations below.
    pub async fn update_destination(
        &self,
        id: &str,
        payload: DestinationUpdate,
    ) -> AppResult<Destination> {
        payload.validate()?;
        self.ensure_exists("destinations", "Destination", id).await?;

        let facilities = match &payload.facilities {
            Some(names) => Some(self.resolve_facilities(names).await?),
            None => None,
        };
        let activities = match &payload.activities {
            Some(names) => Some(self.resolve_activities(names).await?),
            None => None,
        };

        let mut tx = self.pool.begin().await?;

        let mut sets: Vec<&str> = Vec::new();
        if payload.title.is_some() {
            sets.push("title = ?");
        }
        if payload.description.is_some() {
            sets.push("description = ?");
        }
        if payload.full_description.is_some() {
            sets.push("full_description = ?");
        }
        if payload.image_url.is_some() {
            sets.push("image_url = ?");
        }
        if payload.category.is_some() {
            sets.push("category = ?");
        }
        if payload.price.is_some() {
            sets.push("price = ?");
        }
        if payload.location.is_some() {
            sets.push("location = ?");
        }
        if payload.open_hours.is_some() {
            sets.push("open_hours = ?");
        }
        sets.push("updated_at = ?");

        let sql = format!("UPDATE destinations SET {} WHERE id = ?", sets.join(", "));
        let mut query = sqlx::query(&sql);
        if let Some(v) = &payload.title {
            query = query.bind(v);
        }
        if let Some(v) = &payload.description {
            query = query.bind(v);
        }
        if let Some(v) = &payload.full_description {
            query = query.bind(v);
        }
        if let Some(v) = &payload.image_url {
            query = query.bind(v);
        }
        if let Some(v) = &payload.category {
            query = query.bind(v);
        }
        if let Some(v) = &payload.price {
            query = query.bind(v);
        }
        if let Some(v) = &payload.location {
            query = query.bind(v);
        }
        if let Some(v) = &payload.open_hours {
            query = query.bind(v);
        }
        query.bind(Utc::now()).bind(id).execute(&mut *tx).await?;

        if let Some(facilities) = &facilities {
            sqlx::query("DELETE FROM destination_facility WHERE destination_id = ?")
                .bind(id)
                .execute(&mut *tx)
                .await?;
            for facility in facilities {
                sqlx::query(
                    "INSERT INTO destination_facility (destination_id, facility_id) VALUES (?, ?)",
                )
                .bind(id)
                .bind(facility.id)
                .execute(&mut *tx)
                .await?;
            }
        }
        if let Some(activities) = &activities {
            sqlx::query("DELETE FROM destination_activity WHERE destination_id = ?")
                .bind(id)
                .execute(&mut *tx)
                .await?;
            for activity in activities {
                sqlx::query(
                    "INSERT INTO destination_activity (destination_id, activity_id) VALUES (?, ?)",
                )
                .bind(id)
                .bind(activity.id)
                .execute(&mut *tx)
                .await?;
            }
        }

        tx.commit().await?;
        self.get_destination(id).await
    }

    /// Removes the destination with its owned children and join rows in
    /// one transaction. Shared facility/activity rows are not touched.
    pub async fn delete_destination(&self, id: &str) -> AppResult<bool> {
        let mut tx = self.pool.begin().await?;
        for sql in [
            "DELETE FROM destination_facility WHERE destination_id = ?",
            "DELETE FROM destination_activity WHERE destination_id = ?",
            "DELETE FROM destination_tips WHERE destination_id = ?",
            "DELETE FROM destination_galleries WHERE destination_id = ?",
        ] {
            sqlx::query(sql).bind(id).execute(&mut *tx).await?;
        }
        let done = sqlx::query("DELETE FROM destinations WHERE id = ?")
            .bind(id)
            .execute(&mut *tx)
            .await?;
        tx.commit().await?;
        Ok(done.rows_affected() > 0)
    }

    pub async fn add_destination_tip(
        &self,
        destination_id: &str,
        payload: &TipPayload,
    ) -> AppResult<DestinationTip> {
        payload.validate()?;
        self.ensure_exists("destinations", "Destination", destination_id)
            .await?;
        let done = sqlx::query("INSERT INTO destination_tips (destination_id, tip) VALUES (?, ?)")
            .bind(destination_id)
            .bind(&payload.tip)
            .execute(&self.pool)
            .await?;
        Ok(DestinationTip {
            id: done.last_insert_rowid(),
            destination_id: destination_id.to_string(),
            tip: payload.tip.clone(),
        })
    }

    pub async fn delete_destination_tip(
        &self,
        destination_id: &str,
        tip_id: i64,
    ) -> AppResult<()> {
        self.ensure_exists("destinations", "Destination", destination_id)
            .await?;
        let done = sqlx::query("DELETE FROM destination_tips WHERE id = ? AND destination_id = ?")
            .bind(tip_id)
            .bind(destination_id)
            .execute(&self.pool)
            .await?;
        if done.rows_affected() == 0 {
            return Err(AppError::NotFound("Tip not found".to_string()));
        }
        Ok(())
    }

    pub async fn add_destination_gallery_image(
        &self,
        destination_id: &str,
        payload: &GalleryImagePayload,
    ) -> AppResult<DestinationGallery> {
        payload.validate()?;
        self.ensure_exists("destinations", "Destination", destination_id)
            .await?;
        let done =
            sqlx::query("INSERT INTO destination_galleries (destination_id, image_url) VALUES (?, ?)")
                .bind(destination_id)
                .bind(&payload.image_url)
                .execute(&self.pool)
                .await?;
        Ok(DestinationGallery {
            id: done.last_insert_rowid(),
            destination_id: destination_id.to_string(),
            image_url: payload.image_url.clone(),
        })
    }

    pub async fn delete_destination_gallery_image(
        &self,
        destination_id: &str,
        image_id: i64,
    ) -> AppResult<()> {
        self.ensure_exists("destinations", "Destination", destination_id)
            .await?;
        let done =
            sqlx::query("DELETE FROM destination_galleries WHERE id = ? AND destination_id = ?")
                .bind(image_id)
                .bind(destination_id)
                .execute(&self.pool)
                .await?;
        if done.rows_affected() == 0 {
            return Err(AppError::NotFound("Gallery image not found".to_string()));
        }
        Ok(())
    }

    async fn load_destination_children(&self, destination: &mut Destination) -> AppResult<()> {
        destination.facilities = sqlx::query_as::<_, Facility>(
            "SELECT f.id, f.name FROM facilities f \
             JOIN destination_facility df ON df.facility_id = f.id \
             WHERE df.destination_id = ? ORDER BY df.rowid",
        )
        .bind(&destination.id)
        .fetch_all(&self.pool)
        .await?;

        destination.activities = sqlx::query_as::<_, Activity>(
            "SELECT a.id, a.name FROM activities a \
             JOIN destination_activity da ON da.activity_id = a.id \
             WHERE da.destination_id = ? ORDER BY da.rowid",
        )
        .bind(&destination.id)
        .fetch_all(&self.pool)
        .await?;

        destination.tips = sqlx::query_as::<_, DestinationTip>(
            "SELECT * FROM destination_tips WHERE destination_id = ? ORDER BY id",
        )
        .bind(&destination.id)
        .fetch_all(&self.pool)
        .await?;

        destination.gallery = sqlx::query_as::<_, DestinationGallery>(
            "SELECT * FROM destination_galleries WHERE destination_id = ? ORDER BY id",
        )
        .bind(&destination.id)
        .fetch_all(&self.pool)
        .await?;

        Ok(())
    }
}
