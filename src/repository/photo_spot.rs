use chrono::Utc;

use super::like_pattern;
use crate::database::Database;
use crate::error::{AppError, AppResult};
use crate::models::{PhotoSpot, PhotoSpotGallery, PhotoSpotNearbyAttraction, PhotoSpotTip};
use crate::schemas::photo_spot::{PhotoSpotCreate, PhotoSpotUpdate};
use crate::schemas::{GalleryImagePayload, NamePayload, TipPayload};

impl Database {
    pub async fn get_photo_spot(&self, id: &str) -> AppResult<PhotoSpot> {
        let Some(mut spot) =
            sqlx::query_as::<_, PhotoSpot>("SELECT * FROM photo_spots WHERE id = ?")
                .bind(id)
                .fetch_optional(&self.pool)
                .await?
        else {
            return Err(AppError::NotFound("Photo spot not found".to_string()));
        };
        self.load_photo_spot_children(&mut spot).await?;
        Ok(spot)
    }

    pub async fn list_photo_spots(
        &self,
        skip: i64,
        limit: i64,
        search: Option<&str>,
        category: Option<&str>,
    ) -> AppResult<Vec<PhotoSpot>> {
        let mut sql = String::from("SELECT * FROM photo_spots");
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

        let mut query = sqlx::query_as::<_, PhotoSpot>(&sql);
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

        let mut spots = query.bind(limit).bind(skip).fetch_all(&self.pool).await?;
        for spot in &mut spots {
            self.load_photo_spot_children(spot).await?;
        }
        Ok(spots)
    }

    pub async fn create_photo_spot(&self, payload: PhotoSpotCreate) -> AppResult<PhotoSpot> {
        payload.validate()?;
        if self.exists("photo_spots", &payload.id).await? {
            return Err(AppError::Conflict(format!(
                "Photo spot '{}' already exists",
                payload.id
            )));
        }

        let now = Utc::now();
        let mut tx = self.pool.begin().await?;

        sqlx::query(
            "INSERT INTO photo_spots \
             (id, title, description, full_description, image_url, category, location, best_time, created_at, updated_at) \
             VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?, ?)",
        )
        .bind(&payload.id)
        .bind(&payload.title)
        .bind(&payload.description)
        .bind(&payload.full_description)
        .bind(&payload.image_url)
        .bind(&payload.category)
        .bind(&payload.location)
        .bind(&payload.best_time)
        .bind(now)
        .bind(now)
        .execute(&mut *tx)
        .await?;

        for tip in &payload.tips {
            sqlx::query("INSERT INTO photo_spot_tips (photo_spot_id, tip) VALUES (?, ?)")
                .bind(&payload.id)
                .bind(tip)
                .execute(&mut *tx)
                .await?;
        }
        for image_url in &payload.gallery {
            sqlx::query("INSERT INTO photo_spot_galleries (photo_spot_id, image_url) VALUES (?, ?)")
                .bind(&payload.id)
                .bind(image_url)
                .execute(&mut *tx)
                .await?;
        }
        for name in &payload.nearby_attractions {
            sqlx::query(
                "INSERT INTO photo_spot_nearby_attractions (photo_spot_id, name) VALUES (?, ?)",
            )
            .bind(&payload.id)
            .bind(name)
            .execute(&mut *tx)
            .await?;
        }

        tx.commit().await?;
        self.get_photo_spot(&payload.id).await
    }

    pub async fn update_photo_spot(
        &self,
        id: &str,
        payload: PhotoSpotUpdate,
    ) -> AppResult<PhotoSpot> {
        payload.validate()?;
        self.ensure_exists("photo_spots", "Photo spot", id).await?;

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
        if payload.location.is_some() {
            sets.push("location = ?");
        }
        if payload.best_time.is_some() {
            sets.push("best_time = ?");
        }
        sets.push("updated_at = ?");

        let sql = format!("UPDATE photo_spots SET {} WHERE id = ?", sets.join(", "));
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
        if let Some(v) = &payload.location {
            query = query.bind(v);
        }
        if let Some(v) = &payload.best_time {
            query = query.bind(v);
        }
        query.bind(Utc::now()).bind(id).execute(&mut *tx).await?;

        tx.commit().await?;
        self.get_photo_spot(id).await
    }

    pub async fn delete_photo_spot(&self, id: &str) -> AppResult<bool> {
        let mut tx = self.pool.begin().await?;
        for sql in [
            "DELETE FROM photo_spot_tips WHERE photo_spot_id = ?",
            "DELETE FROM photo_spot_galleries WHERE photo_spot_id = ?",
            "DELETE FROM photo_spot_nearby_attractions WHERE photo_spot_id = ?",
        ] {
            sqlx::query(sql).bind(id).execute(&mut *tx).await?;
        }
        let done = sqlx::query("DELETE FROM photo_spots WHERE id = ?")
            .bind(id)
            .execute(&mut *tx)
            .await?;
        tx.commit().await?;
        Ok(done.rows_affected() > 0)
    }

    pub async fn add_photo_spot_tip(
        &self,
        photo_spot_id: &str,
        payload: &TipPayload,
    ) -> AppResult<PhotoSpotTip> {
        payload.validate()?;
        self.ensure_exists("photo_spots", "Photo spot", photo_spot_id)
            .await?;
        let done = sqlx::query("INSERT INTO photo_spot_tips (photo_spot_id, tip) VALUES (?, ?)")
            .bind(photo_spot_id)
            .bind(&payload.tip)
            .execute(&self.pool)
            .await?;
        Ok(PhotoSpotTip {
            id: done.last_insert_rowid(),
            photo_spot_id: photo_spot_id.to_string(),
            tip: payload.tip.clone(),
        })
    }

    pub async fn delete_photo_spot_tip(&self, photo_spot_id: &str, tip_id: i64) -> AppResult<()> {
        self.ensure_exists("photo_spots", "Photo spot", photo_spot_id)
            .await?;
        let done = sqlx::query("DELETE FROM photo_spot_tips WHERE id = ? AND photo_spot_id = ?")
            .bind(tip_id)
            .bind(photo_spot_id)
            .execute(&self.pool)
            .await?;
        if done.rows_affected() == 0 {
            return Err(AppError::NotFound("Tip not found".to_string()));
        }
        Ok(())
    }

    pub async fn add_photo_spot_gallery_image(
        &self,
        photo_spot_id: &str,
        payload: &GalleryImagePayload,
    ) -> AppResult<PhotoSpotGallery> {
        payload.validate()?;
        self.ensure_exists("photo_spots", "Photo spot", photo_spot_id)
            .await?;
        let done =
            sqlx::query("INSERT INTO photo_spot_galleries (photo_spot_id, image_url) VALUES (?, ?)")
                .bind(photo_spot_id)
                .bind(&payload.image_url)
                .execute(&self.pool)
                .await?;
        Ok(PhotoSpotGallery {
            id: done.last_insert_rowid(),
            photo_spot_id: photo_spot_id.to_string(),
            image_url: payload.image_url.clone(),
        })
    }

    pub async fn delete_photo_spot_gallery_image(
        &self,
        photo_spot_id: &str,
        image_id: i64,
    ) -> AppResult<()> {
        self.ensure_exists("photo_spots", "Photo spot", photo_spot_id)
            .await?;
        let done =
            sqlx::query("DELETE FROM photo_spot_galleries WHERE id = ? AND photo_spot_id = ?")
                .bind(image_id)
                .bind(photo_spot_id)
                .execute(&self.pool)
                .await?;
        if done.rows_affected() == 0 {
            return Err(AppError::NotFound("Gallery image not found".to_string()));
        }
        Ok(())
    }

    pub async fn add_photo_spot_nearby_attraction(
        &self,
        photo_spot_id: &str,
        payload: &NamePayload,
    ) -> AppResult<PhotoSpotNearbyAttraction> {
        payload.validate()?;
        self.ensure_exists("photo_spots", "Photo spot", photo_spot_id)
            .await?;
        let done = sqlx::query(
            "INSERT INTO photo_spot_nearby_attractions (photo_spot_id, name) VALUES (?, ?)",
        )
        .bind(photo_spot_id)
        .bind(&payload.name)
        .execute(&self.pool)
        .await?;
        Ok(PhotoSpotNearbyAttraction {
            id: done.last_insert_rowid(),
            photo_spot_id: photo_spot_id.to_string(),
            name: payload.name.clone(),
        })
    }

    pub async fn delete_photo_spot_nearby_attraction(
        &self,
        photo_spot_id: &str,
        attraction_id: i64,
    ) -> AppResult<()> {
        self.ensure_exists("photo_spots", "Photo spot", photo_spot_id)
            .await?;
        let done = sqlx::query(
            "DELETE FROM photo_spot_nearby_attractions WHERE id = ? AND photo_spot_id = ?",
        )
        .bind(attraction_id)
        .bind(photo_spot_id)
        .execute(&self.pool)
        .await?;
        if done.rows_affected() == 0 {
            return Err(AppError::NotFound("Nearby attraction not found".to_string()));
        }
        Ok(())
    }

    async fn load_photo_spot_children(&self, spot: &mut PhotoSpot) -> AppResult<()> {
        spot.tips = sqlx::query_as::<_, PhotoSpotTip>(
            "SELECT * FROM photo_spot_tips WHERE photo_spot_id = ? ORDER BY id",
        )
        .bind(&spot.id)
        .fetch_all(&self.pool)
        .await?;

        spot.gallery = sqlx::query_as::<_, PhotoSpotGallery>(
            "SELECT * FROM photo_spot_galleries WHERE photo_spot_id = ? ORDER BY id",
        )
        .bind(&spot.id)
        .fetch_all(&self.pool)
        .await?;

        spot.nearby_attractions = sqlx::query_as::<_, PhotoSpotNearbyAttraction>(
            "SELECT * FROM photo_spot_nearby_attractions WHERE photo_spot_id = ? ORDER BY id",
        )
        .bind(&spot.id)
        .fetch_all(&self.pool)
        .await?;

        Ok(())
    }
}
