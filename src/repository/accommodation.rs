use chrono::Utc;

use super::like_pattern;
use crate::database::Database;
use crate::error::{AppError, AppResult};
use crate::models::{Accommodation, AccommodationGallery, Facility, Room};
use crate::schemas::accommodation::{AccommodationCreate, AccommodationUpdate, RoomCreate};
use crate::schemas::GalleryImagePayload;

impl Database {
    pub async fn get_accommodation(&self, id: &str) -> AppResult<Accommodation> {
        let Some(mut accommodation) =
            sqlx::query_as::<_, Accommodation>("SELECT * FROM accommodations WHERE id = ?")
                .bind(id)
                .fetch_optional(&self.pool)
                .await?
        else {
            return Err(AppError::NotFound("Accommodation not found".to_string()));
        };
        self.load_accommodation_children(&mut accommodation).await?;
        Ok(accommodation)
    }

    pub async fn list_accommodations(
        &self,
        skip: i64,
        limit: i64,
        search: Option<&str>,
        category: Option<&str>,
    ) -> AppResult<Vec<Accommodation>> {
        let mut sql = String::from("SELECT * FROM accommodations");
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

        let mut query = sqlx::query_as::<_, Accommodation>(&sql);
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

        let mut accommodations = query.bind(limit).bind(skip).fetch_all(&self.pool).await?;
        for accommodation in &mut accommodations {
            self.load_accommodation_children(accommodation).await?;
        }
        Ok(accommodations)
    }

    pub async fn create_accommodation(
        &self,
        payload: AccommodationCreate,
    ) -> AppResult<Accommodation> {
        payload.validate()?;
        if self.exists("accommodations", &payload.id).await? {
            return Err(AppError::Conflict(format!(
                "Accommodation '{}' already exists",
                payload.id
            )));
        }

        let facilities = self.resolve_facilities(&payload.facilities).await?;

        let now = Utc::now();
        let mut tx = self.pool.begin().await?;

        sqlx::query(
            "INSERT INTO accommodations \
             (id, title, description, full_description, image_url, category, price, location, contact, website, created_at, updated_at) \
             VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?)",
        )
        .bind(&payload.id)
        .bind(&payload.title)
        .bind(&payload.description)
        .bind(&payload.full_description)
        .bind(&payload.image_url)
        .bind(&payload.category)
        .bind(&payload.price)
        .bind(&payload.location)
        .bind(&payload.contact)
        .bind(&payload.website)
        .bind(now)
        .bind(now)
        .execute(&mut *tx)
        .await?;

        for facility in &facilities {
            sqlx::query(
                "INSERT INTO accommodation_facility (accommodation_id, facility_id) VALUES (?, ?)",
            )
            .bind(&payload.id)
            .bind(facility.id)
            .execute(&mut *tx)
            .await?;
        }
        for room in &payload.rooms {
            sqlx::query(
                "INSERT INTO rooms (accommodation_id, type, price, capacity, description) VALUES (?, ?, ?, ?, ?)",
            )
            .bind(&payload.id)
            .bind(&room.room_type)
            .bind(&room.price)
            .bind(&room.capacity)
            .bind(&room.description)
            .execute(&mut *tx)
            .await?;
        }
        for image_url in &payload.gallery {
            sqlx::query(
                "INSERT INTO accommodation_galleries (accommodation_id, image_url) VALUES (?, ?)",
            )
            .bind(&payload.id)
            .bind(image_url)
            .execute(&mut *tx)
            .await?;
        }

        tx.commit().await?;
        self.get_accommodation(&payload.id).await
    }

    pub async fn update_accommodation(
        &self,
        id: &str,
        payload: AccommodationUpdate,
    ) -> AppResult<Accommodation> {
        payload.validate()?;
        self.ensure_exists("accommodations", "Accommodation", id)
            .await?;

        let facilities = match &payload.facilities {
            Some(names) => Some(self.resolve_facilities(names).await?),
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
        if payload.contact.is_some() {
            sets.push("contact = ?");
        }
        if payload.website.is_some() {
            sets.push("website = ?");
        }
        sets.push("updated_at = ?");

        let sql = format!("UPDATE accommodations SET {} WHERE id = ?", sets.join(", "));
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
        if let Some(v) = &payload.contact {
            query = query.bind(v);
        }
        if let Some(v) = &payload.website {
            query = query.bind(v);
        }
        query.bind(Utc::now()).bind(id).execute(&mut *tx).await?;

        if let Some(facilities) = &facilities {
            sqlx::query("DELETE FROM accommodation_facility WHERE accommodation_id = ?")
                .bind(id)
                .execute(&mut *tx)
                .await?;
            for facility in facilities {
                sqlx::query(
                    "INSERT INTO accommodation_facility (accommodation_id, facility_id) VALUES (?, ?)",
                )
                .bind(id)
                .bind(facility.id)
                .execute(&mut *tx)
                .await?;
            }
        }

        tx.commit().await?;
        self.get_accommodation(id).await
    }

    pub async fn delete_accommodation(&self, id: &str) -> AppResult<bool> {
        let mut tx = self.pool.begin().await?;
        for sql in [
            "DELETE FROM accommodation_facility WHERE accommodation_id = ?",
            "DELETE FROM rooms WHERE accommodation_id = ?",
            "DELETE FROM accommodation_galleries WHERE accommodation_id = ?",
        ] {
            sqlx::query(sql).bind(id).execute(&mut *tx).await?;
        }
        let done = sqlx::query("DELETE FROM accommodations WHERE id = ?")
            .bind(id)
            .execute(&mut *tx)
            .await?;
        tx.commit().await?;
        Ok(done.rows_affected() > 0)
    }

    pub async fn add_room(&self, accommodation_id: &str, payload: &RoomCreate) -> AppResult<Room> {
        payload.validate()?;
        self.ensure_exists("accommodations", "Accommodation", accommodation_id)
            .await?;
        let done = sqlx::query(
            "INSERT INTO rooms (accommodation_id, type, price, capacity, description) VALUES (?, ?, ?, ?, ?)",
        )
        .bind(accommodation_id)
        .bind(&payload.room_type)
        .bind(&payload.price)
        .bind(&payload.capacity)
        .bind(&payload.description)
        .execute(&self.pool)
        .await?;
        Ok(Room {
            id: done.last_insert_rowid(),
            accommodation_id: accommodation_id.to_string(),
            room_type: payload.room_type.clone(),
            price: payload.price.clone(),
            capacity: payload.capacity.clone(),
            description: payload.description.clone(),
        })
    }

    pub async fn delete_room(&self, accommodation_id: &str, room_id: i64) -> AppResult<()> {
        self.ensure_exists("accommodations", "Accommodation", accommodation_id)
            .await?;
        let done = sqlx::query("DELETE FROM rooms WHERE id = ? AND accommodation_id = ?")
            .bind(room_id)
            .bind(accommodation_id)
            .execute(&self.pool)
            .await?;
        if done.rows_affected() == 0 {
            return Err(AppError::NotFound("Room not found".to_string()));
        }
        Ok(())
    }

    pub async fn add_accommodation_gallery_image(
        &self,
        accommodation_id: &str,
        payload: &GalleryImagePayload,
    ) -> AppResult<AccommodationGallery> {
        payload.validate()?;
        self.ensure_exists("accommodations", "Accommodation", accommodation_id)
            .await?;
        let done = sqlx::query(
            "INSERT INTO accommodation_galleries (accommodation_id, image_url) VALUES (?, ?)",
        )
        .bind(accommodation_id)
        .bind(&payload.image_url)
        .execute(&self.pool)
        .await?;
        Ok(AccommodationGallery {
            id: done.last_insert_rowid(),
            accommodation_id: accommodation_id.to_string(),
            image_url: payload.image_url.clone(),
        })
    }

    pub async fn delete_accommodation_gallery_image(
        &self,
        accommodation_id: &str,
        image_id: i64,
    ) -> AppResult<()> {
        self.ensure_exists("accommodations", "Accommodation", accommodation_id)
            .await?;
        let done =
            sqlx::query("DELETE FROM accommodation_galleries WHERE id = ? AND accommodation_id = ?")
                .bind(image_id)
                .bind(accommodation_id)
                .execute(&self.pool)
                .await?;
        if done.rows_affected() == 0 {
            return Err(AppError::NotFound("Gallery image not found".to_string()));
        }
        Ok(())
    }

    async fn load_accommodation_children(
        &self,
        accommodation: &mut Accommodation,
    ) -> AppResult<()> {
        accommodation.facilities = sqlx::query_as::<_, Facility>(
            "SELECT f.id, f.name FROM facilities f \
             JOIN accommodation_facility af ON af.facility_id = f.id \
             WHERE af.accommodation_id = ? ORDER BY af.rowid",
        )
        .bind(&accommodation.id)
        .fetch_all(&self.pool)
        .await?;

        accommodation.rooms = sqlx::query_as::<_, Room>(
            "SELECT * FROM rooms WHERE accommodation_id = ? ORDER BY id",
        )
        .bind(&accommodation.id)
        .fetch_all(&self.pool)
        .await?;

        accommodation.gallery = sqlx::query_as::<_, AccommodationGallery>(
            "SELECT * FROM accommodation_galleries WHERE accommodation_id = ? ORDER BY id",
        )
        .bind(&accommodation.id)
        .fetch_all(&self.pool)
        .await?;

        Ok(())
    }
}
