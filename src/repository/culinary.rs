use chrono::Utc;

use super::like_pattern;
use crate::database::Database;
use crate::error::{AppError, AppResult};
use crate::models::{Culinary, CulinaryGallery, CulinarySpecialty};
use crate::schemas::culinary::{CulinaryCreate, CulinaryUpdate};
use crate::schemas::{GalleryImagePayload, NamePayload};

impl Database {
    pub async fn get_culinary(&self, id: &str) -> AppResult<Culinary> {
        let Some(mut culinary) =
            sqlx::query_as::<_, Culinary>("SELECT * FROM culinaries WHERE id = ?")
                .bind(id)
                .fetch_optional(&self.pool)
                .await?
        else {
            return Err(AppError::NotFound("Culinary not found".to_string()));
        };
        self.load_culinary_children(&mut culinary).await?;
        Ok(culinary)
    }

    pub async fn list_culinaries(
        &self,
        skip: i64,
        limit: i64,
        search: Option<&str>,
        category: Option<&str>,
    ) -> AppResult<Vec<Culinary>> {
        let mut sql = String::from("SELECT * FROM culinaries");
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

        let mut query = sqlx::query_as::<_, Culinary>(&sql);
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

        let mut culinaries = query.bind(limit).bind(skip).fetch_all(&self.pool).await?;
        for culinary in &mut culinaries {
            self.load_culinary_children(culinary).await?;
        }
        Ok(culinaries)
    }

    pub async fn create_culinary(&self, payload: CulinaryCreate) -> AppResult<Culinary> {
        payload.validate()?;
        if self.exists("culinaries", &payload.id).await? {
            return Err(AppError::Conflict(format!(
                "Culinary '{}' already exists",
                payload.id
            )));
        }

        let now = Utc::now();
        let mut tx = self.pool.begin().await?;

        sqlx::query(
            "INSERT INTO culinaries \
             (id, title, description, full_description, image_url, category, price, location, open_hours, contact, created_at, updated_at) \
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
        .bind(&payload.open_hours)
        .bind(&payload.contact)
        .bind(now)
        .bind(now)
        .execute(&mut *tx)
        .await?;

        for name in &payload.specialties {
            sqlx::query("INSERT INTO culinary_specialties (culinary_id, name) VALUES (?, ?)")
                .bind(&payload.id)
                .bind(name)
                .execute(&mut *tx)
                .await?;
        }
        for image_url in &payload.gallery {
            sqlx::query("INSERT INTO culinary_galleries (culinary_id, image_url) VALUES (?, ?)")
                .bind(&payload.id)
                .bind(image_url)
                .execute(&mut *tx)
                .await?;
        }

        tx.commit().await?;
        self.get_culinary(&payload.id).await
    }

    pub async fn update_culinary(&self, id: &str, payload: CulinaryUpdate) -> AppResult<Culinary> {
        payload.validate()?;
        self.ensure_exists("culinaries", "Culinary", id).await?;

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
        if payload.contact.is_some() {
            sets.push("contact = ?");
        }
        sets.push("updated_at = ?");

        let sql = format!("UPDATE culinaries SET {} WHERE id = ?", sets.join(", "));
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
        if let Some(v) = &payload.contact {
            query = query.bind(v);
        }
        query.bind(Utc::now()).bind(id).execute(&mut *tx).await?;

        tx.commit().await?;
        self.get_culinary(id).await
    }

    pub async fn delete_culinary(&self, id: &str) -> AppResult<bool> {
        let mut tx = self.pool.begin().await?;
        for sql in [
            "DELETE FROM culinary_specialties WHERE culinary_id = ?",
            "DELETE FROM culinary_galleries WHERE culinary_id = ?",
        ] {
            sqlx::query(sql).bind(id).execute(&mut *tx).await?;
        }
        let done = sqlx::query("DELETE FROM culinaries WHERE id = ?")
            .bind(id)
            .execute(&mut *tx)
            .await?;
        tx.commit().await?;
        Ok(done.rows_affected() > 0)
    }

    pub async fn add_culinary_specialty(
        &self,
        culinary_id: &str,
        payload: &NamePayload,
    ) -> AppResult<CulinarySpecialty> {
        payload.validate()?;
        self.ensure_exists("culinaries", "Culinary", culinary_id)
            .await?;
        let done = sqlx::query("INSERT INTO culinary_specialties (culinary_id, name) VALUES (?, ?)")
            .bind(culinary_id)
            .bind(&payload.name)
            .execute(&self.pool)
            .await?;
        Ok(CulinarySpecialty {
            id: done.last_insert_rowid(),
            culinary_id: culinary_id.to_string(),
            name: payload.name.clone(),
        })
    }

    pub async fn delete_culinary_specialty(
        &self,
        culinary_id: &str,
        specialty_id: i64,
    ) -> AppResult<()> {
        self.ensure_exists("culinaries", "Culinary", culinary_id)
            .await?;
        let done = sqlx::query("DELETE FROM culinary_specialties WHERE id = ? AND culinary_id = ?")
            .bind(specialty_id)
            .bind(culinary_id)
            .execute(&self.pool)
            .await?;
        if done.rows_affected() == 0 {
            return Err(AppError::NotFound("Specialty not found".to_string()));
        }
        Ok(())
    }

    pub async fn add_culinary_gallery_image(
        &self,
        culinary_id: &str,
        payload: &GalleryImagePayload,
    ) -> AppResult<CulinaryGallery> {
        payload.validate()?;
        self.ensure_exists("culinaries", "Culinary", culinary_id)
            .await?;
        let done = sqlx::query("INSERT INTO culinary_galleries (culinary_id, image_url) VALUES (?, ?)")
            .bind(culinary_id)
            .bind(&payload.image_url)
            .execute(&self.pool)
            .await?;
        Ok(CulinaryGallery {
            id: done.last_insert_rowid(),
            culinary_id: culinary_id.to_string(),
            image_url: payload.image_url.clone(),
        })
    }

    pub async fn delete_culinary_gallery_image(
        &self,
        culinary_id: &str,
        image_id: i64,
    ) -> AppResult<()> {
        self.ensure_exists("culinaries", "Culinary", culinary_id)
            .await?;
        let done = sqlx::query("DELETE FROM culinary_galleries WHERE id = ? AND culinary_id = ?")
            .bind(image_id)
            .bind(culinary_id)
            .execute(&self.pool)
            .await?;
        if done.rows_affected() == 0 {
            return Err(AppError::NotFound("Gallery image not found".to_string()));
        }
        Ok(())
    }

    async fn load_culinary_children(&self, culinary: &mut Culinary) -> AppResult<()> {
        culinary.specialties = sqlx::query_as::<_, CulinarySpecialty>(
            "SELECT * FROM culinary_specialties WHERE culinary_id = ? ORDER BY id",
        )
        .bind(&culinary.id)
        .fetch_all(&self.pool)
        .await?;

        culinary.gallery = sqlx::query_as::<_, CulinaryGallery>(
            "SELECT * FROM culinary_galleries WHERE culinary_id = ? ORDER BY id",
        )
        .bind(&culinary.id)
        .fetch_all(&self.pool)
        .await?;

        Ok(())
    }
}
