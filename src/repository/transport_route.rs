use chrono::Utc;

use super::like_pattern;
use crate::database::Database;
use crate::error::{AppError, AppResult};
use crate::models::{RouteStep, RouteTip, TransportRoute};
use crate::schemas::transport_route::{
    RouteStepCreate, TransportRouteCreate, TransportRouteUpdate,
};
use crate::schemas::TipPayload;

impl Database {
    pub async fn get_transport_route(&self, id: &str) -> AppResult<TransportRoute> {
        let Some(mut route) =
            sqlx::query_as::<_, TransportRoute>("SELECT * FROM transport_routes WHERE id = ?")
                .bind(id)
                .fetch_optional(&self.pool)
                .await?
        else {
            return Err(AppError::NotFound("Transport route not found".to_string()));
        };
        self.load_transport_route_children(&mut route).await?;
        Ok(route)
    }

    /// Routes have no location column; search covers title and
    /// description. The resource-specific filter is an exact match on
    /// difficulty.
    pub async fn list_transport_routes(
        &self,
        skip: i64,
        limit: i64,
        search: Option<&str>,
        difficulty: Option<&str>,
    ) -> AppResult<Vec<TransportRoute>> {
        let mut sql = String::from("SELECT * FROM transport_routes");
        let mut clauses: Vec<&str> = Vec::new();
        if search.is_some() {
            clauses.push("(title LIKE ? ESCAPE '\\' OR description LIKE ? ESCAPE '\\')");
        }
        if difficulty.is_some() {
            clauses.push("difficulty = ?");
        }
        if !clauses.is_empty() {
            sql.push_str(" WHERE ");
            sql.push_str(&clauses.join(" AND "));
        }
        sql.push_str(" ORDER BY rowid LIMIT ? OFFSET ?");

        let mut query = sqlx::query_as::<_, TransportRoute>(&sql);
        if let Some(term) = search {
            let pattern = like_pattern(term);
            query = query.bind(pattern.clone()).bind(pattern);
        }
        if let Some(level) = difficulty {
            query = query.bind(level.to_string());
        }

        let mut routes = query.bind(limit).bind(skip).fetch_all(&self.pool).await?;
        for route in &mut routes {
            self.load_transport_route_children(route).await?;
        }
        Ok(routes)
    }

    pub async fn create_transport_route(
        &self,
        payload: TransportRouteCreate,
    ) -> AppResult<TransportRoute> {
        payload.validate()?;
        if self.exists("transport_routes", &payload.id).await? {
            return Err(AppError::Conflict(format!(
                "Transport route '{}' already exists",
                payload.id
            )));
        }

        let now = Utc::now();
        let mut tx = self.pool.begin().await?;

        sqlx::query(
            "INSERT INTO transport_routes \
             (id, title, description, estimated_cost, estimated_time, difficulty, image_url, created_at, updated_at) \
             VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?)",
        )
        .bind(&payload.id)
        .bind(&payload.title)
        .bind(&payload.description)
        .bind(&payload.estimated_cost)
        .bind(&payload.estimated_time)
        .bind(&payload.difficulty)
        .bind(&payload.image_url)
        .bind(now)
        .bind(now)
        .execute(&mut *tx)
        .await?;

        for step in &payload.steps {
            sqlx::query(
                "INSERT INTO route_steps (route_id, step, description, duration, cost, vehicle) \
                 VALUES (?, ?, ?, ?, ?, ?)",
            )
            .bind(&payload.id)
            .bind(step.step)
            .bind(&step.description)
            .bind(&step.duration)
            .bind(&step.cost)
            .bind(&step.vehicle)
            .execute(&mut *tx)
            .await?;
        }
        for tip in &payload.tips {
            sqlx::query("INSERT INTO route_tips (route_id, tip) VALUES (?, ?)")
                .bind(&payload.id)
                .bind(tip)
                .execute(&mut *tx)
                .await?;
        }

        tx.commit().await?;
        self.get_transport_route(&payload.id).await
    }

    pub async fn update_transport_route(
        &self,
        id: &str,
        payload: TransportRouteUpdate,
    ) -> AppResult<TransportRoute> {
        payload.validate()?;
        self.ensure_exists("transport_routes", "Transport route", id)
            .await?;

        let mut sets: Vec<&str> = Vec::new();
        if payload.title.is_some() {
            sets.push("title = ?");
        }
        if payload.description.is_some() {
            sets.push("description = ?");
        }
        if payload.estimated_cost.is_some() {
            sets.push("estimated_cost = ?");
        }
        if payload.estimated_time.is_some() {
            sets.push("estimated_time = ?");
        }
        if payload.difficulty.is_some() {
            sets.push("difficulty = ?");
        }
        if payload.image_url.is_some() {
            sets.push("image_url = ?");
        }
        sets.push("updated_at = ?");

        let sql = format!("UPDATE transport_routes SET {} WHERE id = ?", sets.join(", "));
        let mut query = sqlx::query(&sql);
        if let Some(v) = &payload.title {
            query = query.bind(v);
        }
        if let Some(v) = &payload.description {
            query = query.bind(v);
        }
        if let Some(v) = &payload.estimated_cost {
            query = query.bind(v);
        }
        if let Some(v) = &payload.estimated_time {
            query = query.bind(v);
        }
        if let Some(v) = &payload.difficulty {
            query = query.bind(v);
        }
        if let Some(v) = &payload.image_url {
            query = query.bind(v);
        }
        query.bind(Utc::now()).bind(id).execute(&self.pool).await?;

        self.get_transport_route(id).await
    }

    pub async fn delete_transport_route(&self, id: &str) -> AppResult<bool> {
        let mut tx = self.pool.begin().await?;
        for sql in [
            "DELETE FROM route_steps WHERE route_id = ?",
            "DELETE FROM route_tips WHERE route_id = ?",
        ] {
            sqlx::query(sql).bind(id).execute(&mut *tx).await?;
        }
        let done = sqlx::query("DELETE FROM transport_routes WHERE id = ?")
            .bind(id)
            .execute(&mut *tx)
            .await?;
        tx.commit().await?;
        Ok(done.rows_affected() > 0)
    }

    pub async fn add_route_step(
        &self,
        route_id: &str,
        payload: &RouteStepCreate,
    ) -> AppResult<RouteStep> {
        payload.validate()?;
        self.ensure_exists("transport_routes", "Transport route", route_id)
            .await?;
        let done = sqlx::query(
            "INSERT INTO route_steps (route_id, step, description, duration, cost, vehicle) \
             VALUES (?, ?, ?, ?, ?, ?)",
        )
        .bind(route_id)
        .bind(payload.step)
        .bind(&payload.description)
        .bind(&payload.duration)
        .bind(&payload.cost)
        .bind(&payload.vehicle)
        .execute(&self.pool)
        .await?;
        Ok(RouteStep {
            id: done.last_insert_rowid(),
            route_id: route_id.to_string(),
            step: payload.step,
            description: payload.description.clone(),
            duration: payload.duration.clone(),
            cost: payload.cost.clone(),
            vehicle: payload.vehicle.clone(),
        })
    }

    pub async fn delete_route_step(&self, route_id: &str, step_id: i64) -> AppResult<()> {
        self.ensure_exists("transport_routes", "Transport route", route_id)
            .await?;
        let done = sqlx::query("DELETE FROM route_steps WHERE id = ? AND route_id = ?")
            .bind(step_id)
            .bind(route_id)
            .execute(&self.pool)
            .await?;
        if done.rows_affected() == 0 {
            return Err(AppError::NotFound("Route step not found".to_string()));
        }
        Ok(())
    }

    pub async fn add_route_tip(&self, route_id: &str, payload: &TipPayload) -> AppResult<RouteTip> {
        payload.validate()?;
        self.ensure_exists("transport_routes", "Transport route", route_id)
            .await?;
        let done = sqlx::query("INSERT INTO route_tips (route_id, tip) VALUES (?, ?)")
            .bind(route_id)
            .bind(&payload.tip)
            .execute(&self.pool)
            .await?;
        Ok(RouteTip {
            id: done.last_insert_rowid(),
            route_id: route_id.to_string(),
            tip: payload.tip.clone(),
        })
    }

    pub async fn delete_route_tip(&self, route_id: &str, tip_id: i64) -> AppResult<()> {
        self.ensure_exists("transport_routes", "Transport route", route_id)
            .await?;
        let done = sqlx::query("DELETE FROM route_tips WHERE id = ? AND route_id = ?")
            .bind(tip_id)
            .bind(route_id)
            .execute(&self.pool)
            .await?;
        if done.rows_affected() == 0 {
            return Err(AppError::NotFound("Route tip not found".to_string()));
        }
        Ok(())
    }

    async fn load_transport_route_children(&self, route: &mut TransportRoute) -> AppResult<()> {
        route.steps = sqlx::query_as::<_, RouteStep>(
            "SELECT * FROM route_steps WHERE route_id = ? ORDER BY id",
        )
        .bind(&route.id)
        .fetch_all(&self.pool)
        .await?;

        route.tips = sqlx::query_as::<_, RouteTip>(
            "SELECT * FROM route_tips WHERE route_id = ? ORDER BY id",
        )
        .bind(&route.id)
        .fetch_all(&self.pool)
        .await?;

        Ok(())
    }
}
