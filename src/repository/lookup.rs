use sqlx::error::ErrorKind;

use crate::database::Database;
use crate::error::{AppError, AppResult};
use crate::models::{Activity, Facility};

/// Association resolver for the shared name-keyed lookup tables.
///
/// Given free-text names, returns the matching lookup rows, creating any
/// name not seen before. Matching is case-sensitive exact; input order is
/// preserved and duplicate names within one call collapse to a single row.
/// New rows are persisted immediately, outside the caller's aggregate
/// transaction, so a failed create never orphans half a lookup set.
impl Database {
    pub async fn resolve_facilities(&self, names: &[String]) -> AppResult<Vec<Facility>> {
        let mut resolved: Vec<Facility> = Vec::with_capacity(names.len());
        for name in names {
            if resolved.iter().any(|f| &f.name == name) {
                continue;
            }
            let id = self.find_or_create_named("facilities", name).await?;
            resolved.push(Facility {
                id,
                name: name.clone(),
            });
        }
        Ok(resolved)
    }

    pub async fn resolve_activities(&self, names: &[String]) -> AppResult<Vec<Activity>> {
        let mut resolved: Vec<Activity> = Vec::with_capacity(names.len());
        for name in names {
            if resolved.iter().any(|a| &a.name == name) {
                continue;
            }
            let id = self.find_or_create_named("activities", name).await?;
            resolved.push(Activity {
                id,
                name: name.clone(),
            });
        }
        Ok(resolved)
    }

    async fn find_named(&self, table: &str, name: &str) -> AppResult<Option<i64>> {
        let sql = format!("SELECT id FROM {} WHERE name = ?", table);
        let id = sqlx::query_scalar::<_, i64>(&sql)
            .bind(name)
            .fetch_optional(&self.pool)
            .await?;
        Ok(id)
    }

    async fn find_or_create_named(&self, table: &str, name: &str) -> AppResult<i64> {
        if let Some(id) = self.find_named(table, name).await? {
            return Ok(id);
        }

        let sql = format!("INSERT INTO {} (name) VALUES (?)", table);
        match sqlx::query(&sql).bind(name).execute(&self.pool).await {
            Ok(done) => Ok(done.last_insert_rowid()),
            Err(sqlx::Error::Database(db_err))
                if matches!(db_err.kind(), ErrorKind::UniqueViolation) =>
            {
                // Lost the lookup-then-create race to a concurrent
                // creator; the row exists now, so retry the lookup once.
                self.find_named(table, name).await?.ok_or_else(|| {
                    AppError::Conflict(format!("duplicate name '{}' in {}", name, table))
                })
            }
            Err(e) => Err(e.into()),
        }
    }
}
